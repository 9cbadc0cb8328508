//! Algebraic properties checked over a fixed set of sample values

use glmath_linalg::{is_power_of_2, transform, value, Axis, Mat3, Mat4, Value, Vec3, Vec4};

const EPSILON: f32 = 0.001;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON * (1.0 + a.abs().max(b.abs()))
}

fn mat_approx_eq(a: &Mat4, b: &Mat4) -> bool {
    a.as_array().iter().zip(b.as_array()).all(|(x, y)| approx_eq(*x, *y))
}

/// Deterministic, well-conditioned sample matrices
fn sample_matrices() -> Vec<Mat4> {
    let mut out = vec![
        Mat4::IDENTITY,
        Mat4::from_scalar_diagonal(3.0),
        Mat4::from_rows([
            [2.0, 0.0, 1.0, 3.0],
            [1.0, 3.0, 0.0, -1.0],
            [0.0, 1.0, 4.0, 2.0],
            [1.0, 0.0, 0.0, 1.0],
        ]),
        transform::perspective(60.0, 16.0 / 9.0, 0.1, 100.0),
        transform::look_at(Vec3::ZERO, Vec3::new(2.0, 3.0, 4.0), Vec3::Y),
    ];

    let mut m = Mat4::IDENTITY;
    for (i, axis) in [Axis::X, Axis::Y, Axis::Z].into_iter().enumerate() {
        let step = i as f32 + 1.0;
        m = transform::rotate(m, 17.0 * step, axis);
        m = transform::translate(m, Vec3::new(step, -step, 0.5 * step));
        m = transform::scale(m, Vec3::new(1.0 + step, 2.0, 0.5));
        out.push(m);
    }
    out
}

fn sample_vec4s() -> Vec<Vec4> {
    vec![
        Vec4::ZERO,
        Vec4::new(1.0, 2.0, 3.0, 4.0),
        Vec4::new(-0.5, 0.25, 8.0, 1.0),
        Vec4::point(3.0, -7.0, 2.5),
    ]
}

#[test]
fn add_then_sub_restores_operand() {
    let vec3s = [Vec3::new(1.0, 2.0, 3.0), Vec3::new(-4.5, 0.0, 0.1)];
    for u in vec3s {
        for v in vec3s {
            let back = value::sub(value::add(u.into(), v.into()).unwrap(), v.into()).unwrap();
            for (a, b) in back.as_slice().iter().zip(u.to_array()) {
                assert!(approx_eq(*a, b));
            }
        }
    }

    for u in sample_vec4s() {
        for v in sample_vec4s() {
            let back = (u + v) - v;
            for (a, b) in back.to_array().into_iter().zip(u.to_array()) {
                assert!(approx_eq(a, b), "{:?} + {:?} - {:?} = {:?}", u, v, v, back);
            }
        }
    }
}

#[test]
fn matrix_product_is_associative() {
    let ms = sample_matrices();
    for a in &ms {
        for b in &ms {
            for c in &ms {
                let left = (*a * *b) * *c;
                let right = *a * (*b * *c);
                assert!(mat_approx_eq(&left, &right), "{:?}\nvs\n{:?}", left, right);
            }
        }
    }
}

#[test]
fn transpose_is_an_involution() {
    for m in sample_matrices() {
        assert_eq!(m.transpose().transpose(), m);
    }

    let m3 = Mat3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    assert_eq!(m3.transpose().transpose(), m3);
}

#[test]
fn inverse_round_trips_to_identity() {
    for m in sample_matrices() {
        let inv = m.inverse().expect("sample matrices are invertible");
        assert!(mat_approx_eq(&(m * inv), &Mat4::IDENTITY), "m * inv(m) for {:?}", m);
    }
}

#[test]
fn singular_matrices_have_no_inverse() {
    assert!(Mat4::ZERO.inverse().is_none());
    // Projection onto the xy plane
    assert!(transform::scale(Mat4::IDENTITY, Vec3::new(1.0, 1.0, 0.0)).inverse().is_none());
    assert_eq!(value::inverse(Value::Mat4(Mat4::ZERO)), Ok(None));
}

#[test]
fn identity_leaves_vectors_unchanged() {
    for v in sample_vec4s() {
        assert_eq!(Mat4::from_scalar_diagonal(1.0) * v, v);
        assert_eq!(value::mult(Mat4::IDENTITY, v.into()), Ok(Value::Vec4(v)));
    }
}

#[test]
fn translate_moves_origin() {
    let m = transform::translate(Mat4::from_scalar_diagonal(1.0), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(m * Vec4::new(0.0, 0.0, 0.0, 1.0), Vec4::new(1.0, 2.0, 3.0, 1.0));
}

#[test]
fn rotate_about_y_is_right_handed() {
    let axis = Axis::try_from(Vec3::new(0.0, 1.0, 0.0)).unwrap();
    let m = transform::rotate(Mat4::IDENTITY, 90.0, axis);
    let p = m * Vec4::new(1.0, 0.0, 0.0, 1.0);
    assert!(approx_eq(p.x, 0.0) && approx_eq(p.y, 0.0) && approx_eq(p.z, -1.0) && p.w == 1.0);
}

#[test]
fn power_of_two_check() {
    assert!(is_power_of_2(8));
    assert!(!is_power_of_2(5));
    // Zero is rejected rather than following the bare bit trick
    assert!(!is_power_of_2(0));
}

#[test]
fn perspective_coefficients() {
    let (near, far) = (1.0, 100.0);
    let m = transform::perspective(90.0, 1.0, near, far);
    assert!(approx_eq(m[0], 1.0));
    assert!(approx_eq(m[5], 1.0));
    assert!(approx_eq(m[10], -(far + near) / (far - near)));
    assert!(approx_eq(m[11], -2.0 * far * near / (far - near)));
    assert_eq!(m[14], -1.0);
}

#[test]
fn flatten_feeds_column_major_consumers() {
    // A column-major reader finds element (row, col) at col * 4 + row
    for m in sample_matrices() {
        let flat = m.flatten();
        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(flat[col * 4 + row], m.get(row, col));
            }
        }
        assert_eq!(value::flatten(Value::Mat4(m)).unwrap(), flat.to_vec());
    }
}

#[test]
fn typed_and_dynamic_products_agree() {
    let ms = sample_matrices();
    for a in &ms {
        for b in &ms {
            assert_eq!(value::mult(*a, Value::Mat4(*b)), Ok(Value::Mat4(*a * *b)));
        }
        for v in sample_vec4s() {
            assert_eq!(value::mult(*a, Value::Vec4(v)), Ok(Value::Vec4(*a * v)));
        }
    }
}
