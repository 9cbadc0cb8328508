//! Transformation matrix builders
//!
//! Every builder creates a primitive matrix `P` and returns `P * input`:
//! acting on a column vector, `input` applies first and `P` second.
//!
//! ```
//! use glmath_linalg::{transform, Axis, Mat4, Vec3, Vec4};
//! let m = transform::translate(Mat4::IDENTITY, Vec3::new(1.0, 2.0, 3.0));
//! let m = transform::rotate(m, 90.0, Axis::Y);
//! // Translate first, then rotate about Y
//! let p = m * Vec4::point(0.0, 0.0, 0.0);
//! assert!((p.x - 3.0).abs() < 1e-5 && (p.z + 1.0).abs() < 1e-5);
//! ```
//!
//! Angles are in degrees. Results are row-major; use
//! [`Mat4::flatten`] before handing them to the renderer.

use serde::{Serialize, Deserialize};

use crate::error::MathError;
use crate::{Mat4, Vec3};

/// A coordinate axis usable as a rotation axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector along this axis
    pub const fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

/// Picks the axis whose component is exactly 1, testing x, then y, then z.
/// Only the unit component is inspected, so `(1, 5, 0)` still selects X.
impl TryFrom<Vec3> for Axis {
    type Error = MathError;

    fn try_from(v: Vec3) -> Result<Self, Self::Error> {
        if v.x == 1.0 {
            Ok(Axis::X)
        } else if v.y == 1.0 {
            Ok(Axis::Y)
        } else if v.z == 1.0 {
            Ok(Axis::Z)
        } else {
            log::trace!("rejecting rotation axis {:?}", v);
            Err(MathError::UnsupportedAxis(v))
        }
    }
}

/// Move by `v`: identity with `v` in the last column of rows 0..3
pub fn translate(input: Mat4, v: Vec3) -> Mat4 {
    let mut p = Mat4::IDENTITY;
    p.0[3] = v.x;
    p.0[7] = v.y;
    p.0[11] = v.z;
    p * input
}

/// Scale each axis by the matching component of `v`
pub fn scale(input: Mat4, v: Vec3) -> Mat4 {
    let mut p = Mat4::IDENTITY;
    p.0[0] = v.x;
    p.0[5] = v.y;
    p.0[10] = v.z;
    p * input
}

/// Right-handed rotation by `angle_degrees` about a coordinate axis
pub fn rotate(input: Mat4, angle_degrees: f32, axis: Axis) -> Mat4 {
    let (sn, cs) = angle_degrees.to_radians().sin_cos();
    let mut p = Mat4::IDENTITY;

    match axis {
        Axis::X => {
            p.0[5] = cs;
            p.0[6] = -sn;
            p.0[9] = sn;
            p.0[10] = cs;
        }
        Axis::Y => {
            p.0[0] = cs;
            p.0[2] = sn;
            p.0[8] = -sn;
            p.0[10] = cs;
        }
        Axis::Z => {
            p.0[0] = cs;
            p.0[1] = -sn;
            p.0[4] = sn;
            p.0[5] = cs;
        }
    }

    p * input
}

/// View matrix for a camera at `eye` looking toward `at`.
///
/// Row 2 of the rotation `R` is the unit backward direction `eye - at`.
/// Rows 0 and 1 are `side = forward x normalize(up)` and `side x forward`,
/// which are not renormalized: they are unit length only when `up` is
/// perpendicular to `at - eye`, and shrink by the sine of the angle between
/// them otherwise. The result is `translate(R, -eye)`, i.e. `T(-eye) * R`, so
/// the translation applies after the rotation.
/// `up` need not be unit length but must not be parallel to `at - eye`.
pub fn look_at(at: Vec3, eye: Vec3, up: Vec3) -> Mat4 {
    let forward = (at - eye).normalized();
    let side = forward.cross(up.normalized());
    let true_up = side.cross(forward);

    let rotation = Mat4::from_rows([
        [side.x, side.y, side.z, 0.0],
        [true_up.x, true_up.y, true_up.z, 0.0],
        [-forward.x, -forward.y, -forward.z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    translate(rotation, -eye)
}

/// Perspective projection (OpenGL clip space, z in [-w, w]).
///
/// `y_fov_degrees` is the full vertical field of view.
pub fn perspective(y_fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (y_fov_degrees.to_radians() / 2.0).tan();

    let mut m = Mat4::ZERO;
    m.0[0] = f / aspect;
    m.0[5] = f;
    m.0[10] = -(far + near) / (far - near);
    m.0[11] = -2.0 * far * near / (far - near);
    m.0[14] = -1.0;
    m
}
