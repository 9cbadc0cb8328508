//! Shape-polymorphic values
//!
//! The typed API ([`Vec3`], [`Vec4`], [`Mat3`], [`Mat4`]) checks shapes at
//! compile time. [`Value`] is the dynamic counterpart for data whose shape is
//! only known from its component count, such as a flat array read from a
//! scene file: it dispatches each operation on the pair of shapes and reports
//! unsupported pairs as a [`MathError`].

use std::fmt;

use serde::{Serialize, Deserialize};

use crate::error::MathError;
use crate::layout::transpose_into;
use crate::{Mat3, Mat4, Vec3, Vec4};

/// The four supported shapes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Vec3,
    Vec4,
    Mat3,
    Mat4,
}

impl Shape {
    /// Infer a shape from a component count
    pub fn from_len(len: usize) -> Result<Self, MathError> {
        match len {
            3 => Ok(Shape::Vec3),
            4 => Ok(Shape::Vec4),
            9 => Ok(Shape::Mat3),
            16 => Ok(Shape::Mat4),
            _ => Err(MathError::InvalidLength(len)),
        }
    }

    /// Number of components
    pub const fn len(self) -> usize {
        match self {
            Shape::Vec3 => 3,
            Shape::Vec4 => 4,
            Shape::Mat3 => 9,
            Shape::Mat4 => 16,
        }
    }

    /// Vec3 or Vec4
    pub const fn is_vector(self) -> bool {
        matches!(self, Shape::Vec3 | Shape::Vec4)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::Vec3 => "Vec3",
            Shape::Vec4 => "Vec4",
            Shape::Mat3 => "Mat3",
            Shape::Mat4 => "Mat4",
        };
        f.write_str(name)
    }
}

/// A vector or matrix whose shape is carried as a tag
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Vec3(Vec3),
    Vec4(Vec4),
    Mat3(Mat3),
    Mat4(Mat4),
}

/// Left operand of [`mult`]: a scalar or a value
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand {
    Scalar(f32),
    Value(Value),
}

impl Value {
    /// Build a value from a flat sequence, inferring the shape from its length
    pub fn from_slice(components: &[f32]) -> Result<Self, MathError> {
        let value = match Shape::from_len(components.len())? {
            Shape::Vec3 => Value::Vec3(Vec3::new(components[0], components[1], components[2])),
            Shape::Vec4 => Value::Vec4(Vec4::new(
                components[0],
                components[1],
                components[2],
                components[3],
            )),
            Shape::Mat3 => {
                let mut m = [0.0; 9];
                m.copy_from_slice(components);
                Value::Mat3(Mat3(m))
            }
            Shape::Mat4 => {
                let mut m = [0.0; 16];
                m.copy_from_slice(components);
                Value::Mat4(Mat4(m))
            }
        };
        Ok(value)
    }

    pub fn shape(&self) -> Shape {
        match self {
            Value::Vec3(_) => Shape::Vec3,
            Value::Vec4(_) => Shape::Vec4,
            Value::Mat3(_) => Shape::Mat3,
            Value::Mat4(_) => Shape::Mat4,
        }
    }

    /// Components in storage order (row-major for matrices)
    pub fn as_slice(&self) -> &[f32] {
        match self {
            Value::Vec3(v) => bytemuck::cast_slice(std::slice::from_ref(v)),
            Value::Vec4(v) => bytemuck::cast_slice(std::slice::from_ref(v)),
            Value::Mat3(m) => &m.0,
            Value::Mat4(m) => &m.0,
        }
    }

    fn as_mut_slice(&mut self) -> &mut [f32] {
        match self {
            Value::Vec3(v) => bytemuck::cast_slice_mut(std::slice::from_mut(v)),
            Value::Vec4(v) => bytemuck::cast_slice_mut(std::slice::from_mut(v)),
            Value::Mat3(m) => &mut m.0,
            Value::Mat4(m) => &mut m.0,
        }
    }

    /// Apply `f` to every component, keeping the shape
    fn map(mut self, f: impl Fn(f32) -> f32) -> Self {
        self.as_mut_slice().iter_mut().for_each(|c| *c = f(*c));
        self
    }

    /// Combine two same-shaped values component by component
    fn zip_with(mut self, other: Self, f: impl Fn(f32, f32) -> f32) -> Result<Self, MathError> {
        let (left, right) = (self.shape(), other.shape());
        if left != right {
            return Err(MathError::DimensionMismatch { left, right });
        }

        for (a, b) in self.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *a = f(*a, *b);
        }
        Ok(self)
    }
}

impl From<Vec3> for Value {
    fn from(v: Vec3) -> Self {
        Value::Vec3(v)
    }
}

impl From<Vec4> for Value {
    fn from(v: Vec4) -> Self {
        Value::Vec4(v)
    }
}

impl From<Mat3> for Value {
    fn from(m: Mat3) -> Self {
        Value::Mat3(m)
    }
}

impl From<Mat4> for Value {
    fn from(m: Mat4) -> Self {
        Value::Mat4(m)
    }
}

impl From<f32> for Operand {
    fn from(s: f32) -> Self {
        Operand::Scalar(s)
    }
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        Operand::Value(v)
    }
}

macro_rules! operand_from_typed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(v: $ty) -> Self {
                    Operand::Value(v.into())
                }
            }
        )*
    };
}

operand_from_typed!(Vec3, Vec4, Mat3, Mat4);

/// Componentwise sum of two values of the same shape
pub fn add(u: Value, v: Value) -> Result<Value, MathError> {
    u.zip_with(v, |a, b| a + b)
}

/// Componentwise difference of two values of the same shape
pub fn sub(u: Value, v: Value) -> Result<Value, MathError> {
    u.zip_with(v, |a, b| a - b)
}

/// Product dispatched on the operand shapes:
///
/// | `u`    | `v`   | result                        |
/// |--------|-------|-------------------------------|
/// | Vec3   | Vec3  | componentwise product         |
/// | Vec4   | Vec4  | componentwise product         |
/// | Mat4   | Vec4  | matrix–vector product         |
/// | Mat4   | Mat4  | matrix–matrix product         |
/// | scalar | any   | every component scaled        |
///
/// Anything else, including any 3x3 matrix product, is
/// [`MathError::IncompatibleOperands`].
pub fn mult(u: impl Into<Operand>, v: Value) -> Result<Value, MathError> {
    let u = match u.into() {
        Operand::Scalar(s) => return Ok(v.map(|c| c * s)),
        Operand::Value(u) => u,
    };

    match (u, v) {
        (Value::Vec3(a), Value::Vec3(b)) => Ok(Value::Vec3(a.component_mul(b))),
        (Value::Vec4(a), Value::Vec4(b)) => Ok(Value::Vec4(a.component_mul(b))),
        (Value::Mat4(m), Value::Vec4(b)) => Ok(Value::Vec4(m * b)),
        (Value::Mat4(a), Value::Mat4(b)) => Ok(Value::Mat4(a * b)),
        (u, v) => Err(MathError::IncompatibleOperands { left: u.shape(), right: v.shape() }),
    }
}

/// Sum of componentwise products; any two values of the same shape
pub fn dot(u: Value, v: Value) -> Result<f32, MathError> {
    let (left, right) = (u.shape(), v.shape());
    if left != right {
        return Err(MathError::DimensionMismatch { left, right });
    }

    Ok(u.as_slice().iter().zip(v.as_slice()).fold(0.0, |acc, (a, b)| acc + a * b))
}

/// Cross product of the first three components of each operand
pub fn cross(u: Value, v: Value) -> Vec3 {
    let (a, b) = (u.as_slice(), v.as_slice());
    Vec3::new(a[0], a[1], a[2]).cross(Vec3::new(b[0], b[1], b[2]))
}

/// Divide every component of a vector by its length.
///
/// Both vector shapes are accepted; a Vec4 is scaled by its 4-component
/// length, w included.
pub fn normalize(u: Value) -> Result<Value, MathError> {
    if !u.shape().is_vector() {
        return Err(MathError::NotAVector(u.shape()));
    }

    let len = dot(u, u)?.sqrt();
    Ok(u.map(|c| c / len))
}

/// Componentwise average of two vectors of the same shape
///
/// Mismatched shapes are reported before a matrix pair.
pub fn mid(u: Value, v: Value) -> Result<Value, MathError> {
    let shape = u.shape();
    if shape == v.shape() && !shape.is_vector() {
        return Err(MathError::NotAVector(shape));
    }

    u.zip_with(v, |a, b| a * 0.5 + b * 0.5)
}

/// Transpose a square matrix of either size
pub fn transpose(m: Value) -> Result<Value, MathError> {
    match m {
        Value::Mat3(m) => Ok(Value::Mat3(m.transpose())),
        Value::Mat4(m) => Ok(Value::Mat4(m.transpose())),
        other => Err(MathError::NotAMatrix(other.shape())),
    }
}

/// Column-major components of a square matrix, for a rendering API
pub fn flatten(m: Value) -> Result<Vec<f32>, MathError> {
    let n = match m {
        Value::Mat3(_) => 3,
        Value::Mat4(_) => 4,
        other => return Err(MathError::NotAMatrix(other.shape())),
    };

    let mut out = vec![0.0; n * n];
    transpose_into(m.as_slice(), &mut out, n);
    Ok(out)
}

/// Inverse of a 4x4 matrix.
///
/// `Ok(None)` means the matrix is singular; any other shape, a Mat3
/// included, is [`MathError::NotAMat4`].
pub fn inverse(m: Value) -> Result<Option<Value>, MathError> {
    match m {
        Value::Mat4(m) => Ok(m.inverse().map(Value::Mat4)),
        other => Err(MathError::NotAMat4(other.shape())),
    }
}
