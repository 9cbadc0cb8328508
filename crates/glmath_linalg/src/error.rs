//! Math error types
//!
//! Errors here signal misuse (mismatched or unsupported operand shapes).
//! A singular matrix is not an error: [`Mat4::inverse`](crate::Mat4::inverse)
//! reports it as `None`.

use std::fmt;

use crate::value::Shape;
use crate::Vec3;

/// Error type for shape-checked operations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    /// Operands of an elementwise operation have different sizes
    DimensionMismatch { left: Shape, right: Shape },
    /// `mult` was given a shape combination it has no product for
    IncompatibleOperands { left: Shape, right: Shape },
    /// A vector-only operation received a matrix
    NotAVector(Shape),
    /// A matrix-only operation received a vector
    NotAMatrix(Shape),
    /// Only 4x4 matrices can be inverted
    NotAMat4(Shape),
    /// A flat sequence whose length matches no known shape
    InvalidLength(usize),
    /// A rotation axis that is not one of the three unit basis vectors
    UnsupportedAxis(Vec3),
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::DimensionMismatch { left, right } => write!(
                f,
                "Cannot perform operation on vectors/matrices of different sizes: {} ({} components) vs {} ({} components)",
                left,
                left.len(),
                right,
                right.len()
            ),
            MathError::IncompatibleOperands { left, right } => {
                write!(f, "Incompatible matrix/vector multiplication: {} * {}", left, right)
            }
            MathError::NotAVector(shape) => write!(f, "Expected a vector, got {}", shape),
            MathError::NotAMatrix(shape) => write!(f, "Expected a square matrix, got {}", shape),
            MathError::NotAMat4(shape) => write!(f, "Only 4x4 matrices can be inverted, got {}", shape),
            MathError::InvalidLength(len) => write!(
                f,
                "No vector or matrix has {} components (expected 3, 4, 9 or 16)",
                len
            ),
            MathError::UnsupportedAxis(v) => write!(
                f,
                "Rotation axis ({}, {}, {}) is not a unit basis vector",
                v.x, v.y, v.z
            ),
        }
    }
}

impl std::error::Error for MathError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = MathError::DimensionMismatch { left: Shape::Vec3, right: Shape::Mat4 };
        let msg = format!("{}", err);
        assert!(msg.contains("different sizes"));
        assert!(msg.contains("Vec3"));
        assert!(msg.contains("16 components"));
    }

    #[test]
    fn test_incompatible_operands_display() {
        let err = MathError::IncompatibleOperands { left: Shape::Mat3, right: Shape::Vec3 };
        let msg = format!("{}", err);
        assert!(msg.contains("Incompatible"));
        assert!(msg.contains("Mat3 * Vec3"));
    }

    #[test]
    fn test_not_a_mat4_display() {
        let msg = format!("{}", MathError::NotAMat4(Shape::Mat3));
        assert_eq!(msg, "Only 4x4 matrices can be inverted, got Mat3");
    }

    #[test]
    fn test_invalid_length_display() {
        let msg = format!("{}", MathError::InvalidLength(5));
        assert!(msg.contains("5 components"));
    }

    #[test]
    fn test_unsupported_axis_display() {
        let msg = format!("{}", MathError::UnsupportedAxis(Vec3::new(1.0, 1.0, 0.0)));
        assert!(msg.contains("(1, 1, 0)"));
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&MathError::NotAVector(Shape::Mat4));
    }
}
