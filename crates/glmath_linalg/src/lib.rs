//! Vector and Matrix Math for Rendering
//!
//! This crate provides the vectors, matrices and transform builders a
//! real-time renderer needs, stored row-major and flattened to column-major
//! right before they reach the graphics API.
//!
//! ## Core Types
//!
//! - [`Vec3`], [`Vec4`] - 3 and 4 component vectors
//! - [`Mat3`], [`Mat4`] - row-major square matrices
//! - [`Value`] - a vector or matrix whose shape is known only at runtime
//!
//! ## Operations
//!
//! - [`transform`] - translate, scale, rotate, look-at and perspective builders
//! - [`value`] - shape-dispatched add/sub/mult/dot/cross/normalize/mid/transpose/flatten/inverse
//! - [`MatrixUniforms`] - flattened matrices laid out for a uniform buffer
//! - [`is_power_of_2`] - texture size check

mod vec3;
mod vec4;
mod mat3;
pub mod mat4;
mod layout;
pub mod error;
pub mod transform;
pub mod value;
pub mod uniforms;
mod util;

pub use vec3::Vec3;
pub use vec4::Vec4;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use error::MathError;
pub use transform::Axis;
pub use value::{Operand, Shape, Value};
pub use uniforms::MatrixUniforms;
pub use util::is_power_of_2;
