//! glmath - Vector and matrix math for a real-time rendering pipeline
//!
//! Re-exports the [`glmath_linalg`] crate and adds file/env based
//! configuration for the camera, projection and model transforms.

pub mod config;

pub use glmath_linalg::*;
