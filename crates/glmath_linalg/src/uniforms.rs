//! GPU-ready matrix block
//!
//! Holds flattened (column-major) matrices in a `#[repr(C)]` layout that can
//! be copied byte for byte into a uniform buffer.

use bytemuck::{Pod, Zeroable};

use crate::Mat4;

/// Column-major model, view and projection matrices
/// Layout: 192 bytes total, each matrix as 4 columns of 4 floats
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct MatrixUniforms {
    /// Model matrix (64 bytes)
    pub model: [[f32; 4]; 4],
    /// View matrix (64 bytes)
    pub view: [[f32; 4]; 4],
    /// Projection matrix (64 bytes)
    pub projection: [[f32; 4]; 4],
}

/// Flatten a row-major matrix into four columns
fn columns(m: &Mat4) -> [[f32; 4]; 4] {
    bytemuck::cast(m.flatten())
}

impl MatrixUniforms {
    /// Flatten row-major matrices for upload
    pub fn new(model: &Mat4, view: &Mat4, projection: &Mat4) -> Self {
        Self {
            model: columns(model),
            view: columns(view),
            projection: columns(projection),
        }
    }

    /// Raw bytes for a buffer write
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Default for MatrixUniforms {
    fn default() -> Self {
        Self::new(&Mat4::IDENTITY, &Mat4::IDENTITY, &Mat4::IDENTITY)
    }
}
