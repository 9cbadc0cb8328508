//! 4x4 matrix
//!
//! Storage is row-major (`index = row * 4 + col`) and vectors are treated as
//! columns on the right: `m * v` takes the dot product of each row with `v`.
//! Call [`Mat4::flatten`] to get the column-major array a rendering API
//! expects.

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::layout::transpose_into;
use crate::Vec4;

/// 4x4 matrix, row-major (`index = row * 4 + col`)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Mat4(pub [f32; 16]);

impl Mat4 {
    /// All-zero matrix
    pub const ZERO: Self = Self([0.0; 16]);

    /// Identity matrix
    pub const IDENTITY: Self = Self::from_scalar_diagonal(1.0);

    /// All-zero matrix
    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// `s` on the diagonal, zero elsewhere
    pub const fn from_scalar_diagonal(s: f32) -> Self {
        Self([
            s, 0.0, 0.0, 0.0,
            0.0, s, 0.0, 0.0,
            0.0, 0.0, s, 0.0,
            0.0, 0.0, 0.0, s,
        ])
    }

    /// Build from rows
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        let [r0, r1, r2, r3] = rows;
        Self([
            r0[0], r0[1], r0[2], r0[3],
            r1[0], r1[1], r1[2], r1[3],
            r2[0], r2[1], r2[2], r2[3],
            r3[0], r3[1], r3[2], r3[3],
        ])
    }

    /// Element at (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.0[row * 4 + col]
    }

    /// A row as a vector
    #[inline]
    pub fn row(&self, row: usize) -> Vec4 {
        let i = row * 4;
        Vec4::new(self.0[i], self.0[i + 1], self.0[i + 2], self.0[i + 3])
    }

    /// Row-major components
    #[inline]
    pub fn as_array(&self) -> &[f32; 16] {
        &self.0
    }

    /// Swap rows and columns
    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 16];
        transpose_into(&self.0, &mut out, 4);
        Self(out)
    }

    /// Column-major components, ready for a rendering API.
    ///
    /// Numerically this is the transpose; the result is typed as a plain
    /// array because it is no longer a row-major `Mat4`.
    pub fn flatten(&self) -> [f32; 16] {
        self.transpose().0
    }

    /// Unscaled cofactor (adjugate) matrix, row-major.
    fn adjugate(&self) -> [f32; 16] {
        let m = &self.0;
        let mut inv = [0.0f32; 16];

        inv[0] = m[5] * m[10] * m[15] - m[5] * m[11] * m[14] - m[9] * m[6] * m[15]
            + m[9] * m[7] * m[14] + m[13] * m[6] * m[11] - m[13] * m[7] * m[10];

        inv[4] = -m[4] * m[10] * m[15] + m[4] * m[11] * m[14] + m[8] * m[6] * m[15]
            - m[8] * m[7] * m[14] - m[12] * m[6] * m[11] + m[12] * m[7] * m[10];

        inv[8] = m[4] * m[9] * m[15] - m[4] * m[11] * m[13] - m[8] * m[5] * m[15]
            + m[8] * m[7] * m[13] + m[12] * m[5] * m[11] - m[12] * m[7] * m[9];

        inv[12] = -m[4] * m[9] * m[14] + m[4] * m[10] * m[13] + m[8] * m[5] * m[14]
            - m[8] * m[6] * m[13] - m[12] * m[5] * m[10] + m[12] * m[6] * m[9];

        inv[1] = -m[1] * m[10] * m[15] + m[1] * m[11] * m[14] + m[9] * m[2] * m[15]
            - m[9] * m[3] * m[14] - m[13] * m[2] * m[11] + m[13] * m[3] * m[10];

        inv[5] = m[0] * m[10] * m[15] - m[0] * m[11] * m[14] - m[8] * m[2] * m[15]
            + m[8] * m[3] * m[14] + m[12] * m[2] * m[11] - m[12] * m[3] * m[10];

        inv[9] = -m[0] * m[9] * m[15] + m[0] * m[11] * m[13] + m[8] * m[1] * m[15]
            - m[8] * m[3] * m[13] - m[12] * m[1] * m[11] + m[12] * m[3] * m[9];

        inv[13] = m[0] * m[9] * m[14] - m[0] * m[10] * m[13] - m[8] * m[1] * m[14]
            + m[8] * m[2] * m[13] + m[12] * m[1] * m[10] - m[12] * m[2] * m[9];

        inv[2] = m[1] * m[6] * m[15] - m[1] * m[7] * m[14] - m[5] * m[2] * m[15]
            + m[5] * m[3] * m[14] + m[13] * m[2] * m[7] - m[13] * m[3] * m[6];

        inv[6] = -m[0] * m[6] * m[15] + m[0] * m[7] * m[14] + m[4] * m[2] * m[15]
            - m[4] * m[3] * m[14] - m[12] * m[2] * m[7] + m[12] * m[3] * m[6];

        inv[10] = m[0] * m[5] * m[15] - m[0] * m[7] * m[13] - m[4] * m[1] * m[15]
            + m[4] * m[3] * m[13] + m[12] * m[1] * m[7] - m[12] * m[3] * m[5];

        inv[14] = -m[0] * m[5] * m[14] + m[0] * m[6] * m[13] + m[4] * m[1] * m[14]
            - m[4] * m[2] * m[13] - m[12] * m[1] * m[6] + m[12] * m[2] * m[5];

        inv[3] = -m[1] * m[6] * m[11] + m[1] * m[7] * m[10] + m[5] * m[2] * m[11]
            - m[5] * m[3] * m[10] - m[9] * m[2] * m[7] + m[9] * m[3] * m[6];

        inv[7] = m[0] * m[6] * m[11] - m[0] * m[7] * m[10] - m[4] * m[2] * m[11]
            + m[4] * m[3] * m[10] + m[8] * m[2] * m[7] - m[8] * m[3] * m[6];

        inv[11] = -m[0] * m[5] * m[11] + m[0] * m[7] * m[9] + m[4] * m[1] * m[11]
            - m[4] * m[3] * m[9] - m[8] * m[1] * m[7] + m[8] * m[3] * m[5];

        inv[15] = m[0] * m[5] * m[10] - m[0] * m[6] * m[9] - m[4] * m[1] * m[10]
            + m[4] * m[2] * m[9] + m[8] * m[1] * m[6] - m[8] * m[2] * m[5];

        inv
    }

    /// Determinant, expanded along row 0 against the adjugate's column 0
    fn determinant_with(&self, adj: &[f32; 16]) -> f32 {
        let m = &self.0;
        m[0] * adj[0] + m[1] * adj[4] + m[2] * adj[8] + m[3] * adj[12]
    }

    /// Determinant
    pub fn determinant(&self) -> f32 {
        self.determinant_with(&self.adjugate())
    }

    /// Inverse by cofactor expansion.
    ///
    /// Returns `None` when the determinant is exactly zero. No tolerance is
    /// applied, so nearly singular matrices still produce (large) results.
    pub fn inverse(&self) -> Option<Self> {
        let adj = self.adjugate();
        let det = self.determinant_with(&adj);

        if det == 0.0 {
            log::debug!("Mat4::inverse: determinant is zero, matrix is singular");
            return None;
        }

        let inv_det = 1.0 / det;
        Some(Self(adj.map(|c| c * inv_det)))
    }
}

impl std::ops::Index<usize> for Mat4 {
    type Output = f32;
    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

impl std::ops::Add for Mat4 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        let mut out = self.0;
        for (a, b) in out.iter_mut().zip(other.0) {
            *a += b;
        }
        Self(out)
    }
}

impl std::ops::Sub for Mat4 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        let mut out = self.0;
        for (a, b) in out.iter_mut().zip(other.0) {
            *a -= b;
        }
        Self(out)
    }
}

/// Row-major product: `result[i][j] = Σk a[i][k] * b[k][j]`
impl std::ops::Mul for Mat4 {
    type Output = Self;
    #[allow(clippy::needless_range_loop)]
    fn mul(self, other: Self) -> Self {
        let a = &self.0;
        let b = &other.0;
        let mut out = [0.0f32; 16];

        for i in (0..16).step_by(4) {
            for j in 0..4 {
                out[i + j] =
                    a[i] * b[j] + a[i + 1] * b[4 + j] + a[i + 2] * b[8 + j] + a[i + 3] * b[12 + j];
            }
        }

        Self(out)
    }
}

/// Each row dotted with `v`
impl std::ops::Mul<Vec4> for Mat4 {
    type Output = Vec4;
    fn mul(self, v: Vec4) -> Vec4 {
        Vec4::new(
            self.row(0).dot(v),
            self.row(1).dot(v),
            self.row(2).dot(v),
            self.row(3).dot(v),
        )
    }
}

impl std::ops::Mul<f32> for Mat4 {
    type Output = Self;
    fn mul(self, scalar: f32) -> Self {
        Self(self.0.map(|c| c * scalar))
    }
}

impl std::ops::Mul<Mat4> for f32 {
    type Output = Mat4;
    fn mul(self, m: Mat4) -> Mat4 {
        m * self
    }
}
