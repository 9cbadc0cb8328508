//! 3x3 matrix
//!
//! Only construction and layout operations are provided for 3x3 matrices;
//! products and inversion exist for [`Mat4`](crate::Mat4) alone.

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::layout::transpose_into;

/// 3x3 matrix, row-major (`index = row * 3 + col`)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Mat3(pub [f32; 9]);

impl Mat3 {
    /// All-zero matrix
    pub const ZERO: Self = Self([0.0; 9]);

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
            s, 0.0, 0.0,
            0.0, s, 0.0,
            0.0, 0.0, s,
        ])
    }

    /// Build from rows
    pub const fn from_rows(rows: [[f32; 3]; 3]) -> Self {
        let [r0, r1, r2] = rows;
        Self([
            r0[0], r0[1], r0[2],
            r1[0], r1[1], r1[2],
            r2[0], r2[1], r2[2],
        ])
    }

    /// Element at (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.0[row * 3 + col]
    }

    /// Row-major components
    #[inline]
    pub fn as_array(&self) -> &[f32; 9] {
        &self.0
    }

    /// Swap rows and columns
    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 9];
        transpose_into(&self.0, &mut out, 3);
        Self(out)
    }

    /// Column-major components, ready for a rendering API
    pub fn flatten(&self) -> [f32; 9] {
        self.transpose().0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Mat3 {
        Mat3::from_rows([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
        ])
    }

    #[test]
    fn test_zero() {
        assert_eq!(Mat3::zero(), Mat3([0.0; 9]));
        assert_eq!(Mat3::default(), Mat3::ZERO);
    }

    #[test]
    fn test_scalar_diagonal() {
        let m = Mat3::from_scalar_diagonal(2.5);
        for row in 0..3 {
            for col in 0..3 {
                let expected = if row == col { 2.5 } else { 0.0 };
                assert_eq!(m.get(row, col), expected);
            }
        }
        assert_eq!(Mat3::from_scalar_diagonal(1.0), Mat3::IDENTITY);
    }

    #[test]
    fn test_transpose() {
        let t = sample().transpose();
        assert_eq!(t.as_array(), &[1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0]);
        assert_eq!(t.transpose(), sample());
    }

    #[test]
    fn test_flatten_is_column_major() {
        let m = sample();
        let flat = m.flatten();
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(flat[col * 3 + row], m.get(row, col));
            }
        }
    }
}
