//! Row-major / column-major layout helpers
//!
//! Matrices in this crate are stored row-major (`index = row * N + col`).
//! Rendering APIs in the OpenGL/WebGL family read column-major storage, so a
//! matrix is flattened (transposed into a fresh array) right before upload.

/// Write the transpose of the N×N matrix `src` into `dst`:
/// `dst[row * n + col] = src[col * n + row]`.
///
/// Both slices must hold exactly `n * n` components.
pub(crate) fn transpose_into(src: &[f32], dst: &mut [f32], n: usize) {
    debug_assert_eq!(src.len(), n * n);
    debug_assert_eq!(dst.len(), n * n);

    for row in 0..n {
        for col in 0..n {
            dst[row * n + col] = src[col * n + row];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose_3x3() {
        let src = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let mut dst = [0.0; 9];
        transpose_into(&src, &mut dst, 3);
        assert_eq!(dst, [1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0]);
    }

    #[test]
    fn test_transpose_2x2() {
        let src = [1.0, 2.0, 3.0, 4.0];
        let mut dst = [0.0; 4];
        transpose_into(&src, &mut dst, 2);
        assert_eq!(dst, [1.0, 3.0, 2.0, 4.0]);
    }
}
