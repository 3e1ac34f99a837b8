/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::error::{ColorError, Result};
use crate::utils::mlaf;
use std::ops::{Index, IndexMut, Mul};

/// 3x3 matrix for color space transforms.
///
/// Stored in row-major order: `m[row][col]`, so `M * v` computes
/// `[dot(m[0], v), dot(m[1], v), dot(m[2], v)]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3 {
    pub m: [[f32; 3]; 3],
}

impl Matrix3 {
    #[inline]
    pub const fn new(m: [[f32; 3]; 3]) -> Self {
        Self { m }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    #[inline]
    pub const fn diagonal(d0: f32, d1: f32, d2: f32) -> Self {
        Self {
            m: [[d0, 0.0, 0.0], [0.0, d1, 0.0], [0.0, 0.0, d2]],
        }
    }

    /// Builds a matrix from 9 row-major elements
    pub fn from_row_major(elements: &[f32]) -> Result<Self> {
        match elements {
            [a, b, c, d, e, f, g, h, i] => Ok(Self::new([[*a, *b, *c], [*d, *e, *f], [*g, *h, *i]])),
            _ => Err(ColorError::MatrixElementCount(elements.len())),
        }
    }

    #[inline]
    pub fn to_row_major(&self) -> [f32; 9] {
        let m = &self.m;
        [
            m[0][0], m[0][1], m[0][2], m[1][0], m[1][1], m[1][2], m[2][0], m[2][1], m[2][2],
        ]
    }

    /// Returns M × v
    #[inline]
    pub fn mul_vector(&self, v: [f32; 3]) -> [f32; 3] {
        let m = &self.m;
        [
            mlaf(m[0][2], v[2], mlaf(m[0][1], v[1], m[0][0] * v[0])),
            mlaf(m[1][2], v[2], mlaf(m[1][1], v[1], m[1][0] * v[0])),
            mlaf(m[2][2], v[2], mlaf(m[2][1], v[1], m[2][0] * v[0])),
        ]
    }

    /// Returns self × other
    #[inline]
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = Self::new([[0f32; 3]; 3]);
        for i in 0..3 {
            for j in 0..3 {
                result.m[i][j] = mlaf(
                    self.m[i][2],
                    other.m[2][j],
                    mlaf(self.m[i][1], other.m[1][j], self.m[i][0] * other.m[0][j]),
                );
            }
        }
        result
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        let m = &self.m;
        Self::new([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    #[inline]
    pub fn determinant(&self) -> f32 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Inverts the matrix using the adjugate.
    ///
    /// Fails with [`ColorError::SingularMatrix`] when the determinant is zero or not finite.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            tracing::warn!("Rejecting matrix inversion, determinant {}", det);
            return Err(ColorError::SingularMatrix { determinant: det });
        }

        let inv_det = 1.0 / det;
        let m = &self.m;

        Ok(Self::new([
            [
                (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
            ],
            [
                (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
            ],
            [
                (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
                (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
            ],
        ]))
    }

    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[[f32; 3]; 3]> for Matrix3 {
    fn from(m: [[f32; 3]; 3]) -> Self {
        Self::new(m)
    }
}

impl Index<usize> for Matrix3 {
    type Output = [f32; 3];

    fn index(&self, row: usize) -> &Self::Output {
        &self.m[row]
    }
}

impl IndexMut<usize> for Matrix3 {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        &mut self.m[row]
    }
}

impl Mul for Matrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<[f32; 3]> for Matrix3 {
    type Output = [f32; 3];

    fn mul(self, rhs: [f32; 3]) -> Self::Output {
        self.mul_vector(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xyz_transform::SRGB_TO_XYZ_D65;

    const EPSILON: f32 = 1e-3;

    #[test]
    fn identity_is_neutral() {
        let v = [0.2, 0.4, 0.6];
        assert_eq!(Matrix3::identity().mul_vector(v), v);
        assert!((SRGB_TO_XYZ_D65 * Matrix3::identity()).approx_eq(&SRGB_TO_XYZ_D65, 1e-7));
    }

    #[test]
    fn inverse_times_matrix_is_identity() {
        let matrix = Matrix3::from_row_major(&[
            0.4124, 0.3576, 0.1805, 0.2126, 0.7152, 0.0722, 0.0193, 0.1192, 0.9505,
        ])
        .unwrap();
        let inverse = matrix.inverse().unwrap();
        assert!((matrix * inverse).approx_eq(&Matrix3::identity(), EPSILON));
        assert!((inverse * matrix).approx_eq(&Matrix3::identity(), EPSILON));
    }

    #[test]
    fn singular_matrix_is_rejected() {
        let singular = Matrix3::new([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 1.0]]);
        assert_eq!(singular.determinant(), 0.0);
        assert!(matches!(
            singular.inverse(),
            Err(ColorError::SingularMatrix { .. })
        ));
    }

    #[test]
    fn row_major_needs_nine_elements() {
        assert_eq!(
            Matrix3::from_row_major(&[1.0; 8]),
            Err(ColorError::MatrixElementCount(8))
        );
        let m = Matrix3::from_row_major(&[1., 2., 3., 4., 5., 6., 7., 8., 9.]).unwrap();
        assert_eq!(m[1], [4., 5., 6.]);
        assert_eq!(m.to_row_major(), [1., 2., 3., 4., 5., 6., 7., 8., 9.]);
        assert_eq!(m.transpose()[0], [1., 4., 7.]);
    }

    #[test]
    fn determinant_of_diagonal() {
        assert_eq!(Matrix3::diagonal(2.0, 3.0, 4.0).determinant(), 24.0);
    }

    #[test]
    fn vector_product_is_row_dot_product() {
        let m = Matrix3::new([[1., 2., 3.], [4., 5., 6.], [7., 8., 9.]]);
        assert_eq!(m.mul_vector([1., 1., 1.]), [6., 15., 24.]);
        assert_eq!(m * [1., 0., 0.], [1., 4., 7.]);
        assert_eq!(m * [0., 0., 2.], [6., 12., 18.]);
    }

    #[test]
    fn matrix_product_is_not_commutative() {
        let a = Matrix3::new([[1., 2., 3.], [4., 5., 6.], [7., 8., 9.]]);
        let b = Matrix3::new([[1., 0., 2.], [0., 1., 0.], [3., 0., 1.]]);
        assert_eq!(
            a * b,
            Matrix3::new([[10., 2., 5.], [22., 5., 14.], [34., 8., 23.]])
        );
        assert_eq!(
            b * a,
            Matrix3::new([[15., 18., 21.], [4., 5., 6.], [10., 14., 18.]])
        );
    }
}
