/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::euclidean::EuclideanDistance;
use crate::gamma_curves::TransferFunction;
use crate::matrix::Matrix3;
use crate::rgb::Rgb;
use crate::xyy::Xyy;
use crate::xyz_transform::{SRGB_TO_XYZ_D65, XYZ_TO_SRGB_D65};
use erydanos::Euclidean3DDistance;
use std::ops::Index;

/// A CIE 1931 XYZ color.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Xyz {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Converts linear RGB to XYZ, computes `matrix * rgb`.
///
/// The matrix is not validated and values are not clamped.
#[inline]
pub fn convert_rgb_to_xyz(rgb: Rgb<f32>, matrix: &Matrix3) -> Xyz {
    Xyz::from_linear_rgb(rgb, matrix)
}

/// Converts XYZ to linear RGB, computes `inverse_matrix * xyz`.
///
/// `inverse_matrix` must already be inverted, for example `XYZ_TO_SRGB_D65`
/// or the result of [`Matrix3::inverse`].
#[inline]
pub fn convert_xyz_to_rgb(xyz: Xyz, inverse_matrix: &Matrix3) -> Rgb<f32> {
    xyz.to_linear_rgb(inverse_matrix)
}

impl Xyz {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn to_xyy(&self) -> Xyy {
        Xyy::from_xyz(*self)
    }
}

static XYZ_SCALE_U8: f32 = 1f32 / 255f32;

impl Xyz {
    /// This functions always use sRGB transfer function and sRGB primaries with D65 White point
    #[inline]
    pub fn from_srgb(rgb: Rgb<u8>) -> Self {
        Xyz::from_rgb(rgb, &SRGB_TO_XYZ_D65, TransferFunction::Srgb)
    }

    /// This function converts from non-linear RGB components to XYZ
    /// # Arguments
    /// * `matrix` - Transformation matrix from RGB to XYZ, for example `SRGB_TO_XYZ_D65`
    /// * `transfer_function` - Transfer functions for current colorspace
    #[inline]
    pub fn from_rgb(rgb: Rgb<u8>, matrix: &Matrix3, transfer_function: TransferFunction) -> Self {
        let linear = Rgb::<f32>::new(
            rgb.r as f32 * XYZ_SCALE_U8,
            rgb.g as f32 * XYZ_SCALE_U8,
            rgb.b as f32 * XYZ_SCALE_U8,
        )
        .linearize(transfer_function);
        Xyz::from_linear_rgb(linear, matrix)
    }

    /// This function converts from linear RGB components to XYZ
    /// # Arguments
    /// * `matrix` - Transformation matrix from RGB to XYZ, for example `SRGB_TO_XYZ_D65`
    #[inline]
    pub fn from_linear_rgb(rgb: Rgb<f32>, matrix: &Matrix3) -> Self {
        let [x, y, z] = matrix.mul_vector([rgb.r, rgb.g, rgb.b]);
        Self::new(x, y, z)
    }
}

impl Xyz {
    /// This functions always use sRGB transfer function and sRGB primaries with D65 White point
    #[inline]
    pub fn to_srgb(&self) -> Rgb<u8> {
        self.to_rgb(&XYZ_TO_SRGB_D65, TransferFunction::Srgb)
    }

    /// This function converts XYZ to gamma encoded 8 bit RGB
    /// # Arguments
    /// * `matrix` - Transformation matrix from XYZ to RGB, for example `XYZ_TO_SRGB_D65`
    /// * `transfer_function` - Transfer functions for current colorspace
    #[inline]
    pub fn to_rgb(&self, matrix: &Matrix3, transfer_function: TransferFunction) -> Rgb<u8> {
        self.to_linear_rgb(matrix).gamma(transfer_function).to_u8()
    }

    /// This function converts XYZ to linear RGB
    /// # Arguments
    /// * `matrix` - Transformation matrix from XYZ to RGB, for example `XYZ_TO_SRGB_D65`
    #[inline]
    pub fn to_linear_rgb(&self, matrix: &Matrix3) -> Rgb<f32> {
        let [r, g, b] = matrix.mul_vector([self.x, self.y, self.z]);
        Rgb::<f32>::new(r, g, b)
    }
}

impl EuclideanDistance for Xyz {
    fn euclidean_distance(&self, other: Xyz) -> f32 {
        (self.x - other.x).hypot3(self.y - other.y, self.z - other.z)
    }
}

impl From<[f32; 3]> for Xyz {
    #[inline]
    fn from(value: [f32; 3]) -> Self {
        Xyz::new(value[0], value[1], value[2])
    }
}

impl From<Xyz> for [f32; 3] {
    #[inline]
    fn from(value: Xyz) -> Self {
        [value.x, value.y, value.z]
    }
}

impl Index<usize> for Xyz {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Index out of bounds for Xyz"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rgb::{gamma_encode, linearize};

    #[test]
    fn white_maps_to_d65() {
        let xyz = convert_rgb_to_xyz(Rgb::<f32>::ones(), &SRGB_TO_XYZ_D65);
        assert!((xyz.x - 0.9505).abs() < 1e-3);
        assert!((xyz.y - 1.0).abs() < 1e-3);
        assert!((xyz.z - 1.0890).abs() < 1e-3);
    }

    #[test]
    fn matrix_round_trip() {
        let inverse = SRGB_TO_XYZ_D65.inverse().unwrap();
        let rgb = Rgb::new(0.2f32, 0.7, 0.4);
        let back = convert_xyz_to_rgb(convert_rgb_to_xyz(rgb, &SRGB_TO_XYZ_D65), &inverse);
        assert!(back.euclidean_distance(rgb) < 1e-4);
    }

    #[test]
    fn out_of_range_values_propagate() {
        let rgb = Rgb::new(-1f32, 2.0, 0.5);
        let xyz = convert_rgb_to_xyz(rgb, &Matrix3::identity());
        assert_eq!(xyz, Xyz::new(-1.0, 2.0, 0.5));
    }

    #[test]
    fn srgb_u8_round_trip() {
        let rgb = Rgb::<u8>::new(12, 128, 240);
        assert_eq!(Xyz::from_srgb(rgb).to_srgb(), rgb);
    }

    #[test]
    fn gamma_aware_matches_manual_pipeline() {
        let rgb = Rgb::<u8>::new(50, 100, 150);
        let manual = convert_rgb_to_xyz(linearize(rgb.to_rgb_f32()), &SRGB_TO_XYZ_D65);
        let direct = rgb.to_xyz(&SRGB_TO_XYZ_D65, TransferFunction::Srgb);
        assert!(manual.euclidean_distance(direct) < 1e-6);

        let back = gamma_encode(convert_xyz_to_rgb(direct, &XYZ_TO_SRGB_D65));
        assert!(back.euclidean_distance(rgb.to_rgb_f32()) < 1e-3);
    }

    #[test]
    fn array_conversions() {
        let xyz = Xyz::from([0.25f32, 0.5, 0.75]);
        assert_eq!((xyz[0], xyz[1], xyz[2]), (0.25, 0.5, 0.75));
        let array: [f32; 3] = xyz.into();
        assert_eq!(array, [0.25, 0.5, 0.75]);
    }
}
