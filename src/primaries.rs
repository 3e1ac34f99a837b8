/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::error::{ColorError, Result};
use crate::matrix::Matrix3;
use crate::white_point::WhitePoint;

/// CIE 1931 chromaticity coordinates of a primary
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Chromaticity {
    pub x: f32,
    pub y: f32,
}

impl Chromaticity {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// XYZ of the primary scaled to Y = 1
    #[inline]
    fn to_unit_xyz(self) -> Result<[f32; 3]> {
        if self.y == 0f32 {
            return Err(ColorError::InvalidChromaticity {
                x: self.x,
                y: self.y,
            });
        }
        Ok([self.x / self.y, 1f32, (1f32 - self.x - self.y) / self.y])
    }
}

/// Red, green and blue primaries of an RGB color space
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorPrimaries {
    pub red: Chromaticity,
    pub green: Chromaticity,
    pub blue: Chromaticity,
}

impl ColorPrimaries {
    /// sRGB and Rec.709 primaries
    pub const SRGB: ColorPrimaries = ColorPrimaries::new(
        Chromaticity::new(0.64, 0.33),
        Chromaticity::new(0.30, 0.60),
        Chromaticity::new(0.15, 0.06),
    );

    pub const DISPLAY_P3: ColorPrimaries = ColorPrimaries::new(
        Chromaticity::new(0.680, 0.320),
        Chromaticity::new(0.265, 0.690),
        Chromaticity::new(0.150, 0.060),
    );

    pub const BT2020: ColorPrimaries = ColorPrimaries::new(
        Chromaticity::new(0.708, 0.292),
        Chromaticity::new(0.170, 0.797),
        Chromaticity::new(0.131, 0.046),
    );

    #[inline]
    pub const fn new(red: Chromaticity, green: Chromaticity, blue: Chromaticity) -> Self {
        Self { red, green, blue }
    }
}

/// Derives linear RGB to XYZ matrix from primaries and a white point.
///
/// Primaries become the columns of `P` (each scaled to Y = 1), then the
/// per-channel scale `S = P⁻¹ · W` makes RGB (1, 1, 1) land on the white point.
/// Result is `P · diag(S)`.
///
/// # Arguments
/// * `primaries` - Chromaticities of the red, green and blue primaries
/// * `white_point` - Reference white in XYZ, for example `WhitePoint::D65`
pub fn rgb_to_xyz_matrix(primaries: &ColorPrimaries, white_point: &WhitePoint) -> Result<Matrix3> {
    let [xr, yr, zr] = primaries.red.to_unit_xyz()?;
    let [xg, yg, zg] = primaries.green.to_unit_xyz()?;
    let [xb, yb, zb] = primaries.blue.to_unit_xyz()?;

    let p = Matrix3::new([[xr, xg, xb], [yr, yg, yb], [zr, zg, zb]]);
    let [sr, sg, sb] = p
        .inverse()?
        .mul_vector([white_point.x, white_point.y, white_point.z]);

    tracing::debug!(
        "Derived RGB to XYZ matrix, channel scales ({}, {}, {})",
        sr,
        sg,
        sb
    );

    Ok(p * Matrix3::diagonal(sr, sg, sb))
}

/// Inverse of [`rgb_to_xyz_matrix`]
pub fn xyz_to_rgb_matrix(primaries: &ColorPrimaries, white_point: &WhitePoint) -> Result<Matrix3> {
    rgb_to_xyz_matrix(primaries, white_point)?.inverse()
}
