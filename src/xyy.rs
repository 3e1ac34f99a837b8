/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::xyz::Xyz;

/// CIE xyY: chromaticity coordinates plus luminance
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Xyy {
    pub x: f32,
    pub y: f32,
    /// Luminance, equal to `Y` of the XYZ color
    pub luminance: f32,
}

impl Xyy {
    #[inline]
    pub fn new(x: f32, y: f32, luminance: f32) -> Self {
        Self { x, y, luminance }
    }

    /// Black (X + Y + Z == 0) has no chromaticity and maps to all zeros.
    #[inline]
    pub fn from_xyz(xyz: Xyz) -> Self {
        let sum = xyz.x + xyz.y + xyz.z;
        if sum == 0f32 {
            return Xyy::default();
        }
        Xyy::new(xyz.x / sum, xyz.y / sum, xyz.y)
    }

    /// Zero `y` yields black.
    #[inline]
    pub fn to_xyz(&self) -> Xyz {
        if self.y == 0f32 {
            return Xyz::default();
        }
        let scale = self.luminance / self.y;
        Xyz::new(
            self.x * scale,
            self.luminance,
            (1f32 - self.x - self.y) * scale,
        )
    }
}

impl From<Xyz> for Xyy {
    #[inline]
    fn from(value: Xyz) -> Self {
        Xyy::from_xyz(value)
    }
}

impl From<Xyy> for Xyz {
    #[inline]
    fn from(value: Xyy) -> Self {
        value.to_xyz()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::euclidean::EuclideanDistance;

    #[test]
    fn round_trip() {
        let xyz = Xyz::new(0.2034, 0.2140, 0.2330);
        let xyy = xyz.to_xyy();
        assert!((xyy.luminance - xyz.y).abs() < 1e-7);
        assert!(xyy.to_xyz().euclidean_distance(xyz) < 1e-5);
    }

    #[test]
    fn black_has_no_chromaticity() {
        assert_eq!(Xyy::from_xyz(Xyz::default()), Xyy::new(0.0, 0.0, 0.0));
        assert_eq!(Xyy::new(0.3, 0.0, 1.0).to_xyz(), Xyz::default());
    }

    #[test]
    fn d65_chromaticity() {
        let xyy = Xyy::from_xyz(Xyz::new(0.9505, 1.0, 1.0891));
        assert!((xyy.x - 0.3127).abs() < 1e-3);
        assert!((xyy.y - 0.3290).abs() < 1e-3);
    }
}
