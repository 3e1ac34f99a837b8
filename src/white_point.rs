/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::xyy::Xyy;
use crate::xyz::Xyz;

/// Reference white in CIE XYZ, Y normalized to 1
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WhitePoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl WhitePoint {
    /// Noon daylight, white of sRGB and Display P3
    pub const D65: WhitePoint = WhitePoint::new(0.9505, 1.0, 1.0891);

    /// Horizon light, ICC profile connection space white
    pub const D50: WhitePoint = WhitePoint::new(0.9642, 1.0, 0.8249);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn xyz(&self) -> Xyz {
        Xyz::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn xyy(&self) -> Xyy {
        Xyy::from_xyz(self.xyz())
    }
}

impl From<WhitePoint> for Xyz {
    fn from(value: WhitePoint) -> Self {
        value.xyz()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chromaticities() {
        let d65 = WhitePoint::D65.xyy();
        assert!((d65.x - 0.3127).abs() < 1e-3);
        assert!((d65.y - 0.3290).abs() < 1e-3);
        assert_eq!(d65.luminance, 1.0);

        let d50 = WhitePoint::D50.xyy();
        assert!((d50.x - 0.3457).abs() < 1e-3);
        assert!((d50.y - 0.3585).abs() < 1e-3);
    }
}
