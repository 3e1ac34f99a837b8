/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

/// Largest gamma encoded value on the linear segment of the sRGB curve
pub const SRGB_LINEAR_THRESHOLD: f32 = 0.04045;

/// Largest linear value on the linear segment of the sRGB curve
pub const SRGB_ENCODE_THRESHOLD: f32 = 0.0031308;

/// [`SRGB_LINEAR_THRESHOLD`] in double precision
pub const SRGB_LINEAR_THRESHOLD_F64: f64 = 0.04045;

/// [`SRGB_ENCODE_THRESHOLD`] in double precision
pub const SRGB_ENCODE_THRESHOLD_F64: f64 = 0.0031308;

/// Converts sRGB gamma encoded value into linear light.
///
/// Inputs are not clamped: values above 1 follow the power segment and NaN propagates.
#[inline(always)]
pub fn srgb_to_linear(gamma: f32) -> f32 {
    if gamma <= SRGB_LINEAR_THRESHOLD {
        gamma / 12.92f32
    } else {
        ((gamma + 0.055f32) / 1.055f32).powf(2.4f32)
    }
}

/// Converts linear light into sRGB gamma encoded value.
///
/// Inputs are not clamped. Negative values always take the linear segment.
#[inline(always)]
pub fn srgb_from_linear(linear: f32) -> f32 {
    if linear <= SRGB_ENCODE_THRESHOLD {
        12.92f32 * linear
    } else {
        1.055f32 * linear.powf(1.0f32 / 2.4f32) - 0.055f32
    }
}

/// Double precision [`srgb_to_linear`].
#[inline(always)]
pub fn srgb_to_linear_f64(gamma: f64) -> f64 {
    if gamma <= SRGB_LINEAR_THRESHOLD_F64 {
        gamma / 12.92f64
    } else {
        ((gamma + 0.055f64) / 1.055f64).powf(2.4f64)
    }
}

/// Double precision [`srgb_from_linear`].
#[inline(always)]
pub fn srgb_from_linear_f64(linear: f64) -> f64 {
    if linear <= SRGB_ENCODE_THRESHOLD_F64 {
        12.92f64 * linear
    } else {
        1.055f64 * linear.powf(1.0f64 / 2.4f64) - 0.055f64
    }
}

#[inline(always)]
pub fn rec709_to_linear(gamma: f32) -> f32 {
    if gamma < 4.5f32 * 0.018053968510807f32 {
        gamma * (1f32 / 4.5f32)
    } else {
        ((gamma + 0.09929682680944f32) / 1.09929682680944f32).powf(1.0f32 / 0.45f32)
    }
}

#[inline(always)]
pub fn rec709_from_linear(linear: f32) -> f32 {
    if linear < 0.018053968510807f32 {
        linear * 4.5f32
    } else {
        1.09929682680944f32 * linear.powf(0.45f32) - 0.09929682680944f32
    }
}

#[inline(always)]
pub fn gamma2p2_from_linear(linear: f32) -> f32 {
    linear.powf(1f32 / 2.2f32)
}

#[inline(always)]
pub fn gamma2p2_to_linear(gamma: f32) -> f32 {
    gamma.powf(2.2f32)
}

#[inline(always)]
pub fn gamma2p8_from_linear(linear: f32) -> f32 {
    linear.powf(1f32 / 2.8f32)
}

#[inline(always)]
pub fn gamma2p8_to_linear(gamma: f32) -> f32 {
    gamma.powf(2.8f32)
}

#[derive(Debug, Copy, Clone, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum TransferFunction {
    /// sRGB Transfer function
    #[default]
    Srgb,
    /// Rec.709 Transfer function
    Rec709,
    /// Pure gamma 2.2 Transfer function
    Gamma2p2,
    /// Pure gamma 2.8 Transfer function
    Gamma2p8,
}

impl TransferFunction {
    #[inline(always)]
    pub fn get_linearize_function(&self) -> fn(f32) -> f32 {
        match self {
            TransferFunction::Srgb => srgb_to_linear,
            TransferFunction::Rec709 => rec709_to_linear,
            TransferFunction::Gamma2p8 => gamma2p8_to_linear,
            TransferFunction::Gamma2p2 => gamma2p2_to_linear,
        }
    }

    #[inline(always)]
    pub fn get_gamma_function(&self) -> fn(f32) -> f32 {
        match self {
            TransferFunction::Srgb => srgb_from_linear,
            TransferFunction::Rec709 => rec709_from_linear,
            TransferFunction::Gamma2p2 => gamma2p2_from_linear,
            TransferFunction::Gamma2p8 => gamma2p8_from_linear,
        }
    }

    /// Gamma encoded value to linear light
    #[inline(always)]
    pub fn linearize(&self, v: f32) -> f32 {
        (self.get_linearize_function())(v)
    }

    /// Linear light to gamma encoded value
    #[inline(always)]
    pub fn gamma(&self, v: f32) -> f32 {
        (self.get_gamma_function())(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srgb_endpoints() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
        assert_eq!(srgb_from_linear(0.0), 0.0);
        assert!((srgb_from_linear(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn srgb_linearize_is_continuous_at_threshold() {
        let t = SRGB_LINEAR_THRESHOLD;
        let left = t / 12.92;
        let right = ((t + 0.055) / 1.055).powf(2.4);
        assert!((left - right).abs() < 1e-6, "{left} vs {right}");
        let above = srgb_to_linear(t + 1e-6);
        assert!((srgb_to_linear(t) - above).abs() < 1e-5);
    }

    #[test]
    fn srgb_encode_is_continuous_at_threshold() {
        let t = SRGB_ENCODE_THRESHOLD;
        let left = 12.92 * t;
        let right = 1.055 * t.powf(1.0 / 2.4) - 0.055;
        assert!((left - right).abs() < 1e-5, "{left} vs {right}");
    }

    #[test]
    fn srgb_round_trip() {
        for i in 0..=1000 {
            let v = i as f32 / 1000.0;
            let back = srgb_from_linear(srgb_to_linear(v));
            assert!((back - v).abs() < 1e-4, "{v} -> {back}");
        }
    }

    #[test]
    fn srgb_is_not_clamped() {
        assert!(srgb_to_linear(-0.5) < 0.0);
        assert!(srgb_to_linear(1.5) > 1.0);
        assert!(srgb_from_linear(2.0) > 1.0);
    }

    #[test]
    fn f64_matches_f32() {
        for i in 0..=64 {
            let v = i as f32 / 64.0;
            assert!((srgb_to_linear_f64(v as f64) as f32 - srgb_to_linear(v)).abs() < 1e-5);
            assert!((srgb_from_linear_f64(v as f64) as f32 - srgb_from_linear(v)).abs() < 1e-5);
        }
    }

    #[test]
    fn f64_segments_meet_at_thresholds() {
        let t = SRGB_LINEAR_THRESHOLD_F64;
        let power = ((t + 0.055) / 1.055).powf(2.4);
        assert!((srgb_to_linear_f64(t) - power).abs() < 1e-6);
        assert_eq!(srgb_to_linear_f64(t), t / 12.92);

        let t = SRGB_ENCODE_THRESHOLD_F64;
        let power = 1.055 * t.powf(1.0 / 2.4) - 0.055;
        assert!((srgb_from_linear_f64(t) - power).abs() < 1e-6);
        assert_eq!(srgb_from_linear_f64(t), 12.92 * t);
    }

    #[test]
    fn every_transfer_function_round_trips() {
        for transfer in [
            TransferFunction::Srgb,
            TransferFunction::Rec709,
            TransferFunction::Gamma2p2,
            TransferFunction::Gamma2p8,
        ] {
            for i in 0..=100 {
                let v = i as f32 / 100.0;
                let back = transfer.gamma(transfer.linearize(v));
                assert!((back - v).abs() < 1e-3, "{transfer:?}: {v} -> {back}");
            }
        }
    }
}
