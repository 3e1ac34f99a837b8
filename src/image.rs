/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::error::{ColorError, Result};

/// Interleaved pixel layouts supported by the image plane conversions
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub enum ImageConfiguration {
    Rgb = 0,
    Rgba = 1,
    Bgra = 2,
    Bgr = 3,
}

impl ImageConfiguration {
    #[inline(always)]
    pub fn get_channels_count(&self) -> usize {
        match self {
            ImageConfiguration::Rgb | ImageConfiguration::Bgr => 3,
            ImageConfiguration::Rgba | ImageConfiguration::Bgra => 4,
        }
    }

    #[inline(always)]
    pub fn has_alpha(&self) -> bool {
        match self {
            ImageConfiguration::Rgb | ImageConfiguration::Bgr => false,
            ImageConfiguration::Rgba | ImageConfiguration::Bgra => true,
        }
    }

    #[inline(always)]
    pub fn get_r_channel_offset(&self) -> usize {
        match self {
            ImageConfiguration::Rgb | ImageConfiguration::Rgba => 0,
            ImageConfiguration::Bgra | ImageConfiguration::Bgr => 2,
        }
    }

    #[inline(always)]
    pub fn get_g_channel_offset(&self) -> usize {
        1
    }

    #[inline(always)]
    pub fn get_b_channel_offset(&self) -> usize {
        match self {
            ImageConfiguration::Rgb | ImageConfiguration::Rgba => 2,
            ImageConfiguration::Bgra | ImageConfiguration::Bgr => 0,
        }
    }

    /// Only meaningful when [`has_alpha`](Self::has_alpha) is true
    #[inline(always)]
    pub fn get_a_channel_offset(&self) -> usize {
        3
    }
}

impl From<u8> for ImageConfiguration {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => ImageConfiguration::Rgb,
            1 => ImageConfiguration::Rgba,
            2 => ImageConfiguration::Bgra,
            _ => ImageConfiguration::Bgr,
        }
    }
}

/// Checks that a plane of `height` rows of `row` elements fits a buffer of
/// `len` elements laid out with `stride` elements per row. `height` must be non-zero.
/// A plane whose extent overflows `usize` is reported as [`ColorError::BufferSize`].
pub(crate) fn check_plane(len: usize, stride: usize, row: usize, height: usize) -> Result<()> {
    if stride < row {
        return Err(ColorError::InvalidStride { stride, row });
    }
    let expected = stride
        .checked_mul(height - 1)
        .and_then(|v| v.checked_add(row))
        .ok_or(ColorError::BufferSize {
            expected: usize::MAX,
            actual: len,
        })?;
    if len < expected {
        return Err(ColorError::BufferSize {
            expected,
            actual: len,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_follow_layout() {
        let bgra: ImageConfiguration = 2u8.into();
        assert_eq!(bgra, ImageConfiguration::Bgra);
        assert_eq!(bgra.get_r_channel_offset(), 2);
        assert_eq!(bgra.get_b_channel_offset(), 0);
        assert!(bgra.has_alpha());
        assert_eq!(ImageConfiguration::Bgr.get_channels_count(), 3);
    }

    #[test]
    fn plane_validation() {
        assert!(check_plane(12, 6, 6, 2).is_ok());
        assert_eq!(
            check_plane(12, 4, 6, 2),
            Err(ColorError::InvalidStride { stride: 4, row: 6 })
        );
        assert_eq!(
            check_plane(11, 6, 6, 2),
            Err(ColorError::BufferSize {
                expected: 12,
                actual: 11
            })
        );
        // Last row may omit padding.
        assert!(check_plane(14, 8, 6, 2).is_ok());
    }

    #[test]
    fn oversized_plane_does_not_overflow() {
        assert_eq!(
            check_plane(16, usize::MAX / 2, 3, 4),
            Err(ColorError::BufferSize {
                expected: usize::MAX,
                actual: 16
            })
        );
        assert_eq!(
            check_plane(16, usize::MAX, usize::MAX, 2),
            Err(ColorError::BufferSize {
                expected: usize::MAX,
                actual: 16
            })
        );
    }
}
