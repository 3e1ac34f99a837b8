/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::error::Result;
use crate::gamma_curves::TransferFunction;
use crate::image::{check_plane, ImageConfiguration};
use crate::Rgb;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

fn linear_to_gamma_channels<const CHANNELS_CONFIGURATION: u8>(
    src: &[f32],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
    transfer_function: TransferFunction,
) -> Result<()> {
    let image_configuration: ImageConfiguration = CHANNELS_CONFIGURATION.into();
    if width == 0 || height == 0 {
        return Ok(());
    }

    let channels = image_configuration.get_channels_count();
    let row = width as usize * channels;
    check_plane(src.len(), src_stride as usize, row, height as usize)?;
    check_plane(dst.len(), dst_stride as usize, row, height as usize)?;

    tracing::debug!(
        "Gamma encoding {:?} image {}x{} with {:?}",
        image_configuration,
        width,
        height,
        transfer_function
    );

    let gamma = transfer_function.get_gamma_function();

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst
            .par_chunks_mut(dst_stride as usize)
            .zip(src.par_chunks(src_stride as usize))
            .take(height as usize);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst
            .chunks_mut(dst_stride as usize)
            .zip(src.chunks(src_stride as usize))
            .take(height as usize);
    }

    iter.for_each(|(dst, src)| {
        for (dst, src) in dst[..row]
            .chunks_exact_mut(channels)
            .zip(src[..row].chunks_exact(channels))
        {
            // Clamped before encoding, pure gamma curves are undefined below zero.
            let rgb = Rgb::<f32>::new(
                src[image_configuration.get_r_channel_offset()].clamp(0f32, 1f32),
                src[image_configuration.get_g_channel_offset()].clamp(0f32, 1f32),
                src[image_configuration.get_b_channel_offset()].clamp(0f32, 1f32),
            )
            .apply(gamma)
            .to_u8();

            dst[image_configuration.get_r_channel_offset()] = rgb.r;
            dst[image_configuration.get_g_channel_offset()] = rgb.g;
            dst[image_configuration.get_b_channel_offset()] = rgb.b;

            if image_configuration.has_alpha() {
                let a_offset = image_configuration.get_a_channel_offset();
                dst[a_offset] = (src[a_offset] * 255f32).round().clamp(0f32, 255f32) as u8;
            }
        }
    });

    Ok(())
}

/// This function converts Linear to RGB
///
/// # Arguments
/// * `src` - A slice contains Linear RGB data
/// * `src_stride` - Elements per row for src data.
/// * `dst` - A mutable slice to receive Gamma RGB data
/// * `dst_stride` - Elements per row for dst data
/// * `width` - Image width
/// * `height` - Image height
/// * `transfer_function` - Transfer function from linear to gamma space. If you don't have specific pick `Srgb`
pub fn linear_to_rgb(
    src: &[f32],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
    transfer_function: TransferFunction,
) -> Result<()> {
    linear_to_gamma_channels::<{ ImageConfiguration::Rgb as u8 }>(
        src,
        src_stride,
        dst,
        dst_stride,
        width,
        height,
        transfer_function,
    )
}

/// This function converts Linear to RGBA, alpha is expected in [0, 1]
///
/// # Arguments
/// * `src` - A slice contains Linear RGBA data
/// * `src_stride` - Elements per row for src data.
/// * `dst` - A mutable slice to receive Gamma RGBA data
/// * `dst_stride` - Elements per row for dst data
/// * `width` - Image width
/// * `height` - Image height
/// * `transfer_function` - Transfer function from linear to gamma space. If you don't have specific pick `Srgb`
pub fn linear_to_rgba(
    src: &[f32],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
    transfer_function: TransferFunction,
) -> Result<()> {
    linear_to_gamma_channels::<{ ImageConfiguration::Rgba as u8 }>(
        src,
        src_stride,
        dst,
        dst_stride,
        width,
        height,
        transfer_function,
    )
}

/// This function converts Linear to BGRA, alpha is expected in [0, 1]
///
/// # Arguments
/// * `src` - A slice contains Linear BGRA data
/// * `src_stride` - Elements per row for src data.
/// * `dst` - A mutable slice to receive Gamma BGRA data
/// * `dst_stride` - Elements per row for dst data
/// * `width` - Image width
/// * `height` - Image height
/// * `transfer_function` - Transfer function from linear to gamma space. If you don't have specific pick `Srgb`
pub fn linear_to_bgra(
    src: &[f32],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
    transfer_function: TransferFunction,
) -> Result<()> {
    linear_to_gamma_channels::<{ ImageConfiguration::Bgra as u8 }>(
        src,
        src_stride,
        dst,
        dst_stride,
        width,
        height,
        transfer_function,
    )
}

/// This function converts Linear to BGR
///
/// # Arguments
/// * `src` - A slice contains Linear BGR data
/// * `src_stride` - Elements per row for src data.
/// * `dst` - A mutable slice to receive Gamma BGR data
/// * `dst_stride` - Elements per row for dst data
/// * `width` - Image width
/// * `height` - Image height
/// * `transfer_function` - Transfer function from linear to gamma space. If you don't have specific pick `Srgb`
pub fn linear_to_bgr(
    src: &[f32],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
    transfer_function: TransferFunction,
) -> Result<()> {
    linear_to_gamma_channels::<{ ImageConfiguration::Bgr as u8 }>(
        src,
        src_stride,
        dst,
        dst_stride,
        width,
        height,
        transfer_function,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ColorError;
    use crate::image_to_linear::rgba_to_linear;

    #[test]
    fn rgba_round_trip_is_lossless() {
        let src: Vec<u8> = (0..=255u8).collect();
        let mut linear = vec![0f32; src.len()];
        let mut back = vec![0u8; src.len()];
        rgba_to_linear(&src, 64 * 4, &mut linear, 64 * 4, 64, 1, TransferFunction::Srgb).unwrap();
        linear_to_rgba(&linear, 64 * 4, &mut back, 64 * 4, 64, 1, TransferFunction::Srgb).unwrap();
        assert_eq!(src, back);
    }

    #[test]
    fn out_of_range_values_saturate() {
        let src = [-0.5f32, 0.0, 3.0];
        let mut dst = [1u8; 3];
        linear_to_bgr(&src, 3, &mut dst, 3, 1, 1, TransferFunction::Gamma2p2).unwrap();
        assert_eq!(dst, [0, 0, 255]);
    }

    #[test]
    fn narrow_stride_is_rejected() {
        let src = [0f32; 8];
        let mut dst = [0u8; 8];
        assert_eq!(
            linear_to_rgb(&src, 2, &mut dst, 3, 1, 2, TransferFunction::Srgb),
            Err(ColorError::InvalidStride { stride: 2, row: 3 })
        );
    }
}
