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

fn channels_to_linear<const CHANNELS_CONFIGURATION: u8>(
    src: &[u8],
    src_stride: u32,
    dst: &mut [f32],
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
        "Linearizing {:?} image {}x{} with {:?}",
        image_configuration,
        width,
        height,
        transfer_function
    );

    let transfer = transfer_function.get_linearize_function();

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
            let rgb = Rgb::<u8>::new(
                src[image_configuration.get_r_channel_offset()],
                src[image_configuration.get_g_channel_offset()],
                src[image_configuration.get_b_channel_offset()],
            )
            .to_rgb_f32()
            .apply(transfer);

            dst[image_configuration.get_r_channel_offset()] = rgb.r;
            dst[image_configuration.get_g_channel_offset()] = rgb.g;
            dst[image_configuration.get_b_channel_offset()] = rgb.b;

            if image_configuration.has_alpha() {
                let a_offset = image_configuration.get_a_channel_offset();
                dst[a_offset] = src[a_offset] as f32 * (1f32 / 255f32);
            }
        }
    });

    Ok(())
}

/// This function converts RGB to Linear
///
/// # Arguments
/// * `src` - A slice contains RGB data
/// * `src_stride` - Elements per row for src data.
/// * `dst` - A mutable slice to receive linear data
/// * `dst_stride` - Elements per row for dst data
/// * `width` - Image width
/// * `height` - Image height
/// * `transfer_function` - Transfer function from gamma to linear space. If you don't have specific pick `Srgb`
pub fn rgb_to_linear(
    src: &[u8],
    src_stride: u32,
    dst: &mut [f32],
    dst_stride: u32,
    width: u32,
    height: u32,
    transfer_function: TransferFunction,
) -> Result<()> {
    channels_to_linear::<{ ImageConfiguration::Rgb as u8 }>(
        src,
        src_stride,
        dst,
        dst_stride,
        width,
        height,
        transfer_function,
    )
}

/// This function converts RGBA to Linear, Alpha channel is normalized
///
/// # Arguments
/// * `src` - A slice contains RGBA data
/// * `src_stride` - Elements per row for src data.
/// * `dst` - A mutable slice to receive linear data
/// * `dst_stride` - Elements per row for dst data
/// * `width` - Image width
/// * `height` - Image height
/// * `transfer_function` - Transfer function from gamma to linear space. If you don't have specific pick `Srgb`
pub fn rgba_to_linear(
    src: &[u8],
    src_stride: u32,
    dst: &mut [f32],
    dst_stride: u32,
    width: u32,
    height: u32,
    transfer_function: TransferFunction,
) -> Result<()> {
    channels_to_linear::<{ ImageConfiguration::Rgba as u8 }>(
        src,
        src_stride,
        dst,
        dst_stride,
        width,
        height,
        transfer_function,
    )
}

/// This function converts BGRA to Linear, Alpha channel is normalized
///
/// # Arguments
/// * `src` - A slice contains BGRA data
/// * `src_stride` - Elements per row for src data.
/// * `dst` - A mutable slice to receive linear data
/// * `dst_stride` - Elements per row for dst data
/// * `width` - Image width
/// * `height` - Image height
/// * `transfer_function` - Transfer function from gamma to linear space. If you don't have specific pick `Srgb`
pub fn bgra_to_linear(
    src: &[u8],
    src_stride: u32,
    dst: &mut [f32],
    dst_stride: u32,
    width: u32,
    height: u32,
    transfer_function: TransferFunction,
) -> Result<()> {
    channels_to_linear::<{ ImageConfiguration::Bgra as u8 }>(
        src,
        src_stride,
        dst,
        dst_stride,
        width,
        height,
        transfer_function,
    )
}

/// This function converts BGR to Linear
///
/// # Arguments
/// * `src` - A slice contains BGR data
/// * `src_stride` - Elements per row for src data.
/// * `dst` - A mutable slice to receive linear data
/// * `dst_stride` - Elements per row for dst data
/// * `width` - Image width
/// * `height` - Image height
/// * `transfer_function` - Transfer function from gamma to linear space. If you don't have specific pick `Srgb`
pub fn bgr_to_linear(
    src: &[u8],
    src_stride: u32,
    dst: &mut [f32],
    dst_stride: u32,
    width: u32,
    height: u32,
    transfer_function: TransferFunction,
) -> Result<()> {
    channels_to_linear::<{ ImageConfiguration::Bgr as u8 }>(
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
    use crate::gamma_curves::srgb_to_linear;

    #[test]
    fn linearizes_every_channel() {
        let src = [0u8, 128, 255, 64, 32, 16];
        let mut dst = [0f32; 6];
        rgb_to_linear(&src, 6, &mut dst, 6, 2, 1, TransferFunction::Srgb).unwrap();
        for (s, d) in src.iter().zip(dst.iter()) {
            assert_eq!(*d, srgb_to_linear(*s as f32 / 255.));
        }
    }

    #[test]
    fn bgra_keeps_channel_order_and_normalizes_alpha() {
        let src = [255u8, 0, 0, 51];
        let mut dst = [0f32; 4];
        bgra_to_linear(&src, 4, &mut dst, 4, 1, 1, TransferFunction::Srgb).unwrap();
        assert!((dst[0] - 1.0).abs() < 1e-6);
        assert_eq!(dst[1], 0.0);
        assert_eq!(dst[2], 0.0);
        assert!((dst[3] - 0.2).abs() < 1e-6);
    }

    #[test]
    fn padded_rows_are_skipped() {
        // Two rows of one RGB pixel, source padded to 4 elements per row.
        let src = [255u8, 255, 255, 7, 0, 0, 0];
        let mut dst = [9f32; 6];
        rgb_to_linear(&src, 4, &mut dst, 3, 1, 2, TransferFunction::Srgb).unwrap();
        assert_eq!(&dst[3..], &[0f32, 0., 0.]);
        assert!((dst[0] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn short_buffer_is_rejected() {
        let src = [0u8; 5];
        let mut dst = [0f32; 6];
        assert_eq!(
            rgb_to_linear(&src, 3, &mut dst, 3, 1, 2, TransferFunction::Srgb),
            Err(ColorError::BufferSize {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn empty_image_is_a_no_op() {
        let mut dst: [f32; 0] = [];
        assert!(rgba_to_linear(&[], 0, &mut dst, 0, 0, 0, TransferFunction::Srgb).is_ok());
    }
}
