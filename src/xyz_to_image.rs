/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::error::Result;
use crate::gamma_curves::TransferFunction;
use crate::image::{check_plane, ImageConfiguration};
use crate::matrix::Matrix3;
use crate::Xyz;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

#[allow(clippy::too_many_arguments)]
fn xyz_to_channels<const CHANNELS_CONFIGURATION: u8>(
    src: &[f32],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
    matrix: &Matrix3,
    transfer_function: TransferFunction,
) -> Result<()> {
    let image_configuration: ImageConfiguration = CHANNELS_CONFIGURATION.into();
    if width == 0 || height == 0 {
        return Ok(());
    }

    let channels = image_configuration.get_channels_count();
    let src_row = width as usize * 3;
    let dst_row = width as usize * channels;
    check_plane(src.len(), src_stride as usize, src_row, height as usize)?;
    check_plane(dst.len(), dst_stride as usize, dst_row, height as usize)?;

    tracing::debug!(
        "Converting XYZ to {:?} image {}x{} with {:?}",
        image_configuration,
        width,
        height,
        transfer_function
    );

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
        for (dst, src) in dst[..dst_row]
            .chunks_exact_mut(channels)
            .zip(src[..src_row].chunks_exact(3))
        {
            let rgb = Xyz::new(src[0], src[1], src[2]).to_rgb(matrix, transfer_function);

            dst[image_configuration.get_r_channel_offset()] = rgb.r;
            dst[image_configuration.get_g_channel_offset()] = rgb.g;
            dst[image_configuration.get_b_channel_offset()] = rgb.b;

            if image_configuration.has_alpha() {
                dst[image_configuration.get_a_channel_offset()] = 255;
            }
        }
    });

    Ok(())
}

/// This function converts XYZ to RGB
///
/// # Arguments
/// * `src` - A slice contains XYZ data, 3 channels per pixel
/// * `src_stride` - Elements per row for src data.
/// * `dst` - A mutable slice to receive RGB data
/// * `dst_stride` - Elements per row for dst data
/// * `width` - Image width
/// * `height` - Image height
/// * `matrix` - Transformation matrix from XYZ to RGB. If you don't have specific just pick `XYZ_TO_SRGB_D65`
/// * `transfer_function` - Transfer function. If you don't have specific pick `Srgb`
#[allow(clippy::too_many_arguments)]
pub fn xyz_to_rgb(
    src: &[f32],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
    matrix: &Matrix3,
    transfer_function: TransferFunction,
) -> Result<()> {
    xyz_to_channels::<{ ImageConfiguration::Rgb as u8 }>(
        src,
        src_stride,
        dst,
        dst_stride,
        width,
        height,
        matrix,
        transfer_function,
    )
}

/// This function converts XYZ to RGBA, alpha is set to 255
///
/// # Arguments
/// * `src` - A slice contains XYZ data, 3 channels per pixel
/// * `src_stride` - Elements per row for src data.
/// * `dst` - A mutable slice to receive RGBA data
/// * `dst_stride` - Elements per row for dst data
/// * `width` - Image width
/// * `height` - Image height
/// * `matrix` - Transformation matrix from XYZ to RGB. If you don't have specific just pick `XYZ_TO_SRGB_D65`
/// * `transfer_function` - Transfer function. If you don't have specific pick `Srgb`
#[allow(clippy::too_many_arguments)]
pub fn xyz_to_rgba(
    src: &[f32],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
    matrix: &Matrix3,
    transfer_function: TransferFunction,
) -> Result<()> {
    xyz_to_channels::<{ ImageConfiguration::Rgba as u8 }>(
        src,
        src_stride,
        dst,
        dst_stride,
        width,
        height,
        matrix,
        transfer_function,
    )
}

/// This function converts XYZ to BGRA, alpha is set to 255
///
/// # Arguments
/// * `src` - A slice contains XYZ data, 3 channels per pixel
/// * `src_stride` - Elements per row for src data.
/// * `dst` - A mutable slice to receive BGRA data
/// * `dst_stride` - Elements per row for dst data
/// * `width` - Image width
/// * `height` - Image height
/// * `matrix` - Transformation matrix from XYZ to RGB. If you don't have specific just pick `XYZ_TO_SRGB_D65`
/// * `transfer_function` - Transfer function. If you don't have specific pick `Srgb`
#[allow(clippy::too_many_arguments)]
pub fn xyz_to_bgra(
    src: &[f32],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
    matrix: &Matrix3,
    transfer_function: TransferFunction,
) -> Result<()> {
    xyz_to_channels::<{ ImageConfiguration::Bgra as u8 }>(
        src,
        src_stride,
        dst,
        dst_stride,
        width,
        height,
        matrix,
        transfer_function,
    )
}

/// This function converts XYZ to BGR
///
/// # Arguments
/// * `src` - A slice contains XYZ data, 3 channels per pixel
/// * `src_stride` - Elements per row for src data.
/// * `dst` - A mutable slice to receive BGR data
/// * `dst_stride` - Elements per row for dst data
/// * `width` - Image width
/// * `height` - Image height
/// * `matrix` - Transformation matrix from XYZ to RGB. If you don't have specific just pick `XYZ_TO_SRGB_D65`
/// * `transfer_function` - Transfer function. If you don't have specific pick `Srgb`
#[allow(clippy::too_many_arguments)]
pub fn xyz_to_bgr(
    src: &[f32],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
    matrix: &Matrix3,
    transfer_function: TransferFunction,
) -> Result<()> {
    xyz_to_channels::<{ ImageConfiguration::Bgr as u8 }>(
        src,
        src_stride,
        dst,
        dst_stride,
        width,
        height,
        matrix,
        transfer_function,
    )
}

/// sRGB with D65 white point
pub fn xyz_to_srgb(
    src: &[f32],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
) -> Result<()> {
    xyz_to_rgb(
        src,
        src_stride,
        dst,
        dst_stride,
        width,
        height,
        &crate::XYZ_TO_SRGB_D65,
        TransferFunction::Srgb,
    )
}
