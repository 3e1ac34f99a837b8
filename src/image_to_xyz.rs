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
use crate::{Rgb, Xyz};
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

#[allow(clippy::too_many_arguments)]
fn channels_to_xyz<const CHANNELS_CONFIGURATION: u8>(
    src: &[u8],
    src_stride: u32,
    dst: &mut [f32],
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
    let src_row = width as usize * channels;
    let dst_row = width as usize * 3;
    check_plane(src.len(), src_stride as usize, src_row, height as usize)?;
    check_plane(dst.len(), dst_stride as usize, dst_row, height as usize)?;

    tracing::debug!(
        "Converting {:?} image {}x{} to XYZ with {:?}",
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
            .chunks_exact_mut(3)
            .zip(src[..src_row].chunks_exact(channels))
        {
            let rgb = Rgb::<u8>::new(
                src[image_configuration.get_r_channel_offset()],
                src[image_configuration.get_g_channel_offset()],
                src[image_configuration.get_b_channel_offset()],
            );
            let xyz = Xyz::from_rgb(rgb, matrix, transfer_function);
            dst[0] = xyz.x;
            dst[1] = xyz.y;
            dst[2] = xyz.z;
        }
    });

    Ok(())
}

/// This function converts RGB to XYZ, destination holds 3 channels per pixel
///
/// # Arguments
/// * `src` - A slice contains RGB data
/// * `src_stride` - Elements per row for src data.
/// * `dst` - A mutable slice to receive XYZ data
/// * `dst_stride` - Elements per row for dst data
/// * `width` - Image width
/// * `height` - Image height
/// * `matrix` - Transformation matrix from RGB to XYZ. If you don't have specific just pick `SRGB_TO_XYZ_D65`
/// * `transfer_function` - Transfer function. If you don't have specific pick `Srgb`
#[allow(clippy::too_many_arguments)]
pub fn rgb_to_xyz(
    src: &[u8],
    src_stride: u32,
    dst: &mut [f32],
    dst_stride: u32,
    width: u32,
    height: u32,
    matrix: &Matrix3,
    transfer_function: TransferFunction,
) -> Result<()> {
    channels_to_xyz::<{ ImageConfiguration::Rgb as u8 }>(
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

/// This function converts RGBA to XYZ, alpha is dropped
///
/// # Arguments
/// * `src` - A slice contains RGBA data
/// * `src_stride` - Elements per row for src data.
/// * `dst` - A mutable slice to receive XYZ data
/// * `dst_stride` - Elements per row for dst data
/// * `width` - Image width
/// * `height` - Image height
/// * `matrix` - Transformation matrix from RGB to XYZ. If you don't have specific just pick `SRGB_TO_XYZ_D65`
/// * `transfer_function` - Transfer function. If you don't have specific pick `Srgb`
#[allow(clippy::too_many_arguments)]
pub fn rgba_to_xyz(
    src: &[u8],
    src_stride: u32,
    dst: &mut [f32],
    dst_stride: u32,
    width: u32,
    height: u32,
    matrix: &Matrix3,
    transfer_function: TransferFunction,
) -> Result<()> {
    channels_to_xyz::<{ ImageConfiguration::Rgba as u8 }>(
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

/// This function converts BGRA to XYZ, alpha is dropped
///
/// # Arguments
/// * `src` - A slice contains BGRA data
/// * `src_stride` - Elements per row for src data.
/// * `dst` - A mutable slice to receive XYZ data
/// * `dst_stride` - Elements per row for dst data
/// * `width` - Image width
/// * `height` - Image height
/// * `matrix` - Transformation matrix from RGB to XYZ. If you don't have specific just pick `SRGB_TO_XYZ_D65`
/// * `transfer_function` - Transfer function. If you don't have specific pick `Srgb`
#[allow(clippy::too_many_arguments)]
pub fn bgra_to_xyz(
    src: &[u8],
    src_stride: u32,
    dst: &mut [f32],
    dst_stride: u32,
    width: u32,
    height: u32,
    matrix: &Matrix3,
    transfer_function: TransferFunction,
) -> Result<()> {
    channels_to_xyz::<{ ImageConfiguration::Bgra as u8 }>(
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

/// This function converts BGR to XYZ
///
/// # Arguments
/// * `src` - A slice contains BGR data
/// * `src_stride` - Elements per row for src data.
/// * `dst` - A mutable slice to receive XYZ data
/// * `dst_stride` - Elements per row for dst data
/// * `width` - Image width
/// * `height` - Image height
/// * `matrix` - Transformation matrix from RGB to XYZ. If you don't have specific just pick `SRGB_TO_XYZ_D65`
/// * `transfer_function` - Transfer function. If you don't have specific pick `Srgb`
#[allow(clippy::too_many_arguments)]
pub fn bgr_to_xyz(
    src: &[u8],
    src_stride: u32,
    dst: &mut [f32],
    dst_stride: u32,
    width: u32,
    height: u32,
    matrix: &Matrix3,
    transfer_function: TransferFunction,
) -> Result<()> {
    channels_to_xyz::<{ ImageConfiguration::Bgr as u8 }>(
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
pub fn srgb_to_xyz(
    src: &[u8],
    src_stride: u32,
    dst: &mut [f32],
    dst_stride: u32,
    width: u32,
    height: u32,
) -> Result<()> {
    rgb_to_xyz(
        src,
        src_stride,
        dst,
        dst_stride,
        width,
        height,
        &crate::SRGB_TO_XYZ_D65,
        TransferFunction::Srgb,
    )
}
