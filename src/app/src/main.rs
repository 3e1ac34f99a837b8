use anyhow::Context;
use image::{GenericImageView, RgbImage};
use photon_color_conversion::*;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "./assets/asset.jpg".to_string());
    let output = args.next().unwrap_or_else(|| "converted.png".to_string());

    let img = image::open(&input).with_context(|| format!("Failed to open {input}"))?;
    let (width, height) = img.dimensions();
    info!("Loaded {} {}x{} {:?}", input, width, height, img.color());

    let src = img.to_rgb8();
    let stride = width * 3;

    // sRGB in, Display P3 out. The PNG is untagged so the gamut shift stays visible.
    let to_xyz = rgb_to_xyz_matrix(&ColorPrimaries::SRGB, &WhitePoint::D65)?;
    let from_xyz = xyz_to_rgb_matrix(&ColorPrimaries::DISPLAY_P3, &WhitePoint::D65)?;

    let mut xyz = vec![0f32; stride as usize * height as usize];
    let start_time = Instant::now();
    rgb_to_xyz(
        src.as_raw(),
        stride,
        &mut xyz,
        stride,
        width,
        height,
        &to_xyz,
        TransferFunction::Srgb,
    )?;
    info!("RGB -> XYZ: {:?}", start_time.elapsed());

    let mut dst = vec![0u8; stride as usize * height as usize];
    let start_time = Instant::now();
    xyz_to_rgb(
        &xyz,
        stride,
        &mut dst,
        stride,
        width,
        height,
        &from_xyz,
        TransferFunction::Srgb,
    )?;
    info!("XYZ -> RGB: {:?}", start_time.elapsed());

    let mut linear = vec![0f32; stride as usize * height as usize];
    let mut reencoded = vec![0u8; stride as usize * height as usize];
    let start_time = Instant::now();
    rgb_to_linear(src.as_raw(), stride, &mut linear, stride, width, height, TransferFunction::Srgb)?;
    linear_to_rgb(&linear, stride, &mut reencoded, stride, width, height, TransferFunction::Srgb)?;
    info!("Linearize round trip: {:?}", start_time.elapsed());
    if reencoded != *src.as_raw() {
        tracing::warn!("Linearize round trip is not lossless");
    }

    let out = RgbImage::from_raw(width, height, dst).context("Output buffer size mismatch")?;
    out.save(&output)
        .with_context(|| format!("Failed to save {output}"))?;
    info!("Saved {}", output);
    Ok(())
}
