/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
//! Conversions between linear RGB and CIE XYZ and the sRGB transfer function.
//!
//! Per pixel functions are pure and never fail:
//!
//! ```
//! use photon_color_conversion::*;
//!
//! let linear = linearize(Rgb::new(0.5f32, 0.5, 0.5));
//! let xyz = convert_rgb_to_xyz(linear, &SRGB_TO_XYZ_D65);
//! let back = gamma_encode(convert_xyz_to_rgb(xyz, &XYZ_TO_SRGB_D65));
//! assert!((back.r - 0.5).abs() < 1e-3);
//! ```
//!
//! Matrices for other color spaces are derived with [`rgb_to_xyz_matrix`].
mod error;
mod euclidean;
mod gamma_curves;
mod image;
mod image_to_linear;
mod image_to_xyz;
mod linear_to_image;
mod matrix;
mod primaries;
mod rgb;
mod utils;
mod white_point;
mod xyy;
mod xyz;
mod xyz_to_image;
mod xyz_transform;

pub use error::{ColorError, Result};
pub use euclidean::EuclideanDistance;
pub use gamma_curves::*;
pub use image::ImageConfiguration;
pub use image_to_linear::*;
pub use image_to_xyz::*;
pub use linear_to_image::*;
pub use matrix::Matrix3;
pub use primaries::{rgb_to_xyz_matrix, xyz_to_rgb_matrix, Chromaticity, ColorPrimaries};
pub use rgb::{gamma_encode, linearize, Rgb};
pub use white_point::WhitePoint;
pub use xyy::Xyy;
pub use xyz::{convert_rgb_to_xyz, convert_xyz_to_rgb, Xyz};
pub use xyz_to_image::*;
pub use xyz_transform::*;
