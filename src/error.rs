/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use thiserror::Error;

/// Result type for fallible color operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Errors produced by matrix helpers and image plane conversions.
///
/// Per pixel conversions never fail, out of range values simply propagate.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ColorError {
    /// Matrix determinant is zero or not finite
    #[error("Matrix is not invertible, determinant {determinant}")]
    SingularMatrix { determinant: f32 },

    /// A row-major matrix slice must hold exactly 9 elements
    #[error("The matrix must have 9 elements, got {0}")]
    MatrixElementCount(usize),

    /// Primary or white point chromaticity with zero `y`
    #[error("Invalid chromaticity x: {x}, y: {y}")]
    InvalidChromaticity { x: f32, y: f32 },

    /// Image buffer is shorter than its dimensions require
    #[error("Buffer size mismatch: expected at least {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// Stride shorter than one row of pixels
    #[error("Stride {stride} is shorter than row length {row}")]
    InvalidStride { stride: usize, row: usize },
}
