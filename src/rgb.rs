/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::euclidean::EuclideanDistance;
use crate::gamma_curves::{srgb_from_linear, srgb_to_linear, TransferFunction};
use crate::matrix::Matrix3;
use crate::xyz::Xyz;
use erydanos::Euclidean3DDistance;
use half::f16;
use num_traits::{Float, Pow};
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

#[repr(C)]
#[derive(Debug, Default, PartialOrd, PartialEq, Clone, Copy)]
/// Represents any RGB values, Rgb<u8>, Rgb<f32> etc.
pub struct Rgb<T> {
    /// Red component
    pub r: T,
    /// Green component
    pub g: T,
    /// Blue component
    pub b: T,
}

impl<T> Rgb<T> {
    #[inline]
    pub fn new(r: T, g: T, b: T) -> Rgb<T> {
        Rgb { r, g, b }
    }
}

impl<T> Rgb<T>
where
    T: Copy,
{
    #[inline]
    pub fn dup(v: T) -> Self {
        Rgb::new(v, v, v)
    }
}

/// Linearizes each channel with the sRGB curve
#[inline]
pub fn linearize(rgb: Rgb<f32>) -> Rgb<f32> {
    rgb.apply(srgb_to_linear)
}

/// Gamma encodes each channel with the sRGB curve
#[inline]
pub fn gamma_encode(rgb: Rgb<f32>) -> Rgb<f32> {
    rgb.apply(srgb_from_linear)
}

impl Rgb<u8> {
    /// Converts gamma corrected RGB to linear RGB
    ///
    /// # Arguments
    /// `transfer_function` - Transfer function to convert RGB into linear RGB
    #[inline]
    pub fn to_linear(&self, transfer_function: TransferFunction) -> Rgb<f32> {
        self.to_rgb_f32().linearize(transfer_function)
    }

    /// Converts linear RGB to gamma corrected RGB
    ///
    /// # Arguments
    /// `transfer_function` - Transfer function to convert linear RGB into gamma corrected RGB
    #[inline]
    pub fn from_linear(linear_rgb: Rgb<f32>, transfer_function: TransferFunction) -> Rgb<u8> {
        linear_rgb.gamma(transfer_function).to_u8()
    }

    /// Converts rgb to XYZ
    ///
    /// # Arguments
    /// `matrix` - RGB to XYZ matrix, for example `SRGB_TO_XYZ_D65`
    /// `transfer_function` - Transfer function to convert RGB into linear RGB
    #[inline]
    pub fn to_xyz(&self, matrix: &Matrix3, transfer_function: TransferFunction) -> Xyz {
        Xyz::from_rgb(*self, matrix, transfer_function)
    }

    #[inline]
    pub fn to_rgb_f32(&self) -> Rgb<f32> {
        const SCALE: f32 = 1f32 / 255f32;
        Rgb::<f32>::new(
            self.r as f32 * SCALE,
            self.g as f32 * SCALE,
            self.b as f32 * SCALE,
        )
    }
}

impl Rgb<f32> {
    #[inline]
    pub fn apply(&self, gen: fn(f32) -> f32) -> Self {
        Self {
            r: gen(self.r),
            g: gen(self.g),
            b: gen(self.b),
        }
    }

    /// Gamma encoded to linear light, channel by channel
    #[inline]
    pub fn linearize(&self, transfer_function: TransferFunction) -> Rgb<f32> {
        self.apply(transfer_function.get_linearize_function())
    }

    /// Linear light to gamma encoded, channel by channel
    #[inline]
    pub fn gamma(&self, transfer_function: TransferFunction) -> Rgb<f32> {
        self.apply(transfer_function.get_gamma_function())
    }

    /// Converts linear RGB to XYZ
    #[inline]
    pub fn to_xyz(&self, matrix: &Matrix3) -> Xyz {
        Xyz::from_linear_rgb(*self, matrix)
    }

    /// Quantizes to 8 bit, values outside [0, 1] are saturated
    #[inline]
    pub fn to_u8(&self) -> Rgb<u8> {
        Rgb::<u8>::new(
            (self.r * 255f32).max(0f32).round().min(255f32) as u8,
            (self.g * 255f32).max(0f32).round().min(255f32) as u8,
            (self.b * 255f32).max(0f32).round().min(255f32) as u8,
        )
    }

    #[inline]
    pub fn to_rgb_f16(&self) -> Rgb<f16> {
        Rgb::<f16>::new(
            f16::from_f32(self.r),
            f16::from_f32(self.g),
            f16::from_f32(self.b),
        )
    }

    #[inline]
    pub fn zeroed() -> Rgb<f32> {
        Rgb::<f32>::dup(0f32)
    }

    #[inline]
    pub fn ones() -> Rgb<f32> {
        Rgb::<f32>::dup(1f32)
    }
}

impl Rgb<f16> {
    #[inline]
    pub fn to_rgb_f32(&self) -> Rgb<f32> {
        Rgb::<f32>::new(self.r.to_f32(), self.g.to_f32(), self.b.to_f32())
    }
}

impl From<Rgb<f32>> for Rgb<u8> {
    #[inline]
    fn from(value: Rgb<f32>) -> Self {
        value.to_u8()
    }
}

impl From<Rgb<f16>> for Rgb<f32> {
    #[inline]
    fn from(value: Rgb<f16>) -> Self {
        value.to_rgb_f32()
    }
}

impl From<[f32; 3]> for Rgb<f32> {
    #[inline]
    fn from(value: [f32; 3]) -> Self {
        Rgb::new(value[0], value[1], value[2])
    }
}

impl From<Rgb<f32>> for [f32; 3] {
    #[inline]
    fn from(value: Rgb<f32>) -> Self {
        [value.r, value.g, value.b]
    }
}

impl EuclideanDistance for Rgb<u8> {
    fn euclidean_distance(&self, other: Rgb<u8>) -> f32 {
        (self.r as f32 - other.r as f32).hypot3(
            self.g as f32 - other.g as f32,
            self.b as f32 - other.b as f32,
        )
    }
}

impl EuclideanDistance for Rgb<f32> {
    fn euclidean_distance(&self, other: Rgb<f32>) -> f32 {
        (self.r - other.r).hypot3(self.g - other.g, self.b - other.b)
    }
}

impl<T> Index<usize> for Rgb<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            _ => panic!("Index out of bounds for Rgb"),
        }
    }
}

impl<T> IndexMut<usize> for Rgb<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.r,
            1 => &mut self.g,
            2 => &mut self.b,
            _ => panic!("Index out of bounds for Rgb"),
        }
    }
}

impl<T> Add for Rgb<T>
where
    T: Add<Output = T>,
{
    type Output = Rgb<T>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Rgb::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl<T> Sub for Rgb<T>
where
    T: Sub<Output = T>,
{
    type Output = Rgb<T>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Rgb::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

impl<T> Mul for Rgb<T>
where
    T: Mul<Output = T>,
{
    type Output = Rgb<T>;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Rgb::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl<T> Div for Rgb<T>
where
    T: Div<Output = T>,
{
    type Output = Rgb<T>;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        Rgb::new(self.r / rhs.r, self.g / rhs.g, self.b / rhs.b)
    }
}

impl<T> Neg for Rgb<T>
where
    T: Neg<Output = T>,
{
    type Output = Rgb<T>;

    #[inline]
    fn neg(self) -> Self::Output {
        Rgb::new(-self.r, -self.g, -self.b)
    }
}

impl<T> Pow<T> for Rgb<T>
where
    T: Float,
{
    type Output = Rgb<T>;

    #[inline]
    fn pow(self, rhs: T) -> Self::Output {
        Rgb::new(self.r.powf(rhs), self.g.powf(rhs), self.b.powf(rhs))
    }
}
