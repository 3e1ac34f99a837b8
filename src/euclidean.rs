/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

/// Euclidean distance between two colors of the same space.
///
/// Used to compare conversion results against a tolerance, e.g. after a round trip.
pub trait EuclideanDistance {
    fn euclidean_distance(&self, other: Self) -> f32;
}
