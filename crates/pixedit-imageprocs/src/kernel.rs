/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Convolution kernels
//!
//! A kernel is a small matrix of weights, one weight per channel per cell,
//! laid out row by row like an image. Both sides must be odd so that the
//! kernel has a center pixel.
use pixedit_core::errors::RasterErrors;
use pixedit_core::pixel::CHANNELS;

/// Reference size of the blur kernel
pub const DEFAULT_BLUR_SIZE: usize = 5;

/// An immutable convolution matrix
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    width:   usize,
    height:  usize,
    weights: Vec<[f32; CHANNELS]>
}

impl Kernel {
    /// Create a kernel with separate weights per channel
    ///
    /// # Errors
    /// - width or height is zero or even
    /// - `width * height` overflows
    /// - `weights.len()` is not `width * height`
    pub fn new(
        width: usize, height: usize, weights: Vec<[f32; CHANNELS]>
    ) -> Result<Kernel, RasterErrors> {
        let cells = cell_count(width, height)?;

        if weights.len() != cells {
            return Err(RasterErrors::DimensionsMisMatch(cells, weights.len()));
        }
        Ok(Kernel {
            width,
            height,
            weights
        })
    }

    /// Create a kernel which applies the same weights to every channel
    ///
    /// # Errors
    /// Same as [`Kernel::new`]
    pub fn from_scalars(width: usize, height: usize, weights: &[f32]) -> Result<Kernel, RasterErrors> {
        Kernel::new(width, height, weights.iter().map(|w| [*w; CHANNELS]).collect())
    }

    /// A 1x1 kernel which leaves an image unchanged
    #[must_use]
    pub fn identity() -> Kernel {
        Kernel {
            width:   1,
            height:  1,
            weights: vec![[1.0; CHANNELS]]
        }
    }

    /// A `size x size` averaging kernel, every weight is `1/size²`
    ///
    /// # Errors
    /// If size is zero or even, or `size²` overflows
    pub fn box_blur(size: usize) -> Result<Kernel, RasterErrors> {
        // validate before allocating
        let cells = cell_count(size, size)?;
        let weight = 1.0 / cells as f32;

        Kernel::from_scalars(size, size, &vec![weight; cells])
    }

    /// Derivative kernel responding to intensity changes from top to bottom
    ///
    /// ```text
    /// -1/4, -1/2, -1/4,
    ///    0,    0,    0,
    ///  1/4,  1/2,  1/4
    /// ```
    #[must_use]
    pub fn sobel_vertical() -> Kernel {
        #[rustfmt::skip]
        let weights = [
            -0.25, -0.5, -0.25,
             0.0,   0.0,  0.0,
             0.25,  0.5,  0.25
        ];
        Kernel {
            width:   3,
            height:  3,
            weights: weights.iter().map(|w| [*w; CHANNELS]).collect()
        }
    }

    /// Derivative kernel responding to intensity changes from left to right
    ///
    /// ```text
    /// -1/4, 0, 1/4,
    /// -1/2, 0, 1/2,
    /// -1/4, 0, 1/4
    /// ```
    #[must_use]
    pub fn sobel_horizontal() -> Kernel {
        #[rustfmt::skip]
        let weights = [
            -0.25, 0.0, 0.25,
            -0.5,  0.0, 0.5,
            -0.25, 0.0, 0.25
        ];
        Kernel {
            width:   3,
            height:  3,
            weights: weights.iter().map(|w| [*w; CHANNELS]).collect()
        }
    }

    /// Get kernel dimensions as a tuple of (width,height)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Distance from the center to the edges as (horizontal, vertical)
    #[must_use]
    pub const fn radius(&self) -> (usize, usize) {
        ((self.width - 1) / 2, (self.height - 1) / 2)
    }

    /// Weights of the cell at column `x` and row `y`
    #[inline]
    #[must_use]
    pub fn weight(&self, x: usize, y: usize) -> [f32; CHANNELS] {
        self.weights[y * self.width + x]
    }

    /// Sum of all weights per channel
    #[must_use]
    pub fn total_weight(&self) -> [f32; CHANNELS] {
        let mut total = [0.0; CHANNELS];

        for cell in &self.weights {
            for (t, w) in total.iter_mut().zip(cell) {
                *t += w;
            }
        }
        total
    }
}

/// Number of cells in a `width x height` kernel, checking both sides are odd
fn cell_count(width: usize, height: usize) -> Result<usize, RasterErrors> {
    if width % 2 == 0 || height % 2 == 0 {
        return Err(RasterErrors::InvalidParameter(
            "Kernel",
            format!("kernel sides must be odd, found {width}x{height}")
        ));
    }
    width.checked_mul(height).ok_or_else(|| {
        RasterErrors::InvalidParameter(
            "Kernel",
            format!("kernel of {width}x{height} cells is too large")
        )
    })
}

#[cfg(test)]
mod tests {
    use crate::kernel::Kernel;

    #[test]
    fn even_sides_are_rejected() {
        assert!(Kernel::from_scalars(2, 3, &[0.0; 6])
            .unwrap_err()
            .is_invalid_parameter());
        assert!(Kernel::from_scalars(3, 4, &[0.0; 12]).is_err());
        assert!(Kernel::from_scalars(0, 1, &[]).is_err());
        assert!(Kernel::box_blur(4).is_err());
    }

    #[test]
    fn overflowing_sides_are_rejected() {
        let huge = (1_usize << (usize::BITS / 2)) + 1;

        assert!(Kernel::box_blur(huge).unwrap_err().is_invalid_parameter());
        assert!(Kernel::new(huge, huge, vec![]).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn weight_count_must_match() {
        assert!(Kernel::from_scalars(3, 3, &[1.0; 8]).is_err());
        assert!(Kernel::from_scalars(3, 1, &[1.0; 3]).is_ok());
    }

    #[test]
    fn box_blur_sums_to_one() {
        let kernel = Kernel::box_blur(5).unwrap();

        assert_eq!(kernel.dimensions(), (5, 5));
        assert_eq!(kernel.radius(), (2, 2));
        for total in kernel.total_weight() {
            assert!((total - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn derivative_kernels_sum_to_zero() {
        assert_eq!(Kernel::sobel_vertical().total_weight(), [0.0; 3]);
        assert_eq!(Kernel::sobel_horizontal().total_weight(), [0.0; 3]);
        assert_eq!(Kernel::sobel_vertical().weight(1, 2), [0.5; 3]);
        assert_eq!(Kernel::sobel_horizontal().weight(0, 1), [-0.5; 3]);
    }
}
