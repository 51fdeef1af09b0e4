/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! 2D convolution on images
//!
//! This filter supports kernels of any odd width and height,
//! with separate weights per channel.
//!
//! The intermediate calculations are carried in `f32` and the result
//! of a convolution is kept as a [`FilterResponse`], which may hold
//! negative values. It only becomes an image again when it is clamped
//! back to `0..=255` by [`FilterResponse::to_image`].
//!
use pixedit_core::errors::RasterErrors;
use pixedit_core::image::RasterImage;
use pixedit_core::log::trace;
use pixedit_core::pixel::{Rgb, CHANNELS};
use pixedit_core::traits::OperationsTrait;

use crate::kernel::Kernel;

/// Upper bound a running sum is clamped to after every addition
const ACCUMULATOR_CEILING: f32 = 255.0;

/// Below this many rows, spawning threads costs more than it saves
#[cfg(feature = "threads")]
const MIN_ROWS_PER_THREAD: usize = 16;

/// How kernel taps falling outside the image are treated
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum BorderMode {
    /// Taps outside the image are skipped, border pixels
    /// are computed from fewer neighbours
    #[default]
    Skip,
    /// Taps outside the image are skipped and the sum is rescaled
    /// by `total weight / used weight`, so an averaging kernel
    /// averages over the part of the window inside the image
    Shrink,
    /// Taps outside the image read the nearest edge pixel
    Replicate
}

/// How the running sum of a convolution is accumulated
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Accumulate {
    /// After every addition the sum is truncated to an integer
    /// and clamped to at most 255
    #[default]
    Truncating,
    /// The sum keeps its fraction and is only clamped to at most 255,
    /// rounding happens when the response is turned into an image
    Exact
}

/// Options influencing a convolution
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ConvolveOptions {
    border:     BorderMode,
    accumulate: Accumulate
}

impl ConvolveOptions {
    #[must_use]
    pub const fn new(border: BorderMode, accumulate: Accumulate) -> ConvolveOptions {
        ConvolveOptions { border, accumulate }
    }
    #[must_use]
    pub const fn set_border_mode(mut self, border: BorderMode) -> Self {
        self.border = border;
        self
    }
    #[must_use]
    pub const fn set_accumulate(mut self, accumulate: Accumulate) -> Self {
        self.accumulate = accumulate;
        self
    }
}

/// The raw output of a convolution
///
/// Same dimensions as the convolved image, one signed value per channel.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterResponse {
    width:  usize,
    height: usize,
    values: Vec<[f32; CHANNELS]>
}

impl FilterResponse {
    /// Get dimensions as a tuple of (width,height)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Values in row-major order
    #[must_use]
    pub fn values(&self) -> &[[f32; CHANNELS]] {
        &self.values
    }

    /// Value at `(x, y)` or `None` if outside the response
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<[f32; CHANNELS]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.values[y * self.width + x])
    }

    /// Combine two responses of the same size channel by channel
    ///
    /// # Errors
    /// If the two responses differ in size
    pub fn combine<F>(&self, other: &FilterResponse, function: F) -> Result<FilterResponse, RasterErrors>
    where
        F: Fn(f32, f32) -> f32
    {
        if self.dimensions() != other.dimensions() {
            return Err(RasterErrors::DimensionsMisMatch(
                self.values.len(),
                other.values.len()
            ));
        }
        let values = self
            .values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| [0, 1, 2].map(|c| function(a[c], b[c])))
            .collect();

        Ok(FilterResponse {
            width: self.width,
            height: self.height,
            values
        })
    }

    /// Convert the response to an image
    ///
    /// Values are rounded to the nearest integer and clamped to `0..=255`
    ///
    /// # Errors
    /// Propagates errors from creating the image, which cannot happen for
    /// responses produced by [`convolve`]
    pub fn to_image(&self) -> Result<RasterImage, RasterErrors> {
        let pixels = self
            .values
            .iter()
            .map(|value| Rgb(value.map(|v| v.round().clamp(0.0, 255.0) as u8)))
            .collect();

        RasterImage::new(self.width, self.height, pixels)
    }
}

/// Convolve an image
///
/// # Example
/// - Sharpen an image with a 3x3 filter matrix
///
/// ```
/// use pixedit_core::errors::RasterErrors;
/// use pixedit_core::image::RasterImage;
/// use pixedit_core::pixel::Rgb;
/// use pixedit_core::traits::OperationsTrait;
/// use pixedit_imageprocs::convolve::{BorderMode, Convolve};
/// use pixedit_imageprocs::kernel::Kernel;
///
/// let kernel = Kernel::from_scalars(3, 3, &[ 0.0, -1.0,  0.0,
///                                           -1.0,  5.0, -1.0,
///                                            0.0, -1.0,  0.0])?;
///
/// let mut image = RasterImage::from_fn(64, 64, |x, y| Rgb::splat((x * y % 256) as u8))?;
///
/// Convolve::new(kernel).set_border_mode(BorderMode::Replicate).execute(&mut image)?;
/// # Ok::<(),RasterErrors>(())
/// ```
#[derive(Clone, Debug)]
pub struct Convolve {
    kernel:  Kernel,
    options: ConvolveOptions
}

impl Convolve {
    /// Create a new convolve operation using the reference
    /// border and accumulation behaviour
    #[must_use]
    pub fn new(kernel: Kernel) -> Convolve {
        Convolve {
            kernel,
            options: ConvolveOptions::default()
        }
    }
    #[must_use]
    pub fn set_border_mode(mut self, border: BorderMode) -> Self {
        self.options = self.options.set_border_mode(border);
        self
    }
    #[must_use]
    pub fn set_accumulate(mut self, accumulate: Accumulate) -> Self {
        self.options = self.options.set_accumulate(accumulate);
        self
    }
}

impl OperationsTrait for Convolve {
    fn name(&self) -> &'static str {
        "2D convolution"
    }

    fn execute_impl(&self, image: &mut RasterImage) -> Result<(), RasterErrors> {
        let response = convolve_with(image, &self.kernel, self.options);

        *image = response.to_image()?;
        Ok(())
    }
}

/// Convolve `image` with `kernel`, skipping taps outside the image and
/// truncating the running sum after each addition
///
/// The input is not modified.
#[must_use]
pub fn convolve(image: &RasterImage, kernel: &Kernel) -> FilterResponse {
    convolve_with(image, kernel, ConvolveOptions::default())
}

/// Convolve `image` with `kernel` using the given options
///
/// Every output value only depends on the source image, so rows are
/// independent and with the `threads` feature they are split between
/// scoped threads, each writing only to its own rows.
#[must_use]
pub fn convolve_with(image: &RasterImage, kernel: &Kernel, options: ConvolveOptions) -> FilterResponse {
    let (width, height) = image.dimensions();
    let mut values = vec![[0.0_f32; CHANNELS]; width * height];

    #[cfg(feature = "threads")]
    {
        let threads = std::thread::available_parallelism()
            .map_or(1, std::num::NonZeroUsize::get)
            .min(height.div_ceil(MIN_ROWS_PER_THREAD))
            .max(1);

        if threads > 1 {
            trace!("Running convolve in multithreaded mode with {threads} threads");

            let rows_per_thread = height.div_ceil(threads);

            std::thread::scope(|s| {
                for (position, chunk) in values.chunks_mut(rows_per_thread * width).enumerate() {
                    s.spawn(move || {
                        convolve_rows(image, kernel, options, position * rows_per_thread, chunk);
                    });
                }
            });
        } else {
            convolve_rows(image, kernel, options, 0, &mut values);
        }
    }
    #[cfg(not(feature = "threads"))]
    {
        trace!("Running convolve in single threaded mode");
        convolve_rows(image, kernel, options, 0, &mut values);
    }

    FilterResponse {
        width,
        height,
        values
    }
}

/// Map a possibly out of bounds source position to an in bounds one
#[inline]
fn resolve(position: isize, length: usize, border: BorderMode) -> Option<usize> {
    if (0..length as isize).contains(&position) {
        return Some(position as usize);
    }
    match border {
        BorderMode::Replicate => Some(position.clamp(0, length as isize - 1) as usize),
        BorderMode::Skip | BorderMode::Shrink => None
    }
}

#[inline]
fn accumulate(sum: f32, value: f32, mode: Accumulate) -> f32 {
    let sum = sum + value;

    match mode {
        Accumulate::Truncating => sum.trunc().min(ACCUMULATOR_CEILING),
        Accumulate::Exact => sum.min(ACCUMULATOR_CEILING)
    }
}

/// Convolve the rows starting at `first_row` into `out`
///
/// `out` holds whole rows of the output
fn convolve_rows(
    image: &RasterImage, kernel: &Kernel, options: ConvolveOptions, first_row: usize,
    out: &mut [[f32; CHANNELS]]
) {
    let (width, height) = image.dimensions();
    let (kernel_width, kernel_height) = kernel.dimensions();
    let (radius_x, radius_y) = kernel.radius();
    let pixels = image.pixels();
    let total = kernel.total_weight();

    for (row_offset, out_row) in out.chunks_exact_mut(width).enumerate() {
        let y = first_row + row_offset;

        for (x, out_value) in out_row.iter_mut().enumerate() {
            let mut sum = [0.0_f32; CHANNELS];
            let mut used = [0.0_f32; CHANNELS];

            for ky in 0..kernel_height {
                let source_y = y as isize + ky as isize - radius_y as isize;

                let Some(source_y) = resolve(source_y, height, options.border) else {
                    continue;
                };
                let source_row = &pixels[source_y * width..(source_y + 1) * width];

                for kx in 0..kernel_width {
                    let source_x = x as isize + kx as isize - radius_x as isize;

                    let Some(source_x) = resolve(source_x, width, options.border) else {
                        continue;
                    };
                    let pixel = source_row[source_x].0;
                    let weights = kernel.weight(kx, ky);

                    for c in 0..CHANNELS {
                        sum[c] = accumulate(sum[c], f32::from(pixel[c]) * weights[c], options.accumulate);
                        used[c] += weights[c];
                    }
                }
            }
            if options.border == BorderMode::Shrink {
                for c in 0..CHANNELS {
                    if used[c] != 0.0 && total[c] != 0.0 {
                        sum[c] = accumulate(0.0, sum[c] * (total[c] / used[c]), options.accumulate);
                    }
                }
            }
            *out_value = sum;
        }
    }
}
