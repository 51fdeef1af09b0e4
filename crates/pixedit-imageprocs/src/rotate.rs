/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Rotate an image by multiples of 90 degrees clockwise
use pixedit_core::errors::RasterErrors;
use pixedit_core::image::RasterImage;
use pixedit_core::log::trace;
use pixedit_core::traits::OperationsTrait;

/// Rotate an image clockwise by `turns * 90` degrees
///
/// `turns` must be one of 1 (90°), 2 (180°) or 3 (270°).
///
/// ```text
///  old image     turns = 1
///  ┌───────┐     ┌───────┐
///  │1 2 3  │     │7 4 1  │
///  │4 5 6  │     │8 5 2  │
///  │7 8 9  │     │9 6 3  │
///  └───────┘     └───────┘
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Rotate {
    turns: u8
}

impl Rotate {
    /// Create a new rotate operation that turns the image
    /// `turns` times by 90 degrees clockwise
    #[must_use]
    pub const fn new(turns: u8) -> Rotate {
        Rotate { turns }
    }
    /// Rotate 90 degrees clockwise
    #[must_use]
    pub const fn right() -> Rotate {
        Rotate::new(1)
    }
    /// Rotate 90 degrees counter-clockwise
    ///
    /// This is three clockwise turns
    #[must_use]
    pub const fn left() -> Rotate {
        Rotate::new(3)
    }
}

impl OperationsTrait for Rotate {
    fn name(&self) -> &'static str {
        "Rotate"
    }

    fn execute_impl(&self, image: &mut RasterImage) -> Result<(), RasterErrors> {
        if !(1..=3).contains(&self.turns) {
            return Err(RasterErrors::InvalidParameter(
                self.name(),
                format!("turn index must be 1, 2 or 3, found {}", self.turns)
            ));
        }
        if self.turns == 2 {
            // dimensions don't change, no need to reallocate
            trace!("Rotating by 180 degrees in place");
            let width = image.width();
            rotate_180(image.pixels_mut(), width);
            return Ok(());
        }

        for _ in 0..self.turns {
            let (width, height) = image.dimensions();
            let mut out = image.pixels().to_vec();

            rotate_90(image.pixels(), &mut out, width, height);

            // widths become heights
            *image = RasterImage::new(height, width, out)?;
        }
        Ok(())
    }
}

/// Rotate an image by 180 degrees in place.
///
/// This method is preferred as it does it in place as opposed
/// to two quarter turns which do it out of place
pub fn rotate_180<T: Copy>(in_out_image: &mut [T], width: usize) {
    // swap bottom row with top row, reversing both

    // divide array into two
    let half = in_out_image.len() / 2;
    let (top, bottom) = in_out_image.split_at_mut(half);

    for (top_chunk, bottom_chunk) in top
        .chunks_exact_mut(width)
        .zip(bottom.rchunks_exact_mut(width))
    {
        for (a, b) in top_chunk.iter_mut().zip(bottom_chunk.iter_mut().rev()) {
            core::mem::swap(a, b);
        }
    }
    // an odd number of rows leaves the middle row in one of the halves
    // straddling the split, reverse it on its own
    let height = in_out_image.len() / width;

    if height % 2 == 1 {
        let middle = height / 2;
        in_out_image[middle * width..(middle + 1) * width].reverse();
    }
}

/// Rotate an image 90 degrees clockwise out of place
///
/// `in_image` has dimensions `width x height`, `out_image` receives
/// the rotated image which is `height x width`.
///
/// The lower left pixel becomes the top left pixel
///
/// ```text
/// [1,2,3]    [7,4,1]
/// [4,5,6] -> [8,5,2]
/// [7,8,9]    [9,6,3]
/// ```
pub fn rotate_90<T: Copy>(in_image: &[T], out_image: &mut [T], width: usize, height: usize) {
    assert_eq!(in_image.len(), width * height);
    assert_eq!(out_image.len(), width * height);

    // a 90 degree rotation is a bit cache unfriendly,
    // since widths become heights, source rows are read
    // contiguously and written as destination columns
    for (y, row) in in_image.chunks_exact(width).enumerate() {
        let dst_x = height - y - 1;

        for (x, pixel) in row.iter().enumerate() {
            out_image[x * height + dst_x] = *pixel;
        }
    }
}
