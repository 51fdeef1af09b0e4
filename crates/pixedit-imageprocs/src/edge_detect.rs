/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Edge detection via gradient magnitude
//!
//! The image is convolved with two derivative kernels, one responding to
//! changes from top to bottom and one to changes from left to right.
//! Each response is rectified and the two are combined per channel as
//!
//! ```text
//! magnitude = sqrt(|vertical|² + |horizontal|²)
//! ```
//!
//! Borders replicate the nearest pixel, so flat regions, including the
//! ones touching the image edges, produce zero.
use pixedit_core::errors::RasterErrors;
use pixedit_core::image::RasterImage;
use pixedit_core::traits::OperationsTrait;

use crate::convolve::{convolve_with, Accumulate, BorderMode, ConvolveOptions};
use crate::kernel::Kernel;

/// Replace an image with its gradient magnitude
#[derive(Default, Copy, Clone, Debug)]
pub struct EdgeDetect;

impl EdgeDetect {
    #[must_use]
    pub fn new() -> EdgeDetect {
        Self
    }
}

impl OperationsTrait for EdgeDetect {
    fn name(&self) -> &'static str {
        "Edge detect"
    }

    fn execute_impl(&self, image: &mut RasterImage) -> Result<(), RasterErrors> {
        *image = edge_detect(image)?;
        Ok(())
    }
}

/// Compute the gradient magnitude of `image`
///
/// # Errors
/// Propagates errors from combining the two responses
pub fn edge_detect(image: &RasterImage) -> Result<RasterImage, RasterErrors> {
    let options = ConvolveOptions::new(BorderMode::Replicate, Accumulate::Exact);

    let vertical = convolve_with(image, &Kernel::sobel_vertical(), options);
    let horizontal = convolve_with(image, &Kernel::sobel_horizontal(), options);

    vertical
        .combine(&horizontal, |a, b| a.abs().hypot(b.abs()))?
        .to_image()
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use pixedit_core::image::RasterImage;
    use pixedit_core::pixel::Rgb;
    use pixedit_core::traits::OperationsTrait;

    use crate::edge_detect::EdgeDetect;

    #[test]
    fn uniform_image_has_no_edges() {
        let mut seed = [0_u8; 3];
        nanorand::WyRand::new().fill(&mut seed);

        for pixel in [Rgb::BLACK, Rgb::WHITE, Rgb(seed)] {
            let image = RasterImage::fill(pixel, 11, 6).unwrap();
            let edges = EdgeDetect::new().clone_and_execute(&image).unwrap();

            assert!(edges.pixels().iter().all(|px| *px == Rgb::BLACK));
        }
    }

    #[test]
    fn vertical_step_is_detected() {
        // left half black, right half white
        let image = RasterImage::from_fn(6, 4, |x, _| if x < 3 { Rgb::BLACK } else { Rgb::WHITE })
            .unwrap();
        let edges = EdgeDetect::new().clone_and_execute(&image).unwrap();

        for y in 0..4 {
            assert_eq!(edges.get_pixel(0, y).unwrap(), Rgb::BLACK);
            assert_eq!(edges.get_pixel(2, y).unwrap(), Rgb::WHITE);
            assert_eq!(edges.get_pixel(3, y).unwrap(), Rgb::WHITE);
            assert_eq!(edges.get_pixel(5, y).unwrap(), Rgb::BLACK);
        }
    }

    #[test]
    fn horizontal_step_is_detected() {
        let image = RasterImage::from_fn(4, 6, |_, y| if y < 3 { Rgb::BLACK } else { Rgb::WHITE })
            .unwrap();
        let edges = EdgeDetect::new().clone_and_execute(&image).unwrap();

        assert_eq!(edges.get_pixel(1, 2).unwrap(), Rgb::WHITE);
        assert_eq!(edges.get_pixel(1, 0).unwrap(), Rgb::BLACK);
    }
}
