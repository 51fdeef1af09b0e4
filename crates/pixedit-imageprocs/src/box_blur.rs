/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Box blur
//!
//! Every pixel becomes the average of the `size x size` window around it.
//! Near the borders the window is cut to the part inside the image and
//! the average is taken over that part only.
use pixedit_core::errors::RasterErrors;
use pixedit_core::image::RasterImage;
use pixedit_core::log::trace;
use pixedit_core::traits::OperationsTrait;

use crate::convolve::{convolve_with, Accumulate, BorderMode, ConvolveOptions};
use crate::kernel::{Kernel, DEFAULT_BLUR_SIZE};

/// Perform a box blur
///
/// The radius of the blur is `(size - 1) / 2`
#[derive(Copy, Clone, Debug)]
pub struct BoxBlur {
    size: usize
}

impl BoxBlur {
    /// Create a new blur operation.
    ///
    /// # Arguments
    /// - size: Side of the averaging window, must be odd.
    ///   Larger sizes blur more
    #[must_use]
    pub fn new(size: usize) -> BoxBlur {
        BoxBlur { size }
    }
}

impl Default for BoxBlur {
    fn default() -> Self {
        BoxBlur::new(DEFAULT_BLUR_SIZE)
    }
}

impl OperationsTrait for BoxBlur {
    fn name(&self) -> &'static str {
        "Box blur"
    }

    fn execute_impl(&self, image: &mut RasterImage) -> Result<(), RasterErrors> {
        if self.size % 2 == 0 {
            return Err(RasterErrors::InvalidParameter(
                self.name(),
                format!("blur size must be odd and non-zero, found {}", self.size)
            ));
        }
        // windows are cut at the borders, so one spanning the image from
        // any pixel averages the same cells as any larger one
        let (width, height) = image.dimensions();
        let size = self.size.min(width.max(height).saturating_mul(2) - 1);

        // build the kernel before touching the image
        let kernel = Kernel::box_blur(size)
            .map_err(|e| RasterErrors::InvalidParameter(self.name(), format!("{e}")))?;
        trace!("Blurring with a {0}x{0} window", size);

        *image = box_blur(image, &kernel)?;
        Ok(())
    }
}

/// Blur `image` with an averaging kernel
///
/// # Errors
/// Propagates errors from converting the filter response back to an image
pub fn box_blur(image: &RasterImage, kernel: &Kernel) -> Result<RasterImage, RasterErrors> {
    let options = ConvolveOptions::new(BorderMode::Shrink, Accumulate::Exact);

    convolve_with(image, kernel, options).to_image()
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use pixedit_core::image::RasterImage;
    use pixedit_core::pixel::Rgb;
    use pixedit_core::traits::OperationsTrait;

    use crate::box_blur::BoxBlur;

    #[test]
    fn uniform_image_stays_uniform() {
        for value in [0, 1, 77, 128, 254, 255] {
            let image = RasterImage::fill(Rgb::new(value, value / 2, 255 - value), 13, 9).unwrap();

            for size in [1, 3, 5, 7, 15] {
                let blurred = BoxBlur::new(size).clone_and_execute(&image).unwrap();
                assert_eq!(blurred, image, "size {size} value {value}");
            }
        }
    }

    #[test]
    fn blur_smooths_a_spike() {
        let mut image = RasterImage::fill(Rgb::BLACK, 5, 5).unwrap();
        image.set_pixel(2, 2, [250, 250, 250]).unwrap();

        BoxBlur::new(3).execute(&mut image).unwrap();

        assert_eq!(image.get_pixel(2, 2).unwrap(), Rgb::splat(28));
        assert_eq!(image.get_pixel(1, 1).unwrap(), Rgb::splat(28));
        assert_eq!(image.get_pixel(0, 0).unwrap(), Rgb::BLACK);
    }

    #[test]
    fn blur_keeps_dimensions() {
        let mut bytes = vec![0_u8; 40 * 17 * 3];
        nanorand::WyRand::new().fill(&mut bytes);
        let image = RasterImage::from_rgb_bytes(40, 17, &bytes).unwrap();

        let blurred = BoxBlur::default().clone_and_execute(&image).unwrap();

        assert_eq!(blurred.dimensions(), (40, 17));
    }

    #[test]
    fn even_size_is_rejected_without_mutating() {
        let mut image = RasterImage::from_fn(4, 4, |x, y| Rgb::splat((x * 4 + y) as u8)).unwrap();
        let before = image.clone();

        for size in [0, 2, 6] {
            let err = BoxBlur::new(size).execute(&mut image).unwrap_err();
            assert!(err.is_invalid_parameter());
        }
        assert_eq!(image, before);
    }

    #[test]
    fn oversized_window_averages_the_whole_image() {
        let image = RasterImage::from_fn(5, 4, |x, y| Rgb::splat((x * 40 + y * 6) as u8)).unwrap();

        // smallest window reaching every pixel from every other one
        let expected = BoxBlur::new(9).clone_and_execute(&image).unwrap();

        for size in [11, 20_001, (1_usize << 32) + 1, usize::MAX] {
            let blurred = BoxBlur::new(size).clone_and_execute(&image).unwrap();
            assert_eq!(blurred, expected, "size {size}");
        }
        assert!(expected.pixels().iter().all(|px| *px == expected.pixels()[0]));
    }
}
