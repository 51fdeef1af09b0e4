/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Convert an image to greyscale
//!
//! The image stays RGB, every channel of a pixel receives the pixel's luma.
use pixedit_core::errors::RasterErrors;
use pixedit_core::image::RasterImage;
use pixedit_core::pixel::Rgb;
use pixedit_core::traits::OperationsTrait;

// coefficients in thousandths
const R_COEF: u32 = 299;
const G_COEF: u32 = 587;
const B_COEF: u32 = 114;

/// Replace each pixel with its luma
///
/// The formula used is
/// ```text
/// luma = round(0.299 * R + 0.587 * G + 0.114 * B)
/// ```
/// evaluated exactly in integers, values halfway between two
/// integers round up.
///
/// Pixels are independent of each other, so the result
/// does not depend on the order they are visited in.
#[derive(Default, Copy, Clone, Debug)]
pub struct Grayscale;

impl Grayscale {
    #[must_use]
    pub fn new() -> Grayscale {
        Self
    }
}

impl OperationsTrait for Grayscale {
    fn name(&self) -> &'static str {
        "Greyscale"
    }

    fn execute_impl(&self, image: &mut RasterImage) -> Result<(), RasterErrors> {
        convert_rgb_to_grayscale(image.pixels_mut());
        Ok(())
    }
}

pub fn convert_rgb_to_grayscale(pixels: &mut [Rgb]) {
    for pixel in pixels {
        *pixel = Rgb::splat(luma(*pixel));
    }
}

/// Luma of a single pixel
///
/// The coefficients sum to one, so the result never exceeds 255
#[inline]
#[must_use]
pub fn luma(pixel: Rgb) -> u8 {
    let [r, g, b] = pixel.0;

    let value = R_COEF * u32::from(r) + G_COEF * u32::from(g) + B_COEF * u32::from(b);

    ((value + 500) / 1000) as u8
}
