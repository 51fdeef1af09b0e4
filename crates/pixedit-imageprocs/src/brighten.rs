/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Change the brightness of an image
use pixedit_core::errors::RasterErrors;
use pixedit_core::image::RasterImage;
use pixedit_core::pixel::Rgb;
use pixedit_core::traits::OperationsTrait;

/// Range of values the brightness slider reports
pub const SLIDER_RANGE: core::ops::RangeInclusive<i32> = -100..=100;

/// Scale every channel by `1 + factor`
///
/// Negative factors darken the image, positive ones brighten it.
/// The result is truncated towards zero and clamped to `0..=255`
///
/// ```text
/// pixel[x,y] = clamp(floor(pixel[x,y] * (1 + factor)), 0, 255)
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Brighten {
    factor: f32
}

impl Brighten {
    /// Create a new brighten operation
    ///
    /// # Arguments
    /// - factor: Signed multiplier, `0.5` makes pixels 50% brighter,
    ///  `-0.5` halves them
    #[must_use]
    pub fn new(factor: f32) -> Brighten {
        Brighten { factor }
    }

    /// Create a brighten operation from a slider position in `-100..=100`
    ///
    /// The position is a percentage, `-100` turns the image black and `100`
    /// doubles every channel
    ///
    /// # Errors
    /// If `value` is outside the slider range
    pub fn from_slider(value: i32) -> Result<Brighten, RasterErrors> {
        if !SLIDER_RANGE.contains(&value) {
            return Err(RasterErrors::InvalidParameter(
                "Brighten",
                format!("slider value {value} is outside {SLIDER_RANGE:?}")
            ));
        }
        Ok(Brighten::new(value as f32 / 100.0))
    }

    #[must_use]
    pub const fn factor(&self) -> f32 {
        self.factor
    }
}

impl OperationsTrait for Brighten {
    fn name(&self) -> &'static str {
        "Brighten"
    }

    fn execute_impl(&self, image: &mut RasterImage) -> Result<(), RasterErrors> {
        if !self.factor.is_finite() {
            return Err(RasterErrors::InvalidParameter(
                self.name(),
                format!("factor must be finite, found {}", self.factor)
            ));
        }
        brighten(image.pixels_mut(), self.factor);
        Ok(())
    }
}

pub fn brighten(pixels: &mut [Rgb], factor: f32) {
    let scale = 1.0 + factor;

    pixels.iter_mut().for_each(|x| {
        *x = x.map(|channel| (f32::from(channel) * scale).floor().clamp(0.0, 255.0) as u8);
    });
}

#[cfg(test)]
mod tests {
    use pixedit_core::image::RasterImage;
    use pixedit_core::pixel::Rgb;
    use pixedit_core::traits::OperationsTrait;

    use crate::brighten::Brighten;

    fn image() -> RasterImage {
        RasterImage::fill(Rgb::new(10, 100, 200), 3, 3).unwrap()
    }

    #[test]
    fn brighten_saturates_at_white() {
        let out = Brighten::new(0.5).clone_and_execute(&image()).unwrap();
        assert_eq!(out.get_pixel(1, 1).unwrap(), Rgb::new(15, 150, 255));
    }

    #[test]
    fn darken_floors_and_stops_at_black() {
        let out = Brighten::new(-0.25).clone_and_execute(&image()).unwrap();
        assert_eq!(out.get_pixel(0, 0).unwrap(), Rgb::new(7, 75, 150));

        let out = Brighten::new(-3.0).clone_and_execute(&image()).unwrap();
        assert!(out.pixels().iter().all(|px| *px == Rgb::BLACK));
    }

    #[test]
    fn zero_factor_is_identity() {
        let out = Brighten::new(0.0).clone_and_execute(&image()).unwrap();
        assert_eq!(out, image());
    }

    #[test]
    fn slider_mapping() {
        assert_eq!(Brighten::from_slider(50).unwrap().factor(), 0.5);
        assert_eq!(Brighten::from_slider(-100).unwrap().factor(), -1.0);
        assert!(Brighten::from_slider(101).unwrap_err().is_invalid_parameter());
        assert!(Brighten::from_slider(-101).is_err());
    }

    #[test]
    fn non_finite_factor_is_rejected() {
        let mut img = image();
        assert!(Brighten::new(f32::NAN).execute(&mut img).is_err());
        assert_eq!(img, image());
    }
}
