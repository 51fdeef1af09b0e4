/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Invert image pixels
use pixedit_core::errors::RasterErrors;
use pixedit_core::image::RasterImage;
use pixedit_core::pixel::Rgb;
use pixedit_core::traits::OperationsTrait;

/// Invert an image pixel.
///
/// The formula for inverting a 8 bit pixel
///  is `pixel[x,y] = 255-pixel[x,y]`
#[derive(Default, Copy, Clone, Debug)]
pub struct Invert;

impl Invert {
    /// Create a new invert operation
    #[must_use]
    pub fn new() -> Invert {
        Self
    }
}

impl OperationsTrait for Invert {
    fn name(&self) -> &'static str {
        "Invert"
    }

    fn execute_impl(&self, image: &mut RasterImage) -> Result<(), RasterErrors> {
        invert(image.pixels_mut());
        Ok(())
    }
}

///Invert a pixel
pub fn invert(in_image: &mut [Rgb]) {
    in_image
        .iter_mut()
        .for_each(|x| *x = x.map(|channel| u8::MAX - channel));
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use pixedit_core::image::RasterImage;
    use pixedit_core::pixel::Rgb;
    use pixedit_core::traits::OperationsTrait;

    use crate::invert::Invert;

    #[test]
    fn invert_channels() {
        let mut image = RasterImage::fill(Rgb::new(0, 100, 255), 2, 2).unwrap();
        Invert::new().execute(&mut image).unwrap();

        assert!(image.pixels().iter().all(|px| *px == Rgb::new(255, 155, 0)));
    }

    #[test]
    fn invert_twice_is_identity() {
        let mut bytes = vec![0_u8; 40 * 40 * 3];
        nanorand::WyRand::new().fill(&mut bytes);
        let image = RasterImage::from_rgb_bytes(40, 40, &bytes).unwrap();

        let twice = Invert::new()
            .clone_and_execute(&Invert::new().clone_and_execute(&image).unwrap())
            .unwrap();

        assert_eq!(twice, image);
    }
}
