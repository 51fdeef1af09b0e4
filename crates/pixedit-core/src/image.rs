/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a single image
//!
//! An image is represented as
//!
//! - one continuous buffer of RGB pixels
//!     - laid out row by row (`index = y * width + x`)
//!         - with a width and height that always agree with the buffer length
//!
//! Dimensions and pixels can only change together, either by writing
//! a single pixel (which keeps the dimensions) or by replacing the
//! whole buffer through [`RasterImage::new`].
use crate::errors::RasterErrors;
use crate::metadata::ImageMetadata;
use crate::pixel::{IntoPixel, Rgb, CHANNELS};

/// Represents a single RGB image
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RasterImage {
    width:  usize,
    height: usize,
    pixels: Vec<Rgb>
}

impl RasterImage {
    /// Create a new image from a row-major pixel buffer
    ///
    /// # Errors
    /// - Width or height is zero
    /// - `pixels.len()` is not `width * height`
    pub fn new(width: usize, height: usize, pixels: Vec<Rgb>) -> Result<RasterImage, RasterErrors> {
        let expected = checked_area(width, height)?;

        if pixels.len() != expected {
            return Err(RasterErrors::DimensionsMisMatch(expected, pixels.len()));
        }
        Ok(RasterImage {
            width,
            height,
            pixels
        })
    }

    /// Create an image where every pixel has the value `pixel`
    ///
    /// # Errors
    /// Width or height is zero
    pub fn fill(pixel: Rgb, width: usize, height: usize) -> Result<RasterImage, RasterErrors> {
        let area = checked_area(width, height)?;

        RasterImage::new(width, height, vec![pixel; area])
    }

    /// Create an image whose pixels are produced by `func`
    ///
    /// `func` is called once per pixel with `(x, y)` in row-major order
    ///
    /// # Errors
    /// Width or height is zero
    pub fn from_fn<F>(width: usize, height: usize, mut func: F) -> Result<RasterImage, RasterErrors>
    where
        F: FnMut(usize, usize) -> Rgb
    {
        let area = checked_area(width, height)?;
        let mut pixels = Vec::with_capacity(area);

        for y in 0..height {
            for x in 0..width {
                pixels.push(func(x, y));
            }
        }
        RasterImage::new(width, height, pixels)
    }

    /// Create an image from interleaved `RGBRGB...` bytes
    ///
    /// This is the layout decoders hand out.
    ///
    /// # Errors
    /// - Width or height is zero
    /// - `bytes.len()` is not `width * height * 3`
    pub fn from_rgb_bytes(
        width: usize, height: usize, bytes: &[u8]
    ) -> Result<RasterImage, RasterErrors> {
        let expected = checked_area(width, height)?
            .checked_mul(CHANNELS)
            .ok_or(RasterErrors::DimensionsMisMatch(usize::MAX, bytes.len()))?;

        if bytes.len() != expected {
            return Err(RasterErrors::DimensionsMisMatch(expected, bytes.len()));
        }
        let pixels = bytes
            .chunks_exact(CHANNELS)
            .map(|chunk| Rgb([chunk[0], chunk[1], chunk[2]]))
            .collect();

        RasterImage::new(width, height, pixels)
    }

    /// Convert the image to interleaved `RGBRGB...` bytes
    #[must_use]
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|pixel| pixel.0).collect()
    }

    /// Get image dimensions as a tuple of (width,height)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return the metadata describing this image
    #[must_use]
    pub const fn metadata(&self) -> ImageMetadata {
        ImageMetadata::new(self.width, self.height)
    }

    /// Return the pixels of this image in row-major order
    #[must_use]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Return a mutable view into the pixels
    ///
    /// The slice cannot grow or shrink, so the dimensions
    /// stay valid whatever is written into it.
    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    /// Iterate over the rows of this image, top to bottom
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Rgb]> + '_ {
        self.pixels.chunks_exact(self.width)
    }

    /// Read the pixel at `(x, y)`
    ///
    /// # Errors
    /// If `x` or `y` lie outside the image
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<Rgb, RasterErrors> {
        let index = self.index_of(x, y)?;
        Ok(self.pixels[index])
    }

    /// Write `value` to the pixel at `(x, y)`
    ///
    /// The value is validated before anything is written, on error the
    /// image is left untouched.
    ///
    /// # Errors
    /// - If `value` is not three channels in `0..=255`
    /// - If `x` or `y` lie outside the image
    pub fn set_pixel<P: IntoPixel>(&mut self, x: usize, y: usize, value: P) -> Result<(), RasterErrors> {
        let pixel = value.into_pixel()?;
        let index = self.index_of(x, y)?;

        self.pixels[index] = pixel;
        Ok(())
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, RasterErrors> {
        if x >= self.width || y >= self.height {
            return Err(RasterErrors::OutOfBounds(x, y, self.width, self.height));
        }
        Ok(y * self.width + x)
    }
}

fn checked_area(width: usize, height: usize) -> Result<usize, RasterErrors> {
    if width == 0 || height == 0 {
        return Err(RasterErrors::ZeroDimensions(width, height));
    }
    width
        .checked_mul(height)
        .ok_or(RasterErrors::DimensionsMisMatch(usize::MAX, 0))
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;

    use crate::image::RasterImage;
    use crate::pixel::Rgb;

    fn random_image(width: usize, height: usize) -> RasterImage {
        let mut bytes = vec![0_u8; width * height * 3];
        nanorand::WyRand::new().fill(&mut bytes);
        RasterImage::from_rgb_bytes(width, height, &bytes).unwrap()
    }

    #[test]
    fn set_then_get() {
        let mut image = random_image(13, 7);

        for y in 0..7 {
            for x in 0..13 {
                let value = Rgb::new(x as u8, y as u8, (x * y) as u8);
                image.set_pixel(x, y, value).unwrap();
                assert_eq!(image.get_pixel(x, y).unwrap(), value);
            }
        }
    }

    #[test]
    fn row_major_layout() {
        let image = RasterImage::from_fn(3, 2, |x, y| Rgb::new(x as u8, y as u8, 0)).unwrap();

        assert_eq!(image.pixels()[4], Rgb::new(1, 1, 0));
        assert_eq!(image.rows().len(), 2);
        assert_eq!(image.rows().nth(1).unwrap()[2], Rgb::new(2, 1, 0));
    }

    #[test]
    fn out_of_bounds_access() {
        let mut image = RasterImage::fill(Rgb::BLACK, 4, 3).unwrap();

        assert!(image.get_pixel(4, 0).unwrap_err().is_out_of_bounds());
        assert!(image.get_pixel(0, 3).unwrap_err().is_out_of_bounds());
        assert!(image.set_pixel(9, 9, Rgb::WHITE).unwrap_err().is_out_of_bounds());
    }

    #[test]
    fn four_channel_value_is_rejected() {
        let mut image = random_image(5, 5);
        let before = image.clone();

        let err = image.set_pixel(2, 2, [1_i32, 2, 3, 4]).unwrap_err();

        assert!(err.is_invalid_value());
        assert_eq!(image, before);
    }

    #[test]
    fn bytes_must_match_dimensions() {
        assert!(RasterImage::from_rgb_bytes(2, 2, &[0; 11]).is_err());
        assert!(RasterImage::from_rgb_bytes(0, 2, &[]).is_err());
        assert!(RasterImage::new(2, 2, vec![Rgb::BLACK; 3]).is_err());

        let bytes = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        let image = RasterImage::from_rgb_bytes(2, 2, &bytes).unwrap();

        assert_eq!(image.get_pixel(0, 1).unwrap(), Rgb::new(7, 8, 9));
        assert_eq!(image.to_rgb_bytes(), bytes);
    }
}
