/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A single RGB pixel
//!
//! Pixels are stored inline as three `u8` channels, so a raster
//! never allocates per pixel.
use crate::errors::RasterErrors;

/// Number of channels in a pixel
pub const CHANNELS: usize = 3;

/// An 8 bit RGB pixel
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct Rgb(pub [u8; CHANNELS]);

impl Rgb {
    pub const BLACK: Rgb = Rgb([0, 0, 0]);
    pub const WHITE: Rgb = Rgb([255, 255, 255]);

    /// Create a new pixel from its three channels
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb([r, g, b])
    }

    /// Create a pixel whose three channels have the same value
    #[must_use]
    pub const fn splat(value: u8) -> Rgb {
        Rgb([value; CHANNELS])
    }

    #[must_use]
    pub const fn r(self) -> u8 {
        self.0[0]
    }

    #[must_use]
    pub const fn g(self) -> u8 {
        self.0[1]
    }

    #[must_use]
    pub const fn b(self) -> u8 {
        self.0[2]
    }

    #[must_use]
    pub const fn channels(self) -> [u8; CHANNELS] {
        self.0
    }

    /// Apply `function` to every channel of this pixel
    #[must_use]
    pub fn map<F: Fn(u8) -> u8>(self, function: F) -> Rgb {
        Rgb(self.0.map(function))
    }

    /// Create a pixel from any slice of integers
    ///
    /// # Errors
    /// The slice must hold exactly three values, each in `0..=255`
    pub fn from_slice<T>(values: &[T]) -> Result<Rgb, RasterErrors>
    where
        T: Copy + Into<i64>
    {
        if values.len() != CHANNELS {
            return Err(RasterErrors::InvalidPixelValue(format!(
                "expected {CHANNELS} channels but found {}",
                values.len()
            )));
        }
        let mut out = [0_u8; CHANNELS];

        for (position, (dst, src)) in out.iter_mut().zip(values).enumerate() {
            let value: i64 = (*src).into();

            *dst = u8::try_from(value).map_err(|_| {
                RasterErrors::InvalidPixelValue(format!(
                    "channel {position} has value {value}, which is outside 0..=255"
                ))
            })?;
        }
        Ok(Rgb(out))
    }
}

impl From<[u8; CHANNELS]> for Rgb {
    fn from(value: [u8; CHANNELS]) -> Self {
        Rgb(value)
    }
}

impl From<Rgb> for [u8; CHANNELS] {
    fn from(value: Rgb) -> Self {
        value.0
    }
}

/// Values that can be written into a raster as a pixel
///
/// Fixed size `u8` triples always succeed, everything else is range
/// checked before it can reach the raster.
pub trait IntoPixel {
    /// Convert this value into a pixel
    ///
    /// # Errors
    /// If the value does not have three channels in `0..=255`
    fn into_pixel(self) -> Result<Rgb, RasterErrors>;
}

impl IntoPixel for Rgb {
    fn into_pixel(self) -> Result<Rgb, RasterErrors> {
        Ok(self)
    }
}

impl IntoPixel for [u8; CHANNELS] {
    fn into_pixel(self) -> Result<Rgb, RasterErrors> {
        Ok(Rgb(self))
    }
}

macro_rules! into_pixel_for_int {
    ($int:tt) => {
        impl<const N: usize> IntoPixel for [$int; N] {
            fn into_pixel(self) -> Result<Rgb, RasterErrors> {
                Rgb::from_slice(&self)
            }
        }

        impl IntoPixel for &[$int] {
            fn into_pixel(self) -> Result<Rgb, RasterErrors> {
                Rgb::from_slice(self)
            }
        }

        impl IntoPixel for Vec<$int> {
            fn into_pixel(self) -> Result<Rgb, RasterErrors> {
                Rgb::from_slice(&self)
            }
        }
    };
}

into_pixel_for_int!(i32);
into_pixel_for_int!(i64);
into_pixel_for_int!(u16);

impl IntoPixel for &[u8] {
    fn into_pixel(self) -> Result<Rgb, RasterErrors> {
        Rgb::from_slice(self)
    }
}

impl IntoPixel for Vec<u8> {
    fn into_pixel(self) -> Result<Rgb, RasterErrors> {
        Rgb::from_slice(&self)
    }
}

#[cfg(test)]
mod tests {
    use crate::pixel::{IntoPixel, Rgb};

    #[test]
    fn slice_with_three_channels() {
        let px = [10_i32, 20, 30].into_pixel().unwrap();
        assert_eq!(px, Rgb::new(10, 20, 30));
    }

    #[test]
    fn wrong_channel_count() {
        let err = [1_i32, 2, 3, 4].into_pixel().unwrap_err();
        assert!(err.is_invalid_value());

        let err = vec![1_u8, 2].into_pixel().unwrap_err();
        assert!(err.is_invalid_value());
    }

    #[test]
    fn out_of_range_channels() {
        assert!([0_i32, 256, 0].into_pixel().unwrap_err().is_invalid_value());
        assert!([-1_i64, 0, 0].into_pixel().unwrap_err().is_invalid_value());
        assert!(vec![255_u16, 255, 255].into_pixel().is_ok());
    }
}
