/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during raster access and image processing
use std::fmt::{Debug, Display, Formatter};

/// All possible raster errors that can occur.
///
/// Every error is raised before the raster is touched, an
/// operation that returns one of these leaves the image as it was.
pub enum RasterErrors {
    /// A pixel coordinate fell outside the image
    ///
    /// Contains `(x, y, width, height)`
    OutOfBounds(usize, usize, usize, usize),
    /// A pixel value did not have three channels in `0..=255`
    InvalidPixelValue(String),
    /// An operation was given a parameter it cannot work with
    ///
    /// Contains the operation name and the reason
    InvalidParameter(&'static str, String),
    /// A buffer did not have the length the dimensions require
    ///
    /// Contains `(expected, found)`
    DimensionsMisMatch(usize, usize),
    /// Width or height was zero
    ZeroDimensions(usize, usize)
}

impl Debug for RasterErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds(x, y, width, height) => {
                writeln!(
                    f,
                    "Pixel ({x},{y}) is out of bounds for an image of {width}x{height}"
                )
            }
            Self::InvalidPixelValue(reason) => {
                writeln!(f, "Invalid pixel value: {reason}")
            }
            Self::InvalidParameter(operation, reason) => {
                writeln!(f, "Invalid parameter for `{operation}`: {reason}")
            }
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {expected} but found {found}"
                )
            }
            Self::ZeroDimensions(width, height) => {
                writeln!(
                    f,
                    "Image dimensions must be positive, found {width}x{height}"
                )
            }
        }
    }
}

impl Display for RasterErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for RasterErrors {}

impl RasterErrors {
    /// Return true if this error was caused by a bad coordinate
    #[must_use]
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds(..))
    }
    /// Return true if this error was caused by a bad pixel value
    #[must_use]
    pub const fn is_invalid_value(&self) -> bool {
        matches!(self, Self::InvalidPixelValue(..))
    }
    /// Return true if this error was caused by a bad operation parameter
    #[must_use]
    pub const fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter(..))
    }
}
