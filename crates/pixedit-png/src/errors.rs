/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors that can occur when loading or saving an image
use std::fmt::{Debug, Display, Formatter};

use pixedit_core::errors::RasterErrors;
use zune_core::colorspace::ColorSpace;
use zune_png::error::PngDecodeErrors;

/// Possible errors when moving images in and out of files
pub enum CodecErrors {
    /// The file could not be read or written
    Io(std::io::Error),
    /// The file is not a PNG the decoder understands
    Decode(String),
    /// The decoded image uses a colorspace that can't be turned into RGB
    UnsupportedColorspace(ColorSpace),
    /// The decoded data does not agree with the dimensions
    Raster(RasterErrors)
}

impl Debug for CodecErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => {
                writeln!(f, "I/O error: {err}")
            }
            Self::Decode(reason) => {
                writeln!(f, "Could not decode png: {reason}")
            }
            Self::UnsupportedColorspace(colorspace) => {
                writeln!(
                    f,
                    "Colorspace {colorspace:?} cannot be converted to RGB"
                )
            }
            Self::Raster(err) => {
                writeln!(f, "{err:?}")
            }
        }
    }
}

impl Display for CodecErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for CodecErrors {}

impl From<std::io::Error> for CodecErrors {
    fn from(value: std::io::Error) -> Self {
        CodecErrors::Io(value)
    }
}

impl From<PngDecodeErrors> for CodecErrors {
    fn from(value: PngDecodeErrors) -> Self {
        CodecErrors::Decode(format!("{value:?}"))
    }
}

impl From<RasterErrors> for CodecErrors {
    fn from(value: RasterErrors) -> Self {
        CodecErrors::Raster(value)
    }
}
