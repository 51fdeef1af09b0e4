/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use pixedit_core::errors::RasterErrors;
use pixedit_png::CodecErrors;

/// Errors raised while running an editing session
pub enum SessionErrors {
    Codec(CodecErrors),
    Raster(RasterErrors),
    /// An action needed an image but none was open
    NoImageLoaded,
    Generic(String)
}

impl Debug for SessionErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Codec(err) => writeln!(f, "{err:?}"),
            Self::Raster(err) => writeln!(f, "{err:?}"),
            Self::NoImageLoaded => writeln!(f, "No image is open"),
            Self::Generic(reason) => writeln!(f, "{reason}")
        }
    }
}

impl Display for SessionErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for SessionErrors {}

impl From<CodecErrors> for SessionErrors {
    fn from(value: CodecErrors) -> Self {
        SessionErrors::Codec(value)
    }
}

impl From<RasterErrors> for SessionErrors {
    fn from(value: RasterErrors) -> Self {
        SessionErrors::Raster(value)
    }
}

impl From<std::io::Error> for SessionErrors {
    fn from(value: std::io::Error) -> Self {
        SessionErrors::Codec(CodecErrors::Io(value))
    }
}

impl From<serde_json::Error> for SessionErrors {
    fn from(value: serde_json::Error) -> Self {
        SessionErrors::Generic(value.to_string())
    }
}

impl From<String> for SessionErrors {
    fn from(value: String) -> Self {
        SessionErrors::Generic(value)
    }
}
