/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Writing RGB buffers as PNG files
use std::path::Path;

use pixedit_core::image::RasterImage;
use pixedit_core::log::debug;
use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;
use zune_core::options::EncoderOptions;
use zune_png::PngEncoder;

use crate::errors::CodecErrors;

/// Encode `image` as an 8 bit RGB PNG
///
/// A [`RasterImage`] always has at least one pixel,
/// so encoding can't fail
#[must_use]
pub fn encode(image: &RasterImage) -> Vec<u8> {
    let (width, height) = image.dimensions();

    let bytes = image.to_rgb_bytes();
    let options = EncoderOptions::new(width, height, ColorSpace::RGB, BitDepth::Eight);

    PngEncoder::new(&bytes, options).encode()
}

/// Encode `image` and write it to `path`, replacing any existing file
///
/// # Errors
/// If the file can't be written
pub fn save<P: AsRef<Path>>(path: P, image: &RasterImage) -> Result<(), CodecErrors> {
    let path = path.as_ref();
    let data = encode(image);

    std::fs::write(path, &data)?;
    debug!("Wrote {} bytes to {:?}", data.len(), path);

    Ok(())
}
