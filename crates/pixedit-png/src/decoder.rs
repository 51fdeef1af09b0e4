/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reading PNG files into RGB buffers
use std::path::Path;

use pixedit_core::errors::RasterErrors;
use pixedit_core::image::RasterImage;
use pixedit_core::log::{debug, trace};
use pixedit_core::pixel::CHANNELS;
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;
use zune_png::PngDecoder;

use crate::errors::CodecErrors;

/// Default maximum width and height accepted by the decoder
pub const DEFAULT_MAX_DIMENSION: usize = 1 << 14;

/// Limits applied when decoding
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LoadOptions {
    max_width:  usize,
    max_height: usize
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            max_width:  DEFAULT_MAX_DIMENSION,
            max_height: DEFAULT_MAX_DIMENSION
        }
    }
}

impl LoadOptions {
    #[must_use]
    pub const fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }
    #[must_use]
    pub const fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }
    #[must_use]
    pub const fn max_width(&self) -> usize {
        self.max_width
    }
    #[must_use]
    pub const fn max_height(&self) -> usize {
        self.max_height
    }

    fn to_decoder_options(self) -> DecoderOptions {
        DecoderOptions::default()
            .set_max_width(self.max_width)
            .set_max_height(self.max_height)
            .png_set_strip_to_8bit(true)
    }
}

/// A decoded image as it crosses the codec boundary
///
/// `bytes` are interleaved `RGBRGB...` with length `width * height * 3`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RawImage {
    pub width:  usize,
    pub height: usize,
    pub bytes:  Vec<u8>
}

impl RawImage {
    /// Turn the raw image into a raster image
    ///
    /// # Errors
    /// If the byte count does not match the dimensions
    pub fn into_raster(self) -> Result<RasterImage, RasterErrors> {
        RasterImage::from_rgb_bytes(self.width, self.height, &self.bytes)
    }
}

/// Read and decode the PNG file at `path`
///
/// # Errors
/// - The file can't be read
/// - The contents are not a valid PNG or exceed the limits in `options`
/// - The colorspace can't be converted to RGB
pub fn load<P: AsRef<Path>>(path: P, options: LoadOptions) -> Result<RawImage, CodecErrors> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;

    debug!("Read {} bytes from {:?}", data.len(), path);

    decode(&data, options)
}

/// Read and decode the PNG file at `path` into a raster image
///
/// # Errors
/// Same as [`load`]
pub fn load_image<P: AsRef<Path>>(path: P, options: LoadOptions) -> Result<RasterImage, CodecErrors> {
    Ok(load(path, options)?.into_raster()?)
}

/// Decode PNG data held in memory
///
/// # Errors
/// Same as [`load`], minus the I/O part
pub fn decode(data: &[u8], options: LoadOptions) -> Result<RawImage, CodecErrors> {
    let mut decoder = PngDecoder::new_with_options(data, options.to_decoder_options());

    decoder.decode_headers()?;

    let (width, height) = decoder
        .get_dimensions()
        .ok_or_else(|| CodecErrors::Decode("missing image dimensions".to_string()))?;
    let colorspace = decoder
        .get_colorspace()
        .ok_or_else(|| CodecErrors::Decode("missing image colorspace".to_string()))?;

    trace!("Image width: {width}, height: {height}, colorspace: {colorspace:?}");

    let pixels = decoder.decode_raw()?;

    let expected = width * height * colorspace.num_components();
    if pixels.len() != expected {
        return Err(RasterErrors::DimensionsMisMatch(expected, pixels.len()).into());
    }
    let bytes = convert_to_rgb(&pixels, colorspace)?;

    Ok(RawImage {
        width,
        height,
        bytes
    })
}

/// Convert 8 bit pixels in `colorspace` to interleaved RGB
///
/// Luma is replicated to all channels, alpha is dropped.
fn convert_to_rgb(pixels: &[u8], colorspace: ColorSpace) -> Result<Vec<u8>, CodecErrors> {
    match colorspace {
        ColorSpace::RGB => Ok(pixels.to_vec()),
        ColorSpace::RGBA => Ok(pixels
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect()),
        ColorSpace::Luma => Ok(pixels.iter().flat_map(|l| [*l; CHANNELS]).collect()),
        ColorSpace::LumaA => Ok(pixels
            .chunks_exact(2)
            .flat_map(|px| [px[0]; CHANNELS])
            .collect()),
        other => Err(CodecErrors::UnsupportedColorspace(other))
    }
}
