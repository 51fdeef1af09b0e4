/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image metadata
//!
//! The raster only ever holds 8 bit RGB, so metadata is little more
//! than the dimensions, but it is what gets reported when probing files.

/// Image metadata
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ImageMetadata {
    pub(crate) width:  usize,
    pub(crate) height: usize
}

impl ImageMetadata {
    pub(crate) const fn new(width: usize, height: usize) -> ImageMetadata {
        ImageMetadata { width, height }
    }
    /// Get image dimensions as a tuple of (width,height)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    /// Number of pixels in the image
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        self.width * self.height
    }
    /// Number of bytes the image occupies as interleaved RGB
    #[must_use]
    pub const fn byte_size(&self) -> usize {
        self.pixel_count() * crate::pixel::CHANNELS
    }
}
