/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! PNG boundary for pixedit
//!
//! Images enter the editor through [`load`] / [`load_image`] and leave it
//! through [`save`]. Whatever the file stores (grey, grey with alpha, RGB,
//! RGBA, palette, 16 bit) is turned into 8 bit RGB on the way in, and always
//! written back as 8 bit RGB.
//!
//! Decoding and encoding are done by `zune-png`, this crate only adapts
//! buffers between it and [`RasterImage`](pixedit_core::image::RasterImage).
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(clippy::module_name_repetitions, clippy::doc_markdown)]

pub use decoder::{decode, load, load_image, LoadOptions, RawImage, DEFAULT_MAX_DIMENSION};
pub use encoder::{encode, save};
pub use errors::CodecErrors;

mod decoder;
mod encoder;
pub mod errors;
