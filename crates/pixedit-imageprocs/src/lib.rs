/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for `pixedit`
//!
//! This implements the editor's transforms, each one as a struct
//! implementing the `OperationsTrait` defined by pixedit-core.
//!
//! - geometric: [rotate], [mirror]
//! - point: [grayscale], [invert], [brighten]
//! - convolution: [convolve] with [kernel], and on top of it
//!   [box_blur] and [edge_detect]
//!
//! # Example
//! - Rotate an image by 90 degrees clockwise and convert it to greyscale
//! ```
//! use pixedit_core::errors::RasterErrors;
//! use pixedit_core::image::RasterImage;
//! use pixedit_core::pixel::Rgb;
//! use pixedit_core::traits::OperationsTrait;
//! use pixedit_imageprocs::grayscale::Grayscale;
//! use pixedit_imageprocs::rotate::Rotate;
//!
//! let mut image = RasterImage::fill(Rgb::new(200, 10, 30), 100, 50)?;
//!
//! Rotate::new(1).execute(&mut image)?;
//! Grayscale::new().execute(&mut image)?;
//!
//! assert_eq!(image.dimensions(), (50, 100));
//! # Ok::<(), RasterErrors>(())
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap
)]

pub mod box_blur;
pub mod brighten;
pub mod convolve;
pub mod edge_detect;
pub mod grayscale;
pub mod invert;
pub mod kernel;
pub mod mirror;
pub mod rotate;
