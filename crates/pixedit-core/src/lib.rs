/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all pixedit crates
//!
//! This crate provides the in-memory raster model the editor works on
//!
//! It currently contains
//!
//! - A fixed size RGB pixel type with range checked construction
//! - A row-major raster buffer with bounds checked pixel access
//! - The error type shared by the raster and its operations
//! - The [`OperationsTrait`](traits::OperationsTrait) every transform implements
//!
//! # Features
//!  - `log`: Route the logging macros in [`log`] to the `log` crate,
//!     otherwise they compile to nothing.
//!
//!  - `serde`: Enables serializing of image metadata
//!
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
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::doc_markdown
)]
#![macro_use]

pub mod errors;
pub mod image;
pub mod log;
pub mod metadata;
pub mod pixel;
mod serde;
pub mod traits;
