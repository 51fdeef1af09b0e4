/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::Rng;
use pixedit_core::image::RasterImage;

/// Width and height of the images benchmarks run on
pub const BENCH_DIMENSIONS: (usize, usize) = (1920, 1080);

/// Create an image filled with random pixels
///
/// # Panics
/// If either dimension is zero
pub fn random_image(width: usize, height: usize) -> RasterImage {
    let mut bytes = vec![0_u8; width * height * 3];
    nanorand::WyRand::new_seed(0x5eed).fill(&mut bytes);

    RasterImage::from_rgb_bytes(width, height, &bytes).unwrap()
}

/// A random image of [`BENCH_DIMENSIONS`]
pub fn bench_image() -> RasterImage {
    random_image(BENCH_DIMENSIONS.0, BENCH_DIMENSIONS.1)
}
