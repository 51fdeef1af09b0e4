/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Mirror filter: reflect an image around one of its midlines.
//!
use pixedit_core::errors::RasterErrors;
use pixedit_core::image::RasterImage;
use pixedit_core::traits::OperationsTrait;

/// Supported mirror modes
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MirrorMode {
    /// Creates a horizontal mirror image by reflecting the pixels around the central y-axis
    ///```text
    ///old image     new image
    ///┌─────────┐   ┌──────────┐
    ///│a b c d e│   │e d c b a │
    ///│f g h i j│   │j i h g f │
    ///└─────────┘   └──────────┘
    ///```
    Horizontal,
    /// Creates a vertical mirror image by reflecting
    /// the pixels around the central x-axis.
    ///
    /// ```text
    ///old image     new image
    /// ┌─────────┐   ┌──────────┐
    /// │a b c d e│   │f g h i j │
    /// │f g h i j│   │a b c d e │
    /// └─────────┘   └──────────┘
    /// ```
    Vertical
}

/// Mirror an image along a certain axis
///
/// Width and height are never changed.
#[derive(Copy, Clone, Debug)]
pub struct Mirror {
    mode: MirrorMode
}

impl Mirror {
    /// Create a new mirror operation
    #[must_use]
    pub const fn new(mode: MirrorMode) -> Mirror {
        Mirror { mode }
    }
}

impl OperationsTrait for Mirror {
    fn name(&self) -> &'static str {
        "Mirror"
    }

    fn execute_impl(&self, image: &mut RasterImage) -> Result<(), RasterErrors> {
        let width = image.width();

        match self.mode {
            MirrorMode::Horizontal => flop(image.pixels_mut(), width),
            MirrorMode::Vertical => vertical_flip(image.pixels_mut(), width)
        }
        Ok(())
    }
}

/// Flop an image
///
///```text
///old image     new image
///┌─────────┐   ┌──────────┐
///│a b c d e│   │e d c b a │
///│f g h i j│   │j i h g f │
///└─────────┘   └──────────┘
///```
///
pub fn flop<T: Copy>(in_out_image: &mut [T], width: usize) {
    assert_eq!(
        in_out_image.len() % width,
        0,
        "Width does not evenly divide image"
    );

    for width_chunks in in_out_image.chunks_exact_mut(width) {
        let (left_to_right, right_to_left) = width_chunks.split_at_mut(width / 2);

        // iterate and swap, for odd widths the middle pixel
        // is the first one in right_to_left and stays where it is
        for (ltr, rtl) in left_to_right.iter_mut().zip(right_to_left.iter_mut().rev()) {
            std::mem::swap(ltr, rtl);
        }
    }
}

/// Flip an image on the horizontal axis
///
/// ```text
///old image     new image
/// ┌─────────┐   ┌──────────┐
/// │a b c d e│   │f g h i j │
/// │f g h i j│   │a b c d e │
/// └─────────┘   └──────────┘
/// ```
///
pub fn vertical_flip<T: Copy>(channel: &mut [T], width: usize) {
    // Simply split the image in half
    // on one end read from the start to the halfway point
    // on the other end read from the end to the halfway point
    let len = channel.len();

    let (top, bottom) = channel.split_at_mut(len / 2);

    for (t, b) in top
        .chunks_exact_mut(width)
        .zip(bottom.rchunks_exact_mut(width))
    {
        t.swap_with_slice(b);
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use pixedit_core::image::RasterImage;
    use pixedit_core::pixel::Rgb;
    use pixedit_core::traits::OperationsTrait;

    use crate::mirror::{Mirror, MirrorMode};

    fn random_image(width: usize, height: usize) -> RasterImage {
        let mut bytes = vec![0_u8; width * height * 3];
        nanorand::WyRand::new().fill(&mut bytes);
        RasterImage::from_rgb_bytes(width, height, &bytes).unwrap()
    }

    #[test]
    fn horizontal_reflects_columns() {
        let image = random_image(5, 3);
        let mirrored = Mirror::new(MirrorMode::Horizontal)
            .clone_and_execute(&image)
            .unwrap();

        for y in 0..3 {
            for x in 0..5 {
                assert_eq!(
                    mirrored.get_pixel(x, y).unwrap(),
                    image.get_pixel(5 - x - 1, y).unwrap()
                );
            }
        }
    }

    #[test]
    fn vertical_reflects_rows() {
        let image = random_image(4, 5);
        let mirrored = Mirror::new(MirrorMode::Vertical)
            .clone_and_execute(&image)
            .unwrap();

        for y in 0..5 {
            for x in 0..4 {
                assert_eq!(
                    mirrored.get_pixel(x, y).unwrap(),
                    image.get_pixel(x, 5 - y - 1).unwrap()
                );
            }
        }
    }

    #[test]
    fn mirror_twice_is_identity() {
        for mode in [MirrorMode::Horizontal, MirrorMode::Vertical] {
            for (width, height) in [(8, 8), (7, 3), (1, 1), (2, 9)] {
                let image = random_image(width, height);
                let mut mirrored = image.clone();

                Mirror::new(mode).execute(&mut mirrored).unwrap();
                Mirror::new(mode).execute(&mut mirrored).unwrap();

                assert_eq!(mirrored, image);
            }
        }
    }

    #[test]
    fn single_row_vertical_mirror_is_noop() {
        let image = RasterImage::from_fn(6, 1, |x, _| Rgb::splat(x as u8)).unwrap();
        let mirrored = Mirror::new(MirrorMode::Vertical)
            .clone_and_execute(&image)
            .unwrap();

        assert_eq!(mirrored, image);
    }
}
