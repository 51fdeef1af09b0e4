/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits shared by raster operations
use std::time::Instant;

use crate::errors::RasterErrors;
use crate::image::RasterImage;
use crate::log::trace;

/// This encapsulates an image operation.
///
/// All operations that the editor can run on an image
/// implement this trait, which lets front ends queue them
/// without knowing what each one does.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Execute the operation on the image
    ///
    /// Implementors validate their parameters before writing to
    /// `image`, an error must leave the image unchanged.
    ///
    /// # Errors
    /// Any operation error will be propagated to the caller
    fn execute_impl(&self, image: &mut RasterImage) -> Result<(), RasterErrors>;

    /// Execute a simple operation on the image
    /// manipulating the image struct
    ///
    /// This wraps [`execute_impl`](Self::execute_impl) with timing
    /// information that is emitted at trace level.
    ///
    /// # Errors
    /// Any operation error will be propagated to the caller
    ///
    /// # Example
    /// ```
    /// use pixedit_core::errors::RasterErrors;
    /// use pixedit_core::image::RasterImage;
    /// use pixedit_core::pixel::Rgb;
    /// use pixedit_core::traits::OperationsTrait;
    ///
    /// struct Clear;
    ///
    /// impl OperationsTrait for Clear {
    ///     fn name(&self) -> &'static str {
    ///         "clear"
    ///     }
    ///     fn execute_impl(&self, image: &mut RasterImage) -> Result<(), RasterErrors> {
    ///         image.pixels_mut().fill(Rgb::BLACK);
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let mut image = RasterImage::fill(Rgb::WHITE, 4, 4)?;
    /// Clear.execute(&mut image)?;
    /// assert_eq!(image.get_pixel(3, 3)?, Rgb::BLACK);
    /// # Ok::<(), RasterErrors>(())
    /// ```
    #[allow(unused_variables)]
    fn execute(&self, image: &mut RasterImage) -> Result<(), RasterErrors> {
        let operation_name = self.name();

        trace!("Running {}", operation_name);

        let start = Instant::now();

        self.execute_impl(image)?;

        trace!(
            "Finished running `{operation_name}` in {} ms",
            start.elapsed().as_millis()
        );

        Ok(())
    }

    /// Run the operation on a copy of `image`, leaving the source untouched
    ///
    /// # Errors
    /// Any operation error will be propagated to the caller
    fn clone_and_execute(&self, image: &RasterImage) -> Result<RasterImage, RasterErrors> {
        let mut output = image.clone();
        self.execute(&mut output)?;
        Ok(output)
    }
}
