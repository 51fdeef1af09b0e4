/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The editing session
//!
//! A session holds at most one open image. Every user request is an
//! [`Action`], applied one at a time and run to completion; after each
//! one that changes the image the session "re-renders", which for a
//! command line front end means reporting the new state in the log.
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use log::{debug, info};
use pixedit_core::image::RasterImage;
use pixedit_core::traits::OperationsTrait;
use pixedit_imageprocs::box_blur::BoxBlur;
use pixedit_imageprocs::brighten::Brighten;
use pixedit_imageprocs::edge_detect::EdgeDetect;
use pixedit_imageprocs::grayscale::Grayscale;
use pixedit_imageprocs::invert::Invert;
use pixedit_imageprocs::kernel::DEFAULT_BLUR_SIZE;
use pixedit_imageprocs::mirror::{Mirror, MirrorMode};
use pixedit_imageprocs::rotate::Rotate;
use pixedit_png::LoadOptions;

use crate::errors::SessionErrors;

/// A single discrete user request
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    Open(PathBuf),
    Save(PathBuf),
    RotateLeft,
    RotateRight,
    MirrorHorizontal,
    MirrorVertical,
    Greyscale,
    Invert,
    Blur,
    EdgeDetect,
    /// Brightness slider position in `-100..=100`
    Brightness(i32)
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Open(path) => write!(f, "open {path:?}"),
            Action::Save(path) => write!(f, "save {path:?}"),
            Action::RotateLeft => write!(f, "rotate left"),
            Action::RotateRight => write!(f, "rotate right"),
            Action::MirrorHorizontal => write!(f, "mirror horizontally"),
            Action::MirrorVertical => write!(f, "mirror vertically"),
            Action::Greyscale => write!(f, "greyscale"),
            Action::Invert => write!(f, "invert"),
            Action::Blur => write!(f, "blur"),
            Action::EdgeDetect => write!(f, "edge detect"),
            Action::Brightness(value) => write!(f, "brightness {value}")
        }
    }
}

pub struct EditingSession {
    image:        Option<RasterImage>,
    load_options: LoadOptions,
    blur_size:    usize
}

impl Default for EditingSession {
    fn default() -> Self {
        EditingSession::new(LoadOptions::default())
    }
}

impl EditingSession {
    /// Create a session with no open image
    pub fn new(load_options: LoadOptions) -> EditingSession {
        EditingSession {
            image: None,
            load_options,
            blur_size: DEFAULT_BLUR_SIZE
        }
    }

    /// Set the window size used by [`Action::Blur`]
    #[must_use]
    pub fn set_blur_size(mut self, size: usize) -> Self {
        self.blur_size = size;
        self
    }

    /// Replace the open image
    pub fn set_image(&mut self, image: RasterImage) {
        self.image = Some(image);
        self.render();
    }

    /// The open image, if any
    pub fn image(&self) -> Option<&RasterImage> {
        self.image.as_ref()
    }

    /// Run one action to completion
    ///
    /// # Errors
    /// - [`SessionErrors::NoImageLoaded`] if the action needs an image and none is open
    /// - Codec errors from opening or saving
    /// - Operation errors, which leave the open image unchanged
    pub fn apply(&mut self, action: &Action) -> Result<(), SessionErrors> {
        debug!("Applying action: {action}");

        match action {
            Action::Open(path) => {
                // a failed load keeps whatever was open before
                let image = pixedit_png::load_image(path, self.load_options)?;
                info!("Opened {:?}", path);
                self.set_image(image);
            }
            Action::Save(path) => {
                let image = self.image.as_ref().ok_or(SessionErrors::NoImageLoaded)?;
                pixedit_png::save(path, image)?;
                info!("Saved {:?}", path);
            }
            _ => {
                let blur_size = self.blur_size;
                let image = self.image.as_mut().ok_or(SessionErrors::NoImageLoaded)?;
                let operation = operation_for(action, blur_size)?;

                operation.execute(image)?;
                self.render();
            }
        }
        Ok(())
    }

    fn render(&self) {
        if let Some(image) = &self.image {
            let (width, height) = image.dimensions();
            info!("Image is now {width}x{height}");
        }
    }
}

/// Map a transform action to the operation implementing it
fn operation_for(action: &Action, blur_size: usize) -> Result<Box<dyn OperationsTrait>, SessionErrors> {
    let operation: Box<dyn OperationsTrait> = match action {
        Action::RotateLeft => Box::new(Rotate::left()),
        Action::RotateRight => Box::new(Rotate::right()),
        Action::MirrorHorizontal => Box::new(Mirror::new(MirrorMode::Horizontal)),
        Action::MirrorVertical => Box::new(Mirror::new(MirrorMode::Vertical)),
        Action::Greyscale => Box::new(Grayscale::new()),
        Action::Invert => Box::new(Invert::new()),
        Action::Blur => Box::new(BoxBlur::new(blur_size)),
        Action::EdgeDetect => Box::new(EdgeDetect::new()),
        Action::Brightness(value) => Box::new(Brighten::from_slider(*value)?),
        Action::Open(_) | Action::Save(_) => {
            return Err(SessionErrors::Generic(format!(
                "`{action}` is not an image operation"
            )))
        }
    };
    Ok(operation)
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use pixedit_core::image::RasterImage;
    use pixedit_core::pixel::Rgb;

    use crate::errors::SessionErrors;
    use crate::session::{Action, EditingSession};

    fn random_image(width: usize, height: usize) -> RasterImage {
        let mut bytes = vec![0_u8; width * height * 3];
        nanorand::WyRand::new().fill(&mut bytes);
        RasterImage::from_rgb_bytes(width, height, &bytes).unwrap()
    }

    fn all_transforms() -> Vec<Action> {
        vec![
            Action::RotateLeft,
            Action::RotateRight,
            Action::MirrorHorizontal,
            Action::MirrorVertical,
            Action::Greyscale,
            Action::Invert,
            Action::Blur,
            Action::EdgeDetect,
            Action::Brightness(10),
        ]
    }

    #[test]
    fn transforms_need_an_image() {
        let mut session = EditingSession::default();

        for action in all_transforms() {
            let err = session.apply(&action).unwrap_err();
            assert!(matches!(err, SessionErrors::NoImageLoaded), "{action}");
        }
        let err = session
            .apply(&Action::Save(std::env::temp_dir().join("pixedit-never-written.png")))
            .unwrap_err();
        assert!(matches!(err, SessionErrors::NoImageLoaded));
        assert!(session.image().is_none());
    }

    #[test]
    fn every_transform_runs_on_an_open_image() {
        let mut session = EditingSession::default();
        session.set_image(random_image(9, 5));

        for action in all_transforms() {
            session.apply(&action).unwrap();
        }
        // rotate left and right cancel out
        assert_eq!(session.image().unwrap().dimensions(), (9, 5));
    }

    #[test]
    fn rotate_buttons() {
        let image = random_image(4, 7);
        let mut session = EditingSession::default();
        session.set_image(image.clone());

        session.apply(&Action::RotateRight).unwrap();
        assert_eq!(session.image().unwrap().dimensions(), (7, 4));
        assert_eq!(
            session.image().unwrap().get_pixel(6, 0).unwrap(),
            image.get_pixel(0, 0).unwrap()
        );
        session.apply(&Action::RotateLeft).unwrap();
        assert_eq!(session.image().unwrap(), &image);
    }

    #[test]
    fn bad_brightness_leaves_image() {
        let image = RasterImage::fill(Rgb::new(100, 50, 25), 3, 3).unwrap();
        let mut session = EditingSession::default();
        session.set_image(image.clone());

        let err = session.apply(&Action::Brightness(150)).unwrap_err();
        assert!(matches!(err, SessionErrors::Raster(_)));
        assert_eq!(session.image().unwrap(), &image);

        session.apply(&Action::Brightness(-100)).unwrap();
        assert!(session
            .image()
            .unwrap()
            .pixels()
            .iter()
            .all(|px| *px == Rgb::BLACK));
    }

    #[test]
    fn invalid_blur_size_is_reported() {
        let mut session = EditingSession::default().set_blur_size(4);
        session.set_image(random_image(5, 5));

        assert!(matches!(
            session.apply(&Action::Blur),
            Err(SessionErrors::Raster(_))
        ));
    }

    #[test]
    fn failed_open_keeps_previous_image() {
        let image = random_image(6, 6);
        let mut session = EditingSession::default();
        session.set_image(image.clone());

        let missing = std::env::temp_dir().join("pixedit-session-missing-file.png");
        let err = session.apply(&Action::Open(missing)).unwrap_err();

        assert!(matches!(err, SessionErrors::Codec(_)));
        assert_eq!(session.image().unwrap(), &image);
    }

    #[test]
    fn save_then_open() {
        let image = random_image(12, 10);
        let path = std::env::temp_dir().join(format!("pixedit-session-{}.png", std::process::id()));

        let mut session = EditingSession::default();
        session.set_image(image.clone());
        session.apply(&Action::Invert).unwrap();
        session.apply(&Action::Save(path.clone())).unwrap();

        let mut reopened = EditingSession::default();
        let result = reopened.apply(&Action::Open(path.clone()));
        let _ = std::fs::remove_file(&path);
        result.unwrap();

        reopened.apply(&Action::Invert).unwrap();
        assert_eq!(reopened.image().unwrap(), &image);
    }
}
