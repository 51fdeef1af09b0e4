/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};
use pixedit_imageprocs::kernel::DEFAULT_BLUR_SIZE;
use pixedit_png::DEFAULT_MAX_DIMENSION;

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub max_width:      usize,
    pub max_height:     usize,
    pub blur_size:      usize,
    pub override_files: bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            max_width:      DEFAULT_MAX_DIMENSION,
            max_height:     DEFAULT_MAX_DIMENSION,
            blur_size:      DEFAULT_BLUR_SIZE,
            override_files: false
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(width) = options.get_one::<usize>("max-width") {
        cmd_options.max_width = *width;
    }
    if let Some(height) = options.get_one::<usize>("max-height") {
        cmd_options.max_height = *height;
    }
    if let Some(size) = options.get_one::<usize>("blur-size") {
        cmd_options.blur_size = *size;
    }

    if options.value_source("yes") == Some(ValueSource::CommandLine) {
        info!("Setting all commands to yes");
        cmd_options.override_files = true;
    }
    cmd_options
}

fn flag(options: &ArgMatches, id: &str) -> bool {
    options.get_one::<bool>(id).copied().unwrap_or(false)
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if flag(options, "debug") {
        Level::Debug
    } else if flag(options, "trace") {
        Level::Trace
    } else if flag(options, "warn") {
        Level::Warn
    } else if flag(options, "info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use pixedit_imageprocs::kernel::DEFAULT_BLUR_SIZE;
    use pixedit_png::DEFAULT_MAX_DIMENSION;

    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::get_load_options;
    use crate::cmd_parsers::global_options::parse_options;

    #[test]
    fn defaults() {
        let matches = create_cmd_args()
            .try_get_matches_from(["pixedit", "-i", "a.png", "-o", "b.png"])
            .unwrap();
        let options = parse_options(&matches);

        // command line defaults agree with the library ones
        assert_eq!(options.max_width, DEFAULT_MAX_DIMENSION);
        assert_eq!(options.max_height, DEFAULT_MAX_DIMENSION);
        assert_eq!(options.blur_size, DEFAULT_BLUR_SIZE);
        assert!(!options.override_files);
    }

    #[test]
    fn overrides() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "pixedit",
                "-i",
                "a.png",
                "-o",
                "b.png",
                "--yes",
                "--max-width",
                "100",
                "--blur-size",
                "9"
            ])
            .unwrap();
        let options = parse_options(&matches);

        assert_eq!(options.max_width, 100);
        assert_eq!(options.blur_size, 9);
        assert!(options.override_files);

        let load_options = get_load_options(&options);
        assert_eq!(load_options.max_width(), 100);
        assert_eq!(load_options.max_height(), DEFAULT_MAX_DIMENSION);
    }

    #[test]
    fn blur_size_is_bounded() {
        for size in ["0", "257", "20001", "18446744073709551617"] {
            let result = create_cmd_args().try_get_matches_from([
                "pixedit",
                "-i",
                "a.png",
                "-o",
                "b.png",
                "--blur-size",
                size
            ]);
            assert!(result.is_err(), "{size}");
        }
    }
}
