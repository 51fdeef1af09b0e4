/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::ArgMatches;
use log::warn;
use pixedit_png::LoadOptions;

use crate::errors::SessionErrors;
use crate::serde::Metadata;

/// Probe input files, extract metadata, and print to standard output.
pub fn probe_input_files(args: &ArgMatches) -> Result<(), SessionErrors> {
    for in_file in args.get_many::<PathBuf>("in").into_iter().flatten() {
        if !in_file.exists() {
            warn!("Skipping {:?}, file does not exist", in_file);
            continue;
        }
        let size = std::fs::metadata(in_file)?.len();

        // set to high to remove restrictions.
        let options = LoadOptions::default()
            .set_max_width(usize::MAX)
            .set_max_height(usize::MAX);

        let image = pixedit_png::load_image(in_file, options)?;
        let metadata = Metadata::new(in_file.as_os_str().to_os_string(), size, image.metadata());

        println!("{}", serde_json::to_string_pretty(&metadata)?);
    }
    Ok(())
}
