/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource;
use clap::ArgMatches;
use pixedit_png::LoadOptions;

use crate::cmd_parsers::global_options::CmdOptions;

pub mod global_options;
pub mod operations;

/// Fill arguments into a Vec according to the
/// order which they were specified in the command line
pub fn fill_args(options: &ArgMatches) -> Vec<String> {
    let mut map = Vec::with_capacity(20);

    for id in options.ids() {
        if options.try_get_many::<clap::Id>(id.as_str()).is_ok() {
            // ignore groups
            continue;
        }
        if options.value_source(id.as_str()) != Some(ValueSource::CommandLine) {
            // ignore things not passed via command line
            continue;
        }
        if let Some(position) = options.index_of(id.as_str()) {
            map.push((position, id.to_string()));
        }
    }
    map.sort_by_key(|(position, _)| *position);

    map.into_iter().map(|(_, argument)| argument).collect()
}

pub fn get_load_options(options: &CmdOptions) -> LoadOptions {
    LoadOptions::default()
        .set_max_width(options.max_width)
        .set_max_height(options.max_height)
}
