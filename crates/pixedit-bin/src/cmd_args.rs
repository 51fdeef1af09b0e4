/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{value_parser, Arg, ArgAction, Command};

/// Ids of flags that map to an editing action
pub const OPERATIONS: [&str; 9] = [
    "rotate-left",
    "rotate-right",
    "mirror-horizontal",
    "mirror-vertical",
    "greyscale",
    "invert",
    "blur",
    "edge-detect",
    "brightness"
];

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("pixedit")
        .about("Apply simple edits to PNG images")
        .after_help("Operations are applied in the order they appear on the command line")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Input file to read data from")
            .action(ArgAction::Append)
            .value_parser(value_parser!(PathBuf))
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Output to write the data to")
            .action(ArgAction::Append)
            .value_parser(value_parser!(PathBuf))
            .required_unless_present("probe"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print information about the input files as json and exit"))
        .arg(Arg::new("yes")
            .short('y')
            .long("yes")
            .action(ArgAction::SetTrue)
            .help("Overwrite existing output files without asking"))
        .args(add_logging_options())
        .args(add_settings())
        .args(add_operations())
}

fn add_logging_options() -> [Arg; 4] {
    [
        Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"),
        Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"),
        Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"),
        Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the loaded images and applied operations")
    ]
}

fn add_settings() -> [Arg; 3] {
    [
        Arg::new("max-width")
            .long("max-width")
            .help_heading("SETTINGS")
            .help("Maximum width of an image the decoder accepts")
            .value_parser(value_parser!(usize))
            .default_value("16384"),
        Arg::new("max-height")
            .long("max-height")
            .help_heading("SETTINGS")
            .help("Maximum height of an image the decoder accepts")
            .value_parser(value_parser!(usize))
            .default_value("16384"),
        Arg::new("blur-size")
            .long("blur-size")
            .help_heading("SETTINGS")
            .help("Side of the blur window, must be odd and at most 255")
            .value_parser(RangedU64ValueParser::<usize>::new().range(1..=255))
            .default_value("5"),
    ]
}

#[rustfmt::skip]
fn add_operations() -> [Arg; 9] {
    [
        Arg::new("rotate-left")
            .long("rotate-left")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Rotate the image 90 degrees counter-clockwise"),
        Arg::new("rotate-right")
            .long("rotate-right")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Rotate the image 90 degrees clockwise"),
        Arg::new("mirror-horizontal")
            .long("mirror-horizontal")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Reflect the image around its vertical center line"),
        Arg::new("mirror-vertical")
            .long("mirror-vertical")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Reflect the image around its horizontal center line"),
        Arg::new("greyscale")
            .long("greyscale")
            .visible_alias("grayscale")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Replace every pixel with its luma"),
        Arg::new("invert")
            .long("invert")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Invert the colors of the image"),
        Arg::new("blur")
            .long("blur")
            .action(ArgAction::SetTrue)
            .help_heading("FILTERS")
            .help("Box blur the image, see --blur-size"),
        Arg::new("edge-detect")
            .long("edge-detect")
            .action(ArgAction::SetTrue)
            .help_heading("FILTERS")
            .help("Replace the image with its gradient magnitude"),
        Arg::new("brightness")
            .long("brightness")
            .help_heading("OPERATIONS")
            .help("Change the brightness of the image")
            .long_help("Change the brightness of the image by a percentage in -100..=100,\n-100 turns the image black and 100 doubles every channel")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(i32).range(-100..=100)),
    ]
}
