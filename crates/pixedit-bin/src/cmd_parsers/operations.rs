/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::debug;

use crate::cmd_args::OPERATIONS;
use crate::cmd_parsers::fill_args;
use crate::session::Action;

/// Turn an operation flag into the action it stands for
///
/// Returns `Ok(None)` for arguments that are not operations
pub fn parse_action(argument: &str, args: &ArgMatches) -> Result<Option<Action>, String> {
    let action = match argument {
        "rotate-left" => Action::RotateLeft,
        "rotate-right" => Action::RotateRight,
        "mirror-horizontal" => Action::MirrorHorizontal,
        "mirror-vertical" => Action::MirrorVertical,
        "greyscale" => Action::Greyscale,
        "invert" => Action::Invert,
        "blur" => Action::Blur,
        "edge-detect" => Action::EdgeDetect,
        "brightness" => {
            let value = *args
                .get_one::<i32>(argument)
                .ok_or_else(|| format!("Missing value for `{argument}`"))?;
            Action::Brightness(value)
        }
        _ => return Ok(None)
    };
    debug!("Added {action} operation");

    Ok(Some(action))
}

/// Collect the actions requested on the command line, in command line order
pub fn parse_actions(args: &ArgMatches) -> Result<Vec<Action>, String> {
    let mut actions = Vec::new();

    for argument in fill_args(args) {
        if !OPERATIONS.contains(&argument.as_str()) {
            continue;
        }
        if let Some(action) = parse_action(&argument, args)? {
            actions.push(action);
        }
    }
    Ok(actions)
}
