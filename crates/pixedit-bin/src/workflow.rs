/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{stdin, BufRead};
use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::{debug, info};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::cmd_parsers::get_load_options;
use crate::cmd_parsers::operations::parse_actions;
use crate::errors::SessionErrors;
use crate::probe_files::probe_input_files;
use crate::session::{Action, EditingSession};

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), SessionErrors> {
    if args.get_flag("probe") {
        return probe_input_files(args);
    }
    info!("Creating workflows from input");

    let in_files: Vec<&PathBuf> = args.get_many::<PathBuf>("in").into_iter().flatten().collect();
    let out_files: Vec<&PathBuf> = args.get_many::<PathBuf>("out").into_iter().flatten().collect();

    if in_files.len() != out_files.len() {
        return Err(SessionErrors::Generic(format!(
            "Expected one output per input, found {} inputs and {} outputs",
            in_files.len(),
            out_files.len()
        )));
    }
    let actions = parse_actions(args)?;

    for (in_file, out_file) in in_files.into_iter().zip(out_files) {
        verify_file_paths(in_file, out_file, cmd_opts)?;

        let mut session =
            EditingSession::new(get_load_options(cmd_opts)).set_blur_size(cmd_opts.blur_size);

        session.apply(&Action::Open(in_file.clone()))?;

        for action in &actions {
            session.apply(action)?;
        }
        session.apply(&Action::Save(out_file.clone()))?;

        debug!("Finished {:?} -> {:?}", in_file, out_file);
    }

    Ok(())
}

fn verify_file_paths(in_path: &Path, out_path: &Path, cmd_opts: &CmdOptions) -> Result<(), SessionErrors> {
    if in_path == out_path {
        return Err(SessionErrors::Generic(format!(
            "Cannot use {in_path:?} as both input and output"
        )));
    }

    if !in_path.exists() {
        return Err(SessionErrors::Generic(format!(
            "Path {in_path:?}, does not exist"
        )));
    }

    if !in_path.is_file() {
        return Err(SessionErrors::Generic(format!(
            "Path {in_path:?} is not a file"
        )));
    }

    if out_path.exists() {
        if cmd_opts.override_files {
            info!("Overwriting path {:?} ", out_path);
        } else {
            println!("File {out_path:?} exists, overwrite [y/N]");
            let mut result = String::new();

            stdin().lock().read_line(&mut result)?;

            if result.trim() != "y" {
                return Err(SessionErrors::Generic(format!(
                    "Not overwriting file {out_path:?}"
                )));
            }
        }
    }
    Ok(())
}
