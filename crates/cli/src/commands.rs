//! Clap command tree for the `restprobe` binary.

use clap::{Arg, ArgAction, Command};

/// Build the top-level command.
pub fn build_cli() -> Command {
    Command::new("restprobe")
        .about("Read and edit JSON fixture files with dot-notation paths")
        .subcommand_required(true)
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .default_value("warn")
                .help("Log filter (RUST_LOG takes precedence)"),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print JSON on one line"),
        )
        .subcommand(
            Command::new("get")
                .about("Print the value at PATH (object keys only)")
                .arg(file_arg())
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("set")
                .about("Write VALUE at PATH, creating missing containers")
                .arg(file_arg())
                .arg(path_arg())
                .arg(
                    Arg::new("value")
                        .required(true)
                        .help("JSON value; anything that is not JSON is taken as a string"),
                )
                .arg(in_place_arg()),
        )
        .subcommand(
            Command::new("delete")
                .about("Remove the value at PATH if present")
                .arg(file_arg())
                .arg(path_arg())
                .arg(in_place_arg()),
        )
}

fn file_arg() -> Arg {
    Arg::new("file").required(true).help("JSON document")
}

fn path_arg() -> Arg {
    Arg::new("path")
        .required(true)
        .help("Dot-notation path, e.g. addresses.0.city")
}

fn in_place_arg() -> Arg {
    Arg::new("in-place")
        .long("in-place")
        .short('i')
        .action(ArgAction::SetTrue)
        .help("Write the result back to FILE instead of printing it")
}
