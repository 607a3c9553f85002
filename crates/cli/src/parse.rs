//! ArgMatches → CliAction conversion.

use clap::ArgMatches;
use serde_json::Value;
use std::path::PathBuf;

/// What the user asked for.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    Get {
        file: PathBuf,
        path: String,
    },
    Set {
        file: PathBuf,
        path: String,
        value: Value,
        in_place: bool,
    },
    Delete {
        file: PathBuf,
        path: String,
        in_place: bool,
    },
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, m) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    let file = PathBuf::from(required(m, "file")?);
    let path = required(m, "path")?.to_string();

    match sub_name {
        "get" => Ok(CliAction::Get { file, path }),
        "set" => Ok(CliAction::Set {
            file,
            path,
            value: parse_value(required(m, "value")?),
            in_place: m.get_flag("in-place"),
        }),
        "delete" => Ok(CliAction::Delete {
            file,
            path,
            in_place: m.get_flag("in-place"),
        }),
        other => Err(format!("Unknown command: {}", other)),
    }
}

/// Parse a command-line value as JSON, falling back to a plain string.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn required<'a>(m: &'a ArgMatches, name: &str) -> Result<&'a str, String> {
    m.get_one::<String>(name)
        .map(|s| s.as_str())
        .ok_or_else(|| format!("Missing argument: {}", name))
}
