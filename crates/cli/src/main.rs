//! restprobe CLI: read and edit JSON fixture files from the shell.
//!
//! ```text
//! restprobe get fixtures/create_user.json metadata.source
//! restprobe set fixtures/create_user.json addresses.0.city Oslo --in-place
//! restprobe delete fixtures/create_user.json metadata.lastLogin
//! ```

mod commands;
mod parse;

use std::path::Path;
use std::process;

use restprobe_core::tree;
use restprobe_harness::{logging, LogConfig};
use serde_json::Value;

use commands::build_cli;
use parse::{matches_to_action, CliAction};

fn main() {
    let matches = build_cli().get_matches();

    let level = matches
        .get_one::<String>("log-level")
        .cloned()
        .unwrap_or_else(|| "warn".to_string());
    if let Err(e) = logging::init(&LogConfig {
        level,
        file: None,
        ansi: true,
    }) {
        eprintln!("(error) {}", e);
        process::exit(1);
    }

    let compact = matches.get_flag("compact");

    let exit_code = match matches_to_action(&matches).and_then(execute) {
        Ok(Some(value)) => match render(&value, compact) {
            Ok(text) => {
                println!("{}", text);
                0
            }
            Err(e) => {
                eprintln!("(error) {}", e);
                1
            }
        },
        Ok(None) => 0,
        Err(e) => {
            eprintln!("(error) {}", e);
            1
        }
    };
    process::exit(exit_code);
}

/// Run the action; `Some` is a document to print.
fn execute(action: CliAction) -> Result<Option<Value>, String> {
    match action {
        CliAction::Get { file, path } => {
            let doc = read_document(&file)?;
            let value = tree::get_value(&doc, &path).map_err(|e| e.to_string())?;
            Ok(Some(value.clone()))
        }
        CliAction::Set {
            file,
            path,
            value,
            in_place,
        } => {
            let mut doc = read_document(&file)?;
            tree::set(&mut doc, &path, value).map_err(|e| e.to_string())?;
            finish(&file, doc, in_place)
        }
        CliAction::Delete {
            file,
            path,
            in_place,
        } => {
            let mut doc = read_document(&file)?;
            if !tree::delete(&mut doc, &path).map_err(|e| e.to_string())? {
                tracing::warn!(path = %path, "nothing to delete");
            }
            finish(&file, doc, in_place)
        }
    }
}

fn finish(file: &Path, doc: Value, in_place: bool) -> Result<Option<Value>, String> {
    if in_place {
        write_document(file, &doc)?;
        Ok(None)
    } else {
        Ok(Some(doc))
    }
}

fn read_document(file: &Path) -> Result<Value, String> {
    let text = std::fs::read_to_string(file)
        .map_err(|e| format!("Failed to read {}: {}", file.display(), e))?;
    serde_json::from_str(&text).map_err(|e| format!("Invalid JSON in {}: {}", file.display(), e))
}

fn write_document(file: &Path, doc: &Value) -> Result<(), String> {
    let mut text = render(doc, false)?;
    text.push('\n');
    std::fs::write(file, text).map_err(|e| format!("Failed to write {}: {}", file.display(), e))
}

fn render(value: &Value, compact: bool) -> Result<String, String> {
    if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .map_err(|e| e.to_string())
}
