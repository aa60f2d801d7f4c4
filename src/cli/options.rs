//! Options command implementation

use std::process::ExitCode;

use crate::catalog::{list_kind, KINDS};
use crate::suggest::did_you_mean;

use super::{EXIT_INVALID_ARGS, EXIT_SUCCESS};

fn print_kind(kind: &str, rows: &[(&str, &str)]) {
    println!("{}:", kind);
    for (id, label) in rows {
        println!("  {:<14} {}", id, label);
    }
}

/// Execute the options command
pub fn run_options(kind: Option<&str>) -> ExitCode {
    match kind {
        None => {
            for (i, kind) in KINDS.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                if let Some(rows) = list_kind(kind) {
                    print_kind(kind, &rows);
                }
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Some(kind) => match list_kind(kind) {
            Some(rows) => {
                print_kind(kind, &rows);
                ExitCode::from(EXIT_SUCCESS)
            }
            None => {
                eprintln!("Error: Unknown option set '{}'", kind);
                if let Some(hint) = did_you_mean(kind, KINDS) {
                    eprintln!("{}", hint);
                }
                eprintln!();
                eprintln!("Available option sets:");
                for name in KINDS {
                    eprintln!("  {}", name);
                }
                ExitCode::from(EXIT_INVALID_ARGS)
            }
        },
    }
}
