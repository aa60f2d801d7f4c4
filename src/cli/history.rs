//! History command implementations (list, show, clear)

use clap::Subcommand;
use std::process::ExitCode;

use crate::history::History;

use super::{Context, EXIT_ERROR, EXIT_SUCCESS};

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List saved prompts, most recent first
    List,
    /// Print one saved prompt in full
    Show {
        /// Position in the list, starting at 1
        index: usize,
    },
    /// Delete every saved prompt
    Clear,
}

/// First line of a prompt, shortened for listings.
fn preview(prompt: &str) -> String {
    const MAX: usize = 72;
    let first = prompt.lines().next().unwrap_or_default();
    if first.chars().count() > MAX {
        let cut: String = first.chars().take(MAX - 3).collect();
        format!("{}...", cut)
    } else {
        first.to_string()
    }
}

/// Execute the history command
pub fn run_history(ctx: &Context, action: HistoryAction) -> ExitCode {
    let store = ctx.store();
    let mut history = History::load(&store);

    match action {
        HistoryAction::List => {
            if history.is_empty() {
                println!("No saved prompts.");
            }
            for (i, prompt) in history.entries().iter().enumerate() {
                println!("{:>3}. {}", i + 1, preview(prompt));
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        HistoryAction::Show { index } => match index.checked_sub(1).and_then(|i| history.restore(i)) {
            Some(prompt) => {
                println!("{}", prompt);
                ExitCode::from(EXIT_SUCCESS)
            }
            None => {
                eprintln!("Error: No saved prompt at position {} ({} saved)", index, history.len());
                ExitCode::from(EXIT_ERROR)
            }
        },
        HistoryAction::Clear => match history.clear() {
            Ok(()) => {
                println!("History cleared.");
                ExitCode::from(EXIT_SUCCESS)
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(EXIT_ERROR)
            }
        },
    }
}
