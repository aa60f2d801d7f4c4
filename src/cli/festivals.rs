//! Festival command implementations (list, show, add, remove)

use clap::Subcommand;
use std::process::ExitCode;

use crate::catalog::Language;
use crate::models::{split_list, Festival, FestivalDraft};
use crate::registry::{FestivalError, FestivalRegistry, FestivalSource, Registry, Upserted};
use crate::suggest::did_you_mean;

use super::{Context, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

#[derive(Subcommand)]
pub enum FestivalAction {
    /// List built-in and user festivals
    List {
        /// Print the festival records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one festival's palette, motifs and greetings
    Show {
        /// Festival id
        id: String,
    },
    /// Add a user festival, or replace the one with the same id
    Add {
        /// Display name
        #[arg(long)]
        label: String,

        /// Explicit id (default: derived from the label)
        #[arg(long)]
        id: Option<String>,

        /// Comma-separated colors, e.g. "#FFB300, #6D4C41"
        #[arg(long)]
        palette: Option<String>,

        /// Comma-separated motifs
        #[arg(long)]
        motifs: Option<String>,

        /// English greeting
        #[arg(long)]
        greet_en: Option<String>,

        /// Hindi greeting
        #[arg(long)]
        greet_hi: Option<String>,

        /// Telugu greeting
        #[arg(long)]
        greet_te: Option<String>,
    },
    /// Remove a user festival
    Remove {
        /// Festival id
        id: String,
    },
}

fn print_festival(festival: &Festival, source: FestivalSource) {
    let origin = match source {
        FestivalSource::User => "user",
        _ => "built-in",
    };
    println!("Festival: {} ({})", festival.id, origin);
    println!("  Label:   {}", festival.label);
    println!("  Palette: {}", festival.palette.join(", "));
    println!("  Motifs:  {}", festival.motifs.join(", "));
    println!("  Greetings:");
    for (lang, text) in &festival.greetings {
        println!("    {} => {}", lang, text);
    }
}

fn report_unknown(id: &str, registry: &dyn Registry<Festival>) {
    eprintln!("Error: Unknown festival '{}'", id);
    let ids: Vec<&str> = registry.ids().collect();
    if let Some(hint) = did_you_mean(id, &ids) {
        eprintln!("{}", hint);
    }
}

fn draft_from_args(
    label: String,
    id: Option<String>,
    palette: Option<String>,
    motifs: Option<String>,
    greetings: [(Language, Option<String>); 3],
) -> FestivalDraft {
    let mut draft = FestivalDraft::new(label)
        .with_palette(palette.as_deref().map(split_list).unwrap_or_default())
        .with_motifs(motifs.as_deref().map(split_list).unwrap_or_default());
    if let Some(id) = id {
        draft = draft.with_id(id);
    }
    for (lang, text) in greetings {
        if let Some(text) = text {
            draft = draft.with_greeting(lang, text);
        }
    }
    draft
}

/// Execute the festivals command
pub fn run_festivals(ctx: &Context, action: FestivalAction) -> ExitCode {
    let store = ctx.store();
    let mut registry = FestivalRegistry::new(&store);

    match action {
        FestivalAction::List { json } => {
            let catalog = registry.snapshot();
            if json {
                let festivals: Vec<&Festival> = catalog.iter().collect();
                match serde_json::to_string_pretty(&festivals) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        return ExitCode::from(EXIT_ERROR);
                    }
                }
                return ExitCode::from(EXIT_SUCCESS);
            }

            println!("Built-in festivals:");
            for festival in catalog.builtin_festivals() {
                println!("  {:<12} {}", festival.id, festival.label);
            }
            println!();
            println!("User festivals:");
            if catalog.user_festivals().is_empty() {
                println!("  (none)");
            }
            for festival in catalog.user_festivals() {
                println!("  {:<12} {}", festival.id, festival.label);
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        FestivalAction::Show { id } => {
            let catalog = registry.snapshot();
            match (catalog.get(&id), catalog.source_of(&id)) {
                (Some(festival), Some(source)) => {
                    print_festival(festival, source);
                    ExitCode::from(EXIT_SUCCESS)
                }
                _ => {
                    report_unknown(&id, &catalog);
                    ExitCode::from(EXIT_ERROR)
                }
            }
        }
        FestivalAction::Add { label, id, palette, motifs, greet_en, greet_hi, greet_te } => {
            let draft = draft_from_args(
                label,
                id,
                palette,
                motifs,
                [(Language::En, greet_en), (Language::Hi, greet_hi), (Language::Te, greet_te)],
            );
            match registry.upsert(draft) {
                Ok(Upserted::Inserted(id)) => {
                    println!("Added festival '{}'", id);
                    ExitCode::from(EXIT_SUCCESS)
                }
                Ok(Upserted::Replaced(id)) => {
                    println!("Updated festival '{}'", id);
                    ExitCode::from(EXIT_SUCCESS)
                }
                Err(e @ FestivalError::Storage(_)) => {
                    eprintln!("Error: {}", e);
                    ExitCode::from(EXIT_ERROR)
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::from(EXIT_INVALID_ARGS)
                }
            }
        }
        FestivalAction::Remove { id } => {
            // A configured default that points at the removed festival falls
            // back to the default festival from now on.
            let mut defaults = ctx.config.defaults.selection();
            let before = defaults.festival_id.clone();
            match registry.remove_selected(&id, &mut defaults) {
                Ok(true) => {
                    println!("Removed festival '{}'", id);
                    if defaults.festival_id != before {
                        eprintln!(
                            "Warning: configured default festival '{}' no longer exists, compositions will use '{}'",
                            before, defaults.festival_id
                        );
                    }
                    ExitCode::from(EXIT_SUCCESS)
                }
                Ok(false) => {
                    report_unknown(&id, &registry);
                    ExitCode::from(EXIT_ERROR)
                }
                Err(e @ FestivalError::BuiltinImmutable(_)) => {
                    eprintln!("Error: {}", e);
                    ExitCode::from(EXIT_INVALID_ARGS)
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::from(EXIT_ERROR)
                }
            }
        }
    }
}
