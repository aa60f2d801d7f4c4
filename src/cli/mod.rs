//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod compose;
mod festivals;
mod history;
mod options;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::{load_config, WishcraftConfig};
use crate::storage::FileStore;

pub use compose::ComposeArgs;
pub use festivals::FestivalAction;
pub use history::HistoryAction;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// WishCraft - compose image-generation prompts for greeting and festival posters
#[derive(Parser)]
#[command(name = "wishcraft")]
#[command(about = "WishCraft - compose image-generation prompts for greeting and festival posters")]
#[command(version)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: nearest wishcraft.toml, then the XDG config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding user festivals and history
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compose a prompt from the selected options
    Compose(ComposeArgs),

    /// List, inspect, add and remove festivals
    Festivals {
        #[command(subcommand)]
        action: FestivalAction,
    },

    /// Inspect or clear saved prompts
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// List option ids and labels
    Options {
        /// Option set to list (occasion, language, palette, orientation, size,
        /// style, intent, lighting, texture, composition). Lists all if omitted.
        kind: Option<String>,
    },
}

/// Initialize `env_logger` for the given verbosity.
pub fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    // A second init (e.g. from tests) is harmless.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .try_init();
}

/// Settings shared by every command.
pub(crate) struct Context {
    pub config: WishcraftConfig,
}

impl Context {
    fn load(config_path: Option<&Path>, data_dir: Option<PathBuf>) -> Result<Self, ExitCode> {
        let mut config = match load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                return Err(ExitCode::from(EXIT_INVALID_ARGS));
            }
        };
        if let Some(dir) = data_dir {
            config.storage.dir = dir;
        }
        log::debug!("data directory: {}", config.storage.dir.display());
        Ok(Self { config })
    }

    /// File store rooted at the configured data directory.
    pub fn store(&self) -> FileStore {
        FileStore::new(self.config.storage.dir.clone())
    }
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = match Context::load(cli.config.as_deref(), cli.data_dir) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    match cli.command {
        Commands::Compose(args) => compose::run_compose(&ctx, args),
        Commands::Festivals { action } => festivals::run_festivals(&ctx, action),
        Commands::History { action } => history::run_history(&ctx, action),
        Commands::Options { kind } => options::run_options(kind.as_deref()),
    }
}
