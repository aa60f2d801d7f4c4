//! Compose command implementation

use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::composer::{compose_lenient, compose_strict};
use crate::config::{selection_for, CliOverrides};
use crate::history::History;
use crate::models::SelectionState;
use crate::registry::FestivalRegistry;

use super::{Context, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

#[derive(Args, Debug, Default)]
pub struct ComposeArgs {
    /// Occasion id (birthday, festival, anniversary, sale, custom)
    #[arg(long)]
    pub occasion: Option<String>,

    /// Festival id, used with --occasion festival
    #[arg(long)]
    pub festival: Option<String>,

    /// Recipient name (first name for anniversaries)
    #[arg(long)]
    pub name: Option<String>,

    /// Partner name for anniversaries
    #[arg(long)]
    pub partner: Option<String>,

    /// Age the recipient is turning
    #[arg(long)]
    pub age: Option<String>,

    /// Relation to the recipient
    #[arg(long)]
    pub relation: Option<String>,

    /// Brand name
    #[arg(long)]
    pub brand: Option<String>,

    /// Language id (en, hi, te)
    #[arg(long, visible_alias = "language")]
    pub lang: Option<String>,

    /// Palette id (auto, gold, vibrant, pastel, mono)
    #[arg(long)]
    pub palette: Option<String>,

    #[arg(long)]
    pub orientation: Option<String>,

    /// Size preset id
    #[arg(long)]
    pub size: Option<String>,

    /// Style preset id
    #[arg(long)]
    pub style: Option<String>,

    /// Render intent id
    #[arg(long)]
    pub intent: Option<String>,

    #[arg(long)]
    pub lighting: Option<String>,

    #[arg(long)]
    pub texture: Option<String>,

    /// Composition mode id
    #[arg(long)]
    pub composition: Option<String>,

    /// Include the brand logo instruction (true/false)
    #[arg(long, value_name = "BOOL")]
    pub brand_mark: Option<bool>,

    /// Append the stricter negative-constraint tier (true/false)
    #[arg(long, value_name = "BOOL")]
    pub strong_negatives: Option<bool>,

    /// JSON selection state to start from instead of the configured defaults
    #[arg(long, value_name = "FILE")]
    pub state: Option<PathBuf>,

    /// Fail on unknown ids instead of substituting defaults
    #[arg(long)]
    pub strict: bool,

    /// Save the composed prompt to history
    #[arg(long)]
    pub save: bool,
}

impl ComposeArgs {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            occasion: self.occasion.clone(),
            festival: self.festival.clone(),
            language: self.lang.clone(),
            palette: self.palette.clone(),
            orientation: self.orientation.clone(),
            size: self.size.clone(),
            style: self.style.clone(),
            intent: self.intent.clone(),
            lighting: self.lighting.clone(),
            texture: self.texture.clone(),
            composition: self.composition.clone(),
            name: self.name.clone(),
            partner_name: self.partner.clone(),
            age: self.age.clone(),
            relation: self.relation.clone(),
            brand: self.brand.clone(),
            include_brand_mark: self.brand_mark,
            strong_negatives: self.strong_negatives,
        }
    }
}

fn read_state(path: &Path) -> Result<SelectionState, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read state file '{}': {}", path.display(), e))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Invalid state file '{}': {}", path.display(), e))
}

/// Execute the compose command
pub fn run_compose(ctx: &Context, args: ComposeArgs) -> ExitCode {
    let saved = match args.state.as_deref().map(read_state).transpose() {
        Ok(saved) => saved,
        Err(message) => {
            eprintln!("Error: {}", message);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let state = selection_for(saved, &ctx.config, &args.overrides());
    let store = ctx.store();
    let catalog = FestivalRegistry::new(&store).snapshot();

    let prompt = if args.strict {
        match compose_strict(&state, &catalog) {
            Ok(prompt) => prompt,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        let composition = compose_lenient(&state, &catalog);
        for warning in &composition.warnings {
            eprintln!("Warning: {}, using default", warning);
        }
        composition.prompt
    };

    println!("{}", prompt);

    if args.save {
        let mut history = History::load(&store);
        if let Err(e) = history.save(&prompt) {
            eprintln!("Error: Failed to save history: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
        log::info!("saved prompt to history in {}", store.dir().display());
    }

    ExitCode::from(EXIT_SUCCESS)
}
