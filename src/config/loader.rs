//! Configuration loading and discovery for `wishcraft.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::{DefaultsConfig, WishcraftConfig};
use crate::models::SelectionState;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name searched for during discovery.
pub const CONFIG_FILE: &str = "wishcraft.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse wishcraft.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// Selection values given on the command line.
///
/// These win over the config `[defaults]` and over a saved selection.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub occasion: Option<String>,
    pub festival: Option<String>,
    pub language: Option<String>,
    pub palette: Option<String>,
    pub orientation: Option<String>,
    pub size: Option<String>,
    pub style: Option<String>,
    pub intent: Option<String>,
    pub lighting: Option<String>,
    pub texture: Option<String>,
    pub composition: Option<String>,
    pub name: Option<String>,
    pub partner_name: Option<String>,
    pub age: Option<String>,
    pub relation: Option<String>,
    pub brand: Option<String>,
    pub include_brand_mark: Option<bool>,
    pub strong_negatives: Option<bool>,
}

/// Find wishcraft.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for wishcraft.toml
/// 2. Check XDG_CONFIG_HOME/wishcraft/wishcraft.toml (or ~/.config/wishcraft/wishcraft.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find wishcraft.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("wishcraft").join(CONFIG_FILE);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find wishcraft.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a wishcraft.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns the default
/// configuration.
///
/// # Example
/// ```ignore
/// let config = load_config(None)?;
/// let config = load_config(Some(Path::new("team/wishcraft.toml")))?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<WishcraftConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => {
            log::debug!("loading config from {}", p.display());
            load_config_file(&p)
        }
        None => Ok(default_config()),
    }
}

fn load_config_file(path: &Path) -> Result<WishcraftConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let mut config: WishcraftConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    // A relative data dir is relative to the file that names it.
    if let Some(root) = config_root(path) {
        config.storage.dir = resolve_path(root, &config.storage.dir);
    }

    Ok(config)
}

/// Configuration used when no wishcraft.toml is found.
pub fn default_config() -> WishcraftConfig {
    WishcraftConfig::default()
}

impl CliOverrides {
    /// The selection-id part of the overrides, shaped like a `[defaults]` table.
    pub fn as_defaults(&self) -> DefaultsConfig {
        DefaultsConfig {
            occasion: self.occasion.clone(),
            festival: self.festival.clone(),
            language: self.language.clone(),
            palette: self.palette.clone(),
            orientation: self.orientation.clone(),
            size: self.size.clone(),
            style: self.style.clone(),
            intent: self.intent.clone(),
            lighting: self.lighting.clone(),
            texture: self.texture.clone(),
            composition: self.composition.clone(),
            brand: self.brand.clone(),
            include_brand_mark: self.include_brand_mark,
            strong_negatives: self.strong_negatives,
        }
    }
}

/// Build the selection for a compose run.
///
/// Layers, lowest first: built-in defaults and the config `[defaults]`, or a
/// saved selection `state` which replaces both; then CLI overrides.
pub fn selection_for(
    state: Option<SelectionState>,
    config: &WishcraftConfig,
    overrides: &CliOverrides,
) -> SelectionState {
    let mut state = state.unwrap_or_else(|| config.defaults.selection());
    overrides.as_defaults().apply_to(&mut state);

    let free_text = [
        (&mut state.name, &overrides.name),
        (&mut state.partner_name, &overrides.partner_name),
        (&mut state.age, &overrides.age),
        (&mut state.relation, &overrides.relation),
    ];
    for (slot, value) in free_text {
        if let Some(v) = value {
            *slot = v.clone();
        }
    }

    state
}

/// Directory containing a config file.
pub fn config_root(config_path: &Path) -> Option<&Path> {
    config_path.parent()
}

/// Resolve a path relative to the config root.
///
/// If the path is absolute, returns it unchanged.
pub fn resolve_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
