//! Configuration schema types for `wishcraft.toml`
//!
//! Defines the structure and validation rules for user configuration.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::catalog::{
    CatalogOption, Choice, CompositionMode, Language, Lighting, Occasion, Orientation, PaletteChoice,
    RenderIntent, SizePreset, StylePreset, Texture,
};
use crate::festivals::DEFAULT_FESTIVAL_ID;
use crate::models::SelectionState;

/// Root configuration structure for `wishcraft.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WishcraftConfig {
    /// Persistence settings
    #[serde(default)]
    pub storage: StorageConfig,
    /// Default selection applied before CLI flags
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Where festivals and history are kept
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data directory for the file store
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { dir: default_data_dir() }
    }
}

/// `$XDG_DATA_HOME/wishcraft`, `~/.local/share/wishcraft`, or `.wishcraft`
/// when neither variable is set.
pub fn default_data_dir() -> PathBuf {
    env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".local").join("share")))
        .map(|base| base.join("wishcraft"))
        .unwrap_or_else(|_| PathBuf::from(".wishcraft"))
}

/// Default selection ids. Every field is optional; unset fields keep the
/// built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
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
    pub brand: Option<String>,
    pub include_brand_mark: Option<bool>,
    pub strong_negatives: Option<bool>,
}

impl DefaultsConfig {
    /// Overlay the configured values onto `state`.
    ///
    /// Ids are parsed leniently here; [`WishcraftConfig::validate`] is where
    /// unknown ids are reported.
    pub fn apply_to(&self, state: &mut SelectionState) {
        if let Some(ref id) = self.occasion {
            state.occasion = Choice::parse(id);
        }
        if let Some(ref id) = self.festival {
            state.festival_id = id.clone();
        }
        if let Some(ref id) = self.language {
            state.language = Choice::parse(id);
        }
        if let Some(ref id) = self.palette {
            state.palette = Choice::parse(id);
        }
        if let Some(ref id) = self.orientation {
            state.orientation = Choice::parse(id);
        }
        if let Some(ref id) = self.size {
            state.size = Choice::parse(id);
        }
        if let Some(ref id) = self.style {
            state.style = Choice::parse(id);
        }
        if let Some(ref id) = self.intent {
            state.intent = Choice::parse(id);
        }
        if let Some(ref id) = self.lighting {
            state.lighting = Choice::parse(id);
        }
        if let Some(ref id) = self.texture {
            state.texture = Choice::parse(id);
        }
        if let Some(ref id) = self.composition {
            state.composition = Choice::parse(id);
        }
        if let Some(ref brand) = self.brand {
            state.brand = brand.clone();
        }
        if let Some(include) = self.include_brand_mark {
            state.include_brand_mark = include;
        }
        if let Some(strong) = self.strong_negatives {
            state.strong_negatives = strong;
        }
    }

    /// Selection state with these defaults applied to the built-in ones.
    pub fn selection(&self) -> SelectionState {
        let mut state = SelectionState::default();
        self.apply_to(&mut state);
        state
    }
}

/// Validation error for configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "defaults.language")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "wishcraft.toml: '{}' {}", self.field, self.message)
    }
}

fn check_id<T: CatalogOption>(
    field: &str,
    value: &Option<String>,
    errors: &mut Vec<ConfigValidationError>,
) {
    if let Some(id) = value {
        if T::from_id(id).is_none() {
            errors.push(ConfigValidationError {
                field: format!("defaults.{}", field),
                message: format!("unknown id '{}' (expected one of: {})", id, T::ids().join(", ")),
            });
        }
    }
}

impl WishcraftConfig {
    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.storage.dir.as_os_str().is_empty() {
            errors.push(ConfigValidationError {
                field: "storage.dir".to_string(),
                message: "must be a non-empty path".to_string(),
            });
        }

        let d = &self.defaults;
        check_id::<Occasion>("occasion", &d.occasion, &mut errors);
        check_id::<Language>("language", &d.language, &mut errors);
        check_id::<PaletteChoice>("palette", &d.palette, &mut errors);
        check_id::<Orientation>("orientation", &d.orientation, &mut errors);
        check_id::<SizePreset>("size", &d.size, &mut errors);
        check_id::<StylePreset>("style", &d.style, &mut errors);
        check_id::<RenderIntent>("intent", &d.intent, &mut errors);
        check_id::<Lighting>("lighting", &d.lighting, &mut errors);
        check_id::<Texture>("texture", &d.texture, &mut errors);
        check_id::<CompositionMode>("composition", &d.composition, &mut errors);

        // User festivals are not known until the store is opened, so only
        // shape is checked here.
        if let Some(ref festival) = d.festival {
            if festival.trim().is_empty() {
                errors.push(ConfigValidationError {
                    field: "defaults.festival".to_string(),
                    message: format!("must be a non-empty id (e.g. '{}')", DEFAULT_FESTIVAL_ID),
                });
            }
        }

        errors
    }
}
