//! WASM API module for browser/JS interop
//!
//! Exposes the composer to a browser shell. The shell owns persistence and
//! passes its stored user festivals in as JSON on every call; invalid JSON
//! degrades to defaults and empty lists rather than throwing.

use wasm_bindgen::prelude::*;

use crate::composer::compose_lenient;
use crate::models::{Festival, SelectionState};
use crate::negative::negative_constraints;
use crate::registry::{slugify, FestivalCatalog};

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

fn parse_state(state_json: &str) -> SelectionState {
    serde_json::from_str(state_json).unwrap_or_else(|e| {
        log::warn!("invalid selection state, using defaults: {}", e);
        SelectionState::default()
    })
}

fn parse_catalog(user_festivals_json: &str) -> FestivalCatalog {
    let user: Vec<Festival> = if user_festivals_json.trim().is_empty() {
        Vec::new()
    } else {
        serde_json::from_str(user_festivals_json).unwrap_or_else(|e| {
            log::warn!("ignoring invalid user festivals: {}", e);
            Vec::new()
        })
    };
    FestivalCatalog::with_user(user)
}

/// Result of composing a prompt in the browser.
#[wasm_bindgen]
pub struct ComposeResult {
    prompt: String,
    warnings: Vec<String>,
}

#[wasm_bindgen]
impl ComposeResult {
    /// The composed prompt text
    #[wasm_bindgen(getter)]
    pub fn prompt(&self) -> String {
        self.prompt.clone()
    }

    /// Unknown ids that were replaced by defaults
    #[wasm_bindgen(getter)]
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.clone()
    }
}

/// Compose the prompt for a JSON selection state.
#[wasm_bindgen]
pub fn compose_prompt(state_json: &str, user_festivals_json: &str) -> String {
    compose_with_warnings(state_json, user_festivals_json).prompt
}

/// Compose and report every substituted id.
#[wasm_bindgen]
pub fn compose_with_warnings(state_json: &str, user_festivals_json: &str) -> ComposeResult {
    let state = parse_state(state_json);
    let catalog = parse_catalog(user_festivals_json);
    let composition = compose_lenient(&state, &catalog);
    ComposeResult {
        prompt: composition.prompt,
        warnings: composition.warnings.iter().map(|w| w.to_string()).collect(),
    }
}

/// All festivals (built-ins first) as a JSON array.
#[wasm_bindgen]
pub fn list_festivals(user_festivals_json: &str) -> String {
    let catalog = parse_catalog(user_festivals_json);
    let festivals: Vec<&Festival> = catalog.iter().collect();
    serde_json::to_string(&festivals).unwrap_or_else(|_| "[]".to_string())
}

/// Id a festival with this label would be stored under.
#[wasm_bindgen]
pub fn festival_id_for(label: &str) -> String {
    slugify(label)
}

/// The negative-constraint text on its own.
#[wasm_bindgen]
pub fn negative_prompt(strong: bool) -> String {
    negative_constraints(strong)
}
