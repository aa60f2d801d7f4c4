//! The caller-owned selection state fed to the composer.

use serde::{Deserialize, Serialize};

use crate::catalog::{
    Choice, CompositionMode, Language, Lighting, Occasion, Orientation, PaletteChoice,
    RenderIntent, SizePreset, StylePreset, Texture,
};
use crate::festivals::DEFAULT_FESTIVAL_ID;

/// Every user choice that influences the composed prompt.
///
/// The state has no identity of its own: it is passed by value on every
/// change. Missing JSON fields take the defaults of a fresh form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionState {
    pub occasion: Choice<Occasion>,
    /// Only meaningful when the occasion is `festival`
    pub festival_id: String,
    pub name: String,
    pub partner_name: String,
    pub age: String,
    pub relation: String,
    pub brand: String,
    pub orientation: Choice<Orientation>,
    pub size: Choice<SizePreset>,
    pub language: Choice<Language>,
    pub palette: Choice<PaletteChoice>,
    pub include_brand_mark: bool,
    pub style: Choice<StylePreset>,
    pub intent: Choice<RenderIntent>,
    pub lighting: Choice<Lighting>,
    pub texture: Choice<Texture>,
    pub composition: Choice<CompositionMode>,
    pub strong_negatives: bool,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            occasion: Choice::default(),
            festival_id: DEFAULT_FESTIVAL_ID.to_string(),
            name: String::new(),
            partner_name: String::new(),
            age: String::new(),
            relation: String::new(),
            brand: String::new(),
            orientation: Choice::default(),
            size: Choice::default(),
            language: Choice::default(),
            palette: Choice::default(),
            include_brand_mark: true,
            style: Choice::default(),
            intent: Choice::default(),
            lighting: Choice::default(),
            texture: Choice::default(),
            composition: Choice::default(),
            strong_negatives: true,
        }
    }
}

impl SelectionState {
    /// Start from the defaults for `occasion`.
    pub fn for_occasion(occasion: Occasion) -> Self {
        Self { occasion: occasion.into(), ..Default::default() }
    }

    /// Reset the festival reference if it pointed at a removed festival.
    ///
    /// Returns `true` when the selection changed.
    pub fn release_festival(&mut self, removed_id: &str) -> bool {
        if self.festival_id == removed_id {
            self.festival_id = DEFAULT_FESTIVAL_ID.to_string();
            true
        } else {
            false
        }
    }
}
