//! Palette resolution.
//!
//! Maps a palette choice plus an optional festival to an ordered list of
//! color values. Colors are opaque strings here; the only transformation
//! applied anywhere is stripping `#` when rendering into prompt text.

use crate::catalog::{Choice, PaletteChoice};
use crate::models::Festival;

/// Fixed four-color palettes, keyed by choice. Stored without `#`.
const GOLD: [&str; 4] = ["F59E0B", "FCD34D", "78350F", "111827"];
const VIBRANT: [&str; 4] = ["EF4444", "22C55E", "3B82F6", "F59E0B"];
const PASTEL: [&str; 4] = ["FBCFE8", "BFDBFE", "BBF7D0", "FDE68A"];
const MONO: [&str; 4] = ["111827", "1F2937", "374151", "9CA3AF"];

/// Palette used for `auto` without a festival and for unknown choices.
pub const DEFAULT_PALETTE: [&str; 4] = ["3B82F6", "10B981", "F59E0B", "111827"];

/// Indicates where a resolved palette came from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PaletteSource {
    /// Taken verbatim from the festival with this id
    Festival(String),
    /// One of the fixed built-in palettes
    Builtin(PaletteChoice),
    /// Default palette substituted for `auto` without a festival or an unknown choice
    Fallback,
}

/// A resolved palette: colors in significant order, plus provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPalette {
    pub colors: Vec<String>,
    pub source: PaletteSource,
}

fn owned(colors: &[&str]) -> Vec<String> {
    colors.iter().map(|c| c.to_string()).collect()
}

/// The fixed palette for a choice, `None` for `auto`.
pub fn builtin_palette(choice: PaletteChoice) -> Option<[&'static str; 4]> {
    match choice {
        PaletteChoice::Auto => None,
        PaletteChoice::Gold => Some(GOLD),
        PaletteChoice::Vibrant => Some(VIBRANT),
        PaletteChoice::Pastel => Some(PASTEL),
        PaletteChoice::Mono => Some(MONO),
    }
}

/// Resolve a palette choice with provenance.
///
/// `auto` with a festival returns the festival palette verbatim. A festival
/// with an empty palette counts as no festival, so the result always holds at
/// least one color.
pub fn resolve_palette_with_source(
    choice: &Choice<PaletteChoice>,
    festival: Option<&Festival>,
) -> ResolvedPalette {
    match choice.known() {
        Some(PaletteChoice::Auto) => match festival {
            Some(fest) if !fest.palette.is_empty() => ResolvedPalette {
                colors: fest.palette.clone(),
                source: PaletteSource::Festival(fest.id.clone()),
            },
            _ => ResolvedPalette { colors: owned(&DEFAULT_PALETTE), source: PaletteSource::Fallback },
        },
        Some(known) => match builtin_palette(known) {
            Some(colors) => {
                ResolvedPalette { colors: owned(&colors), source: PaletteSource::Builtin(known) }
            }
            None => ResolvedPalette { colors: owned(&DEFAULT_PALETTE), source: PaletteSource::Fallback },
        },
        None => {
            log::debug!("unknown palette '{}', using default", choice.id());
            ResolvedPalette { colors: owned(&DEFAULT_PALETTE), source: PaletteSource::Fallback }
        }
    }
}

/// Resolve a palette choice to its ordered colors.
pub fn resolve_palette(choice: &Choice<PaletteChoice>, festival: Option<&Festival>) -> Vec<String> {
    resolve_palette_with_source(choice, festival).colors
}

/// Render colors for prompt text: `#` removed everywhere, comma-joined.
///
/// Image models tend to paint literal hex codes, so no `#` may leak into the
/// generated text.
pub fn render_palette(colors: &[String]) -> String {
    colors.iter().map(|c| c.replace('#', "")).collect::<Vec<_>>().join(", ")
}
