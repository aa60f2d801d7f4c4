//! Prompt composition.
//!
//! Turns a [`SelectionState`] plus a festival snapshot into the final
//! multi-line prompt. Composition is pure: the same state and catalog always
//! yield byte-identical text, and unresolvable references never fail in
//! lenient mode. They are substituted with documented defaults and reported
//! as [`UnresolvedRef`] warnings.

use std::fmt;
use thiserror::Error;

use crate::catalog::{CatalogOption, Choice, Occasion, StylePreset};
use crate::festivals::FALLBACK_MOTIFS;
use crate::greeting::{anniversary_heading, non_blank, resolve_greeting, resolve_language};
use crate::models::{Festival, SelectionState};
use crate::negative::negative_constraints;
use crate::palette::{render_palette, resolve_palette};
use crate::registry::{FestivalCatalog, FestivalSource};

const QUALITY_LINES: [&str; 3] = [
    "Agency-grade composition with clear hierarchy and ample negative space.",
    "Typography: professional display for H1; clean sans-serif for body; optical kerning and consistent tracking.",
    "Production: crisp edges, anti-aliased shapes, print mindset (300-DPI intent), avoid compression artifacts.",
];

const EXPORT_LINE: &str = "Export as high-res PNG.";

/// An identifier that did not resolve and was substituted during composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedRef {
    /// Option set the identifier belongs to (e.g. "style", "festival")
    pub kind: &'static str,
    /// The identifier as supplied
    pub id: String,
}

impl fmt::Display for UnresolvedRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.id)
    }
}

/// Errors from strict composition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ComposeError {
    #[error("Unresolved references:\n{}", .0.iter().map(|r| format!("  - {}", r)).collect::<Vec<_>>().join("\n"))]
    Unresolved(Vec<UnresolvedRef>),
}

/// A composed prompt along with any substitutions made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    pub prompt: String,
    pub warnings: Vec<UnresolvedRef>,
}

/// Compose the prompt for `state`, substituting defaults for unknown ids.
pub fn compose(state: &SelectionState, catalog: &FestivalCatalog) -> String {
    compose_lenient(state, catalog).prompt
}

/// Compose and report every substituted reference.
pub fn compose_lenient(state: &SelectionState, catalog: &FestivalCatalog) -> Composition {
    let mut warnings = Vec::new();
    let prompt = Composer::new(state, catalog, &mut warnings).build();
    for warning in &warnings {
        log::debug!("composed with {}", warning);
    }
    Composition { prompt, warnings }
}

/// Compose, failing if any reference is unresolvable.
pub fn compose_strict(
    state: &SelectionState,
    catalog: &FestivalCatalog,
) -> Result<String, ComposeError> {
    let composition = compose_lenient(state, catalog);
    if composition.warnings.is_empty() {
        Ok(composition.prompt)
    } else {
        Err(ComposeError::Unresolved(composition.warnings))
    }
}

/// The allow-list instruction for a set of literal strings.
///
/// Each literal is quoted; no other text may be rendered.
pub fn allow_list_line(literals: &[String]) -> String {
    let quoted: Vec<String> = literals.iter().map(|l| quote(l)).collect();
    format!("Only render this copy exactly: {}. Do not render any other text.", quoted.join(", "))
}

fn quote(text: &str) -> String {
    format!("\"{}\"", text)
}

/// Indefinite article for a lower-cased phrase.
fn article(phrase: &str) -> &'static str {
    match phrase.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

fn note<T: CatalogOption>(choice: &Choice<T>, warnings: &mut Vec<UnresolvedRef>) {
    if !choice.is_known() {
        warnings.push(UnresolvedRef { kind: T::KIND, id: choice.id().to_string() });
    }
}

/// Everything resolved up front, shared by the occasion templates.
struct Composer<'a> {
    state: &'a SelectionState,
    occasion: Occasion,
    /// Resolved festival; only read by the festival template and `auto` palette
    festival: Festival,
    greeting: String,
    style_label: String,
    style_parts: &'static [&'static str],
    common: Vec<String>,
    brand_line: String,
    negatives: String,
}

impl<'a> Composer<'a> {
    fn new(
        state: &'a SelectionState,
        catalog: &FestivalCatalog,
        warnings: &mut Vec<UnresolvedRef>,
    ) -> Self {
        note(&state.occasion, warnings);
        note(&state.language, warnings);
        note(&state.palette, warnings);
        note(&state.orientation, warnings);
        note(&state.size, warnings);
        note(&state.style, warnings);
        note(&state.intent, warnings);
        note(&state.lighting, warnings);
        note(&state.texture, warnings);
        note(&state.composition, warnings);

        // Unknown occasions compose with the open-ended template.
        let occasion = state.occasion.or(Occasion::Custom);

        let is_festival = occasion == Occasion::Festival;
        let resolved = catalog.resolve(&state.festival_id);
        if is_festival && resolved.source == FestivalSource::Fallback {
            warnings.push(UnresolvedRef { kind: "festival", id: state.festival_id.clone() });
        }
        let festival = resolved.festival;

        let palette = resolve_palette(&state.palette, is_festival.then_some(&festival));
        let greeting = resolve_greeting(
            &state.occasion,
            &state.festival_id,
            &state.language,
            &state.name,
            &state.partner_name,
            catalog,
        );

        let common = vec![
            format!("Orientation: {}", state.orientation.id()),
            format!("Size: {}", state.size.label()),
            format!("Render intent: {}", state.intent.label()),
            format!("Lighting: {}", state.lighting.label()),
            format!("Texture: {}", state.texture.label()),
            format!("Composition: {}", state.composition.label()),
            format!(
                "Color palette guidance (do not display codes or palette chips): {}",
                render_palette(&palette)
            ),
        ];

        let brand_line = match non_blank(&state.brand) {
            Some(brand) if state.include_brand_mark => {
                format!("Include {} logo at top-right; maintain clear space.", brand)
            }
            _ => "Branding: none / optional placeholder".to_string(),
        };

        Self {
            state,
            occasion,
            festival,
            greeting,
            style_label: state.style.label().to_lowercase(),
            style_parts: state.style.known().map(StylePreset::parts).unwrap_or(&[]),
            common,
            brand_line,
            negatives: format!("Negative prompt: {}", negative_constraints(state.strong_negatives)),
        }
    }

    fn build(self) -> String {
        let lines = match self.occasion {
            Occasion::Birthday => self.birthday(),
            Occasion::Festival => self.festival(),
            Occasion::Anniversary => self.anniversary(),
            Occasion::Sale => self.sale(),
            Occasion::Custom => self.custom(),
        };
        lines.join("\n")
    }

    /// Opening sentence, style phrases, shared format block and brand line.
    fn head(&self, opening: String) -> Vec<String> {
        let mut lines = vec![opening];
        lines.extend(self.style_parts.iter().map(|p| p.to_string()));
        lines.extend(self.common.iter().cloned());
        lines.push(self.brand_line.clone());
        lines
    }

    /// Quality directives, negatives and, for templated occasions, the export line.
    fn tail(&self, lines: &mut Vec<String>, export: bool) {
        lines.extend(QUALITY_LINES.iter().map(|l| l.to_string()));
        lines.push(self.negatives.clone());
        if export {
            lines.push(EXPORT_LINE.to_string());
        }
    }

    fn birthday(&self) -> Vec<String> {
        let style = &self.style_label;
        let mut lines = self.head(format!(
            "Design {} {} birthday wish poster for social and print.",
            article(style),
            style
        ));

        let mut recipient = format!("Recipient: {}", non_blank(&self.state.name).unwrap_or("[name]"));
        if let Some(age) = non_blank(&self.state.age) {
            recipient.push_str(&format!(", turning {}", age));
        }
        if let Some(relation) = non_blank(&self.state.relation) {
            recipient.push_str(&format!(", relation: {}", relation));
        }
        recipient.push('.');
        lines.push(recipient);
        lines.push("Motifs: confetti, balloons, subtle sparkles (keep uncluttered).".to_string());

        let subline = "Wishing you joy and good health".to_string();
        lines.push(format!("Headline (H1): {}", quote(&self.greeting)));
        lines.push(format!("Subline (H2): {}", quote(&subline)));
        lines.push(allow_list_line(&[self.greeting.clone(), subline]));
        lines.push("Layout: H1 prominent; H2 below; strong contrast; safe margins.".to_string());

        self.tail(&mut lines, true);
        lines
    }

    fn festival(&self) -> Vec<String> {
        let style = &self.style_label;
        let label = self.festival.label.as_str();
        let motifs = if self.festival.motifs.is_empty() {
            FALLBACK_MOTIFS.join(", ")
        } else {
            self.festival.motifs.join(", ")
        };

        let mut lines = self.head(format!(
            "Create {} {} festival wishes poster for {}.",
            article(style),
            style,
            label
        ));
        lines.push(format!("Motifs: {}.", motifs));

        let subline = "Wishing you prosperity and happiness".to_string();
        lines.push(format!("Headline (H1): {}", quote(&self.greeting)));
        lines.push(format!("Subline (H2): {}", quote(&subline)));
        lines.push(allow_list_line(&[self.greeting.clone(), subline]));
        lines.push("Ensure text legibility over motifs.".to_string());

        self.tail(&mut lines, true);
        lines
    }

    fn anniversary(&self) -> Vec<String> {
        let style = &self.style_label;
        let duo = match (non_blank(&self.state.name), non_blank(&self.state.partner_name)) {
            (Some(a), Some(b)) => format!("{} & {}", a, b),
            (Some(a), None) => a.to_string(),
            _ => "[names]".to_string(),
        };

        let mut lines = self.head(format!(
            "Design {} {} anniversary wish for {}.",
            article(style),
            style,
            duo
        ));
        lines.push("Motifs: rings, soft florals, tasteful bokeh; upscale minimal.".to_string());

        let heading = anniversary_heading(resolve_language(&self.state.language)).to_string();
        let names = format!("{}!", duo);
        lines.push(format!("Greeting: {}", self.greeting));
        lines.push(format!("Headline (H1): {}", quote(&heading)));
        lines.push(format!("Names (H2): {}", quote(&names)));
        lines.push(allow_list_line(&[heading, names]));

        self.tail(&mut lines, true);
        lines
    }

    fn sale(&self) -> Vec<String> {
        let style = &self.style_label;
        let mut lines = self.head(format!(
            "Design {} {} festive offer banner suitable for social and print.",
            article(style),
            style
        ));
        lines.push("Motifs (subtle): diyas/kites/rangoli depending on season.".to_string());

        let brand = non_blank(&self.state.brand).unwrap_or("Brand").to_string();
        let copy = [
            ("Brand name", brand),
            ("Offer headline", "Limited-time Offer".to_string()),
            ("Discount callout", "Discount %".to_string()),
            ("CTA button", "Call to Action".to_string()),
        ];
        for (role, text) in &copy {
            lines.push(format!("{}: {}", role, quote(text)));
        }
        let literals: Vec<String> = copy.into_iter().map(|(_, text)| text).collect();
        lines.push(allow_list_line(&literals));
        lines.push("Layout: strong headline, clear discount callout, CTA area, safe margins.".to_string());

        self.tail(&mut lines, true);
        lines
    }

    fn custom(&self) -> Vec<String> {
        let mut lines =
            self.head(format!("Create a celebratory poster in {} style.", self.style_label));
        lines.push(format!("Headline: {}", quote(&self.greeting)));
        lines.push("Do not add extra text.".to_string());

        self.tail(&mut lines, false);
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Language, Orientation, PaletteChoice};
    use crate::models::FestivalDraft;

    fn catalog() -> FestivalCatalog {
        FestivalCatalog::builtin()
    }

    fn state(occasion: Occasion) -> SelectionState {
        SelectionState::for_occasion(occasion)
    }

    fn allow_list_lines(prompt: &str) -> Vec<&str> {
        prompt.lines().filter(|l| l.starts_with("Only render this copy exactly:")).collect()
    }

    #[test]
    fn test_article() {
        assert_eq!(article("editorial serif"), "an");
        assert_eq!(article("minimal luxe"), "a");
        assert_eq!(article(""), "a");
    }

    #[test]
    fn test_allow_list_line() {
        let line = allow_list_line(&["Hi".to_string(), "There".to_string()]);
        assert_eq!(line, "Only render this copy exactly: \"Hi\", \"There\". Do not render any other text.");
    }

    #[test]
    fn test_birthday_template() {
        let mut s = state(Occasion::Birthday);
        s.name = "Aanya".to_string();
        s.age = "21".to_string();
        s.relation = "Friend".to_string();
        let prompt = compose(&s, &catalog());
        let lines: Vec<&str> = prompt.lines().collect();

        assert_eq!(lines[0], "Design a minimal luxe birthday wish poster for social and print.");
        assert_eq!(lines[1], "Minimal, upscale composition with generous negative space");
        assert!(lines.contains(&"Recipient: Aanya, turning 21, relation: Friend."));
        assert!(lines.contains(&"Headline (H1): \"Happy Birthday, Aanya!\""));
        assert_eq!(lines.last(), Some(&EXPORT_LINE));
    }

    #[test]
    fn test_birthday_without_details() {
        let prompt = compose(&state(Occasion::Birthday), &catalog());
        assert!(prompt.contains("Recipient: [name]."));
        assert!(prompt.contains("\"Happy Birthday, Friend!\""));
    }

    #[test]
    fn test_common_block_order() {
        let prompt = compose(&state(Occasion::Birthday), &catalog());
        let lines: Vec<&str> = prompt.lines().collect();
        let start = lines.iter().position(|l| l.starts_with("Orientation:")).unwrap();
        assert_eq!(lines[start], "Orientation: portrait");
        assert_eq!(lines[start + 1], "Size: 1080×1350 (IG Portrait)");
        assert_eq!(lines[start + 2], "Render intent: Hybrid Photo + Graphics");
        assert_eq!(lines[start + 3], "Lighting: Studio Softbox");
        assert_eq!(lines[start + 4], "Texture: Subtle Paper Grain");
        assert_eq!(lines[start + 5], "Composition: Centered Hero");
        assert_eq!(
            lines[start + 6],
            "Color palette guidance (do not display codes or palette chips): 3B82F6, 10B981, F59E0B, 111827"
        );
        assert_eq!(lines[start + 7], "Branding: none / optional placeholder");
    }

    #[test]
    fn test_orientation_renders_id() {
        let mut s = state(Occasion::Festival);
        s.orientation = Orientation::Landscape.into();
        assert!(compose(&s, &catalog()).lines().any(|l| l == "Orientation: landscape"));

        s.orientation = Choice::parse("panorama");
        assert!(compose(&s, &catalog()).lines().any(|l| l == "Orientation: panorama"));
    }

    #[test]
    fn test_brand_line() {
        let mut s = state(Occasion::Birthday);
        s.brand = "Acme".to_string();
        assert!(compose(&s, &catalog()).contains("Include Acme logo at top-right; maintain clear space."));

        s.include_brand_mark = false;
        let prompt = compose(&s, &catalog());
        assert!(prompt.contains("Branding: none / optional placeholder"));
        assert!(!prompt.contains("Include Acme"));
    }

    #[test]
    fn test_festival_uses_resolved_festival() {
        let mut s = state(Occasion::Festival);
        s.festival_id = "holi".to_string();
        let prompt = compose(&s, &catalog());

        assert!(prompt.starts_with("Create a minimal luxe festival wishes poster for Holi."));
        assert!(prompt.contains("Motifs: gulal splash, pichkari, color clouds."));
        assert!(prompt.contains("EC4899, F59E0B, 84CC16, 06B6D4"));
        assert!(prompt.contains("\"Happy Holi\""));
        assert!(prompt.contains("Ensure text legibility over motifs."));
    }

    #[test]
    fn test_festival_fixed_palette_overrides_festival() {
        let mut s = state(Occasion::Festival);
        s.palette = PaletteChoice::Mono.into();
        let prompt = compose(&s, &catalog());
        assert!(prompt.contains("111827, 1F2937, 374151, 9CA3AF"));
    }

    #[test]
    fn test_unknown_festival_falls_back_with_warning() {
        let mut s = state(Occasion::Festival);
        s.festival_id = "gone".to_string();
        let composition = compose_lenient(&s, &catalog());

        assert!(composition.prompt.contains("poster for Diwali."));
        assert_eq!(composition.warnings, vec![UnresolvedRef { kind: "festival", id: "gone".to_string() }]);
    }

    #[test]
    fn test_festival_without_motifs_uses_fallback_pair() {
        let bare = FestivalDraft::new("Onam").into_festival("onam".to_string());
        let catalog = FestivalCatalog::with_user(vec![bare]);
        let mut s = state(Occasion::Festival);
        s.festival_id = "onam".to_string();
        let prompt = compose(&s, &catalog);

        assert!(prompt.contains("Motifs: rangoli, diyas."));
        // Empty festival palette falls back to the default palette.
        assert!(prompt.contains("3B82F6, 10B981, F59E0B, 111827"));
    }

    #[test]
    fn test_non_festival_ignores_festival_reference() {
        let mut s = state(Occasion::Birthday);
        s.festival_id = "gone".to_string();
        let composition = compose_lenient(&s, &catalog());
        assert!(composition.warnings.is_empty());
        assert!(!composition.prompt.contains("Diwali"));
    }

    #[test]
    fn test_non_festival_auto_palette_ignores_festival() {
        let mut s = state(Occasion::Sale);
        s.festival_id = "holi".to_string();
        let prompt = compose(&s, &catalog());
        assert!(prompt.contains("3B82F6, 10B981, F59E0B, 111827"));
    }

    #[test]
    fn test_anniversary_template() {
        let mut s = state(Occasion::Anniversary);
        s.style = StylePreset::Editorial.into();
        s.name = "Aarav".to_string();
        s.partner_name = "Anaya".to_string();
        let prompt = compose(&s, &catalog());

        assert!(prompt.starts_with("Design an editorial serif anniversary wish for Aarav & Anaya."));
        assert!(prompt.contains("Greeting: Happy Anniversary Aarav & Anaya!"));
        assert!(prompt.contains(
            "Only render this copy exactly: \"Happy Anniversary\", \"Aarav & Anaya!\". Do not render any other text."
        ));
    }

    #[test]
    fn test_anniversary_without_names() {
        let prompt = compose(&state(Occasion::Anniversary), &catalog());
        assert!(prompt.contains("anniversary wish for [names]."));
        assert!(prompt.contains("\"[names]!\""));
    }

    #[test]
    fn test_anniversary_localized_heading() {
        let mut s = state(Occasion::Anniversary);
        s.language = Language::Hi.into();
        s.name = "A".to_string();
        let prompt = compose(&s, &catalog());
        assert!(prompt.contains("Headline (H1): \"सालगिरह मुबारक\""));
    }

    #[test]
    fn test_sale_template() {
        let mut s = state(Occasion::Sale);
        s.brand = "Acme".to_string();
        let prompt = compose(&s, &catalog());

        assert!(prompt.starts_with("Design a minimal luxe festive offer banner suitable for social and print."));
        assert!(prompt.contains("Brand name: \"Acme\""));
        assert!(prompt.contains(
            "Only render this copy exactly: \"Acme\", \"Limited-time Offer\", \"Discount %\", \"Call to Action\". Do not render any other text."
        ));
    }

    #[test]
    fn test_sale_without_brand_uses_placeholder() {
        let prompt = compose(&state(Occasion::Sale), &catalog());
        assert!(prompt.contains("Brand name: \"Brand\""));
    }

    #[test]
    fn test_custom_template() {
        let prompt = compose(&state(Occasion::Custom), &catalog());
        let lines: Vec<&str> = prompt.lines().collect();

        assert_eq!(lines[0], "Create a celebratory poster in minimal luxe style.");
        assert!(lines.contains(&"Headline: \"Best Wishes!\""));
        assert!(lines.contains(&"Do not add extra text."));
        assert!(allow_list_lines(&prompt).is_empty());
        assert!(lines.last().unwrap().starts_with("Negative prompt:"));
        assert!(!prompt.contains(EXPORT_LINE));
    }

    #[test]
    fn test_unknown_occasion_uses_custom_template() {
        let mut s = SelectionState::default();
        s.occasion = Choice::parse("graduation");
        let composition = compose_lenient(&s, &catalog());

        assert!(composition.prompt.starts_with("Create a celebratory poster"));
        assert_eq!(composition.warnings[0], UnresolvedRef { kind: "occasion", id: "graduation".to_string() });
    }

    #[test]
    fn test_unknown_options_echo_raw_ids() {
        let mut s = state(Occasion::Birthday);
        s.style = Choice::parse("Cyberpunk");
        s.lighting = Choice::parse("moonlight");
        s.size = Choice::parse("poster-xl");
        let composition = compose_lenient(&s, &catalog());
        let prompt = &composition.prompt;

        assert!(prompt.starts_with("Design a cyberpunk birthday wish poster"));
        assert!(prompt.contains("Lighting: moonlight"));
        assert!(prompt.contains("Size: poster-xl"));
        assert_eq!(composition.warnings.len(), 3);
    }

    #[test]
    fn test_negative_strength() {
        let mut s = state(Occasion::Birthday);
        assert!(compose(&s, &catalog()).contains("no duplicate text"));
        s.strong_negatives = false;
        let prompt = compose(&s, &catalog());
        assert!(prompt.contains("Negative prompt: no color codes"));
        assert!(!prompt.contains("no duplicate text"));
    }

    #[test]
    fn test_strict_mode() {
        assert!(compose_strict(&SelectionState::default(), &catalog()).is_ok());

        let mut s = SelectionState::default();
        s.language = Choice::parse("fr");
        s.texture = Choice::parse("velvet");
        let err = compose_strict(&s, &catalog()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unresolved references:\n  - unknown language 'fr'\n  - unknown texture 'velvet'"
        );
    }

    #[test]
    fn test_no_blank_lines() {
        for occasion in Occasion::ALL {
            let prompt = compose(&state(*occasion), &catalog());
            assert!(!prompt.ends_with('\n'));
            assert!(prompt.lines().all(|l| !l.trim().is_empty()), "{}", occasion);
        }
    }
}
