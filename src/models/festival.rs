//! Festival records and the draft used to create them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::{CatalogOption, Language, DEFAULT_LANGUAGE};

/// A named cultural event with its palette, motifs and localized greetings.
///
/// Greetings are keyed by language id. A `BTreeMap` keeps serialization and
/// fallback order stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Festival {
    pub id: String,
    pub label: String,
    /// Color values in significant order. Opaque strings, usually `#RRGGBB`.
    #[serde(default)]
    pub palette: Vec<String>,
    #[serde(default)]
    pub motifs: Vec<String>,
    #[serde(default)]
    pub greetings: BTreeMap<String, String>,
}

impl Festival {
    /// Greeting for `lang`, falling back to the default language.
    ///
    /// Records loaded from storage may lack the default language too, so the
    /// chain continues with the first non-empty greeting and finally the label.
    pub fn greeting(&self, lang: Language) -> &str {
        self.greeting_for_id(lang.id())
    }

    /// Same as [`Festival::greeting`] for a raw language id.
    pub fn greeting_for_id(&self, lang_id: &str) -> &str {
        let non_empty = |id: &str| {
            self.greetings
                .get(id)
                .map(String::as_str)
                .filter(|g| !g.trim().is_empty())
        };

        non_empty(lang_id)
            .or_else(|| {
                if lang_id != DEFAULT_LANGUAGE.id() {
                    log::debug!(
                        "festival '{}' has no '{}' greeting, using '{}'",
                        self.id,
                        lang_id,
                        DEFAULT_LANGUAGE.id()
                    );
                }
                non_empty(DEFAULT_LANGUAGE.id())
            })
            .or_else(|| self.greetings.values().map(String::as_str).find(|g| !g.trim().is_empty()))
            .unwrap_or(&self.label)
    }
}

/// Generic greeting used when a draft leaves a language blank.
pub fn default_festival_greeting(lang: Language) -> &'static str {
    match lang {
        Language::En => "Happy Festival",
        Language::Hi => "शुभकामनाएँ",
        Language::Te => "శుభాకాంక్షలు",
    }
}

/// User input for creating or updating a festival.
///
/// `id` is optional; when absent it is derived from the label, see
/// [`crate::registry::slugify`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FestivalDraft {
    #[serde(default)]
    pub id: Option<String>,
    pub label: String,
    #[serde(default)]
    pub palette: Vec<String>,
    #[serde(default)]
    pub motifs: Vec<String>,
    #[serde(default)]
    pub greetings: BTreeMap<String, String>,
}

impl FestivalDraft {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), ..Default::default() }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_palette<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palette = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_motifs<I, S>(mut self, motifs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.motifs = motifs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_greeting(mut self, lang: Language, text: impl Into<String>) -> Self {
        self.greetings.insert(lang.id().to_string(), text.into());
        self
    }

    /// Build the festival record under `id`.
    ///
    /// Blank greetings for catalog languages get the generic defaults.
    pub fn into_festival(self, id: String) -> Festival {
        let mut greetings: BTreeMap<String, String> = self
            .greetings
            .into_iter()
            .map(|(lang, text)| (lang, text.trim().to_string()))
            .filter(|(_, text)| !text.is_empty())
            .collect();

        for lang in Language::ALL {
            greetings
                .entry(lang.id().to_string())
                .or_insert_with(|| default_festival_greeting(*lang).to_string());
        }

        Festival {
            id,
            label: self.label.trim().to_string(),
            palette: self.palette,
            motifs: self.motifs,
            greetings,
        }
    }
}

/// Split comma-separated user input, trimming items and dropping empties.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn festival_with(greetings: &[(&str, &str)]) -> Festival {
        Festival {
            id: "onam".to_string(),
            label: "Onam".to_string(),
            palette: vec!["#FFD700".to_string()],
            motifs: vec!["pookalam".to_string()],
            greetings: greetings.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
        }
    }

    #[test]
    fn test_greeting_requested_language() {
        let fest = festival_with(&[("en", "Happy Onam"), ("hi", "ओणम की शुभकामनाएँ")]);
        assert_eq!(fest.greeting(Language::Hi), "ओणम की शुभकामनाएँ");
    }

    #[test]
    fn test_greeting_falls_back_to_default_language() {
        let fest = festival_with(&[("en", "Happy Onam")]);
        assert_eq!(fest.greeting(Language::Te), "Happy Onam");
        assert_eq!(fest.greeting_for_id("ml"), "Happy Onam");
    }

    #[test]
    fn test_greeting_blank_entry_is_skipped() {
        let fest = festival_with(&[("en", "Happy Onam"), ("te", "   ")]);
        assert_eq!(fest.greeting(Language::Te), "Happy Onam");
    }

    #[test]
    fn test_greeting_without_default_language() {
        let fest = festival_with(&[("te", "ఓనం శుభాకాంక్షలు")]);
        assert_eq!(fest.greeting(Language::Hi), "ఓనం శుభాకాంక్షలు");

        let bare = festival_with(&[]);
        assert_eq!(bare.greeting(Language::En), "Onam");
    }

    #[test]
    fn test_draft_fills_missing_greetings() {
        let fest = FestivalDraft::new(" Pongal ")
            .with_greeting(Language::En, "Happy Pongal")
            .with_greeting(Language::Hi, "")
            .into_festival("pongal".to_string());

        assert_eq!(fest.label, "Pongal");
        assert_eq!(fest.greetings["en"], "Happy Pongal");
        assert_eq!(fest.greetings["hi"], "शुभकामनाएँ");
        assert_eq!(fest.greetings["te"], "శుభాకాంక్షలు");
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("kites, sugarcane ,,rangoli"), vec!["kites", "sugarcane", "rangoli"]);
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn test_festival_serde_defaults() {
        let fest: Festival = serde_json::from_str(r#"{"id":"x","label":"X"}"#).unwrap();
        assert!(fest.palette.is_empty());
        assert!(fest.motifs.is_empty());
        assert!(fest.greetings.is_empty());
    }
}
