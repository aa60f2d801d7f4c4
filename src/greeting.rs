//! Localized greeting resolution.
//!
//! Every lookup that misses the requested language falls back to
//! [`DEFAULT_LANGUAGE`]; nothing here can fail.

use crate::catalog::{Choice, Language, Occasion, DEFAULT_LANGUAGE};
use crate::models::Festival;
use crate::registry::FestivalCatalog;

/// The language a selection resolves to: the known variant or the default.
pub fn resolve_language(language: &Choice<Language>) -> Language {
    match language.known() {
        Some(lang) => lang,
        None => {
            log::debug!("unknown language '{}', using '{}'", language.id(), DEFAULT_LANGUAGE);
            DEFAULT_LANGUAGE
        }
    }
}

/// Trimmed text, or `None` when nothing but whitespace was given.
pub(crate) fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Localized stand-in for a missing birthday recipient.
pub fn friend_placeholder(lang: Language) -> &'static str {
    match lang {
        Language::En => "Friend",
        Language::Hi => "मित्र",
        Language::Te => "స్నేహితుడు",
    }
}

/// "Happy Birthday, {name}!" in `lang`.
pub fn birthday_greeting(lang: Language, name: &str) -> String {
    let name = non_blank(name).unwrap_or_else(|| friend_placeholder(lang));
    match lang {
        Language::En => format!("Happy Birthday, {}!", name),
        Language::Hi => format!("जन्मदिन मुबारक, {}!", name),
        Language::Te => format!("హ్యాపీ బర్త్‌డే, {}!", name),
    }
}

/// Anniversary heading without names.
pub fn anniversary_heading(lang: Language) -> &'static str {
    match lang {
        Language::En => "Happy Anniversary",
        Language::Hi => "सालगिरह मुबारक",
        Language::Te => "వేడుకల వార్షికోత్సవ శుభాకాంక్షలు",
    }
}

/// "A & B" when both names are present, the first name alone, or empty.
pub fn couple_names(name: &str, partner_name: &str) -> String {
    match (non_blank(name), non_blank(partner_name)) {
        (Some(a), Some(b)) => format!("{} & {}", a, b),
        (Some(a), None) => a.to_string(),
        _ => String::new(),
    }
}

/// "Happy Anniversary {duo}!" in `lang`. Without names: "Happy Anniversary!".
pub fn anniversary_greeting(lang: Language, name: &str, partner_name: &str) -> String {
    let duo = couple_names(name, partner_name);
    if duo.is_empty() {
        format!("{}!", anniversary_heading(lang))
    } else {
        format!("{} {}!", anniversary_heading(lang), duo)
    }
}

/// Generic wish used for sale, custom and unknown occasions.
pub fn generic_greeting(lang: Language) -> &'static str {
    match lang {
        Language::En => "Best Wishes!",
        Language::Hi => "शुभकामनाएँ!",
        Language::Te => "శుభాకాంక్షలు!",
    }
}

/// Festival greeting for the selected language id.
///
/// Unknown language ids are tried verbatim first, since user festivals may
/// carry greetings beyond the catalog languages.
pub fn festival_greeting(festival: &Festival, language: &Choice<Language>) -> String {
    festival.greeting_for_id(language.id()).to_string()
}

/// Resolve the greeting line for a selection.
///
/// For festivals, an id missing from `catalog` resolves to the default
/// festival.
pub fn resolve_greeting(
    occasion: &Choice<Occasion>,
    festival_id: &str,
    language: &Choice<Language>,
    name: &str,
    partner_name: &str,
    catalog: &FestivalCatalog,
) -> String {
    let lang = resolve_language(language);
    match occasion.known() {
        Some(Occasion::Birthday) => birthday_greeting(lang, name),
        Some(Occasion::Anniversary) => anniversary_greeting(lang, name, partner_name),
        Some(Occasion::Festival) => {
            let resolved = catalog.resolve(festival_id);
            festival_greeting(&resolved.festival, language)
        }
        Some(Occasion::Sale) | Some(Occasion::Custom) | None => generic_greeting(lang).to_string(),
    }
}
