//! Negative-constraint text for the downstream image generator.

/// Exclusions applied to every prompt.
pub const BASE_CONSTRAINTS: &[&str] = &[
    "no color codes, no hex codes, no '#' symbols",
    "no palette chips or swatches",
    "no watermarks, no logos (unless requested), no QR codes",
    "no UI icons, no screenshots, no frames",
    "no extra captions, no random text",
    "no distorted typography",
    "no low-res, no heavy noise, no compression artifacts",
];

/// Stricter tier appended when strong constraints are requested.
pub const STRONG_CONSTRAINTS: &[&str] = &[
    "no busy backgrounds",
    "no excessive glow or bloom",
    "no off-brand clipart",
    "no duplicate text",
];

/// Semicolon-joined exclusion clauses, with the strict tier when `strong`.
pub fn negative_constraints(strong: bool) -> String {
    let mut clauses: Vec<&str> = BASE_CONSTRAINTS.to_vec();
    if strong {
        clauses.extend_from_slice(STRONG_CONSTRAINTS);
    }
    clauses.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_tier() {
        let text = negative_constraints(false);
        assert!(text.starts_with("no color codes"));
        assert!(text.contains("no watermarks"));
        assert!(text.contains("no distorted typography"));
        assert!(!text.contains("no busy backgrounds"));
        assert_eq!(text.split("; ").count(), BASE_CONSTRAINTS.len());
    }

    #[test]
    fn test_strong_tier_appends() {
        let mild = negative_constraints(false);
        let strong = negative_constraints(true);
        assert!(strong.starts_with(&mild));
        assert!(strong.ends_with("no duplicate text"));
        assert_eq!(strong.split("; ").count(), BASE_CONSTRAINTS.len() + STRONG_CONSTRAINTS.len());
    }
}
