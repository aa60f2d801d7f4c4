//! Data models for WishCraft (festivals, selection state)

mod festival;
mod selection;

// Re-export all public types
pub use festival::{default_festival_greeting, split_list, Festival, FestivalDraft};
pub use selection::SelectionState;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_festival_roundtrip() {
        let festival = FestivalDraft::new("Onam")
            .with_palette(["#FFD700", "#2E7D32"])
            .with_motifs(["pookalam", "boat race"])
            .into_festival("onam".to_string());
        let json = serde_json::to_string(&festival).unwrap();
        let parsed: Festival = serde_json::from_str(&json).unwrap();
        assert_eq!(festival, parsed);
    }

    #[test]
    fn test_selection_roundtrip() {
        let state = SelectionState {
            name: "Aanya".to_string(),
            age: "21".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&state).unwrap();
        let parsed: SelectionState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, parsed);
    }
}
