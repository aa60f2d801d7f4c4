//! Built-in festival definitions.
//!
//! Ships the festivals every installation knows about. They are immutable;
//! user-defined festivals live in the [`crate::registry::FestivalRegistry`].

use crate::models::Festival;
use std::collections::BTreeMap;

/// Festival used whenever a festival reference cannot be resolved.
pub const DEFAULT_FESTIVAL_ID: &str = "diwali";

/// Motifs used when a resolved festival carries none.
pub const FALLBACK_MOTIFS: &[&str] = &["rangoli", "diyas"];

/// List of all built-in festival ids, in display order.
const BUILTIN_IDS: &[&str] = &["diwali", "holi", "sankranthi", "ganesh", "navratri", "rakhi"];

/// Returns all built-in festival ids.
pub fn list_builtins() -> Vec<&'static str> {
    BUILTIN_IDS.to_vec()
}

/// Returns `true` if `id` names a built-in festival.
pub fn is_builtin(id: &str) -> bool {
    BUILTIN_IDS.contains(&id)
}

/// Returns a built-in festival by id, or None if not found.
pub fn get_builtin(id: &str) -> Option<Festival> {
    match id {
        "diwali" => Some(diwali()),
        "holi" => Some(holi()),
        "sankranthi" => Some(sankranthi()),
        "ganesh" => Some(ganesh()),
        "navratri" => Some(navratri()),
        "rakhi" => Some(rakhi()),
        _ => None,
    }
}

/// All built-in festivals, in display order.
pub fn builtins() -> Vec<Festival> {
    BUILTIN_IDS.iter().filter_map(|id| get_builtin(id)).collect()
}

/// The festival substituted for unresolvable references.
pub fn default_festival() -> Festival {
    diwali()
}

fn festival(
    id: &str,
    label: &str,
    palette: [&str; 4],
    motifs: &[&str],
    [en, hi, te]: [&str; 3],
) -> Festival {
    Festival {
        id: id.to_string(),
        label: label.to_string(),
        palette: palette.iter().map(|c| c.to_string()).collect(),
        motifs: motifs.iter().map(|m| m.to_string()).collect(),
        greetings: BTreeMap::from([
            ("en".to_string(), en.to_string()),
            ("hi".to_string(), hi.to_string()),
            ("te".to_string(), te.to_string()),
        ]),
    }
}

fn diwali() -> Festival {
    festival(
        "diwali",
        "Diwali",
        ["#F59E0B", "#FDE68A", "#B45309", "#1F2937"],
        &["diyas", "rangoli", "fireworks", "lotus"],
        ["Happy Diwali", "शुभ दीपावली", "శుభ దీపావళి"],
    )
}

fn holi() -> Festival {
    festival(
        "holi",
        "Holi",
        ["#EC4899", "#F59E0B", "#84CC16", "#06B6D4"],
        &["gulal splash", "pichkari", "color clouds"],
        ["Happy Holi", "होली की शुभकामनाएँ", "హోలీ శుభాకాంక్షలు"],
    )
}

fn sankranthi() -> Festival {
    festival(
        "sankranthi",
        "Sankranthi / Makar Sankranti",
        ["#FF8C00", "#FFD166", "#06B6D4", "#065F46"],
        &["kites", "sugarcane", "rangoli"],
        ["Happy Sankranthi", "मकर संक्रांति की शुभकामनाएँ", "హ్యాపీ సంక్రాంతి"],
    )
}

fn ganesh() -> Festival {
    festival(
        "ganesh",
        "Ganesh Chaturthi",
        ["#F59E0B", "#EF4444", "#10B981", "#1F2937"],
        &["Ganesha icon", "modak", "marigold"],
        ["Happy Ganesh Chaturthi", "गणेश चतुर्थी की शुभकामनाएँ", "వినాయక చవితి శుభాకాంక్షలు"],
    )
}

fn navratri() -> Festival {
    festival(
        "navratri",
        "Navratri",
        ["#7C3AED", "#E11D48", "#F59E0B", "#111827"],
        &["dandiya", "trishul", "rangoli"],
        ["Happy Navratri", "नवरात्रि की शुभकामनाएँ", "నవరాత్రి శుభాకాంక్షలు"],
    )
}

fn rakhi() -> Festival {
    festival(
        "rakhi",
        "Raksha Bandhan",
        ["#E11D48", "#F59E0B", "#2563EB", "#111827"],
        &["rakhi", "sweets", "thread pattern"],
        ["Happy Raksha Bandhan", "रक्षाबंधन की शुभकामनाएँ", "రాఖీ పండుగ శుభాకాంక్షలు"],
    )
}
