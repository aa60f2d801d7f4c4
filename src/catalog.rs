//! Static option catalog.
//!
//! Every selectable option (occasion, language, palette choice, layout and
//! style settings) is a closed enum with a stable string identifier and a
//! display label. Selections coming from outside the crate are held as
//! [`Choice`], which keeps unknown identifiers around instead of failing so
//! the composer can echo them verbatim.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Common interface for every catalog enum.
pub trait CatalogOption: Copy + Eq + fmt::Debug + 'static {
    /// Name of the option set, used in warnings and CLI listings (e.g. "style")
    const KIND: &'static str;

    /// All variants in display order
    const ALL: &'static [Self];

    /// Stable identifier token
    fn id(self) -> &'static str;

    /// Human-readable label
    fn label(self) -> &'static str;

    /// Look up a variant by identifier. Case-sensitive.
    fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|o| o.id() == id)
    }

    /// All identifiers in display order
    fn ids() -> Vec<&'static str> {
        Self::ALL.iter().map(|o| o.id()).collect()
    }
}

/// Declares a catalog enum together with its `{id, label}` table.
macro_rules! catalog_option {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal, default = $default:ident {
            $( $variant:ident => ($id:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $variant ),+
        }

        impl CatalogOption for $name {
            const KIND: &'static str = $kind;
            const ALL: &'static [Self] = &[ $( $name::$variant ),+ ];

            fn id(self) -> &'static str {
                match self {
                    $( $name::$variant => $id ),+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.id())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_id(s).ok_or_else(|| {
                    format!(
                        "Unknown {} '{}'. Available: {}",
                        $kind,
                        s,
                        Self::ids().join(", ")
                    )
                })
            }
        }
    };
}

catalog_option! {
    /// Top-level category that selects the composition template.
    Occasion, "occasion", default = Birthday {
        Birthday => ("birthday", "🎂 Birthday Wish Poster"),
        Festival => ("festival", "🪔 Festival Wish Poster (India)"),
        Anniversary => ("anniversary", "💞 Anniversary Wish"),
        Sale => ("sale", "🏷️ Festive Offer Banner"),
        Custom => ("custom", "✨ Custom Canvas"),
    }
}

catalog_option! {
    /// Language of the rendered greeting copy.
    Language, "language", default = En {
        En => ("en", "English"),
        Hi => ("hi", "Hindi (Devanagari)"),
        Te => ("te", "Telugu"),
    }
}

catalog_option! {
    /// Palette selection; `auto` follows the selected festival.
    PaletteChoice, "palette", default = Auto {
        Auto => ("auto", "Auto from occasion"),
        Gold => ("gold", "Royal Gold"),
        Vibrant => ("vibrant", "Vibrant"),
        Pastel => ("pastel", "Soft Pastel"),
        Mono => ("mono", "Monochrome"),
    }
}

catalog_option! {
    Orientation, "orientation", default = Portrait {
        Portrait => ("portrait", "Portrait"),
        Square => ("square", "Square"),
        Landscape => ("landscape", "Landscape"),
    }
}

catalog_option! {
    /// Output size presets for social and print.
    SizePreset, "size", default = IgPortrait {
        IgPost => ("ig-post", "1080×1080 (IG Post)"),
        IgPortrait => ("ig-portrait", "1080×1350 (IG Portrait)"),
        Story => ("story", "1080×1920 (Story)"),
        A4 => ("a4", "A4 2480×3508 (Print)"),
        Hd => ("hd", "1920×1080 (HD)"),
    }
}

catalog_option! {
    /// Expert style presets. Each carries descriptive phrases, see [`StylePreset::parts`].
    StylePreset, "style", default = MinimalLuxe {
        MinimalLuxe => ("minimal-luxe", "Minimal Luxe"),
        Editorial => ("editorial", "Editorial Serif"),
        BoldMemphis => ("bold-memphis", "Bold Memphis"),
        GradientGlow => ("gradient-glow", "Gradient Glow"),
        PaperCollage => ("paper-collage", "Paper-Cut Collage"),
        Clay3d => ("clay-3d", "3D Clay Look"),
        Neon => ("neon", "Neon Glow"),
        VintageFilm => ("vintage-film", "Vintage Film"),
        Watercolor => ("watercolor", "Watercolor"),
        FoilPressed => ("foil-pressed", "Metallic Foil"),
        Glass => ("glass", "Glass & Blur"),
        FlatGeo => ("flat-geo", "Flat Geometric"),
    }
}

impl StylePreset {
    /// Descriptive phrases emitted right after the opening sentence.
    pub fn parts(self) -> &'static [&'static str] {
        match self {
            StylePreset::MinimalLuxe => &[
                "Minimal, upscale composition with generous negative space",
                "Soft micro-shadows, subtle paper grain",
                "Elegant display serif for H1; clean geometric sans for body",
            ],
            StylePreset::Editorial => &[
                "Magazine-style editorial layout",
                "High contrast serif display + tidy sans subheads",
                "Grids, alignment, and baseline rhythm",
            ],
            StylePreset::BoldMemphis => &[
                "Playful geometric shapes, Memphis accents",
                "Thick strokes, rounded forms, bold color blocking",
            ],
            StylePreset::GradientGlow => &[
                "Smooth multi-stop gradients, soft bloom glow",
                "Glassmorphism highlights with tasteful blur",
            ],
            StylePreset::PaperCollage => &[
                "Layered paper textures with cast shadows",
                "Torn edges, organic overlaps, hand-cut vibe",
            ],
            StylePreset::Clay3d => &[
                "Clay material look, soft GI lighting, rounded edges",
                "Realistic occlusion without noise",
            ],
            StylePreset::Neon => &[
                "Dark background, neon accents, rim light",
                "Vibrant glow with restrained reflections",
            ],
            StylePreset::VintageFilm => &[
                "Retro palette, film grain, gentle fade",
                "Authentic textures, slight vignette",
            ],
            StylePreset::Watercolor => &[
                "Hand-painted watercolor wash, soft edges",
                "Textured paper, controlled bleeding",
            ],
            StylePreset::FoilPressed => &[
                "Gold/rose-gold foil accents with micro-glints",
                "Subtle emboss/deboss, luxury stationary feel",
            ],
            StylePreset::Glass => &[
                "Frosted glass panes, background blur",
                "Sharp foreground text; high contrast",
            ],
            StylePreset::FlatGeo => &[
                "Flat shapes, crisp edges, high contrast",
                "Precise alignment, grid-based rhythm",
            ],
        }
    }
}

catalog_option! {
    RenderIntent, "intent", default = Hybrid {
        Photo => ("photo", "Photographic / Real Objects"),
        Illustration => ("illustration", "Illustration / Painted"),
        Vector => ("vector", "Vector / Flat Shapes"),
        Hybrid => ("hybrid", "Hybrid Photo + Graphics"),
    }
}

catalog_option! {
    Lighting, "lighting", default = Studio {
        SoftDay => ("soft-day", "Soft Daylight"),
        Studio => ("studio", "Studio Softbox"),
        Golden => ("golden", "Golden Hour Glow"),
        Dramatic => ("dramatic", "Dramatic Rim Light"),
        None => ("none", "Not Applicable"),
    }
}

catalog_option! {
    Texture, "texture", default = Paper {
        None => ("none", "None"),
        Paper => ("paper", "Subtle Paper Grain"),
        Linen => ("linen", "Linen Texture"),
        Grain => ("grain", "Fine Film Grain"),
        Bokeh => ("bokeh", "Bokeh Background (soft)"),
        Foil => ("foil", "Metallic Foil Accents"),
        Glass => ("glass", "Glassmorphism Blur"),
        Water => ("water", "Watercolor Wash"),
    }
}

catalog_option! {
    CompositionMode, "composition", default = Center {
        Center => ("center", "Centered Hero"),
        Thirds => ("thirds", "Rule of Thirds"),
        Diagonal => ("diagonal", "Diagonal Flow"),
        Grid => ("grid", "Strict Grid"),
    }
}

/// Default language used whenever a lookup misses the requested one.
pub const DEFAULT_LANGUAGE: Language = Language::En;

/// A selected option: either a known catalog variant or an unrecognized id.
///
/// Unknown identifiers are never an error. Lookups that need a variant fall
/// back to a documented default and labels echo the raw identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Choice<T: CatalogOption> {
    Known(T),
    Unknown(String),
}

impl<T: CatalogOption> Choice<T> {
    /// Parse an identifier, keeping it verbatim if it is not in the catalog.
    pub fn parse(id: &str) -> Self {
        match T::from_id(id) {
            Some(option) => Choice::Known(option),
            None => Choice::Unknown(id.to_string()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Choice::Known(option) => option.id(),
            Choice::Unknown(raw) => raw,
        }
    }

    /// Catalog label, or the raw identifier when unknown.
    pub fn label(&self) -> &str {
        match self {
            Choice::Known(option) => option.label(),
            Choice::Unknown(raw) => raw,
        }
    }

    pub fn known(&self) -> Option<T> {
        match self {
            Choice::Known(option) => Some(*option),
            Choice::Unknown(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Choice::Known(_))
    }

    /// The known variant, or `fallback` when the identifier is unknown.
    pub fn or(&self, fallback: T) -> T {
        self.known().unwrap_or(fallback)
    }
}

impl<T: CatalogOption + Default> Default for Choice<T> {
    fn default() -> Self {
        Choice::Known(T::default())
    }
}

impl<T: CatalogOption> From<T> for Choice<T> {
    fn from(option: T) -> Self {
        Choice::Known(option)
    }
}

impl<T: CatalogOption> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl<T: CatalogOption> Serialize for Choice<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de, T: CatalogOption> Deserialize<'de> for Choice<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Choice::parse(&raw))
    }
}

/// `(id, label)` rows for one option set, in display order.
pub fn entries<T: CatalogOption>() -> Vec<(&'static str, &'static str)> {
    T::ALL.iter().map(|o| (o.id(), o.label())).collect()
}

/// Names of all option sets, as accepted by [`list_kind`].
pub const KINDS: &[&str] = &[
    Occasion::KIND,
    Language::KIND,
    PaletteChoice::KIND,
    Orientation::KIND,
    SizePreset::KIND,
    StylePreset::KIND,
    RenderIntent::KIND,
    Lighting::KIND,
    Texture::KIND,
    CompositionMode::KIND,
];

/// `(id, label)` rows for an option set named by its kind.
pub fn list_kind(kind: &str) -> Option<Vec<(&'static str, &'static str)>> {
    match kind {
        "occasion" => Some(entries::<Occasion>()),
        "language" => Some(entries::<Language>()),
        "palette" => Some(entries::<PaletteChoice>()),
        "orientation" => Some(entries::<Orientation>()),
        "size" => Some(entries::<SizePreset>()),
        "style" => Some(entries::<StylePreset>()),
        "intent" => Some(entries::<RenderIntent>()),
        "lighting" => Some(entries::<Lighting>()),
        "texture" => Some(entries::<Texture>()),
        "composition" => Some(entries::<CompositionMode>()),
        _ => None,
    }
}
