//! Closed keyword enums shared by every composition stage.
//!
//! Each enum has two parse paths:
//!
//! - **lenient** (`parse_or_default`, serde deserialization): unknown
//!   values fall back to the documented default and never fail.
//! - **strict** (`FromStr`): unknown values produce
//!   [`CoreError::UnknownVariant`] so callers can surface typos.
//!
//! Matching ignores case, surrounding whitespace, and `_`/`-`/space
//! separators, so `"newsStory"`, `"news_story"` and `"News Story"` are
//! the same key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Reduce a keyword to its comparison form.
fn normalize_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $name:ident, kind = $kind:literal, default = $default:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $key:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case", from = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Canonical snake_case key.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $key ),+
                }
            }

            /// Parse a keyword, falling back to the default for unknown input.
            pub fn parse_or_default(raw: &str) -> Self {
                Self::lookup(raw).unwrap_or_default()
            }

            fn lookup(raw: &str) -> Option<Self> {
                let key = normalize_key(raw);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| normalize_key(v.as_str()) == key)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                Self::lookup(raw).ok_or_else(|| CoreError::UnknownVariant {
                    kind: $kind,
                    value: raw.to_string(),
                    expected: Self::ALL
                        .iter()
                        .map(|v| v.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                })
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self::parse_or_default(&raw)
            }
        }
    };
}

keyword_enum! {
    /// What kind of image the prompt is for. Selects the template.
    ContentType, kind = "content type", default = Storyboard {
        Storyboard => "storyboard",
        Character => "character",
        Scene => "scene",
    }
}

keyword_enum! {
    /// Visual style. Selects the technical/mood phrase pair.
    VisualStyle, kind = "visual style", default = Realistic {
        Realistic => "realistic",
        Cinematic => "cinematic",
        Artistic => "artistic",
        Professional => "professional",
    }
}

keyword_enum! {
    /// Named lighting preset.
    Lighting, kind = "lighting", default = Natural {
        Dramatic => "dramatic",
        Soft => "soft",
        Natural => "natural",
        Cinematic => "cinematic",
        Golden => "golden",
    }
}

keyword_enum! {
    /// Generation priority. Only `Quality` adds template modifiers.
    Priority, kind = "priority", default = Quality {
        Quality => "quality",
        Speed => "speed",
        Creativity => "creativity",
    }
}

keyword_enum! {
    /// Authoring scenario for [`crate::templates::get_prompt_template`].
    Scenario, kind = "scenario", default = NewsStory {
        NewsStory => "news_story",
        ProductShowcase => "product_showcase",
        CharacterStory => "character_story",
        Educational => "educational",
        SocialMedia => "social_media",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    // -- parse_or_default --

    #[test]
    fn known_content_types_parse() {
        assert_eq!(ContentType::parse_or_default("storyboard"), ContentType::Storyboard);
        assert_eq!(ContentType::parse_or_default("character"), ContentType::Character);
        assert_eq!(ContentType::parse_or_default("scene"), ContentType::Scene);
    }

    #[test]
    fn unknown_content_type_falls_back_to_storyboard() {
        assert_eq!(ContentType::parse_or_default("poster"), ContentType::Storyboard);
        assert_eq!(ContentType::parse_or_default(""), ContentType::Storyboard);
    }

    #[test]
    fn unknown_style_falls_back_to_realistic() {
        assert_eq!(VisualStyle::parse_or_default("vaporwave"), VisualStyle::Realistic);
    }

    #[test]
    fn unknown_lighting_falls_back_to_natural() {
        assert_eq!(Lighting::parse_or_default("neon"), Lighting::Natural);
    }

    #[test]
    fn matching_ignores_case_and_separators() {
        assert_eq!(Scenario::parse_or_default("newsStory"), Scenario::NewsStory);
        assert_eq!(Scenario::parse_or_default("Product-Showcase"), Scenario::ProductShowcase);
        assert_eq!(Scenario::parse_or_default("  social media "), Scenario::SocialMedia);
        assert_eq!(VisualStyle::parse_or_default("CINEMATIC"), VisualStyle::Cinematic);
    }

    // -- FromStr --

    #[test]
    fn strict_parse_accepts_known_value() {
        assert_eq!("golden".parse::<Lighting>().unwrap(), Lighting::Golden);
    }

    #[test]
    fn strict_parse_rejects_unknown_value() {
        let err = "fast".parse::<Priority>().unwrap_err();
        assert_matches!(err, CoreError::UnknownVariant { kind: "priority", .. });
        assert!(err.to_string().contains("quality, speed, creativity"));
    }

    // -- serde --

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&Scenario::ProductShowcase).unwrap();
        assert_eq!(json, "\"product_showcase\"");
    }

    #[test]
    fn deserialization_is_lenient() {
        let style: VisualStyle = serde_json::from_str("\"watercolor\"").unwrap();
        assert_eq!(style, VisualStyle::Realistic);
        let scenario: Scenario = serde_json::from_str("\"characterStory\"").unwrap();
        assert_eq!(scenario, Scenario::CharacterStory);
    }
}
