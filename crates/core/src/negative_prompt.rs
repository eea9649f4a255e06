//! Negative prompt builder.
//!
//! Term order is base → content-type specific → character identity. The
//! list is static and not deduplicated.

use crate::techniques::NEGATIVE_TERMS;
use crate::types::ContentType;

/// Number of base terms taken from [`NEGATIVE_TERMS`].
pub const BASE_NEGATIVE_COUNT: usize = 6;

/// Separator between negative terms.
pub const TERM_SEPARATOR: &str = ", ";

/// Terms added when a character must be preserved across scenes.
pub const CHARACTER_IDENTITY_NEGATIVES: &[&str] = &[
    "different face",
    "different hair",
    "different hairstyle",
    "different hair color",
    "face swap",
    "changed facial features",
    "inconsistent character",
    "different person",
    "wrong character",
    "character missing",
    "character hidden",
    "character out of frame",
    "character cut off",
    "obscured face",
    "face hidden",
    "back of head only",
    "duplicate character",
    "unnatural pose",
    "stiff pose",
    "awkward posture",
    "distorted face",
    "asymmetrical eyes",
    "different eye color",
    "different skin tone",
    "different body type",
    "altered proportions",
    "aged differently",
    "gender swap",
    "character too small",
];

/// Type-specific suppression terms.
pub fn type_specific_negatives(content_type: ContentType) -> &'static [&'static str] {
    match content_type {
        ContentType::Storyboard => &["inconsistent style", "poor composition"],
        ContentType::Character => &["inconsistent features", "multiple faces"],
        ContentType::Scene => &["cluttered composition", "poor perspective"],
    }
}

/// Ordered negative terms for a content type.
pub fn negative_terms(content_type: ContentType, has_character: bool) -> Vec<&'static str> {
    let mut terms: Vec<&'static str> = NEGATIVE_TERMS
        .iter()
        .take(BASE_NEGATIVE_COUNT)
        .copied()
        .collect();
    terms.extend(type_specific_negatives(content_type).iter().take(2));
    if has_character {
        terms.extend_from_slice(CHARACTER_IDENTITY_NEGATIVES);
    }
    terms
}

/// Comma-joined negative prompt.
pub fn build_negative_prompt(content_type: ContentType, has_character: bool) -> String {
    negative_terms(content_type, has_character).join(TERM_SEPARATOR)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
