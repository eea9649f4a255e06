//! Technique library: static catalogs of negative terms, quality
//! enhancers, composition rules, and named lighting presets.

use crate::types::Lighting;

// ---------------------------------------------------------------------------
// Negative terms
// ---------------------------------------------------------------------------

/// Base negative terms. The negative builder uses the first six.
pub const NEGATIVE_TERMS: &[&str] = &[
    "blurry",
    "low quality",
    "distorted",
    "deformed",
    "watermark",
    "text artifacts",
    "oversaturated",
    "bad anatomy",
    "extra limbs",
    "cropped",
];

// ---------------------------------------------------------------------------
// Quality enhancers
// ---------------------------------------------------------------------------

/// Generic quality enhancers. The master builder closes with the first two.
pub const QUALITY_ENHANCERS: &[&str] = &[
    "highly detailed",
    "sharp focus",
    "professional quality",
    "8k resolution",
    "masterful composition",
];

// ---------------------------------------------------------------------------
// Composition rules
// ---------------------------------------------------------------------------

/// Composition rules, most general first.
pub const COMPOSITION_RULES: &[&str] = &[
    "rule of thirds composition",
    "leading lines",
    "balanced framing",
    "layered depth of field",
];

// ---------------------------------------------------------------------------
// Lighting presets
// ---------------------------------------------------------------------------

/// Descriptive phrase for a named lighting preset.
pub fn lighting_preset(lighting: Lighting) -> &'static str {
    match lighting {
        Lighting::Dramatic => "dramatic lighting with strong contrast and deep shadows",
        Lighting::Soft => "soft diffused lighting with gentle shadows",
        Lighting::Natural => "natural daylight with realistic shadows",
        Lighting::Cinematic => "cinematic lighting with moody atmospheric haze",
        Lighting::Golden => "golden hour lighting with warm tones",
    }
}
