//! Prompt analyzer: a read-only heuristic pass over free-text prompts.
//!
//! Estimates which descriptive attributes a prompt is missing and scores
//! its completeness. The score is a bounded heuristic, not a probability.

use serde::Serialize;

use crate::prompt_limits::estimate_token_count;
use crate::types::Lighting;

// ---------------------------------------------------------------------------
// Keyword sets
// ---------------------------------------------------------------------------

pub const LIGHTING_KEYWORDS: &[&str] = &[
    "lighting", "light", "lit", "shadow", "shadows", "sunlight", "dramatic", "soft", "golden",
    "backlit", "glow", "glowing", "illuminated", "neon",
];

pub const COMPOSITION_KEYWORDS: &[&str] = &[
    "composition", "framing", "framed", "angle", "close-up", "closeup", "wide", "shot",
    "perspective", "centered", "thirds", "foreground", "background", "profile",
];

pub const QUALITY_KEYWORDS: &[&str] = &[
    "detailed", "high-quality", "quality", "sharp", "professional", "4k", "8k", "hd",
    "masterpiece", "crisp", "high-resolution",
];

pub const ACTION_KEYWORDS: &[&str] = &[
    "running", "walking", "jumping", "fighting", "talking", "typing", "reading", "eating",
    "sitting", "standing", "dancing", "holding", "looking",
];

const DRAMATIC_CUES: &[&str] = &["dramatic", "intense", "action"];
const CLOSE_UP_CUES: &[&str] = &["close", "face", "portrait"];

// ---------------------------------------------------------------------------
// Scoring constants
// ---------------------------------------------------------------------------

const BASE_CONFIDENCE: f64 = 0.5;
const MAX_CONFIDENCE: f64 = 0.9;
const ATTRIBUTE_BONUS: f64 = 0.1;
const TOKENS_PER_CONFIDENCE_POINT: f64 = 20.0;
const MIN_DESCRIPTIVE_TOKENS: usize = 10;

pub const ANGLE_CLOSE_UP: &str = "close-up";
pub const ANGLE_MEDIUM_SHOT: &str = "medium shot";

pub const SUGGEST_LIGHTING: &str =
    "Add lighting description (e.g., dramatic, soft, natural, golden hour)";
pub const SUGGEST_COMPOSITION: &str =
    "Specify camera angle or composition (e.g., close-up, wide shot, rule of thirds)";
pub const SUGGEST_QUALITY: &str =
    "Include quality modifiers (e.g., highly detailed, sharp focus, professional quality)";
pub const SUGGEST_DETAIL: &str = "Expand the description with more specific visual details";

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Whitespace-separated token count.
    pub word_count: usize,
    pub has_lighting: bool,
    pub has_composition: bool,
    pub has_quality: bool,
    pub has_action: bool,
    /// One message per missing attribute, in fixed order.
    pub suggestions: Vec<&'static str>,
    /// Completeness heuristic in `[0.5, 0.9]`.
    pub confidence: f64,
    pub suggested_lighting: Lighting,
    pub suggested_angle: &'static str,
    /// Rough CLIP token estimate for the raw prompt.
    pub estimated_tokens: usize,
}

/// Analyze a prompt.
///
/// Tokens are the lower-cased whitespace-separated words; punctuation
/// stays attached, so `"light,"` does not count as `"light"`.
///
/// Confidence is `min(0.9, 0.5 + tokens/20 + 0.1 per present
/// lighting/composition/quality attribute)`.
pub fn analyze_prompt(prompt: &str) -> AnalysisResult {
    let lowered = prompt.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();
    let word_count = tokens.len();

    let has_lighting = contains_any(&tokens, LIGHTING_KEYWORDS);
    let has_composition = contains_any(&tokens, COMPOSITION_KEYWORDS);
    let has_quality = contains_any(&tokens, QUALITY_KEYWORDS);
    let has_action = contains_any(&tokens, ACTION_KEYWORDS);

    let mut suggestions = Vec::new();
    if !has_lighting {
        suggestions.push(SUGGEST_LIGHTING);
    }
    if !has_composition {
        suggestions.push(SUGGEST_COMPOSITION);
    }
    if !has_quality {
        suggestions.push(SUGGEST_QUALITY);
    }
    if word_count < MIN_DESCRIPTIVE_TOKENS {
        suggestions.push(SUGGEST_DETAIL);
    }

    let bonus = |present: bool| if present { ATTRIBUTE_BONUS } else { 0.0 };
    let confidence = (BASE_CONFIDENCE
        + word_count as f64 / TOKENS_PER_CONFIDENCE_POINT
        + bonus(has_lighting)
        + bonus(has_composition)
        + bonus(has_quality))
    .min(MAX_CONFIDENCE);

    let suggested_lighting = if contains_any(&tokens, DRAMATIC_CUES) {
        Lighting::Dramatic
    } else {
        Lighting::Natural
    };
    let suggested_angle = if contains_any(&tokens, CLOSE_UP_CUES) {
        ANGLE_CLOSE_UP
    } else {
        ANGLE_MEDIUM_SHOT
    };

    AnalysisResult {
        word_count,
        has_lighting,
        has_composition,
        has_quality,
        has_action,
        suggestions,
        confidence,
        suggested_lighting,
        suggested_angle,
        estimated_tokens: estimate_token_count(prompt),
    }
}

fn contains_any(tokens: &[&str], keywords: &[&str]) -> bool {
    tokens.iter().any(|t| keywords.contains(t))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
