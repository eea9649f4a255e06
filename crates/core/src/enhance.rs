//! Retrofit an existing free-text prompt using the analyzer's findings.

use serde::{Deserialize, Serialize};

use crate::analyzer::analyze_prompt;
use crate::master_prompt::{build_master_prompt, PromptRequest};
use crate::negative_prompt::build_negative_prompt;
use crate::types::{ContentType, Priority, VisualStyle};

/// Logo clause used when the context asks for logo space.
pub const LOGO_PLACEMENT_CLAUSE: &str =
    "Leave clean negative space in a corner for logo placement";

/// Caller context for [`enhance_existing_prompt`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhanceContext {
    pub content_type: ContentType,
    pub visual_style: VisualStyle,
    pub has_character: bool,
    pub needs_logo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnhancedPrompt {
    pub original: String,
    pub enhanced: String,
    pub negative: String,
    /// Human-readable list of what the enhancement added.
    pub improvements: Vec<String>,
    /// Analyzer confidence of the enhanced prompt.
    pub confidence: f64,
}

/// Enhance an existing prompt.
///
/// The analyzer's suggested lighting and camera angle fill the gaps, the
/// prompt is run through the master builder at quality priority, and the
/// enhanced text is re-scored.
pub fn enhance_existing_prompt(original: &str, context: &EnhanceContext) -> EnhancedPrompt {
    let analysis = analyze_prompt(original);

    let request = PromptRequest {
        base_prompt: original.to_string(),
        content_type: context.content_type,
        visual_style: context.visual_style,
        camera_angle: analysis.suggested_angle.to_string(),
        lighting: analysis.suggested_lighting,
        priority: Priority::Quality,
        logo_context: context.needs_logo.then(|| LOGO_PLACEMENT_CLAUSE.to_string()),
        ..PromptRequest::default()
    };
    let enhanced = build_master_prompt(&request);

    let mut improvements = Vec::new();
    if !analysis.has_lighting {
        improvements.push(format!("Added {} lighting", analysis.suggested_lighting));
    }
    if !analysis.has_composition {
        improvements.push(format!(
            "Added {} camera angle with composition guidance",
            analysis.suggested_angle
        ));
    }
    if !analysis.has_quality {
        improvements.push("Added quality modifiers".to_string());
    }
    improvements.push(format!(
        "Applied {} style enhancements",
        context.visual_style
    ));
    if context.needs_logo {
        improvements.push("Reserved space for logo placement".to_string());
    }
    if context.has_character {
        improvements.push("Added character identity negatives".to_string());
    }

    let confidence = analyze_prompt(&enhanced).confidence;

    EnhancedPrompt {
        original: original.to_string(),
        negative: build_negative_prompt(context.content_type, context.has_character),
        enhanced,
        improvements,
        confidence,
    }
}
