//! Scene sequencer: per-scene character-consistent prompt enhancement.
//!
//! Each scene is enhanced independently. No state is threaded between
//! scenes, so a scene's continuity decision depends on its own text only.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::activity::composition_hint;
use crate::character::{build_character_ref, CharacterProfile};
use crate::continuity::resolve_maintain_clothing;
use crate::master_prompt::{build_master_prompt, PromptRequest, DEFAULT_CAMERA_ANGLE};
use crate::types::{ContentType, Lighting, Priority, VisualStyle};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One scene of a storyboard sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneRecord {
    /// Zero-based position in the sequence.
    #[serde(default)]
    pub index: usize,
    /// Original scene text. Never modified.
    #[serde(default)]
    pub text: String,
    /// Optional visual description; preferred over `text` when non-blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
    /// Derived output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhanced_prompt: Option<String>,
}

impl SceneRecord {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
            ..Self::default()
        }
    }

    /// The text that gets enhanced: `image_prompt` if non-blank, else `text`.
    pub fn source_text(&self) -> &str {
        self.image_prompt
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or(&self.text)
    }
}

/// Request-level options shared by every scene of a sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneOptions {
    pub content_type: ContentType,
    pub visual_style: VisualStyle,
    pub color_theme: String,
    pub mood: String,
    /// Used when the scene's activity does not dictate a composition.
    pub camera_angle: String,
    pub lighting: Lighting,
    pub priority: Priority,
    /// Advisory only; each scene's continuity classification decides.
    pub maintain_clothing: bool,
    pub logo_context: Option<String>,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            content_type: ContentType::default(),
            visual_style: VisualStyle::default(),
            color_theme: String::new(),
            mood: String::new(),
            camera_angle: DEFAULT_CAMERA_ANGLE.to_string(),
            lighting: Lighting::default(),
            priority: Priority::default(),
            maintain_clothing: true,
            logo_context: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Scene kind
// ---------------------------------------------------------------------------

/// Narrative kind of a scene; decides how the character's name is injected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneKind {
    Action,
    Dialog,
    Emotional,
    Neutral,
}

static ACTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(fight\w*|run|runs|running|jump\w*|chas(e|es|ing)|attack\w*|explod\w*|battle\w*|rush\w*|escap\w*|climb\w*|throw\w*|race|races|racing)\b",
    )
    .expect("valid regex")
});

static DIALOG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\b(says|said|talks|talking|asks|asked|tells|told|replies|replied|speaks|speaking|conversation|discuss\w*|whisper\w*|shouts)\b|""#,
    )
    .expect("valid regex")
});

static EMOTIONAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(cr(y|ies|ying)|tears|smil\w*|laugh\w*|sad|happy|angry|afraid|scared|fear\w*|worried|excited|joy\w*|grie\w*|heartbroken|nervous)\b",
    )
    .expect("valid regex")
});

/// Classify a scene. Priority: action > dialog > emotional > neutral.
pub fn classify_scene_kind(scene_text: &str) -> SceneKind {
    let lowered = scene_text.to_lowercase();
    if ACTION_RE.is_match(&lowered) {
        SceneKind::Action
    } else if DIALOG_RE.is_match(&lowered) {
        SceneKind::Dialog
    } else if EMOTIONAL_RE.is_match(&lowered) {
        SceneKind::Emotional
    } else {
        SceneKind::Neutral
    }
}

// ---------------------------------------------------------------------------
// Enhancement
// ---------------------------------------------------------------------------

/// Prefix used when the scene already names the character.
pub const PRIMARY_FOCUS_PREFIX: &str = "PRIMARY FOCUS:";

/// Enhance one scene for a character.
///
/// Without a character the scene is composed as a plain prompt (activity
/// composition still applies). With one, the character's name is placed
/// at the front of the scene, visibility and camera clauses are added,
/// clothing continuity is resolved from the scene text, and the result is
/// run through the master builder with character inclusion forced.
pub fn enhance_scene_for_character(
    scene_prompt: &str,
    character: Option<&CharacterProfile>,
    options: &SceneOptions,
) -> String {
    let scene = scene_prompt.trim();
    let hint = composition_hint(scene);
    let camera_angle = hint.unwrap_or(options.camera_angle.as_str()).to_string();

    let Some(character) = character else {
        return build_master_prompt(&base_request(scene.to_string(), camera_angle, options));
    };

    let name = character.display_name();
    let mut parts: Vec<String> = Vec::with_capacity(3);
    parts.push(inject_name(scene, name));
    parts.push(format!(
        "{} must be clearly visible and recognizable in the frame",
        name.unwrap_or("The character")
    ));
    if let Some(composition) = hint {
        parts.push(format!("Camera angle: {composition}"));
    }

    let maintain_clothing = resolve_maintain_clothing(scene, options.maintain_clothing);

    let request = PromptRequest {
        character_ref: build_character_ref(character),
        has_character_image: character.has_image(),
        force_character_inclusion: true,
        maintain_clothing,
        ..base_request(parts.join(". "), camera_angle, options)
    };
    build_master_prompt(&request)
}

/// Enhance every scene of a sequence for one character.
///
/// Returns the scenes unchanged when there is no character or no scene.
/// Otherwise each returned record carries `enhanced_prompt`; `text` and
/// `image_prompt` are copied as-is.
pub fn build_character_consistent_scenes(
    scenes: &[SceneRecord],
    character: Option<&CharacterProfile>,
    options: &SceneOptions,
) -> Vec<SceneRecord> {
    let Some(character) = character else {
        return scenes.to_vec();
    };
    if scenes.is_empty() {
        return Vec::new();
    }

    tracing::debug!(
        scene_count = scenes.len(),
        character = %character.name,
        "Building character-consistent scenes",
    );

    scenes
        .iter()
        .map(|scene| SceneRecord {
            enhanced_prompt: Some(enhance_scene_for_character(
                scene.source_text(),
                Some(character),
                options,
            )),
            ..scene.clone()
        })
        .collect()
}

fn inject_name(scene: &str, name: Option<&str>) -> String {
    let Some(name) = name else {
        return format!("{PRIMARY_FOCUS_PREFIX} {scene}");
    };
    if scene.to_lowercase().contains(&name.to_lowercase()) {
        return format!("{PRIMARY_FOCUS_PREFIX} {scene}");
    }
    match classify_scene_kind(scene) {
        SceneKind::Action => format!("{name} in action: {scene}"),
        SceneKind::Dialog => format!("{name} speaking: {scene}"),
        SceneKind::Emotional => format!("{name} showing emotion: {scene}"),
        SceneKind::Neutral => format!("{name} in the scene: {scene}"),
    }
}

fn base_request(base_prompt: String, camera_angle: String, options: &SceneOptions) -> PromptRequest {
    PromptRequest {
        base_prompt,
        content_type: options.content_type,
        visual_style: options.visual_style,
        color_theme: options.color_theme.clone(),
        mood: options.mood.clone(),
        camera_angle,
        lighting: options.lighting,
        priority: options.priority,
        logo_context: options.logo_context.clone(),
        ..PromptRequest::default()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
