//! Master prompt builder: composes the final positive prompt from the
//! template, style, character, continuity and camera signals.
//!
//! The output is an ordered list of clauses joined with `". "`:
//!
//! 1. template prefix + trimmed base prompt
//! 2. character clauses (strong identity lock, or a light "featured" note)
//! 3. camera / composition
//! 4. lighting preset
//! 5. style technical, then style mood
//! 6. logo context (verbatim, when provided)
//! 7. first three template quality modifiers (quality priority only)
//! 8. consistency rules (strong identity lock only)
//! 9. first two quality enhancers
//!
//! Step 8 repeats the identity constraints of step 2. The repetition is
//! part of the output contract and must not be deduplicated.

use serde::{Deserialize, Serialize};

use crate::style::style_enhancement;
use crate::techniques::{lighting_preset, COMPOSITION_RULES, QUALITY_ENHANCERS};
use crate::templates::template_for;
use crate::types::{ContentType, Lighting, Priority, VisualStyle};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Character text length kept in the strong "PRIMARY SUBJECT" clause.
pub const PRIMARY_SUBJECT_MAX_CHARS: usize = 100;

/// Character text length kept in the light "Featured Character" clause.
pub const FEATURED_CHARACTER_MAX_CHARS: usize = 80;

/// Camera angle used when a request does not name one.
pub const DEFAULT_CAMERA_ANGLE: &str = "medium shot";

pub const CLAUSE_SEPARATOR: &str = ". ";

const IDENTITY_WITH_IMAGE: &str = "EXACT same facial features, face shape, hair style, hair color, skin tone and body type as the reference image";
const IDENTITY_WITHOUT_IMAGE: &str = "Consistent facial features, face shape, hair style, hair color, skin tone and body type across every scene";
const CLOTHING_LOCKED: &str =
    "wearing the EXACT same outfit and clothing as established, no wardrobe changes";
const CLOTHING_MAY_VARY: &str = "clothing may vary if day/setting/time changes, but face/physique/hair/characteristics MUST remain identical";
const PLACEMENT_CLAUSE: &str = "Character placement: CENTER or PROMINENT POSITION in the frame, fully visible and in focus, mandatory visibility";
const CHARACTER_CENTRIC_CAMERA: &str =
    "Camera: character-centric framing that keeps the primary subject clearly visible and recognizable";
const CONSISTENCY_RULES: &str = "CONSISTENCY RULES: identical face and facial features, identical hair style and hair color, identical body type and proportions, personality expressed through consistent posture and expression";
const CONSISTENCY_CLOTHING_LOCKED: &str = "identical outfit and clothing in every scene";
const CONSISTENCY_CLOTHING_MAY_VARY: &str =
    "clothing may change only with a day/setting/time change while face, physique and hair stay identical";

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Everything the builder needs for one prompt. Owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptRequest {
    pub base_prompt: String,
    pub content_type: ContentType,
    pub visual_style: VisualStyle,
    pub color_theme: String,
    /// Pre-built character reference text; empty skips all character clauses.
    pub character_ref: String,
    pub mood: String,
    pub camera_angle: String,
    pub lighting: Lighting,
    pub priority: Priority,
    pub has_character_image: bool,
    pub force_character_inclusion: bool,
    pub maintain_clothing: bool,
    /// Appended verbatim when present and non-blank.
    pub logo_context: Option<String>,
}

impl Default for PromptRequest {
    fn default() -> Self {
        Self {
            base_prompt: String::new(),
            content_type: ContentType::default(),
            visual_style: VisualStyle::default(),
            color_theme: String::new(),
            character_ref: String::new(),
            mood: String::new(),
            camera_angle: DEFAULT_CAMERA_ANGLE.to_string(),
            lighting: Lighting::default(),
            priority: Priority::default(),
            has_character_image: false,
            force_character_inclusion: false,
            maintain_clothing: true,
            logo_context: None,
        }
    }
}

impl PromptRequest {
    /// Whether the strong identity-lock branch applies.
    pub fn locks_character(&self) -> bool {
        self.has_character_ref()
            && self.force_character_inclusion
            && self.content_type == ContentType::Storyboard
    }

    fn has_character_ref(&self) -> bool {
        !self.character_ref.trim().is_empty()
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Compose the positive prompt for a request.
pub fn build_master_prompt(request: &PromptRequest) -> String {
    let template = template_for(request.content_type);
    let style = style_enhancement(request.visual_style);
    let locked = request.locks_character();
    let character_ref = request.character_ref.trim();

    let mut clauses: Vec<String> = Vec::with_capacity(12);

    // 1. Template prefix + base prompt.
    clauses.push(join_words(template.prefix, request.base_prompt.trim()));

    // 2. Character.
    if locked {
        clauses.push(format!(
            "PRIMARY SUBJECT: {} must be the main focus of the image",
            truncate_chars(character_ref, PRIMARY_SUBJECT_MAX_CHARS)
        ));
        let identity = if request.has_character_image {
            IDENTITY_WITH_IMAGE
        } else {
            IDENTITY_WITHOUT_IMAGE
        };
        let clothing = if request.maintain_clothing {
            CLOTHING_LOCKED
        } else {
            CLOTHING_MAY_VARY
        };
        clauses.push(format!("{identity}, {clothing}"));
        clauses.push(PLACEMENT_CLAUSE.to_string());
    } else if request.has_character_ref() && !request.force_character_inclusion {
        clauses.push(format!(
            "Featured Character: {}",
            truncate_chars(character_ref, FEATURED_CHARACTER_MAX_CHARS)
        ));
    }

    // 3. Camera / composition.
    if locked {
        clauses.push(CHARACTER_CENTRIC_CAMERA.to_string());
    } else {
        let angle = request.camera_angle.trim();
        let rule = COMPOSITION_RULES[0];
        if angle.is_empty() {
            clauses.push(format!("Camera: {rule}"));
        } else {
            clauses.push(format!("Camera: {angle}, {rule}"));
        }
    }

    // 4. Lighting.
    clauses.push(format!("Lighting: {}", lighting_preset(request.lighting)));

    // 5. Style.
    clauses.push(format!("Style: {}", style.technical));
    clauses.push(format!("Atmosphere: {}", style.mood));

    // 6. Logo context.
    if let Some(logo) = request
        .logo_context
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
    {
        clauses.push(logo.to_string());
    }

    // 7. Template quality modifiers.
    if request.priority == Priority::Quality {
        clauses.push(take_joined(template.quality_modifiers, 3));
    }

    // 8. Consistency rules.
    if locked {
        let clothing = if request.maintain_clothing {
            CONSISTENCY_CLOTHING_LOCKED
        } else {
            CONSISTENCY_CLOTHING_MAY_VARY
        };
        clauses.push(format!("{CONSISTENCY_RULES}, {clothing}"));
    }

    // 9. Quality enhancers.
    clauses.push(take_joined(QUALITY_ENHANCERS, 2));

    tracing::debug!(
        content_type = %request.content_type,
        visual_style = %request.visual_style,
        character_locked = locked,
        clauses = clauses.len(),
        "Composed master prompt",
    );

    clauses.join(CLAUSE_SEPARATOR)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// First `max_chars` characters of `text` (never splits a code point).
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

fn join_words(head: &str, tail: &str) -> String {
    if tail.is_empty() {
        head.to_string()
    } else {
        format!("{head} {tail}")
    }
}

fn take_joined(items: &[&str], n: usize) -> String {
    items.iter().take(n).copied().collect::<Vec<_>>().join(", ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
