//! Template registry: per-content-type prompt templates, plus the
//! scenario authoring guides returned by [`get_prompt_template`].

use serde::Serialize;

use crate::types::{ContentType, Scenario};

// ---------------------------------------------------------------------------
// Content templates
// ---------------------------------------------------------------------------

/// Static template for one content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Template {
    /// Phrase that opens the prompt, followed by the base prompt.
    pub prefix: &'static str,
    /// Ordered quality modifiers; the first three are used under `Priority::Quality`.
    pub quality_modifiers: &'static [&'static str],
    /// Semantic structure the composed prompt follows.
    pub structure_hint: &'static str,
}

const STORYBOARD_TEMPLATE: Template = Template {
    prefix: "Professional storyboard frame depicting",
    quality_modifiers: &[
        "clear visual storytelling",
        "consistent art style",
        "cinematic framing",
        "narrative clarity",
    ],
    structure_hint: "[scene action] + [character focus] + [camera angle] + [lighting] + [style]",
};

const CHARACTER_TEMPLATE: Template = Template {
    prefix: "Detailed character portrait of",
    quality_modifiers: &[
        "consistent character design",
        "expressive facial features",
        "clear silhouette",
        "detailed costume",
    ],
    structure_hint: "[character identity] + [pose] + [expression] + [lighting] + [style]",
};

const SCENE_TEMPLATE: Template = Template {
    prefix: "Immersive environment scene showing",
    quality_modifiers: &[
        "rich environmental detail",
        "atmospheric depth",
        "cohesive color palette",
        "spatial clarity",
    ],
    structure_hint: "[setting] + [time of day] + [atmosphere] + [lighting] + [style]",
};

/// Look up the template for a content type.
pub fn template_for(content_type: ContentType) -> &'static Template {
    match content_type {
        ContentType::Storyboard => &STORYBOARD_TEMPLATE,
        ContentType::Character => &CHARACTER_TEMPLATE,
        ContentType::Scene => &SCENE_TEMPLATE,
    }
}

// ---------------------------------------------------------------------------
// Scenario templates
// ---------------------------------------------------------------------------

/// Authoring guide for a scenario: how to structure a prompt and an example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioTemplate {
    pub structure: &'static str,
    pub example: &'static str,
}

/// Look up the authoring guide for a scenario.
///
/// Unknown scenario strings resolve to [`Scenario::NewsStory`] at parse
/// time, so this lookup itself is total.
pub fn get_prompt_template(scenario: Scenario) -> ScenarioTemplate {
    match scenario {
        Scenario::NewsStory => ScenarioTemplate {
            structure: "[news subject] + [location context] + [key action] + [journalistic framing] + [natural lighting]",
            example: "A city council member addressing reporters outside the town hall, documentary style, eye-level medium shot, natural daylight, photorealistic",
        },
        Scenario::ProductShowcase => ScenarioTemplate {
            structure: "[product] + [hero angle] + [clean background] + [studio lighting] + [brand colors]",
            example: "A matte black wireless headphone on a marble pedestal, three-quarter hero angle, seamless white background, soft studio lighting, commercial photography",
        },
        Scenario::CharacterStory => ScenarioTemplate {
            structure: "[character identity] + [action] + [setting] + [emotion] + [camera angle] + [lighting]",
            example: "Mara, a young engineer with short red hair, sketching plans at a cluttered workbench, focused expression, over-the-shoulder shot, warm lamp light",
        },
        Scenario::Educational => ScenarioTemplate {
            structure: "[concept] + [visual metaphor] + [clear labels area] + [simple background] + [bright lighting]",
            example: "A cutaway illustration of a plant cell with clearly separated organelles, flat pastel background, even bright lighting, clean infographic style",
        },
        Scenario::SocialMedia => ScenarioTemplate {
            structure: "[eye-catching subject] + [bold color theme] + [centered composition] + [vibrant lighting] + [trend style]",
            example: "A smiling barista holding a latte with heart foam art, bold teal and orange palette, centered square composition, vibrant natural light, lifestyle photography",
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
