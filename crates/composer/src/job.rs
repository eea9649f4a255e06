//! Job decoding and dispatch.
//!
//! A job is one JSON object tagged by `"kind"`. Before decoding, `null`
//! members are dropped so they read as absent, missing `content_type` /
//! `visual_style` fields are filled from the configured defaults, and
//! unknown keyword values are logged so typos do not silently change the
//! output.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use storyframe_core::analyzer::{analyze_prompt, AnalysisResult};
use storyframe_core::character::CharacterProfile;
use storyframe_core::enhance::{enhance_existing_prompt, EnhanceContext, EnhancedPrompt};
use storyframe_core::master_prompt::{build_master_prompt, PromptRequest};
use storyframe_core::negative_prompt::build_negative_prompt;
use storyframe_core::prompt_limits::{validate_negative_prompt, validate_prompt};
use storyframe_core::scene_sequence::{
    build_character_consistent_scenes, enhance_scene_for_character, SceneOptions, SceneRecord,
};
use storyframe_core::templates::{get_prompt_template, ScenarioTemplate};
use storyframe_core::types::{ContentType, Lighting, Priority, Scenario, VisualStyle};

use crate::error::ComposerError;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Values used when a job omits them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JobDefaults {
    pub content_type: ContentType,
    pub visual_style: VisualStyle,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Job {
    MasterPrompt {
        request: PromptRequest,
    },
    NegativePrompt {
        #[serde(default)]
        content_type: ContentType,
        #[serde(default)]
        has_character: bool,
    },
    Analyze {
        prompt: String,
    },
    EnhanceExisting {
        prompt: String,
        #[serde(default)]
        context: EnhanceContext,
    },
    Template {
        #[serde(default)]
        scenario: Scenario,
    },
    SceneForCharacter {
        scene: String,
        #[serde(default)]
        character: Option<CharacterProfile>,
        #[serde(default)]
        options: SceneOptions,
    },
    SceneSequence {
        scenes: Vec<SceneRecord>,
        #[serde(default)]
        character: Option<CharacterProfile>,
        #[serde(default)]
        options: SceneOptions,
    },
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum JobOutput {
    Prompts {
        prompt: String,
        negative_prompt: String,
    },
    Negative {
        negative_prompt: String,
    },
    Analysis(AnalysisResult),
    Enhanced(EnhancedPrompt),
    Template(ScenarioTemplate),
    Scene {
        prompt: String,
    },
    Scenes {
        scenes: Vec<SceneRecord>,
    },
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Decode a job, filling omitted keyword fields from `defaults`.
pub fn decode_job(raw: &str, defaults: &JobDefaults) -> Result<Job, ComposerError> {
    if raw.trim().is_empty() {
        return Err(ComposerError::EmptyInput);
    }
    let mut value: Value = serde_json::from_str(raw)?;
    strip_nulls(&mut value);
    fill_defaults(&mut value, defaults);
    Ok(serde_json::from_value(value)?)
}

/// Remove `null` object members at every depth.
fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}

fn fill_defaults(job: &mut Value, defaults: &JobDefaults) {
    let Some(obj) = job.as_object_mut() else {
        return;
    };
    let kind = obj
        .get("kind")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let nested = match kind.as_str() {
        "master_prompt" => "request",
        "enhance_existing" => "context",
        "scene_for_character" | "scene_sequence" => "options",
        "negative_prompt" => {
            fill_keyword::<ContentType>(obj, "content_type", defaults.content_type.as_str());
            return;
        }
        "template" => {
            warn_unknown::<Scenario>(obj, "scenario");
            return;
        }
        _ => return,
    };

    let entry = obj
        .entry(nested)
        .or_insert_with(|| Value::Object(Map::new()));
    if let Some(inner) = entry.as_object_mut() {
        fill_keyword::<ContentType>(inner, "content_type", defaults.content_type.as_str());
        fill_keyword::<VisualStyle>(inner, "visual_style", defaults.visual_style.as_str());
        warn_unknown::<Lighting>(inner, "lighting");
        warn_unknown::<Priority>(inner, "priority");
    }
}

/// Insert `default` when `key` is absent, otherwise warn on unknown values.
fn fill_keyword<T>(obj: &mut Map<String, Value>, key: &str, default: &str)
where
    T: std::str::FromStr<Err = storyframe_core::error::CoreError>,
{
    if obj.contains_key(key) {
        warn_unknown::<T>(obj, key);
    } else {
        obj.insert(key.to_string(), Value::String(default.to_string()));
    }
}

fn warn_unknown<T>(obj: &Map<String, Value>, key: &str)
where
    T: std::str::FromStr<Err = storyframe_core::error::CoreError>,
{
    if let Some(Value::String(raw)) = obj.get(key) {
        if let Err(e) = raw.parse::<T>() {
            tracing::warn!(field = key, error = %e, "Unknown keyword, using default");
        }
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run a decoded job through the core.
pub fn run_job(job: Job) -> JobOutput {
    match job {
        Job::MasterPrompt { request } => {
            let prompt = build_master_prompt(&request);
            let has_character = !request.character_ref.trim().is_empty();
            let negative_prompt = build_negative_prompt(request.content_type, has_character);
            check_limits(&prompt, &negative_prompt);
            JobOutput::Prompts {
                prompt,
                negative_prompt,
            }
        }
        Job::NegativePrompt {
            content_type,
            has_character,
        } => JobOutput::Negative {
            negative_prompt: build_negative_prompt(content_type, has_character),
        },
        Job::Analyze { prompt } => JobOutput::Analysis(analyze_prompt(&prompt)),
        Job::EnhanceExisting { prompt, context } => {
            let result = enhance_existing_prompt(&prompt, &context);
            check_limits(&result.enhanced, &result.negative);
            JobOutput::Enhanced(result)
        }
        Job::Template { scenario } => JobOutput::Template(get_prompt_template(scenario)),
        Job::SceneForCharacter {
            scene,
            character,
            options,
        } => {
            let prompt = enhance_scene_for_character(&scene, character.as_ref(), &options);
            check_limits(&prompt, "");
            JobOutput::Scene { prompt }
        }
        Job::SceneSequence {
            scenes,
            character,
            options,
        } => {
            let scenes = build_character_consistent_scenes(&scenes, character.as_ref(), &options);
            for scene in &scenes {
                if let Some(prompt) = &scene.enhanced_prompt {
                    check_limits(prompt, "");
                }
            }
            JobOutput::Scenes { scenes }
        }
    }
}

/// Decode and run a job in one step.
pub fn compose(raw: &str, defaults: &JobDefaults) -> Result<JobOutput, ComposerError> {
    let job = decode_job(raw, defaults)?;
    Ok(run_job(job))
}

fn check_limits(prompt: &str, negative: &str) {
    if let Err(e) = validate_prompt(prompt) {
        tracing::warn!(error = %e, "Composed prompt exceeds service limits");
    }
    if let Err(e) = validate_negative_prompt(negative) {
        tracing::warn!(error = %e, "Composed negative prompt exceeds service limits");
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
