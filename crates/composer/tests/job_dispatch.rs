//! Integration tests for composer job decoding and dispatch.
//!
//! Each test feeds a job document through [`compose`] and checks the JSON
//! shape the calling layer receives.

use storyframe_composer::job::{compose, JobDefaults};
use storyframe_core::types::{ContentType, VisualStyle};

fn run(raw: &str) -> serde_json::Value {
    let output = compose(raw, &JobDefaults::default()).expect("job should compose");
    serde_json::to_value(&output).expect("output should serialize")
}

// ---------------------------------------------------------------------------
// Test: prompt jobs
// ---------------------------------------------------------------------------

#[test]
fn master_prompt_job_returns_prompt_and_negative() {
    let out = run(
        r#"{"kind":"master_prompt","request":{"base_prompt":"a lighthouse","lighting":"golden","priority":"speed"}}"#,
    );
    let prompt = out["prompt"].as_str().unwrap();
    assert!(prompt.starts_with("Professional storyboard frame depicting a lighthouse"));
    assert!(prompt.contains("golden hour lighting"));
    assert!(out["negative_prompt"].as_str().unwrap().starts_with("blurry"));
}

#[test]
fn null_fields_fall_back_to_defaults() {
    let out = run(
        r#"{"kind":"master_prompt","request":{"base_prompt":"a lighthouse","character_ref":null,"lighting":null}}"#,
    );
    let prompt = out["prompt"].as_str().unwrap();
    assert!(prompt.contains("natural daylight with realistic shadows"));
    assert!(!prompt.contains("PRIMARY SUBJECT"));
    assert!(!out["negative_prompt"].as_str().unwrap().contains("face swap"));
}

#[test]
fn negative_prompt_job_counts_terms() {
    let out = run(r#"{"kind":"negative_prompt","content_type":"character","has_character":true}"#);
    let negative = out["negative_prompt"].as_str().unwrap();
    assert_eq!(negative.split(", ").count(), 37);
}

#[test]
fn analyze_job_serializes_analysis_fields() {
    let out = run(r#"{"kind":"analyze","prompt":"A person"}"#);
    assert_eq!(out["word_count"], 2);
    assert_eq!(out["suggested_lighting"], "natural");
    assert_eq!(out["suggested_angle"], "medium shot");
    assert_eq!(out["suggestions"].as_array().unwrap().len(), 4);
}

#[test]
fn enhance_existing_job_returns_all_fields() {
    let out = run(
        r#"{"kind":"enhance_existing","prompt":"A chef plating dessert","context":{"needs_logo":true}}"#,
    );
    assert_eq!(out["original"], "A chef plating dessert");
    assert!(out["enhanced"].as_str().unwrap().contains("logo placement"));
    assert!(out["negative"].is_string());
    assert!(out["improvements"].is_array());
    assert!(out["confidence"].as_f64().unwrap() <= 0.9);
}

#[test]
fn template_job_defaults_to_news_story() {
    let out = run(r#"{"kind":"template","scenario":"podcast"}"#);
    assert!(out["structure"].as_str().unwrap().starts_with("[news subject]"));
    assert!(out["example"].is_string());
}

// ---------------------------------------------------------------------------
// Test: scene jobs
// ---------------------------------------------------------------------------

#[test]
fn scene_sequence_job_attaches_enhanced_prompts() {
    let out = run(
        r#"{
            "kind": "scene_sequence",
            "character": {"name": "Mara", "appearance": "short red hair"},
            "scenes": [
                {"index": 0, "text": "Mara reading a letter"},
                {"index": 1, "text": "That evening, she walks home"}
            ]
        }"#,
    );
    let scenes = out["scenes"].as_array().unwrap();
    assert_eq!(scenes.len(), 2);
    assert_eq!(scenes[0]["text"], "Mara reading a letter");
    let first = scenes[0]["enhanced_prompt"].as_str().unwrap();
    assert!(first.contains("PRIMARY FOCUS: Mara reading a letter"));
    let second = scenes[1]["enhanced_prompt"].as_str().unwrap();
    assert!(second.contains("clothing may vary"));
}

#[test]
fn scene_sequence_without_character_is_unchanged() {
    let out = run(r#"{"kind":"scene_sequence","scenes":[{"index":0,"text":"a pier"}]}"#);
    let scene = &out["scenes"][0];
    assert_eq!(scene["text"], "a pier");
    assert!(scene.get("enhanced_prompt").is_none());
}

#[test]
fn scene_sequence_with_null_options_uses_defaults() {
    let out = run(
        r#"{"kind":"scene_sequence","options":null,"character":{"name":"Mara","image_url":null},"scenes":[{"index":0,"text":"a pier","image_prompt":null}]}"#,
    );
    let prompt = out["scenes"][0]["enhanced_prompt"].as_str().unwrap();
    assert!(prompt.starts_with("Professional storyboard frame depicting Mara in the scene: a pier"));
    assert!(prompt.contains("photorealistic rendering"));
}

#[test]
fn scene_for_character_uses_configured_defaults() {
    let defaults = JobDefaults {
        content_type: ContentType::Storyboard,
        visual_style: VisualStyle::Cinematic,
    };
    let output = compose(
        r#"{"kind":"scene_for_character","scene":"typing on a laptop","character":{"name":"Mara"}}"#,
        &defaults,
    )
    .unwrap();
    let out = serde_json::to_value(&output).unwrap();
    let prompt = out["prompt"].as_str().unwrap();
    assert!(prompt.contains("cinematic color grading"));
    assert!(prompt.contains("over-the-shoulder"));
}
