//! Integration tests for whole-sequence prompt composition.
//!
//! Exercises the public API the storyboard workflow calls: master and
//! negative prompt building, existing-prompt enhancement, and
//! character-consistent scene sequences.

use assert_matches::assert_matches;

use storyframe_core::activity::{classify_activity, Activity};
use storyframe_core::analyzer::analyze_prompt;
use storyframe_core::character::CharacterProfile;
use storyframe_core::continuity::{classify_continuity, ContinuityReason};
use storyframe_core::enhance::{enhance_existing_prompt, EnhanceContext};
use storyframe_core::master_prompt::{build_master_prompt, PromptRequest};
use storyframe_core::negative_prompt::build_negative_prompt;
use storyframe_core::prompt_limits::{validate_negative_prompt, validate_prompt};
use storyframe_core::scene_sequence::{
    build_character_consistent_scenes, enhance_scene_for_character, SceneOptions, SceneRecord,
};
use storyframe_core::templates::get_prompt_template;
use storyframe_core::types::{ContentType, Scenario};

fn mara() -> CharacterProfile {
    CharacterProfile {
        name: "Mara".into(),
        appearance: "short red hair, freckles, green field jacket".into(),
        personality: "determined".into(),
        description: "A radio engineer on a remote island.".into(),
        image_url: Some("https://cdn.example.com/characters/mara.png".into()),
    }
}

fn storyboard() -> Vec<SceneRecord> {
    vec![
        SceneRecord::new(0, "Mara typing a distress message on an old laptop"),
        SceneRecord::new(1, "The next day, she walks along the cliffs"),
        SceneRecord::new(2, "Mara talking with a fisherman at the dock"),
    ]
}

// ---------------------------------------------------------------------------
// Sequences
// ---------------------------------------------------------------------------

#[test]
fn every_scene_gets_an_enhanced_prompt_and_keeps_its_text() {
    let scenes = storyboard();
    let out = build_character_consistent_scenes(&scenes, Some(&mara()), &SceneOptions::default());

    assert_eq!(out.len(), scenes.len());
    for (before, after) in scenes.iter().zip(&out) {
        assert_eq!(before.index, after.index);
        assert_eq!(before.text, after.text);
        let prompt = after.enhanced_prompt.as_deref().expect("enhanced prompt");
        assert!(prompt.contains("PRIMARY SUBJECT: Mara"));
        assert!(validate_prompt(prompt).is_ok());
    }
}

#[test]
fn continuity_is_decided_per_scene() {
    let out = build_character_consistent_scenes(&storyboard(), Some(&mara()), &SceneOptions::default());
    let prompts: Vec<&str> = out
        .iter()
        .map(|s| s.enhanced_prompt.as_deref().unwrap())
        .collect();

    assert!(prompts[0].contains("EXACT same outfit"));
    assert!(prompts[1].contains("clothing may vary"));
    // Scene 2 does not inherit scene 1's time transition.
    assert!(prompts[2].contains("EXACT same outfit"));
}

#[test]
fn sequence_output_is_deterministic() {
    let a = build_character_consistent_scenes(&storyboard(), Some(&mara()), &SceneOptions::default());
    let b = build_character_consistent_scenes(&storyboard(), Some(&mara()), &SceneOptions::default());
    assert_eq!(a, b);
}

#[test]
fn empty_and_characterless_sequences_pass_through() {
    assert!(build_character_consistent_scenes(&[], Some(&mara()), &SceneOptions::default()).is_empty());
    let scenes = storyboard();
    assert_eq!(
        build_character_consistent_scenes(&scenes, None, &SceneOptions::default()),
        scenes
    );
}

#[test]
fn typing_scene_uses_over_the_shoulder_framing() {
    assert_matches!(
        classify_activity("typing furiously on a laptop"),
        Some(Activity::CodingWriting)
    );
    let prompt = enhance_scene_for_character(
        "typing furiously on a laptop",
        Some(&CharacterProfile::named("Mara")),
        &SceneOptions::default(),
    );
    assert!(prompt.contains("over-the-shoulder or side profile"));
    assert!(!prompt.contains("facing camera or another person"));
}

#[test]
fn scene_naming_the_character_starts_with_primary_focus() {
    let prompt = enhance_scene_for_character("mara fixes the antenna", Some(&mara()), &SceneOptions::default());
    assert!(prompt.starts_with("Professional storyboard frame depicting PRIMARY FOCUS: mara fixes the antenna"));
}

// ---------------------------------------------------------------------------
// Builders and analyzer
// ---------------------------------------------------------------------------

#[test]
fn unknown_content_type_falls_back_to_storyboard() {
    let request: PromptRequest =
        serde_json::from_str(r#"{"base_prompt":"a harbor","content_type":"billboard"}"#).unwrap();
    assert_eq!(request.content_type, ContentType::Storyboard);
    assert!(build_master_prompt(&request).starts_with("Professional storyboard frame depicting a harbor"));
}

#[test]
fn negative_prompt_for_character_with_identity_terms() {
    let negative = build_negative_prompt(ContentType::Character, true);
    assert_eq!(negative.split(", ").count(), 37);
    assert!(negative.starts_with(&build_negative_prompt(ContentType::Character, false)));
    assert!(validate_negative_prompt(&negative).is_ok());
}

#[test]
fn two_word_prompt_analysis() {
    let analysis = analyze_prompt("A person");
    assert!((analysis.confidence - 0.6).abs() < 1e-9);
    assert_eq!(analysis.suggestions.len(), 4);
    assert_eq!(analysis.suggested_lighting.as_str(), "natural");
    assert_eq!(analysis.suggested_angle, "medium shot");
}

#[test]
fn enhance_existing_prompt_reports_negative_and_confidence() {
    let result = enhance_existing_prompt("A person", &EnhanceContext::default());
    assert!(result.enhanced.len() > result.original.len());
    assert!(!result.negative.is_empty());
    assert!(result.confidence <= 0.9);
}

#[test]
fn continuity_reasons_follow_rule_order() {
    assert_eq!(
        classify_continuity("she puts on a different outfit the next day").reason,
        ContinuityReason::ExplicitClothingChange
    );
    assert_eq!(
        classify_continuity("at dawn, then again at sunset").reason,
        ContinuityReason::DayNightSpan
    );
}

#[test]
fn unknown_scenario_defaults_to_news_story() {
    let scenario = Scenario::parse_or_default("keynote");
    assert_eq!(get_prompt_template(scenario), get_prompt_template(Scenario::NewsStory));
}
