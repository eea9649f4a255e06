//! Continuity classifier: decides whether a character's clothing may
//! change in a scene, or must stay identical to the rest of the sequence.
//!
//! Clothing is locked unless the scene text carries corroborating
//! evidence. Rules are evaluated in order; the first hit wins:
//!
//! 1. an explicit clothing-change phrase;
//! 2. an explicit time-transition phrase;
//! 3. a day keyword and a night keyword together (day→night span);
//! 4. a setting-change keyword together with any day/night/time signal.
//!
//! A setting change on its own ("at a formal event") is not enough.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Phrase tables
// ---------------------------------------------------------------------------

pub const CLOTHING_CHANGE_PHRASES: &[&str] = &[
    "change clothes",
    "changes clothes",
    "changed clothes",
    "changing clothes",
    "different outfit",
    "new outfit",
    "new clothes",
    "wearing different",
    "changed outfit",
    "changes outfit",
    "switched clothes",
    "change of clothes",
    "gets dressed",
];

pub const TIME_TRANSITION_PHRASES: &[&str] = &[
    "next day",
    "following day",
    "the next morning",
    "next morning",
    "that evening",
    "later that night",
    "days later",
    "weeks later",
    "a week later",
    "the following week",
];

pub const SETTING_CHANGE_PHRASES: &[&str] = &[
    "indoor",
    "indoors",
    "outdoor",
    "outdoors",
    "different location",
    "new location",
    "at home",
    "at the office",
    "at office",
    "at work",
    "formal event",
    "at a party",
    "at the gym",
    "at the beach",
    "wedding",
];

static DAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(day|daytime|morning|afternoon|dawn|sunrise|daylight)\b").expect("valid regex")
});

static NIGHT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(night|evening|dusk|sunset|midnight|nighttime)\b").expect("valid regex")
});

static CLOTHING_CHANGE_RE: LazyLock<Regex> = LazyLock::new(|| phrase_regex(CLOTHING_CHANGE_PHRASES));

static TIME_TRANSITION_RE: LazyLock<Regex> = LazyLock::new(|| phrase_regex(TIME_TRANSITION_PHRASES));

static SETTING_CHANGE_RE: LazyLock<Regex> = LazyLock::new(|| phrase_regex(SETTING_CHANGE_PHRASES));

/// Time signals beyond plain day/night words.
static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(later|tomorrow|yesterday|weekend|hours|earlier|today)\b").expect("valid regex")
});

// ---------------------------------------------------------------------------
// Decision
// ---------------------------------------------------------------------------

/// Which rule allowed a clothing change, or `None` when clothing is locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContinuityReason {
    ExplicitClothingChange,
    TimeTransition,
    DayNightSpan,
    SettingChange,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContinuityDecision {
    pub allow_clothing_change: bool,
    pub reason: ContinuityReason,
}

impl ContinuityDecision {
    fn allow(reason: ContinuityReason) -> Self {
        Self {
            allow_clothing_change: true,
            reason,
        }
    }

    fn locked() -> Self {
        Self {
            allow_clothing_change: false,
            reason: ContinuityReason::None,
        }
    }

    /// Inverse of `allow_clothing_change`, in the builder's terms.
    pub fn maintain_clothing(self) -> bool {
        !self.allow_clothing_change
    }
}

/// Classify a scene's clothing continuity.
pub fn classify_continuity(scene_text: &str) -> ContinuityDecision {
    let text = scene_text.to_lowercase();

    let decision = if CLOTHING_CHANGE_RE.is_match(&text) {
        ContinuityDecision::allow(ContinuityReason::ExplicitClothingChange)
    } else if TIME_TRANSITION_RE.is_match(&text) {
        ContinuityDecision::allow(ContinuityReason::TimeTransition)
    } else {
        let has_day = DAY_RE.is_match(&text);
        let has_night = NIGHT_RE.is_match(&text);
        if has_day && has_night {
            ContinuityDecision::allow(ContinuityReason::DayNightSpan)
        } else if SETTING_CHANGE_RE.is_match(&text)
            && (has_day || has_night || TIME_RE.is_match(&text))
        {
            ContinuityDecision::allow(ContinuityReason::SettingChange)
        } else {
            ContinuityDecision::locked()
        }
    };

    tracing::debug!(
        allow_clothing_change = decision.allow_clothing_change,
        reason = ?decision.reason,
        "Resolved clothing continuity",
    );
    decision
}

/// Resolve the `maintain_clothing` flag for a scene.
///
/// The scene text alone decides; the caller's flag is deliberately
/// ignored so a sequence never loses character identity by accident.
pub fn resolve_maintain_clothing(scene_text: &str, _caller_flag: bool) -> bool {
    classify_continuity(scene_text).maintain_clothing()
}

/// Word-bounded alternation over a phrase table, so "at work" does not
/// fire inside "at workbench".
fn phrase_regex(phrases: &[&str]) -> Regex {
    let alternation = phrases
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{alternation})\b")).expect("valid regex")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- rule 1 --

    #[test]
    fn explicit_outfit_change_allows_change() {
        let d = classify_continuity("She arrives in a different outfit");
        assert!(d.allow_clothing_change);
        assert_eq!(d.reason, ContinuityReason::ExplicitClothingChange);
    }

    #[test]
    fn explicit_phrase_outranks_time_transition() {
        let d = classify_continuity("The next day he changed clothes");
        assert_eq!(d.reason, ContinuityReason::ExplicitClothingChange);
    }

    // -- rule 2 --

    #[test]
    fn next_day_allows_change_regardless_of_caller_flag() {
        assert!(!resolve_maintain_clothing("The next day, Mara returns", true));
        assert!(!resolve_maintain_clothing("The next day, Mara returns", false));
    }

    #[test]
    fn that_evening_is_a_time_transition() {
        assert_eq!(
            classify_continuity("That evening they meet again").reason,
            ContinuityReason::TimeTransition
        );
    }

    // -- rule 3 --

    #[test]
    fn day_and_night_keywords_span_time() {
        let d = classify_continuity("From morning until midnight she works");
        assert_eq!(d.reason, ContinuityReason::DayNightSpan);
    }

    #[test]
    fn day_keyword_alone_keeps_clothing() {
        assert!(classify_continuity("A bright morning in the park").maintain_clothing());
    }

    #[test]
    fn day_keyword_uses_word_boundaries() {
        // "today" is a time word, not a day word; "someday" is neither.
        let d = classify_continuity("Someday at midnight");
        assert!(d.maintain_clothing());
    }

    // -- rule 4 --

    #[test]
    fn setting_change_with_time_signal_allows_change() {
        let d = classify_continuity("Later, at the office");
        assert_eq!(d.reason, ContinuityReason::SettingChange);
    }

    #[test]
    fn setting_change_with_night_keyword_allows_change() {
        let d = classify_continuity("Outdoors under the night sky");
        assert_eq!(d.reason, ContinuityReason::SettingChange);
    }

    #[test]
    fn setting_change_without_time_signal_keeps_clothing() {
        let d = classify_continuity("Mara at a formal event");
        assert!(d.maintain_clothing());
        assert_eq!(d.reason, ContinuityReason::None);
    }

    #[test]
    fn setting_phrase_inside_longer_word_keeps_clothing() {
        let d = classify_continuity("Mara at workbench in the morning");
        assert!(d.maintain_clothing());
        assert_eq!(d.reason, ContinuityReason::None);
    }

    #[test]
    fn indoor_prefix_of_other_word_is_not_a_setting() {
        assert!(classify_continuity("An indoorsy type, awake at dawn").maintain_clothing());
    }

    #[test]
    fn whole_setting_phrase_still_matches() {
        let d = classify_continuity("At work in the morning");
        assert_eq!(d.reason, ContinuityReason::SettingChange);
    }

    // -- default --

    #[test]
    fn neutral_scene_locks_clothing_even_if_caller_allowed_change() {
        assert!(resolve_maintain_clothing("Mara waters the plants", false));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(!resolve_maintain_clothing("THE NEXT MORNING", true));
    }
}
