//! Activity classifier: maps scene text to an activity category so the
//! builder can pick a natural, non-frontal camera composition.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// Activity categories in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    CodingWriting,
    Reading,
    EatingDrinking,
    Talking,
    WalkingRunning,
    Thinking,
}

impl Activity {
    /// All categories, highest priority first.
    pub const PRIORITY: &'static [Activity] = &[
        Activity::CodingWriting,
        Activity::Reading,
        Activity::EatingDrinking,
        Activity::Talking,
        Activity::WalkingRunning,
        Activity::Thinking,
    ];

    /// Natural camera composition for this activity.
    pub fn composition(self) -> &'static str {
        match self {
            Activity::CodingWriting => "over-the-shoulder or side profile, not facing camera directly",
            Activity::Reading => "side angle or three-quarter view, eyes on the reading material",
            Activity::EatingDrinking => "three-quarter view at table level, natural dining posture",
            Activity::Talking => "facing camera or another person",
            Activity::WalkingRunning => "tracking side view or three-quarter angle showing movement",
            Activity::Thinking => "contemplative three-quarter profile, gaze directed away from camera",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Activity::CodingWriting => &*CODING_WRITING_RE,
            Activity::Reading => &*READING_RE,
            Activity::EatingDrinking => &*EATING_DRINKING_RE,
            Activity::Talking => &*TALKING_RE,
            Activity::WalkingRunning => &*WALKING_RUNNING_RE,
            Activity::Thinking => &*THINKING_RE,
        }
    }
}

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

static CODING_WRITING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(typ(e|es|ed|ing)|cod(e|es|ed|ing)|programm(ing|er|ers)|laptop|computer|keyboard|monitor|writ(e|es|ing)|wrote|scribbl\w*|taking notes)\b",
    )
    .expect("valid regex")
});

static READING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(read|reads|reading|book|books|novel|newspaper|magazine|document|documents|letter)\b")
        .expect("valid regex")
});

static EATING_DRINKING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(eat|eats|eating|ate|drink|drinks|drinking|sip|sips|sipping|meal|breakfast|lunch|dinner|coffee|tea)\b",
    )
    .expect("valid regex")
});

static TALKING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(talk|talks|talking|speak|speaks|speaking|conversation|discuss\w*|chat|chats|chatting|says|said|tells|asks|explains|interview\w*)\b",
    )
    .expect("valid regex")
});

static WALKING_RUNNING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(walk|walks|walking|run|runs|running|jog\w*|stroll\w*|hik(e|es|ing)|sprint\w*)\b")
        .expect("valid regex")
});

static THINKING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(think|thinks|thinking|ponder\w*|contemplat\w*|reflect\w*|daydream\w*|wonder(s|ing)?)\b")
        .expect("valid regex")
});

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Every category whose pattern matches, highest priority first.
///
/// Matching is case-insensitive; the text is lower-cased here.
pub fn detect_activities(scene_text: &str) -> Vec<Activity> {
    let lowered = scene_text.to_lowercase();
    Activity::PRIORITY
        .iter()
        .copied()
        .filter(|a| a.pattern().is_match(&lowered))
        .collect()
}

/// The highest-priority matching category, if any.
pub fn classify_activity(scene_text: &str) -> Option<Activity> {
    let activity = detect_activities(scene_text).into_iter().next();
    tracing::trace!(?activity, "Classified scene activity");
    activity
}

/// Composition phrase for the scene, or `None` to keep the caller's angle.
pub fn composition_hint(scene_text: &str) -> Option<&'static str> {
    classify_activity(scene_text).map(Activity::composition)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
