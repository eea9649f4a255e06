//! Character profile input and reference-text construction.

use serde::{Deserialize, Serialize};

/// A character as supplied by the caller. Read-only to this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterProfile {
    pub name: String,
    pub appearance: String,
    pub personality: String,
    pub description: String,
    pub image_url: Option<String>,
}

impl CharacterProfile {
    /// Convenience constructor for a profile with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Whether a usable reference image is attached.
    pub fn has_image(&self) -> bool {
        self.image_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }

    /// Trimmed name, or `None` when blank.
    pub fn display_name(&self) -> Option<&str> {
        Some(self.name.trim()).filter(|n| !n.is_empty())
    }
}

/// Build the character reference text used by the master builder.
///
/// Identity fields are joined with `", "` as
/// `name, appearance, personality: …`; the free-form description follows
/// as its own sentence after `". "`. Blank fields are skipped.
pub fn build_character_ref(character: &CharacterProfile) -> String {
    let mut identity: Vec<String> = Vec::with_capacity(3);
    if let Some(name) = character.display_name() {
        identity.push(name.to_string());
    }
    let appearance = character.appearance.trim();
    if !appearance.is_empty() {
        identity.push(appearance.to_string());
    }
    let personality = character.personality.trim();
    if !personality.is_empty() {
        identity.push(format!("personality: {personality}"));
    }

    let identity = identity.join(", ");
    let description = character.description.trim();
    match (identity.is_empty(), description.is_empty()) {
        (_, true) => identity,
        (true, false) => description.to_string(),
        (false, false) => format!("{identity}. {description}"),
    }
}
