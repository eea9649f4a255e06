//! Prompt length limits and token estimation.
//!
//! Composition never fails. A composed prompt can still be longer than the
//! image service accepts, so callers check it here before sending.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Longest positive prompt the image service accepts, in characters.
pub const MAX_PROMPT_LENGTH: usize = 10_000;

/// Longest negative prompt the image service accepts, in characters.
pub const MAX_NEGATIVE_PROMPT_LENGTH: usize = 5_000;

/// Average CLIP tokens produced per whitespace-separated word.
const TOKENS_PER_WORD: f64 = 1.3;

/// Length rule for one prompt slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptLimit {
    pub slot: &'static str,
    pub max_chars: usize,
    pub allow_blank: bool,
}

pub const POSITIVE_LIMIT: PromptLimit = PromptLimit {
    slot: "Positive prompt",
    max_chars: MAX_PROMPT_LENGTH,
    allow_blank: false,
};

pub const NEGATIVE_LIMIT: PromptLimit = PromptLimit {
    slot: "Negative prompt",
    max_chars: MAX_NEGATIVE_PROMPT_LENGTH,
    allow_blank: true,
};

impl PromptLimit {
    /// Check `text` against this slot. Length counts chars, not bytes.
    pub fn check(&self, text: &str) -> Result<(), CoreError> {
        if !self.allow_blank && text.trim().is_empty() {
            return Err(CoreError::Validation(format!("{} is blank", self.slot)));
        }
        let chars = text.chars().count();
        if chars > self.max_chars {
            return Err(CoreError::Validation(format!(
                "{} is {chars} characters; the service accepts at most {}",
                self.slot, self.max_chars
            )));
        }
        Ok(())
    }
}

pub fn validate_prompt(text: &str) -> Result<(), CoreError> {
    POSITIVE_LIMIT.check(text)
}

pub fn validate_negative_prompt(text: &str) -> Result<(), CoreError> {
    NEGATIVE_LIMIT.check(text)
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

/// `ceil(words * 1.3)`.
pub fn estimate_token_count(text: &str) -> usize {
    let words = text.split_whitespace().count() as f64;
    (words * TOKENS_PER_WORD).ceil() as usize
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
