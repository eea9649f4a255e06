//! `storyframe-core` -- the prompt-composition engine.
//!
//! Turns a terse scene description plus style and character metadata
//! into an engineered text-to-image prompt and matching negative prompt.
//! Every function here is pure: no I/O, no shared mutable state, and
//! identical inputs always produce identical outputs.

pub mod activity;
pub mod analyzer;
pub mod character;
pub mod continuity;
pub mod enhance;
pub mod error;
pub mod master_prompt;
pub mod negative_prompt;
pub mod prompt_limits;
pub mod scene_sequence;
pub mod style;
pub mod techniques;
pub mod templates;
pub mod types;
