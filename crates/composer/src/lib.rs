//! `storyframe-composer` library crate.
//!
//! Decodes JSON jobs, dispatches them to `storyframe_core`, and encodes
//! the results. The binary entrypoint lives in `main.rs`; everything here
//! is exposed for integration testing.

pub mod config;
pub mod error;
pub mod job;
