/// Job-level failures. Composition itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum ComposerError {
    #[error("Job input is empty")]
    EmptyInput,

    #[error("Invalid job JSON: {0}")]
    Decode(#[from] serde_json::Error),
}
