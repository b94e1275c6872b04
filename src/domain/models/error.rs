use thiserror::Error;

/// Failure of a whole fallback chain. The message is what the user sees; the
/// cause is kept for logs.
#[derive(Debug, Error)]
pub enum CapabilityError {
    #[error("Language detection failed")]
    Detection(#[source] anyhow::Error),
    #[error("Translation failed")]
    Translation(#[source] anyhow::Error),
    #[error("Summarization failed")]
    Summarization(#[source] anyhow::Error),
}
