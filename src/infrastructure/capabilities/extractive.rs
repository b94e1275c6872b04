use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::CapabilityName;
use crate::domain::models::Summarizer;
use crate::domain::services::summarizer;

/// Summarizer backed by the local frequency scoring.
#[derive(Default)]
pub struct Extractive {}

#[async_trait]
impl Summarizer for Extractive {
    fn name(&self) -> CapabilityName {
        return CapabilityName::Extractive;
    }

    #[allow(clippy::implicit_return)]
    async fn summarize(&self, text: &str) -> Result<String> {
        return Ok(summarizer::summarize(text));
    }
}
