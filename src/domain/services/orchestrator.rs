#[cfg(test)]
#[path = "orchestrator_test.rs"]
mod tests;

use crate::domain::models::CapabilityError;
use crate::domain::models::DetectorBox;
use crate::domain::models::FallbackChain;
use crate::domain::models::SummarizerBox;
use crate::domain::models::TranslatorBox;
use crate::domain::models::AUTO_LANGUAGE;

/// Runs detection, translation and summarization through their fallback
/// chains. Primary failures are logged and swallowed as long as the fallback
/// succeeds.
pub struct Orchestrator {
    detectors: FallbackChain<DetectorBox>,
    translators: FallbackChain<TranslatorBox>,
    summarizers: FallbackChain<SummarizerBox>,
}

impl Orchestrator {
    pub fn new(
        detectors: FallbackChain<DetectorBox>,
        translators: FallbackChain<TranslatorBox>,
        summarizers: FallbackChain<SummarizerBox>,
    ) -> Orchestrator {
        return Orchestrator {
            detectors,
            translators,
            summarizers,
        };
    }

    pub async fn detect(&self, text: &str) -> Result<String, CapabilityError> {
        if let Some(primary) = &self.detectors.primary {
            match primary.detect(text).await {
                Ok(code) if !code.is_empty() => {
                    tracing::debug!(capability = %primary.name(), code = %code, "Detected language");
                    return Ok(code);
                }
                Ok(_) => {
                    tracing::warn!(capability = %primary.name(), "Detector returned no language, falling back");
                }
                Err(err) => {
                    tracing::warn!(capability = %primary.name(), error = ?err, "Detector failed, falling back");
                }
            }
        }

        let fallback = &self.detectors.fallback;
        match fallback.detect(text).await {
            Ok(code) => {
                tracing::debug!(capability = %fallback.name(), code = %code, "Detected language");
                return Ok(code);
            }
            Err(err) => {
                tracing::error!(capability = %fallback.name(), error = ?err, "Language detection failed");
                return Err(CapabilityError::Detection(err));
            }
        }
    }

    pub async fn translate(
        &self,
        text: &str,
        target_lang: &str,
        source_lang: Option<&str>,
    ) -> Result<String, CapabilityError> {
        let source_lang = source_lang.unwrap_or(AUTO_LANGUAGE);

        if let Some(primary) = &self.translators.primary {
            match primary.translate(text, source_lang, target_lang).await {
                Ok(translation) if !translation.is_empty() => {
                    return Ok(translation);
                }
                Ok(_) => {
                    tracing::warn!(capability = %primary.name(), "Translator returned nothing, falling back");
                }
                Err(err) => {
                    tracing::warn!(capability = %primary.name(), error = ?err, "Translator failed, falling back");
                }
            }
        }

        let fallback = &self.translators.fallback;
        match fallback.translate(text, source_lang, target_lang).await {
            Ok(translation) => {
                return Ok(translation);
            }
            Err(err) => {
                tracing::error!(capability = %fallback.name(), error = ?err, "Translation failed");
                return Err(CapabilityError::Translation(err));
            }
        }
    }

    pub async fn summarize(&self, text: &str) -> Result<String, CapabilityError> {
        if let Some(primary) = &self.summarizers.primary {
            match primary.summarize(text).await {
                Ok(summary) if !summary.is_empty() => {
                    return Ok(summary);
                }
                Ok(_) => {
                    tracing::warn!(capability = %primary.name(), "Summarizer returned nothing, falling back");
                }
                Err(err) => {
                    tracing::warn!(capability = %primary.name(), error = ?err, "Summarizer failed, falling back");
                }
            }
        }

        let fallback = &self.summarizers.fallback;
        match fallback.summarize(text).await {
            Ok(summary) => {
                return Ok(summary);
            }
            Err(err) => {
                tracing::error!(capability = %fallback.name(), error = ?err, "Summarization failed");
                return Err(CapabilityError::Summarization(err));
            }
        }
    }
}
