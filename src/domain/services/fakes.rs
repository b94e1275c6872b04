use std::env;
use std::path;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use super::History;
use super::LocalStorage;
use super::Orchestrator;
use crate::domain::models::CapabilityName;
use crate::domain::models::Detector;
use crate::domain::models::DetectorBox;
use crate::domain::models::FallbackChain;
use crate::domain::models::Summarizer;
use crate::domain::models::SummarizerBox;
use crate::domain::models::Translator;
use crate::domain::models::TranslatorBox;
use crate::infrastructure::capabilities::extractive::Extractive;
use crate::infrastructure::capabilities::heuristic::ScriptHeuristic;

/// Answers every call with a fixed value, or fails when there is none.
pub struct Fixed {
    answer: Option<String>,
}

impl Fixed {
    pub fn ok(answer: &str) -> Fixed {
        return Fixed {
            answer: Some(answer.to_string()),
        };
    }

    pub fn failing() -> Fixed {
        return Fixed { answer: None };
    }

    fn answer(&self) -> Result<String> {
        if let Some(answer) = &self.answer {
            return Ok(answer.to_string());
        }

        bail!("capability unavailable")
    }
}

#[async_trait]
impl Detector for Fixed {
    fn name(&self) -> CapabilityName {
        return CapabilityName::LibreTranslate;
    }

    #[allow(clippy::implicit_return)]
    async fn detect(&self, _text: &str) -> Result<String> {
        return self.answer();
    }
}

#[async_trait]
impl Translator for Fixed {
    fn name(&self) -> CapabilityName {
        return CapabilityName::Remote;
    }

    #[allow(clippy::implicit_return)]
    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String> {
        let answer = self.answer()?;
        return Ok(format!("{answer}:{source_lang}->{target_lang}:{text}"));
    }
}

#[async_trait]
impl Summarizer for Fixed {
    fn name(&self) -> CapabilityName {
        return CapabilityName::Ollama;
    }

    #[allow(clippy::implicit_return)]
    async fn summarize(&self, _text: &str) -> Result<String> {
        return self.answer();
    }
}

pub fn orchestrator(
    detector: Option<Fixed>,
    primary_translator: Option<Fixed>,
    fallback_translator: Fixed,
    summarizer: Option<Fixed>,
) -> Orchestrator {
    let detectors: FallbackChain<DetectorBox> = FallbackChain::new(
        detector.map(|e| return Box::new(e) as DetectorBox),
        Box::<ScriptHeuristic>::default() as DetectorBox,
    );
    let translators: FallbackChain<TranslatorBox> = FallbackChain::new(
        primary_translator.map(|e| return Box::new(e) as TranslatorBox),
        Box::new(fallback_translator) as TranslatorBox,
    );
    let summarizers: FallbackChain<SummarizerBox> = FallbackChain::new(
        summarizer.map(|e| return Box::new(e) as SummarizerBox),
        Box::<Extractive>::default() as SummarizerBox,
    );

    return Orchestrator::new(detectors, translators, summarizers);
}

/// History backed by a fresh directory under the system temp dir.
pub fn temp_history() -> (History, path::PathBuf) {
    let dir = env::temp_dir().join(format!("glossa-test-{}", Uuid::new_v4()));
    let history = History::new(LocalStorage::new(dir.join("storage.json")));
    return (history, dir);
}
