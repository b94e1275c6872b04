use anyhow::Result;
use async_trait::async_trait;
use strum::EnumIter;
use strum::EnumVariantNames;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum CapabilityName {
    /// Frequency based extractive summaries.
    Extractive,
    /// Script based language guess.
    Heuristic,
    LibreTranslate,
    Ollama,
    /// The public translate endpoint queried over HTTP.
    Remote,
}

#[async_trait]
pub trait Detector {
    fn name(&self) -> CapabilityName;

    /// Returns a language code for `text`. An empty code means the detector
    /// could not decide.
    async fn detect(&self, text: &str) -> Result<String>;
}

#[async_trait]
pub trait Translator {
    fn name(&self) -> CapabilityName;

    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String>;
}

#[async_trait]
pub trait Summarizer {
    fn name(&self) -> CapabilityName;

    async fn summarize(&self, text: &str) -> Result<String>;
}

pub type DetectorBox = Box<dyn Detector + Send + Sync>;
pub type TranslatorBox = Box<dyn Translator + Send + Sync>;
pub type SummarizerBox = Box<dyn Summarizer + Send + Sync>;

/// An optional primary implementation backed by an always present fallback.
pub struct FallbackChain<T> {
    pub primary: Option<T>,
    pub fallback: T,
}

impl<T> FallbackChain<T> {
    pub fn new(primary: Option<T>, fallback: T) -> FallbackChain<T> {
        return FallbackChain { primary, fallback };
    }
}
