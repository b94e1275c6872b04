pub mod extractive;
pub mod heuristic;
pub mod libretranslate;
pub mod ollama;
pub mod remote;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::DetectorBox;
use crate::domain::models::FallbackChain;
use crate::domain::models::SummarizerBox;
use crate::domain::models::TranslatorBox;
use crate::domain::services::Orchestrator;

/// Builds the fallback chains from configuration. Host capabilities are only
/// present when their server is configured; the local and remote fallbacks
/// are always available.
pub struct CapabilityManager {}

impl CapabilityManager {
    pub fn detectors() -> FallbackChain<DetectorBox> {
        let mut primary: Option<DetectorBox> = None;
        if !Config::get(ConfigKey::LibreTranslateURL).is_empty() {
            primary = Some(Box::<libretranslate::LibreTranslate>::default());
        }

        return FallbackChain::new(primary, Box::<heuristic::ScriptHeuristic>::default());
    }

    pub fn translators() -> FallbackChain<TranslatorBox> {
        let mut primary: Option<TranslatorBox> = None;
        if !Config::get(ConfigKey::LibreTranslateURL).is_empty() {
            primary = Some(Box::<libretranslate::LibreTranslate>::default());
        }

        return FallbackChain::new(primary, Box::<remote::Remote>::default());
    }

    pub fn summarizers() -> FallbackChain<SummarizerBox> {
        let mut primary: Option<SummarizerBox> = None;
        if !Config::get(ConfigKey::OllamaURL).is_empty() && !Config::get(ConfigKey::Model).is_empty()
        {
            primary = Some(Box::<ollama::Ollama>::default());
        }

        return FallbackChain::new(primary, Box::<extractive::Extractive>::default());
    }

    pub fn orchestrator() -> Orchestrator {
        return Orchestrator::new(
            CapabilityManager::detectors(),
            CapabilityManager::translators(),
            CapabilityManager::summarizers(),
        );
    }
}
