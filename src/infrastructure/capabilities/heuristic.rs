#[cfg(test)]
#[path = "heuristic_test.rs"]
mod tests;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::CapabilityName;
use crate::domain::models::Detector;

/// Crude script check: any Cyrillic letter means Russian, anything else
/// English. A placeholder until a real detector is configured.
#[derive(Default)]
pub struct ScriptHeuristic {}

fn is_cyrillic(c: char) -> bool {
    return ('а'..='я').contains(&c) || ('А'..='Я').contains(&c) || c == 'ё' || c == 'Ё';
}

#[async_trait]
impl Detector for ScriptHeuristic {
    fn name(&self) -> CapabilityName {
        return CapabilityName::Heuristic;
    }

    #[allow(clippy::implicit_return)]
    async fn detect(&self, text: &str) -> Result<String> {
        if text.chars().any(is_cyrillic) {
            return Ok("ru".to_string());
        }

        return Ok("en".to_string());
    }
}
