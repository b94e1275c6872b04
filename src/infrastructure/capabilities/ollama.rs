#[cfg(test)]
#[path = "ollama_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::CapabilityName;
use crate::domain::models::Summarizer;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CompletionRequest {
    model: String,
    prompt: String,
    stream: bool,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CompletionResponse {
    pub response: String,
    pub done: bool,
}

fn summary_prompt(text: &str) -> String {
    return format!(
        "Summarize the following text in at most three sentences, in the language it is written in. Reply with the summary only.\n\n{text}"
    );
}

/// Summaries generated by a model hosted on an Ollama server.
pub struct Ollama {
    url: String,
    model: String,
    timeout: String,
}

impl Default for Ollama {
    fn default() -> Ollama {
        return Ollama {
            url: Config::get(ConfigKey::OllamaURL),
            model: Config::get(ConfigKey::Model),
            timeout: Config::get(ConfigKey::RequestTimeout),
        };
    }
}

#[async_trait]
impl Summarizer for Ollama {
    fn name(&self) -> CapabilityName {
        return CapabilityName::Ollama;
    }

    #[allow(clippy::implicit_return)]
    async fn summarize(&self, text: &str) -> Result<String> {
        if self.model.is_empty() {
            bail!("Ollama model is not defined");
        }

        let req = CompletionRequest {
            model: self.model.to_string(),
            prompt: summary_prompt(text),
            stream: false,
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/api/generate", url = self.url))
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "Failed to make completion request to Ollama"
            );
            bail!("Failed to make completion request to Ollama");
        }

        let ores = res.json::<CompletionResponse>().await?;
        tracing::debug!(body = ?ores, "Completion response");

        return Ok(ores.response.trim().to_string());
    }
}
