#[cfg(test)]
#[path = "libretranslate_test.rs"]
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
use crate::domain::models::Detector;
use crate::domain::models::Translator;

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct DetectRequest {
    q: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct DetectResponse {
    language: String,
    confidence: f64,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct TranslateRequest {
    q: String,
    source: String,
    target: String,
    format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    translated_text: String,
}

/// A LibreTranslate compatible server providing both detection and
/// translation.
pub struct LibreTranslate {
    url: String,
    token: String,
    timeout: String,
}

impl Default for LibreTranslate {
    fn default() -> LibreTranslate {
        return LibreTranslate {
            url: Config::get(ConfigKey::LibreTranslateURL),
            token: Config::get(ConfigKey::LibreTranslateToken),
            timeout: Config::get(ConfigKey::RequestTimeout),
        };
    }
}

impl LibreTranslate {
    fn api_key(&self) -> Option<String> {
        if self.token.is_empty() {
            return None;
        }

        return Some(self.token.to_string());
    }

    fn post(&self, path: &str) -> Result<reqwest::RequestBuilder> {
        let timeout = Duration::from_millis(self.timeout.parse::<u64>()?);
        if self.url.is_empty() {
            bail!("LibreTranslate URL is not defined");
        }

        return Ok(reqwest::Client::new()
            .post(format!("{url}{path}", url = self.url.trim_end_matches('/')))
            .timeout(timeout));
    }
}

#[async_trait]
impl Detector for LibreTranslate {
    fn name(&self) -> CapabilityName {
        return CapabilityName::LibreTranslate;
    }

    #[allow(clippy::implicit_return)]
    async fn detect(&self, text: &str) -> Result<String> {
        let req = DetectRequest {
            q: text.to_string(),
            api_key: self.api_key(),
        };

        let res = self.post("/detect")?.json(&req).send().await?;
        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "Failed to make detection request to LibreTranslate"
            );
            bail!("Failed to make detection request to LibreTranslate");
        }

        let mut candidates = res.json::<Vec<DetectResponse>>().await?;
        candidates.sort_by(|a, b| return b.confidence.total_cmp(&a.confidence));
        tracing::debug!(candidates = ?candidates, "Detection response");

        if let Some(best) = candidates.first() {
            return Ok(best.language.to_string());
        }

        return Ok("".to_string());
    }
}

#[async_trait]
impl Translator for LibreTranslate {
    fn name(&self) -> CapabilityName {
        return CapabilityName::LibreTranslate;
    }

    #[allow(clippy::implicit_return)]
    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String> {
        let req = TranslateRequest {
            q: text.to_string(),
            source: source_lang.to_string(),
            target: target_lang.to_string(),
            format: "text".to_string(),
            api_key: self.api_key(),
        };

        let res = self.post("/translate")?.json(&req).send().await?;
        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "Failed to make translation request to LibreTranslate"
            );
            bail!("Failed to make translation request to LibreTranslate");
        }

        let body = res.json::<TranslateResponse>().await?;
        return Ok(body.translated_text);
    }
}
