#[cfg(test)]
#[path = "remote_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::CapabilityName;
use crate::domain::models::Translator;

/// Concatenates the translated segments of a `translate_a/single` response.
/// The body is an array whose first element holds one row per segment, with
/// the translated text first in each row. Rows without text are skipped.
fn parse_segments(body: &str) -> Result<String> {
    let json: serde_json::Value = serde_json::from_str(body)?;
    let rows = match json.get(0).and_then(|e| return e.as_array()) {
        Some(rows) => rows,
        None => bail!("Translation response has no segments"),
    };

    let text = rows
        .iter()
        .filter_map(|row| return row.get(0).and_then(|e| return e.as_str()))
        .collect::<Vec<&str>>()
        .join("");

    if text.is_empty() {
        bail!("Translation response was empty");
    }

    return Ok(text);
}

/// The public translate endpoint, queried without credentials.
pub struct Remote {
    url: String,
    timeout: String,
}

impl Default for Remote {
    fn default() -> Remote {
        return Remote {
            url: Config::get(ConfigKey::TranslateURL),
            timeout: Config::get(ConfigKey::RequestTimeout),
        };
    }
}

impl Remote {
    pub fn new(url: &str, timeout_ms: u64) -> Remote {
        return Remote {
            url: url.to_string(),
            timeout: timeout_ms.to_string(),
        };
    }
}

#[async_trait]
impl Translator for Remote {
    fn name(&self) -> CapabilityName {
        return CapabilityName::Remote;
    }

    #[allow(clippy::implicit_return)]
    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String> {
        let res = reqwest::Client::new()
            .get(format!(
                "{url}/translate_a/single",
                url = self.url.trim_end_matches('/')
            ))
            .query(&[
                ("client", "gtx"),
                ("sl", source_lang),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "Failed to make translation request"
            );
            bail!("Failed to make translation request");
        }

        let body = res.text().await?;
        tracing::debug!(body = %body, "Translation response");

        return parse_segments(&body);
    }
}
