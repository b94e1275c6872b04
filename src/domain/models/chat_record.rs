#[cfg(test)]
#[path = "chat_record_test.rs"]
mod tests;

use chrono::DateTime;
use chrono::Local;
use chrono::SecondsFormat;
use chrono::Utc;
use serde_derive::Deserialize;
use serde_derive::Serialize;

const TITLE_MAX_CHARS: usize = 20;

/// One translation persisted to history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRecord {
    pub input: String,
    pub output: String,
    pub timestamp: String,
}

impl ChatRecord {
    pub fn new(input: &str, output: &str) -> ChatRecord {
        return ChatRecord {
            input: input.to_string(),
            output: output.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
    }

    pub fn title(&self) -> String {
        if self.input.chars().count() > TITLE_MAX_CHARS {
            let head = self.input.chars().take(TITLE_MAX_CHARS).collect::<String>();
            return format!("{head}...");
        }

        return self.input.to_string();
    }

    /// Timestamp rendered in the local timezone, or the raw value if it can't
    /// be parsed.
    pub fn display_date(&self) -> String {
        if let Ok(date) = DateTime::parse_from_rfc3339(&self.timestamp) {
            return date
                .with_timezone(&Local)
                .format("%a, %b %-d, %Y, %I:%M %p")
                .to_string();
        }

        return self.timestamp.to_string();
    }
}
