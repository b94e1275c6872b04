#[cfg(test)]
#[path = "history_test.rs"]
mod tests;

use anyhow::Result;

use super::LocalStorage;
use crate::domain::models::ChatRecord;

const CHATS_KEY: &str = "chats";

fn parse_records(payload: Option<String>) -> Vec<ChatRecord> {
    let payload = match payload {
        Some(payload) => payload,
        None => return vec![],
    };

    match serde_json::from_str::<Vec<ChatRecord>>(&payload) {
        Ok(records) => {
            return records;
        }
        Err(err) => {
            tracing::warn!(error = ?err, "Chat history is corrupt, starting empty");
            return vec![];
        }
    }
}

/// Append-only record of past translations. Only a full clear removes
/// records. Appends are serialized within the process, not across processes.
pub struct History {
    storage: LocalStorage,
}

impl Default for History {
    fn default() -> History {
        return History::new(LocalStorage::default());
    }
}

impl History {
    pub fn new(storage: LocalStorage) -> History {
        return History { storage };
    }

    /// Records oldest first. Absent or corrupt history reads as empty.
    pub async fn load_all(&self) -> Result<Vec<ChatRecord>> {
        let payload = self.storage.get_item(CHATS_KEY).await?;
        return Ok(parse_records(payload));
    }

    /// Adds a record under the storage lock, so appends racing each other
    /// all land.
    pub async fn append(&self, input: &str, output: &str) -> Result<ChatRecord> {
        let record = ChatRecord::new(input, output);
        let appended = record.clone();

        self.storage
            .update_item(CHATS_KEY, move |payload| {
                let mut records = parse_records(payload);
                records.push(appended);
                tracing::debug!(count = records.len(), "Appended chat record");

                return Ok(serde_json::to_string(&records)?);
            })
            .await?;

        return Ok(record);
    }

    /// The record at a 1-based position, as listed by the history commands.
    pub async fn get(&self, position: usize) -> Result<Option<ChatRecord>> {
        if position == 0 {
            return Ok(None);
        }

        let records = self.load_all().await?;
        return Ok(records.get(position - 1).cloned());
    }

    pub async fn clear(&self) -> Result<()> {
        return self.storage.remove_item(CHATS_KEY).await;
    }
}
