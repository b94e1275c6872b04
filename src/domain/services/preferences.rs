#[cfg(test)]
#[path = "preferences_test.rs"]
mod tests;

use anyhow::Result;

use super::LocalStorage;

const DARK_MODE_KEY: &str = "darkMode";
const ENABLED: &str = "enabled";
const DISABLED: &str = "disabled";

pub struct Preferences {
    storage: LocalStorage,
}

impl Default for Preferences {
    fn default() -> Preferences {
        return Preferences::new(LocalStorage::default());
    }
}

impl Preferences {
    pub fn new(storage: LocalStorage) -> Preferences {
        return Preferences { storage };
    }

    pub async fn dark_mode(&self) -> Result<bool> {
        let value = self.storage.get_item(DARK_MODE_KEY).await?;
        return Ok(value.as_deref() == Some(ENABLED));
    }

    pub async fn set_dark_mode(&self, enabled: bool) -> Result<()> {
        let value = if enabled { ENABLED } else { DISABLED };
        return self.storage.set_item(DARK_MODE_KEY, value).await;
    }

    /// Flips the flag and returns the new value.
    pub async fn toggle_dark_mode(&self) -> Result<bool> {
        let value = self
            .storage
            .update_item(DARK_MODE_KEY, |current| {
                if current.as_deref() == Some(ENABLED) {
                    return Ok(DISABLED.to_string());
                }

                return Ok(ENABLED.to_string());
            })
            .await?;

        return Ok(value == ENABLED);
    }
}
