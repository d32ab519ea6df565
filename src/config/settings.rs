//! Plugin settings.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::host::DataStore;

/// Plugin-wide settings.
///
/// The persisted layout is a JSON object with one recognized key,
/// `mySetting`. Keys this version does not recognize are carried in
/// [`extra`](Self::extra) and written back on save, but never read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// The one configurable value, edited in the settings panel.
    pub my_setting: String,

    /// Unrecognized keys from persisted data, preserved across saves.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            my_setting: "default".to_string(),
            extra: Map::new(),
        }
    }
}

impl Settings {
    /// Load settings by overlaying persisted data on the defaults.
    ///
    /// The merge is shallow: persisted top-level fields win, missing
    /// fields fall back to their defaults, and nested values are replaced
    /// wholesale rather than merged. Persisted data that is not a JSON
    /// object is ignored.
    ///
    /// # Errors
    ///
    /// Propagates storage read failures and malformed persisted data.
    pub async fn load(store: &dyn DataStore) -> Result<Self> {
        let mut merged = Map::new();
        if let Value::Object(defaults) = serde_json::to_value(Settings::default())? {
            merged = defaults;
        }

        if let Some(Value::Object(persisted)) = store.load().await? {
            for (key, value) in persisted {
                merged.insert(key, value);
            }
        }

        Ok(serde_json::from_value(Value::Object(merged))?)
    }

    /// Persist the full settings object, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Propagates storage write failures.
    pub async fn save(&self, store: &dyn DataStore) -> Result<()> {
        store.save(&serde_json::to_value(self)?).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::host::MemoryStore;

    #[tokio::test]
    async fn test_load_without_persisted_data_yields_default() {
        let store = MemoryStore::new();
        let settings = Settings::load(&store).await.unwrap();
        assert_eq!(settings.my_setting, "default");
        assert!(settings.extra.is_empty());
    }

    #[tokio::test]
    async fn test_persisted_value_overrides_default() {
        let store = MemoryStore::with_data(json!({"mySetting": "x"}));
        let settings = Settings::load(&store).await.unwrap();
        assert_eq!(settings.my_setting, "x");
    }

    #[tokio::test]
    async fn test_missing_field_falls_back_to_default() {
        let store = MemoryStore::with_data(json!({"futureKnob": true}));
        let settings = Settings::load(&store).await.unwrap();
        assert_eq!(settings.my_setting, "default");
        assert_eq!(settings.extra["futureKnob"], true);
    }

    #[tokio::test]
    async fn test_unknown_keys_survive_a_round_trip() {
        let store = MemoryStore::with_data(json!({
            "mySetting": "kept",
            "futureKnob": {"nested": 1}
        }));

        let settings = Settings::load(&store).await.unwrap();
        settings.save(&store).await.unwrap();

        let persisted = store.data().unwrap();
        assert_eq!(persisted["mySetting"], "kept");
        assert_eq!(persisted["futureKnob"]["nested"], 1);
    }

    #[tokio::test]
    async fn test_non_object_persisted_data_is_ignored() {
        let store = MemoryStore::with_data(json!("scrambled"));
        let settings = Settings::load(&store).await.unwrap();
        assert_eq!(settings.my_setting, "default");
    }

    #[tokio::test]
    async fn test_save_replaces_prior_value() {
        let store = MemoryStore::with_data(json!({"mySetting": "old"}));

        let mut settings = Settings::load(&store).await.unwrap();
        settings.my_setting = "new".to_string();
        settings.save(&store).await.unwrap();

        let persisted = store.data().unwrap();
        assert_eq!(persisted["mySetting"], "new");
    }

    #[test]
    fn test_serializes_with_camel_case_key() {
        let value = serde_json::to_value(Settings::default()).unwrap();
        assert!(value.get("mySetting").is_some());
        assert!(value.get("my_setting").is_none());
    }
}
