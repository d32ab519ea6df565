//! Settings panel for the host's settings UI.

use tracing::{debug, warn};

use crate::config::Settings;
use crate::error::Result;
use crate::host::DataStore;

/// Field id for the single text setting.
pub const MY_SETTING_FIELD: &str = "my-setting";

/// A form field descriptor the host renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingField {
    /// Identifier routed back with change events.
    pub id: &'static str,
    /// Field label.
    pub name: &'static str,
    /// Description shown under the label.
    pub description: &'static str,
    /// Placeholder text shown when the field is empty.
    pub placeholder: &'static str,
    /// Current value.
    pub value: String,
}

/// The plugin's settings panel.
///
/// The host's panel framework owns rendering; this component only
/// describes the form and routes change events into the settings store.
pub struct SettingsPanel;

impl SettingsPanel {
    /// Heading the host renders above the form.
    pub fn heading() -> &'static str {
        "Settings for my awesome plugin."
    }

    /// Describe the form fields for the host to render.
    pub fn fields(settings: &Settings) -> Vec<SettingField> {
        vec![SettingField {
            id: MY_SETTING_FIELD,
            name: "Setting #1",
            description: "It's a secret",
            placeholder: "Enter your secret",
            value: settings.my_setting.clone(),
        }]
    }

    /// Apply a change event from the host's form.
    ///
    /// Updates the in-memory settings synchronously, then awaits
    /// persistence. Persistence failures propagate to the caller; the
    /// input itself never blocks on them.
    pub async fn change(
        field_id: &str,
        value: &str,
        settings: &mut Settings,
        store: &dyn DataStore,
    ) -> Result<()> {
        match field_id {
            MY_SETTING_FIELD => {
                debug!(value = %value, "Setting changed");
                settings.my_setting = value.to_string();
                settings.save(store).await
            }
            other => {
                warn!(field = %other, "Change event for unknown settings field");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{DataStore, MemoryStore};

    #[test]
    fn test_heading_is_stable() {
        assert_eq!(SettingsPanel::heading(), "Settings for my awesome plugin.");
    }

    #[test]
    fn test_one_field_bound_to_the_setting() {
        let settings = Settings {
            my_setting: "hunter2".to_string(),
            ..Settings::default()
        };

        let fields = SettingsPanel::fields(&settings);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].id, MY_SETTING_FIELD);
        assert_eq!(fields[0].name, "Setting #1");
        assert_eq!(fields[0].value, "hunter2");
    }

    #[tokio::test]
    async fn test_change_updates_and_persists() {
        let store = MemoryStore::new();
        let mut settings = Settings::default();

        SettingsPanel::change(MY_SETTING_FIELD, "s3cret", &mut settings, &store)
            .await
            .unwrap();

        assert_eq!(settings.my_setting, "s3cret");
        let persisted = store.load().await.unwrap().unwrap();
        assert_eq!(persisted["mySetting"], "s3cret");
    }

    #[tokio::test]
    async fn test_change_for_unknown_field_is_ignored() {
        let store = MemoryStore::new();
        let mut settings = Settings::default();

        SettingsPanel::change("no-such-field", "x", &mut settings, &store)
            .await
            .unwrap();

        assert_eq!(settings.my_setting, "default");
        assert!(store.load().await.unwrap().is_none());
    }
}
