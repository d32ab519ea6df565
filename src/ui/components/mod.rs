//! Reusable UI components.

mod modal;
mod settings_panel;

pub use modal::SampleModal;
pub use settings_panel::{SettingField, SettingsPanel, MY_SETTING_FIELD};
