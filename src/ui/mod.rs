//! Plugin UI surfaces.
//!
//! The host's frameworks own all drawing; these components only describe
//! what to render and react to the host's callbacks.

mod components;

pub use components::{SampleModal, SettingField, SettingsPanel, MY_SETTING_FIELD};
