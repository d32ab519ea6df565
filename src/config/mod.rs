//! Configuration management for LazyMark.
//!
//! This module handles loading and saving the plugin settings through the
//! host's storage API.

mod settings;

pub use settings::Settings;
