//! The host runtime contract.
//!
//! A plugin-capable editor loads this crate through two traits: the plugin
//! implements [`Plugin`] (the lifecycle the host drives), and the host
//! implements [`Host`], [`Editor`], and [`DataStore`] (the surfaces the
//! plugin calls into). [`ScratchHost`] and [`ScratchBuffer`] are in-memory
//! implementations of the host side, used by the test suite and the demo
//! binary.

mod buffer;
mod editor;
mod scratch;
mod storage;

use std::time::Duration;

use async_trait::async_trait;

pub use buffer::ScratchBuffer;
pub use editor::{CursorPos, Editor};
pub use scratch::ScratchHost;
pub use storage::{DataStore, FileStore, MemoryStore};

use crate::commands::Command;
use crate::error::Result;

/// The lifecycle interface the host runtime expects of a plugin.
#[async_trait(?Send)]
pub trait Plugin {
    /// Invoked once at activation.
    ///
    /// All registration must complete before this returns; the host will
    /// not surface commands registered later.
    async fn on_load(&mut self, host: &mut dyn Host) -> Result<()>;

    /// Invoked at deactivation.
    ///
    /// Registrations made through [`Host`] are torn down by the host; this
    /// hook is for plugin-owned state only.
    fn on_unload(&mut self) {}
}

/// The host application handle passed to the plugin.
///
/// Everything registered here is owned and torn down by the host when the
/// plugin unloads; the plugin keeps no cleanup bookkeeping of its own.
pub trait Host {
    /// Register a command for the host to discover, display, and invoke.
    fn register_command(&mut self, command: Command);

    /// Register the plugin's settings panel with the host's settings UI.
    fn register_settings_panel(&mut self);

    /// Add an icon to the host's ribbon; clicks come back through the
    /// plugin's ribbon hook.
    fn add_ribbon_icon(&mut self, icon: &str, title: &str);

    /// Set the plugin's status bar item text.
    fn set_status_text(&mut self, text: &str);

    /// Show a transient notice to the user.
    fn notify(&mut self, message: &str);

    /// Register a periodic timer; ticks come back through the plugin's
    /// tick hook until the host tears the timer down at unload.
    fn register_interval(&mut self, period: Duration);

    /// Register a listener for clicks anywhere in the host UI, torn down
    /// at unload.
    fn register_global_click(&mut self);

    /// Whether a markdown-editing view is currently focused.
    ///
    /// Side-effect-free; command checks may call it repeatedly.
    fn is_markdown_view_active(&self) -> bool;

    /// The focused text-editing surface, if any.
    fn active_editor(&mut self) -> Option<&mut dyn Editor>;

    /// The storage backend for persisted plugin data.
    fn storage(&self) -> &dyn DataStore;
}
