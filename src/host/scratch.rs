//! In-memory host implementation.
//!
//! `ScratchHost` records everything a plugin registers and routes editor
//! access to a single [`ScratchBuffer`]. It stands in for a real host in
//! the test suite and the headless demo harness.

use std::time::Duration;

use tracing::debug;

use super::buffer::ScratchBuffer;
use super::editor::Editor;
use super::storage::{DataStore, MemoryStore};
use super::Host;
use crate::commands::Command;

/// A host that keeps all state in memory.
pub struct ScratchHost {
    buffer: ScratchBuffer,
    markdown_view_active: bool,
    store: Box<dyn DataStore>,
    commands: Vec<Command>,
    settings_panels: usize,
    ribbon_icons: Vec<(String, String)>,
    status_text: Option<String>,
    notices: Vec<String>,
    intervals: Vec<Duration>,
    global_click_listeners: usize,
}

impl ScratchHost {
    /// Create a host with an empty buffer and in-memory storage.
    pub fn new() -> Self {
        Self::with_content("")
    }

    /// Create a host whose buffer starts with the given content.
    ///
    /// A markdown view is considered active until
    /// [`set_markdown_view_active`](Self::set_markdown_view_active) says
    /// otherwise.
    pub fn with_content(content: &str) -> Self {
        Self {
            buffer: ScratchBuffer::new(content),
            markdown_view_active: true,
            store: Box::new(MemoryStore::new()),
            commands: Vec::new(),
            settings_panels: 0,
            ribbon_icons: Vec::new(),
            status_text: None,
            notices: Vec::new(),
            intervals: Vec::new(),
            global_click_listeners: 0,
        }
    }

    /// Swap in a different storage backend.
    pub fn set_store(&mut self, store: Box<dyn DataStore>) {
        self.store = store;
    }

    /// Control whether a markdown view counts as focused.
    pub fn set_markdown_view_active(&mut self, active: bool) {
        self.markdown_view_active = active;
    }

    /// The host's single buffer.
    pub fn buffer(&self) -> &ScratchBuffer {
        &self.buffer
    }

    /// The host's single buffer, mutably.
    pub fn buffer_mut(&mut self) -> &mut ScratchBuffer {
        &mut self.buffer
    }

    /// Commands registered by the plugin.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Notices raised so far, oldest first.
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// The current status bar text, if set.
    pub fn status_text(&self) -> Option<&str> {
        self.status_text.as_deref()
    }

    /// Ribbon icons added by the plugin, as `(icon, title)` pairs.
    pub fn ribbon_icons(&self) -> &[(String, String)] {
        &self.ribbon_icons
    }

    /// Registered interval periods.
    pub fn intervals(&self) -> &[Duration] {
        &self.intervals
    }

    /// Number of registered global click listeners.
    pub fn global_click_listener_count(&self) -> usize {
        self.global_click_listeners
    }

    /// Number of registered settings panels.
    pub fn settings_panel_count(&self) -> usize {
        self.settings_panels
    }
}

impl Default for ScratchHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for ScratchHost {
    fn register_command(&mut self, command: Command) {
        debug!(id = command.id, "Command registered");
        self.commands.push(command);
    }

    fn register_settings_panel(&mut self) {
        self.settings_panels += 1;
    }

    fn add_ribbon_icon(&mut self, icon: &str, title: &str) {
        self.ribbon_icons.push((icon.to_string(), title.to_string()));
    }

    fn set_status_text(&mut self, text: &str) {
        self.status_text = Some(text.to_string());
    }

    fn notify(&mut self, message: &str) {
        debug!(message = %message, "Notice");
        self.notices.push(message.to_string());
    }

    fn register_interval(&mut self, period: Duration) {
        self.intervals.push(period);
    }

    fn register_global_click(&mut self) {
        self.global_click_listeners += 1;
    }

    fn is_markdown_view_active(&self) -> bool {
        self.markdown_view_active
    }

    fn active_editor(&mut self) -> Option<&mut dyn Editor> {
        if self.markdown_view_active {
            Some(&mut self.buffer)
        } else {
            None
        }
    }

    fn storage(&self) -> &dyn DataStore {
        self.store.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandRegistry;

    #[test]
    fn test_new_host_is_blank() {
        let host = ScratchHost::new();
        assert!(host.commands().is_empty());
        assert!(host.notices().is_empty());
        assert!(host.status_text().is_none());
        assert_eq!(host.settings_panel_count(), 0);
    }

    #[test]
    fn test_registrations_are_recorded() {
        let mut host = ScratchHost::new();
        for command in CommandRegistry::new().commands() {
            host.register_command(*command);
        }
        host.register_settings_panel();
        host.add_ribbon_icon("dice", "Sample Plugin");
        host.set_status_text("Status Bar Text");
        host.register_interval(Duration::from_secs(300));
        host.register_global_click();

        assert_eq!(host.commands().len(), CommandRegistry::new().commands().len());
        assert_eq!(host.settings_panel_count(), 1);
        assert_eq!(host.ribbon_icons().len(), 1);
        assert_eq!(host.status_text(), Some("Status Bar Text"));
        assert_eq!(host.intervals(), &[Duration::from_secs(300)]);
        assert_eq!(host.global_click_listener_count(), 1);
    }

    #[test]
    fn test_active_editor_requires_markdown_view() {
        let mut host = ScratchHost::new();
        assert!(host.active_editor().is_some());

        host.set_markdown_view_active(false);
        assert!(host.active_editor().is_none());
        assert!(!host.is_markdown_view_active());
    }

    #[test]
    fn test_notices_accumulate_in_order() {
        let mut host = ScratchHost::new();
        host.notify("first");
        host.notify("second");
        assert_eq!(host.notices(), &["first".to_string(), "second".to_string()]);
    }
}
