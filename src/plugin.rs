//! Plugin lifecycle and command dispatch.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::commands::{editing, Command, CommandAction, CommandKind, CommandRegistry};
use crate::config::Settings;
use crate::error::{PluginError, Result};
use crate::host::{DataStore, Editor, Host, Plugin};
use crate::ui::{SampleModal, SettingField, SettingsPanel};

/// Period of the illustrative timer registered at load.
const LOG_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// The LazyMark plugin.
///
/// Owns the settings object for its whole lifetime: initialized on load,
/// mutated only through the settings panel, discarded on unload. No other
/// component holds a competing reference.
pub struct LazymarkPlugin {
    settings: Settings,
    registry: CommandRegistry,
    modal: SampleModal,
}

impl LazymarkPlugin {
    /// Create an unloaded plugin. Settings hold their defaults until
    /// [`on_load`](Plugin::on_load) merges in persisted data.
    pub fn new() -> Self {
        Self {
            settings: Settings::default(),
            registry: CommandRegistry::new(),
            modal: SampleModal::new(),
        }
    }

    /// The current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The command registry.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// The sample modal.
    pub fn modal(&self) -> &SampleModal {
        &self.modal
    }

    /// The sample modal, mutably; the host closes it on dismissal.
    pub fn modal_mut(&mut self) -> &mut SampleModal {
        &mut self.modal
    }

    /// Describe the settings form for the host to render.
    pub fn settings_fields(&self) -> Vec<SettingField> {
        SettingsPanel::fields(&self.settings)
    }

    /// Apply a settings-panel change event and persist the result.
    ///
    /// # Errors
    ///
    /// Propagates storage write failures.
    pub async fn update_setting(
        &mut self,
        field_id: &str,
        value: &str,
        store: &dyn DataStore,
    ) -> Result<()> {
        SettingsPanel::change(field_id, value, &mut self.settings, store).await
    }

    /// Side-effect-free check whether a command can run right now.
    ///
    /// The host may call this repeatedly, for example to decide whether a
    /// command shows up in its palette at all.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::UnknownCommand`] for an unregistered id.
    pub fn check_command(&self, id: &str, host: &dyn Host) -> Result<bool> {
        let command = self
            .registry
            .get(id)
            .ok_or_else(|| PluginError::UnknownCommand(id.to_string()))?;

        Ok(match command.action.kind() {
            CommandKind::Global | CommandKind::Editor => true,
            CommandKind::Conditional => host.is_markdown_view_active(),
        })
    }

    /// Invoke a command for real.
    ///
    /// Editor commands take the host's focused editing surface and fail
    /// with [`PluginError::NoActiveEditor`] when there is none. The
    /// conditional command re-checks its guard and quietly does nothing
    /// when it no longer holds.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::UnknownCommand`] for an unregistered id and
    /// [`PluginError::NoActiveEditor`] for an editor command without an
    /// active surface.
    pub fn run_command(&mut self, id: &str, host: &mut dyn Host) -> Result<()> {
        let command: Command = *self
            .registry
            .get(id)
            .ok_or_else(|| PluginError::UnknownCommand(id.to_string()))?;
        debug!(id = command.id, "Running command");

        match command.action {
            CommandAction::OpenSampleModal => self.modal.open(),
            CommandAction::OpenSampleModalChecked => {
                if host.is_markdown_view_active() {
                    self.modal.open();
                }
            }
            editor_action => {
                let editor = host.active_editor().ok_or(PluginError::NoActiveEditor)?;
                Self::apply_editor_action(editor_action, editor);
            }
        }

        Ok(())
    }

    /// Run one editor action against the supplied surface.
    fn apply_editor_action(action: CommandAction, editor: &mut dyn Editor) {
        match action {
            CommandAction::ReplaceSelectionSample => editing::replace_selection_sample(editor),
            CommandAction::InsertCodeBlock => editing::insert_code_block(editor),
            CommandAction::InsertHeading(level) => editing::insert_heading(editor, level),
            CommandAction::Underline => editing::underline(editor),
            CommandAction::InsertLineBreak => editing::insert_line_break(editor),
            CommandAction::InsertBackslash => editing::insert_literal(editor, '\\'),
            CommandAction::InsertOpenCurly => editing::insert_literal(editor, '{'),
            CommandAction::InsertCloseCurly => editing::insert_literal(editor, '}'),
            // Handled before editor dispatch.
            CommandAction::OpenSampleModal | CommandAction::OpenSampleModalChecked => {}
        }
    }

    /// Ribbon icon click handler.
    pub fn on_ribbon_click(&self, host: &mut dyn Host) {
        host.notify("This is a notice!");
    }

    /// Tick handler for the interval registered at load. Mutates nothing.
    pub fn on_tick(&self) {
        debug!("Interval fired");
    }

    /// Global click handler registered at load. Mutates nothing.
    pub fn on_global_click(&self) {
        debug!("Global click");
    }
}

impl Default for LazymarkPlugin {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl Plugin for LazymarkPlugin {
    async fn on_load(&mut self, host: &mut dyn Host) -> Result<()> {
        self.settings = Settings::load(host.storage()).await?;

        host.add_ribbon_icon("dice", "Sample Plugin");
        host.set_status_text("Status Bar Text");

        for command in self.registry.commands() {
            host.register_command(*command);
        }

        host.register_settings_panel();

        // Illustrative registrations; the host tears both down at unload.
        host.register_global_click();
        host.register_interval(LOG_INTERVAL);

        debug!(
            commands = self.registry.commands().len(),
            setting = %self.settings.my_setting,
            "Plugin loaded"
        );
        Ok(())
    }

    fn on_unload(&mut self) {
        // Registrations are host-managed; nothing to release here.
        debug!("Plugin unloaded");
    }
}
