//! Command registry for host discovery.
//!
//! Provides the command descriptors the plugin registers at load time and
//! id-based lookup for dispatch.

/// A command registered with the host.
///
/// The id is the stable handle used for host-side invocation and user
/// keybindings; the name is what the host shows in its palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    /// Unique identifier. Stable across releases; renaming one breaks
    /// existing user keybindings.
    pub id: &'static str,
    /// Display name shown in the host's palette.
    pub name: &'static str,
    /// What the command does when invoked.
    pub action: CommandAction,
}

/// Dispatch shapes a command can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Always runnable, no editor required.
    Global,
    /// Requires the focused text-editing surface.
    Editor,
    /// Carries a cheap, side-effect-free "can this run now" check.
    Conditional,
}

impl CommandKind {
    /// Get the display name for this kind.
    pub fn display(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Editor => "editor",
            Self::Conditional => "conditional",
        }
    }
}

/// Actions that can be triggered by commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    /// Open the sample modal unconditionally.
    OpenSampleModal,
    /// Open the sample modal, guarded by the markdown-view check.
    OpenSampleModalChecked,
    /// Log the current selection and replace it with the sample text.
    ReplaceSelectionSample,
    /// Insert a code fence and park the cursor on the language tag.
    InsertCodeBlock,
    /// Insert a heading marker of the given level (1-5).
    InsertHeading(u8),
    /// Wrap the selection in underline tags, or insert an empty pair.
    Underline,
    /// Insert a line break tag and move to the next line.
    InsertLineBreak,
    /// Insert a literal backslash.
    InsertBackslash,
    /// Insert a literal open curly bracket.
    InsertOpenCurly,
    /// Insert a literal close curly bracket.
    InsertCloseCurly,
}

impl CommandAction {
    /// Classify this action for dispatch.
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::OpenSampleModal => CommandKind::Global,
            Self::OpenSampleModalChecked => CommandKind::Conditional,
            _ => CommandKind::Editor,
        }
    }
}

/// Registry of all commands the plugin ships.
pub struct CommandRegistry {
    /// All registered commands.
    commands: Vec<Command>,
}

impl CommandRegistry {
    /// Create a registry with the full command table.
    ///
    /// Ids are frozen, including the historical space-separated
    /// `open curly` and `close curly`.
    pub fn new() -> Self {
        let commands = vec![
            Command {
                id: "open-sample-modal-simple",
                name: "Open sample modal (simple)",
                action: CommandAction::OpenSampleModal,
            },
            Command {
                id: "sample-editor-command",
                name: "Sample editor command",
                action: CommandAction::ReplaceSelectionSample,
            },
            Command {
                id: "open-sample-modal-complex",
                name: "Open sample modal (complex)",
                action: CommandAction::OpenSampleModalChecked,
            },
            Command {
                id: "add-code-block",
                name: "Add code block to file",
                action: CommandAction::InsertCodeBlock,
            },
            Command {
                id: "add-heading1",
                name: "Add H1",
                action: CommandAction::InsertHeading(1),
            },
            Command {
                id: "add-heading2",
                name: "Add H2",
                action: CommandAction::InsertHeading(2),
            },
            Command {
                id: "add-heading3",
                name: "Add H3",
                action: CommandAction::InsertHeading(3),
            },
            Command {
                id: "add-heading4",
                name: "Add H4",
                action: CommandAction::InsertHeading(4),
            },
            Command {
                id: "add-heading5",
                name: "Add H5",
                action: CommandAction::InsertHeading(5),
            },
            Command {
                id: "underline",
                name: "Underline",
                action: CommandAction::Underline,
            },
            Command {
                id: "linebreak",
                name: "add linebreak",
                action: CommandAction::InsertLineBreak,
            },
            Command {
                id: "backslash",
                name: "add a backslash",
                action: CommandAction::InsertBackslash,
            },
            Command {
                id: "open curly",
                name: "add open curly bracket",
                action: CommandAction::InsertOpenCurly,
            },
            Command {
                id: "close curly",
                name: "add close curly bracket",
                action: CommandAction::InsertCloseCurly,
            },
        ];

        Self { commands }
    }

    /// Get all registered commands.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Look up a command by id.
    pub fn get(&self, id: &str) -> Option<&Command> {
        self.commands.iter().find(|command| command.id == id)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_the_full_table() {
        let registry = CommandRegistry::new();
        assert_eq!(registry.commands().len(), 14);
    }

    #[test]
    fn test_ids_are_unique() {
        let registry = CommandRegistry::new();
        let mut ids: Vec<&str> = registry.commands().iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), registry.commands().len());
    }

    #[test]
    fn test_lookup_by_id() {
        let registry = CommandRegistry::new();
        let command = registry.get("add-code-block").unwrap();
        assert_eq!(command.name, "Add code block to file");
        assert_eq!(command.action, CommandAction::InsertCodeBlock);
    }

    #[test]
    fn test_lookup_unknown_id() {
        let registry = CommandRegistry::new();
        assert!(registry.get("does-not-exist").is_none());
    }

    #[test]
    fn test_historical_space_separated_ids_resolve() {
        let registry = CommandRegistry::new();
        assert!(registry.get("open curly").is_some());
        assert!(registry.get("close curly").is_some());
    }

    #[test]
    fn test_heading_levels_one_through_five() {
        let registry = CommandRegistry::new();
        for level in 1..=5u8 {
            let id = format!("add-heading{}", level);
            let command = registry.get(&id).unwrap();
            assert_eq!(command.action, CommandAction::InsertHeading(level));
        }
    }

    #[test]
    fn test_command_kinds() {
        let registry = CommandRegistry::new();

        let kind = |id: &str| registry.get(id).unwrap().action.kind();
        assert_eq!(kind("open-sample-modal-simple"), CommandKind::Global);
        assert_eq!(kind("open-sample-modal-complex"), CommandKind::Conditional);
        assert_eq!(kind("sample-editor-command"), CommandKind::Editor);
        assert_eq!(kind("underline"), CommandKind::Editor);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(CommandKind::Global.display(), "global");
        assert_eq!(CommandKind::Editor.display(), "editor");
        assert_eq!(CommandKind::Conditional.display(), "conditional");
    }
}
