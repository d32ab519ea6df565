//! Centralized error types for LazyMark.
//!
//! The plugin has no error taxonomy of its own beyond what the host
//! contract forces on it: storage reads and writes can fail, command ids
//! can be unknown, and an editor command can be invoked without an active
//! editing surface. All error types use `thiserror` for ergonomic error
//! handling; failures propagate to the host unhandled.

use thiserror::Error;

/// The main plugin error type.
#[derive(Debug, Error)]
pub enum PluginError {
    /// The host storage backend failed to read or write plugin data.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Persisted plugin data could not be encoded or decoded.
    #[error("plugin data error: {0}")]
    Data(#[from] serde_json::Error),

    /// An editor command was invoked without an active editing surface.
    ///
    /// This is a host-contract violation: the host is expected to supply
    /// an editor for editor commands. The plugin does not guard against it
    /// beyond the conditional command's check.
    #[error("no active editor")]
    NoActiveEditor,

    /// A command id that was never registered.
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
}

/// Result type for plugin operations.
pub type Result<T> = std::result::Result<T, PluginError>;
