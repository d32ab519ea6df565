//! LazyMark - a starter template for editor plugins
//!
//! The crate ships three pieces:
//! - the host API contract the plugin is written against ([`host`])
//! - a reference plugin registering markdown formatting commands and one
//!   persisted setting ([`plugin`])
//! - in-memory host implementations backing the tests and the demo binary
//!
//! ```no_run
//! use lazymark::host::{Plugin, ScratchHost};
//! use lazymark::LazymarkPlugin;
//!
//! # async fn demo() -> lazymark::Result<()> {
//! let mut host = ScratchHost::new();
//! let mut plugin = LazymarkPlugin::new();
//!
//! plugin.on_load(&mut host).await?;
//! plugin.run_command("add-heading1", &mut host)?;
//! assert_eq!(host.buffer().content(), "# ");
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod host;
pub mod logging;
pub mod plugin;
pub mod ui;

pub use error::{PluginError, Result};
pub use plugin::LazymarkPlugin;
