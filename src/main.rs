//! Headless demo harness for the LazyMark plugin.
//!
//! Hosts the plugin against an in-memory scratch host, runs the commands
//! named on the command line, and prints the resulting buffer.

use clap::Parser;
use lazymark::host::{FileStore, Plugin, ScratchHost};
use lazymark::{logging, LazymarkPlugin};

/// Run LazyMark plugin commands against a scratch buffer.
#[derive(Debug, Parser)]
#[command(name = "lazymark", version)]
struct Args {
    /// Command ids to run, in order (see --list).
    commands: Vec<String>,

    /// Initial buffer content.
    #[arg(long, default_value = "")]
    content: String,

    /// List registered commands and exit.
    #[arg(long)]
    list: bool,

    /// Keep plugin data in memory instead of the platform data directory.
    #[arg(long)]
    ephemeral: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    logging::init()?;
    let args = Args::parse();

    let mut host = ScratchHost::with_content(&args.content);
    if !args.ephemeral {
        host.set_store(Box::new(FileStore::new()?));
    }

    let mut plugin = LazymarkPlugin::new();
    plugin.on_load(&mut host).await?;

    if args.list {
        for command in plugin.registry().commands() {
            println!(
                "{:<26} {:<12} {}",
                command.id,
                command.action.kind().display(),
                command.name
            );
        }
        return Ok(());
    }

    for id in &args.commands {
        plugin.run_command(id, &mut host)?;
    }

    println!("{}", host.buffer().content());
    for notice in host.notices() {
        eprintln!("notice: {}", notice);
    }
    if plugin.modal().is_open() {
        eprintln!("modal: {}", plugin.modal().content());
    }

    plugin.on_unload();
    logging::shutdown();
    Ok(())
}
