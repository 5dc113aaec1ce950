//! CLI entry points

pub mod command;
pub mod handlers;
pub mod repl;

pub use command::{Command, ParseError};

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::io;
use tracing::debug;

use crate::config::Config;
use crate::task::TaskStore;

/// todo - interactive to-do list kept in tasks.json
///
/// Takes no options; everything happens at the prompt.
#[derive(Parser)]
#[command(name = "todo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {}

/// Parse startup arguments. Stray arguments are ignored like the rest of the
/// command line; `--help` and `--version` still come back as errors for the
/// caller to display.
pub fn parse_args<I, T>(args: I) -> std::result::Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Err(e) if e.kind() == ErrorKind::UnknownArgument => {
            debug!("Ignoring startup arguments: {}", e);
            Ok(Cli {})
        }
        other => other,
    }
}

/// Load the task file named by `config` and run the prompt on stdin/stdout.
pub fn run(config: &Config) -> Result<()> {
    let mut store = TaskStore::open(&config.tasks_file);
    debug!(
        "Opened {} with {} tasks",
        store.path().display(),
        store.tasks().len()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl::run(&mut store, stdin.lock(), &mut stdout)?;
    Ok(())
}
