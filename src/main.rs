//! todo - interactive command-line to-do list

use anyhow::Result;
use todo_cli::cli;
use todo_cli::config::Config;
use todo_cli::logging;

fn main() -> Result<()> {
    logging::init();

    if let Err(e) = cli::parse_args(std::env::args_os()) {
        e.exit();
    }

    cli::run(&Config::default())
}
