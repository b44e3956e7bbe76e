//! # termpad Main Entry Point
//!
//! Raw-mode terminal text editor.

use anyhow::Result;
use std::path::Path;
use termpad::cmd_args::CommandLineArgs;
use termpad::{config, logging};

fn main() -> Result<()> {
    let args = CommandLineArgs::parse();

    let log_path = args
        .log_file()
        .map(Path::to_path_buf)
        .or_else(config::get_log_path);
    logging::init(log_path.as_deref())?;

    termpad::run(&args)
}
