//! # Application Wiring
//!
//! Connects the production collaborators to the controller and owns the raw-mode
//! session for the lifetime of the editor.

use crate::cmd_args::CommandLineArgs;
use crate::config::HELP_MESSAGE;
use crate::editor::controllers::EditController;
use crate::editor::input::KeyDecoder;
use crate::editor::io::{
    terminal_size, FileStorage, StdinByteStream, TerminalSession, TerminalWriter,
};
use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

/// Run the editor on the real terminal until the user quits
///
/// Raw mode is restored before this returns, whether the editor quit normally or
/// stopped on a fatal error. The error, if any, is returned for the caller to report.
pub fn run(args: &CommandLineArgs) -> Result<()> {
    let mut session = TerminalSession::acquire()?;

    let result = run_editor(args);
    if let Err(e) = &result {
        tracing::error!("fatal: {e:#}");
        // Leave a clean screen behind for the message printed after raw mode ends
        if let Ok(mut out) = TerminalWriter::new() {
            let _ = execute!(out, Clear(ClearType::All), MoveTo(0, 0));
        }
    }

    let released = session.release();
    result.and(released)
}

fn run_editor(args: &CommandLineArgs) -> Result<()> {
    let screen = terminal_size()?;
    tracing::debug!("text area {}x{}", screen.width, screen.height);

    let mut editor = EditController::new(
        screen,
        KeyDecoder::new(StdinByteStream::new()),
        TerminalWriter::new()?,
        Box::new(FileStorage::new()),
    );

    if let Some(path) = args.filename() {
        editor.open(path)?;
    }
    editor.state_mut().set_status_message(HELP_MESSAGE);

    editor.run()
}
