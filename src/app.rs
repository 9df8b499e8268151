//! Top-level flow: load, add, pick, persist.
//!
//! ```text
//! load bookmarks → add CLI paths ─┬─ paths given → save, report
//!                                 └─ none given  → raw mode → session
//!                                                   → save (always) → restore
//!                                                   → copy selection
//! ```

use std::io::Write;
use std::path::PathBuf;

use crate::clipboard::ClipboardSink;
use crate::config::{Settings, TerminalConfig};
use crate::error::{BmError, Result};
use crate::input::ByteSource;
use crate::pipeline::{RawModeGuard, Session, SessionEnd};
use crate::renderer::Renderer;
use crate::state::BookmarkList;
use crate::store;

/// Terminal handles for a run.
pub struct Console<S, W> {
    pub input: S,
    pub output: W,
    pub terminal: TerminalConfig,
    /// Put the terminal in raw mode for the session.
    pub raw_mode: bool,
}

/// What a run did, for the caller to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// New paths were added. Holds the whole saved list.
    Bookmarked(Vec<String>),
    /// The session ended without a selection.
    Quit,
    /// Every bookmark was deleted during the session.
    Emptied,
    /// A bookmark was picked and its command built.
    Selected { command: String, copied: bool },
}

/// Run bm with already-resolved settings.
///
/// `new_paths` are the positional arguments. When there are any, they are
/// bookmarked and the picker is skipped.
pub fn run<S, W, C>(
    settings: &Settings,
    new_paths: &[PathBuf],
    console: Console<S, W>,
    clipboard: &mut C,
) -> Result<Report>
where
    S: ByteSource,
    W: Write,
    C: ClipboardSink,
{
    let mut list = BookmarkList::from_paths(store::load_paths(&settings.bookmark_file));

    for raw in new_paths {
        let path = store::to_absolute(raw)?;
        if !list.insert(path.clone()) {
            log::debug!("{path} is already bookmarked");
        }
    }

    if list.is_empty() {
        return Err(BmError::NoBookmarks);
    }

    let Console {
        input,
        mut output,
        terminal,
        raw_mode,
    } = console;

    if !new_paths.is_empty() {
        store::save_paths(&settings.bookmark_file, list.paths())?;
        for path in list.paths() {
            writeln!(output, "Bookmarked {path}")?;
        }
        output.flush()?;
        return Ok(Report::Bookmarked(list.into_paths()));
    }

    let (end, mut output) = run_session(settings, list, input, output, terminal, raw_mode)?;
    log::debug!("session ended: {end:?}");

    let report = match end {
        SessionEnd::Quit | SessionEnd::InputClosed => Report::Quit,
        SessionEnd::Emptied => Report::Emptied,
        SessionEnd::Selected(path) => {
            let command = settings.mode.command_for(&path);
            let copied = clipboard.copy(&command);
            if copied {
                writeln!(output, "copied: {command} to the clipboard")?;
            } else {
                writeln!(output, "could not copy to the clipboard: {command}")?;
            }
            output.flush()?;
            Report::Selected { command, copied }
        }
    };
    Ok(report)
}

/// Raw mode + loop + save, with the save and terminal restore on every exit.
fn run_session<S, W>(
    settings: &Settings,
    list: BookmarkList,
    input: S,
    output: W,
    terminal: TerminalConfig,
    raw_mode: bool,
) -> Result<(SessionEnd, W)>
where
    S: ByteSource,
    W: Write,
{
    let guard = if raw_mode {
        Some(RawModeGuard::acquire()?)
    } else {
        None
    };

    let mut session = Session::new(list, input, Renderer::new(terminal, settings.mode), output);
    let result = session.run();
    let (list, output) = session.into_parts();

    let saved = store::save_paths(&settings.bookmark_file, list.paths());
    drop(guard);

    let end = result?;
    saved?;
    Ok((end, output))
}
