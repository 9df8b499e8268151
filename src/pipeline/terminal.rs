//! Terminal setup and teardown.
//!
//! Raw mode is held by a guard for the length of the interactive session and
//! released in `Drop`, so it is restored on quit, on error returns, and while
//! unwinding from a panic. Fatal signals never unwind, so while the guard is
//! active a watcher thread restores the terminal and exits with `128 + signal`.
//! The terminal size is read once up front.

use std::io::{self, IsTerminal};
use std::process;
use std::thread;

use crossterm::terminal;
use signal_hook::consts::{SIGHUP, SIGQUIT, SIGTERM};
use signal_hook::iterator::{Handle, Signals};

use crate::config::TerminalConfig;

/// Scoped raw mode.
///
/// Only restores what it changed: if stdin is not a TTY, or raw mode was
/// already on, dropping the guard leaves the terminal alone.
#[derive(Debug)]
pub struct RawModeGuard {
    active: bool,
    signals: Option<Handle>,
}

/// Signals that would end the process with the terminal still raw.
///
/// SIGINT is absent: raw mode clears `ISIG`, so Ctrl-C arrives as a byte.
pub const FATAL_SIGNALS: [i32; 3] = [SIGTERM, SIGHUP, SIGQUIT];

impl RawModeGuard {
    /// Enable raw mode on the controlling terminal.
    pub fn acquire() -> io::Result<Self> {
        let inactive = Self {
            active: false,
            signals: None,
        };

        if !io::stdin().is_terminal() {
            log::warn!("stdin is not a terminal, raw mode not enabled");
            return Ok(inactive);
        }

        if terminal::is_raw_mode_enabled()? {
            return Ok(inactive);
        }

        let signals = watch_fatal_signals()?;
        if let Err(e) = terminal::enable_raw_mode() {
            signals.close();
            return Err(e);
        }
        log::debug!("raw mode enabled");
        Ok(Self {
            active: true,
            signals: Some(signals),
        })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if !self.active {
            return;
        }
        match terminal::disable_raw_mode() {
            Ok(()) => log::debug!("raw mode disabled"),
            Err(e) => log::warn!("failed to restore terminal mode: {e}"),
        }
        if let Some(signals) = self.signals.take() {
            signals.close();
        }
        self.active = false;
    }
}

/// Exit status of a process ended by `signal`, as a shell reports it.
pub fn signal_exit_status(signal: i32) -> i32 {
    128 + signal
}

/// Spawn a thread that restores the terminal and exits on a fatal signal.
///
/// Closing the returned handle stops the thread.
fn watch_fatal_signals() -> io::Result<Handle> {
    let mut signals = Signals::new(FATAL_SIGNALS)?;
    let handle = signals.handle();

    thread::Builder::new()
        .name("bm-signals".to_string())
        .spawn(move || {
            if let Some(signal) = signals.forever().next() {
                let _ = terminal::disable_raw_mode();
                log::debug!("caught signal {signal}, terminal restored");
                process::exit(signal_exit_status(signal));
            }
        })?;

    Ok(handle)
}

/// Query the terminal size, falling back to 80x24.
pub fn query_terminal_config() -> TerminalConfig {
    match terminal::size() {
        Ok((width, height)) if width > 0 && height > 0 => TerminalConfig { width, height },
        Ok((width, height)) => {
            log::warn!("terminal reported size {width}x{height}, assuming 80x24");
            TerminalConfig::FALLBACK
        }
        Err(e) => {
            log::warn!("could not get size of terminal ({e}), assuming 80x24");
            TerminalConfig::FALLBACK
        }
    }
}
