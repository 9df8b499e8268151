//! Clipboard Module - Hand the selected command to the system clipboard
//!
//! # Features
//!
//! - Pipes text into an external clipboard tool (`wl-copy` on Wayland,
//!   `xclip -selection clipboard` elsewhere)
//! - Failures are logged, never fatal: the session still ends normally
//! - In-memory sink for tests and headless runs
//!
//! # Example
//!
//! ```ignore
//! use bm::clipboard::{ClipboardSink, ShellClipboard};
//!
//! let mut clipboard = ShellClipboard::detect();
//! if clipboard.copy("cd '/srv/www'") {
//!     println!("copied");
//! }
//! ```

use std::env;
use std::io::{self, Write};
use std::process::{Command, Stdio};

// =============================================================================
// Sink trait
// =============================================================================

/// Destination for the selected command.
pub trait ClipboardSink {
    /// Copy `text`. Returns whether it actually landed on the clipboard.
    fn copy(&mut self, text: &str) -> bool;
}

// =============================================================================
// External tool
// =============================================================================

/// Clipboard backed by an external program reading from stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellClipboard {
    program: String,
    args: Vec<String>,
}

impl ShellClipboard {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Pick the tool for the current display server.
    pub fn detect() -> Self {
        let wayland = env::var_os("WAYLAND_DISPLAY").is_some_and(|v| !v.is_empty());
        if wayland {
            Self::new("wl-copy", &[])
        } else {
            Self::new("xclip", &["-selection", "clipboard"])
        }
    }

    fn pipe(&self, text: &str) -> io::Result<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        // Dropping stdin closes the pipe so the tool sees EOF.
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }

        let status = child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(io::Error::new(
                io::ErrorKind::Other,
                format!("{} exited with {status}", self.program),
            ))
        }
    }
}

impl ClipboardSink for ShellClipboard {
    fn copy(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        match self.pipe(text) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("failed to copy to clipboard via {}: {e}", self.program);
                false
            }
        }
    }
}

// =============================================================================
// In-memory buffer
// =============================================================================

/// Clipboard that keeps copied text in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently copied text.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn copy(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        self.contents = Some(text.to_string());
        true
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_copy() {
        let mut clip = MemoryClipboard::new();
        assert!(clip.copy("cd '/a'"));
        assert_eq!(clip.contents(), Some("cd '/a'"));
    }

    #[test]
    fn test_memory_ignores_empty() {
        let mut clip = MemoryClipboard::new();
        assert!(!clip.copy(""));
        assert_eq!(clip.contents(), None);
    }

    #[test]
    fn test_missing_tool_degrades() {
        let mut clip = ShellClipboard::new("bm-no-such-clipboard-tool", &[]);
        assert!(!clip.copy("cd '/a'"));
    }

    #[cfg(unix)]
    #[test]
    fn test_pipes_into_tool() {
        // `cat` reads stdin to EOF and exits 0.
        let mut clip = ShellClipboard::new("cat", &[]);
        assert!(clip.copy("ls '/tmp'"));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_tool_degrades() {
        let mut clip = ShellClipboard::new("false", &[]);
        assert!(!clip.copy("ls '/tmp'"));
    }
}
