//! Command line and session settings.
//!
//! Everything here is resolved once at startup and then passed down
//! read-only: the copy mode, where bookmarks are stored, and the terminal
//! geometry.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgGroup, CommandFactory, FromArgMatches, Parser};

use crate::error::{BmError, Result};

/// Environment variable that overrides the bookmark file location.
pub const BOOKMARK_FILE_ENV: &str = "BM_FILE";

/// Bookmark file name under the home directory.
pub const BOOKMARK_FILE_NAME: &str = ".bm";

pub const USAGE: &str = "\
Usage: bm [paths...] [options...]
Options:
    --help, -h     - Print this help message
    --controls, -c - Show the controls
    --ls           - Copy `ls '<path>'` on selection
    --cat          - Copy `cat '<path>'` on selection
    --cd           - Copy `cd '<path>'` on selection (default)
If bm is ran with no paths, it will use the ones that have been
previously saved. If none have been saved, make sure to provide
some paths before running bm.";

pub const CONTROLS: &str = "\
Controls:
[UP ARROW]   - up
[DOWN ARROW] - down
d            - delete
q            - quit
[ENTER]      - select

Upon selection, cd <path> will be copied
to the clipboard (xclip on X11, wl-copy on Wayland).
Paste using ctrl+shift+v.";

// =============================================================================
// CLI
// =============================================================================

#[derive(Debug, Parser)]
#[command(
    name = "bm",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true,
    group(ArgGroup::new("mode").multiple(false))
)]
pub struct Cli {
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    #[arg(short = 'c', long = "controls")]
    pub controls: bool,

    #[arg(long, group = "mode")]
    pub ls: bool,

    #[arg(long, group = "mode")]
    pub cat: bool,

    #[arg(long, group = "mode")]
    pub cd: bool,

    /// Paths to bookmark.
    pub paths: Vec<PathBuf>,
}

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print usage and exit with status 1.
    Help,
    /// Print the controls and exit with status 0.
    Controls,
    /// Bookmark `paths`, or open the picker when there are none.
    Run { mode: CopyMode, paths: Vec<PathBuf> },
}

impl Cli {
    pub fn parse_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command()
            .try_get_matches_from(args)
            .map_err(usage_error)?;
        let mut cli = Self::from_arg_matches(&matches).map_err(usage_error)?;

        // Flags act left to right, so the earlier of -h and -c wins.
        if cli.help && cli.controls {
            if matches.index_of("controls") < matches.index_of("help") {
                cli.help = false;
            } else {
                cli.controls = false;
            }
        }
        Ok(cli)
    }

    /// Help or controls (whichever came first) before running.
    pub fn action(self) -> Action {
        if self.help {
            return Action::Help;
        }
        if self.controls {
            return Action::Controls;
        }

        let mode = if self.ls {
            CopyMode::List
        } else if self.cat {
            CopyMode::Show
        } else {
            CopyMode::ChangeDir
        };

        Action::Run {
            mode,
            paths: self.paths,
        }
    }
}

/// Turn a clap error into the one-line message printed after `[Error]: `.
fn usage_error(e: clap::Error) -> BmError {
    if e.kind() == ErrorKind::UnknownArgument {
        if let Some(ContextValue::String(arg)) = e.get(ContextKind::InvalidArg) {
            return BmError::Usage(format!("Unknown option: `{arg}`"));
        }
    }
    let rendered = e.to_string();
    let line = rendered.lines().next().unwrap_or_default();
    BmError::Usage(line.strip_prefix("error: ").unwrap_or(line).to_string())
}

// =============================================================================
// Copy mode
// =============================================================================

/// Which shell command is built around the selected path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CopyMode {
    /// `ls '<path>'`
    List,
    /// `cat '<path>'`
    Show,
    /// `cd '<path>'`
    #[default]
    ChangeDir,
}

impl CopyMode {
    pub fn program(self) -> &'static str {
        match self {
            CopyMode::List => "ls",
            CopyMode::Show => "cat",
            CopyMode::ChangeDir => "cd",
        }
    }

    /// Build the shell command for `path`, single-quoted.
    pub fn command_for(self, path: &str) -> String {
        format!("{} '{}'", self.program(), path.replace('\'', r"'\''"))
    }
}

// =============================================================================
// Settings
// =============================================================================

/// Session-wide settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub mode: CopyMode,
    pub bookmark_file: PathBuf,
}

impl Settings {
    /// Resolve settings from the mode and the process environment.
    pub fn from_env(mode: CopyMode) -> Result<Self> {
        let bookmark_file = bookmark_file(env::var_os(BOOKMARK_FILE_ENV))?;
        Ok(Self {
            mode,
            bookmark_file,
        })
    }
}

/// The user's home directory.
pub fn home_dir() -> Result<PathBuf> {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(BmError::NoHome)
}

/// Bookmark file path: the override if set and non-empty, else `~/.bm`.
pub fn bookmark_file(override_path: Option<OsString>) -> Result<PathBuf> {
    match override_path {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Ok(home_dir()?.join(BOOKMARK_FILE_NAME)),
    }
}

/// Terminal geometry, read once when the session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalConfig {
    pub width: u16,
    pub height: u16,
}

impl TerminalConfig {
    pub const FALLBACK: TerminalConfig = TerminalConfig {
        width: 80,
        height: 24,
    };
}

// =============================================================================
// Tests
// =============================================================================
