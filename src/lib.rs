//! # bm
//!
//! Terminal bookmark picker. Keeps a small list of absolute paths in
//! `~/.bm`, lets you move through them with the arrow keys, delete with `d`,
//! and on Enter copies `cd '<path>'` (or `ls`/`cat`) to the clipboard.
//!
//! ## Architecture
//!
//! ```text
//! stdin bytes → InputDecoder → InputEvent → Picker (list + cursor) → Renderer
//!                                              │
//!                                         SessionEnd → save → clipboard
//! ```
//!
//! ## Modules
//!
//! - [`input`] - Raw byte decoding (arrows, shift-arrows, Alt, Ctrl-Q)
//! - [`state`] - Bookmark list with cursor, navigation state machine
//! - [`renderer`] - Full-screen redraw of the list
//! - [`pipeline`] - Raw mode guard and the interactive loop
//! - [`store`] - Bookmark file and path normalization
//! - [`clipboard`] - Clipboard sinks
//! - [`config`] - CLI, settings, terminal geometry
//! - [`app`] - Wires it all together

pub mod app;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod input;
pub mod pipeline;
pub mod renderer;
pub mod state;
pub mod store;

pub use app::{Console, Report, run};
pub use error::{BmError, Result};
pub use input::{Direction, InputDecoder, InputEvent};
pub use state::{BookmarkList, Outcome, Picker};
