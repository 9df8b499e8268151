//! Session pipeline: terminal setup and the interactive loop.

pub mod session;
pub mod terminal;

pub use session::{Session, SessionEnd};
pub use terminal::{RawModeGuard, query_terminal_config};
