//! Raw terminal input: stdin bytes → decoded events.
//!
//! ```text
//! ByteSource (stdin / Cursor) → InputDecoder → InputEvent → Session
//! ```

pub mod parser;
pub mod reader;

pub use parser::{CTRL_Q, Direction, InputDecoder, InputEvent};
pub use reader::ByteSource;
