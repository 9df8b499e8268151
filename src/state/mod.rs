//! State Module - Session state owned by the picker
//!
//! - **Bookmarks** - Ordered path list with a cursor that stays valid
//! - **Selection** - Event → state transition → outcome

mod bookmarks;
mod selection;

pub use bookmarks::*;
pub use selection::*;
