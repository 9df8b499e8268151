//! The interactive loop.
//!
//! ```text
//! render → decode one event → apply → (continue | end)
//! ```
//!
//! One blocking read per iteration, nothing else suspends. The loop hands
//! back how it ended together with the (possibly edited) bookmark list; the
//! caller owns cleanup.

use std::io::{self, Write};

use crate::input::{ByteSource, InputDecoder};
use crate::renderer::{self, Renderer};
use crate::state::{BookmarkList, Outcome, Picker};

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// `q` or Ctrl-Q.
    Quit,
    /// The last bookmark was deleted.
    Emptied,
    /// Terminal input reached end of file.
    InputClosed,
    /// Enter on this path.
    Selected(String),
}

/// Picker state wired to a byte source and a screen.
pub struct Session<S, W> {
    picker: Picker,
    decoder: InputDecoder<S>,
    renderer: Renderer,
    out: W,
}

impl<S: ByteSource, W: Write> Session<S, W> {
    pub fn new(list: BookmarkList, input: S, renderer: Renderer, out: W) -> Self {
        Self {
            picker: Picker::new(list),
            decoder: InputDecoder::new(input),
            renderer,
            out,
        }
    }

    pub fn list(&self) -> &BookmarkList {
        self.picker.list()
    }

    /// Run until an event ends the session.
    ///
    /// Errors only come from the screen or from a failing byte source;
    /// end of input is a normal [`SessionEnd::InputClosed`].
    pub fn run(&mut self) -> io::Result<SessionEnd> {
        loop {
            self.renderer.render(&mut self.out, self.picker.list())?;
            if self.picker.list().is_empty() {
                return Ok(SessionEnd::Emptied);
            }

            let event = match self.decoder.decode() {
                Ok(event) => event,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    self.clear_screen()?;
                    return Ok(SessionEnd::InputClosed);
                }
                Err(e) => return Err(e),
            };
            log::trace!("input event {event:?}");

            match self.picker.apply(event) {
                Outcome::Continue => {}
                Outcome::Quit => {
                    self.clear_screen()?;
                    return Ok(SessionEnd::Quit);
                }
                Outcome::Select(path) => {
                    self.clear_screen()?;
                    return Ok(SessionEnd::Selected(path));
                }
            }
        }
    }

    /// Give back the list and the screen writer.
    pub fn into_parts(self) -> (BookmarkList, W) {
        (self.picker.into_list(), self.out)
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        renderer::clear(&mut self.out)?;
        self.out.flush()
    }
}
