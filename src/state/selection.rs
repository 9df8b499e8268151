//! Selection Module - Navigation state machine
//!
//! Applies decoded input events to the bookmark list. Each call returns an
//! [`Outcome`] telling the session loop whether to keep going.
//!
//! | Event              | Effect                          |
//! |--------------------|---------------------------------|
//! | Ctrl-Q             | quit                            |
//! | Up / Down          | move cursor, wrapping           |
//! | `q`                | quit                            |
//! | `d`                | delete entry under cursor       |
//! | Enter              | select entry under cursor, quit |
//! | anything else      | ignored                         |

use crate::input::{CTRL_Q, Direction, InputEvent};

use super::bookmarks::BookmarkList;

const KEY_QUIT: u8 = b'q';
const KEY_DELETE: u8 = b'd';

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading input.
    Continue,
    /// End the session without a selection.
    Quit,
    /// End the session, emitting this path.
    Select(String),
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Continue)
    }
}

/// Enter arrives as `\n` or `\r` depending on the terminal's input flags.
fn is_enter(byte: u8) -> bool {
    byte == b'\n' || byte == b'\r'
}

/// The picker's state: the bookmark list it owns for the whole session.
#[derive(Debug, Clone, Default)]
pub struct Picker {
    list: BookmarkList,
}

impl Picker {
    pub fn new(list: BookmarkList) -> Self {
        Self { list }
    }

    pub fn list(&self) -> &BookmarkList {
        &self.list
    }

    pub fn into_list(self) -> BookmarkList {
        self.list
    }

    /// Apply one event.
    pub fn apply(&mut self, event: InputEvent) -> Outcome {
        match event {
            InputEvent::Control(CTRL_Q) => Outcome::Quit,
            InputEvent::Arrow(Direction::Up) => {
                self.list.select_up();
                Outcome::Continue
            }
            InputEvent::Arrow(Direction::Down) => {
                self.list.select_down();
                Outcome::Continue
            }
            InputEvent::Normal(KEY_QUIT) => Outcome::Quit,
            InputEvent::Normal(KEY_DELETE) => {
                if let Some(removed) = self.list.remove_selected() {
                    log::debug!("removed bookmark {removed}");
                }
                Outcome::Continue
            }
            InputEvent::Normal(byte) if is_enter(byte) => match self.list.selected() {
                Some(path) => Outcome::Select(path.to_string()),
                None => Outcome::Continue,
            },
            InputEvent::Control(_)
            | InputEvent::Arrow(_)
            | InputEvent::ShiftArrow(_)
            | InputEvent::Alt(_)
            | InputEvent::Normal(_)
            | InputEvent::Unknown => Outcome::Continue,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn picker(paths: &[&str]) -> Picker {
        Picker::new(BookmarkList::from_paths(paths.iter().map(|p| p.to_string())))
    }

    #[test]
    fn test_quit_keys() {
        let mut p = picker(&["/a"]);
        assert_eq!(p.apply(InputEvent::Control(CTRL_Q)), Outcome::Quit);
        assert_eq!(p.apply(InputEvent::Normal(b'q')), Outcome::Quit);
        assert_eq!(p.list().paths(), ["/a"]);
    }

    #[test]
    fn test_arrows_wrap() {
        let mut p = picker(&["/a", "/b", "/c"]);
        assert_eq!(p.apply(InputEvent::Arrow(Direction::Up)), Outcome::Continue);
        assert_eq!(p.list().cursor(), Some(2));
        p.apply(InputEvent::Arrow(Direction::Down));
        assert_eq!(p.list().cursor(), Some(0));
    }

    #[test]
    fn test_reserved_events_change_nothing() {
        let mut p = picker(&["/a", "/b"]);
        let before = p.list().clone();
        for event in [
            InputEvent::Alt(b'x'),
            InputEvent::ShiftArrow(Direction::Up),
            InputEvent::ShiftArrow(Direction::Down),
            InputEvent::Arrow(Direction::Left),
            InputEvent::Arrow(Direction::Right),
            InputEvent::Control(3),
            InputEvent::Normal(b'x'),
            InputEvent::Unknown,
        ] {
            assert_eq!(p.apply(event), Outcome::Continue);
        }
        assert_eq!(p.list(), &before);
    }

    #[test]
    fn test_enter_selects_current() {
        let mut p = picker(&["/a", "/b"]);
        p.apply(InputEvent::Arrow(Direction::Down));
        assert_eq!(
            p.apply(InputEvent::Normal(b'\n')),
            Outcome::Select("/b".to_string())
        );
        assert_eq!(
            p.apply(InputEvent::Normal(b'\r')),
            Outcome::Select("/b".to_string())
        );
    }

    #[test]
    fn test_delete_then_enter_on_empty() {
        let mut p = picker(&["/a"]);
        assert_eq!(p.apply(InputEvent::Normal(b'd')), Outcome::Continue);
        assert!(p.list().is_empty());
        assert_eq!(p.apply(InputEvent::Normal(b'd')), Outcome::Continue);
        assert_eq!(p.apply(InputEvent::Normal(b'\n')), Outcome::Continue);
    }

    #[test]
    fn test_navigate_delete_select_scenario() {
        let mut p = picker(&["/a", "/b", "/c"]);
        p.apply(InputEvent::Arrow(Direction::Down));
        p.apply(InputEvent::Arrow(Direction::Down));
        assert_eq!(p.list().cursor(), Some(2));

        p.apply(InputEvent::Normal(b'd'));
        assert_eq!(p.list().paths(), ["/a", "/b"]);
        assert_eq!(p.list().cursor(), Some(1));

        p.apply(InputEvent::Arrow(Direction::Up));
        assert_eq!(p.list().cursor(), Some(0));

        let outcome = p.apply(InputEvent::Normal(b'\n'));
        assert!(outcome.is_terminal());
        assert_eq!(outcome, Outcome::Select("/a".to_string()));
    }
}
