//! Screen rendering for the picker.
//!
//! Every frame is a full redraw: clear, home, a status row with the entry
//! count and the command a selection would copy, then one row per visible
//! bookmark with the cursor row in reverse video. Output is queued and flushed once per
//! frame. Lines end in `\r\n` because raw mode turns off output
//! post-processing.

pub mod text;

use std::io::{self, Write};
use std::ops::Range;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{Clear, ClearType};

use crate::config::{CopyMode, TerminalConfig};
use crate::state::BookmarkList;

pub use text::{ELLIPSIS, truncate_text};

/// Message shown once the last bookmark is deleted.
pub const EMPTY_MESSAGE: &str = "No entries";

/// Draws the bookmark list for a fixed terminal size.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    config: TerminalConfig,
    mode: CopyMode,
}

impl Renderer {
    pub fn new(config: TerminalConfig, mode: CopyMode) -> Self {
        Self { config, mode }
    }

    /// Usable columns. The last column is left free so a full-width row
    /// never triggers autowrap.
    pub fn columns(&self) -> usize {
        usize::from(self.config.width.saturating_sub(1).max(1))
    }

    /// Rows available for entries: the status row takes the first line and
    /// the last line is left free for the same reason as the last column.
    pub fn rows(&self) -> usize {
        usize::from(self.config.height.saturating_sub(2).max(1))
    }

    /// `N Directories, selection: cd '<path>'`
    pub fn status_line(&self, list: &BookmarkList) -> String {
        let selection = self.mode.command_for(list.selected().unwrap_or_default());
        format!("{} Directories, selection: {selection}", list.len())
    }

    /// Redraw the whole list.
    pub fn render<W: Write>(&self, out: &mut W, list: &BookmarkList) -> io::Result<()> {
        clear(out)?;

        if list.is_empty() {
            queue!(out, Print(EMPTY_MESSAGE), Print("\r\n"))?;
            return out.flush();
        }

        let paths = list.paths();
        let cursor = list.cursor();
        let columns = self.columns();

        let status = self.status_line(list);
        queue!(out, Print(truncate_text(&status, columns, ELLIPSIS)), Print("\r\n"))?;

        for index in visible_range(paths.len(), cursor, self.rows()) {
            let row = truncate_text(&paths[index], columns, ELLIPSIS);
            if Some(index) == cursor {
                queue!(
                    out,
                    SetAttribute(Attribute::Reverse),
                    Print(row),
                    SetAttribute(Attribute::Reset),
                )?;
            } else {
                queue!(out, Print(row))?;
            }
            queue!(out, Print("\r\n"))?;
        }

        out.flush()
    }
}

/// Clear the screen and home the cursor.
pub fn clear<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))
}

/// Window of `rows` entries out of `len` that keeps `cursor` on screen.
///
/// The cursor sits on the last visible row once it scrolls past the first
/// page.
pub fn visible_range(len: usize, cursor: Option<usize>, rows: usize) -> Range<usize> {
    if len <= rows {
        return 0..len;
    }
    let cursor = cursor.unwrap_or(0).min(len - 1);
    let start = (cursor + 1).saturating_sub(rows);
    start..start + rows
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const REVERSE: &str = "\x1b[7m";

    fn list(paths: &[&str]) -> BookmarkList {
        BookmarkList::from_paths(paths.iter().map(|p| p.to_string()))
    }

    fn render(list: &BookmarkList, width: u16, height: u16) -> String {
        render_in(list, width, height, CopyMode::ChangeDir)
    }

    fn render_in(list: &BookmarkList, width: u16, height: u16, mode: CopyMode) -> String {
        let renderer = Renderer::new(TerminalConfig { width, height }, mode);
        let mut out = Vec::new();
        renderer.render(&mut out, list).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_visible_range_fits() {
        assert_eq!(visible_range(3, Some(2), 10), 0..3);
        assert_eq!(visible_range(0, None, 10), 0..0);
    }

    #[test]
    fn test_visible_range_scrolls_with_cursor() {
        assert_eq!(visible_range(10, Some(0), 4), 0..4);
        assert_eq!(visible_range(10, Some(3), 4), 0..4);
        assert_eq!(visible_range(10, Some(4), 4), 1..5);
        assert_eq!(visible_range(10, Some(9), 4), 6..10);
    }

    #[test]
    fn test_render_highlights_cursor_row() {
        let mut l = list(&["/a", "/b"]);
        l.select_down();
        let screen = render(&l, 80, 24);

        assert!(screen.starts_with("\x1b[2J"));
        assert!(screen.contains("/a\r\n"));
        assert!(screen.contains(&format!("{REVERSE}/b")));
        assert!(!screen.contains(&format!("{REVERSE}/a")));
    }

    #[test]
    fn test_render_truncates_to_width() {
        let l = list(&["/very/long/path/name"]);
        let screen = render(&l, 9, 24);
        assert!(screen.contains("/very/l…"));
        assert!(!screen.contains("/very/long"));
    }

    #[test]
    fn test_render_scrolls() {
        let mut l = list(&["/0", "/1", "/2", "/3", "/4"]);
        for _ in 0..4 {
            l.select_down();
        }
        // Status row plus two entry rows.
        let screen = render(&l, 80, 4);
        assert!(!screen.contains("/2\r\n"));
        assert!(screen.contains("/3\r\n"));
        assert!(screen.contains(&format!("{REVERSE}/4")));
    }

    #[test]
    fn test_render_status_line_first() {
        let l = list(&["/a", "/b"]);
        let screen = render(&l, 80, 24);
        assert!(screen.contains("2 Directories, selection: cd '/a'"));

        let status = screen.find("Directories").unwrap();
        let first_entry = screen.find(REVERSE).unwrap();
        assert!(status < first_entry);
    }

    #[test]
    fn test_status_line_follows_mode_and_cursor() {
        let mut l = list(&["/a", "/b", "/c"]);
        l.select_down();
        let screen = render_in(&l, 80, 24, CopyMode::Show);
        assert!(screen.contains("3 Directories, selection: cat '/b'"));
    }

    #[test]
    fn test_status_line_leaves_room_for_one_entry() {
        let l = list(&["/a", "/b"]);
        let renderer = Renderer::new(TerminalConfig { width: 80, height: 2 }, CopyMode::ChangeDir);
        assert_eq!(renderer.rows(), 1);

        let screen = render(&l, 80, 2);
        assert!(screen.contains("/a"));
        assert!(!screen.contains("/b\r\n"));
    }

    #[test]
    fn test_render_empty() {
        let screen = render(&BookmarkList::new(), 80, 24);
        assert!(screen.contains(EMPTY_MESSAGE));
    }
}
