//! Escape sequence decoder for raw terminal input.
//!
//! Turns raw stdin bytes into one structured event per call:
//! - CSI arrow keys (`ESC [ A..D`)
//! - Shift-modified arrows (`ESC [ 1 ; 2 A..D`)
//! - Alt+key (ESC + any byte other than `[`)
//! - The quit control key (Ctrl-Q)
//! - Everything else as a plain byte
//!
//! Reads are blocking and nothing is buffered between calls. A sequence that
//! starts like an escape but cannot be parsed is consumed and reported as
//! [`InputEvent::Unknown`], so the next call always starts on a fresh byte.

use std::io;

use super::reader::ByteSource;

// =============================================================================
// Constants
// =============================================================================

/// Escape byte.
pub const ESC: u8 = 0x1B;

/// Second byte of a Control Sequence Introducer.
pub const CSI: u8 = b'[';

/// Ctrl-Q.
pub const CTRL_Q: u8 = 17;

/// Parameter separator inside a modified CSI sequence.
const PARAM_SEP: u8 = b';';

/// Modifier parameter for Shift (`1 + 1`).
const SHIFT_MODIFIER: u8 = b'2';

/// Longest numeric parameter accepted before giving up on a sequence.
const MAX_PARAM_DIGITS: usize = 4;

// =============================================================================
// Types
// =============================================================================

/// Arrow key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Map a CSI final byte to a direction (A=Up, B=Down, C=Right, D=Left).
    pub fn from_final_byte(byte: u8) -> Option<Self> {
        match byte {
            b'A' => Some(Direction::Up),
            b'B' => Some(Direction::Down),
            b'C' => Some(Direction::Right),
            b'D' => Some(Direction::Left),
            _ => None,
        }
    }
}

/// A decoded input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Control character with a dedicated meaning (only Ctrl-Q today).
    Control(u8),
    /// ESC followed by a byte that does not start a CSI sequence.
    Alt(u8),
    Arrow(Direction),
    ShiftArrow(Direction),
    /// Any byte that is not part of an escape sequence.
    Normal(u8),
    /// Escape sequence that was consumed but not understood.
    Unknown,
}

// =============================================================================
// Decoder
// =============================================================================

/// Blocking input decoder.
///
/// Owns its byte source. Each [`decode`](Self::decode) call reads as many
/// bytes as it needs to settle on exactly one event.
pub struct InputDecoder<S> {
    source: S,
}

impl<S: ByteSource> InputDecoder<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Read and classify one event.
    ///
    /// Only fails when the byte source fails (including end of input).
    pub fn decode(&mut self) -> io::Result<InputEvent> {
        let first = self.source.read_byte()?;

        match first {
            ESC => self.decode_escape(),
            CTRL_Q => Ok(InputEvent::Control(first)),
            _ => Ok(InputEvent::Normal(first)),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn decode_escape(&mut self) -> io::Result<InputEvent> {
        let next = self.source.read_byte()?;
        if next != CSI {
            return Ok(InputEvent::Alt(next));
        }
        self.decode_csi()
    }

    fn decode_csi(&mut self) -> io::Result<InputEvent> {
        let byte = self.source.read_byte()?;

        if byte.is_ascii_digit() {
            return self.decode_modified();
        }

        Ok(Direction::from_final_byte(byte)
            .map(InputEvent::Arrow)
            .unwrap_or(InputEvent::Unknown))
    }

    /// `ESC [ <digits> ; <modifier> <final>`, first digit already consumed.
    ///
    /// Consumes the digit run plus the byte that ends it. Only a `;` there
    /// leads to reading the modifier and final byte.
    fn decode_modified(&mut self) -> io::Result<InputEvent> {
        let mut digits = 1;
        let terminator = loop {
            if digits == MAX_PARAM_DIGITS {
                return Ok(InputEvent::Unknown);
            }
            let byte = self.source.read_byte()?;
            if !byte.is_ascii_digit() {
                break byte;
            }
            digits += 1;
        };

        if terminator != PARAM_SEP {
            return Ok(InputEvent::Unknown);
        }

        let modifier = self.source.read_byte()?;
        let final_byte = self.source.read_byte()?;

        if modifier != SHIFT_MODIFIER {
            return Ok(InputEvent::Unknown);
        }

        Ok(Direction::from_final_byte(final_byte)
            .map(InputEvent::ShiftArrow)
            .unwrap_or(InputEvent::Unknown))
    }
}

// =============================================================================
// Tests
// =============================================================================
