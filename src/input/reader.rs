//! Byte sources for the decoder.
//!
//! The decoder pulls one byte per blocking read. Any `io::Read` works as a
//! source: locked stdin in the binary, `io::Cursor` in tests.

use std::io::{self, Read};

/// Blocking, one-byte-at-a-time input.
pub trait ByteSource {
    /// Block until one byte is available.
    ///
    /// End of input is reported as `ErrorKind::UnexpectedEof`.
    fn read_byte(&mut self) -> io::Result<u8>;
}

impl<R: Read> ByteSource for R {
    fn read_byte(&mut self) -> io::Result<u8> {
        let mut buf = [0u8; 1];
        loop {
            match self.read(&mut buf) {
                Ok(0) => {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "terminal input closed",
                    ));
                }
                Ok(_) => return Ok(buf[0]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}
