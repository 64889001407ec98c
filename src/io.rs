//! `std::io` adapters, so a `ByteCursor` can be handed to code written against `Read` and
//! `Write`. These never touch anything outside the buffer.

use std::io;

use crate::{ByteCursor, CursorError};

impl From<CursorError> for io::Error {
    fn from(e: CursorError) -> Self {
        let kind = match e {
            CursorError::OutOfBounds => io::ErrorKind::UnexpectedEof,
            CursorError::OutOfRange => io::ErrorKind::InvalidInput,
            CursorError::InvalidLength => io::ErrorKind::InvalidData,
        };
        io::Error::new(kind, e)
    }
}

impl<B: AsRef<[u8]>> io::Read for ByteCursor<B> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(self.remaining());
        buf[..n].copy_from_slice(self.read_bytes(n)?);
        Ok(n)
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> io::Result<()> {
        buf.copy_from_slice(self.read_bytes(buf.len())?);
        Ok(())
    }
}

impl<B: AsRef<[u8]>> io::BufRead for ByteCursor<B> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Ok(self.remaining_slice())
    }

    fn consume(&mut self, amt: usize) {
        self.advance(amt.min(self.remaining()));
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> io::Write for ByteCursor<B> {
    /// Writes as many bytes as fit. Returns `Ok(0)` once the buffer is full.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = buf.len().min(self.remaining());
        self.write_bytes(&buf[..n])?;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
