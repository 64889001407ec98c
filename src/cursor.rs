use alloc::vec;
use alloc::vec::Vec;

/// Result type returned by the cursor operations.
pub type Result<T> = core::result::Result<T, CursorError>;

/// A fixed-size byte buffer and a position within it.
///
/// Reads and writes start at the current position and advance it by the number of bytes
/// consumed or produced. The length of the buffer never changes; the cursor only accesses the
/// buffer through `AsRef<[u8]>` and `AsMut<[u8]>`, so there is no way to grow or shrink it
/// through the cursor.
///
/// `B` is usually `Vec<u8>` (see [`ByteCursor::with_capacity`]), but any owned or borrowed byte
/// container works, e.g. `Box<[u8]>`, `[u8; N]` or `&mut [u8]`. Read-only containers such as
/// `&[u8]` support the `read_*` methods only.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ByteCursor<B = Vec<u8>> {
    buffer: B,
    position: usize,
}

impl<B: AsRef<[u8]>> ByteCursor<B> {
    /// Wraps an existing buffer. The cursor takes ownership of `buffer`; it is not copied.
    /// The position starts at 0.
    pub fn from_buffer(buffer: B) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// Extracts the inner buffer
    pub fn into_inner(self) -> B {
        self.buffer
    }

    /// Accesses the inner buffer
    pub fn get_ref(&self) -> &B {
        &self.buffer
    }

    /// Returns the entire buffer, regardless of the position.
    pub fn as_slice(&self) -> &[u8] {
        self.buffer.as_ref()
    }

    /// The offset at which the next read or write begins.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The total length of the buffer.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.buffer.as_ref().len()
    }

    /// The number of bytes between the position and the end of the buffer.
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.size() - self.position
    }

    /// The bytes between the position and the end of the buffer.
    pub fn remaining_slice(&self) -> &[u8] {
        &self.buffer.as_ref()[self.position..]
    }

    /// Moves the cursor to `position`.
    ///
    /// Fails with [`CursorError::OutOfRange`] if `position >= self.size()`. Note that this
    /// rejects seeking exactly to the end of the buffer, even though a read or write that
    /// consumes the last byte leaves the cursor there. Existing callers depend on this range
    /// check, so it is kept as-is.
    pub fn seek(&mut self, position: usize) -> Result<&mut Self> {
        if position >= self.size() {
            return Err(CursorError::OutOfRange);
        }
        self.position = position;
        Ok(self)
    }

    /// Checks that `len` bytes are available at the position and returns the range covering
    /// them. Does not move the cursor.
    #[inline(always)]
    pub(crate) fn span(&self, len: usize) -> Result<core::ops::Range<usize>> {
        match self.position.checked_add(len) {
            Some(end) if end <= self.size() => Ok(self.position..end),
            _ => Err(CursorError::OutOfBounds),
        }
    }

    /// Moves the cursor forward by `len` bytes. The caller must have checked the range with
    /// `span`.
    #[inline(always)]
    pub(crate) fn advance(&mut self, len: usize) {
        debug_assert!(len <= self.remaining());
        self.position += len;
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> ByteCursor<B> {
    /// Returns the entire buffer as a mutable slice. The slice cannot be resized, so the
    /// length of the buffer stays fixed.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        self.buffer.as_mut()
    }
}

impl ByteCursor<Vec<u8>> {
    /// Allocates a zero-filled buffer of `size` bytes. The position starts at 0.
    pub fn with_capacity(size: usize) -> Self {
        Self::from_buffer(vec![0; size])
    }
}

/// Error type for `ByteCursor`
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum CursorError {
    /// A read or write would run past the end of the buffer.
    ///
    /// Fixed-width reads and writes check the bounds before touching the buffer, so they fail
    /// without side effects. Operations that are composed of several steps, such as writing
    /// length-prefixed text, _do not_ roll back the steps that already succeeded.
    OutOfBounds,

    /// A seek to a position at or past the end of the buffer.
    OutOfRange,

    /// A length prefix read from the buffer is negative, or the encoded length of a string is
    /// too large to be stored in an `i32` length prefix.
    InvalidLength,
}

impl core::error::Error for CursorError {}

impl core::fmt::Display for CursorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("Not enough bytes remain in the buffer"),
            Self::OutOfRange => f.write_str("Position is out of range"),
            Self::InvalidLength => f.write_str("The length prefix is invalid"),
        }
    }
}
