use crate::{ByteCursor, CursorError, Result, TextEncoding};

/// Write operations. Each one writes at the position and advances it by the number of bytes
/// produced. Each returns the cursor, so that writes can be chained:
///
/// ```
/// # use byte_cursor::ByteCursor;
/// let mut c = ByteCursor::with_capacity(16);
/// c.write_bool(true)?.write_i8(42)?.write_i16(117)?;
/// assert_eq!(c.position(), 4);
/// # Ok::<(), byte_cursor::CursorError>(())
/// ```
///
/// Fixed-width writes fail with [`CursorError::OutOfBounds`] if there is not enough space left
/// for the value. In that case, neither the buffer nor the position is changed.
impl<B: AsRef<[u8]> + AsMut<[u8]>> ByteCursor<B> {
    /// Writes `bytes` to the buffer.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<&mut Self> {
        let span = self.span(bytes.len())?;
        self.as_mut_slice()[span].copy_from_slice(bytes);
        self.advance(bytes.len());
        Ok(self)
    }

    /// Writes a small, fixed-size array of bytes.
    #[inline(always)]
    pub fn write_cbytes<const N: usize>(&mut self, value: [u8; N]) -> Result<&mut Self> {
        self.write_bytes(&value)
    }

    /// Writes a `bool` value. True is encoded as 1. False is encoded as 0.
    pub fn write_bool(&mut self, value: bool) -> Result<&mut Self> {
        self.write_u8(value as u8)
    }

    /// Writes a single `u8` value
    pub fn write_u8(&mut self, value: u8) -> Result<&mut Self> {
        self.write_cbytes([value])
    }

    /// Writes a single `i8` value
    pub fn write_i8(&mut self, value: i8) -> Result<&mut Self> {
        self.write_cbytes(value.to_be_bytes())
    }

    /// Writes a single `i16` value
    pub fn write_i16(&mut self, value: i16) -> Result<&mut Self> {
        self.write_cbytes(value.to_be_bytes())
    }

    /// Writes a UTF-16 code unit. This writes the same bits as `write_i16`.
    ///
    /// To write a `char`, convert it first, e.g. with `char::encode_utf16`.
    pub fn write_char16(&mut self, value: u16) -> Result<&mut Self> {
        self.write_i16(value as i16)
    }

    /// Writes a single `i32` value
    pub fn write_i32(&mut self, value: i32) -> Result<&mut Self> {
        self.write_cbytes(value.to_be_bytes())
    }

    /// Writes a single `i64` value
    pub fn write_i64(&mut self, value: i64) -> Result<&mut Self> {
        self.write_cbytes(value.to_be_bytes())
    }

    /// Writes an `f32` value, using the bits of its IEEE-754 representation as a `write_i32`.
    pub fn write_f32(&mut self, value: f32) -> Result<&mut Self> {
        self.write_i32(value.to_bits() as i32)
    }

    /// Writes an `f64` value, using the bits of its IEEE-754 representation as a `write_i64`.
    pub fn write_f64(&mut self, value: f64) -> Result<&mut Self> {
        self.write_i64(value.to_bits() as i64)
    }

    /// Writes `s` as UTF-8, without a length prefix.
    pub fn write_text(&mut self, s: &str) -> Result<&mut Self> {
        self.write_text_with(s, TextEncoding::Utf8)
    }

    /// Writes `s` using `encoding`, without a length prefix.
    pub fn write_text_with(&mut self, s: &str, encoding: TextEncoding) -> Result<&mut Self> {
        self.write_bytes(&encoding.encode(s))
    }

    /// Writes a UTF-8 string in length-prefixed form.
    ///
    /// The length of the string in bytes is written as a big-endian `i32`, followed by the
    /// bytes of the string.
    pub fn write_length_prefixed_text(&mut self, s: &str) -> Result<&mut Self> {
        self.write_length_prefixed_text_with(s, TextEncoding::Utf8)
    }

    /// Writes a string in length-prefixed form, using `encoding`.
    ///
    /// The prefix and the string are written as two separate steps. If there is room for the
    /// prefix but not for the string, then the prefix stays written, the position is left just
    /// after it, and this returns `Err(CursorError::OutOfBounds)`.
    pub fn write_length_prefixed_text_with(
        &mut self,
        s: &str,
        encoding: TextEncoding,
    ) -> Result<&mut Self> {
        let encoded = encoding.encode(s);
        let len_i32 = i32::try_from(encoded.len()).map_err(|_| CursorError::InvalidLength)?;
        self.write_i32(len_i32)?;
        self.write_bytes(&encoded)
    }
}
