use alloc::string::String;

use crate::{ByteCursor, CursorError, Result, TextEncoding};

/// Read operations. Each one reads at the position and advances it by the number of bytes
/// consumed.
///
/// Fixed-width reads fail with [`CursorError::OutOfBounds`] if fewer bytes remain than the
/// width of the value. In that case, the position is not changed.
impl<B: AsRef<[u8]>> ByteCursor<B> {
    /// Reads a slice of bytes whose length is `len`. This function returns a slice reference
    /// to the bytes; it does not copy them. Use `to_vec()` on the result to get a copy.
    #[inline(always)]
    pub fn read_bytes(&mut self, len: usize) -> Result<&[u8]> {
        let span = self.span(len)?;
        self.advance(len);
        Ok(&self.as_slice()[span])
    }

    /// Reads a small array of bytes, with a constant length.
    #[inline(always)]
    pub fn read_cbytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let span = self.span(N)?;
        let mut value = [0u8; N];
        value.copy_from_slice(&self.as_slice()[span]);
        self.advance(N);
        Ok(value)
    }

    /// Reads a single byte. Any nonzero value is `true`.
    #[inline(always)]
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Reads a single `u8` value.
    #[inline(always)]
    pub fn read_u8(&mut self) -> Result<u8> {
        let [b] = self.read_cbytes()?;
        Ok(b)
    }

    /// Reads a single `i8` value.
    #[inline(always)]
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(i8::from_be_bytes(self.read_cbytes()?))
    }

    /// Reads a `i16` in big-endian byte order.
    #[inline(always)]
    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(i16::from_be_bytes(self.read_cbytes()?))
    }

    /// Reads a UTF-16 code unit in big-endian byte order. This reads the same bits as
    /// `read_i16`, reinterpreted as unsigned.
    ///
    /// The code unit may be half of a surrogate pair, so it is returned as `u16` rather than
    /// `char`. Use `char::from_u32` or `char::decode_utf16` to convert it.
    #[inline(always)]
    pub fn read_char16(&mut self) -> Result<u16> {
        Ok(self.read_i16()? as u16)
    }

    /// Reads a `i32` in big-endian byte order.
    #[inline(always)]
    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(i32::from_be_bytes(self.read_cbytes()?))
    }

    /// Reads a `i64` in big-endian byte order.
    #[inline(always)]
    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(i64::from_be_bytes(self.read_cbytes()?))
    }

    /// Reads an `f32` from the bits of a big-endian 32-bit integer. NaN payloads are preserved.
    #[inline(always)]
    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.read_i32()? as u32))
    }

    /// Reads an `f64` from the bits of a big-endian 64-bit integer. NaN payloads are preserved.
    #[inline(always)]
    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_bits(self.read_i64()? as u64))
    }

    /// Reads `len` bytes and decodes them as UTF-8.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD.
    pub fn read_text(&mut self, len: usize) -> Result<String> {
        self.read_text_with(len, TextEncoding::Utf8)
    }

    /// Reads `len` bytes and decodes them using `encoding`.
    pub fn read_text_with(&mut self, len: usize, encoding: TextEncoding) -> Result<String> {
        Ok(encoding.decode(self.read_bytes(len)?))
    }

    /// Reads `len` bytes and returns them as a `bstr::BStr`, without copying or validating them.
    #[cfg(feature = "bstr")]
    pub fn read_text_bstr(&mut self, len: usize) -> Result<&bstr::BStr> {
        Ok(bstr::BStr::new(self.read_bytes(len)?))
    }

    /// Reads a length-prefixed UTF-8 string.
    ///
    /// The encoding is a big-endian `i32` that gives the length of the string in bytes,
    /// followed by the bytes of the string. The cursor advances by 4 plus that length.
    pub fn read_length_prefixed_text(&mut self) -> Result<String> {
        self.read_length_prefixed_text_with(TextEncoding::Utf8)
    }

    /// Reads a length-prefixed string that is encoded using `encoding`.
    ///
    /// If the length prefix is negative, this returns `Err(CursorError::InvalidLength)`. If
    /// the prefix is valid but the buffer does not contain that many bytes, this returns
    /// `Err(CursorError::OutOfBounds)`. In both cases the length prefix has already been
    /// consumed.
    pub fn read_length_prefixed_text_with(&mut self, encoding: TextEncoding) -> Result<String> {
        let len_i32 = self.read_i32()?;
        let Ok(len_usize) = usize::try_from(len_i32) else {
            return Err(CursorError::InvalidLength);
        };

        self.read_text_with(len_usize, encoding)
    }
}
