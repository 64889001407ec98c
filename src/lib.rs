//! Reads and writes primitive values through a cursor over a fixed-size byte buffer.
//!
//! All multi-byte values use big-endian byte order. Floating-point values are stored using their
//! IEEE-754 bit patterns. Text is stored either as raw encoded bytes, or "length-prefixed", meaning
//! a big-endian `i32` byte count followed by that many encoded bytes.
//!
//! ```
//! use byte_cursor::ByteCursor;
//!
//! let mut c = ByteCursor::with_capacity(64);
//! c.write_i32(117117)?.write_length_prefixed_text("Hello,")?;
//! c.seek(0)?;
//! assert_eq!(c.read_i32()?, 117117);
//! assert_eq!(c.read_length_prefixed_text()?, "Hello,");
//! # Ok::<(), byte_cursor::CursorError>(())
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

extern crate alloc;

mod cursor;
#[cfg(feature = "std")]
mod io;
mod reader;
mod text;
mod writer;


pub use cursor::{ByteCursor, CursorError, Result};
pub use text::TextEncoding;
