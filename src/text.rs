//! Character encodings used by the text operations of `ByteCursor`.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use zerocopy::byteorder::{ByteOrder, BE, LE, U16};
use zerocopy::{FromBytes, IntoBytes};

/// The byte-order mark that `TextEncoding::Utf16` writes, in big-endian order.
const BOM_BE: [u8; 2] = [0xfe, 0xff];
const BOM_LE: [u8; 2] = [0xff, 0xfe];

/// Substituted for characters that the target encoding cannot represent.
const UNMAPPABLE: u8 = b'?';

/// Identifies how text is converted to and from bytes.
///
/// Decoding never fails. Byte sequences that are not valid in the encoding are replaced with
/// U+FFFD (the Unicode replacement character). Encoding never fails either; characters that the
/// encoding cannot represent are written as `?`.
///
/// The default is UTF-8, which is also the encoding used by the `ByteCursor` text methods that
/// do not take an encoding.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash)]
pub enum TextEncoding {
    /// UTF-8
    #[default]
    Utf8,
    /// UTF-16, big-endian, no byte-order mark.
    Utf16Be,
    /// UTF-16, little-endian, no byte-order mark.
    Utf16Le,
    /// UTF-16 with a byte-order mark.
    ///
    /// When encoding, non-empty strings are written big-endian and preceded by `FE FF`. When
    /// decoding, a leading `FE FF` or `FF FE` selects the byte order and is discarded; input
    /// without a byte-order mark is decoded as big-endian.
    Utf16,
    /// ISO-8859-1. Each byte is one character in the range U+0000 to U+00FF.
    Latin1,
    /// US-ASCII. Bytes 0x80 and above decode to U+FFFD.
    Ascii,
}

impl TextEncoding {
    /// Decodes `bytes` into a new `String`.
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            Self::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Self::Utf16Be => decode_utf16::<BE>(bytes),
            Self::Utf16Le => decode_utf16::<LE>(bytes),
            Self::Utf16 => {
                if let Some(rest) = bytes.strip_prefix(&BOM_BE) {
                    decode_utf16::<BE>(rest)
                } else if let Some(rest) = bytes.strip_prefix(&BOM_LE) {
                    decode_utf16::<LE>(rest)
                } else {
                    decode_utf16::<BE>(bytes)
                }
            }
            Self::Latin1 => bytes.iter().map(|&b| char::from(b)).collect(),
            Self::Ascii => bytes
                .iter()
                .map(|&b| {
                    if b.is_ascii() {
                        char::from(b)
                    } else {
                        char::REPLACEMENT_CHARACTER
                    }
                })
                .collect(),
        }
    }

    /// Encodes `s`. For UTF-8 this borrows the bytes of `s` without copying.
    pub fn encode(self, s: &str) -> Cow<'_, [u8]> {
        match self {
            Self::Utf8 => Cow::Borrowed(s.as_bytes()),
            Self::Utf16Be => Cow::Owned(encode_utf16::<BE>(s, &[])),
            Self::Utf16Le => Cow::Owned(encode_utf16::<LE>(s, &[])),
            Self::Utf16 if s.is_empty() => Cow::Borrowed(&[]),
            Self::Utf16 => Cow::Owned(encode_utf16::<BE>(s, &BOM_BE)),
            Self::Latin1 => Cow::Owned(encode_narrow(s, 0xff)),
            Self::Ascii => Cow::Owned(encode_narrow(s, 0x7f)),
        }
    }

    /// Returns the number of bytes that `encode` would produce for `s`, without allocating.
    pub fn encoded_len(self, s: &str) -> usize {
        match self {
            Self::Utf8 => s.len(),
            Self::Utf16Be | Self::Utf16Le => s.encode_utf16().count() * 2,
            Self::Utf16 if s.is_empty() => 0,
            Self::Utf16 => BOM_BE.len() + s.encode_utf16().count() * 2,
            Self::Latin1 | Self::Ascii => s.chars().count(),
        }
    }
}

fn decode_utf16<O: ByteOrder>(bytes: &[u8]) -> String {
    let (body, tail) = bytes.split_at(bytes.len() & !1);

    // `U16` has no alignment requirement and `body` has even length, so this cannot fail.
    let units: &[U16<O>] = <[U16<O>]>::ref_from_bytes(body).unwrap_or_default();

    let mut s: String = char::decode_utf16(units.iter().map(|u| u.get()))
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();
    if !tail.is_empty() {
        s.push(char::REPLACEMENT_CHARACTER);
    }
    s
}

fn encode_utf16<O: ByteOrder>(s: &str, bom: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bom.len() + s.len() * 2);
    out.extend_from_slice(bom);
    for c in s.encode_utf16() {
        out.extend_from_slice(U16::<O>::new(c).as_bytes());
    }
    out
}

/// Encodes each character as a single byte, if its code point is at most `max`.
fn encode_narrow(s: &str, max: u32) -> Vec<u8> {
    s.chars()
        .map(|c| {
            let c = u32::from(c);
            if c <= max {
                c as u8
            } else {
                UNMAPPABLE
            }
        })
        .collect()
}
