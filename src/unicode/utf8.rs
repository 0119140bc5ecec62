use core::fmt;

use itertools::Itertools;

/// UTF-8 encoding of a single codepoint, returned by value.
///
/// Holds at most four encoded bytes; the byte after the last encoded one is
/// always zero, so [`as_bytes_with_nul`](Self::as_bytes_with_nul) is a valid
/// C-style string view. An empty value means the codepoint was not encodable
/// (negative, a high surrogate, or past `U+10FFFF`).
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Utf8Bytes {
    buf: [u8; 5],
    len: u8,
}

impl Utf8Bytes {
    const EMPTY: Self = Self { buf: [0; 5], len: 0 };

    /// The encoded bytes, without the terminating zero.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }

    /// The encoded bytes including the terminating zero byte.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..self.len as usize + 1]
    }

    /// Number of encoded bytes, 0 through 4.
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// True when the codepoint could not be encoded.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<[u8]> for Utf8Bytes {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for Utf8Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Utf8Bytes[{bytes:#04X}]", bytes = self.as_bytes().iter().format(", "))
    }
}

/// Encodes `cp` as a UTF-8 byte sequence.
///
/// Negative codepoints, high surrogates (`0xD800..=0xDBFF`), and codepoints
/// at or past `0x110000` come back empty. Low surrogates encode as their
/// three-byte form, mirroring the permissive decoder.
pub fn encode_utf8(cp: i32) -> Utf8Bytes {
    let mut out = Utf8Bytes::EMPTY;
    if cp < 0 || (0xD800..=0xDBFF).contains(&cp) {
        return out;
    }
    let c = cp as u32;
    if c < 0x80 {
        out.buf[0] = c as u8;
        out.len = 1;
    } else if c < 0x800 {
        out.buf[0] = ((c >> 6) & 0x1F) as u8 | 0b1100_0000;
        out.buf[1] = (c & 0x3F) as u8 | 0b1000_0000;
        out.len = 2;
    } else if c < 0x10000 {
        out.buf[0] = ((c >> 12) & 0x0F) as u8 | 0b1110_0000;
        out.buf[1] = ((c >> 6) & 0x3F) as u8 | 0b1000_0000;
        out.buf[2] = (c & 0x3F) as u8 | 0b1000_0000;
        out.len = 3;
    } else if c < 0x11_0000 {
        out.buf[0] = ((c >> 18) & 0x07) as u8 | 0b1111_0000;
        out.buf[1] = ((c >> 12) & 0x3F) as u8 | 0b1000_0000;
        out.buf[2] = ((c >> 6) & 0x3F) as u8 | 0b1000_0000;
        out.buf[3] = (c & 0x3F) as u8 | 0b1000_0000;
        out.len = 4;
    }
    out
}

/// Decodes the UTF-8 sequence at the start of `bytes`.
///
/// Lenient: when the lead byte does not begin a recognized form, or a
/// continuation byte is missing or out of `0x80..=0xBF`, the lead byte
/// itself is returned as the codepoint. Empty input decodes to 0.
pub fn decode_utf8(bytes: &[u8]) -> i32 {
    let Some(&lead) = bytes.first() else {
        return 0;
    };
    if lead <= 0x7F {
        return lead as i32;
    }
    let (tail_len, lead_tag) = match lead {
        0xC0..=0xDF => (1, 0b1100_0000),
        0xE0..=0xEF => (2, 0b1110_0000),
        0xF0..=0xF7 => (3, 0b1111_0000),
        _ => return lead as i32,
    };
    let Some(tail) = bytes.get(1..=tail_len) else {
        return lead as i32;
    };
    if !tail.iter().all(|b| (0x80..=0xBF).contains(b)) {
        return lead as i32;
    }
    let mut cp = (lead ^ lead_tag) as i32;
    for &b in tail {
        cp = (cp << 6) | (b ^ 0b1000_0000) as i32;
    }
    cp
}
