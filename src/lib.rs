//! Small development utilities: diagnostic logging macros, wraparound-safe
//! signed addition, minimal UTF-8/UTF-16 codepoint conversion, and a few
//! memory, string, and line-input helpers.
//!
//! Everything here is an independent, stateless helper. The conversion
//! routines are deliberately permissive: decoding never fails, it degrades
//! to a best-effort byte or an in-band `'?'` sentinel. Callers that need
//! strict validation should wrap these with their own checks.
//!
//! ```
//! use utilkit::num::AddWrap;
//! use utilkit::unicode::{utf16, utf8};
//!
//! assert_eq!(i32::MAX.add_wrap(1), i32::MIN);
//! assert_eq!(utf8::encode_utf8(0x20AC).as_bytes(), [0xE2, 0x82, 0xAC]);
//! assert_eq!(utf16::decode_utf16_pair(0xD83D, 0xDE00), 0x1F600);
//! ```

pub mod diag;
pub mod input;
pub mod mem;
pub mod num;
pub mod strings;
pub mod unicode;

pub use diag::BUILDSTAMP;
pub use input::read_line_bounded;
pub use mem::{memzero, memzero_explicit};
pub use num::{add_wrap, AddWrap};
pub use unicode::is_scalar_value;
pub use unicode::utf16::{decode_utf16_pair, encode_utf16_pair, Utf16Pair};
pub use unicode::utf8::{decode_utf8, encode_utf8, Utf8Bytes};
