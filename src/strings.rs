//! Readably-named scan helpers over the cryptic C string idioms, plus a
//! reusable per-thread scratch string.

use std::cell::RefCell;

/// Length of the leading run of bytes in `s` that all appear in `accept`.
pub fn span_matching(s: &str, accept: &str) -> usize {
    s.bytes().take_while(|&b| accept.bytes().any(|a| a == b)).count()
}

/// Length of the leading run of bytes in `s` that do not appear in `reject`.
pub fn span_rejecting(s: &str, reject: &str) -> usize {
    s.bytes().take_while(|&b| reject.bytes().all(|r| r != b)).count()
}

/// Byte index of the first occurrence of `needle` in `s`.
pub fn find_char_first(s: &str, needle: char) -> Option<usize> {
    s.find(needle)
}

/// Byte index of the last occurrence of `needle` in `s`.
pub fn find_char_last(s: &str, needle: char) -> Option<usize> {
    s.rfind(needle)
}

/// Byte index of the first occurrence of the substring `needle` in `s`.
pub fn find_str_first(s: &str, needle: &str) -> Option<usize> {
    s.find(needle)
}

/// Byte index of the last occurrence of the substring `needle` in `s`.
pub fn find_str_last(s: &str, needle: &str) -> Option<usize> {
    s.rfind(needle)
}

thread_local! {
    static SCRATCH: RefCell<String> = const { RefCell::new(String::new()) };
}

/// Runs `f` with a thread-local scratch `String` that is cleared on entry
/// but keeps its allocation between calls. Handy for transient formatting
/// in hot paths. `f` must not call `with_scratch` itself; reentrant use on
/// the same thread panics.
pub fn with_scratch<R>(f: impl FnOnce(&mut String) -> R) -> R {
    SCRATCH.with(|cell| {
        let mut s = cell.borrow_mut();
        s.clear();
        f(&mut s)
    })
}
