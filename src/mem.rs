//! Buffer zeroing helpers.

use std::sync::atomic::{compiler_fence, Ordering};

/// Zero-fills `buf`.
pub fn memzero(buf: &mut [u8]) {
    buf.fill(0);
}

/// Zero-fills `buf` with volatile stores, so the writes survive even when
/// the optimizer can prove the buffer is never read again. Use this for
/// scrubbing key material or passwords before a buffer is dropped.
pub fn memzero_explicit(buf: &mut [u8]) {
    for b in buf.iter_mut() {
        // SAFETY: `b` is a valid, exclusive reference into the slice.
        unsafe { core::ptr::write_volatile(b, 0) };
    }
    compiler_fence(Ordering::SeqCst);
}
