//! Diagnostic output: logging macros, fatal exit, variable and call tracing.
//!
//! Everything writes single lines to a process-wide sink, which is standard
//! error unless a test (or an embedding application) swaps in its own writer
//! via [`set_sink`]. The macros capture the source location themselves, so
//! call sites stay one-liners:
//!
//! ```
//! utilkit::diag!("loaded {} entries", 3);
//! utilkit::dbug!("debug-build-only detail");
//! utilkit::vartrace!(1 + 2);
//! ```

use std::cell::Cell;
use std::fmt;
use std::io::{self, Write};

use itertools::Itertools;
use parking_lot::Mutex;

/// Build timestamp in `YYYYMMDD.HHMMSS` form, fixed when the crate was
/// compiled. Honors `SOURCE_DATE_EPOCH` for reproducible builds.
pub const BUILDSTAMP: &str = env!("UTILKIT_BUILDSTAMP");

static SINK: Mutex<Option<Box<dyn Write + Send>>> = Mutex::new(None);

/// Redirects diagnostic output to `w`, returning the previous replacement
/// sink if one was installed.
pub fn set_sink(w: Box<dyn Write + Send>) -> Option<Box<dyn Write + Send>> {
    SINK.lock().replace(w)
}

/// Removes any installed sink, restoring the default standard-error output.
pub fn take_sink() -> Option<Box<dyn Write + Send>> {
    SINK.lock().take()
}

fn write_line(args: fmt::Arguments<'_>) {
    let mut guard = SINK.lock();
    match guard.as_mut() {
        Some(w) => {
            let _ = writeln!(w, "{args}");
            let _ = w.flush();
        }
        None => {
            let _ = writeln!(io::stderr().lock(), "{args}");
        }
    }
}

/// Formats a byte slice as space-separated hex octets.
pub fn hex_dump(bytes: &[u8]) -> String {
    format!("{:02X}", bytes.iter().format(" "))
}

#[doc(hidden)]
pub fn emit(file: &str, line: u32, module: &str, args: fmt::Arguments<'_>) {
    write_line(format_args!("In {file}:{line} ({module}): {args}"));
}

#[doc(hidden)]
pub fn emit_var(file: &str, line: u32, name: &str, value: &dyn fmt::Debug) {
    write_line(format_args!("{file}:{line} {name}={value:?}"));
}

#[doc(hidden)]
pub fn emit_fatal(file: &str, line: u32, module: &str, args: fmt::Arguments<'_>) -> ! {
    write_line(format_args!("Died: {file}:{line} ({module}): {args}"));
    std::process::exit(1);
}

/// Logs a formatted diagnostic line with its source location.
#[macro_export]
macro_rules! diag {
    ($($arg:tt)*) => {
        $crate::diag::emit(file!(), line!(), module_path!(), format_args!($($arg)*))
    };
}

/// Logs a fatal message and exits the process with failure status.
#[macro_export]
macro_rules! die {
    ($($arg:tt)*) => {
        $crate::diag::emit_fatal(file!(), line!(), module_path!(), format_args!($($arg)*))
    };
}

/// Like [`diag!`], but compiled down to nothing in release builds.
#[macro_export]
macro_rules! dbug {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::diag::emit(file!(), line!(), module_path!(), format_args!($($arg)*));
        }
    };
}

/// Logs `expr=value` for the given expression using its `Debug` form.
/// Debug builds only, like [`dbug!`].
#[macro_export]
macro_rules! vartrace {
    ($x:expr) => {
        if cfg!(debug_assertions) {
            $crate::diag::emit_var(file!(), line!(), stringify!($x), &$x);
        }
    };
}

/// Emits an `Entering` line around a traced scope and the matching
/// `Exiting` line when dropped, indented by the current nesting depth.
///
/// Does nothing unless the `stacktrace` feature is enabled. Usually
/// instantiated through [`fn_trace!`](crate::fn_trace).
pub struct FnTrace {
    name: &'static str,
}

thread_local! {
    static TRACE_DEPTH: Cell<usize> = const { Cell::new(0) };
}

impl FnTrace {
    pub fn enter(name: &'static str) -> Self {
        if cfg!(feature = "stacktrace") {
            let depth = TRACE_DEPTH.with(|d| {
                let depth = d.get();
                d.set(depth + 1);
                depth
            });
            write_line(format_args!("{:pad$}Entering {name}()", "", pad = depth * 4));
        }
        Self { name }
    }
}

impl Drop for FnTrace {
    fn drop(&mut self) {
        if cfg!(feature = "stacktrace") {
            let depth = TRACE_DEPTH.with(|d| {
                let depth = d.get().saturating_sub(1);
                d.set(depth);
                depth
            });
            let name = self.name;
            write_line(format_args!("{:pad$}Exiting {name}()", "", pad = depth * 4));
        }
    }
}

/// Traces entry and exit of the enclosing scope when the `stacktrace`
/// feature is on. Pass a name, or let it default to the module path.
#[macro_export]
macro_rules! fn_trace {
    () => {
        let _fn_trace = $crate::diag::FnTrace::enter(module_path!());
    };
    ($name:expr) => {
        let _fn_trace = $crate::diag::FnTrace::enter($name);
    };
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    // Single test so the process-wide sink is never fought over by
    // parallel test threads.
    #[test]
    fn macros_write_location_and_message() {
        let cap = Capture::default();
        let prev = set_sink(Box::new(cap.clone()));

        crate::diag!("checking {}", 42);
        crate::dbug!("debug detail {}", "here");
        crate::vartrace!(40 + 2);
        if cfg!(feature = "stacktrace") {
            crate::fn_trace!("outer");
        }

        take_sink();
        if let Some(p) = prev {
            set_sink(p);
        }

        let out = cap.contents();
        assert!(out.contains("diag.rs"), "out={out:?}");
        assert!(out.contains("(utilkit::diag::tests): checking 42"), "out={out:?}");
        if cfg!(debug_assertions) {
            assert!(out.contains("debug detail here"), "out={out:?}");
            assert!(out.contains("40 + 2=42"), "out={out:?}");
        }
        if cfg!(feature = "stacktrace") {
            assert!(out.contains("Entering outer()"), "out={out:?}");
            assert!(out.contains("Exiting outer()"), "out={out:?}");
        }
    }

    #[test]
    fn hex_dump_spells_out_octets() {
        assert_eq!(hex_dump(&[0xE2, 0x82, 0xAC]), "E2 82 AC");
        assert_eq!(hex_dump(&[0x00]), "00");
        assert_eq!(hex_dump(&[]), "");
    }

    #[test]
    fn buildstamp_has_the_expected_shape() {
        assert_eq!(BUILDSTAMP.len(), 15);
        assert_eq!(&BUILDSTAMP[8..9], ".");
        assert!(BUILDSTAMP
            .chars()
            .enumerate()
            .all(|(i, c)| if i == 8 { c == '.' } else { c.is_ascii_digit() }));
    }
}
