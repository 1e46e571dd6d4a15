//! Tagged diagnostic lines on standard error.
//!
//! Each line is `TAG`, the formatted message and one `\n`, written with a
//! single `write_all`. Write failures are dropped: a diagnostic line must
//! never change what the calling program does.

use std::fmt::{self, Write as _};
use std::io::{self, Stderr, Write};

use crate::toggle::{self, DiagnosticToggle};

/// Literal prefix of every diagnostic line.
pub const TAG: &str = "[pkl-go] ";

/// Render one complete line: tag, message, newline.
///
/// A `Display` impl that reports an error truncates the message instead of
/// panicking the way `format!` would.
pub fn format_line(args: fmt::Arguments<'_>) -> String {
    let hint = args.as_str().map_or(64, str::len);
    let mut line = String::with_capacity(TAG.len() + hint + 1);
    line.push_str(TAG);
    let _ = line.write_fmt(args);
    line.push('\n');
    line
}

/// A diagnostic sink bound to an explicit toggle.
///
/// Tests and embedders construct one with the toggle forced either way
/// instead of mutating the environment.
#[derive(Debug)]
pub struct DiagnosticWriter<W> {
    toggle: DiagnosticToggle,
    sink: W,
}

impl<W: Write> DiagnosticWriter<W> {
    pub fn new(toggle: DiagnosticToggle, sink: W) -> Self {
        Self { toggle, sink }
    }

    pub fn is_enabled(&self) -> bool {
        self.toggle.is_enabled()
    }

    /// Write one line if enabled. Nothing is formatted when disabled.
    pub fn write_fmt_line(&mut self, args: fmt::Arguments<'_>) {
        if !self.toggle.is_enabled() {
            return;
        }
        let line = format_line(args);
        let _ = self.sink.write_all(line.as_bytes());
    }

    /// Write a message verbatim between the tag and the newline.
    pub fn write_line(&mut self, message: &str) {
        self.write_fmt_line(format_args!("{message}"));
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl DiagnosticWriter<Stderr> {
    pub fn stderr(toggle: DiagnosticToggle) -> Self {
        Self::new(toggle, io::stderr())
    }
}

/// Process-wide writer: gated on [`toggle::global`], writes to stderr.
///
/// Prefer the [`pkl_debug!`](crate::pkl_debug) macro, which skips evaluating
/// its arguments when disabled.
pub fn emit(args: fmt::Arguments<'_>) {
    let toggle = toggle::global();
    if toggle.is_enabled() {
        DiagnosticWriter::stderr(toggle).write_fmt_line(args);
    }
}

/// Write a diagnostic line to stderr when the process-wide toggle is on.
///
/// ```
/// pkl_diag::pkl_debug!("value={}", 42);
/// ```
#[macro_export]
macro_rules! pkl_debug {
    ($($arg:tt)*) => {
        if $crate::toggle::is_enabled() {
            $crate::writer::emit(format_args!($($arg)*));
        }
    };
}

/// Like [`pkl_debug!`], routed through a [`DiagnosticWriter`].
#[macro_export]
macro_rules! pkl_debug_to {
    ($writer:expr, $($arg:tt)*) => {{
        let writer = &mut $writer;
        if writer.is_enabled() {
            writer.write_fmt_line(format_args!($($arg)*));
        }
    }};
}
