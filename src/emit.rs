//! The write and terminate primitives behind the diagnostic macros.
//!
//! Everything here is called from macro expansions; use `info!`, `check!`
//! and friends instead of calling these directly.

use crate::level::Level;
use std::fmt;
use std::io::{self, Write};
use std::process;

/// Second line printed by every fatal diagnostic.
pub const TERMINATION_MESSAGE: &str = "Program terminated due to the error above.";

/// Writes one record as `[<level>] <file>:<line> - <message>\n`.
///
/// The record goes out in a single `write_fmt` call.
pub fn write_record<W: Write>(
    writer: &mut W,
    level: Level,
    file: &str,
    line: u32,
    args: fmt::Arguments<'_>,
) -> io::Result<()> {
    writer.write_fmt(format_args!("[{level}] {file}:{line} - {args}\n"))
}

/// Writes one record to stderr. Write failures are dropped.
pub fn emit(level: Level, file: &str, line: u32, args: fmt::Arguments<'_>) {
    let mut stderr = io::stderr().lock();
    let _ = write_record(&mut stderr, level, file, line, args);
}

/// Same as [`emit`], kept out of line for branches expected not to run.
#[cold]
#[inline(never)]
pub fn emit_cold(level: Level, file: &str, line: u32, args: fmt::Arguments<'_>) {
    emit(level, file, line, args);
}

/// Writes the primary `Panic` record and the termination notice, then aborts.
///
/// Both lines share the call site and are written under one stderr lock.
/// Stderr is flushed before `abort`, which runs no destructors or exit hooks.
#[cold]
#[inline(never)]
pub fn fatal(file: &str, line: u32, args: fmt::Arguments<'_>) -> ! {
    let mut stderr = io::stderr().lock();
    let _ = write_record(&mut stderr, Level::Panic, file, line, args);
    let _ = write_record(
        &mut stderr,
        Level::Panic,
        file,
        line,
        format_args!("{TERMINATION_MESSAGE}"),
    );
    let _ = stderr.flush();
    process::abort()
}

/// Whether the `d`-prefixed macros were compiled in.
#[must_use]
pub const fn is_debug_enabled() -> bool {
    cfg!(any(debug_assertions, feature = "debug-diagnostics"))
}
