//! Leveled diagnostic macros.
//!
//! Every macro writes `[<Level>] <file>:<line> - <message>` to stderr, where
//! file and line are those of the invocation. `panic!` and a failed `check!`
//! print a second `Panic` line and abort the process.
//!
//! The `d`-prefixed macros forward to their plain counterparts in debug
//! builds (or with the `debug-diagnostics` feature). Otherwise they expand to
//! `()` and their arguments are neither parsed nor evaluated.

/// Writes an `Info` record.
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::emit::emit($crate::Level::Info, file!(), line!(), format_args!($($arg)+))
    };
}

/// Writes a `Warn` record.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::emit::emit($crate::Level::Warn, file!(), line!(), format_args!($($arg)+))
    };
}

/// Writes an `Error` record.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::emit::emit($crate::Level::Error, file!(), line!(), format_args!($($arg)+))
    };
}

/// Writes a `Panic` record plus the termination notice, then aborts.
///
/// Evaluates to `!`. No unwinding happens, so no destructors run.
#[macro_export]
macro_rules! panic {
    ($($arg:tt)+) => {
        $crate::emit::fatal(file!(), line!(), format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! info_if {
    ($cond:expr, $($arg:tt)+) => {
        if $cond {
            $crate::info!($($arg)+);
        }
    };
}

#[macro_export]
macro_rules! warn_if {
    ($cond:expr, $($arg:tt)+) => {
        if $cond {
            $crate::warn!($($arg)+);
        }
    };
}

/// Like `error!`, only when `cond` holds. The branch is treated as cold.
#[macro_export]
macro_rules! error_if {
    ($cond:expr, $($arg:tt)+) => {
        if $cond {
            $crate::emit::emit_cold(
                $crate::Level::Error,
                file!(),
                line!(),
                format_args!($($arg)+),
            );
        }
    };
}

/// Like `panic!`, only when `cond` holds.
#[macro_export]
macro_rules! panic_if {
    ($cond:expr, $($arg:tt)+) => {
        if $cond {
            $crate::panic!($($arg)+);
        }
    };
}

/// Aborts through `panic!` when `cond` is false.
///
/// `cond` is evaluated exactly once. Without a message the stringified
/// condition is reported.
#[macro_export]
macro_rules! check {
    ($cond:expr $(,)?) => {
        $crate::check!($cond, "check failed: {}", stringify!($cond))
    };
    ($cond:expr, $($arg:tt)+) => {{
        let cond: bool = $cond;
        if !cond {
            $crate::panic!($($arg)+);
        }
    }};
}

// Debug build: forward to the plain macros.

#[cfg(any(debug_assertions, feature = "debug-diagnostics"))]
#[macro_export]
macro_rules! dinfo {
    ($($arg:tt)*) => {
        $crate::info!($($arg)*)
    };
}

#[cfg(any(debug_assertions, feature = "debug-diagnostics"))]
#[macro_export]
macro_rules! dwarn {
    ($($arg:tt)*) => {
        $crate::warn!($($arg)*)
    };
}

#[cfg(any(debug_assertions, feature = "debug-diagnostics"))]
#[macro_export]
macro_rules! derror {
    ($($arg:tt)*) => {
        $crate::error!($($arg)*)
    };
}

#[cfg(any(debug_assertions, feature = "debug-diagnostics"))]
#[macro_export]
macro_rules! dpanic {
    ($($arg:tt)*) => {
        $crate::panic!($($arg)*)
    };
}

#[cfg(any(debug_assertions, feature = "debug-diagnostics"))]
#[macro_export]
macro_rules! dcheck {
    ($($arg:tt)*) => {
        $crate::check!($($arg)*)
    };
}

#[cfg(any(debug_assertions, feature = "debug-diagnostics"))]
#[macro_export]
macro_rules! dinfo_if {
    ($($arg:tt)*) => {
        $crate::info_if!($($arg)*)
    };
}

#[cfg(any(debug_assertions, feature = "debug-diagnostics"))]
#[macro_export]
macro_rules! dwarn_if {
    ($($arg:tt)*) => {
        $crate::warn_if!($($arg)*)
    };
}

#[cfg(any(debug_assertions, feature = "debug-diagnostics"))]
#[macro_export]
macro_rules! derror_if {
    ($($arg:tt)*) => {
        $crate::error_if!($($arg)*)
    };
}

#[cfg(any(debug_assertions, feature = "debug-diagnostics"))]
#[macro_export]
macro_rules! dpanic_if {
    ($($arg:tt)*) => {
        $crate::panic_if!($($arg)*)
    };
}

// Release build: swallow the tokens.

#[cfg(not(any(debug_assertions, feature = "debug-diagnostics")))]
#[macro_export]
macro_rules! dinfo {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(any(debug_assertions, feature = "debug-diagnostics")))]
#[macro_export]
macro_rules! dwarn {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(any(debug_assertions, feature = "debug-diagnostics")))]
#[macro_export]
macro_rules! derror {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(any(debug_assertions, feature = "debug-diagnostics")))]
#[macro_export]
macro_rules! dpanic {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(any(debug_assertions, feature = "debug-diagnostics")))]
#[macro_export]
macro_rules! dcheck {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(any(debug_assertions, feature = "debug-diagnostics")))]
#[macro_export]
macro_rules! dinfo_if {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(any(debug_assertions, feature = "debug-diagnostics")))]
#[macro_export]
macro_rules! dwarn_if {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(any(debug_assertions, feature = "debug-diagnostics")))]
#[macro_export]
macro_rules! derror_if {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(any(debug_assertions, feature = "debug-diagnostics")))]
#[macro_export]
macro_rules! dpanic_if {
    ($($arg:tt)*) => {{}};
}

// Fatal paths abort the whole test binary, so they are covered by the
// integration tests that spawn the `helloworld` executable.
#[cfg(test)]
mod tests {
    use crate::is_debug_enabled;
    use std::cell::Cell;

    fn bump(hits: &Cell<u32>) -> u32 {
        hits.set(hits.get() + 1);
        hits.get()
    }

    fn expected_debug_hits(n: u32) -> u32 {
        if is_debug_enabled() { n } else { 0 }
    }

    #[test]
    fn test_plain_levels_return_normally() {
        let hits = Cell::new(0);
        crate::info!("info {}", bump(&hits));
        crate::warn!("warn {}", bump(&hits));
        crate::error!("error {}", bump(&hits));
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn test_trailing_comma_is_accepted() {
        crate::info!("value {}", 1,);
    }

    #[test]
    fn test_if_false_skips_message_arguments() {
        let hits = Cell::new(0);
        crate::info_if!(false, "{}", bump(&hits));
        crate::warn_if!(false, "{}", bump(&hits));
        crate::error_if!(false, "{}", bump(&hits));
        crate::panic_if!(false, "{}", bump(&hits));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_if_true_evaluates_message_arguments() {
        let hits = Cell::new(0);
        crate::info_if!(true, "{}", bump(&hits));
        crate::warn_if!(true, "{}", bump(&hits));
        crate::error_if!(true, "{}", bump(&hits));
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn test_if_condition_evaluated_once() {
        let conds = Cell::new(0);
        crate::info_if!(bump(&conds) == 0, "never");
        crate::warn_if!(bump(&conds) == 0, "never");
        crate::error_if!(bump(&conds) == 0, "never");
        crate::panic_if!(bump(&conds) == 0, "never");
        assert_eq!(conds.get(), 4);
    }

    #[test]
    fn test_check_true_evaluates_condition_once() {
        let conds = Cell::new(0);
        let msgs = Cell::new(0);
        crate::check!(bump(&conds) == 1, "bad state {}", bump(&msgs));
        assert_eq!(conds.get(), 1);
        assert_eq!(msgs.get(), 0);
    }

    #[test]
    fn test_check_without_message() {
        let value = 3;
        crate::check!(value > 2);
        crate::check!(value > 2,);
    }

    #[test]
    fn test_debug_levels_follow_build_flag() {
        let hits = Cell::new(0);
        crate::dinfo!("{}", bump(&hits));
        crate::dwarn!("{}", bump(&hits));
        crate::derror!("{}", bump(&hits));
        assert_eq!(hits.get(), expected_debug_hits(3));
    }

    #[test]
    fn test_debug_if_variants_follow_build_flag() {
        let conds = Cell::new(0);
        let msgs = Cell::new(0);
        crate::dinfo_if!(bump(&conds) > 0, "{}", bump(&msgs));
        crate::dwarn_if!(bump(&conds) > 0, "{}", bump(&msgs));
        crate::derror_if!(bump(&conds) > 0, "{}", bump(&msgs));
        crate::dpanic_if!(bump(&conds) == 0, "{}", bump(&msgs));
        assert_eq!(conds.get(), expected_debug_hits(4));
        assert_eq!(msgs.get(), expected_debug_hits(3));
    }

    #[test]
    fn test_dcheck_follows_build_flag() {
        let conds = Cell::new(0);
        crate::dcheck!(bump(&conds) == 1, "unexpected");
        assert_eq!(conds.get(), expected_debug_hits(1));
    }

    #[cfg(not(any(debug_assertions, feature = "debug-diagnostics")))]
    #[test]
    fn test_release_debug_macros_never_terminate() {
        let hits = Cell::new(0);
        crate::dpanic!("{}", bump(&hits));
        crate::dcheck!(false, "{}", bump(&hits));
        crate::dpanic_if!(true, "{}", bump(&hits));
        assert_eq!(hits.get(), 0);
    }
}
