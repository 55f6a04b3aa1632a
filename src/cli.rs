use crate::debug_log;
use crate::emit::is_debug_enabled;
use crate::level::Level;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::process::ExitCode;

pub const GREETING: &str = "Hello, world!";

/// Hello world driver for the leveled diagnostic macros
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Emit one diagnostic record per repetition
    Emit(EmitArgs),
    /// Abort with MESSAGE unless CONDITION is true
    Check {
        #[arg(action = ArgAction::Set)]
        condition: bool,
        message: String,
        /// Use `dcheck!` instead of `check!`
        #[arg(long)]
        debug_only: bool,
    },
    /// Print whether the d-prefixed diagnostics are compiled in
    Status,
}

#[derive(Args, Debug, PartialEq)]
pub struct EmitArgs {
    #[arg(value_enum)]
    pub level: LevelArg,
    pub message: String,
    /// Emit only if this is true (the `_if` variant)
    #[arg(long, value_name = "BOOL")]
    pub when: Option<bool>,
    /// Use the d-prefixed variant
    #[arg(long)]
    pub debug_only: bool,
    #[arg(long, default_value_t = 1)]
    pub repeat: usize,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelArg {
    Info,
    Warn,
    Error,
    Panic,
}

impl From<LevelArg> for Level {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Info => Level::Info,
            LevelArg::Warn => Level::Warn,
            LevelArg::Error => Level::Error,
            LevelArg::Panic => Level::Panic,
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Runs the parsed command. Returns only if no fatal diagnostic fired.
pub fn run(cli: &Cli) -> ExitCode {
    match &cli.command {
        None => crate::info!("{GREETING}"),
        Some(Command::Emit(args)) => {
            debug_log!("emit {:?} x{}", args.level, args.repeat);
            for _ in 0..args.repeat {
                emit_once(args.level.into(), &args.message, args.when, args.debug_only);
            }
        }
        Some(Command::Check {
            condition,
            message,
            debug_only,
        }) => {
            debug_log!("check {condition} (debug_only: {debug_only})");
            if *debug_only {
                run_dcheck(*condition, message);
            } else {
                crate::check!(*condition, "{message}");
            }
        }
        Some(Command::Status) => println!("debug diagnostics: {}", status_label()),
    }
    ExitCode::SUCCESS
}

fn status_label() -> &'static str {
    if is_debug_enabled() { "on" } else { "off" }
}

fn emit_once(level: Level, message: &str, when: Option<bool>, debug_only: bool) {
    match (when, debug_only) {
        (None, false) => emit_plain(level, message),
        (None, true) => emit_debug(level, message),
        (Some(cond), false) => emit_plain_if(level, cond, message),
        (Some(cond), true) => emit_debug_if(level, cond, message),
    }
}

fn emit_plain(level: Level, message: &str) {
    match level {
        Level::Info => crate::info!("{message}"),
        Level::Warn => crate::warn!("{message}"),
        Level::Error => crate::error!("{message}"),
        Level::Panic => crate::panic!("{message}"),
    }
}

fn emit_plain_if(level: Level, cond: bool, message: &str) {
    match level {
        Level::Info => crate::info_if!(cond, "{message}"),
        Level::Warn => crate::warn_if!(cond, "{message}"),
        Level::Error => crate::error_if!(cond, "{message}"),
        Level::Panic => crate::panic_if!(cond, "{message}"),
    }
}

#[cfg_attr(
    not(any(debug_assertions, feature = "debug-diagnostics")),
    allow(unused_variables)
)]
fn emit_debug(level: Level, message: &str) {
    match level {
        Level::Info => crate::dinfo!("{message}"),
        Level::Warn => crate::dwarn!("{message}"),
        Level::Error => crate::derror!("{message}"),
        Level::Panic => crate::dpanic!("{message}"),
    }
}

#[cfg_attr(
    not(any(debug_assertions, feature = "debug-diagnostics")),
    allow(unused_variables)
)]
fn emit_debug_if(level: Level, cond: bool, message: &str) {
    match level {
        Level::Info => crate::dinfo_if!(cond, "{message}"),
        Level::Warn => crate::dwarn_if!(cond, "{message}"),
        Level::Error => crate::derror_if!(cond, "{message}"),
        Level::Panic => crate::dpanic_if!(cond, "{message}"),
    }
}

#[cfg_attr(
    not(any(debug_assertions, feature = "debug-diagnostics")),
    allow(unused_variables)
)]
fn run_dcheck(condition: bool, message: &str) {
    crate::dcheck!(condition, "{message}");
}
