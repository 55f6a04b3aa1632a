// Leveled diagnostics for the helloworld project.
// The macros (`info!`, `check!`, `dpanic!`, ...) are exported at the crate root.

pub mod cli;
pub mod emit;
pub mod level;
pub mod logging;
mod macros;

pub use emit::{TERMINATION_MESSAGE, is_debug_enabled, write_record};
pub use level::Level;
