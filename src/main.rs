use helloworld::cli::{parse_cli, run};
use helloworld::{debug_log, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();
    let cli = parse_cli();
    debug_log!("parsed arguments: {:?}", cli);
    run(&cli)
}
