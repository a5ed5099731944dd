use std::env::args_os;
use std::process::ExitCode;

use rgb565_convert::{run, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    run(&mut cli_parser, args_os())
}
