use std::env::args_os;
use std::process::ExitCode;

use rgb565_convert::raster::writer::Container;
use rgb565_convert::{run, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::for_container(Container::Bmp);
    run(&mut cli_parser, args_os())
}
