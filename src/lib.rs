use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::error::ErrorKind;
pub use cli::CLIParser;
pub use error::Error;
use raster::reader::{ImageReader, PhotoImageReader, ResizeFilter};
use raster::writer::Container;

mod cli;
pub mod color;
mod error;
mod logger;
mod output;
pub mod raster;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: PathBuf,
    output_file: Option<PathBuf>,
    container: Container,
    width: u16,
    height: u16,
    filter: ResizeFilter,
}

impl Arguments {
    pub fn input_file(&self) -> &Path {
        &self.input_file
    }

    pub fn container(&self) -> Container {
        self.container
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn resolve_output_file(&self) -> PathBuf {
        match &self.output_file {
            Some(output_file) => output_file.clone(),
            None => output::derive_output_file(&self.input_file, self.container),
        }
    }
}

/// Decodes, resamples and re-encodes the input image, returning the path written.
pub fn convert_image(arguments: &Arguments) -> Result<PathBuf> {
    let output_file = arguments.resolve_output_file();
    log::info!(
        "Converting '{}' into {} {}x{} at '{}'",
        arguments.input_file.display(),
        arguments.container,
        arguments.width,
        arguments.height,
        output_file.display()
    );
    let mut reader = PhotoImageReader::new(
        &arguments.input_file,
        arguments.width,
        arguments.height,
        arguments.filter,
    );
    let image = reader.read_image()?;
    let encoded = arguments.container.encoder().encode(&image)?;
    output::write_output_file(&output_file, &encoded)?;
    Ok(output_file)
}

/// Entry point shared by the binaries; failures are reported on stdout.
pub fn run<I, T>(cli_parser: &mut CLIParser, itr: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let arguments = match cli_parser.try_parse(itr) {
        Ok(arguments) => arguments,
        Err(e) => {
            print!("{}", e);
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };
    match convert_image(&arguments) {
        Ok(output_file) => {
            println!("Conversion successful! Output file: {}", output_file.display());
            println!(
                "Format: {} {}x{}",
                arguments.container.description(),
                arguments.width,
                arguments.height
            );
            println!("{}", arguments.container.usage_hint());
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Conversion failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
