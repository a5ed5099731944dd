use crate::raster::reader::ResizeFilter;
use crate::raster::writer::Container;
use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;

const DEFAULT_SIZE: &str = "128";

pub struct CLIParser {
    command: Command,
    container: Option<Container>,
}

impl CLIParser {
    /// Parser for the combined tool, the container is chosen with `--format`.
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        let command = Self::register_format_argument(command);
        CLIParser {
            command,
            container: None,
        }
    }

    /// Parser for a tool that always writes `container`.
    pub fn for_container(container: Container) -> Self {
        let command = Self::create_base_command()
            .name(format!("{}565", container.extension()))
            .about(format!("Converts an image into a {}", container.description()));
        let command = Self::register_arguments(command);
        CLIParser {
            command,
            container: Some(container),
        }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        self.try_parse(itr).unwrap_or_else(|e| e.exit())
    }

    /// Like `parse`, but leaves reporting of malformed command lines to the caller.
    pub fn try_parse<I, T>(&mut self, itr: I) -> Result<Arguments, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command.try_get_matches_from_mut(itr)?;
        Ok(self.extract_arguments(&matches))
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_file_argument(command);
        let command = Self::register_output_file_argument(command);
        let command = Self::register_width_argument(command);
        let command = Self::register_height_argument(command);
        Self::register_filter_argument(command)
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_output_file_argument(command: Command) -> Command {
        command.arg(Self::create_output_file_argument())
    }

    fn register_width_argument(command: Command) -> Command {
        command.arg(Self::create_width_argument())
    }

    fn register_height_argument(command: Command) -> Command {
        command.arg(Self::create_height_argument())
    }

    fn register_filter_argument(command: Command) -> Command {
        command.arg(Self::create_filter_argument())
    }

    fn register_format_argument(command: Command) -> Command {
        command.arg(Self::create_format_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .help("Path to the source image (JPEG, PNG, ...)")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_output_file_argument() -> Arg {
        Arg::new("output_file")
            .help("Path to the output file, defaults to the input path with the container extension")
            .value_parser(value_parser!(PathBuf))
            .required(false)
    }

    fn create_width_argument() -> Arg {
        arg!(--width <PIXELS> "Target width in pixels")
            .default_value(DEFAULT_SIZE)
            .value_parser(value_parser!(u16).range(1..))
    }

    fn create_height_argument() -> Arg {
        arg!(--height <PIXELS> "Target height in pixels")
            .default_value(DEFAULT_SIZE)
            .value_parser(value_parser!(u16).range(1..))
    }

    fn create_filter_argument() -> Arg {
        arg!(--filter <FILTER> "Resampling filter")
            .default_value("Lanczos3")
            .value_parser(value_parser!(ResizeFilter))
    }

    fn create_format_argument() -> Arg {
        arg!(format: -f --format <FORMAT> "Output container format")
            .default_value("bmp")
            .value_parser(value_parser!(Container))
    }

    fn extract_arguments(&self, matches: &ArgMatches) -> Arguments {
        Arguments {
            input_file: Self::extract_input_file_argument(matches),
            output_file: Self::extract_output_file_argument(matches),
            container: self
                .container
                .unwrap_or_else(|| Self::extract_format_argument(matches)),
            width: Self::extract_width_argument(matches),
            height: Self::extract_height_argument(matches),
            filter: Self::extract_filter_argument(matches),
        }
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("input_file")
            .expect("Required argument input_file not provided")
            .clone()
    }

    fn extract_output_file_argument(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one::<PathBuf>("output_file").cloned()
    }

    fn extract_width_argument(matches: &ArgMatches) -> u16 {
        matches
            .get_one::<u16>("width")
            .expect("Width must be provided, but was unset.")
            .to_owned()
    }

    fn extract_height_argument(matches: &ArgMatches) -> u16 {
        matches
            .get_one::<u16>("height")
            .expect("Height must be provided, but was unset.")
            .to_owned()
    }

    fn extract_filter_argument(matches: &ArgMatches) -> ResizeFilter {
        matches
            .get_one::<ResizeFilter>("filter")
            .expect("Resize filter must be provided, but was unset.")
            .to_owned()
    }

    fn extract_format_argument(matches: &ArgMatches) -> Container {
        matches
            .get_one::<Container>("format")
            .expect("Output format must be provided, but was unset.")
            .to_owned()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, Command};
    use std::path::PathBuf;

    use super::{CLIParser, Container, ResizeFilter};

    const PROGRAM_NAME_ARGUMENT: &str = "test_program_name";

    #[test]
    fn parse_input_file_argument() {
        let input_file_name = "photo.jpg";
        let command = Command::new("test");
        let command = CLIParser::register_input_file_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, input_file_name]);
        let input_file = CLIParser::extract_input_file_argument(&matches);
        assert_eq!(input_file.file_name().unwrap(), input_file_name);
    }

    #[test]
    fn output_file_argument_is_optional() {
        let command = Command::new("test");
        let command = CLIParser::register_output_file_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT]);
        assert_eq!(CLIParser::extract_output_file_argument(&matches), None);
    }

    #[test]
    fn parse_width_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_width_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--width", "240"]);
        assert_eq!(CLIParser::extract_width_argument(&matches), 240);
    }

    #[test]
    fn parse_zero_height_is_rejected() {
        let command = Command::new("test");
        let command = CLIParser::register_height_argument(command);
        let result = command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--height", "0"]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::ValueValidation);
        } else {
            panic!("Illegal value for height not detected");
        }
    }

    #[test]
    fn parse_filter_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_filter_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--filter", "Nearest"]);
        assert_eq!(
            CLIParser::extract_filter_argument(&matches),
            ResizeFilter::Nearest
        );
    }

    #[test]
    fn parse_illegal_format_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_format_argument(command);
        let result = command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-f", "png"]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::InvalidValue);
        } else {
            panic!("Illegal value for format not detected");
        }
    }

    #[test]
    fn parse_required_arguments_only() {
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![PROGRAM_NAME_ARGUMENT, "/photos/holiday.jpg"]);
        assert_eq!(arguments.input_file, PathBuf::from("/photos/holiday.jpg"));
        assert_eq!(arguments.output_file, None, "output file does not match");
        assert_eq!(arguments.container, Container::Bmp, "format does not match");
        assert_eq!(arguments.width, 128, "width does not match");
        assert_eq!(arguments.height, 128, "height does not match");
        assert_eq!(arguments.filter, ResizeFilter::Lanczos3, "filter does not match");
        assert_eq!(
            arguments.resolve_output_file(),
            PathBuf::from("/photos/holiday.bmp")
        );
    }

    #[test]
    fn container_parser_uses_fixed_container() {
        let mut cli_parser = CLIParser::for_container(Container::Tga);
        let arguments = cli_parser.parse(vec![
            PROGRAM_NAME_ARGUMENT,
            "holiday.jpg",
            "screen.img",
            "--width",
            "64",
        ]);
        assert_eq!(arguments.container, Container::Tga);
        assert_eq!(arguments.width, 64);
        assert_eq!(arguments.height, 128);
        assert_eq!(arguments.resolve_output_file(), PathBuf::from("screen.img"));
    }

    #[test]
    fn try_parse_reports_missing_input_file() {
        let mut cli_parser = CLIParser::for_container(Container::Bmp);
        match cli_parser.try_parse(vec![PROGRAM_NAME_ARGUMENT]) {
            Err(error) => assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument),
            Ok(_) => panic!("Missing input file not detected"),
        }
    }

    #[test]
    fn container_parser_has_no_format_argument() {
        let mut cli_parser = CLIParser::for_container(Container::Bmp);
        let result = cli_parser.command.try_get_matches_from_mut(vec![
            PROGRAM_NAME_ARGUMENT,
            "holiday.jpg",
            "--format",
            "tga",
        ]);
        assert!(result.is_err());
    }
}
