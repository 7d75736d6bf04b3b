use crate::background::DEFAULT_THRESHOLD;
use crate::{Arguments, InspectionArguments};
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;

const DEFAULT_DIRECTORY: &str = "public/assets/items";
const DEFAULT_IMAGE_FILE: &str = "public/assets/sparky-jar.png";

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_directory_argument(command);
        Self::register_threshold_argument(command)
    }

    fn register_directory_argument(command: Command) -> Command {
        command.arg(Self::create_directory_argument())
    }

    fn register_threshold_argument(command: Command) -> Command {
        command.arg(Self::create_threshold_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_directory_argument() -> Arg {
        Arg::new("directory")
            .help("Directory containing the PNG sprites to process in place")
            .value_parser(value_parser!(PathBuf))
            .default_value(DEFAULT_DIRECTORY)
    }

    fn create_threshold_argument() -> Arg {
        arg!(threshold: -t --threshold <THRESHOLD> "Channel value every color channel must exceed to count as background")
            .default_value(DEFAULT_THRESHOLD.to_string())
            .value_parser(value_parser!(u8))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            directory: Self::extract_directory_argument(matches),
            threshold: Self::extract_threshold_argument(matches),
        }
    }

    fn extract_directory_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("directory")
            .expect("Directory must be provided, but was unset.")
            .clone()
    }

    fn extract_threshold_argument(matches: &ArgMatches) -> u8 {
        matches
            .get_one::<u8>("threshold")
            .expect("Threshold must be provided, but was unset.")
            .to_owned()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

pub struct InspectorCLIParser {
    command: Command,
}

impl InspectorCLIParser {
    pub fn new() -> Self {
        let command = Command::new("check-transparency")
            .version(crate_version!())
            .author(crate_authors!())
            .about("Reports whether the top-left pixel of an image is transparent");
        let command = Self::register_image_file_argument(command);
        InspectorCLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> InspectionArguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        InspectionArguments {
            image_file: Self::extract_image_file_argument(&matches),
        }
    }

    fn register_image_file_argument(command: Command) -> Command {
        command.arg(
            Arg::new("image_file")
                .help("Path to the PNG image to inspect")
                .value_parser(value_parser!(PathBuf))
                .default_value(DEFAULT_IMAGE_FILE),
        )
    }

    fn extract_image_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("image_file")
            .expect("Image file must be provided, but was unset.")
            .clone()
    }
}

impl Default for InspectorCLIParser {
    fn default() -> Self {
        Self::new()
    }
}
