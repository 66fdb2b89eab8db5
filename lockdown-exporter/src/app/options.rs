use std::path::PathBuf;

use clap::{crate_description, crate_name, crate_version, Arg, ArgAction, ArgMatches, Command};

use lockdown_archive::util::dirs::default_container_path;

use crate::app::{error::RuntimeError, export_type::ExportType};

/// Option to also export archived items
pub const OPTION_INCLUDE_ARCHIVED: &str = "include-archived";
/// Option to select the export format
pub const OPTION_EXPORT_TYPE: &str = "format";
/// Shorthand for `--format html`
pub const OPTION_HTML: &str = "html";
/// Option to read a preferences file from somewhere other than the default location
pub const OPTION_CONTAINER_PATH: &str = "container-path";
/// Option to write the export to a file instead of stdout
pub const OPTION_EXPORT_PATH: &str = "export-path";
/// Option to print diagnostics instead of exporting
pub const OPTION_DIAGNOSTIC: &str = "diagnostics";

/// Formats the export type option accepts
pub const SUPPORTED_FILE_TYPES: &str = "json, html";

/// Represents the user's choices, parsed from the command line
#[derive(Debug, PartialEq, Eq)]
pub struct Options {
    /// Path to the Lockdown preferences file
    pub container_path: PathBuf,
    /// Where to write the export; stdout if [`None`]
    pub export_path: Option<PathBuf>,
    /// The format to export to
    pub export_type: ExportType,
    /// If true, archived items are exported too
    pub include_archived: bool,
    /// If true, print a summary of the archive instead of exporting
    pub diagnostic: bool,
}

impl Options {
    /// Build and validate the options from parsed command line arguments
    pub fn from_args(args: &ArgMatches) -> Result<Self, RuntimeError> {
        let include_archived = args.get_flag(OPTION_INCLUDE_ARCHIVED);
        let diagnostic = args.get_flag(OPTION_DIAGNOSTIC);
        let html = args.get_flag(OPTION_HTML);
        let user_export_type: Option<&String> = args.get_one(OPTION_EXPORT_TYPE);
        let user_container_path: Option<&String> = args.get_one(OPTION_CONTAINER_PATH);
        let user_export_path: Option<&String> = args.get_one(OPTION_EXPORT_PATH);

        // Ensure the export type is valid, if provided
        let export_type = match user_export_type {
            Some(export_type) => Some(ExportType::from_cli(export_type).ok_or_else(|| {
                RuntimeError::InvalidOptions(format!(
                    "{export_type} is not a valid export type! Must be one of <{SUPPORTED_FILE_TYPES}>"
                ))
            })?),
            None => None,
        };

        // `--html` may only agree with `--format`
        if html && matches!(export_type, Some(ExportType::Json)) {
            return Err(RuntimeError::InvalidOptions(format!(
                "--{OPTION_HTML} cannot be combined with --{OPTION_EXPORT_TYPE} json"
            )));
        }

        // Diagnostics do not write an export
        if diagnostic && (user_export_type.is_some() || html || user_export_path.is_some()) {
            return Err(RuntimeError::InvalidOptions(format!(
                "Diagnostics are enabled; --{OPTION_EXPORT_TYPE}, --{OPTION_HTML} and --{OPTION_EXPORT_PATH} are disallowed"
            )));
        }

        let container_path = match user_container_path {
            Some(path) => PathBuf::from(path),
            None => default_container_path().ok_or_else(|| {
                RuntimeError::InvalidOptions(format!(
                    "Unable to locate the home directory; pass --{OPTION_CONTAINER_PATH}"
                ))
            })?,
        };

        Ok(Options {
            container_path,
            export_path: user_export_path.map(PathBuf::from),
            export_type: if html {
                ExportType::Html
            } else {
                export_type.unwrap_or_default()
            },
            include_archived,
            diagnostic,
        })
    }
}

/// Build the command line interface
pub fn get_command() -> Command {
    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .arg(
            Arg::new(OPTION_INCLUDE_ARCHIVED)
                .short('a')
                .long(OPTION_INCLUDE_ARCHIVED)
                .help("Also include archived secrets\n")
                .action(ArgAction::SetTrue)
                .display_order(0),
        )
        .arg(
            Arg::new(OPTION_EXPORT_TYPE)
                .short('f')
                .long(OPTION_EXPORT_TYPE)
                .help("Specify a single file format to export secrets into\nDefaults to json\n")
                .value_name(SUPPORTED_FILE_TYPES)
                .display_order(1),
        )
        .arg(
            Arg::new(OPTION_HTML)
                .long(OPTION_HTML)
                .help(format!(
                    "Export in HTML format, same as `--{OPTION_EXPORT_TYPE} html`\n"
                ))
                .action(ArgAction::SetTrue)
                .display_order(2),
        )
        .arg(
            Arg::new(OPTION_CONTAINER_PATH)
                .short('p')
                .long(OPTION_CONTAINER_PATH)
                .help("Specify a custom path for the Lockdown preferences file\nIf omitted, the default macOS location is used\n")
                .value_name("path/to/group.corybohon.Lockdown.plist")
                .display_order(3),
        )
        .arg(
            Arg::new(OPTION_EXPORT_PATH)
                .short('o')
                .long(OPTION_EXPORT_PATH)
                .help("Specify a file to write the export to\nIf omitted, the export is written to stdout\n")
                .value_name("path/to/export")
                .display_order(4),
        )
        .arg(
            Arg::new(OPTION_DIAGNOSTIC)
                .short('d')
                .long(OPTION_DIAGNOSTIC)
                .help("Print diagnostic information about the archive and exit\n")
                .action(ArgAction::SetTrue)
                .display_order(5),
        )
}

/// Parse arguments from the command line
pub fn from_command_line() -> ArgMatches {
    get_command().get_matches()
}
