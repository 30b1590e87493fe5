use crate::error::Error;
use clap::error::ErrorKind as ClapErrorKind;
use clap::{ArgAction, Parser};

/// Filter for Interception Tools that remaps keys, e.g. Caps Lock to Control.
/// Reads input_event structs from stdin and writes remapped events to stdout.
///
/// Remap rules come from the JSON file named by CAPSREMAP_CONFIG; without it,
/// Right Alt becomes Caps Lock and Caps Lock becomes Left Control.
#[derive(Parser, Debug)]
#[command(name = "capsremap", author, version, about, disable_version_flag = true)]
pub struct Args {
    /// How long (milliseconds) the held-layer key must be down before its layer
    /// applies to other keys. Overrides `delay_ms` from the config file [default: 20].
    #[arg(short, long, value_name = "MS", allow_negative_numbers = true)]
    pub delay: Option<u64>,

    /// Print the program's version then exit.
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}

/// Parses command line arguments using clap.
///
/// `--help` and `--version` print to stdout and exit 0 from here. Every other
/// parse failure becomes a usage error with clap's rendered message.
pub fn parse_args() -> Result<Args, Error> {
    parse_from(std::env::args_os())
}

pub fn parse_from<I, T>(args: I) -> Result<Args, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Args::try_parse_from(args) {
        Ok(args) => Ok(args),
        Err(e) if matches!(e.kind(), ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => Err(Error::Usage(e.render().to_string())),
    }
}
