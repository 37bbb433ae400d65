use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command};

pub const DEFAULT_OUTPUT_DIR: &str = "/var/log/p1";
pub const DEFAULT_LAYOUT: &str = "%Y-%m-%d.log";

#[derive(Debug, PartialEq)]
pub struct Config {
    /// Read from stdin if not set.
    pub input_filename: Option<PathBuf>,
    pub output_dir: PathBuf,
    /// `strftime` pattern applied to the UTC timestamp of each telegram.
    pub layout: String,
}

pub fn command() -> Command {
    Command::new("p1-logger")
        .version("0.1.0")
        .about("Logs DSMR P1 telegrams into files named after their timestamps")
        .arg(
            Arg::new("file")
                .help("Input file, reads from stdin if omitted")
                .short('f')
                .long("file")
                .num_args(1)
                .value_name("FILENAME"),
        )
        .arg(
            Arg::new("dir")
                .help("Output directory")
                .short('d')
                .long("dir")
                .num_args(1)
                .value_name("DIR")
                .default_value(DEFAULT_OUTPUT_DIR),
        )
        .arg(
            Arg::new("layout")
                .help("Output filename layout, containing strftime placeholders")
                .short('l')
                .long("layout")
                .num_args(1)
                .value_name("PATTERN")
                .default_value(DEFAULT_LAYOUT),
        )
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Config {
        Config {
            input_filename: matches.get_one::<String>("file").map(PathBuf::from),
            output_dir: matches
                .get_one::<String>("dir")
                .map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR), PathBuf::from),
            layout: matches
                .get_one::<String>("layout")
                .map_or_else(|| DEFAULT_LAYOUT.to_owned(), String::to_owned),
        }
    }
}
