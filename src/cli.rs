// src/cli.rs

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "hamlog - A contact logger for amateur radio",
    long_about = "hamlog records amateur-radio contacts (callsign, band, frequency, mode, UTC time and date, signal reports) into a plain CSV log, one row per contact, and shows a summary of each contact as it is logged."
)]
pub struct Cli {
    /// Path to the config file. Defaults to ~/.config/hamlog/config.toml
    #[arg(long, global = true, env = "HAMLOG_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase diagnostic output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Creates a new log file with the CSV header.
    /// An existing file at the same path is overwritten.
    New {
        /// Where to create the log. Defaults to `log_file` from the config.
        path: Option<PathBuf>,
    },

    /// Logs a single contact and prints its summary.
    /// The log is created with a header if it does not exist yet.
    Log {
        #[arg(short, long, value_name = "PATH", help = "The log file to append to")]
        file: Option<PathBuf>,

        #[command(flatten)]
        fields: ContactArgs,

        #[arg(long, help = "Fill in the current UTC time and date when not given")]
        now: bool,
    },

    /// Starts an interactive logging session on stdin.
    /// Band, frequency and mode carry over between contacts.
    /// Enter `--` at the Callsign prompt to clear every field. Press Ctrl+D to finish.
    #[command(verbatim_doc_comment)]
    Session {
        /// Where to log. Defaults to `log_file` from the config.
        path: Option<PathBuf>,

        #[arg(short, long, help = "Append to an existing log instead of overwriting it")]
        append: bool,
    },

    /// Prints every contact in a log file.
    /// Rows that cannot be parsed are skipped with a warning.
    Show {
        /// The log to read. Defaults to `log_file` from the config.
        path: Option<PathBuf>,

        #[arg(long, help = "Fail on the first malformed row instead of skipping it")]
        strict: bool,
    },

    /// Prints the current UTC time and date.
    Now,
}

#[derive(Args, Debug, Default)]
pub struct ContactArgs {
    #[arg(short, long, help = "Callsign of the other station")]
    pub call: Option<String>,
    #[arg(short, long, help = "Band, e.g. 20m")]
    pub band: Option<String>,
    #[arg(long, help = "Frequency, e.g. 14.250")]
    pub freq: Option<String>,
    #[arg(short, long, help = "Mode, e.g. SSB, CW, FT8")]
    pub mode: Option<String>,
    #[arg(short, long, help = "UTC time (HH:MM:SS)")]
    pub time: Option<String>,
    #[arg(short, long, help = "UTC date (YYYY-MM-DD)")]
    pub date: Option<String>,
    #[arg(short, long, help = "Signal report sent")]
    pub sent: Option<String>,
    #[arg(short, long, help = "Signal report received")]
    pub rcvd: Option<String>,
}
