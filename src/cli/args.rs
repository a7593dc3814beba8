//! Command-line argument definitions.

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::stream::ExtractMode;

/// Recover the HTTP response body carried by a single TCP flow in a pcap trace.
#[derive(Parser, Debug)]
#[command(name = "pcapcarve")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// PCAP file to read (gzip-compressed traces are accepted)
    #[arg(value_name = "FILE", default_value = "net.cap")]
    pub file: PathBuf,

    /// Where to write the recovered body ("-" for stdout)
    #[arg(short = 'o', long = "output", value_name = "OUTPUT_FILE", default_value = "img.jpg")]
    pub output: PathBuf,

    /// Print the decoded global header
    #[arg(long = "show-header")]
    pub show_header: bool,

    /// Write the raw reassembled stream without stripping the HTTP header block
    #[arg(long = "keep-header")]
    pub keep_header: bool,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn extract_mode(&self) -> ExtractMode {
        if self.keep_header {
            ExtractMode::Raw
        } else {
            ExtractMode::StripHttpHeader
        }
    }

    /// Whether the body goes to stdout instead of a file.
    pub fn writes_stdout(&self) -> bool {
        self.output == Path::new("-")
    }

    /// Default log filter for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
