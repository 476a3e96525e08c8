use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

use crate::convert::Direction;

/// toonfile — Convert files between JSON and TOON notation
#[derive(Parser, Debug)]
#[command(name = "toonfile", version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    toonfile input.json                 # Encode JSON to TOON (stdout)
    toonfile input.toon                 # Decode TOON to JSON (stdout)
    toonfile input.json -o out.toon     # Encode to a chosen file
    toonfile input.json --write         # Encode to input.toon next to the source
    cat data.json | toonfile --encode   # Encode from stdin
    cat data.toon | toonfile --decode   # Decode from stdin")]
pub struct Args {
    /// Input file path (omit or use "-" to read from stdin)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output file path (stdout if omitted)
    #[arg(short, long, value_name = "FILE", conflicts_with = "write")]
    pub output: Option<PathBuf>,

    /// Write next to the input under the derived file name
    #[arg(long)]
    pub write: bool,

    /// Encode JSON to TOON (auto-detected from the extension by default)
    #[arg(short, long, conflicts_with = "decode")]
    pub encode: bool,

    /// Decode TOON to JSON (auto-detected from the extension by default)
    #[arg(short, long, conflicts_with = "encode")]
    pub decode: bool,

    /// Skip the input extension check
    #[arg(long)]
    pub force: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Args {
    /// Pick the conversion direction from explicit flags, falling back to
    /// the input file extension. Encoding is the default when nothing
    /// decides.
    #[must_use]
    pub fn detect_direction(&self) -> Direction {
        if self.encode {
            return Direction::JsonToToon;
        }
        if self.decode {
            return Direction::ToonToJson;
        }

        if let Some(ref path) = self.input {
            let detected = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(Direction::from_file_name);
            if let Some(direction) = detected {
                return direction;
            }
        }

        Direction::JsonToToon
    }

    /// Returns true if reading from stdin.
    #[must_use]
    pub fn is_stdin(&self) -> bool {
        self.input.is_none() || self.input.as_ref().is_some_and(|p| p.as_os_str() == "-")
    }
}
