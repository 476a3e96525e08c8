pub mod args;

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser};
use tracing::debug;

use crate::convert::{self, Conversion, Direction};
use crate::error::{ConvertError, Result};
use args::Args;

/// Runs the CLI entrypoint.
///
/// # Errors
///
/// Returns an error if validation, conversion, or I/O fails.
pub fn run() -> Result<()> {
    let args = Args::parse();

    if let Some(shell) = args.completions {
        print_completions(shell);
        return Ok(());
    }

    let direction = args.detect_direction();
    let input_label = format_input_label(&args);
    debug!(?direction, input = %input_label, "starting conversion");

    // Advisory pre-check on the file name; the conversion still validates
    // the content itself.
    if !args.force {
        if let Some(name) = input_file_name(&args) {
            convert::validate_extension(&name, direction)?;
        }
    }

    let content = read_input(&args)?;
    let outcome = convert::convert(direction, &content, &input_label)?;
    write_outcome(&args, direction, &outcome)
}

fn read_input(args: &Args) -> Result<String> {
    if args.is_stdin() {
        return read_stdin();
    }
    let path = args
        .input
        .as_ref()
        .ok_or_else(|| ConvertError::validation("no input file specified"))?;
    read_file(path)
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(ConvertError::stdin_read)?;
    Ok(buffer)
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| ConvertError::file_read(path.to_path_buf(), e))
}

fn write_outcome(args: &Args, direction: Direction, outcome: &Conversion) -> Result<()> {
    match output_target(args, outcome)? {
        Some(path) => {
            write_file(&path, outcome.data.as_bytes())?;
            let verb = match direction {
                Direction::JsonToToon => "Encoded",
                Direction::ToonToJson => "Decoded",
            };
            let input_label = format_input_label(args);
            eprintln!("{verb} `{input_label}` → `{}`", path.display());
            Ok(())
        }
        None => write_stdout(outcome.data.as_bytes()),
    }
}

fn output_target(args: &Args, outcome: &Conversion) -> Result<Option<PathBuf>> {
    if let Some(ref path) = args.output {
        return Ok(Some(path.clone()));
    }

    if args.write {
        if args.is_stdin() {
            return Err(ConvertError::validation("--write requires a file input"));
        }
        let path = args
            .input
            .as_ref()
            .ok_or_else(|| ConvertError::validation("no input file specified"))?;
        let input_name = path.file_name().and_then(|name| name.to_str());
        if input_name == Some(outcome.file_name.as_str()) {
            return Err(ConvertError::validation(format!(
                "cannot derive an output name for '{}'",
                outcome.file_name
            )));
        }
        return Ok(Some(path.with_file_name(&outcome.file_name)));
    }

    Ok(None)
}

fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| ConvertError::file_create(path.to_path_buf(), e))?;
    file.write_all(data)
        .map_err(|e| ConvertError::file_write(path.to_path_buf(), e))?;
    // Trailing newline for file output
    file.write_all(b"\n")
        .map_err(|e| ConvertError::file_write(path.to_path_buf(), e))
}

fn write_stdout(data: &[u8]) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(data).map_err(ConvertError::stdout_write)?;
    handle.write_all(b"\n").map_err(ConvertError::stdout_write)
}

fn input_file_name(args: &Args) -> Option<String> {
    if args.is_stdin() {
        return None;
    }
    args.input
        .as_ref()
        .and_then(|path| path.file_name())
        .and_then(|name| name.to_str())
        .map(ToString::to_string)
}

fn format_input_label(args: &Args) -> String {
    input_file_name(args).unwrap_or_else(|| "stdin".to_string())
}

fn print_completions(shell: clap_complete::Shell) {
    let mut command = Args::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
}
