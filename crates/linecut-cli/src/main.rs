//! linecut - print selected parts of lines from each FILE to standard output.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use linecut_config::CutConfig;
use linecut_engine::{Input, cut_input};

const LIST_HELP: &str = "\
Use one, and only one of -b, -c or -f.  Each LIST is made up of one
range, or many ranges separated by commas (or spaces).  Selected input
is written in the same order that it is read, and is written exactly once.
Each range is one of:

  N     N'th byte, character or field, counted from 1
  N-    from N'th byte, character or field, to end of line
  N-M   from N'th to M'th (included) byte, character or field
  -M    from first to M'th (included) byte, character or field

With no FILE, or when FILE is -, read standard input.";

/// Print selected parts of lines from each FILE to standard output.
#[derive(Parser, Debug)]
#[command(name = "linecut")]
#[command(version, about, long_about = None, after_help = LIST_HELP)]
struct Cli {
    /// Select only these bytes
    #[arg(short, long, value_name = "LIST", allow_hyphen_values = true)]
    bytes: Option<String>,

    /// Select only these characters (treated as bytes)
    #[arg(short, long, value_name = "LIST", allow_hyphen_values = true)]
    characters: Option<String>,

    /// Use DELIM instead of TAB for field delimiter
    #[arg(short, long, value_name = "DELIM", allow_hyphen_values = true)]
    delimiter: Option<String>,

    /// Select only these fields; lines with fewer fields print what they have
    #[arg(short, long, value_name = "LIST", allow_hyphen_values = true)]
    fields: Option<String>,

    /// Input files
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("linecut: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = CutConfig::from_flags(
        cli.fields.as_deref(),
        cli.bytes.as_deref(),
        cli.characters.as_deref(),
        cli.delimiter.as_deref(),
    )?;
    log::debug!(
        "mode {:?}, positions {}, delimiter {:?}",
        config.mode,
        config.ranges,
        String::from_utf8_lossy(&config.delimiter)
    );

    let inputs: Vec<Input> = if cli.files.is_empty() {
        vec![Input::Stdin]
    } else {
        cli.files.iter().map(Input::from_arg).collect()
    };

    let extractor = config.extractor();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for input in &inputs {
        let lines = cut_input(input, &mut out, &extractor)?;
        log::debug!("{input:?}: {lines} lines");
    }

    out.flush().context("failed to write output")?;
    Ok(())
}
