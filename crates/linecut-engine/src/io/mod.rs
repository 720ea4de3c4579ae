use crate::error::ExtractError;
use crate::extract::LineExtractor;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum CutError {
    #[error("cannot open {}", path.display())]
    Open {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to read input")]
    Read(#[source] io::Error),
    #[error("failed to write output")]
    Write(#[source] io::Error),
    #[error("failed to cut line {line}")]
    Extract { line: u64, source: ExtractError },
}

/// Where lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// `-` names standard input; anything else is a path.
    pub fn from_arg(arg: impl AsRef<Path>) -> Self {
        let arg = arg.as_ref();
        if arg == Path::new("-") {
            Input::Stdin
        } else {
            Input::File(arg.to_path_buf())
        }
    }
}

/// Strips a trailing `\n` or `\r\n`.
fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Runs every line of `reader` through `extractor`, writing one output line per input line.
///
/// A final line without a terminator is still processed. Returns the number of lines written.
pub fn cut_lines<R: BufRead, W: Write>(
    mut reader: R,
    writer: &mut W,
    extractor: &LineExtractor<'_>,
) -> Result<u64, CutError> {
    let mut line = Vec::new();
    let mut out = Vec::new();
    let mut count = 0;

    loop {
        line.clear();
        let read = reader.read_until(b'\n', &mut line).map_err(CutError::Read)?;
        if read == 0 {
            break;
        }
        count += 1;

        out.clear();
        extractor
            .extract_into(trim_line_ending(&line), &mut out)
            .map_err(|source| CutError::Extract {
                line: count,
                source,
            })?;
        out.push(b'\n');
        writer.write_all(&out).map_err(CutError::Write)?;
    }

    log::trace!("processed {count} lines");
    Ok(count)
}

/// Opens `input` and cuts it into `writer`.
pub fn cut_input<W: Write>(
    input: &Input,
    writer: &mut W,
    extractor: &LineExtractor<'_>,
) -> Result<u64, CutError> {
    match input {
        Input::Stdin => {
            log::debug!("reading standard input");
            let stdin = io::stdin();
            cut_lines(stdin.lock(), writer, extractor)
        }
        Input::File(path) => {
            log::debug!("reading {}", path.display());
            let file = File::open(path).map_err(|source| CutError::Open {
                path: path.clone(),
                source,
            })?;
            cut_lines(BufReader::new(file), writer, extractor)
        }
    }
}
