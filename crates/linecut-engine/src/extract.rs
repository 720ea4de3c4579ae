//! Slicing a single line by a parsed [`IntervalSet`].
//!
//! Lines are handled as raw bytes; they need not be valid UTF-8.

use memchr::memmem;

use crate::error::ExtractError;
use crate::ranges::IntervalSet;

/// What the positions of an [`IntervalSet`] refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Delimiter-separated fields.
    Fields,
    /// Raw bytes.
    Bytes,
    /// Characters. Sliced exactly like [`Mode::Bytes`]; multibyte sequences are not decoded.
    Characters,
}

/// Applies one position set to every line of a run.
#[derive(Debug, Clone)]
pub struct LineExtractor<'a> {
    ranges: &'a IntervalSet,
    delimiter: Vec<u8>,
    mode: Mode,
}

impl<'a> LineExtractor<'a> {
    /// `delimiter` is only consulted in [`Mode::Fields`].
    pub fn new(ranges: &'a IntervalSet, delimiter: impl Into<Vec<u8>>, mode: Mode) -> Self {
        Self {
            ranges,
            delimiter: delimiter.into(),
            mode,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn delimiter(&self) -> &[u8] {
        &self.delimiter
    }

    pub fn extract(&self, line: &[u8]) -> Result<Vec<u8>, ExtractError> {
        let mut out = Vec::with_capacity(line.len());
        self.extract_into(line, &mut out)?;
        Ok(out)
    }

    /// Appends the selected part of `line` to `out`.
    ///
    /// On error `out` may hold a partial selection.
    pub fn extract_into(&self, line: &[u8], out: &mut Vec<u8>) -> Result<(), ExtractError> {
        match self.mode {
            Mode::Fields => extract_fields(line, &self.delimiter, self.ranges, out),
            Mode::Bytes | Mode::Characters => extract_bytes(line, self.ranges, out),
        }
    }
}

/// One-off extraction without building a [`LineExtractor`].
pub fn extract(
    line: &[u8],
    delimiter: &[u8],
    ranges: &IntervalSet,
    mode: Mode,
) -> Result<Vec<u8>, ExtractError> {
    LineExtractor::new(ranges, delimiter, mode).extract(line)
}

/// Splits on every occurrence of `delimiter`. An empty delimiter never splits.
fn split_fields<'l>(line: &'l [u8], delimiter: &[u8]) -> Vec<&'l [u8]> {
    if delimiter.is_empty() {
        return vec![line];
    }
    let mut fields = Vec::new();
    let mut field_start = 0;
    for at in memmem::find_iter(line, delimiter) {
        // find_iter reports non-overlapping matches only
        fields.push(&line[field_start..at]);
        field_start = at + delimiter.len();
    }
    fields.push(&line[field_start..]);
    fields
}

fn extract_fields(
    line: &[u8],
    delimiter: &[u8],
    ranges: &IntervalSet,
    out: &mut Vec<u8>,
) -> Result<(), ExtractError> {
    let fields = split_fields(line, delimiter);
    let mut emitted = false;
    for interval in ranges.iter() {
        let Some(positions) = interval.resolve(fields.len()) else {
            continue;
        };
        for position in positions {
            let field = position
                .checked_sub(1)
                .and_then(|index| fields.get(index))
                .ok_or(ExtractError::OutOfBounds {
                    position,
                    len: fields.len(),
                })?;
            if emitted {
                out.extend_from_slice(delimiter);
            }
            out.extend_from_slice(field);
            emitted = true;
        }
    }
    Ok(())
}

fn extract_bytes(line: &[u8], ranges: &IntervalSet, out: &mut Vec<u8>) -> Result<(), ExtractError> {
    for interval in ranges.iter() {
        let Some(positions) = interval.resolve(line.len()) else {
            continue;
        };
        let (start, end) = positions.into_inner();
        let bytes = start
            .checked_sub(1)
            .and_then(|first| line.get(first..end))
            .ok_or(ExtractError::OutOfBounds {
                position: start,
                len: line.len(),
            })?;
        out.extend_from_slice(bytes);
    }
    Ok(())
}
