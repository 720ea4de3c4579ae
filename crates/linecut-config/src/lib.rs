use linecut_engine::{IntervalSet, LineExtractor, Mode, SpecError, parse_list};
use thiserror::Error;

/// Field delimiter used when none is given.
pub const DEFAULT_DELIMITER: &str = "\t";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("you must specify a list of bytes, characters, or fields")]
    NoListSpecified,

    #[error("only one type of list may be specified")]
    TooManyLists,

    #[error("an input delimiter may be specified only when operating on fields")]
    DelimiterRequiresFields,

    #[error("the delimiter must be a single character")]
    EmptyDelimiter,

    #[error("invalid list {list:?}")]
    InvalidList {
        list: String,
        #[source]
        source: SpecError,
    },
}

/// A validated cut invocation: what to select and how lines are split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutConfig {
    pub mode: Mode,
    pub ranges: IntervalSet,
    pub delimiter: Vec<u8>,
}

impl CutConfig {
    /// Builds a config from the raw `-f`, `-b`, `-c` and `-d` values.
    ///
    /// Exactly one list must be present; an empty list counts as absent. A
    /// delimiter is only accepted with fields and only its first character
    /// is used.
    pub fn from_flags(
        fields: Option<&str>,
        bytes: Option<&str>,
        characters: Option<&str>,
        delimiter: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let lists = [
            (Mode::Fields, fields),
            (Mode::Bytes, bytes),
            (Mode::Characters, characters),
        ];
        let mut given = lists
            .into_iter()
            .filter_map(|(mode, list)| Some((mode, list?)))
            .filter(|(_, list)| !list.is_empty());

        let (mode, list) = given.next().ok_or(ConfigError::NoListSpecified)?;
        if given.next().is_some() {
            return Err(ConfigError::TooManyLists);
        }

        let delimiter = match delimiter {
            Some(_) if mode != Mode::Fields => return Err(ConfigError::DelimiterRequiresFields),
            Some(delimiter) => first_char(delimiter)?,
            None => DEFAULT_DELIMITER.as_bytes().to_vec(),
        };

        let ranges = parse_list(list).map_err(|source| ConfigError::InvalidList {
            list: list.to_string(),
            source,
        })?;

        Ok(Self {
            mode,
            ranges,
            delimiter,
        })
    }

    pub fn extractor(&self) -> LineExtractor<'_> {
        LineExtractor::new(&self.ranges, self.delimiter.as_slice(), self.mode)
    }
}

fn first_char(delimiter: &str) -> Result<Vec<u8>, ConfigError> {
    let first = delimiter.chars().next().ok_or(ConfigError::EmptyDelimiter)?;
    let mut buf = [0; 4];
    Ok(first.encode_utf8(&mut buf).as_bytes().to_vec())
}
