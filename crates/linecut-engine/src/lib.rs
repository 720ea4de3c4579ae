pub mod error;
pub mod extract;
pub mod io;
pub mod ranges;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::{ExtractError, SpecError};
pub use extract::{LineExtractor, Mode, extract};
pub use io::{CutError, Input, cut_input, cut_lines};
pub use ranges::{Bound, Interval, IntervalSet, parse_list};
