use std::str::FromStr;

use super::{Bound, Interval, IntervalSet};
use crate::error::SpecError;

/// Parses a position list such as `1,3-5,7-` into a merged [`IntervalSet`].
///
/// Items are separated by commas or single spaces, and one layer of
/// surrounding double quotes is ignored. Each item is `N`, `N-`, `N-M` or
/// `-M`. Parsing stops at the first bad item.
pub fn parse_list(spec: &str) -> Result<IntervalSet, SpecError> {
    let mut set = IntervalSet::new();
    for token in tokens(spec) {
        let interval = parse_token(token)?;
        set.insert(interval);
    }
    log::debug!("parsed position list {spec:?} as {set}");
    Ok(set)
}

impl FromStr for IntervalSet {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_list(s)
    }
}

/// Removes one pair of surrounding double quotes. A lone quote on one side is kept.
fn strip_quotes(spec: &str) -> &str {
    spec.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(spec)
}

fn tokens(spec: &str) -> impl Iterator<Item = &str> {
    strip_quotes(spec)
        .split(',')
        .flat_map(|group| group.split(' '))
}

fn parse_token(token: &str) -> Result<Interval, SpecError> {
    if let Some((left, right)) = token.split_once('-') {
        return parse_range(token, left, right);
    }

    let n: usize = token
        .parse()
        .map_err(|_| SpecError::InvalidNumberFormat {
            token: token.to_string(),
        })?;
    if n == 0 {
        return Err(SpecError::InvalidNumberFormat {
            token: token.to_string(),
        });
    }
    Ok(Interval::single(n))
}

fn parse_range(token: &str, left: &str, right: &str) -> Result<Interval, SpecError> {
    if left.is_empty() && right.is_empty() {
        return Err(SpecError::InvalidRangeWithNoEndpoint);
    }
    if right.contains('-') {
        return Err(SpecError::InvalidRangeFormat {
            token: token.to_string(),
        });
    }

    let start = match parse_bound(token, left)? {
        Some(start) => start,
        None => 1,
    };
    let end = match parse_bound(token, right)? {
        Some(end) => Bound::Finite(end),
        None => Bound::Unbounded,
    };

    if let Bound::Finite(end) = end
        && start > end
    {
        return Err(SpecError::DecreasingRange { start, end });
    }

    Ok(Interval { start, end })
}

/// Parses one side of a range; an empty side is `None`.
fn parse_bound(token: &str, bound: &str) -> Result<Option<usize>, SpecError> {
    if bound.is_empty() {
        return Ok(None);
    }
    let n: usize = bound
        .parse()
        .map_err(|source| SpecError::InvalidRangeBound {
            token: token.to_string(),
            bound: bound.to_string(),
            source,
        })?;
    if n == 0 {
        return Err(SpecError::ZeroPosition {
            token: token.to_string(),
        });
    }
    Ok(Some(n))
}
