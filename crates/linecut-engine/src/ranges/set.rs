use std::collections::BTreeMap;
use std::fmt;

use super::{Bound, Interval};

/// A merged set of position intervals.
///
/// Entries are keyed by start and never overlap or touch: for neighbours `a`
/// and `b`, `a.end + 1 < b.start`. Iteration is in ascending start order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalSet {
    spans: BTreeMap<usize, Bound>,
}

impl IntervalSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `candidate`, coalescing it with every entry it overlaps or touches.
    pub fn insert(&mut self, candidate: Interval) {
        let Interval { mut start, mut end } = candidate;

        // The only entry that can cover the candidate, or touch it from the
        // left, is the one with the greatest start not after it.
        if let Some((&prev_start, &prev_end)) = self.spans.range(..=start).next_back() {
            let prev = Interval {
                start: prev_start,
                end: prev_end,
            };
            if prev.covers(&candidate) {
                log::trace!("{candidate} already covered by {prev}");
                return;
            }
            if prev_end.reaches(start) {
                log::trace!("{candidate} extends {prev}");
                self.spans.remove(&prev_start);
                start = prev_start;
                end = end.max(prev_end);
            }
        }

        let absorbed: Vec<usize> = self
            .spans
            .range(start..)
            .take_while(|&(&next_start, _)| end.reaches(next_start))
            .map(|(&next_start, _)| next_start)
            .collect();
        for next_start in absorbed {
            if let Some(next_end) = self.spans.remove(&next_start) {
                log::trace!("{candidate} absorbs {next_start}-{next_end}");
                end = end.max(next_end);
            }
        }

        self.spans.insert(start, end);
    }

    /// Intervals in ascending start order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Interval> + '_ {
        self.spans
            .iter()
            .map(|(&start, &end)| Interval { start, end })
    }

    /// Interval starts in ascending order.
    pub fn starts(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
        self.spans.keys().copied()
    }

    /// End of the interval beginning exactly at `start`.
    pub fn end_of(&self, start: usize) -> Option<Bound> {
        self.spans.get(&start).copied()
    }

    pub fn contains(&self, position: usize) -> bool {
        self.spans
            .range(..=position)
            .next_back()
            .is_some_and(|(&start, &end)| Interval { start, end }.contains(position))
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

impl Extend<Interval> for IntervalSet {
    fn extend<I: IntoIterator<Item = Interval>>(&mut self, iter: I) {
        for interval in iter {
            self.insert(interval);
        }
    }
}

impl FromIterator<Interval> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        let mut set = IntervalSet::new();
        set.extend(iter);
        set
    }
}

/// Renders the canonical list form, e.g. `1,3-5,7-`.
impl fmt::Display for IntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, interval) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{interval}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;
    use crate::extract::{Mode, extract};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn set_of(intervals: &[Interval]) -> IntervalSet {
        intervals.iter().copied().collect()
    }

    fn entries(set: &IntervalSet) -> Vec<Interval> {
        set.iter().collect()
    }

    /// Every permutation of `items`, via Heap's algorithm.
    fn permutations(items: &[Interval]) -> Vec<Vec<Interval>> {
        fn heap(k: usize, items: &mut Vec<Interval>, out: &mut Vec<Vec<Interval>>) {
            if k <= 1 {
                out.push(items.clone());
                return;
            }
            heap(k - 1, items, out);
            for i in 0..k - 1 {
                if k % 2 == 0 {
                    items.swap(i, k - 1);
                } else {
                    items.swap(0, k - 1);
                }
                heap(k - 1, items, out);
            }
        }
        let mut items = items.to_vec();
        let mut out = Vec::new();
        heap(items.len(), &mut items, &mut out);
        out
    }

    fn assert_disjoint(set: &IntervalSet) {
        let all = entries(set);
        for pair in all.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(
                !a.end.reaches(b.start),
                "entries touch or overlap: {a} and {b} in {set}"
            );
        }
    }

    #[rstest]
    #[case(&[Interval::single(1), Interval::single(2), Interval::single(3)], &[Interval::new(1, 3)])]
    #[case(&[Interval::new(3, 4), Interval::single(1), Interval::starting_at(5)], &[Interval::single(1), Interval::starting_at(3)])]
    #[case(&[Interval::new(2, 4), Interval::new(2, 3)], &[Interval::new(2, 4)])]
    #[case(&[Interval::new(1, 2), Interval::new(1, 4)], &[Interval::new(1, 4)])]
    #[case(&[Interval::new(2, 5), Interval::single(1)], &[Interval::new(1, 5)])]
    #[case(&[Interval::single(1), Interval::single(3), Interval::single(2)], &[Interval::new(1, 3)])]
    #[case(&[Interval::single(5), Interval::single(9), Interval::new(1, 20)], &[Interval::new(1, 20)])]
    #[case(&[Interval::single(5), Interval::single(9), Interval::starting_at(6)], &[Interval::starting_at(5)])]
    #[case(&[Interval::single(2), Interval::single(7)], &[Interval::single(2), Interval::single(7)])]
    #[case(&[Interval::starting_at(4), Interval::new(1, 2)], &[Interval::new(1, 2), Interval::starting_at(4)])]
    fn insert_merges(#[case] inserted: &[Interval], #[case] expected: &[Interval]) {
        let set = set_of(inserted);
        assert_eq!(entries(&set), expected.to_vec());
        assert_disjoint(&set);
    }

    #[test]
    fn inserting_twice_is_idempotent() {
        let candidates = [
            Interval::single(4),
            Interval::new(2, 6),
            Interval::starting_at(9),
            Interval::new(7, 7),
        ];
        let base = set_of(&[Interval::single(1), Interval::new(5, 8)]);
        for candidate in candidates {
            let mut once = base.clone();
            once.insert(candidate);
            let mut twice = once.clone();
            twice.insert(candidate);
            assert_eq!(once, twice, "inserting {candidate} twice");
        }
    }

    #[test]
    fn insertion_order_does_not_change_result() {
        let tokens = [
            Interval::new(3, 4),
            Interval::single(1),
            Interval::starting_at(8),
            Interval::single(6),
            Interval::new(5, 5),
        ];
        let expected = set_of(&tokens);
        for order in permutations(&tokens) {
            assert_eq!(set_of(&order), expected, "order {order:?}");
        }
        assert_eq!(
            entries(&expected),
            vec![Interval::single(1), Interval::new(3, 6), Interval::starting_at(8)]
        );
    }

    #[test]
    fn union_of_positions_is_preserved() {
        let inserted = [
            Interval::new(10, 12),
            Interval::single(2),
            Interval::new(4, 6),
            Interval::single(3),
            Interval::new(14, 15),
            Interval::starting_at(25),
            Interval::new(13, 13),
        ];
        let set = set_of(&inserted);
        assert_disjoint(&set);
        for position in 1..=40 {
            let expected = inserted.iter().any(|i| i.contains(position));
            assert_eq!(set.contains(position), expected, "position {position}");
        }
    }

    #[test]
    fn accessors() {
        let set = set_of(&[Interval::new(3, 4), Interval::single(1), Interval::starting_at(7)]);
        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
        assert_eq!(set.starts().collect::<Vec<_>>(), vec![1, 3, 7]);
        assert_eq!(set.end_of(3), Some(Bound::Finite(4)));
        assert_eq!(set.end_of(7), Some(Bound::Unbounded));
        assert_eq!(set.end_of(2), None);
        assert_eq!(set.to_string(), "1,3-4,7-");
    }

    #[rstest]
    #[case(Mode::Fields)]
    #[case(Mode::Bytes)]
    fn position_zero_is_an_extract_error(#[case] mode: Mode) {
        let set: IntervalSet = [Interval {
            start: 0,
            end: Bound::Finite(2),
        }]
        .into_iter()
        .collect();

        let result = extract(b"a\tb", b"\t", &set, mode);

        assert!(matches!(
            result,
            Err(ExtractError::OutOfBounds { position: 0, .. })
        ));
    }

    #[test]
    fn empty_set() {
        let set = IntervalSet::new();
        assert!(set.is_empty());
        assert!(!set.contains(1));
        assert_eq!(set.to_string(), "");
    }
}
