use std::collections::HashMap;

/// Accumulates a metric per key while remembering the order in which keys were first seen.
///
/// Hash map iteration order is arbitrary, so the winner scan walks `entries` instead. That
/// keeps "first encountered wins" deterministic for every grouped query.
#[derive(Debug)]
pub(crate) struct FirstSeenTotals<'a, V> {
    index: HashMap<&'a str, usize>,
    entries: Vec<(&'a str, V)>,
}

impl<'a, V> FirstSeenTotals<'a, V> {
    pub(crate) fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Returns the accumulator for `key`, inserting `init` if the key is new.
    pub(crate) fn entry(&mut self, key: &'a str, init: V) -> &mut V {
        let Self { index, entries } = self;
        let slot = *index.entry(key).or_insert_with(|| {
            entries.push((key, init));
            entries.len() - 1
        });
        &mut entries[slot].1
    }

    /// The key with the strictly greatest value, compared against a running maximum that
    /// starts at `floor`. Keys whose value never exceeds `floor` cannot win.
    pub(crate) fn strict_max_above(&self, floor: V) -> Option<(&'a str, V)>
    where
        V: PartialOrd + Copy,
    {
        let mut best: Option<(&'a str, V)> = None;
        let mut running = floor;
        for &(key, value) in &self.entries {
            if value > running {
                running = value;
                best = Some((key, value));
            }
        }
        best
    }

    pub(crate) fn into_entries(self) -> Vec<(&'a str, V)> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_seen_order() {
        let mut totals = FirstSeenTotals::new();
        for (key, value) in [("b", 1), ("a", 2), ("b", 3)] {
            *totals.entry(key, 0) += value;
        }
        assert_eq!(totals.into_entries(), vec![("b", 4), ("a", 2)]);
    }

    #[test]
    fn ties_go_to_the_first_key() {
        let mut totals = FirstSeenTotals::new();
        *totals.entry("x", 0) += 5;
        *totals.entry("y", 0) += 5;
        assert_eq!(totals.strict_max_above(0), Some(("x", 5)));
    }

    #[test]
    fn values_at_or_below_the_floor_never_win() {
        let mut totals = FirstSeenTotals::new();
        *totals.entry("zero", 0) += 0;
        assert_eq!(totals.strict_max_above(0), None);
    }
}
