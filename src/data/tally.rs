use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::AddAssign;

/// Insertion-ordered accumulator: `key → running total`.
///
/// Keys keep the order in which they were first added, so a stable sort of
/// the totals breaks ties by first appearance.
#[derive(Debug, Clone)]
pub struct Tally<K, V> {
    index: HashMap<K, usize>,
    entries: Vec<(K, V)>,
}

impl<K, V> Default for Tally<K, V> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K, V> Tally<K, V>
where
    K: Eq + Hash + Clone,
    V: Copy + Default + AddAssign + PartialOrd,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the total of `key`, starting from zero on first sight.
    pub fn add(&mut self, key: K, amount: V) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 += amount,
            None => {
                let mut total = V::default();
                total += amount;
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, total));
            }
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.get(key).map(|&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> &[(K, V)] {
        &self.entries
    }

    /// All entries by total, largest first; ties keep first-seen order.
    pub fn ranked(self) -> Vec<(K, V)> {
        let mut entries = self.entries;
        // `sort_by` is stable.
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        entries
    }

    /// The `n` largest totals, ties in first-seen order.
    pub fn top(self, n: usize) -> Vec<(K, V)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_per_key() {
        let mut tally = Tally::new();
        tally.add("a", 2u32);
        tally.add("b", 1);
        tally.add("a", 3);
        assert_eq!(tally.get("a"), Some(5));
        assert_eq!(tally.get("b"), Some(1));
        assert_eq!(tally.get("c"), None);
        assert_eq!(tally.len(), 2);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let mut tally = Tally::new();
        for key in ["x", "y", "z", "w"] {
            tally.add(key, 1u32);
        }
        tally.add("w", 1);
        let top: Vec<_> = tally.top(3).into_iter().map(|(k, _)| k).collect();
        assert_eq!(top, vec!["w", "x", "y"]);
    }

    #[test]
    fn top_of_empty_is_empty() {
        let tally: Tally<String, f64> = Tally::new();
        assert!(tally.top(10).is_empty());
    }
}
