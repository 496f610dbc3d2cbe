use std::collections::HashMap;

use crate::types::Entity;

/// An entity together with the number of times it was encountered.
#[derive(Debug, Clone, PartialEq)]
pub struct OccurrenceEntry<T> {
    pub item: T,
    pub occurrences: u32,
}

/// Deduplicating map from entity key to its running occurrence count.
///
/// Entries are only ever inserted or incremented, never removed.
#[derive(Debug, Clone)]
pub struct FrequencyTable<T> {
    entries: HashMap<String, OccurrenceEntry<T>>,
}

impl<T> Default for FrequencyTable<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T: Entity + Clone> FrequencyTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one more occurrence of `item`, inserting it with a count of 1
    /// the first time its key is seen. Returns the updated count.
    pub fn upsert(&mut self, item: &T) -> u32 {
        let entry = self
            .entries
            .entry(item.key())
            .and_modify(|entry| entry.occurrences += 1)
            .or_insert_with(|| OccurrenceEntry {
                item: item.clone(),
                occurrences: 1,
            });
        entry.occurrences
    }

    /// Looks up the entry stored under `key`, as produced by
    /// [`Entity::key`].
    pub fn get(&self, key: &str) -> Option<&OccurrenceEntry<T>> {
        self.entries.get(key)
    }

    /// Occurrence count for `key`, 0 when it was never seen.
    pub fn occurrences(&self, key: &str) -> u32 {
        self.get(key).map_or(0, |entry| entry.occurrences)
    }

    /// Number of distinct entities seen.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in no particular order. Use [`FrequencyTable::ranked`] for a
    /// sorted view.
    pub fn iter(&self) -> impl Iterator<Item = &OccurrenceEntry<T>> {
        self.entries.values()
    }

    /// Entries sorted by occurrence count, least frequent first.
    ///
    /// Ties are ordered by name so the output is deterministic.
    pub fn ranked(&self) -> Vec<&OccurrenceEntry<T>> {
        let mut ranked: Vec<&OccurrenceEntry<T>> = self.entries.values().collect();
        ranked.sort_by(|a, b| {
            a.occurrences
                .cmp(&b.occurrences)
                .then_with(|| a.item.name().cmp(b.item.name()))
        });
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Artist;

    fn artist(id: &str, name: &str) -> Artist {
        Artist {
            id: Some(id.to_string()),
            name: name.to_string(),
            uri: None,
        }
    }

    #[test]
    fn upsert_counts_repeated_keys() {
        let mut table = FrequencyTable::new();
        assert_eq!(table.upsert(&artist("x", "X")), 1);
        assert_eq!(table.upsert(&artist("y", "Y")), 1);
        assert_eq!(table.upsert(&artist("x", "X")), 2);

        assert_eq!(table.len(), 2);
        assert_eq!(table.occurrences("x"), 2);
        assert_eq!(table.occurrences("missing"), 0);
    }

    #[test]
    fn first_seen_item_is_kept() {
        let mut table = FrequencyTable::new();
        table.upsert(&artist("x", "Original"));
        table.upsert(&artist("x", "Renamed"));

        assert_eq!(table.get("x").map(|e| e.item.name.as_str()), Some("Original"));
    }

    #[test]
    fn ranked_is_ascending_with_name_tiebreak() {
        let mut table = FrequencyTable::new();
        for _ in 0..3 {
            table.upsert(&artist("c", "Cee"));
        }
        table.upsert(&artist("b", "Bee"));
        table.upsert(&artist("a", "Ay"));

        let names: Vec<&str> = table.ranked().iter().map(|e| e.item.name.as_str()).collect();
        assert_eq!(names, vec!["Ay", "Bee", "Cee"]);
    }
}
