// Insertion-ordered palettes and value helpers

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Mapping from category name to color that remembers insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedPalette {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl NamedPalette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a color for `name`.
    ///
    /// An existing name keeps its position and gets the new color; the
    /// previous color is returned.
    pub fn insert(&mut self, name: impl Into<String>, color: impl Into<String>) -> Option<String> {
        let name = name.into();
        let color = color.into();
        match self.index.get(&name) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, color)),
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, color));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.index.get(name).map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn colors(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, color)| color.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, color)| (name.as_str(), color.as_str()))
    }
}

impl<N: Into<String>, C: Into<String>> FromIterator<(N, C)> for NamedPalette {
    fn from_iter<I: IntoIterator<Item = (N, C)>>(iter: I) -> Self {
        let mut palette = NamedPalette::new();
        for (name, color) in iter {
            palette.insert(name, color);
        }
        palette
    }
}

impl IntoIterator for NamedPalette {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for NamedPalette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, color) in &self.entries {
            map.serialize_entry(name, color)?;
        }
        map.end()
    }
}

/// Distinct values in order of first occurrence
pub fn unique_in_order<T: Eq + Hash + Clone>(values: &[T]) -> Vec<T> {
    let mut seen = HashSet::new();
    values
        .iter()
        .filter(|v| seen.insert((*v).clone()))
        .cloned()
        .collect()
}

/// Extend `values` to `len` entries by repeating its last element.
/// Longer inputs and empty inputs are returned unchanged.
pub fn repeat_last<T: Clone>(mut values: Vec<T>, len: usize) -> Vec<T> {
    if let Some(last) = values.last().cloned() {
        if values.len() < len {
            values.resize(len, last);
        }
    }
    values
}

/// Keep the first `n` distinct values of `values` and replace every
/// other value with `other`.
pub fn merge_after_n(values: &[String], n: usize, other: &str) -> Vec<String> {
    let keep: HashSet<String> = unique_in_order(values).into_iter().take(n).collect();
    values
        .iter()
        .map(|v| if keep.contains(v) { v.clone() } else { other.to_string() })
        .collect()
}
