use std::collections::{BTreeMap, btree_map};

use crate::util::{Extract, ExtractError};

/// A single `[name]` block: variable names mapped to their raw values,
/// ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    entries: BTreeMap<String, String>,
}

impl Section {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Insert a value, returning the previous value for the same key, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Look up `key` and parse its value; `None` when the key is absent.
    pub fn extract<T: Extract>(&self, key: &str) -> Option<Result<T, ExtractError>> {
        self.get(key).map(T::extract)
    }

    pub(crate) fn pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Replace `%(key)` tokens in this section's values using this section's
    /// own pairs. Source keys are visited in map order and their values are
    /// re-read at each step, so a replacement made early in the scan is
    /// picked up when a later key sources from it. An entry never replaces
    /// its own token inside its own value.
    pub(crate) fn interpolate_self(&mut self) {
        let keys = self.entries.keys().cloned().collect::<Vec<String>>();

        for key in keys {
            let Some(value) = self.entries.get(&key).cloned() else {
                continue;
            };
            let token = token(&key);

            for (other, target) in &mut self.entries {
                if *other == key {
                    continue;
                }
                replace(target, &token, &value);
            }
        }
    }

    /// Replace `%(key)` tokens in this section's values using another
    /// section's pairs. A destination entry whose key and value both match
    /// the source pair is skipped.
    pub(crate) fn interpolate_from(&mut self, src: &[(String, String)]) {
        for (key, value) in src {
            let token = token(key);

            for (other, target) in &mut self.entries {
                if other == key && target == value {
                    continue;
                }
                replace(target, &token, value);
            }
        }
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(String, String)> for Section {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

fn token(key: &str) -> String {
    format!("%({key})")
}

// Replacement text is never rescanned; a token it introduces survives the pass.
fn replace(target: &mut String, token: &str, value: &str) {
    if target.contains(token) {
        *target = target.replace(token, value);
    }
}
