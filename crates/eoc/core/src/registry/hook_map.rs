//! Insertion-ordered hook map.

use std::collections::HashMap;

use crate::hook::Hook;

/// Hook map that enumerates in insertion order.
///
/// Replacing an existing entry keeps its original position, so shadowing a
/// built-in hook does not move its record in the compiled output.
#[derive(Clone, Debug, Default)]
pub struct HookMap {
    entries: Vec<(String, Hook)>,
    index: HashMap<String, usize>,
}

impl HookMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `hook`, returning the entry it replaced.
    pub fn insert(&mut self, name: String, hook: Hook) -> Option<Hook> {
        if let Some(&slot) = self.index.get(&name) {
            return Some(std::mem::replace(&mut self.entries[slot].1, hook));
        }
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, hook));
        None
    }

    pub fn get(&self, name: &str) -> Option<&Hook> {
        self.index.get(name).map(|&slot| &self.entries[slot].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Hook)> + '_ {
        self.entries.iter().map(|(name, hook)| (name.as_str(), hook))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Hook)> for HookMap {
    fn from_iter<T: IntoIterator<Item = (String, Hook)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (name, hook) in iter {
            map.insert(name, hook);
        }
        map
    }
}
