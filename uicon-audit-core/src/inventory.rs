//! The set of icon identifier strings present on disk.

use std::collections::HashSet;

/// Membership set of on-disk icon identifiers.
///
/// Built once from the icon-directory scan and only read afterwards; the
/// resolver probes it with candidate identifier strings. Membership is the
/// sole operation resolution needs.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    names: HashSet<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<String> for Inventory {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for Inventory {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}
