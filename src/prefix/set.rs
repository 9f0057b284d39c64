//! The run-wide prefix accumulator.

use std::collections::BTreeSet;

use super::{AddressFamily, Prefix};

/// Deduplicated, ordered set of prefixes for one address family.
///
/// Members are unique by exact string value and iterate in ascending
/// byte-wise order, which is the order the output file is written in.
/// The set only grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixSet {
    family: AddressFamily,
    members: BTreeSet<String>,
}

impl PrefixSet {
    /// Creates an empty set for the given family.
    #[must_use]
    pub const fn new(family: AddressFamily) -> Self {
        Self {
            family,
            members: BTreeSet::new(),
        }
    }

    /// Returns the family this set accumulates.
    #[must_use]
    pub const fn family(&self) -> AddressFamily {
        self.family
    }

    /// Inserts a single prefix.
    ///
    /// Returns `true` if the prefix was not already present. Prefixes
    /// classified under another family are never inserted.
    pub fn insert(&mut self, prefix: Prefix) -> bool {
        if prefix.family() != self.family {
            return false;
        }
        self.members.insert(prefix.into_string())
    }

    /// Merges classified prefixes into the set.
    ///
    /// Returns the number of prefixes that were newly added; already
    /// present values are no-ops.
    pub fn merge(&mut self, prefixes: impl IntoIterator<Item = Prefix>) -> usize {
        prefixes
            .into_iter()
            .map(|prefix| self.insert(prefix))
            .filter(|&inserted| inserted)
            .count()
    }

    /// Returns true if the exact string is a member.
    #[must_use]
    pub fn contains(&self, raw: &str) -> bool {
        self.members.contains(raw)
    }

    /// Returns the number of unique prefixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if no prefix has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates members in ascending byte-wise order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }
}
