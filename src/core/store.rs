//! In-memory store of declared dev flags.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Ordered mapping of declared flag names to their current values.
///
/// The set of names is fixed at construction: no operation introduces a
/// name that was not in the loaded mapping, and batch requests naming
/// undeclared flags skip those names instead of aborting. Iteration order
/// is lexicographic and deterministic.
///
/// One store instance lives for exactly one invocation; persistence is an
/// explicit, separate step owned by [`crate::io::flag_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagStore {
    flags: BTreeMap<String, bool>,
}

/// Result of a [`FlagStore::set_many`] batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetOutcome {
    /// Full snapshot of the mapping after the batch, ready to persist.
    pub flags: BTreeMap<String, bool>,
    /// Requested names that are not declared, in request order.
    pub skipped: Vec<String>,
}

impl FlagStore {
    pub fn new(flags: BTreeMap<String, bool>) -> Self {
        Self { flags }
    }

    /// Current value of a declared flag.
    pub fn get(&self, name: &str) -> Result<bool> {
        self.flags
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownFlag(name.to_string()))
    }

    /// Set every named declared flag to `value`.
    ///
    /// Idempotent per name; undeclared names are collected into
    /// [`SetOutcome::skipped`] and never abort the batch.
    pub fn set_many<I, S>(&mut self, names: I, value: bool) -> SetOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut skipped = Vec::new();
        for name in names {
            let name = name.as_ref();
            match self.flags.get_mut(name) {
                Some(slot) => {
                    tracing::trace!(flag = name, from = *slot, to = value, "update flag");
                    *slot = value;
                }
                None => skipped.push(name.to_string()),
            }
        }
        SetOutcome {
            flags: self.flags.clone(),
            skipped,
        }
    }

    /// Every declared flag name, in store iteration order.
    pub fn all_names(&self) -> Vec<String> {
        self.flags.keys().cloned().collect()
    }

    /// Iterate declared flags in store iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.flags.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}
