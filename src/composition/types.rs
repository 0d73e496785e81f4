use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::species::recognized_species;

/// A bulk-rock analysis: species name to concentration.
///
/// A key that exists with a `None` value is a recognized but unknown
/// concentration. Absence of a key means the species is not part of this
/// record at all, and fill operations never create it. NaN handed in
/// through the `f64` API is stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, Option<f64>>",
    into = "BTreeMap<String, Option<f64>>"
)]
pub struct CompositionRecord {
    data: BTreeMap<String, Option<f64>>,
}

impl CompositionRecord {
    /// An empty record with no keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// A record in which every named species exists and is unknown.
    pub fn with_species<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            data: names.into_iter().map(|n| (n.into(), None)).collect(),
        }
    }

    /// A record carrying the full standard vocabulary, all unknown.
    pub fn standard() -> Self {
        Self::with_species(recognized_species())
    }

    // --- Accessors ---

    /// Known value of `key`, or `None` if unknown or absent.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.data.get(key).copied().flatten()
    }

    /// Value of `key` with NaN standing in for unknown or absent.
    pub fn value(&self, key: &str) -> f64 {
        self.get(key).unwrap_or(f64::NAN)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// True if `key` exists and is still unknown.
    pub fn is_unknown(&self, key: &str) -> bool {
        matches!(self.data.get(key), Some(None))
    }

    // --- Mutators ---

    /// Insert or overwrite `key`. NaN is stored as unknown.
    pub fn set(&mut self, key: &str, value: f64) {
        self.data.insert(key.to_string(), known(value));
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, key: &str, value: f64) -> Self {
        self.set(key, value);
        self
    }

    /// Fill-if-unknown merge.
    ///
    /// Writes `value` only when `key` exists, its current value is unknown,
    /// and `value` itself is known. Returns whether a write happened.
    pub fn fill(&mut self, key: &str, value: Option<f64>) -> bool {
        let Some(value) = value.and_then(known) else {
            return false;
        };
        match self.data.get_mut(key) {
            Some(slot) if slot.is_none() => {
                *slot = Some(value);
                true
            }
            _ => false,
        }
    }

    // --- Raw access ---

    /// Iterate `(species, value)` pairs in key order.
    pub fn species(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.data.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of keys, known or not.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of keys holding a known value.
    pub fn known_count(&self) -> usize {
        self.data.values().filter(|v| v.is_some()).count()
    }
}

/// `None` for NaN, `Some` otherwise.
pub(crate) fn known(value: f64) -> Option<f64> {
    (!value.is_nan()).then_some(value)
}

impl From<BTreeMap<String, Option<f64>>> for CompositionRecord {
    fn from(data: BTreeMap<String, Option<f64>>) -> Self {
        let data = data
            .into_iter()
            .map(|(k, v)| (k, v.and_then(known)))
            .collect();
        Self { data }
    }
}

impl From<CompositionRecord> for BTreeMap<String, Option<f64>> {
    fn from(record: CompositionRecord) -> Self {
        record.data
    }
}
