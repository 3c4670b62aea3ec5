use serde::{Deserialize, Serialize};

/// Name reported for values that have no entry in the table.
pub const INVALID_NAME: &str = "INVALID";

/// A single named constant (e.g., `NoDevice = 100`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnumEntry {
    /// Member identifier, emitted verbatim in every target
    pub name: String,
    /// Member value (backing type is a 32-bit unsigned integer)
    pub value: u32,
}

impl EnumEntry {
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Ordered table of named constants shared by every emitted target.
///
/// Insertion order is emission order. Values need not be sorted or
/// contiguous. Duplicate names are representable here so that validation
/// can report them; see [`crate::validator::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnumTable {
    entries: Vec<EnumEntry>,
}

impl EnumTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style append.
    pub fn with_entry(mut self, name: impl Into<String>, value: u32) -> Self {
        self.push(name, value);
        self
    }

    /// Append an entry at the end of the table.
    pub fn push(&mut self, name: impl Into<String>, value: u32) {
        self.entries.push(EnumEntry::new(name, value));
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EnumEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the value declared for `name`.
    pub fn get(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.value)
    }

    /// Symbolic name for `value`, or [`INVALID_NAME`] when no entry has it.
    ///
    /// Matches the generated native `to_string` helper: total over the whole
    /// `u32` domain, first declared entry wins.
    pub fn name_of(&self, value: u32) -> &str {
        self.entries
            .iter()
            .find(|e| e.value == value)
            .map(|e| e.name.as_str())
            .unwrap_or(INVALID_NAME)
    }
}

impl<'a> IntoIterator for &'a EnumTable {
    type Item = &'a EnumEntry;
    type IntoIter = std::slice::Iter<'a, EnumEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for EnumTable {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, value)| EnumEntry::new(name, value))
                .collect(),
        }
    }
}
