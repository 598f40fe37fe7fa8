use serde::Serialize;
use std::fmt;

/// Holds one recorded parameter assignment
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HistoryEntry {
    /// Canonical parameter name
    pub name: &'static str,

    /// Assigned value
    pub value: f64,
}

/// Holds the ordered, append-only log of parameter assignments of a model
///
/// One entry is appended per successful assignment; absent values are never recorded.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ParameterHistory {
    entries: Vec<HistoryEntry>,
}

impl ParameterHistory {
    /// Allocates a new (empty) instance
    pub fn new() -> Self {
        ParameterHistory { entries: Vec::new() }
    }

    /// Appends an entry and returns a copy of it
    pub(crate) fn push(&mut self, name: &'static str, value: f64) -> HistoryEntry {
        let entry = HistoryEntry { name, value };
        self.entries.push(entry);
        entry
    }

    /// Returns all entries in assignment order
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the most recent value recorded for a parameter
    pub fn latest(&self, name: &str) -> Option<f64> {
        self.entries.iter().rev().find(|e| e.name == name).map(|e| e.value)
    }
}

/// Holds the notice issued when a deprecated parameter name is used
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DeprecationNotice {
    /// The deprecated name given by the caller
    pub alias: &'static str,

    /// The canonical name that received the value
    pub canonical: &'static str,
}

impl fmt::Display for DeprecationNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is deprecated, use `{}`", self.alias, self.canonical)
    }
}

/// Holds the outcome of a parameter assignment
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamUpdate {
    /// The history entry appended by the assignment (None if the value was absent)
    pub entry: Option<HistoryEntry>,

    /// Set when the caller used a deprecated name
    pub notice: Option<DeprecationNotice>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
