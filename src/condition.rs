//! Caller-owned condition tables
//!
//! A condition is a named `(field, value)` fact such as "applicant contains
//! Acme", referenced from expressions by its identifier (`S1`, `S2`, ...).
//! The engine only ever reads a table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A named search condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub id: String,
    /// Frontend field key, see [`crate::field::SearchField::from_key`]
    pub field: String,
    pub value: String,
    /// Optional caller-side type hint, carried through but not interpreted
    pub kind: Option<String>,
}

impl Condition {
    pub fn new(id: impl Into<String>, field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            field: field.into(),
            value: value.into(),
            kind: None,
        }
    }
}

/// Serialized form of a condition, keyed by id in the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionEntry {
    pub field: String,
    pub value: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Conditions indexed by identifier
///
/// Serializes as a JSON object: `{"S1": {"field": "applicant", "value": "Acme"}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, ConditionEntry>",
    into = "BTreeMap<String, ConditionEntry>"
)]
pub struct ConditionTable {
    conditions: BTreeMap<String, Condition>,
}

impl ConditionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&Condition> {
        self.conditions.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.conditions.contains_key(id)
    }

    /// Insert a condition under its own id, returning any condition it replaced
    pub fn insert(&mut self, condition: Condition) -> Option<Condition> {
        self.conditions.insert(condition.id.clone(), condition)
    }

    /// Add a condition under the next sequential identifier and return it
    pub fn add(&mut self, field: impl Into<String>, value: impl Into<String>) -> String {
        let id = self.next_id();
        self.insert(Condition::new(id.clone(), field, value));
        id
    }

    /// `S<n>` where `n` is one past the highest numbered identifier present
    pub fn next_id(&self) -> String {
        let highest = self
            .conditions
            .keys()
            .filter_map(|id| sequence_number(id))
            .max()
            .unwrap_or(0);
        format!("S{}", highest + 1)
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Condition> {
        self.conditions.values()
    }
}

fn sequence_number(id: &str) -> Option<u64> {
    let digits = id.strip_prefix('S')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

impl FromIterator<Condition> for ConditionTable {
    fn from_iter<T: IntoIterator<Item = Condition>>(iter: T) -> Self {
        let mut table = ConditionTable::new();
        table.extend(iter);
        table
    }
}

impl Extend<Condition> for ConditionTable {
    fn extend<T: IntoIterator<Item = Condition>>(&mut self, iter: T) {
        for condition in iter {
            self.insert(condition);
        }
    }
}

impl From<BTreeMap<String, ConditionEntry>> for ConditionTable {
    fn from(entries: BTreeMap<String, ConditionEntry>) -> Self {
        entries
            .into_iter()
            .map(|(id, entry)| Condition {
                id,
                field: entry.field,
                value: entry.value,
                kind: entry.kind,
            })
            .collect()
    }
}

impl From<ConditionTable> for BTreeMap<String, ConditionEntry> {
    fn from(table: ConditionTable) -> Self {
        table
            .conditions
            .into_iter()
            .map(|(id, condition)| {
                (
                    id,
                    ConditionEntry {
                        field: condition.field,
                        value: condition.value,
                        kind: condition.kind,
                    },
                )
            })
            .collect()
    }
}
