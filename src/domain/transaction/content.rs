//! Generic transaction content.

use std::collections::BTreeMap;

use crate::ports::FieldStore;

/// Generic key/value description of a payment (`amount`, `card_number`,
/// `expiration`, ...), independent of any gateway's field names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionContent {
    fields: BTreeMap<String, String>,
}

impl TransactionContent {
    /// Create empty content.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Remove a field, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    /// True when the field is present, even if empty.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FieldStore for TransactionContent {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    fn set_field(&mut self, name: &str, value: String) {
        self.fields.insert(name.to_string(), value);
    }
}

impl<K, V> FromIterator<(K, V)> for TransactionContent
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
