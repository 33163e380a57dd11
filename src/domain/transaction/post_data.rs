//! Gateway-ready form fields.

use std::collections::BTreeMap;
use std::fmt;

/// Fields whose values never show up in logs.
const MASKED_FIELDS: &[&str] = &["CARDNO", "CVC", "PSWD", "SHASIGN"];

/// Gateway field name to final value, kept in ascending byte order of the
/// field name. Sent verbatim as the form body.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PostData {
    fields: BTreeMap<String, String>,
}

impl PostData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Keep only the named fields.
    pub fn retain_only(&mut self, allowed: &[&str]) {
        self.fields.retain(|name, _| allowed.contains(&name.as_str()));
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Underlying map, suitable for form encoding.
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.fields
    }
}

impl fmt::Debug for PostData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, value) in &self.fields {
            if MASKED_FIELDS.contains(&name.as_str()) && !value.is_empty() {
                map.entry(name, &"[REDACTED]");
            } else {
                map.entry(name, value);
            }
        }
        map.finish()
    }
}
