use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use super::scalar_to_string;

/// A key-value store of extra connection options.
///
/// Connections carry two of these: a plain store and a secret store whose
/// values are encrypted at rest by the host. Values are scalars and are
/// always read back as strings.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtraParams(BTreeMap<String, Value>);

impl ExtraParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, builder style
    pub fn with(mut self, key: impl Into<String>, val: impl Into<Value>) -> Self {
        self.insert(key, val);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, val: impl Into<Value>) {
        self.0.insert(key.into(), val.into());
    }

    /// Gets the value of the key as a string, if it is set to a scalar
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.0.get(key).and_then(scalar_to_string)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ExtraParams {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Looks up `key` in each of the `sources` in order, returning the first hit
pub fn resolve_first(key: &str, sources: &[&ExtraParams]) -> Option<String> {
    sources.iter().find_map(|s| s.get_str(key))
}
