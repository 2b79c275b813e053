// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The generic key/value record stored in a sidecar metadata file.
//!
//! A record is a flat YAML mapping with string keys. Values are kept as YAML
//! nodes so structured entries (such as a list of material UIDs) survive a
//! load/save cycle untouched. Typed views convert to and from this record
//! only at their I/O boundary.

use crate::asset::AssetUid;
use crate::error::AssetError;
use serde_yaml::{Mapping, Value};

/// Key holding the asset's UID in every sidecar.
pub const FILE_ID_KEY: &str = "fileId";

/// An ordered, string-keyed mapping of metadata values.
///
/// Keys are case-sensitive and unique. Insertion order is preserved and is
/// the order keys are written back in. A missing key is never an error; the
/// reader simply keeps its default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataRecord {
    entries: Mapping,
}

impl MetadataRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a record from YAML text.
    ///
    /// An empty document yields an empty record. `context` names the source
    /// in error messages.
    ///
    /// # Errors
    /// Returns [`AssetError::Parse`] if the text is not YAML, if its root is
    /// not a mapping, or if any key is not a string.
    pub fn from_yaml_str(context: &str, text: &str) -> Result<Self, AssetError> {
        if text.trim().is_empty() {
            return Ok(Self::new());
        }

        let document: Value =
            serde_yaml::from_str(text).map_err(|e| AssetError::parse(context, e))?;

        let entries = match document {
            Value::Null => Mapping::new(),
            Value::Mapping(entries) => entries,
            other => {
                return Err(AssetError::parse(
                    context,
                    format!("expected a mapping at the document root, found {}", kind_of(&other)),
                ))
            }
        };

        if let Some(key) = entries.keys().find(|key| !key.is_string()) {
            return Err(AssetError::parse(
                context,
                format!("mapping key {key:?} is not a string"),
            ));
        }

        Ok(Self { entries })
    }

    /// Serializes the record to YAML text.
    pub fn to_yaml_string(&self) -> Result<String, AssetError> {
        if self.entries.is_empty() {
            return Ok(String::new());
        }
        serde_yaml::to_string(&self.entries).map_err(|e| AssetError::parse("metadata record", e))
    }

    /// Returns the node stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns the scalar text stored under `key`, if the key exists and
    /// holds a scalar.
    pub fn get_text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(scalar_text)
    }

    /// Stores `value` under `key`, returning the previous node.
    ///
    /// Replacing an existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(Value::String(key.into()), value.into())
    }

    /// Removes `key`, returning its node.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The UID recorded under [`FILE_ID_KEY`].
    pub fn uid(&self) -> Option<AssetUid> {
        self.get_text(FILE_ID_KEY)
            .filter(|id| !id.is_empty())
            .map(AssetUid::from)
    }

    /// Iterates over entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .filter_map(|(key, value)| key.as_str().map(|key| (key, value)))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the record has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Textual form of a scalar node.
///
/// Strings come back verbatim, booleans and numbers in their canonical
/// spelling, and null as the empty string. Sequences and mappings have no
/// scalar form.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Short human name of a node's type, for error messages.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged node",
    }
}
