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

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A persistent identifier for a file in the project.
///
/// The value is whatever the sidecar's `fileId` key holds. It is independent
/// of the integer row id handed out by the catalog, so an asset keeps its UID
/// when it is moved or renamed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetUid(String);

impl AssetUid {
    /// Wraps an existing identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Creates a fresh identifier in the engine's file-id layout:
    /// an upper-case, brace-wrapped GUID.
    pub fn generate() -> Self {
        let hyphenated = Uuid::new_v4().hyphenated().to_string().to_uppercase();
        Self(format!("{{{hyphenated}}}"))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetUid {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AssetUid {
    fn from(value: String) -> Self {
        Self(value)
    }
}
