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

//! Conversions between record nodes and typed field values.

use harbor_core::asset::UnknownVariant;
use harbor_core::metadata::{kind_of, scalar_text};
use harbor_core::{AssetError, AssetUid};
use serde_yaml::Value;
use std::str::FromStr;

/// Reads a boolean. Accepts YAML booleans and the words `true`/`false` in
/// any case, surrounded by optional whitespace.
pub(crate) fn parse_bool(key: &str, value: &Value) -> Result<bool, AssetError> {
    if let Value::Bool(b) = value {
        return Ok(*b);
    }

    let text = scalar_text(value)
        .ok_or_else(|| AssetError::parse(key, format!("expected a boolean, found {}", kind_of(value))))?;
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(AssetError::parse(key, format!("'{text}' is not a boolean")))
    }
}

/// Reads an enum stored by its symbolic name.
pub(crate) fn parse_symbol<T>(key: &str, value: &Value) -> Result<T, AssetError>
where
    T: FromStr<Err = UnknownVariant>,
{
    let text = scalar_text(value)
        .ok_or_else(|| AssetError::parse(key, format!("expected a name, found {}", kind_of(value))))?;
    text.parse().map_err(|e| AssetError::parse(key, e))
}

/// Reads a list of UIDs stored as a YAML sequence of scalars.
///
/// A null or scalar node holds no entries. A mapping, or a sequence entry
/// that is not a scalar, is rejected.
pub(crate) fn parse_uid_list(key: &str, value: &Value) -> Result<Vec<AssetUid>, AssetError> {
    match value {
        Value::Sequence(entries) => entries
            .iter()
            .map(|entry| {
                scalar_text(entry).map(AssetUid::from).ok_or_else(|| {
                    AssetError::parse(key, format!("list entry is {}, not a UID", kind_of(entry)))
                })
            })
            .collect(),
        Value::Mapping(_) => Err(AssetError::parse(key, "expected a list, found a mapping")),
        Value::Tagged(tagged) => parse_uid_list(key, &tagged.value),
        _ => Ok(Vec::new()),
    }
}

/// Writes a list of UIDs as a YAML sequence.
pub(crate) fn uid_list_node(uids: &[AssetUid]) -> Value {
    Value::Sequence(
        uids.iter()
            .map(|uid| Value::String(uid.as_str().to_owned()))
            .collect(),
    )
}
