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

//! Raw reads of primary asset files.

use harbor_core::AssetError;
use std::fs;
use std::path::Path;

/// Reads the whole file at `path` as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String, AssetError> {
    fs::read_to_string(path).map_err(|e| AssetError::io(path, e))
}
