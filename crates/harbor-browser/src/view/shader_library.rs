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

use super::{TypedView, ViewState};
use harbor_core::{AssetEntry, AssetError, AssetKind, MetadataRecord};
use harbor_io::read_text;

/// A GLSL source shared between shaders, shown verbatim.
#[derive(Debug)]
pub struct ShaderLibraryView {
    state: ViewState,
    code: String,
}

impl ShaderLibraryView {
    /// Wraps `entry`.
    pub fn new(entry: AssetEntry, record: MetadataRecord) -> Self {
        Self {
            state: ViewState::new(entry, record),
            code: String::new(),
        }
    }

    /// The library source, as read from the asset file.
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl TypedView for ShaderLibraryView {
    fn state(&self) -> &ViewState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    fn kind(&self) -> AssetKind {
        AssetKind::ShaderLibrary
    }

    fn load_fields(&mut self) -> Result<(), AssetError> {
        self.code = read_text(&self.state.entry().asset_path)?;
        Ok(())
    }

    fn store_fields(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::testing::entry_in;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_source_verbatim_once() {
        let dir = tempdir().unwrap();
        let entry = entry_in(dir.path(), "noise.glsl", "{NOISE}");
        fs::write(&entry.asset_path, "float noise(vec2 p);\n").unwrap();
        let mut view = ShaderLibraryView::new(entry, MetadataRecord::new());

        assert!(view.preload_resources(false));
        assert_eq!(view.code(), "float noise(vec2 p);\n");

        fs::write(&view.state().entry().asset_path, "changed").unwrap();
        assert!(view.preload_resources(false));
        assert_eq!(view.code(), "float noise(vec2 p);\n");

        assert!(view.preload_resources(true));
        assert_eq!(view.code(), "changed");
    }

    #[test]
    fn missing_file_fails_soft() {
        let dir = tempdir().unwrap();
        let mut view = ShaderLibraryView::new(
            entry_in(dir.path(), "gone.glsl", "{GONE}"),
            MetadataRecord::new(),
        );

        assert!(!view.preload_resources(false));
        assert!(view.display_name().starts_with("I/O error"));
        assert!(view.code().is_empty());
    }
}
