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

//! Per-project configuration read from `Harbor.toml`.

use harbor_core::AssetError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the manifest at the project root.
pub const MANIFEST_FILE_NAME: &str = "Harbor.toml";

/// Represents the structure of the `Harbor.toml` manifest file.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectManifest {
    /// Display name of the project. Falls back to the project directory name.
    pub name: Option<String>,
    /// Directory scanned for assets, relative to the project root.
    pub content_directory: PathBuf,
    /// Extension appended to an asset's file name to locate its sidecar.
    pub meta_extension: String,
}

impl Default for ProjectManifest {
    /// Provides the configuration used when `Harbor.toml` is not found:
    /// assets under `Content/`, sidecars ending in `.asset`.
    fn default() -> Self {
        Self {
            name: None,
            content_directory: PathBuf::from("Content"),
            meta_extension: "asset".to_owned(),
        }
    }
}

impl ProjectManifest {
    /// The project name, or the last component of `project_dir`.
    pub fn project_name(&self, project_dir: &Path) -> String {
        self.name.clone().unwrap_or_else(|| {
            project_dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "Project".to_owned())
        })
    }

    /// Absolute content directory for a project rooted at `project_dir`.
    pub fn content_root(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.content_directory)
    }
}

/// Loads `Harbor.toml` from `project_dir`.
/// If the file does not exist, it returns the default configuration.
pub fn load_manifest(project_dir: &Path) -> Result<ProjectManifest, AssetError> {
    let manifest_path = project_dir.join(MANIFEST_FILE_NAME);
    if !manifest_path.exists() {
        log::info!(
            "No '{}' found. Using default configuration.",
            manifest_path.display()
        );
        return Ok(ProjectManifest::default());
    }

    let manifest_str =
        fs::read_to_string(&manifest_path).map_err(|e| AssetError::io(&manifest_path, e))?;
    let manifest = toml::from_str(&manifest_str).map_err(|e| AssetError::Config {
        path: manifest_path.clone(),
        message: e.to_string(),
    })?;

    log::info!("Loaded configuration from '{}'", manifest_path.display());
    Ok(manifest)
}
