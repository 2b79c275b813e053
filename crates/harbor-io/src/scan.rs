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

//! Builds a [`Catalog`] by walking a project's content directory.

use crate::manifest::ProjectManifest;
use crate::record::{load_record, meta_path_for};
use harbor_core::{AssetEntry, AssetError, Catalog, Folder, ROOT_FOLDER_ID};
use std::collections::HashMap;
use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Enumerates the folders and assets of the project rooted at `project_dir`.
///
/// Every directory below the content root becomes a [`Folder`]; top-level
/// directories get [`ROOT_FOLDER_ID`] as parent. Every file with a readable
/// sidecar that carries a `fileId` becomes an [`AssetEntry`]. Files directly
/// in the content root are assigned to [`ROOT_FOLDER_ID`]. Entries are
/// visited in file-name order, and folder and file ids are handed out in
/// that order starting from zero.
///
/// # Errors
/// [`AssetError::Io`] if the content directory does not exist. Problems with
/// individual files are logged and the file is skipped.
pub fn scan_project(project_dir: &Path, manifest: &ProjectManifest) -> Result<Catalog, AssetError> {
    let content_root = manifest.content_root(project_dir);
    if !content_root.is_dir() {
        return Err(AssetError::io(
            &content_root,
            io::Error::new(io::ErrorKind::NotFound, "content directory not found"),
        ));
    }

    let mut catalog = Catalog::new(manifest.project_name(project_dir));
    let mut folder_ids: HashMap<PathBuf, i32> = HashMap::new();
    let meta_extension = OsStr::new(&manifest.meta_extension);

    let walker = WalkDir::new(&content_root).min_depth(1).sort_by_file_name();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry while scanning: {e}");
                continue;
            }
        };

        let path = entry.path();
        let parent_id = path
            .parent()
            .and_then(|parent| folder_ids.get(parent).copied())
            .unwrap_or(ROOT_FOLDER_ID);
        let name = entry.file_name().to_string_lossy().into_owned();

        if entry.file_type().is_dir() {
            let id = catalog.folders.len() as i32;
            folder_ids.insert(path.to_path_buf(), id);
            catalog.folders.push(Folder::new(id, name, parent_id));
            continue;
        }

        if !entry.file_type().is_file() || path.extension() == Some(meta_extension) {
            continue;
        }

        let meta_path = meta_path_for(path, &manifest.meta_extension);
        if !meta_path.is_file() {
            log::debug!("'{}' has no sidecar, not listed", path.display());
            continue;
        }

        let record = match load_record(&meta_path) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Skipping '{}': {e}", path.display());
                continue;
            }
        };
        let Some(uid) = record.uid() else {
            log::warn!("Skipping '{}': sidecar has no fileId", path.display());
            continue;
        };

        catalog.files.push(AssetEntry {
            id: catalog.files.len() as i32,
            folder_id: parent_id,
            uid,
            display_name: name,
            asset_path: path.to_path_buf(),
            meta_path,
        });
    }

    log::info!(
        "Scanned '{}': {} folders, {} assets",
        content_root.display(),
        catalog.folders.len(),
        catalog.files.len()
    );
    Ok(catalog)
}
