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

//! Reading and writing sidecar metadata files.

use harbor_core::{AssetError, MetadataRecord};
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Returns the sidecar path of `asset_path`: the full file name with
/// `.{meta_extension}` appended (`cube.fbx` -> `cube.fbx.asset`).
pub fn meta_path_for(asset_path: &Path, meta_extension: &str) -> PathBuf {
    let mut name: OsString = asset_path.as_os_str().to_owned();
    name.push(".");
    name.push(meta_extension);
    PathBuf::from(name)
}

/// Loads and parses the sidecar at `path`.
///
/// # Errors
/// [`AssetError::Io`] if the file cannot be read, [`AssetError::Parse`] if
/// it is not a valid record.
pub fn load_record(path: &Path) -> Result<MetadataRecord, AssetError> {
    let text = fs::read_to_string(path).map_err(|e| AssetError::io(path, e))?;
    MetadataRecord::from_yaml_str(&path.display().to_string(), &text)
}

/// Writes `record` to `path`, replacing any previous content.
///
/// The record is serialized in full before the file system is touched, then
/// written to a temporary file beside the target and renamed over it, so a
/// reader never observes a partially written sidecar.
///
/// # Errors
/// [`AssetError::Io`] if the directory is not writable or the rename fails.
pub fn save_record(path: &Path, record: &MetadataRecord) -> Result<(), AssetError> {
    let yaml = record.to_yaml_string()?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staging = NamedTempFile::new_in(dir).map_err(|e| AssetError::io(path, e))?;
    staging
        .write_all(yaml.as_bytes())
        .and_then(|_| staging.flush())
        .map_err(|e| AssetError::io(path, e))?;
    staging
        .persist(path)
        .map_err(|e| AssetError::io(path, e.error))?;

    log::debug!("Wrote {} metadata entries to '{}'", record.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn meta_path_appends_extension_to_full_name() {
        assert_eq!(
            meta_path_for(Path::new("Content/Models/cube.fbx"), "asset"),
            PathBuf::from("Content/Models/cube.fbx.asset")
        );
    }

    #[test]
    fn save_then_load_keeps_entries() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cube.fbx.asset");

        let mut record = MetadataRecord::new();
        record.insert("fileId", "{CUBE}");
        record.insert("bShouldBatchByMaterial", true);
        save_record(&path, &record).unwrap();

        let loaded = load_record(&path).unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn save_overwrites_previous_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tex.png.asset");
        fs::write(&path, "fileId: old\nstale: 1\n").unwrap();

        let mut record = MetadataRecord::new();
        record.insert("fileId", "new");
        save_record(&path, &record).unwrap();

        let loaded = load_record(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.get_text("fileId").as_deref(), Some("new"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let err = load_record(&dir.path().join("nope.asset")).unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }

    #[test]
    fn unwritable_target_is_an_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("x.asset");
        let err = save_record(&path, &MetadataRecord::new()).unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }
}
