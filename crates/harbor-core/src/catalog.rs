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

//! The flat folder/file listing of a project.
//!
//! A catalog is what an enumeration service hands to the browser: folders
//! referencing their parent by id, and files referencing their folder by id.
//! The browser never mutates it; the display tree is derived from it.

use crate::asset::{AssetKind, AssetUid};
use std::path::PathBuf;

/// Parent id carried by folders that sit directly under the project root.
pub const ROOT_FOLDER_ID: i32 = -1;

/// The project the catalog describes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectRoot {
    /// Display name, used as the key of the root tree group.
    pub name: String,
}

/// A folder in the project.
///
/// The parent ids of all folders are expected to form a tree that terminates
/// at [`ROOT_FOLDER_ID`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    /// Catalog-unique folder id.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Id of the containing folder, or [`ROOT_FOLDER_ID`].
    pub parent_id: i32,
}

impl Folder {
    /// Creates a folder record.
    pub fn new(id: i32, name: impl Into<String>, parent_id: i32) -> Self {
        Self {
            id,
            name: name.into(),
            parent_id,
        }
    }

    /// Whether the folder hangs directly off the project root.
    pub fn is_top_level(&self) -> bool {
        self.parent_id == ROOT_FOLDER_ID
    }
}

/// A file in the project, together with the paths of its primary file and
/// its sidecar metadata file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    /// Catalog row id. Not stable across scans.
    pub id: i32,
    /// Id of the folder that contains the file.
    pub folder_id: i32,
    /// Stable identifier read from the sidecar.
    pub uid: AssetUid,
    /// Display name, usually the file name.
    pub display_name: String,
    /// The primary asset file.
    pub asset_path: PathBuf,
    /// The sidecar metadata file.
    pub meta_path: PathBuf,
}

impl AssetEntry {
    /// The typed view family for this file.
    pub fn kind(&self) -> AssetKind {
        AssetKind::from_path(&self.asset_path)
    }
}

/// Read-only access to a project listing.
pub trait AssetCatalog {
    /// The project root.
    fn root(&self) -> &ProjectRoot;
    /// All folders, in enumeration order.
    fn folders(&self) -> &[Folder];
    /// All files, in enumeration order.
    fn files(&self) -> &[AssetEntry];

    /// Looks a file up by UID.
    fn file(&self, uid: &AssetUid) -> Option<&AssetEntry> {
        self.files().iter().find(|entry| &entry.uid == uid)
    }
}

/// An owned, in-memory [`AssetCatalog`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// The project root.
    pub root: ProjectRoot,
    /// All folders, in enumeration order.
    pub folders: Vec<Folder>,
    /// All files, in enumeration order.
    pub files: Vec<AssetEntry>,
}

impl Catalog {
    /// Creates an empty catalog for a project called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            root: ProjectRoot { name: name.into() },
            folders: Vec::new(),
            files: Vec::new(),
        }
    }
}

impl AssetCatalog for Catalog {
    fn root(&self) -> &ProjectRoot {
        &self.root
    }

    fn folders(&self) -> &[Folder] {
        &self.folders
    }

    fn files(&self) -> &[AssetEntry] {
        &self.files
    }
}
