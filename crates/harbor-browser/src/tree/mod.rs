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

//! The folder/file display tree.
//!
//! [`build_tree`] turns a flat [`AssetCatalog`](harbor_core::AssetCatalog)
//! into nested [`TreeGroup`]s (folders) and [`TreeItem`]s (files). Inside a
//! group, files come before subfolders, and both keep catalog order.
//! [`TreeNode`] is a borrowed cursor over the result, used to locate the
//! node showing a given file.

mod builder;
mod locator;

pub use builder::build_tree;

use harbor_core::{AssetEntry, AssetKind, AssetUid};
use std::fmt;

/// A file shown in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeItem {
    /// Label shown for the file.
    pub key: String,
    /// The catalog row id of the file.
    pub item_id: i32,
    /// The file's UID; the handle to its view.
    pub uid: AssetUid,
    /// The file's view family.
    pub kind: AssetKind,
}

impl TreeItem {
    fn from_entry(entry: &AssetEntry) -> Self {
        Self {
            key: entry.display_name.clone(),
            item_id: entry.id,
            uid: entry.uid.clone(),
            kind: entry.kind(),
        }
    }
}

/// A folder shown in the tree, owning its files and subfolders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeGroup {
    /// Label shown for the folder.
    pub key: String,
    /// The folder id. The root group carries
    /// [`ROOT_FOLDER_ID`](harbor_core::ROOT_FOLDER_ID).
    pub group_id: i32,
    /// Files directly in this folder.
    pub items: Vec<TreeItem>,
    /// Direct subfolders.
    pub groups: Vec<TreeGroup>,
}

impl TreeGroup {
    /// Creates an empty group.
    pub fn new(key: impl Into<String>, group_id: i32) -> Self {
        Self {
            key: key.into(),
            group_id,
            items: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Number of groups below this one, at any depth.
    pub fn group_count(&self) -> usize {
        self.groups.iter().map(|g| 1 + g.group_count()).sum()
    }

    /// Number of items in this group and every group below it.
    pub fn item_count(&self) -> usize {
        self.items.len() + self.groups.iter().map(TreeGroup::item_count).sum::<usize>()
    }
}

/// A borrowed node of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeNode<'a> {
    /// A folder.
    Group(&'a TreeGroup),
    /// A file.
    Item(&'a TreeItem),
}

impl<'a> TreeNode<'a> {
    /// The node's label.
    pub fn key(&self) -> &'a str {
        match self {
            TreeNode::Group(group) => &group.key,
            TreeNode::Item(item) => &item.key,
        }
    }

    /// Children in display order: files first, then subfolders. Items have
    /// no children.
    pub fn children(&self) -> impl Iterator<Item = TreeNode<'a>> + 'a {
        let (items, groups): (&'a [TreeItem], &'a [TreeGroup]) = match *self {
            TreeNode::Group(group) => (group.items.as_slice(), group.groups.as_slice()),
            TreeNode::Item(_) => (&[] as &[TreeItem], &[] as &[TreeGroup]),
        };
        items
            .iter()
            .map(TreeNode::Item)
            .chain(groups.iter().map(TreeNode::Group))
    }
}

/// Something [`build_tree`] could not place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeWarning {
    /// The folder's parent does not resolve to a folder reachable from the
    /// root, so the folder and everything in it were left out.
    OrphanedFolder {
        /// The folder left out.
        folder_id: i32,
        /// Its unresolved parent.
        parent_id: i32,
    },
    /// A second folder used an id that was already taken.
    DuplicateFolder {
        /// The repeated id.
        folder_id: i32,
    },
    /// The file's folder is not in the tree.
    OrphanedFile {
        /// The file left out.
        file_id: i32,
        /// Its UID.
        uid: AssetUid,
        /// The folder it claims to be in.
        folder_id: i32,
    },
}

impl fmt::Display for TreeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeWarning::OrphanedFolder {
                folder_id,
                parent_id,
            } => write!(
                f,
                "Folder {folder_id} dropped: parent {parent_id} is not reachable from the root"
            ),
            TreeWarning::DuplicateFolder { folder_id } => {
                write!(f, "Folder id {folder_id} appears more than once")
            }
            TreeWarning::OrphanedFile {
                file_id,
                uid,
                folder_id,
            } => write!(
                f,
                "File {file_id} ({uid}) dropped: folder {folder_id} is not in the tree"
            ),
        }
    }
}

/// The display tree plus anything that could not be placed in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderTree {
    /// The project root group.
    pub root: TreeGroup,
    /// Problems found while building.
    pub warnings: Vec<TreeWarning>,
}

impl FolderTree {
    /// Whether every folder and file of the catalog made it into the tree.
    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }

    /// The root as a [`TreeNode`].
    pub fn root_node(&self) -> TreeNode<'_> {
        TreeNode::Group(&self.root)
    }
}
