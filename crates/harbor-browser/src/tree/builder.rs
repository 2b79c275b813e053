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

use super::{FolderTree, TreeGroup, TreeItem, TreeWarning};
use harbor_core::{AssetCatalog, Folder, ROOT_FOLDER_ID};
use std::collections::{HashMap, HashSet};

/// Builds the display tree for `catalog`.
///
/// Folders are indexed by parent id in a single pass and then attached
/// top-down from the root, so the cost is linear in the number of folders
/// and files. Siblings keep the order in which the catalog lists them.
///
/// Nothing is dropped silently: folders whose parent chain does not reach
/// the root (missing parents, cycles), repeated folder ids, and files whose
/// folder is not in the tree are returned as [`TreeWarning`]s and logged.
/// Files assigned to [`ROOT_FOLDER_ID`] are items of the root group.
pub fn build_tree<C: AssetCatalog + ?Sized>(catalog: &C) -> FolderTree {
    let mut warnings = Vec::new();

    let mut items: HashMap<i32, Vec<TreeItem>> = HashMap::new();
    for file in catalog.files() {
        items
            .entry(file.folder_id)
            .or_default()
            .push(TreeItem::from_entry(file));
    }

    // Stable sort: folders sharing a parent stay in catalog order.
    let mut folders: Vec<&Folder> = catalog.folders().iter().collect();
    folders.sort_by_key(|folder| folder.parent_id);

    let mut seen = HashSet::from([ROOT_FOLDER_ID]);
    let mut subfolders: HashMap<i32, Vec<&Folder>> = HashMap::new();
    for folder in folders {
        if !seen.insert(folder.id) {
            warnings.push(TreeWarning::DuplicateFolder {
                folder_id: folder.id,
            });
            continue;
        }
        subfolders.entry(folder.parent_id).or_default().push(folder);
    }

    let mut root = TreeGroup::new(catalog.root().name.clone(), ROOT_FOLDER_ID);
    root.items = items.remove(&ROOT_FOLDER_ID).unwrap_or_default();
    attach_subfolders(&mut root, &mut subfolders, &mut items);

    // Whatever was not consumed hangs off a parent the root never reached.
    warnings.extend(subfolders.into_values().flatten().map(|folder| TreeWarning::OrphanedFolder {
        folder_id: folder.id,
        parent_id: folder.parent_id,
    }));

    for (folder_id, folder_items) in items {
        warnings.extend(folder_items.into_iter().map(|item| TreeWarning::OrphanedFile {
            file_id: item.item_id,
            uid: item.uid,
            folder_id,
        }));
    }

    // Keep the report stable regardless of hash order.
    warnings.sort_by_key(|warning| match warning {
        TreeWarning::DuplicateFolder { folder_id } => (0, *folder_id),
        TreeWarning::OrphanedFolder { folder_id, .. } => (1, *folder_id),
        TreeWarning::OrphanedFile { file_id, .. } => (2, *file_id),
    });

    for warning in &warnings {
        log::warn!("{warning}");
    }

    FolderTree { root, warnings }
}

/// Moves every folder whose parent is `group` out of `subfolders` and into
/// `group`, recursively. Each folder is taken at most once, so cycles that
/// are unreachable from the root are simply never visited.
fn attach_subfolders(
    group: &mut TreeGroup,
    subfolders: &mut HashMap<i32, Vec<&Folder>>,
    items: &mut HashMap<i32, Vec<TreeItem>>,
) {
    let Some(children) = subfolders.remove(&group.group_id) else {
        return;
    };

    for folder in children {
        let mut child = TreeGroup::new(folder.name.clone(), folder.id);
        child.items = items.remove(&folder.id).unwrap_or_default();
        attach_subfolders(&mut child, subfolders, items);
        group.groups.push(child);
    }
}
