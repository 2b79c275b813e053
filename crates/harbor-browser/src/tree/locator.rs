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

use super::{FolderTree, TreeGroup, TreeNode};
use harbor_core::AssetUid;

impl<'a> TreeNode<'a> {
    /// Depth-first search for the item showing the file `uid`.
    ///
    /// Children are visited in display order and the first match wins.
    pub fn find_file(self, uid: &AssetUid) -> Option<TreeNode<'a>> {
        match self {
            TreeNode::Item(item) => (item.uid == *uid).then_some(self),
            TreeNode::Group(_) => self.children().find_map(|child| child.find_file(uid)),
        }
    }
}

impl TreeGroup {
    /// Finds the group with `group_id`: this one, or the first match in a
    /// pre-order walk of its subgroups.
    pub fn find_group(&self, group_id: i32) -> Option<&TreeGroup> {
        if self.group_id == group_id {
            return Some(self);
        }
        self.groups
            .iter()
            .find_map(|group| group.find_group(group_id))
    }

    /// Finds the group that directly contains the file `uid`.
    pub fn find_owner(&self, uid: &AssetUid) -> Option<&TreeGroup> {
        if self.items.iter().any(|item| item.uid == *uid) {
            return Some(self);
        }
        self.groups.iter().find_map(|group| group.find_owner(uid))
    }
}

impl FolderTree {
    /// Finds the node showing the file `uid`.
    pub fn find_file(&self, uid: &AssetUid) -> Option<TreeNode<'_>> {
        self.root_node().find_file(uid)
    }

    /// Finds the group showing folder `group_id`.
    pub fn find_group(&self, group_id: i32) -> Option<&TreeGroup> {
        self.root.find_group(group_id)
    }
}
