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

//! # Harbor Browser
//!
//! The view-model layer of the asset browser.
//!
//! - [`view`]: typed, editable views over each asset's metadata, with dirty
//!   tracking, fail-soft loading and write-back.
//! - [`tree`]: the folder/file display tree built from a flat catalog, and
//!   lookups into it.
//! - [`AssetBrowser`]: ties a scanned project, its views and its change
//!   notifications together.
//!
//! Everything here is single-threaded and blocking. The owner of an
//! [`AssetBrowser`] is expected to drive it from one thread.

pub mod browser;
pub mod tree;
pub mod view;

pub use browser::AssetBrowser;
pub use tree::{build_tree, FolderTree, TreeGroup, TreeItem, TreeNode, TreeWarning};
pub use view::{
    AssetView, GenericView, ModelView, ShaderLibraryView, ShaderView, TextureView, TypedView,
    ViewState,
};
