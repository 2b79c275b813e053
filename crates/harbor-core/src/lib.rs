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

//! # Harbor Core
//!
//! Foundational crate of the asset browser. It holds the types every other
//! crate speaks in: asset identities and kinds, the flat folder/file catalog,
//! the generic metadata record read from sidecar files, and the error type.
//!
//! Nothing in here touches the file system. Reading and writing live in
//! `harbor-io`, and the typed views built on top live in `harbor-browser`.

#![warn(missing_docs)]

pub mod asset;
pub mod catalog;
pub mod error;
pub mod event;
pub mod metadata;

pub use asset::{AssetKind, AssetUid};
pub use catalog::{AssetCatalog, AssetEntry, Catalog, Folder, ProjectRoot, ROOT_FOLDER_ID};
pub use error::AssetError;
pub use event::{ChangeBus, FieldChanged};
pub use metadata::MetadataRecord;
