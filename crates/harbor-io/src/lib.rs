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

//! # Harbor I/O
//!
//! Blocking file-system services for the asset browser. Every function here
//! runs to completion on the calling thread; callers that need to stay
//! responsive move these calls onto a worker themselves.
//!
//! - [`record`]: sidecar metadata load and atomic save.
//! - [`text`]: raw primary-file reads.
//! - [`image`]: preview decoding for texture assets.
//! - [`manifest`]: the per-project `Harbor.toml` configuration.
//! - [`scan`]: building a [`Catalog`](harbor_core::Catalog) from a content folder.

pub mod image;
pub mod manifest;
pub mod record;
pub mod scan;
pub mod text;

pub use self::image::{decode_image, ImagePreview};
pub use manifest::{load_manifest, ProjectManifest, MANIFEST_FILE_NAME};
pub use record::{load_record, meta_path_for, save_record};
pub use scan::scan_project;
pub use text::read_text;
