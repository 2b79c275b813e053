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

//! Identity and classification primitives for assets.
//!
//! - [`AssetUid`]: the stable identifier stored in every sidecar file.
//! - [`AssetKind`]: which typed view an asset gets, chosen from its extension.
//! - The texture sampling and format enums persisted in texture sidecars.

mod kind;
mod texture;
mod uid;

pub use kind::*;
pub use texture::*;
pub use uid::*;
