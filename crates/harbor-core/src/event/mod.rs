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

//! Change notifications for typed asset views.
//!
//! Views do not call back into the UI. Each effective field assignment
//! publishes a [`FieldChanged`] on a [`ChangeBus`], and whoever drives the
//! views polls the bus when it is ready to refresh.

mod bus;

pub use self::bus::ChangeBus;

use crate::asset::AssetUid;

/// A field of a typed view took a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldChanged {
    /// The asset whose view changed.
    pub uid: AssetUid,
    /// Name of the field that changed.
    pub field: &'static str,
}
