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

use super::fields::{parse_bool, parse_uid_list, uid_list_node};
use super::{TypedView, ViewState};
use harbor_core::{AssetEntry, AssetError, AssetKind, AssetUid, MetadataRecord};
use serde_yaml::Value;

const GENERATE_MATERIALS_KEY: &str = "bShouldGenerateMaterials";
const BATCH_BY_MATERIAL_KEY: &str = "bShouldBatchByMaterial";
const DEFAULT_MATERIALS_KEY: &str = "defaultMaterials";

/// Import settings of a mesh source.
#[derive(Debug)]
pub struct ModelView {
    state: ViewState,
    should_generate_materials: bool,
    should_batch_by_material: bool,
    default_materials: Vec<AssetUid>,
}

impl ModelView {
    /// Wraps `entry`. Fields keep their defaults until loaded.
    pub fn new(entry: AssetEntry, record: MetadataRecord) -> Self {
        Self {
            state: ViewState::new(entry, record),
            should_generate_materials: false,
            should_batch_by_material: false,
            default_materials: Vec::new(),
        }
    }

    /// Whether materials are generated on import.
    pub fn should_generate_materials(&self) -> bool {
        self.should_generate_materials
    }

    /// Sets [`Self::should_generate_materials`].
    pub fn set_should_generate_materials(&mut self, value: bool) -> bool {
        self.ensure_loaded();
        self.state
            .assign(&mut self.should_generate_materials, value, "should_generate_materials")
    }

    /// Whether meshes are batched by material on import.
    pub fn should_batch_by_material(&self) -> bool {
        self.should_batch_by_material
    }

    /// Sets [`Self::should_batch_by_material`].
    pub fn set_should_batch_by_material(&mut self, value: bool) -> bool {
        self.ensure_loaded();
        self.state
            .assign(&mut self.should_batch_by_material, value, "should_batch_by_material")
    }

    /// Materials applied to the model's slots, in slot order.
    pub fn default_materials(&self) -> &[AssetUid] {
        &self.default_materials
    }

    /// Replaces the default materials. Only a list with different content
    /// counts as a change.
    pub fn set_default_materials(&mut self, value: Vec<AssetUid>) -> bool {
        self.ensure_loaded();
        self.state
            .assign(&mut self.default_materials, value, "default_materials")
    }
}

impl TypedView for ModelView {
    fn state(&self) -> &ViewState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    fn kind(&self) -> AssetKind {
        AssetKind::Model
    }

    fn load_fields(&mut self) -> Result<(), AssetError> {
        self.state.refresh_record()?;

        let record = self.state.record().clone();
        for (key, value) in record.iter() {
            match key {
                GENERATE_MATERIALS_KEY => {
                    self.state.assign(
                        &mut self.should_generate_materials,
                        parse_bool(key, value)?,
                        "should_generate_materials",
                    );
                }
                BATCH_BY_MATERIAL_KEY => {
                    self.state.assign(
                        &mut self.should_batch_by_material,
                        parse_bool(key, value)?,
                        "should_batch_by_material",
                    );
                }
                DEFAULT_MATERIALS_KEY => {
                    self.state.assign(
                        &mut self.default_materials,
                        parse_uid_list(key, value)?,
                        "default_materials",
                    );
                }
                _ => {}
            }
        }

        if !record.contains_key(GENERATE_MATERIALS_KEY) {
            self.state.assign(
                &mut self.should_generate_materials,
                false,
                "should_generate_materials",
            );
        }
        if !record.contains_key(BATCH_BY_MATERIAL_KEY) {
            self.state.assign(
                &mut self.should_batch_by_material,
                false,
                "should_batch_by_material",
            );
        }
        if !record.contains_key(DEFAULT_MATERIALS_KEY) {
            self.state.assign(&mut self.default_materials, Vec::new(), "default_materials");
        }
        Ok(())
    }

    fn store_fields(&mut self) {
        let materials = uid_list_node(&self.default_materials);
        let record = self.state.record_mut();
        record.insert(
            GENERATE_MATERIALS_KEY,
            Value::Bool(self.should_generate_materials),
        );
        record.insert(BATCH_BY_MATERIAL_KEY, Value::Bool(self.should_batch_by_material));
        record.insert(DEFAULT_MATERIALS_KEY, materials);
    }
}
