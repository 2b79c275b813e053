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

use super::fields::{parse_bool, parse_symbol};
use super::{TypedView, ViewState};
use harbor_core::asset::{TextureClamping, TextureFiltration, TextureFormat};
use harbor_core::{AssetEntry, AssetError, AssetKind, MetadataRecord};
use harbor_io::{decode_image, ImagePreview};
use serde_yaml::Value;

const GENERATE_MIPS_KEY: &str = "bShouldGenerateMips";
const STORAGE_BINDING_KEY: &str = "bShouldSupportStorageBinding";
const CLAMPING_KEY: &str = "clamping";
const FILTRATION_KEY: &str = "filtration";
const FORMAT_KEY: &str = "format";

/// Import settings of an image, plus a decoded preview.
#[derive(Debug)]
pub struct TextureView {
    state: ViewState,
    preview: Option<ImagePreview>,
    should_generate_mips: bool,
    should_support_storage_binding: bool,
    clamping: TextureClamping,
    filtration: TextureFiltration,
    format: TextureFormat,
}

impl TextureView {
    /// Wraps `entry`. Fields keep their defaults until loaded.
    pub fn new(entry: AssetEntry, record: MetadataRecord) -> Self {
        Self {
            state: ViewState::new(entry, record),
            preview: None,
            should_generate_mips: false,
            should_support_storage_binding: false,
            clamping: TextureClamping::default(),
            filtration: TextureFiltration::default(),
            format: TextureFormat::default(),
        }
    }

    /// The decoded image, if decoding succeeded. Never persisted.
    pub fn preview(&self) -> Option<&ImagePreview> {
        self.preview.as_ref()
    }

    /// Whether a mip chain is generated on import.
    pub fn should_generate_mips(&self) -> bool {
        self.should_generate_mips
    }

    /// Sets [`Self::should_generate_mips`].
    pub fn set_should_generate_mips(&mut self, value: bool) -> bool {
        self.ensure_loaded();
        self.state
            .assign(&mut self.should_generate_mips, value, "should_generate_mips")
    }

    /// Whether the texture may be bound as a storage image.
    pub fn should_support_storage_binding(&self) -> bool {
        self.should_support_storage_binding
    }

    /// Sets [`Self::should_support_storage_binding`].
    pub fn set_should_support_storage_binding(&mut self, value: bool) -> bool {
        self.ensure_loaded();
        self.state.assign(
            &mut self.should_support_storage_binding,
            value,
            "should_support_storage_binding",
        )
    }

    /// Address mode.
    pub fn clamping(&self) -> TextureClamping {
        self.clamping
    }

    /// Sets [`Self::clamping`].
    pub fn set_clamping(&mut self, value: TextureClamping) -> bool {
        self.ensure_loaded();
        self.state.assign(&mut self.clamping, value, "clamping")
    }

    /// Sampling filter.
    pub fn filtration(&self) -> TextureFiltration {
        self.filtration
    }

    /// Sets [`Self::filtration`].
    pub fn set_filtration(&mut self, value: TextureFiltration) -> bool {
        self.ensure_loaded();
        self.state.assign(&mut self.filtration, value, "filtration")
    }

    /// Target pixel format.
    pub fn format(&self) -> TextureFormat {
        self.format
    }

    /// Sets [`Self::format`].
    pub fn set_format(&mut self, value: TextureFormat) -> bool {
        self.ensure_loaded();
        self.state.assign(&mut self.format, value, "format")
    }
}

impl TypedView for TextureView {
    fn state(&self) -> &ViewState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    fn kind(&self) -> AssetKind {
        AssetKind::Texture
    }

    fn load_fields(&mut self) -> Result<(), AssetError> {
        // A broken image is shown but does not stop the settings from loading.
        match decode_image(&self.state.entry().asset_path) {
            Ok(preview) => self.preview = Some(preview),
            Err(e) => {
                self.preview = None;
                self.state.surface_error(&e);
            }
        }

        self.state.refresh_record()?;

        let record = self.state.record().clone();
        for (key, value) in record.iter() {
            match key {
                GENERATE_MIPS_KEY => {
                    self.state.assign(
                        &mut self.should_generate_mips,
                        parse_bool(key, value)?,
                        "should_generate_mips",
                    );
                }
                STORAGE_BINDING_KEY => {
                    self.state.assign(
                        &mut self.should_support_storage_binding,
                        parse_bool(key, value)?,
                        "should_support_storage_binding",
                    );
                }
                CLAMPING_KEY => {
                    self.state.assign(&mut self.clamping, parse_symbol(key, value)?, "clamping");
                }
                FILTRATION_KEY => {
                    self.state.assign(
                        &mut self.filtration,
                        parse_symbol(key, value)?,
                        "filtration",
                    );
                }
                FORMAT_KEY => {
                    self.state.assign(&mut self.format, parse_symbol(key, value)?, "format");
                }
                _ => {}
            }
        }

        if !record.contains_key(GENERATE_MIPS_KEY) {
            self.state.assign(&mut self.should_generate_mips, false, "should_generate_mips");
        }
        if !record.contains_key(STORAGE_BINDING_KEY) {
            self.state.assign(
                &mut self.should_support_storage_binding,
                false,
                "should_support_storage_binding",
            );
        }
        if !record.contains_key(CLAMPING_KEY) {
            self.state.assign(&mut self.clamping, TextureClamping::default(), "clamping");
        }
        if !record.contains_key(FILTRATION_KEY) {
            self.state.assign(&mut self.filtration, TextureFiltration::default(), "filtration");
        }
        if !record.contains_key(FORMAT_KEY) {
            self.state.assign(&mut self.format, TextureFormat::default(), "format");
        }
        Ok(())
    }

    fn store_fields(&mut self) {
        let record = self.state.record_mut();
        record.insert(GENERATE_MIPS_KEY, Value::Bool(self.should_generate_mips));
        record.insert(
            STORAGE_BINDING_KEY,
            Value::Bool(self.should_support_storage_binding),
        );
        record.insert(CLAMPING_KEY, self.clamping.as_str());
        record.insert(FILTRATION_KEY, self.filtration.as_str());
        record.insert(FORMAT_KEY, self.format.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::testing::entry_in;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn texture(sidecar: &str, valid_image: bool) -> (TempDir, TextureView) {
        let dir = tempdir().unwrap();
        let entry = entry_in(dir.path(), "wall.png", "{WALL}");
        if valid_image {
            image::RgbaImage::from_pixel(2, 2, image::Rgba([0, 128, 255, 255]))
                .save(&entry.asset_path)
                .unwrap();
        } else {
            fs::write(&entry.asset_path, b"garbage").unwrap();
        }
        fs::write(&entry.meta_path, sidecar).unwrap();
        (dir, TextureView::new(entry, MetadataRecord::new()))
    }

    #[test]
    fn preload_reads_settings_and_preview() {
        let (_dir, mut view) = texture(
            "bShouldGenerateMips: true\nclamping: Repeat\nfiltration: Linear\nformat: R16G16B16A16_SFLOAT\n",
            true,
        );

        assert!(view.preload_resources(false));
        assert!(view.should_generate_mips());
        assert!(!view.should_support_storage_binding());
        assert_eq!(view.clamping(), TextureClamping::Repeat);
        assert_eq!(view.filtration(), TextureFiltration::Linear);
        assert_eq!(view.format(), TextureFormat::R16G16B16A16Sfloat);
        assert_eq!(view.preview().map(|p| (p.width, p.height)), Some((2, 2)));
        assert_eq!(view.display_name(), "wall.png");
    }

    #[test]
    fn invalid_clamping_fails_and_keeps_default() {
        let (_dir, mut view) = texture("clamping: INVALID_TOKEN\n", true);

        assert!(!view.preload_resources(false));
        assert_eq!(view.clamping(), TextureClamping::Clamp);
        assert!(!view.is_loaded());
        assert!(view.display_name().contains("INVALID_TOKEN"));
    }

    #[test]
    fn enum_failure_stops_before_later_keys() {
        let (_dir, mut view) = texture("filtration: Linear\nformat: RGB\nclamping: Repeat\n", true);

        assert!(!view.preload_resources(false));
        assert_eq!(view.filtration(), TextureFiltration::Linear);
        assert_eq!(view.format(), TextureFormat::R8G8B8A8Srgb);
        assert_eq!(view.clamping(), TextureClamping::Clamp);
    }

    #[test]
    fn broken_image_is_surfaced_but_settings_load() {
        let (_dir, mut view) = texture("bShouldSupportStorageBinding: true\n", false);

        assert!(view.preload_resources(false));
        assert!(view.is_loaded());
        assert!(view.preview().is_none());
        assert!(view.should_support_storage_binding());
        assert!(view.display_name().contains("wall.png"));
        assert_ne!(view.display_name(), "wall.png");
    }

    #[test]
    fn write_back_persists_symbolic_names() {
        let (_dir, mut view) = texture("fileId: '{WALL}'\n", true);
        assert!(view.preload_resources(false));

        view.set_format(TextureFormat::Bc7SrgbBlock);
        view.set_clamping(TextureClamping::Repeat);
        assert!(view.is_dirty());
        view.write_back().unwrap();
        assert!(!view.is_dirty());

        let on_disk = harbor_io::load_record(&view.state().entry().meta_path).unwrap();
        assert_eq!(on_disk.get_text("fileId").as_deref(), Some("{WALL}"));
        assert_eq!(on_disk.get_text("format").as_deref(), Some("BC7_SRGB_BLOCK"));
        assert_eq!(on_disk.get_text("clamping").as_deref(), Some("Repeat"));
        assert_eq!(on_disk.get_text("filtration").as_deref(), Some("Nearest"));
        assert_eq!(on_disk.get_text("bShouldGenerateMips").as_deref(), Some("false"));
    }

    #[test]
    fn revert_discards_unsaved_edits() {
        let (_dir, mut view) = texture("filtration: Linear\n", true);
        assert!(view.preload_resources(false));

        view.set_filtration(TextureFiltration::Nearest);
        assert!(view.is_dirty());

        assert!(view.revert());
        assert_eq!(view.filtration(), TextureFiltration::Linear);
        assert!(!view.is_dirty());
    }

    #[test]
    fn revert_resets_fields_missing_from_sidecar() {
        let (_dir, mut view) = texture("fileId: '{WALL}'\n", true);
        assert!(view.preload_resources(false));

        view.set_filtration(TextureFiltration::Linear);
        view.set_should_generate_mips(true);
        assert!(view.is_dirty());

        assert!(view.revert());
        assert_eq!(view.filtration(), TextureFiltration::Nearest);
        assert!(!view.should_generate_mips());
        assert!(!view.is_dirty());
    }

    #[test]
    fn failed_reload_does_not_reset_absent_fields() {
        let (_dir, mut view) = texture("fileId: '{WALL}'\n", true);
        assert!(view.preload_resources(false));
        view.set_filtration(TextureFiltration::Linear);

        fs::write(&view.state().entry().meta_path, "clamping: Sideways\n").unwrap();
        assert!(!view.preload_resources(true));
        assert_eq!(view.filtration(), TextureFiltration::Linear);
    }
}
