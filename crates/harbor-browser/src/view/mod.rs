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

//! Typed views over asset metadata.
//!
//! Every asset in the catalog is presented through one view. A view owns the
//! typed fields for its asset kind and converts them from and to the generic
//! [`MetadataRecord`] only when loading and writing back.
//!
//! The shared protocol lives in [`TypedView`]; [`AssetView`] is the sum type
//! the browser stores, selected from the asset's [`AssetKind`].
//!
//! Loading is fail-soft: a view that cannot parse its data reports `false`
//! from [`TypedView::preload_resources`] and shows the error text in place
//! of its display name. Writing back is not: its errors reach the caller.

mod fields;
mod model;
mod shader;
mod shader_library;
mod state;
mod texture;

pub use model::ModelView;
pub use shader::ShaderView;
pub use shader_library::ShaderLibraryView;
pub use state::ViewState;
pub use texture::TextureView;

use harbor_core::{AssetEntry, AssetError, AssetKind, AssetUid, FieldChanged, MetadataRecord};
use harbor_io::save_record;

/// The protocol every asset view follows.
pub trait TypedView {
    /// Shared state.
    fn state(&self) -> &ViewState;

    /// Shared state, mutably.
    fn state_mut(&mut self) -> &mut ViewState;

    /// The kind of asset this view presents.
    fn kind(&self) -> AssetKind;

    /// Populates the typed fields from the asset's data.
    ///
    /// Fields are assigned as they are read; an error stops the pass and
    /// leaves fields read before it in place. After a complete pass, fields
    /// whose key is absent hold their defaults.
    fn load_fields(&mut self) -> Result<(), AssetError>;

    /// Writes the typed fields into the metadata record.
    fn store_fields(&mut self);

    /// Loads the typed fields unless they are already loaded and `force`
    /// is false.
    ///
    /// Returns `false` if loading failed. The error is logged, shown in place
    /// of the display name, and the view is left unloaded.
    fn preload_resources(&mut self, force: bool) -> bool {
        if self.state().is_loaded() && !force {
            return true;
        }

        self.state_mut().reset_error();
        match self.load_fields() {
            Ok(()) => {
                let state = self.state_mut();
                state.set_loaded(true);
                state.clear_dirty();
                true
            }
            Err(e) => {
                let state = self.state_mut();
                state.set_loaded(false);
                state.surface_error(&e);
                false
            }
        }
    }

    /// Loads the typed fields before a first edit, so the edit lands on the
    /// values read from disk. A view whose load already failed is left as is.
    fn ensure_loaded(&mut self) {
        let state = self.state();
        if !state.is_loaded() && state.error().is_none() {
            self.preload_resources(false);
        }
    }

    /// Copies the typed fields into the record and clears the dirty flag.
    /// Nothing is written to disk.
    fn update_model(&mut self) {
        self.store_fields();
        self.state_mut().clear_dirty();
    }

    /// Updates the record and writes it to the sidecar file.
    ///
    /// A view that was never loaded is loaded first, so neither its field
    /// defaults nor a missing record replace what the sidecar holds. If that
    /// load fails the sidecar is re-read once more and the write goes ahead
    /// on top of it; keys the view does not own (such as `fileId`) are kept.
    ///
    /// # Errors
    /// Returns the [`AssetError`] raised while reading or writing; the view
    /// then stays as it was, apart from the record having been refreshed.
    fn write_back(&mut self) -> Result<(), AssetError> {
        self.ensure_loaded();
        if !self.state().is_loaded() {
            self.state_mut().refresh_record()?;
        }
        self.update_model();
        let state = self.state();
        save_record(&state.entry().meta_path, state.record())?;
        self.state_mut().clear_dirty();
        Ok(())
    }

    /// Discards in-memory edits by reloading from disk. Fields whose key is
    /// missing from the sidecar go back to their defaults.
    fn revert(&mut self) -> bool {
        let loaded = self.preload_resources(true);
        self.state_mut().clear_dirty();
        loaded
    }

    /// The asset's UID.
    fn uid(&self) -> &AssetUid {
        self.state().uid()
    }

    /// Current display name, or the last load error.
    fn display_name(&self) -> &str {
        self.state().display_name()
    }

    /// Whether there are unsaved edits.
    fn is_dirty(&self) -> bool {
        self.state().is_dirty()
    }

    /// Whether the typed fields are loaded.
    fn is_loaded(&self) -> bool {
        self.state().is_loaded()
    }
}

/// A view for a file with no typed fields. Loading always succeeds.
#[derive(Debug)]
pub struct GenericView {
    state: ViewState,
}

impl GenericView {
    /// Wraps `entry`.
    pub fn new(entry: AssetEntry, record: MetadataRecord) -> Self {
        Self {
            state: ViewState::new(entry, record),
        }
    }
}

impl TypedView for GenericView {
    fn state(&self) -> &ViewState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    fn kind(&self) -> AssetKind {
        AssetKind::Generic
    }

    fn load_fields(&mut self) -> Result<(), AssetError> {
        Ok(())
    }

    fn store_fields(&mut self) {}
}

/// A view of any asset kind.
#[derive(Debug)]
pub enum AssetView {
    /// A mesh source.
    Model(ModelView),
    /// An image.
    Texture(TextureView),
    /// Raw GLSL.
    ShaderLibrary(ShaderLibraryView),
    /// A shader document.
    Shader(ShaderView),
    /// Anything else.
    Generic(GenericView),
}

macro_rules! dispatch {
    ($self:expr, $view:ident => $body:expr) => {
        match $self {
            AssetView::Model($view) => $body,
            AssetView::Texture($view) => $body,
            AssetView::ShaderLibrary($view) => $body,
            AssetView::Shader($view) => $body,
            AssetView::Generic($view) => $body,
        }
    };
}

impl AssetView {
    /// Creates the view matching `entry`'s kind.
    pub fn open(entry: AssetEntry, record: MetadataRecord) -> Self {
        match entry.kind() {
            AssetKind::Model => AssetView::Model(ModelView::new(entry, record)),
            AssetKind::Texture => AssetView::Texture(TextureView::new(entry, record)),
            AssetKind::ShaderLibrary => {
                AssetView::ShaderLibrary(ShaderLibraryView::new(entry, record))
            }
            AssetKind::Shader => AssetView::Shader(ShaderView::new(entry, record)),
            AssetKind::Generic => AssetView::Generic(GenericView::new(entry, record)),
        }
    }

    /// Creates the view and routes its notifications to `sender`.
    pub fn open_with_notifier(
        entry: AssetEntry,
        record: MetadataRecord,
        sender: flume::Sender<FieldChanged>,
    ) -> Self {
        let mut view = Self::open(entry, record);
        view.state_mut().set_notifier(Some(sender));
        view
    }

    /// The model view, if this is one.
    pub fn as_model(&self) -> Option<&ModelView> {
        match self {
            AssetView::Model(view) => Some(view),
            _ => None,
        }
    }

    /// The model view, mutably.
    pub fn as_model_mut(&mut self) -> Option<&mut ModelView> {
        match self {
            AssetView::Model(view) => Some(view),
            _ => None,
        }
    }

    /// The texture view, if this is one.
    pub fn as_texture(&self) -> Option<&TextureView> {
        match self {
            AssetView::Texture(view) => Some(view),
            _ => None,
        }
    }

    /// The texture view, mutably.
    pub fn as_texture_mut(&mut self) -> Option<&mut TextureView> {
        match self {
            AssetView::Texture(view) => Some(view),
            _ => None,
        }
    }

    /// The shader library view, if this is one.
    pub fn as_shader_library(&self) -> Option<&ShaderLibraryView> {
        match self {
            AssetView::ShaderLibrary(view) => Some(view),
            _ => None,
        }
    }

    /// The shader view, if this is one.
    pub fn as_shader(&self) -> Option<&ShaderView> {
        match self {
            AssetView::Shader(view) => Some(view),
            _ => None,
        }
    }
}

impl TypedView for AssetView {
    fn state(&self) -> &ViewState {
        dispatch!(self, view => view.state())
    }

    fn state_mut(&mut self) -> &mut ViewState {
        dispatch!(self, view => view.state_mut())
    }

    fn kind(&self) -> AssetKind {
        dispatch!(self, view => view.kind())
    }

    fn load_fields(&mut self) -> Result<(), AssetError> {
        dispatch!(self, view => view.load_fields())
    }

    fn store_fields(&mut self) {
        dispatch!(self, view => view.store_fields())
    }
}


#[cfg(test)]
mod tests {
    use super::testing::entry_in;
    use super::*;
    use std::path::Path;

    #[test]
    fn open_selects_view_by_extension() {
        let dir = Path::new("/project/Content");
        let kinds: Vec<AssetKind> = ["cube.fbx", "wall.png", "noise.glsl", "lit.shader", "a.wav"]
            .iter()
            .map(|name| AssetView::open(entry_in(dir, name, "x"), MetadataRecord::new()).kind())
            .collect();
        assert_eq!(
            kinds,
            [
                AssetKind::Model,
                AssetKind::Texture,
                AssetKind::ShaderLibrary,
                AssetKind::Shader,
                AssetKind::Generic
            ]
        );
    }

    #[test]
    fn generic_view_always_loads() {
        let mut view = AssetView::open(
            entry_in(Path::new("/nowhere"), "notes.txt", "n"),
            MetadataRecord::new(),
        );
        assert!(view.preload_resources(false));
        assert!(view.is_loaded());
        assert!(!view.is_dirty());
    }

    #[test]
    fn renaming_marks_dirty_and_notifies() {
        let (tx, rx) = flume::unbounded();
        let mut view = AssetView::open_with_notifier(
            entry_in(Path::new("/nowhere"), "notes.txt", "n"),
            MetadataRecord::new(),
            tx,
        );

        assert!(view.state_mut().set_display_name("Notes"));
        assert!(!view.state_mut().set_display_name("Notes"));
        assert!(view.is_dirty());

        let fields: Vec<&str> = rx.try_iter().map(|c| c.field).collect();
        assert_eq!(fields, ["dirty", "display_name"]);
    }

    #[test]
    fn write_back_before_preload_keeps_sidecar_content() {
        let dir = tempfile::tempdir().unwrap();
        let entry = entry_in(dir.path(), "cube.fbx", "{CUBE}");
        std::fs::write(
            &entry.meta_path,
            "fileId: '{CUBE}'\nbShouldGenerateMaterials: true\nimportScale: 2\n",
        )
        .unwrap();
        let meta_path = entry.meta_path.clone();

        let mut view = AssetView::open(entry, MetadataRecord::new());
        view.write_back().unwrap();

        let on_disk = harbor_io::load_record(&meta_path).unwrap();
        assert_eq!(on_disk.uid(), Some(AssetUid::from("{CUBE}")));
        assert_eq!(on_disk.get_text("importScale").as_deref(), Some("2"));
        assert_eq!(on_disk.get_text("bShouldGenerateMaterials").as_deref(), Some("true"));
    }

    #[test]
    fn write_back_refuses_to_replace_an_unreadable_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let entry = entry_in(dir.path(), "cube.fbx", "{CUBE}");
        std::fs::write(&entry.meta_path, "fileId: [unclosed\n").unwrap();
        let meta_path = entry.meta_path.clone();

        let mut view = AssetView::open(entry, MetadataRecord::new());
        assert!(view.write_back().is_err());
        assert_eq!(
            std::fs::read_to_string(&meta_path).unwrap(),
            "fileId: [unclosed\n"
        );
    }
}
