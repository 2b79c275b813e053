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

//! A project opened for browsing.

use crate::tree::{build_tree, FolderTree};
use crate::view::{AssetView, TypedView};
use harbor_core::{AssetEntry, AssetError, AssetUid, Catalog, ChangeBus, FieldChanged, MetadataRecord};
use harbor_io::{load_manifest, load_record, scan_project, ProjectManifest};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A project's catalog together with one view per asset.
///
/// Each view starts with its sidecar record attached but its typed fields
/// unloaded; call [`AssetBrowser::preload_all`] or
/// [`TypedView::preload_resources`] on individual views to populate them.
/// Every view publishes its field changes on a shared [`ChangeBus`].
#[derive(Debug)]
pub struct AssetBrowser {
    project_dir: PathBuf,
    manifest: ProjectManifest,
    catalog: Catalog,
    views: HashMap<AssetUid, AssetView>,
    // Catalog order, one entry per view.
    order: Vec<AssetUid>,
    changes: ChangeBus<FieldChanged>,
}

impl AssetBrowser {
    /// Opens the project at `project_dir`: reads its manifest and scans its
    /// content directory.
    ///
    /// # Errors
    /// Fails if the manifest is malformed or the content directory is missing.
    pub fn open(project_dir: impl AsRef<Path>) -> Result<Self, AssetError> {
        let project_dir = project_dir.as_ref();
        let manifest = load_manifest(project_dir)?;
        let catalog = scan_project(project_dir, &manifest)?;
        Ok(Self::with_catalog(project_dir, manifest, catalog))
    }

    /// Wraps an already enumerated catalog.
    ///
    /// Each view is created with the record read from its sidecar, so a
    /// write-back keeps keys the view does not own. When a UID is listed more
    /// than once only its first entry gets a view.
    pub fn with_catalog(
        project_dir: impl Into<PathBuf>,
        manifest: ProjectManifest,
        catalog: Catalog,
    ) -> Self {
        let changes = ChangeBus::new();
        let mut views = HashMap::with_capacity(catalog.files.len());
        let mut order = Vec::with_capacity(catalog.files.len());
        for entry in &catalog.files {
            if views.contains_key(&entry.uid) {
                log::warn!(
                    "UID {} is listed more than once; ignoring '{}'",
                    entry.uid,
                    entry.asset_path.display()
                );
                continue;
            }

            let view =
                AssetView::open_with_notifier(entry.clone(), attached_record(entry), changes.sender());
            order.push(entry.uid.clone());
            views.insert(entry.uid.clone(), view);
        }

        Self {
            project_dir: project_dir.into(),
            manifest,
            catalog,
            views,
            order,
            changes,
        }
    }

    /// The project directory.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// The project configuration.
    pub fn manifest(&self) -> &ProjectManifest {
        &self.manifest
    }

    /// The flat listing the views were created from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Builds the display tree of the catalog.
    pub fn tree(&self) -> FolderTree {
        build_tree(&self.catalog)
    }

    /// The view of `uid`.
    pub fn view(&self, uid: &AssetUid) -> Option<&AssetView> {
        self.views.get(uid)
    }

    /// The view of `uid`, mutably.
    pub fn view_mut(&mut self, uid: &AssetUid) -> Option<&mut AssetView> {
        self.views.get_mut(uid)
    }

    /// All views, in catalog order.
    pub fn views(&self) -> impl Iterator<Item = &AssetView> + '_ {
        self.order.iter().filter_map(|uid| self.views.get(uid))
    }

    /// Preloads every view and reports, in catalog order, which succeeded.
    pub fn preload_all(&mut self, force: bool) -> Vec<(AssetUid, bool)> {
        let mut results = Vec::with_capacity(self.views.len());
        for uid in &self.order {
            if let Some(view) = self.views.get_mut(uid) {
                results.push((uid.clone(), view.preload_resources(force)));
            }
        }

        let failed = results.iter().filter(|(_, ok)| !ok).count();
        log::info!("Preloaded {} assets, {failed} failed", results.len());
        results
    }

    /// UIDs of views with unsaved edits, in catalog order.
    pub fn dirty_views(&self) -> Vec<&AssetUid> {
        self.views().filter(|v| v.is_dirty()).map(|v| v.uid()).collect()
    }

    /// Writes back every view with unsaved edits.
    ///
    /// # Errors
    /// Stops at the first failed write and returns its error. Views written
    /// before it stay saved.
    pub fn save_all(&mut self) -> Result<usize, AssetError> {
        let mut saved = 0;
        for uid in &self.order {
            if let Some(view) = self.views.get_mut(uid) {
                if view.is_dirty() {
                    view.write_back()?;
                    saved += 1;
                }
            }
        }
        log::info!("Saved {saved} assets");
        Ok(saved)
    }

    /// The bus all views publish field changes on.
    pub fn changes(&self) -> &ChangeBus<FieldChanged> {
        &self.changes
    }

    /// A receiver for field changes, sharing the queue with [`Self::changes`].
    pub fn subscribe(&self) -> flume::Receiver<FieldChanged> {
        self.changes.receiver()
    }
}

/// The sidecar record of `entry`, or an empty one if it cannot be read.
fn attached_record(entry: &AssetEntry) -> MetadataRecord {
    if !entry.meta_path.is_file() {
        return MetadataRecord::new();
    }
    load_record(&entry.meta_path).unwrap_or_else(|e| {
        log::warn!("'{}': {e}", entry.asset_path.display());
        MetadataRecord::new()
    })
}
