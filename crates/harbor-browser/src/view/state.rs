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

//! State shared by every typed view.

use harbor_core::{AssetEntry, AssetError, AssetUid, FieldChanged, MetadataRecord};
use harbor_io::load_record;

/// The part of a view that does not depend on the asset kind: which file it
/// wraps, the record backing it, and the dirty/loaded bookkeeping.
#[derive(Debug)]
pub struct ViewState {
    entry: AssetEntry,
    record: MetadataRecord,
    display_name: String,
    error: Option<String>,
    dirty: bool,
    loaded: bool,
    notifier: Option<flume::Sender<FieldChanged>>,
}

impl ViewState {
    /// Wraps `entry`, starting from `record` until the sidecar is read.
    pub fn new(entry: AssetEntry, record: MetadataRecord) -> Self {
        let display_name = entry.display_name.clone();
        Self {
            entry,
            record,
            display_name,
            error: None,
            dirty: false,
            loaded: false,
            notifier: None,
        }
    }

    /// The catalog entry this view wraps.
    pub fn entry(&self) -> &AssetEntry {
        &self.entry
    }

    /// The asset's UID.
    pub fn uid(&self) -> &AssetUid {
        &self.entry.uid
    }

    /// The metadata record as last read or last updated from the fields.
    pub fn record(&self) -> &MetadataRecord {
        &self.record
    }

    pub(crate) fn record_mut(&mut self) -> &mut MetadataRecord {
        &mut self.record
    }

    /// The name to show for this asset. After a failed load it holds the
    /// error description instead.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The error surfaced by the most recent load, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether there are edits that have not been written back.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether the typed fields have been populated successfully.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Routes field notifications to `sender`, or stops them with `None`.
    pub fn set_notifier(&mut self, sender: Option<flume::Sender<FieldChanged>>) {
        self.notifier = sender;
    }

    /// Renames the asset for display.
    pub fn set_display_name(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.display_name == name {
            return false;
        }
        self.display_name = name;
        self.mark_dirty();
        self.notify("display_name");
        true
    }

    /// Stores `value` into `slot` if it differs, marking the view dirty and
    /// publishing `field`. Returns whether anything changed.
    pub(crate) fn assign<T: PartialEq>(&mut self, slot: &mut T, value: T, field: &'static str) -> bool {
        if *slot == value {
            return false;
        }
        *slot = value;
        self.mark_dirty();
        self.notify(field);
        true
    }

    pub(crate) fn notify(&self, field: &'static str) {
        if let Some(sender) = &self.notifier {
            // A dropped receiver only means nobody is listening any more.
            let _ = sender.send(FieldChanged {
                uid: self.entry.uid.clone(),
                field,
            });
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        if !self.dirty {
            self.dirty = true;
            self.notify("dirty");
        }
    }

    pub(crate) fn clear_dirty(&mut self) {
        if self.dirty {
            self.dirty = false;
            self.notify("dirty");
        }
    }

    pub(crate) fn set_loaded(&mut self, loaded: bool) {
        self.loaded = loaded;
    }

    /// Drops the error surfaced by a previous load and restores the name.
    pub(crate) fn reset_error(&mut self) {
        if self.error.take().is_some() {
            self.display_name = self.entry.display_name.clone();
            self.notify("display_name");
        }
    }

    /// Shows `err` in place of the display name.
    pub(crate) fn surface_error(&mut self, err: &AssetError) {
        let message = err.to_string();
        log::warn!("'{}': {message}", self.entry.asset_path.display());
        self.display_name = message.clone();
        self.error = Some(message);
        self.notify("display_name");
    }

    /// Re-reads the sidecar if it exists on disk. Without a sidecar file the
    /// in-memory record is kept.
    pub(crate) fn refresh_record(&mut self) -> Result<(), AssetError> {
        if self.entry.meta_path.is_file() {
            self.record = load_record(&self.entry.meta_path)?;
        }
        Ok(())
    }
}
