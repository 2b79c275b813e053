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

use super::{TypedView, ViewState};
use harbor_core::metadata::scalar_text;
use harbor_core::{AssetEntry, AssetError, AssetKind, MetadataRecord};
use harbor_io::read_text;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_yaml::Value;
use std::fmt;

/// A shader document: include and define lists plus GLSL stage sources.
///
/// The document is read from the asset file itself, not from the sidecar.
#[derive(Debug)]
pub struct ShaderView {
    state: ViewState,
    includes: String,
    defines: String,
    glsl_common: Option<String>,
    glsl_vertex: Option<String>,
    glsl_fragment: Option<String>,
    glsl_compute: Option<String>,
}

impl ShaderView {
    /// Wraps `entry`.
    pub fn new(entry: AssetEntry, record: MetadataRecord) -> Self {
        Self {
            state: ViewState::new(entry, record),
            includes: String::new(),
            defines: String::new(),
            glsl_common: None,
            glsl_vertex: None,
            glsl_fragment: None,
            glsl_compute: None,
        }
    }

    /// Every `includes` entry, one per line, each followed by `\n`.
    pub fn includes(&self) -> &str {
        &self.includes
    }

    /// Every `defines` entry, one per line, each followed by `\n`.
    pub fn defines(&self) -> &str {
        &self.defines
    }

    /// Code shared by all stages.
    pub fn glsl_common(&self) -> Option<&str> {
        self.glsl_common.as_deref()
    }

    /// Vertex stage source.
    pub fn glsl_vertex(&self) -> Option<&str> {
        self.glsl_vertex.as_deref()
    }

    /// Fragment stage source.
    pub fn glsl_fragment(&self) -> Option<&str> {
        self.glsl_fragment.as_deref()
    }

    /// Compute stage source.
    pub fn glsl_compute(&self) -> Option<&str> {
        self.glsl_compute.as_deref()
    }

    fn reset(&mut self) {
        self.includes.clear();
        self.defines.clear();
        self.glsl_common = None;
        self.glsl_vertex = None;
        self.glsl_fragment = None;
        self.glsl_compute = None;
    }
}

impl TypedView for ShaderView {
    fn state(&self) -> &ViewState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    fn kind(&self) -> AssetKind {
        AssetKind::Shader
    }

    fn load_fields(&mut self) -> Result<(), AssetError> {
        let path = &self.state.entry().asset_path;
        let text = read_text(path)?;
        let document = ShaderDocument::parse(&path.display().to_string(), &text)?;

        self.reset();
        for (key, value) in &document.entries {
            match key.as_str() {
                "includes" => append_lines(&mut self.includes, key, value)?,
                "defines" => append_lines(&mut self.defines, key, value)?,
                "glslVertex" => self.glsl_vertex = Some(stage_source(key, value)?),
                "glslFragment" => self.glsl_fragment = Some(stage_source(key, value)?),
                "glslCommon" => self.glsl_common = Some(stage_source(key, value)?),
                "glslCompute" => self.glsl_compute = Some(stage_source(key, value)?),
                _ => {}
            }
        }
        Ok(())
    }

    fn store_fields(&mut self) {}
}

/// Appends each entry of `value` to `target`, one per line. A sequence
/// contributes all of its scalars.
fn append_lines(target: &mut String, key: &str, value: &Value) -> Result<(), AssetError> {
    match value {
        Value::Sequence(entries) => {
            for entry in entries {
                append_lines(target, key, entry)?;
            }
            Ok(())
        }
        other => {
            target.push_str(&stage_source(key, other)?);
            target.push('\n');
            Ok(())
        }
    }
}

fn stage_source(key: &str, value: &Value) -> Result<String, AssetError> {
    scalar_text(value).ok_or_else(|| AssetError::parse(key, "expected text"))
}

/// The top-level entries of a shader document, in order.
///
/// Unlike a YAML mapping, repeated keys are kept: each `includes:` or
/// `defines:` line adds an entry.
#[derive(Debug, Default)]
struct ShaderDocument {
    entries: Vec<(String, Value)>,
}

impl ShaderDocument {
    fn parse(context: &str, text: &str) -> Result<Self, AssetError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|e| AssetError::parse(context, e))
    }
}

impl<'de> Deserialize<'de> for ShaderDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = ShaderDocument;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of shader sections")
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(ShaderDocument::default())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::new();
                while let Some(entry) = map.next_entry::<String, Value>()? {
                    entries.push(entry);
                }
                Ok(ShaderDocument { entries })
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::testing::entry_in;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn shader(document: &str) -> (TempDir, ShaderView) {
        let dir = tempdir().unwrap();
        let entry = entry_in(dir.path(), "lit.shader", "{LIT}");
        fs::write(&entry.asset_path, document).unwrap();
        (dir, ShaderView::new(entry, MetadataRecord::new()))
    }

    #[test]
    fn repeated_includes_accumulate() {
        let (_dir, mut view) = shader("includes: a.glsl\nincludes: b.glsl\n");

        assert!(view.preload_resources(false));
        assert_eq!(view.includes(), "a.glsl\nb.glsl\n");
        assert_eq!(view.defines(), "");
    }

    #[test]
    fn sequence_entries_each_get_a_line() {
        let (_dir, mut view) = shader("defines:\n- FOG\n- SHADOWS\ndefines: MSAA\n");

        assert!(view.preload_resources(false));
        assert_eq!(view.defines(), "FOG\nSHADOWS\nMSAA\n");
    }

    #[test]
    fn stage_blocks_are_last_write_wins() {
        let (_dir, mut view) = shader(
            "glslVertex: old\nglslFragment: |\n  void main() {}\nglslVertex: |\n  void main() { gl_Position = vec4(0); }\n",
        );

        assert!(view.preload_resources(false));
        assert_eq!(
            view.glsl_vertex(),
            Some("void main() { gl_Position = vec4(0); }\n")
        );
        assert_eq!(view.glsl_fragment(), Some("void main() {}\n"));
        assert_eq!(view.glsl_common(), None);
        assert_eq!(view.glsl_compute(), None);
    }

    #[test]
    fn forced_reload_does_not_duplicate_includes() {
        let (_dir, mut view) = shader("includes: a.glsl\n");

        assert!(view.preload_resources(false));
        assert!(view.preload_resources(true));
        assert_eq!(view.includes(), "a.glsl\n");
    }

    #[test]
    fn malformed_document_fails_with_description() {
        let (_dir, mut view) = shader("- not\n- a mapping\n");

        assert!(!view.preload_resources(false));
        assert!(view.display_name().starts_with("Failed to parse"));
        assert!(!view.is_loaded());
    }
}
