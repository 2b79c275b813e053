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

use std::path::Path;

/// The family of typed view an asset file is presented with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AssetKind {
    /// A mesh source (`.fbx`, `.obj`, `.gltf`, ...).
    Model,
    /// An image source.
    Texture,
    /// Plain GLSL included by shaders.
    ShaderLibrary,
    /// A shader document with GLSL stage blocks.
    Shader,
    /// Any other file. It has no typed fields.
    #[default]
    Generic,
}

impl AssetKind {
    /// Picks the kind from a file extension, ignoring case.
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_ascii_lowercase().as_str() {
            "fbx" | "obj" | "gltf" | "glb" | "dae" => AssetKind::Model,
            "png" | "jpg" | "jpeg" | "tga" | "bmp" | "hdr" => AssetKind::Texture,
            "glsl" => AssetKind::ShaderLibrary,
            "shader" => AssetKind::Shader,
            _ => AssetKind::Generic,
        }
    }

    /// Picks the kind from the extension of `path`.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_lookup_ignores_case() {
        assert_eq!(AssetKind::from_extension("FBX"), AssetKind::Model);
        assert_eq!(AssetKind::from_extension("Png"), AssetKind::Texture);
        assert_eq!(AssetKind::from_extension("glsl"), AssetKind::ShaderLibrary);
        assert_eq!(AssetKind::from_extension("shader"), AssetKind::Shader);
        assert_eq!(AssetKind::from_extension("wav"), AssetKind::Generic);
    }

    #[test]
    fn path_without_extension_is_generic() {
        assert_eq!(AssetKind::from_path(Path::new("Content/README")), AssetKind::Generic);
        assert_eq!(
            AssetKind::from_path(Path::new("Content/Models/cube.fbx")),
            AssetKind::Model
        );
    }
}
