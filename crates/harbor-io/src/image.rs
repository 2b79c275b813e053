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

//! Preview decoding for texture assets.

use harbor_core::AssetError;
use std::fs;
use std::path::Path;

/// A decoded image, converted to 8-bit RGBA in sRGB space.
#[derive(Clone, PartialEq, Eq)]
pub struct ImagePreview {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Tightly packed RGBA8 rows.
    pub pixels: Vec<u8>,
}

impl std::fmt::Debug for ImagePreview {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePreview")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

/// Reads and decodes the image at `path`.
///
/// # Errors
/// [`AssetError::Io`] if the file cannot be read, [`AssetError::Decode`] if
/// its content is not a supported image.
pub fn decode_image(path: &Path) -> Result<ImagePreview, AssetError> {
    let bytes = fs::read(path).map_err(|e| AssetError::io(path, e))?;

    let img = ::image::load_from_memory(&bytes).map_err(|e| AssetError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(ImagePreview {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}
