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

//! The error type shared by every asset browser crate.

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while reading, decoding or writing asset data.
///
/// Typed views catch these at their boundary and surface the message in
/// place of the display name. Only write-back hands them to the caller.
#[derive(Debug, Error)]
pub enum AssetError {
    /// A document, boolean or enum token could not be parsed.
    #[error("Failed to parse {context}: {message}")]
    Parse {
        /// What was being parsed (a file path or a key name).
        context: String,
        /// The underlying parser message.
        message: String,
    },

    /// A file could not be opened, read or written.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An image file could not be decoded.
    #[error("Failed to decode image '{}': {message}", path.display())]
    Decode {
        /// The image file.
        path: PathBuf,
        /// The decoder message.
        message: String,
    },

    /// A project manifest is malformed.
    #[error("Invalid project manifest '{}': {message}", path.display())]
    Config {
        /// The manifest file.
        path: PathBuf,
        /// The parser message.
        message: String,
    },
}

impl AssetError {
    /// Builds a [`AssetError::Parse`].
    pub fn parse(context: impl Into<String>, message: impl ToString) -> Self {
        AssetError::Parse {
            context: context.into(),
            message: message.to_string(),
        }
    }

    /// Builds a [`AssetError::Io`].
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AssetError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = AssetError::parse("bShouldGenerateMips", "'maybe' is not a boolean");
        assert_eq!(
            err.to_string(),
            "Failed to parse bShouldGenerateMips: 'maybe' is not a boolean"
        );

        let err = AssetError::io(
            "Content/cube.fbx.asset",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(err.to_string(), "I/O error on 'Content/cube.fbx.asset': missing");
    }
}
