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

//! Sampling and pixel-format settings persisted in texture sidecars.
//!
//! Each enum is stored by its symbolic name. Parsing is exact and
//! case-sensitive; anything else is rejected with [`UnknownVariant`].

use std::fmt;
use std::str::FromStr;

/// A token that does not name any variant of the target enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    /// The enum the token was parsed as.
    pub type_name: &'static str,
    /// The rejected token.
    pub token: String,
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a valid {}", self.token, self.type_name)
    }
}

impl std::error::Error for UnknownVariant {}

macro_rules! symbolic_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The symbolic name written to sidecar files.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok($name::$variant),)+
                    _ => Err(UnknownVariant {
                        type_name: stringify!($name),
                        token: s.to_owned(),
                    }),
                }
            }
        }
    };
}

symbolic_enum! {
    /// How texture coordinates outside `[0, 1]` are resolved.
    TextureClamping {
        /// Coordinates are clamped to the edge texel.
        #[default]
        Clamp => "Clamp",
        /// The texture tiles.
        Repeat => "Repeat",
    }
}

symbolic_enum! {
    /// How texels are filtered when sampled.
    TextureFiltration {
        /// Nearest-texel sampling.
        #[default]
        Nearest => "Nearest",
        /// Bilinear sampling.
        Linear => "Linear",
    }
}

symbolic_enum! {
    /// Pixel format the texture is imported to.
    TextureFormat {
        /// Single 8-bit unsigned normalized channel.
        R8Unorm => "R8_UNORM",
        /// Single 8-bit sRGB channel.
        R8Srgb => "R8_SRGB",
        /// Two 8-bit unsigned normalized channels.
        R8G8Unorm => "R8G8_UNORM",
        /// Four 8-bit unsigned normalized channels.
        R8G8B8A8Unorm => "R8G8B8A8_UNORM",
        /// Four 8-bit sRGB channels.
        #[default]
        R8G8B8A8Srgb => "R8G8B8A8_SRGB",
        /// Four 8-bit unsigned normalized channels, BGRA order.
        B8G8R8A8Unorm => "B8G8R8A8_UNORM",
        /// Four 8-bit sRGB channels, BGRA order.
        B8G8R8A8Srgb => "B8G8R8A8_SRGB",
        /// Single 16-bit float channel.
        R16Sfloat => "R16_SFLOAT",
        /// Four 16-bit float channels.
        R16G16B16A16Sfloat => "R16G16B16A16_SFLOAT",
        /// Single 32-bit float channel.
        R32Sfloat => "R32_SFLOAT",
        /// Four 32-bit float channels.
        R32G32B32A32Sfloat => "R32G32B32A32_SFLOAT",
        /// BC1 block compression, sRGB.
        Bc1RgbaSrgbBlock => "BC1_RGBA_SRGB_BLOCK",
        /// BC3 block compression, sRGB.
        Bc3SrgbBlock => "BC3_SRGB_BLOCK",
        /// BC7 block compression, sRGB.
        Bc7SrgbBlock => "BC7_SRGB_BLOCK",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_import_defaults() {
        assert_eq!(TextureClamping::default(), TextureClamping::Clamp);
        assert_eq!(TextureFiltration::default(), TextureFiltration::Nearest);
        assert_eq!(TextureFormat::default(), TextureFormat::R8G8B8A8Srgb);
    }

    #[test]
    fn names_parse_back_to_their_variant() {
        for format in TextureFormat::ALL {
            assert_eq!(format.as_str().parse::<TextureFormat>(), Ok(*format));
        }
        assert_eq!("Repeat".parse::<TextureClamping>(), Ok(TextureClamping::Repeat));
    }

    #[test]
    fn parsing_is_case_sensitive() {
        let err = "linear".parse::<TextureFiltration>().unwrap_err();
        assert_eq!(err.type_name, "TextureFiltration");
        assert_eq!(err.token, "linear");
        assert!("INVALID_TOKEN".parse::<TextureClamping>().is_err());
    }
}
