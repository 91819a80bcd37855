//! Material-binding descriptors.
//!
//! Hosts own their scene objects; the core only ever sees narrow
//! descriptors of them. [`TextureKey`] identifies a texture by host
//! identity plus the (name, dimensions) pair used as a duplicate-instance
//! fallback, and [`MaterialSlot`] describes one indexed binding point on a
//! renderer. Both are transient: created during resolution, never retained.

/// Identity and fallback descriptor for a host-owned texture.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextureKey {
    /// Host-assigned instance identity.
    pub id: u64,
    /// Asset name.
    pub name: String,
    /// Texture width in texels.
    pub width: u32,
    /// Texture height in texels.
    pub height: u32,
}

impl TextureKey {
    /// Creates a texture key.
    pub fn new(id: u64, name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id,
            name: name.into(),
            width,
            height,
        }
    }

    /// Exact instance-identity match.
    #[inline]
    pub fn same_instance(&self, other: &TextureKey) -> bool {
        self.id == other.id
    }

    /// Logical-asset match: same name and pixel dimensions.
    ///
    /// Tolerates duplicated texture instances of the same source asset.
    #[inline]
    pub fn same_asset(&self, other: &TextureKey) -> bool {
        self.name == other.name && self.width == other.width && self.height == other.height
    }
}

/// One indexed material binding point on a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaterialSlot {
    /// Material name.
    pub name: String,
    /// Texture bound to the slot's main map, if any.
    pub texture: Option<TextureKey>,
}

impl MaterialSlot {
    /// Creates a slot with a bound texture.
    pub fn new(name: impl Into<String>, texture: TextureKey) -> Self {
        Self {
            name: name.into(),
            texture: Some(texture),
        }
    }

    /// Creates a slot with no bound texture.
    pub fn unbound(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            texture: None,
        }
    }
}
