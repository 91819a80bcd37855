//! Accessor traits for host-owned assets.
//!
//! The recoloring core never owns or mutates host scene state directly.
//! Textures, meshes, and renderers stay behind these narrow seams; the host
//! (an engine integration, a test harness) implements them over its own
//! objects.
//!
//! In-memory implementations ([`MemoryTexture`], [`MemoryMesh`],
//! [`MemoryRenderer`]) are provided for tests and for embedding without an
//! engine.

use crate::{Error, MaterialSlot, PixelBuffer, Result, TextureKey};

/// Read/write access to a host-owned texture's pixels.
pub trait PixelAccessor {
    /// Descriptor for slot resolution.
    fn key(&self) -> &TextureKey;

    /// Fetches the texture contents as an RGBA f32 buffer.
    fn pixels(&self) -> Result<PixelBuffer>;

    /// Writes a full RGBA f32 buffer back to the texture.
    ///
    /// # Errors
    ///
    /// Implementations must reject buffers whose dimensions differ from the
    /// texture's.
    fn set_pixels(&mut self, buffer: &PixelBuffer) -> Result<()>;
}

/// Read access to a host-owned mesh's topology and UVs.
pub trait GeometryAccessor {
    /// Number of submeshes.
    fn submesh_count(&self) -> usize;

    /// Triangle index list for a submesh (three indices per triangle).
    fn triangles(&self, submesh: usize) -> Result<Vec<u32>>;

    /// UV coordinates for a channel, one `[u, v]` pair per vertex.
    fn uvs(&self, channel: usize) -> Result<Vec<[f32; 2]>>;
}

/// Read access to a renderer's material bindings.
pub trait MaterialAccessor {
    /// Material slots in binding order.
    fn material_slots(&self) -> Vec<MaterialSlot>;
}

/// In-memory texture backed by an owned [`PixelBuffer`].
#[derive(Debug, Clone)]
pub struct MemoryTexture {
    key: TextureKey,
    buffer: PixelBuffer,
}

impl MemoryTexture {
    /// Creates a texture from a buffer, deriving the key dimensions from it.
    pub fn new(id: u64, name: impl Into<String>, buffer: PixelBuffer) -> Self {
        let key = TextureKey::new(id, name, buffer.width(), buffer.height());
        Self { key, buffer }
    }
}

impl PixelAccessor for MemoryTexture {
    fn key(&self) -> &TextureKey {
        &self.key
    }

    fn pixels(&self) -> Result<PixelBuffer> {
        Ok(self.buffer.clone())
    }

    fn set_pixels(&mut self, buffer: &PixelBuffer) -> Result<()> {
        if buffer.dimensions() != self.buffer.dimensions() {
            return Err(Error::invalid_dimensions(
                buffer.width(),
                buffer.height(),
                format!(
                    "texture is {}x{}",
                    self.buffer.width(),
                    self.buffer.height()
                ),
            ));
        }
        self.buffer = buffer.clone();
        Ok(())
    }
}

/// In-memory mesh: triangle lists per submesh, UV arrays per channel.
#[derive(Debug, Clone, Default)]
pub struct MemoryMesh {
    submeshes: Vec<Vec<u32>>,
    uv_channels: Vec<Vec<[f32; 2]>>,
}

impl MemoryMesh {
    /// Creates a mesh from submesh triangle lists and UV channels.
    pub fn new(submeshes: Vec<Vec<u32>>, uv_channels: Vec<Vec<[f32; 2]>>) -> Self {
        Self {
            submeshes,
            uv_channels,
        }
    }

    /// Convenience constructor for a single-submesh, single-UV-channel mesh.
    pub fn single(triangles: Vec<u32>, uvs: Vec<[f32; 2]>) -> Self {
        Self {
            submeshes: vec![triangles],
            uv_channels: vec![uvs],
        }
    }
}

impl GeometryAccessor for MemoryMesh {
    fn submesh_count(&self) -> usize {
        self.submeshes.len()
    }

    fn triangles(&self, submesh: usize) -> Result<Vec<u32>> {
        self.submeshes
            .get(submesh)
            .cloned()
            .ok_or_else(|| Error::other(format!("no submesh {submesh}")))
    }

    fn uvs(&self, channel: usize) -> Result<Vec<[f32; 2]>> {
        self.uv_channels
            .get(channel)
            .cloned()
            .ok_or_else(|| Error::other(format!("no UV channel {channel}")))
    }
}

/// In-memory renderer holding a fixed slot list.
#[derive(Debug, Clone, Default)]
pub struct MemoryRenderer {
    slots: Vec<MaterialSlot>,
}

impl MemoryRenderer {
    /// Creates a renderer with the given slots.
    pub fn new(slots: Vec<MaterialSlot>) -> Self {
        Self { slots }
    }
}

impl MaterialAccessor for MemoryRenderer {
    fn material_slots(&self) -> Vec<MaterialSlot> {
        self.slots.clone()
    }
}
