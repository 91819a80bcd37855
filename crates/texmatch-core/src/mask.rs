//! UV occupancy mask.
//!
//! An [`OccupancyMask`] records which texels of a texture are actually
//! referenced by a mesh's UV mapping. It is built once per
//! (mesh, UV channel, material slot, resolution) tuple by the rasterizer in
//! `texmatch-uv`, then consumed read-only as an optional statistics filter.

/// Boolean per-texel occupancy grid.
///
/// Construction happens through [`new`](Self::new) plus
/// [`mark`](Self::mark) during rasterization; once handed to a statistics
/// engine the mask is only read.
#[derive(Clone)]
pub struct OccupancyMask {
    bits: Vec<bool>,
    width: u32,
    height: u32,
    occupied: usize,
}

impl OccupancyMask {
    /// Creates an empty (all-unoccupied) mask.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            bits: vec![false; width as usize * height as usize],
            width,
            height,
            occupied: 0,
        }
    }

    /// Mask width in texels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Mask height in texels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total texel count.
    #[inline]
    pub fn texel_count(&self) -> usize {
        self.bits.len()
    }

    /// Marks the texel at (x, y) as occupied. Out-of-bounds marks are ignored.
    #[inline]
    pub fn mark(&mut self, x: u32, y: u32) {
        if x < self.width && y < self.height {
            let idx = y as usize * self.width as usize + x as usize;
            if !self.bits[idx] {
                self.bits[idx] = true;
                self.occupied += 1;
            }
        }
    }

    /// Returns whether the texel at (x, y) is occupied.
    ///
    /// Out-of-bounds queries return `false`.
    #[inline]
    pub fn is_occupied(&self, x: u32, y: u32) -> bool {
        if x < self.width && y < self.height {
            self.bits[y as usize * self.width as usize + x as usize]
        } else {
            false
        }
    }

    /// Number of occupied texels.
    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    /// Fraction of texels occupied, in [0, 1]. Zero-area masks report 0.
    pub fn usage_percentage(&self) -> f32 {
        if self.bits.is_empty() {
            0.0
        } else {
            self.occupied as f32 / self.bits.len() as f32
        }
    }
}

impl std::fmt::Debug for OccupancyMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OccupancyMask")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("occupied", &self.occupied)
            .finish()
    }
}
