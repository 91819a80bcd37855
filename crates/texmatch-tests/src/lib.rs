//! Cross-crate integration tests.
//!
//! Exercises the full recoloring pipeline across engines: sequential
//! statistics, tiled scalar and parallel reductions, UV occupancy masking,
//! and the host accessor seams. Shared fixture builders live at the crate
//! root; the scenarios are in the test modules.

use texmatch_core::{MemoryMesh, PixelBuffer};

/// Deterministic pseudo-random opaque buffer (xorshift).
pub fn noise_buffer(width: u32, height: u32, seed: u64) -> PixelBuffer {
    let mut state = seed | 1;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state >> 40) as f32 / (1u64 << 24) as f32
    };
    let mut buf = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            buf.set_pixel(x, y, [next(), next(), next(), 1.0]);
        }
    }
    buf
}

/// Buffer whose left half is `left` and right half is `right`.
pub fn split_buffer(
    width: u32,
    height: u32,
    left: [f32; 4],
    right: [f32; 4],
) -> PixelBuffer {
    let mut buf = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            buf.set_pixel(x, y, if x < width / 2 { left } else { right });
        }
    }
    buf
}

/// Single-submesh quad over the UV rectangle [u0, u1] x [v0, v1].
pub fn quad_mesh(u0: f32, v0: f32, u1: f32, v1: f32) -> MemoryMesh {
    MemoryMesh::single(
        vec![0, 1, 2, 0, 2, 3],
        vec![[u0, v0], [u1, v0], [u1, v1], [u0, v1]],
    )
}

#[cfg(test)]
mod equivalence;
#[cfg(test)]
mod scenario;
