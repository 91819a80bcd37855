//! UV triangle rasterization into an occupancy mask.
//!
//! Maps each UV triangle of a mesh onto the texel grid and marks the texels
//! it covers. Coordinates outside [0, 1] wrap (tiled UVs sample the same
//! texels as their wrapped equivalents), and the V axis is flipped so that
//! UV origin bottom-left lands on image origin top-left.

use glam::Vec2;
use tracing::debug;

use texmatch_core::{Error, GeometryAccessor, OccupancyMask, Result};

/// Signed pixel-space area below which a triangle is treated as degenerate
/// and rasterized as its outline instead.
const DEGENERATE_AREA: f32 = 1e-6;

/// How triangle coverage is converted to occupied texels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RasterMode {
    /// Mark every texel whose center lies inside the triangle.
    #[default]
    Filled,
    /// Mark only texels along the triangle edges (wireframe coverage).
    EdgesOnly,
}

#[inline]
fn uv_to_pixel(uv: [f32; 2], width: u32, height: u32) -> Vec2 {
    let u = uv[0].rem_euclid(1.0);
    let v = uv[1].rem_euclid(1.0);
    Vec2::new(u * width as f32, (1.0 - v) * height as f32)
}

#[inline]
fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b - a).perp_dot(p - a)
}

fn mark_point(mask: &mut OccupancyMask, p: Vec2) {
    let x = (p.x.floor() as i64).clamp(0, mask.width() as i64 - 1) as u32;
    let y = (p.y.floor() as i64).clamp(0, mask.height() as i64 - 1) as u32;
    mask.mark(x, y);
}

/// Walks the segment a->b at sub-texel steps, marking every texel touched.
fn mark_edge(mask: &mut OccupancyMask, a: Vec2, b: Vec2) {
    let delta = b - a;
    let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as u32;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        mark_point(mask, a + delta * t);
    }
}

fn fill_triangle(mask: &mut OccupancyMask, a: Vec2, b: Vec2, c: Vec2) {
    let area = edge(a, b, c);
    if area.abs() < DEGENERATE_AREA {
        // Zero-area triangle: no interior, rasterize the outline.
        mark_edge(mask, a, b);
        mark_edge(mask, b, c);
        mark_edge(mask, c, a);
        return;
    }

    let min_x = a.x.min(b.x).min(c.x).floor().clamp(0.0, mask.width() as f32) as u32;
    let max_x = a.x.max(b.x).max(c.x).ceil().clamp(0.0, mask.width() as f32) as u32;
    let min_y = a.y.min(b.y).min(c.y).floor().clamp(0.0, mask.height() as f32) as u32;
    let max_y = a.y.max(b.y).max(c.y).ceil().clamp(0.0, mask.height() as f32) as u32;

    for y in min_y..max_y {
        for x in min_x..max_x {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let w0 = edge(a, b, p);
            let w1 = edge(b, c, p);
            let w2 = edge(c, a, p);
            // Winding-agnostic inside test, inclusive on edges.
            let inside = if area > 0.0 {
                w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0
            } else {
                w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0
            };
            if inside {
                mask.mark(x, y);
            }
        }
    }
}

/// Rasterizes UV triangles into an occupancy mask at the given resolution.
///
/// `triangles` is a flat index list, three indices per triangle, each
/// indexing into `uvs`.
///
/// # Errors
///
/// - [`Error::InvalidDimensions`] for a zero-area mask resolution
/// - [`Error::Other`] if the index count is not a multiple of 3
/// - [`Error::IndexOutOfRange`] if an index refers past the end of `uvs`
pub fn build_occupancy_mask(
    triangles: &[u32],
    uvs: &[[f32; 2]],
    width: u32,
    height: u32,
    mode: RasterMode,
) -> Result<OccupancyMask> {
    if width == 0 || height == 0 {
        return Err(Error::invalid_dimensions(
            width,
            height,
            "occupancy mask requires a non-zero resolution",
        ));
    }
    if triangles.len() % 3 != 0 {
        return Err(Error::other(format!(
            "triangle index count {} is not a multiple of 3",
            triangles.len()
        )));
    }
    for &index in triangles {
        if index as usize >= uvs.len() {
            return Err(Error::index_out_of_range(index, uvs.len()));
        }
    }

    let mut mask = OccupancyMask::new(width, height);
    for tri in triangles.chunks_exact(3) {
        let a = uv_to_pixel(uvs[tri[0] as usize], width, height);
        let b = uv_to_pixel(uvs[tri[1] as usize], width, height);
        let c = uv_to_pixel(uvs[tri[2] as usize], width, height);
        match mode {
            RasterMode::Filled => fill_triangle(&mut mask, a, b, c),
            RasterMode::EdgesOnly => {
                mark_edge(&mut mask, a, b);
                mark_edge(&mut mask, b, c);
                mark_edge(&mut mask, c, a);
            }
        }
    }

    debug!(
        triangles = triangles.len() / 3,
        width,
        height,
        occupied = mask.occupied_count(),
        usage = mask.usage_percentage(),
        "rasterized occupancy mask"
    );
    Ok(mask)
}

/// Rasterizes one submesh of a [`GeometryAccessor`] into an occupancy mask.
pub fn build_occupancy_mask_for(
    mesh: &impl GeometryAccessor,
    submesh: usize,
    uv_channel: usize,
    width: u32,
    height: u32,
    mode: RasterMode,
) -> Result<OccupancyMask> {
    let triangles = mesh.triangles(submesh)?;
    let uvs = mesh.uvs(uv_channel)?;
    build_occupancy_mask(&triangles, &uvs, width, height, mode)
}
