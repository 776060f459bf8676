//! Ring geometry: tile spacing, radius and stacking.

use super::constants::{RING_RADIUS_FALLBACK_PX, RING_RADIUS_MAX_PX, RING_RADIUS_MIN_PX};
use super::depth::normalize_deg;
use glam::Vec3;

/// Angular spacing between neighbouring tiles. Zero tiles count as one.
#[inline]
pub fn angle_step_deg(count: usize) -> f64 {
    360.0 / count.max(1) as f64
}

/// Fixed angular offset of tile `index` on the ring.
#[inline]
pub fn tile_angle_deg(index: usize, count: usize) -> f64 {
    angle_step_deg(count) * index as f64
}

/// Radius that lets `count` tiles of `tile_width_px` sit edge to edge,
/// clamped to a sane range. Fewer than three tiles use a fixed radius.
pub fn ring_radius_px(count: usize, tile_width_px: f64) -> f64 {
    if count < 3 {
        return RING_RADIUS_FALLBACK_PX;
    }
    let r = (tile_width_px / 2.0) / (std::f64::consts::PI / count as f64).tan();
    r.clamp(RING_RADIUS_MIN_PX, RING_RADIUS_MAX_PX)
}

/// CSS transform placing a tile on the ring.
pub fn tile_transform(index: usize, count: usize, radius_px: f64) -> String {
    format!(
        "rotateY({}deg) translateZ({}px)",
        tile_angle_deg(index, count),
        radius_px
    )
}

/// CSS transform for the ring container at the given rotation.
pub fn ring_transform(rotation_deg: f64, radius_px: f64) -> String {
    format!(
        "translateZ({:.1}px) rotateY({:.3}deg)",
        -radius_px, rotation_deg
    )
}

/// Tile centre in ring space, viewer on +Z. Matches the CSS transforms:
/// `rotateY(a)` moves +Z towards +X.
pub fn tile_center(index: usize, count: usize, radius_px: f64, rotation_deg: f64) -> Vec3 {
    let rad = normalize_deg(tile_angle_deg(index, count) + rotation_deg).to_radians();
    Vec3::new(
        (radius_px * rad.sin()) as f32,
        0.0,
        (radius_px * rad.cos()) as f32,
    )
}

/// z-index per tile so nearer tiles stack above farther ones.
/// Returned values are `1..=count`, highest for the front-most tile.
pub fn stacking_order(count: usize, radius_px: f64, rotation_deg: f64) -> Vec<i32> {
    let mut by_depth: Vec<(usize, f32)> = (0..count)
        .map(|i| (i, tile_center(i, count, radius_px, rotation_deg).z))
        .collect();
    by_depth.sort_by(|a, b| a.1.total_cmp(&b.1));
    let mut order = vec![0; count];
    for (rank, (i, _)) in by_depth.into_iter().enumerate() {
        order[i] = rank as i32 + 1;
    }
    order
}
