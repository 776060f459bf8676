//! Front/back visibility of tiles on the ring.

use super::constants::DEPTH_OPACITY_FLOOR;

/// Normalize any degree value into `[0, 360)`.
#[inline]
pub fn normalize_deg(deg: f64) -> f64 {
    let n = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if n >= 360.0 {
        0.0
    } else {
        n
    }
}

/// Depth factor of a tile in `[0, 1]`: 1 faces the viewer, 0 faces away.
///
/// Pure in both angles; `depth_factor(a, r) == depth_factor(a, r + 360.0)`.
#[inline]
pub fn depth_factor(tile_deg: f64, rotation_deg: f64) -> f64 {
    let rad = normalize_deg(tile_deg + rotation_deg).to_radians();
    ((rad.cos() + 1.0) * 0.5).clamp(0.0, 1.0)
}

/// Opacity hint for a given depth factor. Never below the floor, so back
/// tiles stay visible and clickable.
#[inline]
pub fn tile_opacity(depth: f64) -> f64 {
    DEPTH_OPACITY_FLOOR + (1.0 - DEPTH_OPACITY_FLOOR) * depth.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_handles_negatives_and_wraps() {
        assert_eq!(normalize_deg(-90.0), 270.0);
        assert_eq!(normalize_deg(720.0), 0.0);
        assert_eq!(normalize_deg(-1e-18), 0.0);
    }

    #[test]
    fn opacity_spans_floor_to_one() {
        assert!((tile_opacity(0.0) - DEPTH_OPACITY_FLOOR).abs() < 1e-12);
        assert!((tile_opacity(1.0) - 1.0).abs() < 1e-12);
        assert!((tile_opacity(-3.0) - DEPTH_OPACITY_FLOOR).abs() < 1e-12);
    }
}
