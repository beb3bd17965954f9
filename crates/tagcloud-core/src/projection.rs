use crate::constants::*;
use crate::surface::SurfaceSize;
use glam::DVec3;

/// Per-item output of a frame, ready to be written onto the item's element.
///
/// - `translate_x`, `translate_y`: offset from the surface's top-left corner
/// - `scale`: uniform scale, 0.6 (farthest) to 1.0 (nearest)
/// - `opacity`: 0.3 (farthest) to 1.0 (nearest)
/// - `stacking_order`: 0..=1000, higher draws on top
/// - `blur_radius`: pixels, 3 (farthest) to 0 (nearest)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderParams {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub opacity: f64,
    pub stacking_order: u32,
    pub blur_radius: f64,
}

/// Depth of `z` on a sphere of depth radius `radius_z`: 0 farthest, 1 nearest.
///
/// A collapsed sphere (`radius_z == 0`) has no depth and maps to 0.5.
#[inline]
pub fn depth_alpha(z: f64, radius_z: f64) -> f64 {
    if radius_z == 0.0 || !radius_z.is_finite() {
        return NEUTRAL_ALPHA;
    }
    ((z + radius_z) / (2.0 * radius_z)).clamp(0.0, 1.0)
}

/// Orthographic projection with depth cues.
///
/// Depth only changes size, opacity, stacking and blur; x/y map straight to
/// the surface around its center.
pub fn project(position: DVec3, radius_z: f64, surface: SurfaceSize) -> RenderParams {
    let alpha = depth_alpha(position.z, radius_z);
    let center = surface.center();
    RenderParams {
        translate_x: position.x + center.x,
        translate_y: position.y + center.y,
        scale: SCALE_BASE + SCALE_SPAN * alpha,
        opacity: OPACITY_BASE + alpha * OPACITY_SPAN,
        stacking_order: (alpha * STACKING_LEVELS).floor() as u32,
        blur_radius: (BLUR_MAX_PX - alpha * BLUR_MAX_PX).max(0.0),
    }
}

/// Fill `order` with item indices sorted nearest first (descending z).
///
/// The sort is stable: items at equal depth keep their insertion order.
pub fn depth_order_into(depths: &[f64], order: &mut Vec<usize>) {
    order.clear();
    order.extend(0..depths.len());
    // `+ 0.0` folds -0.0 into 0.0 so both count as the same depth
    order.sort_by(|&a, &b| (depths[b] + 0.0).total_cmp(&(depths[a] + 0.0)));
}
