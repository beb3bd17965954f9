use crate::surface::SurfaceSize;
use glam::DVec2;

/// Pointer offset from the surface center, normalized to `[-1, 1]` per axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub offset: DVec2,
    pub active: bool,
}

impl PointerState {
    /// Record a move to surface-local pixel coordinates `(x, y)`.
    ///
    /// A move over the surface also marks the pointer active. On a zero-sized
    /// surface the offset stays at the center.
    pub fn moved(&mut self, x: f64, y: f64, surface: SurfaceSize) {
        let half = surface.center();
        self.offset = DVec2::new(normalize(x, half.x), normalize(y, half.y));
        self.active = true;
    }

    pub fn entered(&mut self) {
        self.active = true;
    }

    pub fn left(&mut self) {
        self.active = false;
        self.offset = DVec2::ZERO;
    }
}

#[inline]
fn normalize(v: f64, half: f64) -> f64 {
    if half > 0.0 && v.is_finite() {
        ((v - half) / half).clamp(-1.0, 1.0)
    } else {
        0.0
    }
}
