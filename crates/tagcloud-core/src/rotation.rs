use crate::constants::{IDLE_ANGLE_GAIN, POINTER_ANGLE_GAIN};
use crate::pointer::PointerState;
use glam::{DVec2, DVec3};

/// Rotation angles `(about X, about Y)` for one frame.
///
/// The pointer's vertical offset tilts around X and its horizontal offset
/// spins around Y. Without a pointer the scene drifts at a fixed rate when
/// `keep` is set and holds still otherwise.
#[inline]
pub fn frame_angles(pointer: &PointerState, speed: f64, keep: bool) -> DVec2 {
    if pointer.active {
        DVec2::new(
            pointer.offset.y * speed * POINTER_ANGLE_GAIN,
            pointer.offset.x * speed * POINTER_ANGLE_GAIN,
        )
    } else if keep {
        DVec2::splat(speed * IDLE_ANGLE_GAIN)
    } else {
        DVec2::ZERO
    }
}

/// One incremental rotation, X axis first and then Y axis.
///
/// Sines and cosines are computed once per frame and shared by every item.
/// The Y step uses the z produced by the X step; swapping the order changes
/// the motion path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationStep {
    sin_x: f64,
    cos_x: f64,
    sin_y: f64,
    cos_y: f64,
}

impl RotationStep {
    pub const IDENTITY: Self = Self {
        sin_x: 0.0,
        cos_x: 1.0,
        sin_y: 0.0,
        cos_y: 1.0,
    };

    pub fn new(angle_x: f64, angle_y: f64) -> Self {
        let (sin_x, cos_x) = angle_x.sin_cos();
        let (sin_y, cos_y) = angle_y.sin_cos();
        Self {
            sin_x,
            cos_x,
            sin_y,
            cos_y,
        }
    }

    pub fn from_angles(angles: DVec2) -> Self {
        Self::new(angles.x, angles.y)
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    #[inline]
    pub fn apply(&self, p: DVec3) -> DVec3 {
        let y1 = p.y * self.cos_x - p.z * self.sin_x;
        let z1 = p.z * self.cos_x + p.y * self.sin_x;

        let x2 = p.x * self.cos_y - z1 * self.sin_y;
        let z2 = z1 * self.cos_y + p.x * self.sin_y;

        DVec3::new(x2, y1, z2)
    }
}
