use crate::constants::RESPONSIVE_RADIUS_FRACTION;
use crate::error::SurfaceError;
use glam::DVec2;

/// Measured size of the host surface, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    /// Validate a raw measurement. Zero is allowed; it collapses the sphere.
    pub fn new(width: f64, height: f64) -> Result<Self, SurfaceError> {
        if !width.is_finite() || !height.is_finite() {
            return Err(SurfaceError::NonFinite { width, height });
        }
        if width < 0.0 || height < 0.0 {
            return Err(SurfaceError::Negative { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Sphere radius that fits this surface.
    #[inline]
    pub fn responsive_radius(&self) -> f64 {
        self.width.min(self.height) * RESPONSIVE_RADIUS_FRACTION
    }
}
