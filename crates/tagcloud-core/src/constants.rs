// Tuning constants shared by the layout, rotation and projection stages.

// Speed presets (rotation multiplier)
pub const SPEED_SLOW: f64 = 0.3;
pub const SPEED_NORMAL: f64 = 1.0;
pub const SPEED_FAST: f64 = 2.0;

// Per-frame angle gains (radians per unit of speed)
pub const POINTER_ANGLE_GAIN: f64 = 0.01; // scaled by the normalized pointer offset
pub const IDLE_ANGLE_GAIN: f64 = 0.001; // constant drift while the pointer is away

// Scene defaults
pub const DEFAULT_RADIUS: f64 = 200.0;
pub const DEFAULT_DIRECTION_DEG: f64 = 135.0;
pub const RESPONSIVE_RADIUS_FRACTION: f64 = 0.35; // of min(surface width, height)

// Depth cues: value = BASE + SPAN * alpha
pub const SCALE_BASE: f64 = 0.6;
pub const SCALE_SPAN: f64 = 0.4;
pub const OPACITY_BASE: f64 = 0.3;
pub const OPACITY_SPAN: f64 = 0.7;
pub const STACKING_LEVELS: f64 = 1000.0;
pub const BLUR_MAX_PX: f64 = 3.0;

// Alpha used when the sphere has collapsed (radiusZ == 0)
pub const NEUTRAL_ALPHA: f64 = 0.5;
