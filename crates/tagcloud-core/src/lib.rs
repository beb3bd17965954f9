pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod layout;
pub mod palette;
pub mod pointer;
pub mod projection;
pub mod rotation;
pub mod surface;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use palette::Palette;
pub use pointer::PointerState;
pub use projection::{depth_alpha, project, RenderParams};
pub use rotation::{frame_angles, RotationStep};
pub use surface::SurfaceSize;
