use thiserror::Error;

/// A surface measurement that cannot drive a resize.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SurfaceError {
    #[error("surface size is not finite ({width} x {height})")]
    NonFinite { width: f64, height: f64 },
    #[error("surface size is negative ({width} x {height})")]
    Negative { width: f64, height: f64 },
    #[error("surface is not attached and cannot be measured")]
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("tag cloud is already running")]
    AlreadyRunning,
}
