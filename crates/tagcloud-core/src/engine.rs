use crate::config::SceneConfig;
use crate::error::{LifecycleError, SurfaceError};
use crate::layout::fibonacci_sphere;
use crate::palette::Palette;
use crate::pointer::PointerState;
use crate::projection::{depth_order_into, project, RenderParams};
use crate::rotation::{frame_angles, RotationStep};
use crate::surface::SurfaceSize;
use glam::{DVec2, DVec3};
use serde::Deserialize;

/// A tag as supplied by the page: `{ "name": ..., "href": ... }`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TagSpec {
    pub name: String,
    #[serde(default)]
    pub href: String,
}

impl TagSpec {
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
        }
    }
}

/// Engine-owned state of one tag. The color is fixed at creation.
#[derive(Clone, Debug)]
pub struct Item {
    label: String,
    href: String,
    color: String,
    position: DVec3,
}

impl Item {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Idle,
    Running,
    Stopped,
}

/// Render output of one tick, indexed like the engine's items.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    params: Vec<RenderParams>,
    depth_order: Vec<usize>,
    depths: Vec<f64>,
}

impl Frame {
    pub fn params(&self) -> &[RenderParams] {
        &self.params
    }

    /// Item indices nearest first; equal depths keep insertion order.
    pub fn depth_order(&self) -> &[usize] {
        &self.depth_order
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// `(item index, params)` pairs, nearest item first.
    pub fn in_depth_order(&self) -> impl Iterator<Item = (usize, &RenderParams)> + '_ {
        self.depth_order.iter().map(move |&i| (i, &self.params[i]))
    }

    fn rebuild(&mut self, items: &[Item], radius_z: f64, surface: SurfaceSize) {
        self.depths.clear();
        self.depths.extend(items.iter().map(|it| it.position.z));
        depth_order_into(&self.depths, &mut self.depth_order);

        self.params.clear();
        self.params
            .extend(items.iter().map(|it| project(it.position, radius_z, surface)));
    }
}

/// Rotating tag sphere.
///
/// The engine owns the items and their coordinates; callers keep their own
/// per-item handles (DOM nodes, sprites) in a parallel list using the same
/// indices. Nothing is scheduled here: the owner calls [`tick`] once per
/// display frame and writes the returned [`Frame`] to its items.
///
/// Lifecycle: `Idle` → `start` (layout) → `Running` → `stop` → `Stopped`;
/// `start` on a stopped engine resumes from the current coordinates.
///
/// [`tick`]: TagCloudEngine::tick
pub struct TagCloudEngine {
    items: Vec<Item>,
    config: SceneConfig,
    radius: DVec3,
    surface: SurfaceSize,
    pointer: PointerState,
    lifecycle: Lifecycle,
    frame: Frame,
    frame_count: u64,
}

impl TagCloudEngine {
    /// Create the items, drawing one color per tag from `palette`.
    pub fn new(tags: Vec<TagSpec>, config: SceneConfig, palette: &mut Palette) -> Self {
        let items = tags
            .into_iter()
            .map(|t| Item {
                label: t.name,
                href: t.href,
                color: palette.pick(),
                position: DVec3::ZERO,
            })
            .collect::<Vec<_>>();
        let radius = DVec3::splat(config.base_radius());
        Self {
            items,
            config,
            radius,
            surface: SurfaceSize::default(),
            pointer: PointerState::default(),
            lifecycle: Lifecycle::Idle,
            frame: Frame::default(),
            frame_count: 0,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Current per-axis sphere radius.
    pub fn radius(&self) -> DVec3 {
        self.radius
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    /// Number of ticks that produced a frame.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Last frame produced by [`tick`](Self::tick).
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    // ---------------- Pointer input ----------------

    /// Pointer moved to surface-local pixel coordinates.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.pointer.moved(x, y, self.surface);
    }

    pub fn pointer_enter(&mut self) {
        self.pointer.entered();
    }

    pub fn pointer_leave(&mut self) {
        self.pointer.left();
    }

    // ---------------- Lifecycle ----------------

    pub fn start(&mut self) -> Result<(), LifecycleError> {
        match self.lifecycle {
            Lifecycle::Running => return Err(LifecycleError::AlreadyRunning),
            Lifecycle::Idle => {
                self.lay_out();
                log::debug!(
                    "[tagcloud] laid out {} items at radius {:.1}",
                    self.items.len(),
                    self.radius.x
                );
            }
            Lifecycle::Stopped => {
                log::debug!("[tagcloud] resuming after {} frames", self.frame_count);
            }
        }
        self.lifecycle = Lifecycle::Running;
        Ok(())
    }

    /// Halt rotation and projection. Items keep their coordinates.
    pub fn stop(&mut self) {
        if self.lifecycle == Lifecycle::Running {
            self.lifecycle = Lifecycle::Stopped;
            log::debug!("[tagcloud] stopped after {} frames", self.frame_count);
        }
    }

    // ---------------- Surface ----------------

    /// Fit the sphere to a new surface size.
    ///
    /// Returns `true` when the radius changed. Coordinates are rescaled so
    /// they stay on the sphere; a stopped engine ignores resizes.
    pub fn resize(&mut self, size: SurfaceSize) -> bool {
        if self.lifecycle == Lifecycle::Stopped {
            return false;
        }
        self.surface = size;
        let new_radius = DVec3::splat(size.responsive_radius());
        if new_radius == self.radius {
            return false;
        }
        let old_radius = std::mem::replace(&mut self.radius, new_radius);
        if self.lifecycle == Lifecycle::Running {
            if old_radius.cmpeq(DVec3::ZERO).any() {
                // directions collapsed with the old radius
                self.lay_out();
            } else {
                let ratio = new_radius / old_radius;
                for item in &mut self.items {
                    item.position *= ratio;
                }
            }
        }
        log::debug!(
            "[tagcloud] surface {:.0}x{:.0} -> radius {:.1}",
            size.width,
            size.height,
            new_radius.x
        );
        true
    }

    /// Apply a surface measurement; a failed one keeps the previous radius.
    pub fn observe_surface(&mut self, measured: Result<SurfaceSize, SurfaceError>) -> bool {
        match measured {
            Ok(size) => self.resize(size),
            Err(e) => {
                log::warn!("[tagcloud] ignoring surface measurement: {}", e);
                false
            }
        }
    }

    // ---------------- Frame ----------------

    /// Advance one frame: rotate every item, then project.
    ///
    /// Returns `None` unless the engine is running.
    pub fn tick(&mut self) -> Option<&Frame> {
        if self.lifecycle != Lifecycle::Running {
            return None;
        }
        let angles = frame_angles(&self.pointer, self.config.speed(), self.config.keep);
        self.rotate(angles);
        self.frame.rebuild(&self.items, self.radius.z, self.surface);
        self.frame_count += 1;
        Some(&self.frame)
    }

    fn rotate(&mut self, angles: DVec2) {
        let step = RotationStep::from_angles(angles);
        if step.is_identity() {
            return;
        }
        for item in &mut self.items {
            item.position = step.apply(item.position);
        }
    }

    fn lay_out(&mut self) {
        let points = fibonacci_sphere(self.items.len(), self.radius);
        for (item, p) in self.items.iter_mut().zip(points) {
            item.position = p;
        }
    }
}
