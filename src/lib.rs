#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use tagcloud_core::{LifecycleError, Palette, SceneConfig, TagCloudEngine, TagSpec};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod mount;
mod style;

use events::Listener;
use frame::FrameLoop;
use mount::Mount;

#[wasm_bindgen(start)]
pub fn boot() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tagcloud-web loaded");
    Ok(())
}

/// Rotating 3D tag cloud mounted on a container element.
///
/// ```js
/// const cloud = new TagCloud3d(el, [{ name: "rust", href: "/tags/rust/" }], { maxSpeed: "fast" });
/// cloud.start();
/// // later
/// cloud.destroy();
/// ```
#[wasm_bindgen]
pub struct TagCloud3d {
    mount: Rc<RefCell<Mount>>,
    frame_loop: FrameLoop,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl TagCloud3d {
    /// Create the tag elements inside `container`. Nothing moves until `start`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        container: web::HtmlElement,
        tags: JsValue,
        options: JsValue,
    ) -> Result<TagCloud3d, JsValue> {
        Self::build(container, tags, options, Palette::from_entropy()).map_err(to_js_error)
    }

    /// Like the constructor, with reproducible tag colors.
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(
        container: web::HtmlElement,
        tags: JsValue,
        options: JsValue,
        seed: u32,
    ) -> Result<TagCloud3d, JsValue> {
        Self::build(container, tags, options, Palette::seeded(seed as u64))
            .map_err(to_js_error)
    }

    /// Lay out (first call only), wire input and begin the frame loop.
    pub fn start(&mut self) -> Result<(), JsValue> {
        match self.mount.borrow_mut().engine.start() {
            Ok(()) => {}
            Err(LifecycleError::AlreadyRunning) => {
                log::warn!("[tagcloud] start ignored: already running");
                return Ok(());
            }
        }
        self.mount.borrow_mut().measure();

        if self.listeners.is_empty() {
            self.listeners = events::wire_input_handlers(&self.mount).map_err(to_js_error)?;
        }
        let mount = self.mount.clone();
        self.frame_loop
            .start(move || mount.borrow_mut().render_frame())
            .map_err(to_js_error)
    }

    /// Cancel the pending frame and detach listeners. Tags stay in place.
    pub fn stop(&mut self) {
        self.frame_loop.stop();
        self.listeners.clear();
        self.mount.borrow_mut().engine.stop();
    }

    /// Stop and remove the generated tags from the container.
    pub fn destroy(&mut self) {
        self.stop();
        self.mount.borrow_mut().clear();
    }

    #[wasm_bindgen(getter, js_name = itemCount)]
    pub fn item_count(&self) -> usize {
        self.mount.borrow().engine.item_count()
    }

    #[wasm_bindgen(getter, js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running() && self.mount.borrow().engine.is_running()
    }
}

impl TagCloud3d {
    fn build(
        container: web::HtmlElement,
        tags: JsValue,
        options: JsValue,
        mut palette: Palette,
    ) -> anyhow::Result<Self> {
        let tags = parse_tags(tags)?;
        let config = parse_options(options)?;
        let engine = TagCloudEngine::new(tags, config, &mut palette);
        let mount = Mount::new(container, engine)?;
        Ok(Self {
            mount: Rc::new(RefCell::new(mount)),
            frame_loop: FrameLoop::default(),
            listeners: Vec::new(),
        })
    }
}

fn parse_tags(tags: JsValue) -> anyhow::Result<Vec<TagSpec>> {
    serde_wasm_bindgen::from_value(tags)
        .map_err(|e| anyhow::anyhow!("tags must be an array of {{ name, href }}: {}", e))
}

fn parse_options(options: JsValue) -> anyhow::Result<SceneConfig> {
    if options.is_undefined() || options.is_null() {
        return Ok(SceneConfig::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| anyhow::anyhow!("invalid tag cloud options: {}", e))
}

fn to_js_error(e: anyhow::Error) -> JsValue {
    log::error!("[tagcloud] {:?}", e);
    JsValue::from_str(&format!("{:#}", e))
}
