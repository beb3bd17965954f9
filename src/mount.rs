use crate::dom;
use tagcloud_core::TagCloudEngine;
use web_sys as web;

/// The engine plus the DOM nodes it drives.
///
/// `elements[i]` is the node for `engine.items()[i]`.
pub struct Mount {
    pub engine: TagCloudEngine,
    pub container: web::HtmlElement,
    elements: Vec<web::HtmlElement>,
}

impl Mount {
    pub fn new(container: web::HtmlElement, engine: TagCloudEngine) -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let inline_styles = engine.config().use_container_inline_styles;
        if inline_styles {
            dom::apply_container_styles(&container);
        }
        let elements =
            dom::create_tag_elements(&document, &container, engine.items(), inline_styles)?;
        log::info!("[tagcloud] mounted {} tags", elements.len());
        Ok(Self {
            engine,
            container,
            elements,
        })
    }

    /// Re-measure the container; returns `true` when the radius changed.
    pub fn measure(&mut self) -> bool {
        let measured = dom::measure_surface(&self.container);
        self.engine.observe_surface(measured)
    }

    pub fn render_frame(&mut self) {
        let Some(frame) = self.engine.tick() else {
            return;
        };
        for (i, params) in frame.in_depth_order() {
            let Some(el) = self.elements.get(i) else {
                continue;
            };
            if let Err(e) = dom::apply_render_params(el, params) {
                log::error!("[tagcloud] style update failed for tag {}: {:?}", i, e);
                return;
            }
        }
    }

    /// Remove the generated nodes; other children of the container stay.
    pub fn clear(&mut self) {
        for el in self.elements.drain(..) {
            el.remove();
        }
    }
}
