use crate::constants::{CONTAINER_STYLES, ITEM_CLASS, ITEM_STYLES, ITEM_TAG};
use crate::style;
use tagcloud_core::{Item, RenderParams, SurfaceError, SurfaceSize};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Create one `<a class="tag-cloud-item">` per item and append them to
/// `container` in a single fragment. The result is indexed like `items`.
pub fn create_tag_elements(
    document: &web::Document,
    container: &web::HtmlElement,
    items: &[Item],
    inline_styles: bool,
) -> anyhow::Result<Vec<web::HtmlElement>> {
    let fragment = document.create_document_fragment();
    let mut elements = Vec::with_capacity(items.len());
    for item in items {
        let anchor = document
            .create_element(ITEM_TAG)
            .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", ITEM_TAG, e))?
            .dyn_into::<web::HtmlAnchorElement>()
            .map_err(|e| anyhow::anyhow!("<{}> is not an anchor: {:?}", ITEM_TAG, e))?;
        anchor.set_href(item.href());
        anchor.set_class_name(ITEM_CLASS);
        anchor.set_text_content(Some(item.label()));

        let el: web::HtmlElement = anchor.into();
        let css = el.style();
        _ = css.set_property("color", item.color());
        if inline_styles {
            for (name, value) in ITEM_STYLES {
                _ = css.set_property(name, value);
            }
        }
        fragment
            .append_child(&el)
            .map_err(|e| anyhow::anyhow!("append tag: {:?}", e))?;
        elements.push(el);
    }
    container
        .append_child(&fragment)
        .map_err(|e| anyhow::anyhow!("mount tags: {:?}", e))?;
    Ok(elements)
}

pub fn apply_container_styles(container: &web::HtmlElement) {
    let css = container.style();
    for (name, value) in CONTAINER_STYLES {
        _ = css.set_property(name, value);
    }
}

/// Layout size of the container. Detached elements have no layout.
pub fn measure_surface(container: &web::HtmlElement) -> Result<SurfaceSize, SurfaceError> {
    if !container.is_connected() {
        return Err(SurfaceError::Unavailable);
    }
    SurfaceSize::new(
        container.offset_width() as f64,
        container.offset_height() as f64,
    )
}

pub fn apply_render_params(el: &web::HtmlElement, params: &RenderParams) -> Result<(), JsValue> {
    let css = el.style();
    for (name, value) in style::frame_declarations(params) {
        css.set_property(name, &value)?;
    }
    Ok(())
}
