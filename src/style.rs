use tagcloud_core::RenderParams;

// CSS values for one item's render parameters.

#[inline]
pub fn transform(p: &RenderParams) -> String {
    format!(
        "translate3d({:.2}px, {:.2}px, 0) scale({:.3})",
        p.translate_x, p.translate_y, p.scale
    )
}

#[inline]
pub fn opacity(p: &RenderParams) -> String {
    format!("{:.3}", p.opacity)
}

#[inline]
pub fn z_index(p: &RenderParams) -> String {
    p.stacking_order.to_string()
}

#[inline]
pub fn blur_filter(p: &RenderParams) -> String {
    format!("blur({:.2}px)", p.blur_radius)
}

/// `(property, value)` pairs written on every frame.
pub fn frame_declarations(p: &RenderParams) -> [(&'static str, String); 4] {
    [
        ("transform", transform(p)),
        ("opacity", opacity(p)),
        ("z-index", z_index(p)),
        ("filter", blur_filter(p)),
    ]
}
