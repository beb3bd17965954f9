// DOM names and inline styles used by the web front-end.

pub const ITEM_TAG: &str = "a";
pub const ITEM_CLASS: &str = "tag-cloud-item";

// Applied when `useContainerInlineStyles` is set
pub const CONTAINER_STYLES: [(&str, &str); 2] = [("position", "relative"), ("overflow", "hidden")];
pub const ITEM_STYLES: [(&str, &str); 4] = [
    ("position", "absolute"),
    ("left", "0"),
    ("top", "0"),
    ("will-change", "transform, opacity, filter"),
];
