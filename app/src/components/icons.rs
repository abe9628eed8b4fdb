use icondata::Icon;
use leptos::{prelude::*, svg::svg};

/// Renders an `icondata` icon as an inline SVG tinted with the current text color.
pub fn icon(icon: Icon, class: &'static str) -> impl IntoView {
    svg()
        .attr("viewBox", icon.view_box)
        .attr("fill", "currentColor")
        .attr("aria-hidden", "true")
        .class(class)
        .inner_html(icon.data)
}
