use dioxus::prelude::*;
use icondata::Icon as IconData;

/// Inline svg rendered from an `icondata` glyph. Size and tint come from
/// `class`; the fill follows `currentColor` so text utilities apply.
#[component]
pub fn Icon(icon: &'static IconData, #[props(default = "w-5 h-5")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            view_box: icon.view_box.unwrap_or("0 0 24 24"),
            fill: "currentColor",
            dangerous_inner_html: "{icon.data}"
        }
    }
}
