use dioxus::prelude::*;

/// Fixed square gap between stacked elements.
#[component]
pub fn Spacer(size: u32) -> Element {
    rsx! {
        span {
            class: "c-spacer",
            style: "display: block; width: {size}px; height: {size}px;",
        }
    }
}
