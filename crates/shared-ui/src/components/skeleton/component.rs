use dioxus::prelude::*;

/// Stack of pulsing bars standing in for text that is still loading.
#[component]
pub fn Skeleton(#[props(default = 1)] lines: usize) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "skeleton", "aria-hidden": true,
            for i in 0..lines {
                div { key: "{i}", class: "skeleton-line" }
            }
        }
    }
}
