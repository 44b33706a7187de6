use dioxus::prelude::*;

/// Two-column grid of label/value pairs.
#[component]
pub fn DetailGrid(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        dl { class: "detail-grid", {children} }
    }
}

/// One label/value pair inside a `DetailGrid`.
///
/// Pass `value` for plain text, or children for rich content such as a
/// badge. Children win when both are given. `icon` sits before the label.
#[component]
pub fn DetailItem(
    label: &'static str,
    #[props(default)] value: String,
    icon: Option<Element>,
    children: Element,
) -> Element {
    let has_children = children != Ok(VNode::placeholder());

    rsx! {
        div { class: "detail-item",
            dt { class: "detail-item-label",
                if let Some(icon) = icon {
                    span { class: "detail-item-icon", {icon} }
                }
                "{label}"
            }
            dd { class: "detail-item-value",
                if has_children {
                    {children}
                } else {
                    "{value}"
                }
            }
        }
    }
}
