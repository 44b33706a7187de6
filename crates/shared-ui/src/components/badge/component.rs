use dioxus::prelude::*;

/// Color tone of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeTone {
    Green,
    Yellow,
    Gray,
    #[default]
    Blue,
}

impl BadgeTone {
    fn class(&self) -> &'static str {
        match self {
            BadgeTone::Green => "green",
            BadgeTone::Yellow => "yellow",
            BadgeTone::Gray => "gray",
            BadgeTone::Blue => "blue",
        }
    }
}

/// Inline pill for statuses and short labels.
#[component]
pub fn Badge(
    #[props(default)] tone: BadgeTone,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-tone", tone.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}
