use dioxus::prelude::*;

/// Text field with its label and, when present, the validation message
/// the server returned for it.
#[component]
pub fn Input(
    label: &'static str,
    value: String,
    on_input: EventHandler<FormEvent>,
    #[props(default = "text")] kind: &'static str,
    #[props(default)] placeholder: String,
    #[props(default)] error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "field",
            span { class: "field-label", "{label}" }
            input {
                r#type: kind,
                value: value,
                placeholder: placeholder,
                "aria-invalid": error.is_some(),
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if let Some(msg) = error {
                span { class: "field-error", role: "alert", "{msg}" }
            }
        }
    }
}
