use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle};

use crate::routes::Route;

/// Catch-all for unknown paths.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        div { class: "centered-page",
            Card {
                CardHeader {
                    CardTitle { "Page not found" }
                }
                CardContent {
                    p { "Nothing lives at " code { "{path}" } "." }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| {
                            navigator().push(Route::StaffDashboard {});
                        },
                        "Back to Dashboard"
                    }
                }
            }
        }
    }
}
