use dioxus::prelude::*;
use shared_ui::{Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Input, PageHeader, PageTitle};

use crate::routes::Route;

/// Staff landing page. Opens a case by its id.
#[component]
pub fn StaffDashboard() -> Element {
    let mut case_id = use_signal(String::new);

    let open_case = move |evt: FormEvent| {
        evt.prevent_default();
        let id = case_id().trim().to_string();
        if !id.is_empty() {
            navigator().push(Route::CaseDetail { id });
        }
    };

    rsx! {
        PageHeader {
            PageTitle { "Staff Dashboard" }
        }
        Card {
            CardHeader {
                CardTitle { "Open a case" }
                CardDescription { "Paste the case id from the case register" }
            }
            CardContent {
                form { class: "open-case-form", onsubmit: open_case,
                    Input {
                        label: "Case id",
                        placeholder: "e.g. 0b6f8a52-3c1e-4d0a-9a55-6d7f1e2a9c01",
                        value: case_id(),
                        on_input: move |e: FormEvent| case_id.set(e.value()),
                    }
                    Button { submit: true, "Open" }
                }
            }
        }
    }
}
