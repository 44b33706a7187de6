use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdTrash2;
use dioxus_free_icons::Icon;
use shared_types::AppError;
use shared_ui::{
    AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Button, ButtonVariant,
};

use crate::routes::Route;

/// Delete action with a confirmation dialog. Goes back to the dashboard
/// once the case is gone.
#[component]
pub fn DeleteCaseButton(case_id: String, case_number: String) -> Element {
    let mut confirm_open = use_signal(|| false);
    let mut deleting = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let handle_delete = move |_: MouseEvent| {
        let id = case_id.clone();
        spawn(async move {
            deleting.set(true);
            match server::api::delete_case(id).await {
                Ok(()) => {
                    navigator().push(Route::StaffDashboard {});
                }
                Err(e) => {
                    error_msg.set(Some(AppError::friendly_message(&e.to_string())));
                    deleting.set(false);
                    confirm_open.set(false);
                }
            }
        });
    };

    rsx! {
        Button {
            variant: ButtonVariant::Destructive,
            busy: deleting(),
            onclick: move |_| confirm_open.set(true),
            Icon::<LdTrash2> { icon: LdTrash2, width: 16, height: 16 }
            "Delete Case"
        }
        if let Some(err) = error_msg() {
            span { class: "delete-case-error", role: "alert", "{err}" }
        }

        AlertDialogRoot {
            open: confirm_open(),
            on_open_change: move |v| confirm_open.set(v),
            AlertDialogContent {
                AlertDialogTitle { "Delete case #{case_number}?" }
                AlertDialogDescription {
                    "The case and its documents will be removed. This cannot be undone."
                }
                AlertDialogActions {
                    AlertDialogCancel { "Cancel" }
                    AlertDialogAction {
                        on_click: handle_delete,
                        if deleting() { "Deleting..." } else { "Delete" }
                    }
                }
            }
        }
    }
}
