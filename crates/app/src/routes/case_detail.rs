use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowLeft, LdBriefcase, LdClock, LdFileText, LdUser};
use dioxus_free_icons::Icon;
use shared_types::{AppError, CaseDetailOutcome, CaseDetailView};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, DetailGrid, DetailItem,
    PageActions, PageHeader, PageSubtitle, PageTitle, Skeleton,
};

use crate::auth::use_auth;
use crate::components::{CaseDocuments, CaseStatusBadge, DeleteCaseButton};
use crate::routes::Route;

/// Staff view of one case.
///
/// Loads through `get_case_detail` and renders purely from the outcome.
/// The load restarts only when the route id changes.
#[component]
pub fn CaseDetailPage(id: String) -> Element {
    let mut auth = use_auth();

    let outcome = use_resource(use_reactive!(|(id,)| async move {
        server::api::get_case_detail(id).await
    }));

    // Sessions that may not see the case leave for the sign-in page.
    use_effect(move || {
        if let Some(Ok(
            CaseDetailOutcome::Unauthenticated | CaseDetailOutcome::Unauthorized,
        )) = &*outcome.read()
        {
            auth.clear_auth();
            navigator().push(Route::Home {});
        }
    });

    let load = match &*outcome.read() {
        None => CaseLoad::Loading,
        Some(Ok(o)) => CaseLoad::Ready(o.clone()),
        Some(Err(e)) => CaseLoad::Failed(AppError::friendly_message(&e.to_string())),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./case_detail.css") }

        div { class: "case-detail",
            CaseDetailBody { load }
        }
    }
}

/// Where a case-detail load stands, as the page sees it.
#[derive(Debug, Clone, PartialEq)]
pub enum CaseLoad {
    Loading,
    Ready(CaseDetailOutcome),
    /// Friendly message for a failed load.
    Failed(String),
}

/// Page body as a pure function of the load state.
#[component]
pub fn CaseDetailBody(load: CaseLoad) -> Element {
    match load {
        CaseLoad::Loading => rsx! {
            StatusPanel { title: "Loading case details...",
                Skeleton { lines: 3 }
            }
        },
        CaseLoad::Ready(CaseDetailOutcome::Loaded(detail)) => rsx! {
            LoadedCase { view: detail.view() }
        },
        CaseLoad::Ready(CaseDetailOutcome::NotFound) => rsx! {
            StatusPanel { title: "Case not found",
                p { "No case exists with this id." }
                BackToDashboard {}
            }
        },
        CaseLoad::Ready(CaseDetailOutcome::Unauthenticated | CaseDetailOutcome::Unauthorized) => rsx! {
            StatusPanel { title: "Redirecting..." }
        },
        CaseLoad::Failed(message) => rsx! {
            StatusPanel { title: "Error",
                p { class: "case-detail-error", role: "alert", "{message}" }
                BackToDashboard {}
            }
        },
    }
}

#[component]
fn StatusPanel(title: &'static str, children: Element) -> Element {
    rsx! {
        Card { class: "case-detail-panel",
            CardHeader {
                CardTitle { "{title}" }
            }
            CardContent { {children} }
        }
    }
}

#[component]
fn BackToDashboard() -> Element {
    rsx! {
        Button {
            variant: ButtonVariant::Secondary,
            onclick: move |_| {
                navigator().push(Route::StaffDashboard {});
            },
            Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 16, height: 16 }
            "Back to Dashboard"
        }
    }
}

#[component]
fn LoadedCase(view: CaseDetailView) -> Element {
    rsx! {
        div { class: "case-detail-toolbar",
            BackToDashboard {}
            if view.can_delete {
                DeleteCaseButton {
                    case_id: view.case_id.clone(),
                    case_number: view.case_number.clone(),
                }
            }
        }

        PageHeader {
            div {
                PageTitle { "Case #{view.case_number}" }
                PageSubtitle { "{view.case_type}" }
            }
            PageActions {
                CaseStatusBadge { badge: view.status.clone() }
            }
        }

        Card {
            CardContent {
                DetailGrid {
                    DetailItem {
                        label: "Client",
                        value: view.client_name.clone(),
                        icon: rsx! { Icon::<LdUser> { icon: LdUser, width: 16, height: 16 } },
                    }
                    DetailItem {
                        label: "Case Type",
                        value: view.case_type.clone(),
                        icon: rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 16, height: 16 } },
                    }
                    DetailItem {
                        label: "Created On",
                        value: view.created_on.clone(),
                        icon: rsx! { Icon::<LdClock> { icon: LdClock, width: 16, height: 16 } },
                    }
                    DetailItem {
                        label: "Status",
                        icon: rsx! { Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 } },
                        CaseStatusBadge { badge: view.status.clone() }
                    }
                }
            }
        }

        CaseDocuments {
            case_id: view.case_id.clone(),
            case_number: view.case_number.clone(),
            is_staff: view.is_staff,
        }
    }
}
