pub mod case_detail;
pub mod login;
pub mod not_found;
pub mod staff_dashboard;

use crate::auth::{sign_out, use_auth};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBriefcase, LdLogOut};
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant};

use case_detail::CaseDetailPage;
use login::Login;
use not_found::NotFound;
use staff_dashboard::StaffDashboard;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[layout(StaffLayout)]
    #[route("/staff-dashboard")]
    StaffDashboard {},
    #[route("/staff-dashboard/case/:id")]
    CaseDetail { id: String },
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn Home() -> Element {
    rsx! { Login {} }
}

#[component]
fn CaseDetail(id: String) -> Element {
    rsx! { CaseDetailPage { id: id } }
}

/// Top bar shared by the staff pages.
#[component]
fn StaffLayout() -> Element {
    let auth = use_auth();
    let name = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.display_name.clone());

    rsx! {
        div { class: "staff-shell",
            header { class: "staff-topbar",
                Link { to: Route::StaffDashboard {}, class: "staff-brand",
                    Icon::<LdBriefcase> { icon: LdBriefcase, width: 20, height: 20 }
                    span { "Casedesk" }
                }
                div { class: "staff-topbar-user",
                    if let Some(name) = name {
                        span { class: "staff-topbar-name", "{name}" }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            spawn(sign_out(auth));
                        },
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Sign out"
                    }
                }
            }
            main { class: "staff-main",
                Outlet::<Route> {}
            }
        }
    }
}
