use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdFileText;
use dioxus_free_icons::Icon;
use shared_types::{format_created_on, AppError};
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, Skeleton};

/// Read-only list of the documents filed on a case.
#[component]
pub fn CaseDocuments(case_id: String, case_number: String, is_staff: bool) -> Element {
    let documents = use_resource(use_reactive!(|(case_id, is_staff)| async move {
        if !is_staff {
            return Ok(Vec::new());
        }
        server::api::list_case_documents(case_id).await
    }));

    rsx! {
        Card { class: "case-documents",
            CardHeader {
                CardTitle { "Documents" }
                CardDescription { "Files on case #{case_number}" }
            }
            CardContent {
                match &*documents.read() {
                    None => rsx! {
                        Skeleton { lines: 2 }
                    },
                    Some(Err(e)) => {
                        let message = AppError::friendly_message(&e.to_string());
                        rsx! { p { class: "case-documents-error", "{message}" } }
                    }
                    Some(Ok(docs)) if docs.is_empty() => rsx! {
                        p { class: "case-documents-empty", "No documents uploaded yet." }
                    },
                    Some(Ok(docs)) => rsx! {
                        ul { class: "case-documents-list",
                            for doc in docs.iter() {
                                li { key: "{doc.id}", class: "case-documents-item",
                                    Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 }
                                    span { class: "case-documents-name", "{doc.file_name}" }
                                    span { class: "case-documents-date", "{format_created_on(&doc.uploaded_at)}" }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}
