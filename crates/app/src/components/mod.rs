mod case_documents;
mod delete_case_button;
mod status_badge;

pub use case_documents::CaseDocuments;
pub use delete_case_button::DeleteCaseButton;
pub use status_badge::CaseStatusBadge;
