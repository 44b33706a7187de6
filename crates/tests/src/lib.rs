#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_tests;


#[cfg(test)]
mod case_delete_tests;

#[cfg(test)]
mod case_documents_tests;

#[cfg(test)]
mod health_tests;
