pub mod error;

pub mod case;
pub mod case_detail;
pub mod config;
pub mod document;
pub mod user;

pub use error::*;

pub use case::*;
pub use case_detail::*;
pub use config::*;
pub use document::*;
pub use user::*;

