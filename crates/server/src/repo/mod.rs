pub mod case;
pub mod document;
pub mod refresh_token;
pub mod user;
