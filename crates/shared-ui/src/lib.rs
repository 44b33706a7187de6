//! Presentational components shared by the staff pages.

pub mod components;

pub use components::*;
