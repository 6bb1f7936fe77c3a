pub mod aggregate;
pub mod api;
pub mod ui;
