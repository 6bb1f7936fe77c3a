pub mod calc;
pub mod ui;
