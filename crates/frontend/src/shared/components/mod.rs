pub mod bar_chart;
pub mod data_table;
pub mod export_button;
pub mod page_header;
pub mod pagination;
pub mod status;
pub mod summary_card;
