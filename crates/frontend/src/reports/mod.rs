pub mod filter_panel;
pub mod options;
pub mod order_discount;
pub mod order_external;
pub mod request_discount;
pub mod sales_discount;
pub mod supplier;
