pub mod filter;
pub mod options;
pub mod order_discount;
pub mod order_external;
pub mod sales_discount;
pub mod supplier;
