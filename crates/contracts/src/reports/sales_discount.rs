use serde::{Deserialize, Serialize};

/// One salesperson row from `/api/reports/sales-discount`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountSalesRecord {
    pub sales_id: i64,
    pub sales_name: String,
    pub metrics: DiscountSalesMetrics,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountSalesMetrics {
    pub total_commission: f64,
    pub total_discount: f64,
    /// Percentage already computed by the backend for this salesperson.
    pub discount_percentage: f64,
    pub order_count: f64,
    pub net_commission: f64,
}
