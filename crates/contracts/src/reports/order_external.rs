use serde::{Deserialize, Serialize};

/// One backdated-order row from `/api/reports/order-external-summary`.
/// Flat shape, unlike the other report kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderExternalRecord {
    pub order_code: String,
    pub created_at: String,
    pub customer_name: String,
    pub net_amount: f64,
    pub supplier_commission: f64,
    pub discount: f64,
    pub first_installment_paid: bool,
    /// ISO date of payment, empty when unpaid.
    #[serde(default)]
    pub paid_at: String,
}
