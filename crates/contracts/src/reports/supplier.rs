use serde::{Deserialize, Serialize};

/// One supplier row from `/api/reports/supplier-performance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierRecord {
    pub supplier_id: i64,
    pub supplier_name_th: String,
    pub supplier_name_en: String,
    pub metrics: SupplierMetrics,
}

/// Backend-computed commission figures per supplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierMetrics {
    /// Gross commission.
    pub total_commission: f64,
    /// Commission net of discounts.
    pub total_net_commission: f64,
    /// Travellers counted for this supplier.
    pub total_pax: f64,
    pub avg_commission_per_pax: f64,
    pub avg_net_commission_per_pax: f64,
}
