use serde::{Deserialize, Serialize};

/// One order row from `/api/reports/order-has-discount`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDiscountRecord {
    pub order_info: OrderInfo,
    pub customer_info: CustomerInfo,
    pub payment_details: PaymentDetails,
    pub sales_crm: SalesCrm,
    pub financial_metrics: OrderFinancials,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderInfo {
    pub order_code: String,
    /// ISO date the order was created.
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub customer_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub total_installments: i32,
    pub paid_installments: i32,
    /// Per-installment status string, e.g. "paid,pending,pending".
    pub status_list: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesCrm {
    pub seller_name: String,
    pub crm_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderFinancials {
    pub net_amount: f64,
    pub supplier_commission: f64,
    pub discount: f64,
    pub discount_percent: f64,
}

impl OrderDiscountRecord {
    /// Whether the order carries a discount worth counting (at least 1 baht).
    pub fn has_discount(&self) -> bool {
        self.financial_metrics.discount >= 1.0
    }

    /// Whether no installment has been paid yet.
    pub fn is_unpaid(&self) -> bool {
        self.payment_details.paid_installments == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(discount: f64, paid_installments: i32) -> OrderDiscountRecord {
        OrderDiscountRecord {
            order_info: OrderInfo {
                order_code: "TW-1".to_string(),
                created_at: "2024-05-01".to_string(),
            },
            customer_info: CustomerInfo {
                customer_name: "คุณสมชาย".to_string(),
            },
            payment_details: PaymentDetails {
                total_installments: 3,
                paid_installments,
                status_list: "paid,pending,pending".to_string(),
            },
            sales_crm: SalesCrm {
                seller_name: "บอล".to_string(),
                crm_name: "แนน".to_string(),
            },
            financial_metrics: OrderFinancials {
                net_amount: 10_000.0,
                supplier_commission: 800.0,
                discount,
                discount_percent: 8.0,
            },
        }
    }

    #[test]
    fn test_discount_threshold_is_one_baht() {
        assert!(!record(0.0, 1).has_discount());
        assert!(!record(0.5, 1).has_discount());
        assert!(record(1.0, 1).has_discount());
        assert!(record(250.0, 1).has_discount());
    }

    #[test]
    fn test_unpaid_means_zero_paid_installments() {
        assert!(record(0.0, 0).is_unpaid());
        assert!(!record(0.0, 1).is_unpaid());
    }
}
