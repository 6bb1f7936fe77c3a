use contracts::reports::order_external::OrderExternalRecord;

use crate::shared::date_utils::thai_date;
use crate::shared::export::{quoted, CsvReport};
use crate::shared::number_format::round_amount;

/// Headline totals over the fetched backdated-order list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderExternalSummary {
    pub total_orders: usize,
    pub total_net_amount: f64,
    pub total_commission: f64,
    pub total_discount: f64,
}

impl OrderExternalSummary {
    pub fn fold(records: &[OrderExternalRecord]) -> Self {
        let mut summary = OrderExternalSummary::default();
        for record in records {
            summary.total_orders += 1;
            summary.total_net_amount += record.net_amount;
            summary.total_commission += record.supplier_commission;
            summary.total_discount += record.discount;
        }
        summary
    }
}

impl CsvReport for OrderExternalRecord {
    fn headers() -> Vec<&'static str> {
        vec![
            "รหัส Order",
            "วันที่สร้าง Order",
            "ชื่อลูกค้า",
            "ยอดสุทธิ (฿)",
            "ค่าคอมมิชชั่น (฿)",
            "ส่วนลด (฿)",
            "วันที่ชำระเงิน",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            quoted(&self.order_code),
            quoted(&thai_date(&self.created_at)),
            quoted(&self.customer_name),
            round_amount(self.net_amount).to_string(),
            round_amount(self.supplier_commission).to_string(),
            round_amount(self.discount).to_string(),
            quoted(&thai_date(&self.paid_at)),
        ]
    }
}

/// Trailing CSV summary row; the order count rides in the label cell.
pub fn csv_summary_row(records: &[OrderExternalRecord]) -> Vec<String> {
    let summary = OrderExternalSummary::fold(records);
    vec![
        quoted(&format!("จำนวน {} Orders", summary.total_orders)),
        quoted(""),
        quoted(""),
        round_amount(summary.total_net_amount).to_string(),
        round_amount(summary.total_commission).to_string(),
        round_amount(summary.total_discount).to_string(),
        quoted(""),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str, net: f64, commission: f64, discount: f64) -> OrderExternalRecord {
        OrderExternalRecord {
            order_code: code.to_string(),
            created_at: "2024-05-02T09:00:00Z".to_string(),
            customer_name: "คุณสมหญิง".to_string(),
            net_amount: net,
            supplier_commission: commission,
            discount,
            first_installment_paid: true,
            paid_at: "2024-06-15T09:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_fold_sums_every_metric() {
        let records = vec![
            record("TW-1", 10_000.0, 900.0, 100.0),
            record("TW-2", 25_000.0, 2_100.0, 0.0),
            record("TW-3", 5_000.5, 450.0, 49.5),
        ];
        let summary = OrderExternalSummary::fold(&records);
        assert_eq!(summary.total_orders, 3);
        assert!((summary.total_net_amount - 40_000.5).abs() < 1e-9);
        assert!((summary.total_commission - 3_450.0).abs() < 1e-9);
        assert!((summary.total_discount - 149.5).abs() < 1e-9);
    }

    #[test]
    fn test_fold_empty_is_all_zero() {
        let summary = OrderExternalSummary::fold(&[]);
        assert_eq!(summary, OrderExternalSummary::default());
    }

    #[test]
    fn test_csv_row_formats_dates_and_rounds_amounts() {
        let row = record("TW-42", 12_345.6, 678.4, 5.5).to_csv_row();
        assert_eq!(
            row,
            vec![
                "\"TW-42\"",
                "\"2/5/2567\"",
                "\"คุณสมหญิง\"",
                "12346",
                "678",
                "6",
                "\"15/6/2567\"",
            ]
        );
    }

    #[test]
    fn test_csv_row_keeps_missing_paid_date_empty() {
        let mut unpaid = record("TW-7", 1_000.0, 100.0, 0.0);
        unpaid.first_installment_paid = false;
        unpaid.paid_at = String::new();
        assert_eq!(unpaid.to_csv_row()[6], "\"\"");
    }

    #[test]
    fn test_csv_summary_row_counts_and_totals() {
        let records = vec![
            record("TW-1", 10_000.0, 900.0, 100.0),
            record("TW-2", 20_000.0, 1_100.0, 50.0),
        ];
        let row = csv_summary_row(&records);
        assert_eq!(row[0], "\"จำนวน 2 Orders\"");
        assert_eq!(row[3], "30000");
        assert_eq!(row[4], "2000");
        assert_eq!(row[5], "150");
        assert_eq!(row[6], "\"\"");
        assert_eq!(row.len(), OrderExternalRecord::headers().len());
    }
}
