//! The aggregation core of the order discount view: post-fetch list
//! filters, the order-level summary, per-seller rollups with a
//! discount-percent histogram, the two top-seller charts and the CSV
//! encoding.

use std::cmp::Ordering;
use std::collections::HashMap;

use contracts::reports::order_discount::OrderDiscountRecord;

use crate::shared::components::bar_chart::{truncate_name, ChartBar, ChartRow};
use crate::shared::date_utils::thai_date;
use crate::shared::export::{quoted, CsvReport};
use crate::shared::list_utils::Sortable;
use crate::shared::number_format::{format_currency, format_percent, round_amount};

/// How many sellers the discount-amount chart shows.
const CHART_TOP_N: usize = 10;
/// How many sellers the percentage chart shows.
const PERCENT_CHART_TOP_N: usize = 8;

/// Post-fetch list filters. They narrow the already-fetched snapshot and
/// never trigger a new request.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SecondaryFilters {
    /// Keep only orders with a discount of at least 1 baht.
    pub discount_only: bool,
    /// Keep only orders with no paid installment.
    pub unpaid_only: bool,
}

/// Apply the secondary filters to the fetched snapshot.
pub fn apply_secondary_filters(
    records: &[OrderDiscountRecord],
    filters: SecondaryFilters,
) -> Vec<OrderDiscountRecord> {
    records
        .iter()
        .filter(|record| !filters.discount_only || record.has_discount())
        .filter(|record| !filters.unpaid_only || record.is_unpaid())
        .cloned()
        .collect()
}

/// Headline totals over the secondary-filtered order list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDiscountSummary {
    pub total_orders: usize,
    pub total_net_amount: f64,
    pub total_commission: f64,
    pub total_discount: f64,
    /// Mean of `discount_percent` over discounted orders only; 0 when none.
    pub avg_discount_percent: f64,
}

impl OrderDiscountSummary {
    /// Single fold over the given list. The percent average deliberately
    /// skips non-discounted orders so they cannot dilute it.
    pub fn fold(records: &[OrderDiscountRecord]) -> Self {
        let mut summary = Self::default();
        let mut percent_sum = 0.0;
        let mut discounted = 0usize;
        for record in records {
            summary.total_orders += 1;
            summary.total_net_amount += record.financial_metrics.net_amount;
            summary.total_commission += record.financial_metrics.supplier_commission;
            summary.total_discount += record.financial_metrics.discount;
            if record.has_discount() {
                discounted += 1;
                percent_sum += record.financial_metrics.discount_percent;
            }
        }
        if discounted > 0 {
            summary.avg_discount_percent = percent_sum / discounted as f64;
        }
        summary
    }
}

/// Per-seller rollup over the FULL fetched snapshot, before any secondary
/// filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SellerSummary {
    pub seller_name: String,
    /// Orders with a discount of at least 1 baht.
    pub order_count: usize,
    pub total_orders: usize,
    pub total_discount: f64,
    pub total_net_amount: f64,
    /// Mean of `discount_percent` over the discounted orders only.
    pub avg_discount_percent: f64,
    /// Histogram of `discount_percent`: exactly 0.
    pub no_discount: usize,
    /// Histogram of `discount_percent`: (0, 15].
    pub discount_1_15: usize,
    /// Histogram of `discount_percent`: (15, 20].
    pub discount_15_20: usize,
    /// Histogram of `discount_percent`: over 20.
    pub discount_over_20: usize,
}

#[derive(Default)]
struct SellerAccumulator {
    order_count: usize,
    total_orders: usize,
    total_discount: f64,
    total_net_amount: f64,
    percent_sum: f64,
    no_discount: usize,
    discount_1_15: usize,
    discount_15_20: usize,
    discount_over_20: usize,
}

impl SellerAccumulator {
    fn push(&mut self, record: &OrderDiscountRecord) {
        self.total_orders += 1;
        self.total_net_amount += record.financial_metrics.net_amount;
        self.total_discount += record.financial_metrics.discount;
        let percent = record.financial_metrics.discount_percent;
        if record.has_discount() {
            self.order_count += 1;
            self.percent_sum += percent;
        }
        // The chain is exhaustive, so the four buckets always sum to
        // total_orders.
        if percent == 0.0 {
            self.no_discount += 1;
        } else if percent <= 15.0 {
            self.discount_1_15 += 1;
        } else if percent <= 20.0 {
            self.discount_15_20 += 1;
        } else {
            self.discount_over_20 += 1;
        }
    }

    fn finish(self, seller_name: String) -> SellerSummary {
        let avg_discount_percent = if self.order_count > 0 {
            self.percent_sum / self.order_count as f64
        } else {
            0.0
        };
        SellerSummary {
            seller_name,
            order_count: self.order_count,
            total_orders: self.total_orders,
            total_discount: self.total_discount,
            total_net_amount: self.total_net_amount,
            avg_discount_percent,
            no_discount: self.no_discount,
            discount_1_15: self.discount_1_15,
            discount_15_20: self.discount_15_20,
            discount_over_20: self.discount_over_20,
        }
    }
}

/// Group orders by seller name. Output is name-sorted for deterministic
/// rendering; rank-order views sort it again by their own key.
pub fn seller_summaries(records: &[OrderDiscountRecord]) -> Vec<SellerSummary> {
    let mut groups: HashMap<String, SellerAccumulator> = HashMap::new();
    for record in records {
        groups
            .entry(record.sales_crm.seller_name.clone())
            .or_default()
            .push(record);
    }

    let mut names: Vec<String> = groups.keys().cloned().collect();
    names.sort();
    names
        .into_iter()
        .filter_map(|name| {
            groups
                .remove(&name)
                .map(|accumulator| accumulator.finish(name))
        })
        .collect()
}

/// Sellers ranked by total discount handed out, biggest first.
pub fn top_sellers_by_discount(summaries: &[SellerSummary]) -> Vec<ChartRow> {
    let mut ranked: Vec<&SellerSummary> = summaries.iter().collect();
    ranked.sort_by(|a, b| {
        b.total_discount
            .partial_cmp(&a.total_discount)
            .unwrap_or(Ordering::Equal)
    });
    ranked
        .into_iter()
        .take(CHART_TOP_N)
        .map(|summary| ChartRow {
            name: truncate_name(&summary.seller_name),
            title: format!(
                "{} ({}/{} orders มีส่วนลด)",
                summary.seller_name, summary.order_count, summary.total_orders
            ),
            bars: vec![ChartBar {
                label: format!("ส่วนลด: ฿{}", format_currency(summary.total_discount)),
                value: summary.total_discount,
                color: "#ef4444",
            }],
        })
        .collect()
}

/// Sellers ranked by their average discount percent, biggest first.
pub fn top_sellers_by_avg_percent(summaries: &[SellerSummary]) -> Vec<ChartRow> {
    let mut ranked: Vec<&SellerSummary> = summaries.iter().collect();
    ranked.sort_by(|a, b| {
        b.avg_discount_percent
            .partial_cmp(&a.avg_discount_percent)
            .unwrap_or(Ordering::Equal)
    });
    ranked
        .into_iter()
        .take(PERCENT_CHART_TOP_N)
        .map(|summary| ChartRow {
            name: truncate_name(&summary.seller_name),
            title: format!(
                "{} ({}/{} orders มีส่วนลด)",
                summary.seller_name, summary.order_count, summary.total_orders
            ),
            bars: vec![ChartBar {
                label: format!(
                    "% เฉลี่ย: {}",
                    format_percent(summary.avg_discount_percent)
                ),
                value: summary.avg_discount_percent,
                color: "#8b5cf6",
            }],
        })
        .collect()
}

impl Sortable for OrderDiscountRecord {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        let (a, b) = match field {
            "net_amount" => (
                self.financial_metrics.net_amount,
                other.financial_metrics.net_amount,
            ),
            "supplier_commission" => (
                self.financial_metrics.supplier_commission,
                other.financial_metrics.supplier_commission,
            ),
            "discount" => (
                self.financial_metrics.discount,
                other.financial_metrics.discount,
            ),
            "discount_percent" => (
                self.financial_metrics.discount_percent,
                other.financial_metrics.discount_percent,
            ),
            _ => return Ordering::Equal,
        };
        a.partial_cmp(&b).unwrap_or(Ordering::Equal)
    }
}

impl CsvReport for OrderDiscountRecord {
    fn headers() -> Vec<&'static str> {
        vec![
            "รหัส Order",
            "วันที่สร้าง",
            "ชื่อลูกค้า",
            "ผู้ขาย",
            "CRM",
            "งวดชำระ",
            "สถานะ",
            "ยอดสุทธิ",
            "ค่าคอมมิชชั่น",
            "ส่วนลด",
            "% ส่วนลด",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            quoted(&self.order_info.order_code),
            quoted(&thai_date(&self.order_info.created_at)),
            quoted(&self.customer_info.customer_name),
            quoted(&self.sales_crm.seller_name),
            quoted(&self.sales_crm.crm_name),
            quoted(&format!(
                "{}/{}",
                self.payment_details.paid_installments, self.payment_details.total_installments
            )),
            quoted(&self.payment_details.status_list),
            round_amount(self.financial_metrics.net_amount).to_string(),
            round_amount(self.financial_metrics.supplier_commission).to_string(),
            round_amount(self.financial_metrics.discount).to_string(),
            round_amount(self.financial_metrics.discount_percent).to_string(),
        ]
    }
}

/// Trailing CSV summary row over the exported (secondary-filtered) list.
pub fn csv_summary_row(records: &[OrderDiscountRecord]) -> Vec<String> {
    let summary = OrderDiscountSummary::fold(records);
    vec![
        quoted(&format!("รวม ({} Orders)", summary.total_orders)),
        quoted(""),
        quoted(""),
        quoted(""),
        quoted(""),
        quoted(""),
        quoted(""),
        round_amount(summary.total_net_amount).to_string(),
        round_amount(summary.total_commission).to_string(),
        round_amount(summary.total_discount).to_string(),
        round_amount(summary.avg_discount_percent).to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::reports::order_discount::{
        CustomerInfo, OrderFinancials, OrderInfo, PaymentDetails, SalesCrm,
    };

    fn order(
        seller: &str,
        net_amount: f64,
        discount: f64,
        discount_percent: f64,
        paid_installments: i32,
    ) -> OrderDiscountRecord {
        OrderDiscountRecord {
            order_info: OrderInfo {
                order_code: "TW-0001".to_string(),
                created_at: "2024-05-15".to_string(),
            },
            customer_info: CustomerInfo {
                customer_name: "คุณลูกค้า".to_string(),
            },
            payment_details: PaymentDetails {
                total_installments: 3,
                paid_installments,
                status_list: "paid,pending,pending".to_string(),
            },
            sales_crm: SalesCrm {
                seller_name: seller.to_string(),
                crm_name: "ซีอาร์เอ็ม".to_string(),
            },
            financial_metrics: OrderFinancials {
                net_amount,
                supplier_commission: net_amount * 0.08,
                discount,
                discount_percent,
            },
        }
    }

    #[test]
    fn test_secondary_filters_compose() {
        let records = vec![
            order("A", 1000.0, 100.0, 10.0, 0),
            order("A", 1000.0, 0.0, 0.0, 0),
            order("A", 1000.0, 100.0, 10.0, 2),
            order("A", 1000.0, 0.0, 0.0, 2),
        ];
        let all = apply_secondary_filters(&records, SecondaryFilters::default());
        assert_eq!(all.len(), 4);

        let discount_only = apply_secondary_filters(
            &records,
            SecondaryFilters {
                discount_only: true,
                unpaid_only: false,
            },
        );
        assert_eq!(discount_only.len(), 2);

        let unpaid_only = apply_secondary_filters(
            &records,
            SecondaryFilters {
                discount_only: false,
                unpaid_only: true,
            },
        );
        assert_eq!(unpaid_only.len(), 2);

        let both = apply_secondary_filters(
            &records,
            SecondaryFilters {
                discount_only: true,
                unpaid_only: true,
            },
        );
        assert_eq!(both.len(), 1);
    }

    #[test]
    fn test_summary_fold_sums_and_average() {
        let records = vec![
            order("A", 10_000.0, 500.0, 5.0, 1),
            order("A", 20_000.0, 3_000.0, 15.0, 1),
            order("B", 5_000.0, 0.0, 0.0, 1),
        ];
        let summary = OrderDiscountSummary::fold(&records);
        assert_eq!(summary.total_orders, 3);
        assert_eq!(summary.total_net_amount, 35_000.0);
        assert_eq!(summary.total_discount, 3_500.0);
        // Average over the two discounted orders only: (5 + 15) / 2.
        assert_eq!(summary.avg_discount_percent, 10.0);
    }

    #[test]
    fn test_summary_fold_empty_is_all_zero() {
        let summary = OrderDiscountSummary::fold(&[]);
        assert_eq!(summary.total_orders, 0);
        assert_eq!(summary.avg_discount_percent, 0.0);
    }

    #[test]
    fn test_summary_average_zero_when_nothing_discounted() {
        let records = vec![order("A", 1_000.0, 0.0, 0.0, 1)];
        assert_eq!(
            OrderDiscountSummary::fold(&records).avg_discount_percent,
            0.0
        );
    }

    #[test]
    fn test_seller_grouping_counts_and_average() {
        let records = vec![
            order("บอล", 10_000.0, 1_000.0, 10.0, 1),
            order("บอล", 10_000.0, 2_000.0, 20.0, 1),
            order("บอล", 10_000.0, 0.0, 0.0, 1),
            order("แนน", 5_000.0, 500.0, 10.0, 1),
        ];
        let summaries = seller_summaries(&records);
        assert_eq!(summaries.len(), 2);

        let ball = summaries
            .iter()
            .find(|s| s.seller_name == "บอล")
            .unwrap();
        assert_eq!(ball.total_orders, 3);
        assert_eq!(ball.order_count, 2);
        assert_eq!(ball.total_discount, 3_000.0);
        assert_eq!(ball.total_net_amount, 30_000.0);
        // Mean over the two discounted orders, the zero one cannot dilute.
        assert_eq!(ball.avg_discount_percent, 15.0);
    }

    #[test]
    fn test_histogram_bucket_edges() {
        let records = vec![
            order("A", 1_000.0, 0.0, 0.0, 1),
            order("A", 1_000.0, 10.0, 0.1, 1),
            order("A", 1_000.0, 150.0, 15.0, 1),
            order("A", 1_000.0, 160.0, 15.1, 1),
            order("A", 1_000.0, 200.0, 20.0, 1),
            order("A", 1_000.0, 210.0, 20.1, 1),
            order("A", 1_000.0, 990.0, 99.0, 1),
        ];
        let summaries = seller_summaries(&records);
        let a = &summaries[0];
        assert_eq!(a.no_discount, 1);
        assert_eq!(a.discount_1_15, 2);
        assert_eq!(a.discount_15_20, 2);
        assert_eq!(a.discount_over_20, 2);
    }

    #[test]
    fn test_histogram_buckets_sum_to_total_orders() {
        // Percent values straddling every bucket edge.
        let percents = [
            0.0, 0.0, 0.5, 1.0, 7.5, 14.99, 15.0, 15.01, 17.0, 20.0, 20.01, 35.0, 120.0,
        ];
        let records: Vec<OrderDiscountRecord> = percents
            .iter()
            .map(|p| order("A", 1_000.0, p * 10.0, *p, 1))
            .collect();
        for summary in seller_summaries(&records) {
            assert_eq!(
                summary.no_discount
                    + summary.discount_1_15
                    + summary.discount_15_20
                    + summary.discount_over_20,
                summary.total_orders
            );
        }
    }

    #[test]
    fn test_seller_summaries_are_name_sorted() {
        let records = vec![
            order("c", 1.0, 0.0, 0.0, 1),
            order("a", 1.0, 0.0, 0.0, 1),
            order("b", 1.0, 0.0, 0.0, 1),
        ];
        let names: Vec<String> = seller_summaries(&records)
            .into_iter()
            .map(|s| s.seller_name)
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_top_sellers_rank_independently() {
        let records = vec![
            order("มากเงิน", 100_000.0, 50_000.0, 2.0, 1),
            order("มากเปอร์เซ็นต์", 1_000.0, 400.0, 40.0, 1),
        ];
        let summaries = seller_summaries(&records);
        let by_amount = top_sellers_by_discount(&summaries);
        let by_percent = top_sellers_by_avg_percent(&summaries);
        assert_eq!(by_amount[0].name, "มากเงิน");
        assert_eq!(by_percent[0].name, "มากเปอร์เซ็นต์");
    }

    #[test]
    fn test_top_seller_charts_cap_their_length() {
        let records: Vec<OrderDiscountRecord> = (0..15)
            .map(|i| {
                order(
                    &format!("S{}", i),
                    1_000.0,
                    (i + 1) as f64 * 10.0,
                    (i + 1) as f64,
                    1,
                )
            })
            .collect();
        let summaries = seller_summaries(&records);
        assert_eq!(top_sellers_by_discount(&summaries).len(), 10);
        assert_eq!(top_sellers_by_avg_percent(&summaries).len(), 8);
    }

    #[test]
    fn test_csv_row_shape_and_rounding() {
        let row = order("บอล", 12_345.6, 678.9, 5.5, 2).to_csv_row();
        assert_eq!(row.len(), OrderDiscountRecord::headers().len());
        assert_eq!(row[0], "\"TW-0001\"");
        assert_eq!(row[1], "\"15/5/2567\"");
        assert_eq!(row[5], "\"2/3\"");
        assert_eq!(row[7], "12346");
        assert_eq!(row[9], "679");
        assert_eq!(row[10], "6");
    }

    #[test]
    fn test_csv_summary_row_totals() {
        let records = vec![
            order("A", 10_000.0, 500.0, 5.0, 1),
            order("B", 20_000.0, 1_500.0, 15.0, 1),
        ];
        let summary = csv_summary_row(&records);
        assert_eq!(summary.len(), OrderDiscountRecord::headers().len());
        assert_eq!(summary[0], "\"รวม (2 Orders)\"");
        assert_eq!(summary[7], "30000");
        assert_eq!(summary[9], "2000");
        assert_eq!(summary[10], "10");
    }
}
