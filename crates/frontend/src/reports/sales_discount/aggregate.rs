//! Derived data for the discount sales view: headline totals, the two
//! top-seller charts, column sorting and the CSV encoding.

use std::cmp::Ordering;

use contracts::reports::sales_discount::DiscountSalesRecord;

use crate::shared::components::bar_chart::{truncate_name, ChartBar, ChartRow};
use crate::shared::export::{quoted, CsvReport};
use crate::shared::list_utils::Sortable;
use crate::shared::number_format::{format_currency, format_percent, round_amount};

/// How many salespeople the discount-amount chart shows.
const CHART_TOP_N: usize = 10;
/// How many salespeople the percentage chart shows.
const PERCENT_CHART_TOP_N: usize = 8;

/// Headline totals across the current record list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscountSalesTotals {
    pub total_commission: f64,
    pub total_discount: f64,
    pub net_commission: f64,
    pub order_count: f64,
    pub avg_discount_percentage: f64,
}

impl DiscountSalesTotals {
    /// Single fold over the records. The percentage is the arithmetic mean
    /// of each salesperson's own backend-computed percentage, not a ratio
    /// of the summed amounts; an empty list yields 0.
    pub fn fold(records: &[DiscountSalesRecord]) -> Self {
        let mut totals = Self::default();
        let mut percentage_sum = 0.0;
        for record in records {
            totals.total_commission += record.metrics.total_commission;
            totals.total_discount += record.metrics.total_discount;
            totals.net_commission += record.metrics.net_commission;
            totals.order_count += record.metrics.order_count;
            percentage_sum += record.metrics.discount_percentage;
        }
        if !records.is_empty() {
            totals.avg_discount_percentage = percentage_sum / records.len() as f64;
        }
        totals
    }
}

impl Sortable for DiscountSalesRecord {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        let (a, b) = match field {
            "total_commission" => (
                self.metrics.total_commission,
                other.metrics.total_commission,
            ),
            "total_discount" => (self.metrics.total_discount, other.metrics.total_discount),
            "discount_percentage" => (
                self.metrics.discount_percentage,
                other.metrics.discount_percentage,
            ),
            "order_count" => (self.metrics.order_count, other.metrics.order_count),
            "net_commission" => (self.metrics.net_commission, other.metrics.net_commission),
            _ => return Ordering::Equal,
        };
        a.partial_cmp(&b).unwrap_or(Ordering::Equal)
    }
}

/// Top salespeople by total discount handed out, biggest first.
pub fn top_by_discount(records: &[DiscountSalesRecord]) -> Vec<ChartRow> {
    let mut ranked: Vec<&DiscountSalesRecord> = records.iter().collect();
    ranked.sort_by(|a, b| {
        b.metrics
            .total_discount
            .partial_cmp(&a.metrics.total_discount)
            .unwrap_or(Ordering::Equal)
    });
    ranked
        .into_iter()
        .take(CHART_TOP_N)
        .map(|record| ChartRow {
            name: truncate_name(&record.sales_name),
            title: record.sales_name.clone(),
            bars: vec![
                ChartBar {
                    label: format!(
                        "ส่วนลด: ฿{}",
                        format_currency(record.metrics.total_discount)
                    ),
                    value: record.metrics.total_discount,
                    color: "#ef4444",
                },
                ChartBar {
                    label: format!(
                        "คอมสุทธิ: ฿{}",
                        format_currency(record.metrics.net_commission)
                    ),
                    value: record.metrics.net_commission,
                    color: "#10b981",
                },
            ],
        })
        .collect()
}

/// Top salespeople by their backend-computed discount percentage. Ranked
/// independently of [`top_by_discount`]; a big spender and a deep
/// discounter are different people.
pub fn top_by_percentage(records: &[DiscountSalesRecord]) -> Vec<ChartRow> {
    let mut ranked: Vec<&DiscountSalesRecord> = records.iter().collect();
    ranked.sort_by(|a, b| {
        b.metrics
            .discount_percentage
            .partial_cmp(&a.metrics.discount_percentage)
            .unwrap_or(Ordering::Equal)
    });
    ranked
        .into_iter()
        .take(PERCENT_CHART_TOP_N)
        .map(|record| ChartRow {
            name: truncate_name(&record.sales_name),
            title: record.sales_name.clone(),
            bars: vec![ChartBar {
                label: format!(
                    "% ส่วนลด: {}",
                    format_percent(record.metrics.discount_percentage)
                ),
                value: record.metrics.discount_percentage,
                color: "#8b5cf6",
            }],
        })
        .collect()
}

impl CsvReport for DiscountSalesRecord {
    fn headers() -> Vec<&'static str> {
        vec![
            "Sales Name",
            "Total Commission",
            "Total Discount",
            "Discount %",
            "Order Count",
            "Net Commission",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            quoted(&self.sales_name),
            round_amount(self.metrics.total_commission).to_string(),
            round_amount(self.metrics.total_discount).to_string(),
            round_amount(self.metrics.discount_percentage).to_string(),
            round_amount(self.metrics.order_count).to_string(),
            round_amount(self.metrics.net_commission).to_string(),
        ]
    }
}

/// Trailing CSV summary row matching the header layout.
pub fn csv_summary_row(records: &[DiscountSalesRecord]) -> Vec<String> {
    let totals = DiscountSalesTotals::fold(records);
    vec![
        quoted(&format!("Total ({} sales)", records.len())),
        round_amount(totals.total_commission).to_string(),
        round_amount(totals.total_discount).to_string(),
        round_amount(totals.avg_discount_percentage).to_string(),
        round_amount(totals.order_count).to_string(),
        round_amount(totals.net_commission).to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::sort_list;
    use contracts::reports::sales_discount::DiscountSalesMetrics;

    fn record(
        name: &str,
        commission: f64,
        discount: f64,
        percentage: f64,
        orders: f64,
    ) -> DiscountSalesRecord {
        DiscountSalesRecord {
            sales_id: 1,
            sales_name: name.to_string(),
            metrics: DiscountSalesMetrics {
                total_commission: commission,
                total_discount: discount,
                discount_percentage: percentage,
                order_count: orders,
                net_commission: commission - discount,
            },
        }
    }

    #[test]
    fn test_fold_sums_and_percentage_mean() {
        let records = vec![
            record("A", 1000.0, 100.0, 10.0, 5.0),
            record("B", 2000.0, 300.0, 20.0, 7.0),
        ];
        let totals = DiscountSalesTotals::fold(&records);
        assert_eq!(totals.total_commission, 3000.0);
        assert_eq!(totals.total_discount, 400.0);
        assert_eq!(totals.net_commission, 2600.0);
        assert_eq!(totals.order_count, 12.0);
        // Mean of the per-record percentages, not 400/3000.
        assert_eq!(totals.avg_discount_percentage, 15.0);
    }

    #[test]
    fn test_fold_is_order_independent() {
        let forward = vec![
            record("A", 1000.0, 100.0, 10.0, 5.0),
            record("B", 2000.0, 300.0, 20.0, 7.0),
            record("C", 500.0, 50.0, 12.0, 2.0),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();
        assert_eq!(
            DiscountSalesTotals::fold(&forward),
            DiscountSalesTotals::fold(&reversed)
        );
    }

    #[test]
    fn test_fold_empty_yields_zero_percentage() {
        let totals = DiscountSalesTotals::fold(&[]);
        assert_eq!(totals.avg_discount_percentage, 0.0);
        assert_eq!(totals.total_discount, 0.0);
    }

    #[test]
    fn test_sort_by_each_metric_field() {
        let mut records = vec![
            record("A", 100.0, 30.0, 5.0, 1.0),
            record("B", 300.0, 10.0, 25.0, 3.0),
            record("C", 200.0, 20.0, 15.0, 2.0),
        ];
        sort_list(&mut records, "total_commission", false);
        assert_eq!(records[0].sales_name, "B");
        sort_list(&mut records, "total_discount", false);
        assert_eq!(records[0].sales_name, "A");
        sort_list(&mut records, "discount_percentage", true);
        assert_eq!(records[0].sales_name, "A");
        sort_list(&mut records, "order_count", false);
        assert_eq!(records[0].sales_name, "B");
    }

    #[test]
    fn test_top_by_discount_ranks_and_caps() {
        let records: Vec<DiscountSalesRecord> = (0..12)
            .map(|i| record(&format!("S{}", i), 1000.0, i as f64 * 10.0, 5.0, 1.0))
            .collect();
        let rows = top_by_discount(&records);
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].name, "S11");
        assert_eq!(rows[0].bars.len(), 2);
    }

    #[test]
    fn test_top_by_percentage_ranks_and_caps() {
        let records: Vec<DiscountSalesRecord> = (0..12)
            .map(|i| record(&format!("S{}", i), 1000.0, 100.0, i as f64, 1.0))
            .collect();
        let rows = top_by_percentage(&records);
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0].name, "S11");
        assert_eq!(rows[7].name, "S4");
    }

    #[test]
    fn test_charts_rank_independently() {
        let records = vec![
            record("big-spender", 10000.0, 5000.0, 2.0, 50.0),
            record("deep-discounter", 100.0, 40.0, 40.0, 1.0),
        ];
        let by_amount = top_by_discount(&records);
        let by_percent = top_by_percentage(&records);
        assert_eq!(by_amount[0].title, "big-spender");
        assert_eq!(by_percent[0].title, "deep-discounter");
    }

    #[test]
    fn test_chart_truncates_long_thai_names() {
        let records = vec![record(
            "นางสาวสมหญิงใจดีมีชื่อยาวมาก",
            1.0,
            1.0,
            1.0,
            1.0,
        )];
        let rows = top_by_discount(&records);
        assert!(rows[0].name.ends_with("..."));
        assert_eq!(rows[0].title, "นางสาวสมหญิงใจดีมีชื่อยาวมาก");
    }

    #[test]
    fn test_csv_row_rounds_to_integers() {
        let row = record("สมชาย", 1234.56, 78.4, 6.35, 9.0).to_csv_row();
        assert_eq!(
            row,
            vec!["\"สมชาย\"", "1235", "78", "6", "9", "1156"]
        );
        assert_eq!(row.len(), DiscountSalesRecord::headers().len());
    }

    #[test]
    fn test_csv_summary_row_uses_mean_percentage() {
        let records = vec![
            record("A", 1000.0, 100.0, 10.0, 5.0),
            record("B", 2000.0, 300.0, 20.0, 7.0),
        ];
        let summary = csv_summary_row(&records);
        assert_eq!(summary[0], "\"Total (2 sales)\"");
        assert_eq!(summary[1], "3000");
        assert_eq!(summary[2], "400");
        assert_eq!(summary[3], "15");
        assert_eq!(summary.len(), DiscountSalesRecord::headers().len());
    }
}
