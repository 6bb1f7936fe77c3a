//! Derived data for the supplier performance view: totals, the top-10
//! commission chart, column sorting and the CSV encoding.

use std::cmp::Ordering;

use contracts::reports::supplier::SupplierRecord;

use crate::shared::components::bar_chart::{truncate_name, ChartBar, ChartRow};
use crate::shared::export::{quoted, CsvReport};
use crate::shared::list_utils::Sortable;
use crate::shared::number_format::{format_currency, round_amount};

/// How many suppliers the chart shows.
const CHART_TOP_N: usize = 10;

/// Totals across the current filtered record list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupplierTotals {
    pub total_commission: f64,
    pub total_net_commission: f64,
    pub total_pax: f64,
    pub avg_commission_per_pax: f64,
    pub avg_net_commission_per_pax: f64,
}

impl SupplierTotals {
    /// Single fold over the records. Per-pax averages come from the summed
    /// figures; zero pax yields 0, never NaN.
    pub fn fold(records: &[SupplierRecord]) -> Self {
        let mut totals = Self::default();
        for record in records {
            totals.total_commission += record.metrics.total_commission;
            totals.total_net_commission += record.metrics.total_net_commission;
            totals.total_pax += record.metrics.total_pax;
        }
        if totals.total_pax > 0.0 {
            totals.avg_commission_per_pax = totals.total_commission / totals.total_pax;
            totals.avg_net_commission_per_pax = totals.total_net_commission / totals.total_pax;
        }
        totals
    }
}

impl Sortable for SupplierRecord {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        let (a, b) = match field {
            "total_commission" => (
                self.metrics.total_commission,
                other.metrics.total_commission,
            ),
            "total_net_commission" => (
                self.metrics.total_net_commission,
                other.metrics.total_net_commission,
            ),
            "total_pax" => (self.metrics.total_pax, other.metrics.total_pax),
            "avg_commission_per_pax" => (
                self.metrics.avg_commission_per_pax,
                other.metrics.avg_commission_per_pax,
            ),
            "avg_net_commission_per_pax" => (
                self.metrics.avg_net_commission_per_pax,
                other.metrics.avg_net_commission_per_pax,
            ),
            _ => return Ordering::Equal,
        };
        a.partial_cmp(&b).unwrap_or(Ordering::Equal)
    }
}

/// Top-10 chart rows in the records' current order, gross and net commission
/// side by side. Hovering shows "thai name (english name)".
pub fn chart_series(records: &[SupplierRecord]) -> Vec<ChartRow> {
    records
        .iter()
        .take(CHART_TOP_N)
        .map(|record| ChartRow {
            name: truncate_name(&record.supplier_name_th),
            title: format!(
                "{} ({})",
                record.supplier_name_th, record.supplier_name_en
            ),
            bars: vec![
                ChartBar {
                    label: format!(
                        "Total Comm: ฿{}",
                        format_currency(record.metrics.total_commission)
                    ),
                    value: record.metrics.total_commission,
                    color: "#3b82f6",
                },
                ChartBar {
                    label: format!(
                        "Net Comm: ฿{}",
                        format_currency(record.metrics.total_net_commission)
                    ),
                    value: record.metrics.total_net_commission,
                    color: "#10b981",
                },
            ],
        })
        .collect()
}

impl CsvReport for SupplierRecord {
    fn headers() -> Vec<&'static str> {
        vec![
            "Supplier Name (TH)",
            "Supplier Name (EN)",
            "Total Commission",
            "Net Commission",
            "Total PAX",
            "Avg Commission Per PAX",
            "Avg Net Commission Per PAX",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            quoted(&self.supplier_name_th),
            quoted(&self.supplier_name_en),
            round_amount(self.metrics.total_commission).to_string(),
            round_amount(self.metrics.total_net_commission).to_string(),
            round_amount(self.metrics.total_pax).to_string(),
            round_amount(self.metrics.avg_commission_per_pax).to_string(),
            round_amount(self.metrics.avg_net_commission_per_pax).to_string(),
        ]
    }
}

/// Trailing CSV summary row, labelled in its first cell.
pub fn csv_summary_row(records: &[SupplierRecord]) -> Vec<String> {
    let totals = SupplierTotals::fold(records);
    vec![
        quoted(&format!("Total ({} suppliers)", records.len())),
        quoted(""),
        round_amount(totals.total_commission).to_string(),
        round_amount(totals.total_net_commission).to_string(),
        round_amount(totals.total_pax).to_string(),
        round_amount(totals.avg_commission_per_pax).to_string(),
        round_amount(totals.avg_net_commission_per_pax).to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::reports::supplier::SupplierMetrics;

    fn record(name: &str, commission: f64, net: f64, pax: f64) -> SupplierRecord {
        SupplierRecord {
            supplier_id: 1,
            supplier_name_th: name.to_string(),
            supplier_name_en: format!("{} EN", name),
            metrics: SupplierMetrics {
                total_commission: commission,
                total_net_commission: net,
                total_pax: pax,
                avg_commission_per_pax: if pax > 0.0 { commission / pax } else { 0.0 },
                avg_net_commission_per_pax: if pax > 0.0 { net / pax } else { 0.0 },
            },
        }
    }

    #[test]
    fn test_fold_sums_each_metric() {
        let records = vec![
            record("A", 100.0, 90.0, 2.0),
            record("B", 200.0, 180.0, 3.0),
            record("C", 300.0, 270.0, 5.0),
        ];
        let totals = SupplierTotals::fold(&records);
        assert_eq!(totals.total_commission, 600.0);
        assert_eq!(totals.total_net_commission, 540.0);
        assert_eq!(totals.total_pax, 10.0);
        assert_eq!(totals.avg_commission_per_pax, 60.0);
        assert_eq!(totals.avg_net_commission_per_pax, 54.0);
    }

    #[test]
    fn test_fold_is_order_independent() {
        let forward = vec![
            record("A", 100.0, 90.0, 2.0),
            record("B", 200.0, 180.0, 3.0),
            record("C", 300.0, 270.0, 5.0),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();
        assert_eq!(
            SupplierTotals::fold(&forward),
            SupplierTotals::fold(&reversed)
        );
    }

    #[test]
    fn test_fold_empty_has_zero_averages() {
        let totals = SupplierTotals::fold(&[]);
        assert_eq!(totals.avg_commission_per_pax, 0.0);
        assert_eq!(totals.avg_net_commission_per_pax, 0.0);
    }

    #[test]
    fn test_fold_zero_pax_guards_division() {
        let totals = SupplierTotals::fold(&[record("A", 100.0, 90.0, 0.0)]);
        assert_eq!(totals.total_commission, 100.0);
        assert_eq!(totals.avg_commission_per_pax, 0.0);
    }

    #[test]
    fn test_chart_series_keeps_small_lists_whole() {
        let records = vec![
            record("A", 300.0, 270.0, 1.0),
            record("B", 200.0, 180.0, 1.0),
            record("C", 100.0, 90.0, 1.0),
        ];
        let series = chart_series(&records);
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].name, "A");
        assert_eq!(series[0].title, "A (A EN)");
        assert_eq!(series[2].name, "C");
    }

    #[test]
    fn test_chart_series_truncates_to_ten() {
        let records: Vec<SupplierRecord> = (0..14)
            .map(|i| record(&format!("S{}", i), 100.0, 90.0, 1.0))
            .collect();
        assert_eq!(chart_series(&records).len(), 10);
    }

    #[test]
    fn test_chart_series_truncates_long_names() {
        let records = vec![record("บริษัททัวร์ที่มีชื่อยาวมากเป็นพิเศษ", 1.0, 1.0, 1.0)];
        let series = chart_series(&records);
        assert!(series[0].name.ends_with("..."));
        assert!(series[0].title.contains("บริษัท"));
    }

    #[test]
    fn test_sort_by_each_metric_field() {
        let a = record("A", 100.0, 50.0, 10.0);
        let b = record("B", 200.0, 40.0, 5.0);
        assert_eq!(a.compare_by_field(&b, "total_commission"), Ordering::Less);
        assert_eq!(
            a.compare_by_field(&b, "total_net_commission"),
            Ordering::Greater
        );
        assert_eq!(a.compare_by_field(&b, "total_pax"), Ordering::Greater);
        assert_eq!(a.compare_by_field(&b, "unknown"), Ordering::Equal);
    }

    #[test]
    fn test_csv_row_rounds_to_integers() {
        let row = record("ทัวร์ไทย", 1234.56, 1100.44, 7.0).to_csv_row();
        assert_eq!(row[0], "\"ทัวร์ไทย\"");
        assert_eq!(row[2], "1235");
        assert_eq!(row[3], "1100");
        assert_eq!(row.len(), SupplierRecord::headers().len());
    }

    #[test]
    fn test_csv_summary_row_totals() {
        let records = vec![
            record("A", 100.0, 90.0, 2.0),
            record("B", 200.0, 180.0, 2.0),
        ];
        let summary = csv_summary_row(&records);
        assert_eq!(summary[0], "\"Total (2 suppliers)\"");
        assert_eq!(summary[2], "300");
        assert_eq!(summary[4], "4");
        assert_eq!(summary.len(), SupplierRecord::headers().len());
    }
}
