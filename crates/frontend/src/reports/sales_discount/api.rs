use contracts::reports::filter::ReportFilter;
use contracts::reports::sales_discount::DiscountSalesRecord;
use contracts::shared::envelope::parse_rows;

use crate::shared::api_utils::{get_json, ApiError};

/// Fetch per-salesperson discount rows for the given filter.
pub async fn fetch_sales_discount_report(
    filter: &ReportFilter,
    token: Option<&str>,
) -> Result<Vec<DiscountSalesRecord>, ApiError> {
    let body = get_json("/api/reports/sales-discount", &filter.query_pairs(), token).await?;
    Ok(parse_rows(body).unwrap_or_else(|| {
        log::warn!("sales-discount: unexpected response shape, treating as empty");
        Vec::new()
    }))
}
