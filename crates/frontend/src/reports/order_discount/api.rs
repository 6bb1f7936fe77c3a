use contracts::reports::filter::ReportFilter;
use contracts::reports::order_discount::OrderDiscountRecord;
use contracts::shared::envelope::parse_rows;

use crate::shared::api_utils::{get_json, ApiError};

/// Fetch the order-level discount rows for the given filter.
pub async fn fetch_order_discount_report(
    filter: &ReportFilter,
    token: Option<&str>,
) -> Result<Vec<OrderDiscountRecord>, ApiError> {
    let body = get_json(
        "/api/reports/order-has-discount",
        &filter.query_pairs(),
        token,
    )
    .await?;
    Ok(parse_rows(body).unwrap_or_else(|| {
        log::warn!("order-has-discount: unexpected response shape, treating as empty");
        Vec::new()
    }))
}
