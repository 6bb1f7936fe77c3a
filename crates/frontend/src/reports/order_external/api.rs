use contracts::reports::filter::ReportFilter;
use contracts::reports::order_external::OrderExternalRecord;
use contracts::shared::envelope::parse_rows;

use crate::shared::api_utils::{get_json, ApiError};

/// Fetch backdated orders (first installment paid in a later month than the
/// order was created) for the given filter.
pub async fn fetch_order_external_report(
    filter: &ReportFilter,
    token: Option<&str>,
) -> Result<Vec<OrderExternalRecord>, ApiError> {
    let body = get_json(
        "/api/reports/order-external-summary",
        &filter.query_pairs(),
        token,
    )
    .await?;
    Ok(parse_rows(body).unwrap_or_else(|| {
        log::warn!("order-external-summary: unexpected response shape, treating as empty");
        Vec::new()
    }))
}
