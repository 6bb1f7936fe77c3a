use contracts::reports::filter::ReportFilter;
use contracts::reports::supplier::SupplierRecord;
use contracts::shared::envelope::parse_rows;

use crate::shared::api_utils::{get_json, ApiError};

/// Fetch supplier performance rows for the given filter.
pub async fn fetch_supplier_report(
    filter: &ReportFilter,
    token: Option<&str>,
) -> Result<Vec<SupplierRecord>, ApiError> {
    let body = get_json(
        "/api/reports/supplier-performance",
        &filter.query_pairs(),
        token,
    )
    .await?;
    Ok(parse_rows(body).unwrap_or_else(|| {
        log::warn!("supplier-performance: unexpected response shape, treating as empty");
        Vec::new()
    }))
}
