/// Client-side pagination arithmetic
///
/// Report tables page through an in-memory snapshot; there is no server
/// round-trip. Pages are 1-indexed.

/// Rows per table page.
pub const PAGE_SIZE: usize = 50;

/// Number of pages for `total` rows. An empty list still has one page.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if total == 0 {
        1
    } else {
        total.div_ceil(page_size)
    }
}

/// Clamp a requested page into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.max(1).min(total_pages.max(1))
}

/// Start/end row indices (half-open) of a page over `total` rows.
pub fn page_bounds(page: usize, total: usize, page_size: usize) -> (usize, usize) {
    let page = clamp_page(page, page_count(total, page_size));
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total);
    (start.min(total), end)
}
