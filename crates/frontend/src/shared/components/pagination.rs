use leptos::prelude::*;

const BTN_STYLE: &str = "padding: 4px 10px; border: 1px solid #ccc; border-radius: 4px; background: white; cursor: pointer; font-size: 13px;";

/// PaginationControls component - pager under the order tables
///
/// Pages are 1-indexed; the page size is fixed, so there is no size selector.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages (at least 1)
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of rows across all pages
    #[prop(into)]
    total_count: Signal<usize>,

    /// Callback when the page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div style="display: flex; align-items: center; justify-content: center; gap: 8px; padding: 12px;">
            <button
                style=BTN_STYLE
                on:click=move |_| on_page_change.run(1)
                disabled=move || current_page.get() <= 1
                title="หน้าแรก"
            >
                "«"
            </button>
            <button
                style=BTN_STYLE
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                title="ก่อนหน้า"
            >
                "‹"
            </button>
            <span style="font-size: 13px; color: #555;">
                {move || format!(
                    "หน้า {} / {} ({} รายการ)",
                    current_page.get(),
                    total_pages.get().max(1),
                    total_count.get()
                )}
            </span>
            <button
                style=BTN_STYLE
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= total_pages.get()
                title="ถัดไป"
            >
                "›"
            </button>
            <button
                style=BTN_STYLE
                on:click=move |_| on_page_change.run(total_pages.get().max(1))
                disabled=move || current_page.get() >= total_pages.get()
                title="หน้าสุดท้าย"
            >
                "»"
            </button>
        </div>
    }
}
