use leptos::prelude::*;

use crate::shared::components::export_button::ExportButton;
use crate::shared::list_utils::get_sort_indicator;

/// Header cell style shared by the report tables.
pub const TH_STYLE: &str = "padding: 10px 14px; font-size: 12px; font-weight: 600; color: #6b7280; text-transform: uppercase; white-space: nowrap; background: #f9fafb; border-bottom: 1px solid #e5e7eb;";

/// Body cell style shared by the report tables.
pub const TD_STYLE: &str =
    "padding: 10px 14px; font-size: 14px; white-space: nowrap; border-bottom: 1px solid #f1f3f5;";

/// TableCard component - white card with a title row and a horizontally
/// scrollable table body
#[component]
pub fn TableCard(
    /// Card title
    #[prop(into)]
    title: String,
    /// Renders an export button in the title row when set
    #[prop(optional, into)]
    on_export: Option<Callback<()>>,
    /// The table itself
    children: Children,
) -> impl IntoView {
    view! {
        <div style="background: white; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); overflow: hidden;">
            <div style="display: flex; justify-content: space-between; align-items: center; padding: 16px 24px; border-bottom: 1px solid #e5e7eb;">
                <h2 style="margin: 0; font-size: 16px; font-weight: 600; color: #212121;">
                    {title}
                </h2>
                {on_export.map(|on_export| view! { <ExportButton on_export=on_export/> })}
            </div>
            <div style="overflow-x: auto;">{children()}</div>
        </div>
    }
}

/// SortableHeaderCell component - column header that reports sort clicks
///
/// Shows ▲/▼ on the active column and ⇅ elsewhere. The page owns the sort
/// state; this cell only raises `on_sort` with its field name.
#[component]
pub fn SortableHeaderCell(
    /// Column label
    #[prop(into)]
    label: String,
    /// Field name handed to `on_sort`
    #[prop(into)]
    sort_field: String,
    /// Currently active sort field
    #[prop(into)]
    current_sort_field: Signal<String>,
    /// Current sort direction
    #[prop(into)]
    sort_ascending: Signal<bool>,
    /// Callback when the header is clicked
    on_sort: Callback<String>,
    /// Text alignment (numeric columns are right-aligned)
    #[prop(optional, default = "right")]
    align: &'static str,
) -> impl IntoView {
    let sort_field_for_click = sort_field.clone();
    let handle_click = move |_| {
        on_sort.run(sort_field_for_click.clone());
    };

    view! {
        <th
            style=format!("{} text-align: {}; cursor: pointer;", TH_STYLE, align)
            on:click=handle_click
        >
            {label}
            {move || {
                get_sort_indicator(&current_sort_field.get(), &sort_field, sort_ascending.get())
            }}
        </th>
    }
}
