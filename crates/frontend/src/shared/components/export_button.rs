use leptos::prelude::*;

/// ExportButton component - green CSV download trigger
#[component]
pub fn ExportButton(
    /// Callback when the button is clicked
    on_export: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            style="background: #16a34a; color: white; border: none; border-radius: 6px; padding: 8px 16px; font-size: 0.875rem; font-weight: 500; cursor: pointer;"
            on:click=move |_| on_export.run(())
        >
            "Export CSV"
        </button>
    }
}
