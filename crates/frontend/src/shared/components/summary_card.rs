use leptos::prelude::*;

/// SummaryCard component - one headline figure above a report table
#[component]
pub fn SummaryCard(
    /// Emoji marker shown before the label
    icon: &'static str,
    /// Card label
    #[prop(into)]
    label: String,
    /// Formatted value text
    #[prop(into)]
    value: Signal<String>,
    /// CSS color of the value text
    #[prop(optional)]
    color: Option<&'static str>,
) -> impl IntoView {
    let color = color.unwrap_or("#212121");
    view! {
        <div style="flex: 1; min-width: 180px; background: white; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); padding: 16px 20px;">
            <div style="color: #666; font-size: 13px; margin-bottom: 6px;">
                {icon} " " {label}
            </div>
            <div style=format!("font-size: 24px; font-weight: 700; color: {};", color)>
                {move || value.get()}
            </div>
        </div>
    }
}
