use leptos::prelude::*;

/// PageHeader component - title block at the top of every report page
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional subtitle below the title
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Actions on the right side (pass an empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div style="display: flex; justify-content: space-between; align-items: flex-start; background: white; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); padding: 20px 24px; margin-bottom: 16px;">
            <div>
                <h1 style="margin: 0; font-size: 22px; font-weight: 700; color: #212121;">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <div style="margin-top: 4px; color: #666; font-size: 14px;">{s}</div>
                })}
            </div>
            <div style="display: flex; gap: 8px; align-items: center;">
                {children()}
            </div>
        </div>
    }
}
