use leptos::prelude::*;

/// Top bar with the product name
#[component]
pub fn TopBar() -> impl IntoView {
    view! {
        <header style="display: flex; align-items: center; gap: 10px; background: #1565c0; color: white; padding: 12px 20px;">
            <span style="font-size: 20px;">"📊"</span>
            <span style="font-size: 17px; font-weight: 700;">"Tourwow Report"</span>
            <span style="font-size: 13px; opacity: 0.8;">"ระบบรายงานคอมมิชชั่นและส่วนลด"</span>
        </header>
    }
}
