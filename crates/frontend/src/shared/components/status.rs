use leptos::prelude::*;

/// Loading banner shown while a report fetch is in flight
#[component]
pub fn LoadingNotice() -> impl IntoView {
    view! {
        <div style="padding: 40px; text-align: center; color: #1976d2; font-size: 15px;">
            "กำลังโหลดข้อมูล..."
        </div>
    }
}

/// Red error banner with the localized message from the page
#[component]
pub fn ErrorNotice(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <div style="margin: 12px 0; padding: 12px 16px; background: #fdecea; border: 1px solid #f5c6cb; border-radius: 4px; color: #b71c1c; font-size: 14px;">
            {move || message.get()}
        </div>
    }
}

/// Gray placeholder for an empty result set
#[component]
pub fn EmptyNotice(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div style="padding: 40px; text-align: center; color: #888; font-size: 14px;">
            {message}
        </div>
    }
}
