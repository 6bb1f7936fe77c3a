use leptos::prelude::*;

/// Landing page shown after login and as the default route
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div style="display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 60vh; text-align: center;">
            <div style="font-size: 56px; margin-bottom: 16px;">"📊"</div>
            <h1 style="margin: 0 0 8px 0; font-size: 26px; font-weight: 700; color: #212121;">
                "ยินดีต้อนรับเข้าสู่ระบบ Tourwow Report"
            </h1>
            <p style="margin: 0; color: #666; font-size: 15px;">
                "กรุณาเลือกเมนูด้านซ้ายเพื่อเข้าดู Report"
            </p>
        </div>
    }
}
