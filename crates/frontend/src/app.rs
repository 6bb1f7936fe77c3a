use leptos::prelude::*;

use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::Shell;
use crate::reports::order_discount::ui::OrderDiscountPage;
use crate::reports::order_external::ui::OrderExternalPage;
use crate::reports::request_discount::ui::RequestDiscountPage;
use crate::reports::sales_discount::ui::DiscountSalesPage;
use crate::reports::supplier::ui::SupplierCommissionPage;
use crate::system::pages::home::HomePage;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    // Reads /auth?token=... and the current path before the first render.
    ctx.init_url_integration();

    view! {
        <Shell content=move || match ctx.active_page.get() {
            Page::Home => view! { <HomePage/> }.into_any(),
            Page::SupplierCommission => view! { <SupplierCommissionPage/> }.into_any(),
            Page::DiscountSales => view! { <DiscountSalesPage/> }.into_any(),
            Page::OrderDiscount => view! { <OrderDiscountPage/> }.into_any(),
            Page::OrderExternal => view! { <OrderExternalPage/> }.into_any(),
            Page::RequestDiscount => view! { <RequestDiscountPage/> }.into_any(),
        }/>
    }
}
