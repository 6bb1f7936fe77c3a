//! Sidebar with the report menu

use crate::layout::global_context::{AppGlobalContext, Page};
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    page: Page,
    label: &'static str,
    icon: &'static str,
}

fn get_menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            page: Page::Home,
            label: "หน้าหลัก",
            icon: "🏠",
        },
        MenuItem {
            page: Page::SupplierCommission,
            label: "Supplier Commission",
            icon: "💰",
        },
        MenuItem {
            page: Page::DiscountSales,
            label: "Discount Sales",
            icon: "🏷️",
        },
        MenuItem {
            page: Page::OrderDiscount,
            label: "Order มีส่วนลด",
            icon: "🧾",
        },
        MenuItem {
            page: Page::OrderExternal,
            label: "Order แก้ย้อนหลัง",
            icon: "📋",
        },
        MenuItem {
            page: Page::RequestDiscount,
            label: "ขอส่วนลดเพิ่ม",
            icon: "✉️",
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    view! {
        <aside style="width: 230px; flex-shrink: 0; background: white; border-right: 1px solid #e0e0e0; padding: 12px 8px;">
            {get_menu_items().into_iter().map(|item| {
                let page = item.page;
                view! {
                    <button
                        style=move || format!(
                            "display: block; width: 100%; text-align: left; padding: 10px 12px; margin-bottom: 2px; border: none; border-radius: 6px; cursor: pointer; font-size: 14px; color: {}; background: {};",
                            if ctx.active_page.get() == page { "#1565c0" } else { "#333" },
                            if ctx.active_page.get() == page { "#e3f2fd" } else { "transparent" },
                        )
                        on:click=move |_| ctx.open(page)
                    >
                        {item.icon} " " {item.label}
                    </button>
                }
            }).collect_view()}
        </aside>
    }
}
