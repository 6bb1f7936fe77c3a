use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::system::auth::storage;

/// Pages reachable from the sidebar. Each maps one-to-one onto a path so
/// report links can be bookmarked and shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    SupplierCommission,
    DiscountSales,
    OrderDiscount,
    OrderExternal,
    RequestDiscount,
}

impl Page {
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::SupplierCommission => "/supplier-commission",
            Page::DiscountSales => "/discount-sales",
            Page::OrderDiscount => "/order-has-discount",
            Page::OrderExternal => "/order-external-summary",
            Page::RequestDiscount => "/request-discount",
        }
    }

    pub fn from_path(path: &str) -> Option<Page> {
        match path.trim_end_matches('/') {
            "" => Some(Page::Home),
            "/supplier-commission" => Some(Page::SupplierCommission),
            "/discount-sales" => Some(Page::DiscountSales),
            "/order-has-discount" => Some(Page::OrderDiscount),
            "/order-external-summary" => Some(Page::OrderExternal),
            "/request-discount" => Some(Page::RequestDiscount),
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_page: RwSignal<Page>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_page: RwSignal::new(Page::Home),
        }
    }

    pub fn open(&self, page: Page) {
        self.active_page.set(page);
    }

    /// Wire the active page to the browser URL.
    ///
    /// On startup: `/auth?token=...` stores the token and lands on the home
    /// page (with or without a token present); any other known path opens
    /// its page. Afterwards an effect mirrors page changes back into the
    /// address bar via `history.replaceState`.
    pub fn init_url_integration(&self) {
        let pathname = window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();

        if pathname.trim_end_matches('/') == "/auth" {
            let search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            let params: HashMap<String, String> =
                serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
            match params.get("token") {
                Some(token) if !token.is_empty() => {
                    storage::save_token(token);
                    log::info!("auth token captured, redirecting to home");
                }
                _ => log::warn!("auth route opened without a token"),
            }
            self.active_page.set(Page::Home);
        } else if let Some(page) = Page::from_path(&pathname) {
            self.active_page.set(page);
        } else {
            self.active_page.set(Page::Home);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_path = this.active_page.get().path();

            let current_path = window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_default();

            // Only touch history when the URL actually changed
            if current_path != new_path {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(new_path),
                        );
                    }
                }
            }
        });
    }
}
