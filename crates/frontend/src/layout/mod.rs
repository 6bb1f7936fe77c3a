pub mod global_context;
pub mod sidebar;
pub mod top_bar;

use leptos::prelude::*;
use sidebar::Sidebar;
use top_bar::TopBar;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |                 TopBar                   |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(content: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div style="min-height: 100vh; display: flex; flex-direction: column; background: #f5f6fa;">
            <TopBar />
            <div style="display: flex; flex: 1; align-items: stretch;">
                <Sidebar />
                <main style="flex: 1; padding: 20px 24px; overflow-x: auto;">
                    {content()}
                </main>
            </div>
        </div>
    }
}
