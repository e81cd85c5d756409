pub mod navbar;
pub mod top_header;

use leptos::prelude::*;
use navbar::Navbar;
use top_header::TopHeader;

/// Каркас приложения
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Navbar   |           Content            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <div data-zone="left" class="left">
                    <Navbar />
                </div>
                <div class="app-main">{children()}</div>
            </div>
        </div>
    }
}
