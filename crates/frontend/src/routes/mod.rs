use crate::domain::a001_customer::ui::list::CustomersList;
use crate::domain::a002_supplier::ui::list::SuppliersList;
use crate::domain::a003_warehouse::ui::list::WarehousesList;
use crate::layout::Shell;
use crate::system::users::ui::picker::UsersPickerPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <div class="page">"Страница не найдена"</div> }>
                    <Route path=path!("/") view=CustomersList />
                    <Route path=path!("/customers") view=CustomersList />
                    <Route path=path!("/suppliers") view=SuppliersList />
                    <Route path=path!("/warehouses") view=WarehousesList />
                    <Route path=path!("/users") view=UsersPickerPage />
                </Routes>
            </Shell>
        </Router>
    }
}
