use crate::routes::AppRoutes;
use crate::shared::selection::{provide_selection_store, InitPolicy};
use crate::shared::view_mode::provide_view_mode;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Хранилище выбора живёт выше маршрутов: выбор переживает переходы между экранами
    provide_selection_store(InitPolicy::Strict);
    provide_view_mode();

    view! { <AppRoutes /> }
}
