use crate::domain::a001_customer::api;
use crate::shared::components::PaginationControls;
use crate::shared::query::{use_table_query, DebouncedSearchInput, LoadState, RequestGuard};
use crate::shared::search_select::SelectableItem;
use crate::shared::selection::{scope_keys, use_selection};
use crate::shared::toggleable_list::{
    card_renderer, ColumnDef, ColumnSort, SelectionBinding, ToggleableList,
};
use contracts::domain::a001_customer::aggregate::Customer;
use contracts::shared::pagination::PaginatedResponse;
use leptos::prelude::*;

fn or_dash(value: &Option<String>) -> String {
    value.clone().filter(|v| !v.is_empty()).unwrap_or_else(|| "—".to_string())
}

fn customer_columns() -> Vec<ColumnDef<Customer>> {
    vec![
        ColumnDef::text("name", "Наименование", |c: &Customer| c.name.clone()).sortable(),
        ColumnDef::text("email", "Email", |c: &Customer| or_dash(&c.email)).sortable(),
        ColumnDef::text("phone", "Телефон", |c: &Customer| or_dash(&c.phone)),
        ColumnDef::text("created_at", "Создан", |c: &Customer| or_dash(&c.created_at)).sortable(),
    ]
}

/// Список клиентов с массовым выбором
///
/// Выбор живёт в области `customers` и переживает смену страницы, поиска и
/// уход с экрана.
#[component]
pub fn CustomersList() -> impl IntoView {
    let query = use_table_query();
    let selection = use_selection();
    let guard = RequestGuard::new();
    let load_state = RwSignal::new(LoadState::<PaginatedResponse<Customer>>::Loading);

    Effect::new(move |_| {
        let params = query.api_params.get();
        load_state.set(LoadState::Loading);
        guard.spawn(
            "customers",
            async move { api::fetch_customers(&params).await },
            move |result| {
                if let Err(e) = &result {
                    log::error!("Failed to load customers: {}", e);
                }
                load_state.set(LoadState::from_result(result));
            },
        );
    });

    let items = Signal::derive(move || load_state.with(|s| s.data().map(|p| p.data.clone())));
    let is_loading = Signal::derive(move || load_state.with(LoadState::is_loading));
    let current_page =
        Signal::derive(move || load_state.with(|s| s.data().map_or(1, |p| p.current_page)));
    let last_page =
        Signal::derive(move || load_state.with(|s| s.data().map_or(1, |p| p.last_page)));
    let total = Signal::derive(move || load_state.with(|s| s.data().and_then(|p| p.total)));

    let selected_count = selection.selected_count(scope_keys::CUSTOMERS);

    let render_card = card_renderer(|c: &Customer| {
        let email = or_dash(&c.email);
        let phone = or_dash(&c.phone);
        view! {
            <div class="card-grid__title">{c.name.clone()}</div>
            <div class="card-grid__meta">{email}</div>
            <div class="card-grid__meta">{phone}</div>
        }
        .into_any()
    });

    let column_sort = ColumnSort {
        sort: query.sort(),
        on_sort: Callback::new(move |field: String| query.toggle_sort(&field)),
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Клиенты"</h1>
                <DebouncedSearchInput
                    value=query.search()
                    on_change=Callback::new(move |s: String| query.set_search(s))
                    placeholder="Поиск по имени или email..."
                />
            </div>

            <Show when=move || { selected_count.get() > 0 }>
                <div class="bulk-toolbar">
                    <span>{move || format!("Выбрано: {}", selected_count.get())}</span>
                    <button
                        class="button button--secondary"
                        on:click=move |_| selection.clear_scope(&scope_keys::CUSTOMERS)
                    >
                        "Снять выделение"
                    </button>
                </div>
            </Show>

            {move || {
                load_state
                    .with(|s| s.error().map(str::to_string))
                    .map(|e| view! { <div class="alert alert--error">{e}</div> })
            }}

            <ToggleableList
                items=items
                is_loading=is_loading
                columns=customer_columns()
                render_item=render_card
                selection=SelectionBinding::new(scope_keys::CUSTOMERS, |c: &Customer| c.row_id())
                sort=column_sort
                empty_text="Клиенты не найдены"
            />

            <PaginationControls
                current_page=current_page
                last_page=last_page
                total_count=total
                on_page_change=Callback::new(move |page: usize| query.set_page(page))
                is_loading=is_loading
            />
        </div>
    }
}
