use crate::domain::a002_supplier::api;
use crate::domain::a004_category::{api as category_api, category_options};
use crate::shared::components::PaginationControls;
use crate::shared::query::{use_table_query, DebouncedSearchInput, LoadState, RequestGuard};
use crate::shared::search_select::{ComboOption, PaginatedCombobox, SelectableItem};
use crate::shared::selection::{scope_keys, use_selection};
use crate::shared::toggleable_list::{
    card_renderer, ColumnDef, ColumnSort, SelectionBinding, ToggleableList,
};
use contracts::domain::a002_supplier::aggregate::Supplier;
use contracts::shared::pagination::PaginatedResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn text_or_empty(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

#[component]
pub fn SuppliersList() -> impl IntoView {
    let query = use_table_query();
    let selection = use_selection();
    let guard = RequestGuard::new();
    let load_state = RwSignal::new(LoadState::<PaginatedResponse<Supplier>>::Loading);
    let category_options_state = RwSignal::new(Vec::<ComboOption>::new());

    // Справочник категорий грузится один раз
    spawn_local(async move {
        match category_api::fetch_categories().await {
            Ok(categories) => category_options_state.set(category_options(&categories)),
            Err(e) => log::error!("Failed to load categories: {}", e),
        }
    });

    Effect::new(move |_| {
        let params = query.api_params.get();
        load_state.set(LoadState::Loading);
        guard.spawn(
            "suppliers",
            async move { api::fetch_suppliers(&params).await },
            move |result| {
                if let Err(e) = &result {
                    log::error!("Failed to load suppliers: {}", e);
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
    let category_filter = Signal::derive(move || query.filter().get().unwrap_or_default());

    let selected_count = selection.selected_count(scope_keys::SUPPLIERS);

    let columns = vec![
        ColumnDef::text("name", "Наименование", |s: &Supplier| s.name.clone()).sortable(),
        ColumnDef::text("contact_person", "Контактное лицо", |s: &Supplier| {
            text_or_empty(&s.contact_person)
        }),
        ColumnDef::text("category_name", "Категория", |s: &Supplier| {
            text_or_empty(&s.category_name)
        })
        .sortable(),
        ColumnDef::text("phone", "Телефон", |s: &Supplier| text_or_empty(&s.phone)),
    ];

    let render_card = card_renderer(|s: &Supplier| {
        let category = text_or_empty(&s.category_name);
        let contact = text_or_empty(&s.contact_person);
        view! {
            <div class="card-grid__title">{s.name.clone()}</div>
            <div class="card-grid__badge">{category}</div>
            <div class="card-grid__meta">{contact}</div>
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
                <h1 class="page__title">"Поставщики"</h1>
                <div class="page__filters">
                    <PaginatedCombobox
                        options=category_options_state
                        value=category_filter
                        on_change=Callback::new(move |value: String| query.set_filter(Some(value)))
                        placeholder="Все категории"
                    />
                    <DebouncedSearchInput
                        value=query.search()
                        on_change=Callback::new(move |s: String| query.set_search(s))
                    />
                </div>
            </div>

            <Show when=move || { selected_count.get() > 0 }>
                <div class="bulk-toolbar">
                    <span>{move || format!("Выбрано поставщиков: {}", selected_count.get())}</span>
                    <button
                        class="button button--secondary"
                        on:click=move |_| selection.clear_scope(&scope_keys::SUPPLIERS)
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
                columns=columns
                render_item=render_card
                selection=SelectionBinding::new(scope_keys::SUPPLIERS, |s: &Supplier| s.row_id())
                sort=column_sort
                empty_text="Поставщики не найдены"
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
