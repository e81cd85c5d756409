use crate::domain::a003_warehouse::api;
use crate::domain::a005_unit::{api as unit_api, unit_options};
use crate::shared::components::PaginationControls;
use crate::shared::query::{use_table_query, DebouncedSearchInput, LoadState, RequestGuard};
use crate::shared::search_select::{ComboOption, PaginatedCombobox, SelectableItem};
use crate::shared::selection::{scope_keys, use_selection, SelectionMode};
use crate::shared::toggleable_list::{card_renderer, ColumnDef, SelectionBinding, ToggleableList};
use contracts::domain::a003_warehouse::aggregate::Warehouse;
use contracts::shared::pagination::PaginatedResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn capacity_text(w: &Warehouse) -> String {
    match (w.capacity, w.unit_symbol.as_deref()) {
        (Some(capacity), Some(symbol)) => format!("{} {}", capacity, symbol),
        (Some(capacity), None) => capacity.to_string(),
        _ => String::new(),
    }
}

fn status_text(w: &Warehouse) -> &'static str {
    if w.is_active {
        "Активен"
    } else {
        "Закрыт"
    }
}

/// Склады; строка выбирается как радиокнопка и становится складом по умолчанию
#[component]
pub fn WarehousesList() -> impl IntoView {
    let query = use_table_query();
    let selection = use_selection();
    let guard = RequestGuard::new();
    let load_state = RwSignal::new(LoadState::<PaginatedResponse<Warehouse>>::Loading);
    let unit_options_state = RwSignal::new(Vec::<ComboOption>::new());

    spawn_local(async move {
        match unit_api::fetch_units().await {
            Ok(units) => unit_options_state.set(unit_options(&units)),
            Err(e) => log::error!("Failed to load units: {}", e),
        }
    });

    Effect::new(move |_| {
        let params = query.api_params.get();
        load_state.set(LoadState::Loading);
        guard.spawn(
            "warehouses",
            async move { api::fetch_warehouses(&params).await },
            move |result| {
                if let Err(e) = &result {
                    log::error!("Failed to load warehouses: {}", e);
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
    let unit_filter = Signal::derive(move || query.filter().get().unwrap_or_default());

    // Снимок выбранного склада хранится в области, он виден и на других страницах списка
    let default_warehouse = selection.selected_payloads::<Warehouse>(scope_keys::WAREHOUSE_DEFAULT);

    let binding = SelectionBinding::new(scope_keys::WAREHOUSE_DEFAULT, |w: &Warehouse| w.row_id())
        .with_mode(SelectionMode::Single);

    let columns = vec![
        ColumnDef::text("code", "Код", |w: &Warehouse| w.code.clone()),
        ColumnDef::text("name", "Наименование", |w: &Warehouse| w.name.clone()),
        ColumnDef::text("location", "Адрес", |w: &Warehouse| {
            w.location.clone().unwrap_or_default()
        }),
        ColumnDef::text("capacity", "Вместимость", capacity_text),
        ColumnDef::custom("is_active", "Статус", |w: &Warehouse| {
            let class = if w.is_active {
                "status-badge status-badge--active"
            } else {
                "status-badge"
            };
            view! { <span class=class>{status_text(w)}</span> }.into_any()
        }),
    ];

    let render_card = card_renderer(|w: &Warehouse| {
        let capacity = capacity_text(w);
        view! {
            <div class="card-grid__title">{w.display_name()}</div>
            <div class="card-grid__meta">{w.location.clone().unwrap_or_default()}</div>
            <div class="card-grid__meta">{capacity}</div>
        }
        .into_any()
    });

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Склады"</h1>
                <div class="page__filters">
                    <PaginatedCombobox
                        options=unit_options_state
                        value=unit_filter
                        on_change=Callback::new(move |value: String| query.set_filter(Some(value)))
                        items_per_page=8
                        placeholder="Любая единица"
                    />
                    <DebouncedSearchInput
                        value=query.search()
                        on_change=Callback::new(move |s: String| query.set_search(s))
                        placeholder="Код или наименование..."
                    />
                </div>
            </div>

            <div class="selection-summary">
                {move || match default_warehouse.get().first() {
                    Some(w) => format!("Склад по умолчанию: {}", w.display_name()),
                    None => "Склад по умолчанию не выбран".to_string(),
                }}
            </div>

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
                selection=binding
                empty_text="Склады не найдены"
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
