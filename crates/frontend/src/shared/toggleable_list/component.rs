use super::binder::{self, HeaderCheckState, SelectionBinding};
use super::columns::{CardRenderer, ColumnDef};
use crate::shared::components::table::{SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::selection::{use_selection, RowId, SelectedEntry};
use crate::shared::view_mode::{use_view_mode, ViewMode};
use leptos::prelude::*;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use thaw::*;

/// Выбор, вычисленный для отрисовываемой страницы
struct RowSelection<T: 'static> {
    selected: Signal<HashSet<RowId>>,
    header_state: Signal<HeaderCheckState>,
    select_all_enabled: bool,
    get_row_id: Arc<dyn Fn(&T) -> RowId + Send + Sync>,
    on_row_toggle: Callback<T>,
    on_select_all: Callback<bool>,
}

impl<T: 'static> Clone for RowSelection<T> {
    fn clone(&self) -> Self {
        Self {
            selected: self.selected,
            header_state: self.header_state,
            select_all_enabled: self.select_all_enabled,
            get_row_id: Arc::clone(&self.get_row_id),
            on_row_toggle: self.on_row_toggle,
            on_select_all: self.on_select_all,
        }
    }
}

/// Сортировка колонок таблицы (из контроллера экрана)
#[derive(Clone, Copy)]
pub struct ColumnSort {
    pub sort: Signal<Option<String>>,
    pub on_sort: Callback<String>,
}

/// Список, отображаемый таблицей или карточками в зависимости от
/// [`ViewModeContext`](crate::shared::view_mode::ViewModeContext)
///
/// С `selection` строки получают чекбоксы, привязанные к области хранилища
/// выбора. Область инициализируется при монтировании без сброса уже
/// выбранного, так что уход с экрана и возврат выбор не теряют.
#[component]
pub fn ToggleableList<T>(
    /// Текущая страница; `None`, пока данных ещё нет
    #[prop(into)]
    items: Signal<Option<Vec<T>>>,
    #[prop(into)]
    is_loading: Signal<bool>,
    columns: Vec<ColumnDef<T>>,
    render_item: CardRenderer<T>,
    #[prop(optional)]
    selection: Option<SelectionBinding<T>>,
    #[prop(optional)]
    sort: Option<ColumnSort>,
    #[prop(optional, into)]
    empty_text: MaybeProp<String>,
    #[prop(optional)]
    on_row_click: Option<Callback<T>>,
) -> impl IntoView
where
    T: Serialize + Clone + Send + Sync + 'static,
{
    let view_mode = use_view_mode();
    let empty_message = move || empty_text.get().unwrap_or_else(|| "Нет данных".to_string());

    let row_selection = selection.map(|binding| {
        let ctx = use_selection();
        ctx.init_scope(&binding.scope, binding.mode);

        let SelectionBinding {
            scope,
            mode,
            get_row_id,
        } = binding;
        let selected_ids = ctx.selected_ids(scope.clone());

        let selected_rows = {
            let get_row_id = Arc::clone(&get_row_id);
            Signal::derive(move || {
                let ids = selected_ids.get();
                items.with(|items| {
                    binder::selected_subset(items.as_deref().unwrap_or(&[]), &ids, |item: &T| {
                        get_row_id(item)
                    })
                })
            })
        };

        let selected = Signal::derive(move || {
            selected_ids.with(|ids| ids.iter().cloned().collect::<HashSet<_>>())
        });

        let header_state = Signal::derive(move || {
            let rendered = items.with(|items| items.as_ref().map_or(0, Vec::len));
            binder::header_check_state(rendered, selected_rows.with(Vec::len))
        });

        let on_row_toggle = {
            let scope = scope.clone();
            let get_row_id = Arc::clone(&get_row_id);
            Callback::new(move |item: T| {
                let entry = SelectedEntry::from_item(get_row_id(&item), &item);
                ctx.dispatch("row toggle", |store| {
                    binder::apply_row_toggle(store, &scope, mode, entry)
                });
            })
        };

        let on_select_all = {
            let get_row_id = Arc::clone(&get_row_id);
            Callback::new(move |checked: bool| {
                let entries: Vec<SelectedEntry> = items.with_untracked(|items| {
                    items
                        .as_deref()
                        .unwrap_or(&[])
                        .iter()
                        .map(|item| SelectedEntry::from_item(get_row_id(item), item))
                        .collect()
                });
                ctx.dispatch("select all", |store| {
                    binder::apply_select_all(store, &scope, mode, entries, checked)
                });
            })
        };

        RowSelection {
            selected,
            header_state,
            select_all_enabled: binder::select_all_enabled(mode),
            get_row_id,
            on_row_toggle,
            on_select_all,
        }
    });

    view! {
        <div class="toggleable-list">
            {move || {
                if is_loading.get() {
                    return view! {
                        <div class="toggleable-list__loading" style="min-height: 240px;">
                            "Загрузка..."
                        </div>
                    }
                    .into_any();
                }
                let data = items.get().unwrap_or_default();
                if data.is_empty() {
                    return view! {
                        <div class="toggleable-list__empty">{empty_message()}</div>
                    }
                    .into_any();
                }
                match view_mode.mode.get() {
                    ViewMode::Table => {
                        render_table(data, &columns, row_selection.as_ref(), sort, on_row_click)
                    }
                    ViewMode::Card => {
                        render_cards(data, &render_item, row_selection.as_ref(), on_row_click)
                    }
                }
            }}
        </div>
    }
}

fn render_table<T>(
    data: Vec<T>,
    columns: &[ColumnDef<T>],
    selection: Option<&RowSelection<T>>,
    sort: Option<ColumnSort>,
    on_row_click: Option<Callback<T>>,
) -> AnyView
where
    T: Clone + Send + Sync + 'static,
{
    let header_checkbox = selection.map(|sel| {
        view! {
            <TableHeaderCheckbox
                state=sel.header_state
                disabled=!sel.select_all_enabled
                on_change=sel.on_select_all
            />
        }
    });

    let header_cells = columns
        .iter()
        .map(|col| match sort.filter(|_| col.sortable) {
            Some(ColumnSort { sort, on_sort }) => view! {
                <SortableHeaderCell label=col.header.clone() field=col.key sort=sort on_sort=on_sort />
            }
            .into_any(),
            None => {
                let header = col.header.clone();
                view! { <TableHeaderCell resizable=false>{header}</TableHeaderCell> }.into_any()
            }
        })
        .collect_view();

    let rows = data
        .into_iter()
        .map(|item| {
            let checkbox = selection.map(|sel| {
                let id = (sel.get_row_id)(&item);
                let selected = sel.selected;
                let on_row_toggle = sel.on_row_toggle;
                let item_for_toggle = item.clone();
                view! {
                    <TableCellCheckbox
                        checked=Signal::derive(move || selected.with(|s| s.contains(&id)))
                        on_change=Callback::new(move |_checked: bool| {
                            on_row_toggle.run(item_for_toggle.clone())
                        })
                    />
                }
            });
            let cells = columns
                .iter()
                .map(|col| {
                    let content = (col.render)(&item);
                    view! { <TableCell>{content}</TableCell> }
                })
                .collect_view();
            let item_for_click = item.clone();
            view! {
                <TableRow on:click=move |_| {
                    if let Some(on_click) = on_row_click {
                        on_click.run(item_for_click.clone());
                    }
                }>
                    {checkbox}
                    {cells}
                </TableRow>
            }
        })
        .collect_view();

    view! {
        <Table attr:class="toggleable-list__table" attr:style="width: 100%;">
            <TableHeader>
                <TableRow>
                    {header_checkbox}
                    {header_cells}
                </TableRow>
            </TableHeader>
            <TableBody>{rows}</TableBody>
        </Table>
    }
    .into_any()
}

fn render_cards<T>(
    data: Vec<T>,
    render_item: &CardRenderer<T>,
    selection: Option<&RowSelection<T>>,
    on_row_click: Option<Callback<T>>,
) -> AnyView
where
    T: Clone + Send + Sync + 'static,
{
    let cards = data
        .into_iter()
        .map(|item| {
            let body = render_item(&item);
            let is_selected = selection.map(|sel| {
                let id = (sel.get_row_id)(&item);
                let selected = sel.selected;
                Signal::derive(move || selected.with(|s| s.contains(&id)))
            });
            let check = selection.zip(is_selected).map(|(sel, is_selected)| {
                let on_row_toggle = sel.on_row_toggle;
                let item_for_toggle = item.clone();
                view! {
                    <label class="card-grid__check" on:click=|e| e.stop_propagation()>
                        <input
                            type="checkbox"
                            class="table__checkbox"
                            prop:checked=move || is_selected.get()
                            on:change=move |_| on_row_toggle.run(item_for_toggle.clone())
                        />
                    </label>
                }
            });
            let item_for_click = item.clone();
            view! {
                <div
                    class=move || {
                        if is_selected.is_some_and(|s| s.get()) {
                            "card-grid__item card-grid__item--selected"
                        } else {
                            "card-grid__item"
                        }
                    }
                    on:click=move |_| {
                        if let Some(on_click) = on_row_click {
                            on_click.run(item_for_click.clone());
                        }
                    }
                >
                    {check}
                    {body}
                </div>
            }
        })
        .collect_view();

    view! { <div class="card-grid">{cards}</div> }.into_any()
}
