use super::traits::SelectableItem;
use crate::shared::components::pagination_controls::{next_disabled, prev_disabled};
use crate::shared::icons::icon;
use crate::shared::selection::SelectionMode;
use leptos::prelude::*;

/// Серверная пагинация результатов поиска
#[derive(Clone, Copy)]
pub struct ServerPagination {
    pub current_page: Signal<usize>,
    pub last_page: Signal<usize>,
    pub on_page_change: Callback<usize>,
}

/// Выбор элемента из результатов: `Single` заменяет выбор, `Multiple`
/// переключает членство по `row_id`
pub fn apply_pick<T: SelectableItem + Clone>(
    selected: &[T],
    item: &T,
    mode: SelectionMode,
) -> Vec<T> {
    match mode {
        SelectionMode::Single => vec![item.clone()],
        SelectionMode::Multiple => {
            let id = item.row_id();
            if selected.iter().any(|s| s.row_id() == id) {
                selected
                    .iter()
                    .filter(|s| s.row_id() != id)
                    .cloned()
                    .collect()
            } else {
                let mut next = selected.to_vec();
                next.push(item.clone());
                next
            }
        }
    }
}

pub fn remove_selected<T: SelectableItem + Clone>(selected: &[T], item: &T) -> Vec<T> {
    let id = item.row_id();
    selected
        .iter()
        .filter(|s| s.row_id() != id)
        .cloned()
        .collect()
}

/// Без поискового запроса выпадающий список не показывается
pub fn results_visible(search: &str) -> bool {
    !search.trim().is_empty()
}

pub fn pager_visible(search: &str, last_page: usize) -> bool {
    results_visible(search) && last_page > 1
}

/// Поле поиска с выпадающими результатами и выбранными элементами-чипами
///
/// Компонент управляемый: выбор хранит вызывающий код, загрузку и debounce
/// тоже. Чипы выбранного не зависят от текущей страницы результатов.
#[component]
pub fn AsyncMultiSelect<T>(
    #[prop(into)] selected: Signal<Vec<T>>,
    on_change: Callback<Vec<T>>,
    /// Результаты текущей страницы поиска
    #[prop(into)]
    data: Signal<Vec<T>>,
    #[prop(into)] is_loading: Signal<bool>,
    #[prop(into)] search: Signal<String>,
    on_search_change: Callback<String>,
    #[prop(optional)] mode: SelectionMode,
    #[prop(optional)] pagination: Option<ServerPagination>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
) -> impl IntoView
where
    T: SelectableItem + Clone + Send + Sync + 'static,
{
    let placeholder = move || {
        placeholder
            .get()
            .unwrap_or_else(|| "Начните вводить для поиска...".to_string())
    };

    let pick = move |item: T| {
        let next = selected.with_untracked(|current| apply_pick(current, &item, mode));
        on_change.run(next);
    };

    let remove = move |item: T| {
        let next = selected.with_untracked(|current| remove_selected(current, &item));
        on_change.run(next);
    };

    let chips = move || {
        selected
            .get()
            .into_iter()
            .map(|item| {
                let label = item.display_name();
                view! {
                    <span class="async-select__chip">
                        {label}
                        <button
                            class="async-select__chip-remove"
                            title="Убрать"
                            on:click=move |_| remove(item.clone())
                        >
                            {icon("x")}
                        </button>
                    </span>
                }
            })
            .collect_view()
    };

    let results = move || {
        if is_loading.get() {
            return view! { <div class="async-select__status">"Загрузка..."</div> }.into_any();
        }
        let items = data.get();
        if items.is_empty() {
            return view! { <div class="async-select__status">"Ничего не найдено"</div> }
                .into_any();
        }
        let selected_ids: Vec<_> = selected.with(|s| s.iter().map(|i| i.row_id()).collect());
        items
            .into_iter()
            .map(|item| {
                let is_selected = selected_ids.contains(&item.row_id());
                let label = item.display_name();
                view! {
                    <div
                        class=move || {
                            if is_selected {
                                "async-select__option async-select__option--selected"
                            } else {
                                "async-select__option"
                            }
                        }
                        on:click=move |_| pick(item.clone())
                    >
                        {label}
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    let pager = move || {
        let ServerPagination {
            current_page,
            last_page,
            on_page_change,
        } = pagination?;
        if !pager_visible(&search.get(), last_page.get()) {
            return None;
        }
        Some(view! {
            <div class="async-select__pager">
                <button
                    class="button button--ghost"
                    disabled=move || prev_disabled(is_loading.get(), current_page.get())
                    on:click=move |_| on_page_change.run(current_page.get_untracked() - 1)
                >
                    {icon("chevron-left")}
                </button>
                <span>{move || format!("{} / {}", current_page.get(), last_page.get())}</span>
                <button
                    class="button button--ghost"
                    disabled=move || {
                        next_disabled(is_loading.get(), current_page.get(), last_page.get())
                    }
                    on:click=move |_| on_page_change.run(current_page.get_untracked() + 1)
                >
                    {icon("chevron-right")}
                </button>
            </div>
        })
    };

    view! {
        <div class="async-select">
            <div class="async-select__chips">{chips}</div>
            <input
                type="text"
                class="async-select__input"
                placeholder=placeholder
                prop:value=move || search.get()
                on:input=move |ev| on_search_change.run(event_target_value(&ev))
            />
            <Show when=move || results_visible(&search.get())>
                <div class="async-select__dropdown">
                    {results}
                    {pager}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::selection::RowId;

    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        id: i64,
        name: &'static str,
    }

    impl SelectableItem for Person {
        fn row_id(&self) -> RowId {
            RowId::from(self.id)
        }

        fn display_name(&self) -> String {
            self.name.to_string()
        }
    }

    fn p(id: i64, name: &'static str) -> Person {
        Person { id, name }
    }

    #[test]
    fn test_pick_multiple_toggles_membership() {
        let selected = vec![p(1, "Анна"), p(2, "Борис")];

        let added = apply_pick(&selected, &p(3, "Вера"), SelectionMode::Multiple);
        assert_eq!(added, vec![p(1, "Анна"), p(2, "Борис"), p(3, "Вера")]);

        let removed = apply_pick(&added, &p(2, "Борис"), SelectionMode::Multiple);
        assert_eq!(removed, vec![p(1, "Анна"), p(3, "Вера")]);
    }

    #[test]
    fn test_pick_single_replaces() {
        let selected = vec![p(1, "Анна")];
        let next = apply_pick(&selected, &p(5, "Дина"), SelectionMode::Single);
        assert_eq!(next, vec![p(5, "Дина")]);
    }

    #[test]
    fn test_remove_selected_by_row_id() {
        let selected = vec![p(1, "Анна"), p(2, "Борис")];
        // другой снимок того же пользователя снимается по id
        let next = remove_selected(&selected, &p(1, "Анна П."));
        assert_eq!(next, vec![p(2, "Борис")]);
    }

    #[test]
    fn test_visibility_rules() {
        assert!(!results_visible(""));
        assert!(!results_visible("   "));
        assert!(results_visible("ан"));

        assert!(!pager_visible("", 5));
        assert!(!pager_visible("ан", 1));
        assert!(pager_visible("ан", 2));
    }
}
