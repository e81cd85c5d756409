use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboOption {
    pub value: String,
    pub label: String,
}

impl ComboOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Подстрока в label без учёта регистра
pub fn filter_options(options: &[ComboOption], search: &str) -> Vec<ComboOption> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return options.to_vec();
    }
    options
        .iter()
        .filter(|o| o.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    total.div_ceil(per_page).max(1)
}

/// Срез страницы `page` (с единицы)
pub fn page_slice(options: &[ComboOption], page: usize, per_page: usize) -> Vec<ComboOption> {
    let start = page.saturating_sub(1) * per_page;
    options.iter().skip(start).take(per_page).cloned().collect()
}

/// Страница, на которой стоит опция со значением `value`
pub fn page_of_value(options: &[ComboOption], value: &str, per_page: usize) -> Option<usize> {
    if per_page == 0 {
        return None;
    }
    options
        .iter()
        .position(|o| o.value == value)
        .map(|index| index / per_page + 1)
}

pub fn found_label(count: usize) -> String {
    format!("Найдено: {}", count)
}

/// Состояние выпадающего списка
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboboxState {
    pub is_open: bool,
    pub search: String,
    pub page: usize,
}

impl Default for ComboboxState {
    fn default() -> Self {
        Self {
            is_open: false,
            search: String::new(),
            page: 1,
        }
    }
}

impl ComboboxState {
    /// Открытие с выбранным значением и пустым поиском переходит на страницу этого значения
    pub fn open(&mut self, options: &[ComboOption], value: &str, per_page: usize) {
        self.is_open = true;
        if self.search.is_empty() && !value.is_empty() {
            if let Some(page) = page_of_value(options, value, per_page) {
                self.page = page;
            }
        }
    }

    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    /// Выбор закрывает список и сбрасывает поиск
    pub fn select(&mut self) {
        self.close();
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }
}

/// Выпадающий список с поиском и клиентской пагинацией
#[component]
pub fn PaginatedCombobox(
    #[prop(into)] options: Signal<Vec<ComboOption>>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional)] items_per_page: Option<usize>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
) -> impl IntoView {
    let per_page = items_per_page.unwrap_or(10).max(1);
    let state = RwSignal::new(ComboboxState::default());

    let filtered = Memo::new(move |_| {
        let search = state.with(|s| s.search.clone());
        options.with(|opts| filter_options(opts, &search))
    });
    let total_pages = Memo::new(move |_| filtered.with(|f| page_count(f.len(), per_page)));
    let visible =
        Memo::new(move |_| filtered.with(|f| page_slice(f, state.with(|s| s.page), per_page)));

    let selected_label = move || {
        let current = value.get();
        options
            .with(|opts| opts.iter().find(|o| o.value == current).map(|o| o.label.clone()))
            .unwrap_or_else(|| placeholder.get().unwrap_or_else(|| "Не выбрано".to_string()))
    };

    let open = move |_| {
        let current = value.get_untracked();
        options.with_untracked(|opts| state.update(|s| s.open(opts, &current, per_page)));
    };
    let close = move || state.update(ComboboxState::close);

    let select = move |option_value: String| {
        state.update(ComboboxState::select);
        on_change.run(option_value);
    };

    let clear = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        on_change.run(String::new());
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            close();
        }
    };

    let go_to = move |page: usize| {
        let total = total_pages.get_untracked();
        state.update(|s| s.set_page(page, total));
    };

    view! {
        <div class="combobox" on:keydown=on_keydown>
            <div class="combobox__trigger" on:click=open>
                <span class="combobox__value">{selected_label}</span>
                <Show when=move || !value.get().is_empty()>
                    <button class="combobox__clear" title="Очистить" on:click=clear>
                        "×"
                    </button>
                </Show>
                {icon("chevron-down")}
            </div>
            <Show when=move || state.with(|s| s.is_open)>
                <div class="combobox__backdrop" on:click=move |_| close()></div>
                <div class="combobox__popover">
                    <input
                        type="text"
                        class="combobox__search"
                        placeholder="Поиск..."
                        prop:value=move || state.with(|s| s.search.clone())
                        on:input=move |ev| state.update(|s| s.set_search(event_target_value(&ev)))
                    />
                    <div class="combobox__options">
                        <For
                            each=move || visible.get()
                            key=|option| option.value.clone()
                            children=move |option| {
                                let option_value = option.value.clone();
                                let is_current = {
                                    let option_value = option.value.clone();
                                    move || value.get() == option_value
                                };
                                view! {
                                    <div
                                        class=move || {
                                            if is_current() {
                                                "combobox__option combobox__option--selected"
                                            } else {
                                                "combobox__option"
                                            }
                                        }
                                        on:click=move |_| select(option_value.clone())
                                    >
                                        {option.label}
                                    </div>
                                }
                            }
                        />
                    </div>
                    <div class="combobox__footer">
                        <span>{move || found_label(filtered.with(Vec::len))}</span>
                        <Show when=move || { total_pages.get() > 1 }>
                            <div class="combobox__pager">
                                <button
                                    class="button button--ghost"
                                    disabled=move || state.with(|s| s.page <= 1)
                                    on:click=move |_| go_to(state.with_untracked(|s| s.page) - 1)
                                >
                                    {icon("chevron-left")}
                                </button>
                                <span>
                                    {move || format!("{} / {}", state.with(|s| s.page), total_pages.get())}
                                </span>
                                <button
                                    class="button button--ghost"
                                    disabled=move || { state.with(|s| s.page) >= total_pages.get() }
                                    on:click=move |_| go_to(state.with_untracked(|s| s.page) + 1)
                                >
                                    {icon("chevron-right")}
                                </button>
                            </div>
                        </Show>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: usize) -> Vec<ComboOption> {
        (1..=count)
            .map(|i| ComboOption::new(i.to_string(), format!("Опция {}", i)))
            .collect()
    }

    #[test]
    fn test_filter_is_case_insensitive_on_label() {
        let options = vec![
            ComboOption::new("1", "Электроника"),
            ComboOption::new("2", "Бытовая техника"),
            ComboOption::new("3", "Одежда"),
        ];
        let found = filter_options(&options, "ТЕХ");
        assert_eq!(found, vec![ComboOption::new("2", "Бытовая техника")]);
        assert_eq!(filter_options(&options, "  ").len(), 3);
        assert_eq!(found_label(found.len()), "Найдено: 1");
    }

    #[test]
    fn test_paging() {
        let options = numbered(25);
        assert_eq!(page_count(25, 10), 3);
        assert_eq!(page_count(0, 10), 1);

        let third = page_slice(&options, 3, 10);
        assert_eq!(third.len(), 5);
        assert_eq!(third[0].value, "21");
    }

    #[test]
    fn test_open_jumps_to_page_of_selected_value() {
        let options = numbered(25);
        let mut state = ComboboxState::default();

        state.open(&options, "17", 10);
        assert!(state.is_open);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_open_with_search_keeps_page() {
        let options = numbered(25);
        let mut state = ComboboxState::default();
        state.set_search("Опция".to_string());

        state.open(&options, "17", 10);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_search_resets_page_and_select_closes() {
        let mut state = ComboboxState::default();
        state.set_page(3, 3);
        assert_eq!(state.page, 3);

        state.set_search("опц".to_string());
        assert_eq!(state.page, 1);

        state.is_open = true;
        state.select();
        assert_eq!(state, ComboboxState::default());
    }

    #[test]
    fn test_set_page_is_clamped() {
        let mut state = ComboboxState::default();
        state.set_page(0, 3);
        assert_eq!(state.page, 1);
        state.set_page(9, 3);
        assert_eq!(state.page, 3);
    }
}
