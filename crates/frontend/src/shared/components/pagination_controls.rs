use crate::shared::icons::icon;
use leptos::prelude::*;

pub fn prev_disabled(is_loading: bool, current_page: usize) -> bool {
    is_loading || current_page <= 1
}

/// Последняя страница или запрос в полёте
pub fn next_disabled(is_loading: bool, current_page: usize, last_page: usize) -> bool {
    is_loading || current_page >= last_page
}

/// Пагинация списка по ответу сервера (страницы с единицы)
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] last_page: Signal<usize>,
    /// Всего записей, если сервер его вернул
    #[prop(into)]
    total_count: Signal<Option<usize>>,
    on_page_change: Callback<usize>,
    /// Запрос в полёте: кнопки неактивны
    #[prop(optional, into)]
    is_loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get_untracked().saturating_sub(1).max(1))
                disabled=move || prev_disabled(is_loading.get(), current_page.get())
                title="Предыдущая страница"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let page = current_page.get();
                    let last = last_page.get().max(1);
                    match total_count.get() {
                        Some(count) => format!("{} / {} ({})", page, last, count),
                        None => format!("{} / {}", page, last),
                    }
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get_untracked() + 1)
                disabled=move || {
                    next_disabled(is_loading.get(), current_page.get(), last_page.get())
                }
                title="Следующая страница"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
