//! Сортируемая ячейка заголовка
//!
//! Сортировка задаётся строкой в соглашении backend-а: `name` сортирует по
//! возрастанию, `-name` по убыванию.

use leptos::prelude::*;
use thaw::*;

/// Индикатор для колонки `field` при текущей сортировке `sort`
pub fn sort_indicator(sort: Option<&str>, field: &str) -> &'static str {
    match sort {
        Some(s) if s == field => " ▲",
        Some(s) if s.strip_prefix('-') == Some(field) => " ▼",
        _ => " ⇅",
    }
}

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    field: &'static str,

    #[prop(into)]
    sort: Signal<Option<String>>,

    on_sort: Callback<String>,
) -> impl IntoView {
    let is_active = move || {
        sort.with(|s| s.as_deref().map(|s| s.trim_start_matches('-')) == Some(field))
    };

    view! {
        <TableHeaderCell resizable=false>
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| on_sort.run(field.to_string())
            >
                {label}
                <span class=move || if is_active() { "table__sort-icon table__sort-icon--active" } else { "table__sort-icon" }>
                    {move || sort.with(|s| sort_indicator(s.as_deref(), field))}
                </span>
            </div>
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(sort_indicator(Some("name"), "name"), " ▲");
        assert_eq!(sort_indicator(Some("-name"), "name"), " ▼");
        assert_eq!(sort_indicator(Some("-email"), "name"), " ⇅");
        assert_eq!(sort_indicator(None, "name"), " ⇅");
    }
}
