//! Контроллер табличного экрана с синхронизацией в URL
//!
//! Состояние не по умолчанию зеркалируется в адресную строку через
//! `history.replaceState` (без новых записей в истории), так что список можно
//! открыть по ссылке и он переживает перезагрузку.

use super::state::{ApiParams, QueryState, DEFAULT_TABLE_PAGE_SIZE};
use leptos::prelude::*;
use web_sys::window;

#[derive(Clone, Copy)]
pub struct TableQueryController {
    pub state: RwSignal<QueryState>,
    pub api_params: Memo<ApiParams>,
}

impl TableQueryController {
    /// Контроллер без привязки к адресной строке
    pub fn from_state(initial: QueryState) -> Self {
        let state = RwSignal::new(initial);
        let api_params = Memo::new(move |_| state.with(|s| s.api_params()));
        Self { state, api_params }
    }

    pub fn search(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.search.clone()))
    }

    pub fn page(&self) -> Signal<usize> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.page))
    }

    pub fn sort(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.sort.clone()))
    }

    pub fn filter(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.filter.clone()))
    }

    pub fn set_search(&self, search: String) {
        self.state.maybe_update(|s| s.set_search(search));
    }

    pub fn set_page(&self, page: usize) {
        self.state.update(|s| s.set_page(page));
    }

    pub fn set_per_page(&self, per_page: usize) {
        self.state.update(|s| s.set_per_page(per_page));
    }

    pub fn toggle_sort(&self, field: &str) {
        self.state.update(|s| s.toggle_sort(field));
    }

    pub fn set_filter(&self, filter: Option<String>) {
        self.state.maybe_update(|s| s.set_filter(filter));
    }

    pub fn reset(&self) {
        self.state.update(|s| s.reset());
    }
}

fn current_location_query() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

fn replace_location_query(query: &str) {
    let Some(w) = window() else {
        return;
    };
    let location = w.location();
    // Only update URL if it actually changed
    if location.search().unwrap_or_default() == query {
        return;
    }
    let path = location.pathname().unwrap_or_default();
    let new_url = format!("{}{}", path, query);
    if let Ok(history) = w.history() {
        if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url)) {
            log::warn!("table query: replaceState failed: {:?}", e);
        }
    }
}

/// Контроллер с начальным состоянием из текущего URL
pub fn use_table_query() -> TableQueryController {
    use_table_query_with_page_size(DEFAULT_TABLE_PAGE_SIZE)
}

pub fn use_table_query_with_page_size(per_page: usize) -> TableQueryController {
    let initial = QueryState::from_url_query(&current_location_query(), per_page);
    let controller = TableQueryController::from_state(initial);
    let state = controller.state;

    Effect::new(move |_| {
        let query = state.with(|s| s.to_url_query());
        replace_location_query(&query);
    });

    controller
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_change_resets_page_in_params() {
        let owner = Owner::new();
        owner.with(|| {
            let ctrl = TableQueryController::from_state(QueryState::default());
            ctrl.set_page(4);
            assert_eq!(ctrl.api_params.get_untracked().page, 4);

            ctrl.set_search("bolt".to_string());
            let params = ctrl.api_params.get_untracked();
            assert_eq!(params.page, 1);
            assert_eq!(params.per_page, None);
            assert_eq!(params.search.as_deref(), Some("bolt"));
        });
    }

    #[test]
    fn test_filter_change_resets_page_and_sort_survives() {
        let owner = Owner::new();
        owner.with(|| {
            let ctrl = TableQueryController::from_state(QueryState::from_url_query(
                "?page=3&sort=name",
                DEFAULT_TABLE_PAGE_SIZE,
            ));
            assert_eq!(ctrl.page().get_untracked(), 3);

            ctrl.set_filter(Some("category:2".to_string()));
            let params = ctrl.api_params.get_untracked();
            assert_eq!(params.page, 1);
            assert_eq!(params.sort.as_deref(), Some("name"));
            assert_eq!(params.filter.as_deref(), Some("category:2"));
        });
    }
}
