use super::state::{ApiParams, QueryState, DEFAULT_PICKER_PAGE_SIZE};
use leptos::prelude::*;

/// Контроллер лёгкого пикера: то же состояние, что у таблицы, но только в памяти.
/// Пикер не адресуемый ресурс, в URL он не пишет.
#[derive(Clone, Copy)]
pub struct SearchSelectController {
    pub state: RwSignal<QueryState>,
    pub api_params: Memo<ApiParams>,
}

impl SearchSelectController {
    pub fn new(per_page: usize) -> Self {
        let state = RwSignal::new(QueryState::with_page_size(per_page));
        let api_params = Memo::new(move |_| state.with(|s| s.api_params_with_page_size()));
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

    pub fn set_search(&self, search: String) {
        self.state.maybe_update(|s| s.set_search(search));
    }

    pub fn set_page(&self, page: usize) {
        self.state.update(|s| s.set_page(page));
    }

    pub fn set_sort(&self, sort: Option<String>) {
        self.state.update(|s| s.set_sort(sort));
    }

    pub fn set_filter(&self, filter: Option<String>) {
        self.state.maybe_update(|s| s.set_filter(filter));
    }

    pub fn reset(&self) {
        self.state.update(|s| s.reset());
    }
}

pub fn use_search_select_query() -> SearchSelectController {
    SearchSelectController::new(DEFAULT_PICKER_PAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_change_resets_page_in_params() {
        let owner = Owner::new();
        owner.with(|| {
            let ctrl = SearchSelectController::new(5);
            ctrl.set_page(3);
            assert_eq!(ctrl.api_params.get_untracked().page, 3);

            ctrl.set_search("iva".to_string());
            let params = ctrl.api_params.get_untracked();
            assert_eq!(params.page, 1);
            assert_eq!(params.per_page, Some(5));
            assert_eq!(params.search.as_deref(), Some("iva"));
        });
    }

    #[test]
    fn test_same_search_keeps_page() {
        let owner = Owner::new();
        owner.with(|| {
            let ctrl = SearchSelectController::new(5);
            ctrl.set_search("iva".to_string());
            ctrl.set_page(2);
            ctrl.set_search("iva".to_string());
            assert_eq!(ctrl.api_params.get_untracked().page, 2);
        });
    }
}
