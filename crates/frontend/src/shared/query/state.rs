//! Состояние пагинации/поиска/сортировки одного экрана и параметры запроса к backend-у

use serde::{Deserialize, Serialize};

pub const DEFAULT_TABLE_PAGE_SIZE: usize = 15;
pub const DEFAULT_PICKER_PAGE_SIZE: usize = 10;

/// Параметры списочного запроса в соглашении backend-а
///
/// `None` не попадает в строку запроса: пустой поиск не должен превращаться
/// в `filter[search]=`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiParams {
    pub page: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<usize>,
    #[serde(rename = "filter[search]", skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl ApiParams {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string())];
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page", per_page.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("filter[search]", search.clone()));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        if let Some(filter) = &self.filter {
            pairs.push(("filter", filter.clone()));
        }
        pairs
    }

    /// `page=2&filter[search]=abc` (значения url-кодируются, ключи нет)
    pub fn to_query_string(&self) -> String {
        self.query_pairs()
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(&v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Состояние списка: страница (с 1), размер страницы, поиск, сортировка, фильтр
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub page: usize,
    pub per_page: usize,
    pub search: String,
    pub sort: Option<String>,
    pub filter: Option<String>,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_TABLE_PAGE_SIZE)
    }
}

impl QueryState {
    pub fn with_page_size(per_page: usize) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
            search: String::new(),
            sort: None,
            filter: None,
        }
    }

    /// Новый поиск сбрасывает страницу на первую. Возвращает `false`, если
    /// значение не изменилось.
    pub fn set_search(&mut self, search: impl Into<String>) -> bool {
        let search = search.into();
        if search == self.search {
            return false;
        }
        self.search = search;
        self.page = 1;
        true
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: Option<String>) {
        self.sort = non_empty(sort);
    }

    /// `name` → `-name` → `name`; другое поле начинается по возрастанию
    pub fn toggle_sort(&mut self, field: &str) {
        let next = match self.sort.as_deref() {
            Some(current) if current == field => format!("-{}", field),
            _ => field.to_string(),
        };
        self.sort = Some(next);
    }

    /// Фильтр, как и поиск, меняет набор строк, поэтому тоже сбрасывает страницу
    pub fn set_filter(&mut self, filter: Option<String>) -> bool {
        let filter = non_empty(filter);
        if filter == self.filter {
            return false;
        }
        self.filter = filter;
        self.page = 1;
        true
    }

    pub fn reset(&mut self) {
        *self = Self::with_page_size(self.per_page);
    }

    /// Параметры табличного экрана: без `per_page`, размер страницы задаёт backend
    pub fn api_params(&self) -> ApiParams {
        ApiParams {
            page: self.page,
            per_page: None,
            search: non_empty(Some(self.search.clone())),
            sort: self.sort.clone(),
            filter: self.filter.clone(),
        }
    }

    /// Параметры пикера: с явным размером страницы
    pub fn api_params_with_page_size(&self) -> ApiParams {
        ApiParams {
            per_page: Some(self.per_page),
            ..self.api_params()
        }
    }

    /// `?search=..&page=..&sort=..&filter=..` только для значений не по умолчанию;
    /// пустая строка, если всё по умолчанию
    pub fn to_url_query(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if !self.search.is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        if self.page > 1 {
            pairs.push(("page", self.page.to_string()));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        if let Some(filter) = &self.filter {
            pairs.push(("filter", filter.clone()));
        }
        if pairs.is_empty() {
            return String::new();
        }
        let query = pairs
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(&v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{}", query)
    }

    /// Восстанавливает состояние из `location.search`; мусор и неизвестные
    /// ключи игнорируются
    pub fn from_url_query(query: &str, per_page: usize) -> Self {
        let mut state = Self::with_page_size(per_page);
        let params: UrlQuery = match serde_qs::from_str(query.trim_start_matches('?')) {
            Ok(params) => params,
            Err(e) => {
                log::warn!("query state: ignoring malformed url query {:?}: {}", query, e);
                return state;
            }
        };
        if let Some(search) = params.search {
            state.search = search;
        }
        if let Some(page) = params.page.and_then(|p| p.parse::<usize>().ok()) {
            state.page = page.max(1);
        }
        state.sort = non_empty(params.sort);
        state.filter = non_empty(params.filter);
        state
    }
}

/// Ключи адресной строки, которые принадлежат списку. Остальные параметры
/// (`utm[source]`, `tab`) пропускаются при разборе.
#[derive(Debug, Deserialize)]
struct UrlQuery {
    search: Option<String>,
    page: Option<String>,
    sort: Option<String>,
    filter: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_resets_page() {
        let mut state = QueryState::default();
        state.set_page(4);
        assert!(state.set_search("bolt"));
        assert_eq!(state.api_params().page, 1);

        state.set_page(3);
        assert!(!state.set_search("bolt"));
        assert_eq!(state.api_params().page, 3);
    }

    #[test]
    fn test_filter_resets_page() {
        let mut state = QueryState::default();
        state.set_page(2);
        assert!(state.set_filter(Some("category:3".into())));
        assert_eq!(state.page, 1);
        state.set_page(2);
        assert!(!state.set_filter(Some("category:3".into())));
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_api_params_omit_empty_values() {
        let state = QueryState::default();
        let params = state.api_params();
        assert_eq!(params.search, None);
        assert_eq!(params.to_query_string(), "page=1");

        let mut state = QueryState::default();
        state.set_search("  ");
        assert_eq!(state.api_params().search, None);
    }

    #[test]
    fn test_api_params_shape() {
        let mut state = QueryState::with_page_size(10);
        state.set_search("acme ltd");
        state.toggle_sort("name");
        state.toggle_sort("name");
        state.set_page(2);

        let params = state.api_params();
        assert_eq!(params.search.as_deref(), Some("acme ltd"));
        assert_eq!(params.sort.as_deref(), Some("-name"));
        assert_eq!(params.per_page, None);
        assert_eq!(
            params.to_query_string(),
            "page=2&filter[search]=acme%20ltd&sort=-name"
        );

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["filter[search]"], "acme ltd");
        assert!(json.get("filter").is_none());

        assert_eq!(state.api_params_with_page_size().per_page, Some(10));
    }

    #[test]
    fn test_url_query_omits_defaults() {
        assert_eq!(QueryState::default().to_url_query(), "");

        let mut state = QueryState::default();
        state.set_search("bolt");
        assert_eq!(state.to_url_query(), "?search=bolt");

        state.set_page(3);
        state.set_sort(Some("name".into()));
        assert_eq!(state.to_url_query(), "?search=bolt&page=3&sort=name");
    }

    #[test]
    fn test_url_query_round_trip() {
        let mut state = QueryState::default();
        state.set_search("steel pipe");
        state.set_page(5);
        state.set_sort(Some("-created_at".into()));
        state.set_filter(Some("active".into()));
        state.set_page(5);

        let restored = QueryState::from_url_query(&state.to_url_query(), DEFAULT_TABLE_PAGE_SIZE);
        assert_eq!(restored, state);
    }

    #[test]
    fn test_from_url_query_ignores_garbage() {
        let state = QueryState::from_url_query("?page=abc&active=tab1", 20);
        assert_eq!(state, QueryState::with_page_size(20));

        let state = QueryState::from_url_query("?page=0", 20);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_from_url_query_keeps_state_next_to_foreign_params() {
        let state =
            QueryState::from_url_query("?search=bolt&page=3&utm[source]=x&utm[medium]=mail", 15);
        assert_eq!(state.search, "bolt");
        assert_eq!(state.page, 3);

        let state = QueryState::from_url_query("?ref=promo&sort=-name&filter=active", 15);
        assert_eq!(state.sort.as_deref(), Some("-name"));
        assert_eq!(state.filter.as_deref(), Some("active"));
    }
}
