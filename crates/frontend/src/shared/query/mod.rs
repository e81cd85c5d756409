//! Search/pagination controllers
//!
//! Оба контроллера только формируют параметры запроса; сетевые вызовы делают
//! api-модули сущностей.

pub mod debounce;
pub mod request_guard;
pub mod search_select_controller;
pub mod state;
pub mod table_controller;

pub use debounce::{DebouncedSearchInput, Debouncer, SEARCH_DEBOUNCE_MS};
pub use request_guard::{LoadState, RequestGuard, RequestTicket};
pub use search_select_controller::{use_search_select_query, SearchSelectController};
pub use state::{ApiParams, QueryState, DEFAULT_PICKER_PAGE_SIZE, DEFAULT_TABLE_PAGE_SIZE};
pub use table_controller::{use_table_query, use_table_query_with_page_size, TableQueryController};
