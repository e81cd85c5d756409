//! Список с переключением таблица/карточки и выбором строк через хранилище выбора

pub mod binder;
pub mod columns;
pub mod component;

pub use binder::{
    apply_row_toggle, apply_select_all, header_check_state, select_all_enabled, selected_subset,
    HeaderCheckState, SelectionBinding,
};
pub use columns::{card_renderer, CardRenderer, ColumnDef};
pub use component::{ColumnSort, ToggleableList};
