//! Проекция области выбора на отрисованную страницу
//!
//! Состояние чекбокса заголовка считается только по отрисованной странице:
//! строки, выбранные на другой странице, в него не входят. Сам чекбокс
//! заголовка работает со всей областью. Включение заменяет выбор строками
//! страницы, выключение очищает область, и в обоих случаях выбор с других
//! страниц теряется. Переключение отдельных строк его не трогает.

use crate::shared::selection::{
    RowId, ScopeKey, SelectedEntry, SelectionError, SelectionMode, SelectionStore,
};
use std::collections::HashSet;
use std::sync::Arc;

/// Состояние чекбокса в заголовке таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckState {
    Unchecked,
    Indeterminate,
    Checked,
}

/// Привязка списка к области выбора
pub struct SelectionBinding<T> {
    pub scope: ScopeKey,
    pub mode: SelectionMode,
    pub get_row_id: Arc<dyn Fn(&T) -> RowId + Send + Sync>,
}

impl<T> Clone for SelectionBinding<T> {
    fn clone(&self) -> Self {
        Self {
            scope: self.scope.clone(),
            mode: self.mode,
            get_row_id: Arc::clone(&self.get_row_id),
        }
    }
}

impl<T> SelectionBinding<T> {
    pub fn new(scope: ScopeKey, get_row_id: impl Fn(&T) -> RowId + Send + Sync + 'static) -> Self {
        Self {
            scope,
            mode: SelectionMode::Multiple,
            get_row_id: Arc::new(get_row_id),
        }
    }

    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Строки текущей страницы, которые есть в области
pub fn selected_subset<T: Clone>(
    items: &[T],
    selected: &[RowId],
    get_row_id: impl Fn(&T) -> RowId,
) -> Vec<T> {
    let selected: HashSet<&RowId> = selected.iter().collect();
    items
        .iter()
        .filter(|item| selected.contains(&get_row_id(*item)))
        .cloned()
        .collect()
}

pub fn header_check_state(rendered: usize, selected_on_page: usize) -> HeaderCheckState {
    if rendered == 0 || selected_on_page == 0 {
        HeaderCheckState::Unchecked
    } else if selected_on_page >= rendered {
        HeaderCheckState::Checked
    } else {
        HeaderCheckState::Indeterminate
    }
}

pub fn select_all_enabled(mode: SelectionMode) -> bool {
    mode == SelectionMode::Multiple
}

/// Клик по строке: в `Single` работает как радиокнопка, в `Multiple` переключает строку
pub fn apply_row_toggle(
    store: &mut SelectionStore,
    scope: &ScopeKey,
    mode: SelectionMode,
    entry: SelectedEntry,
) -> Result<(), SelectionError> {
    match mode {
        SelectionMode::Single => store.select_single(scope, entry),
        SelectionMode::Multiple => store.toggle(scope, entry),
    }
}

/// Чекбокс заголовка: включение заменяет выбор строками страницы, выключение очищает
pub fn apply_select_all(
    store: &mut SelectionStore,
    scope: &ScopeKey,
    mode: SelectionMode,
    page_entries: Vec<SelectedEntry>,
    checked: bool,
) -> Result<(), SelectionError> {
    if !select_all_enabled(mode) {
        return Ok(());
    }
    if checked {
        store.replace_all(scope, page_entries)
    } else {
        store.clear_scope(scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
    }

    fn rows(ids: &[i64]) -> Vec<Row> {
        ids.iter().map(|&id| Row { id }).collect()
    }

    fn entry(row: &Row) -> SelectedEntry {
        SelectedEntry::new(row.id, json!({ "id": row.id }))
    }

    fn page_state(store: &SelectionStore, scope: &ScopeKey, page: &[Row]) -> HeaderCheckState {
        let selected = store.selected_ids(scope);
        let subset = selected_subset(page, &selected, |r| RowId::from(r.id));
        header_check_state(page.len(), subset.len())
    }

    fn id_strings(store: &SelectionStore, scope: &ScopeKey) -> Vec<String> {
        store
            .selected_ids(scope)
            .iter()
            .map(|id| id.to_string())
            .collect()
    }

    #[test]
    fn test_header_state() {
        assert_eq!(header_check_state(0, 0), HeaderCheckState::Unchecked);
        assert_eq!(header_check_state(3, 0), HeaderCheckState::Unchecked);
        assert_eq!(header_check_state(3, 1), HeaderCheckState::Indeterminate);
        assert_eq!(header_check_state(3, 3), HeaderCheckState::Checked);
    }

    #[test]
    fn test_selected_subset_compares_canonical_ids() {
        let page = rows(&[1, 2, 3]);
        let selected = vec![RowId::from("2"), RowId::from("99")];
        let subset = selected_subset(&page, &selected, |r| RowId::from(r.id));
        assert_eq!(subset, rows(&[2]));
    }

    #[test]
    fn test_select_all_round_trip() {
        let mut store = SelectionStore::new();
        let scope = ScopeKey::from_static("customers");
        store.init_scope(&scope, SelectionMode::Multiple);
        let page = rows(&[10, 20, 30, 40]);
        let entries: Vec<_> = page.iter().map(entry).collect();

        apply_select_all(&mut store, &scope, SelectionMode::Multiple, entries.clone(), true)
            .unwrap();
        assert_eq!(id_strings(&store, &scope), vec!["10", "20", "30", "40"]);
        assert_eq!(page_state(&store, &scope, &page), HeaderCheckState::Checked);

        apply_select_all(&mut store, &scope, SelectionMode::Multiple, entries, false).unwrap();
        assert!(store.selected_ids(&scope).is_empty());
        assert_eq!(page_state(&store, &scope, &page), HeaderCheckState::Unchecked);
    }

    #[test]
    fn test_select_all_disabled_in_single_mode() {
        let mut store = SelectionStore::new();
        let scope = ScopeKey::from_static("radio");
        store.init_scope(&scope, SelectionMode::Single);
        let page = rows(&[1, 2]);
        let entries: Vec<_> = page.iter().map(entry).collect();

        assert!(!select_all_enabled(SelectionMode::Single));
        apply_select_all(&mut store, &scope, SelectionMode::Single, entries, true).unwrap();
        assert!(store.selected_ids(&scope).is_empty());
    }

    #[test]
    fn test_scenario_c_select_all_then_uncheck_row() {
        let mut store = SelectionStore::new();
        let scope = ScopeKey::from_static("scenario-c");
        store.init_scope(&scope, SelectionMode::Multiple);
        let page = rows(&[1, 2, 3]);
        let entries: Vec<_> = page.iter().map(entry).collect();

        apply_select_all(&mut store, &scope, SelectionMode::Multiple, entries, true).unwrap();
        assert_eq!(id_strings(&store, &scope), vec!["1", "2", "3"]);

        apply_row_toggle(&mut store, &scope, SelectionMode::Multiple, entry(&page[1])).unwrap();
        assert_eq!(id_strings(&store, &scope), vec!["1", "3"]);
        assert_eq!(page_state(&store, &scope, &page), HeaderCheckState::Indeterminate);
    }

    #[test]
    fn test_row_toggle_in_single_mode_acts_as_radio() {
        let mut store = SelectionStore::new();
        let scope = ScopeKey::from_static("warehouse-default");
        store.init_scope(&scope, SelectionMode::Single);
        let page = rows(&[1, 2]);

        apply_row_toggle(&mut store, &scope, SelectionMode::Single, entry(&page[0])).unwrap();
        apply_row_toggle(&mut store, &scope, SelectionMode::Single, entry(&page[1])).unwrap();
        assert_eq!(id_strings(&store, &scope), vec!["2"]);

        // повторный клик по выбранной строке не снимает выбор
        apply_row_toggle(&mut store, &scope, SelectionMode::Single, entry(&page[1])).unwrap();
        assert_eq!(id_strings(&store, &scope), vec!["2"]);
    }

    #[test]
    fn test_select_all_is_page_scoped() {
        let mut store = SelectionStore::new();
        let scope = ScopeKey::from_static("paged");
        store.init_scope(&scope, SelectionMode::Multiple);
        let page_one = rows(&[1, 2]);
        let page_two = rows(&[3, 4]);

        let entries: Vec<_> = page_one.iter().map(entry).collect();
        apply_select_all(&mut store, &scope, SelectionMode::Multiple, entries, true).unwrap();

        // на второй странице ничего не отмечено, но выбор первой остался в области
        assert_eq!(page_state(&store, &scope, &page_two), HeaderCheckState::Unchecked);
        assert_eq!(id_strings(&store, &scope), vec!["1", "2"]);
        assert_eq!(page_state(&store, &scope, &page_one), HeaderCheckState::Checked);
    }

    #[test]
    fn test_select_all_evicts_rows_from_other_pages() {
        let mut store = SelectionStore::new();
        let scope = ScopeKey::from_static("paged-evict");
        store.init_scope(&scope, SelectionMode::Multiple);
        let page_one = rows(&[1, 2, 3]);
        let page_two = rows(&[4, 5]);

        apply_row_toggle(&mut store, &scope, SelectionMode::Multiple, entry(&page_one[0])).unwrap();
        apply_row_toggle(&mut store, &scope, SelectionMode::Multiple, entry(&page_one[2])).unwrap();

        // переключение строки на второй странице выбор первой не трогает
        apply_row_toggle(&mut store, &scope, SelectionMode::Multiple, entry(&page_two[0])).unwrap();
        assert_eq!(id_strings(&store, &scope), vec!["1", "3", "4"]);

        let entries: Vec<_> = page_two.iter().map(entry).collect();
        apply_select_all(&mut store, &scope, SelectionMode::Multiple, entries.clone(), true)
            .unwrap();
        assert_eq!(id_strings(&store, &scope), vec!["4", "5"]);
        assert_eq!(page_state(&store, &scope, &page_one), HeaderCheckState::Unchecked);

        apply_row_toggle(&mut store, &scope, SelectionMode::Multiple, entry(&page_one[1])).unwrap();
        apply_select_all(&mut store, &scope, SelectionMode::Multiple, entries, false).unwrap();
        assert!(store.selected_ids(&scope).is_empty());
    }
}
