use super::keys::{RowId, ScopeKey};
use super::scope::{SelectedEntry, SelectionMode, SelectionScope};
use serde::Serialize;
use std::collections::HashMap;

/// Что делать с записью в область, для которой не было `init_scope`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitPolicy {
    /// Запись отклоняется с [`SelectionError::ScopeNotInitialized`]
    #[default]
    Strict,
    /// Область создаётся в режиме `Multiple` (для прототипов)
    AutoInit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("selection scope '{0}' is not initialized")]
    ScopeNotInitialized(ScopeKey),
}

/// Хранилище всех областей выбора сессии
///
/// Каждая операция переводит хранилище из одного валидного состояния в другое:
/// некорректный ввод (второй id в режиме `Single`) не отклоняется,
/// а приводится к допустимому состоянию заменой.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SelectionStore {
    scopes: HashMap<ScopeKey, SelectionScope>,
    #[serde(skip)]
    policy: InitPolicy,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: InitPolicy) -> Self {
        Self {
            scopes: HashMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> InitPolicy {
        self.policy
    }

    fn scope_mut(&mut self, key: &ScopeKey) -> Result<&mut SelectionScope, SelectionError> {
        match self.policy {
            InitPolicy::Strict => self
                .scopes
                .get_mut(key)
                .ok_or_else(|| SelectionError::ScopeNotInitialized(key.clone())),
            InitPolicy::AutoInit => Ok(self
                .scopes
                .entry(key.clone())
                .or_insert_with(|| SelectionScope::new(SelectionMode::Multiple))),
        }
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    /// Создаёт область, если её нет. Для существующей области с другим
    /// режимом только переключает режим, выбор не сбрасывается.
    pub fn init_scope(&mut self, key: &ScopeKey, mode: SelectionMode) {
        match self.scopes.get_mut(key) {
            Some(scope) => {
                if scope.mode() != mode {
                    scope.set_mode(mode);
                }
            }
            None => {
                self.scopes.insert(key.clone(), SelectionScope::new(mode));
            }
        }
    }

    /// Переключает режим. При переходе в `Single` лишние id отбрасываются
    /// сразу, остаётся последний выбранный.
    pub fn set_mode(&mut self, key: &ScopeKey, mode: SelectionMode) -> Result<(), SelectionError> {
        self.scope_mut(key)?.set_mode(mode);
        Ok(())
    }

    pub fn toggle(&mut self, key: &ScopeKey, entry: SelectedEntry) -> Result<(), SelectionError> {
        let scope = self.scope_mut(key)?;
        if scope.contains(&entry.id) {
            scope.remove(&entry.id);
        } else if scope.mode() == SelectionMode::Single {
            scope.replace_with([entry]);
        } else {
            scope.upsert(entry);
        }
        Ok(())
    }

    /// Ровно одна выбранная строка, независимо от режима области
    pub fn select_single(&mut self, key: &ScopeKey, entry: SelectedEntry) -> Result<(), SelectionError> {
        self.scope_mut(key)?.replace_with([entry]);
        Ok(())
    }

    /// Объединение без дублей: новые id добавляются в конец, у уже выбранных
    /// обновляется только снимок. В режиме `Single` остаётся последняя запись пачки.
    pub fn add_many(
        &mut self,
        key: &ScopeKey,
        entries: impl IntoIterator<Item = SelectedEntry>,
    ) -> Result<(), SelectionError> {
        let scope = self.scope_mut(key)?;
        match scope.mode() {
            SelectionMode::Single => {
                if let Some(last) = entries.into_iter().last() {
                    scope.replace_with([last]);
                }
            }
            SelectionMode::Multiple => {
                for entry in entries {
                    scope.upsert(entry);
                }
            }
        }
        Ok(())
    }

    /// Полная замена выбора (используется "выбрать все")
    pub fn replace_all(
        &mut self,
        key: &ScopeKey,
        entries: impl IntoIterator<Item = SelectedEntry>,
    ) -> Result<(), SelectionError> {
        let scope = self.scope_mut(key)?;
        match scope.mode() {
            SelectionMode::Single => {
                let last = entries.into_iter().last();
                scope.replace_with(last);
            }
            SelectionMode::Multiple => scope.replace_with(entries),
        }
        Ok(())
    }

    pub fn remove(&mut self, key: &ScopeKey, id: &RowId) -> Result<bool, SelectionError> {
        Ok(self.scope_mut(key)?.remove(id))
    }

    /// Очищает выбор, режим области сохраняется
    pub fn clear_scope(&mut self, key: &ScopeKey) -> Result<(), SelectionError> {
        self.scope_mut(key)?.clear();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Selectors
    // ------------------------------------------------------------------

    pub fn is_initialized(&self, key: &ScopeKey) -> bool {
        self.scopes.contains_key(key)
    }

    pub fn get_scope(&self, key: &ScopeKey) -> Option<&SelectionScope> {
        self.scopes.get(key)
    }

    /// Область по ключу; неинициализированная читается как пустая `Multiple`
    pub fn scope(&self, key: &ScopeKey) -> SelectionScope {
        self.scopes.get(key).cloned().unwrap_or_default()
    }

    pub fn mode(&self, key: &ScopeKey) -> SelectionMode {
        self.scopes.get(key).map(|s| s.mode()).unwrap_or_default()
    }

    pub fn selected_ids(&self, key: &ScopeKey) -> Vec<RowId> {
        self.scopes
            .get(key)
            .map(|s| s.ids().to_vec())
            .unwrap_or_default()
    }

    pub fn selected_items(&self, key: &ScopeKey) -> Vec<SelectedEntry> {
        self.scopes.get(key).map(|s| s.items()).unwrap_or_default()
    }

    pub fn is_selected(&self, key: &ScopeKey, id: &RowId) -> bool {
        self.scopes.get(key).is_some_and(|s| s.contains(id))
    }

    /// Сколько строк выбрано во всех областях вместе
    pub fn total_selected(&self) -> usize {
        self.scopes.values().map(SelectionScope::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    fn key(name: &'static str) -> ScopeKey {
        ScopeKey::from_static(name)
    }

    fn entry(id: &str) -> SelectedEntry {
        SelectedEntry::new(id, json!({ "id": id }))
    }

    fn ids(store: &SelectionStore, k: &ScopeKey) -> Vec<String> {
        store
            .selected_ids(k)
            .into_iter()
            .map(|id| id.as_str().to_string())
            .collect()
    }

    fn assert_consistent(store: &SelectionStore, k: &ScopeKey) {
        let scope = store.scope(k);
        let from_ids: HashSet<&RowId> = scope.ids().iter().collect();
        let from_entries: HashSet<&RowId> = scope.entries().keys().collect();
        assert_eq!(from_ids.len(), scope.ids().len(), "duplicate ids");
        assert_eq!(from_ids, from_entries);
    }

    #[test]
    fn test_uninitialized_scope_reads_as_empty_multiple() {
        let store = SelectionStore::new();
        let k = key("nothing");
        assert!(!store.is_initialized(&k));
        assert_eq!(store.mode(&k), SelectionMode::Multiple);
        assert!(store.selected_ids(&k).is_empty());
        assert!(store.selected_items(&k).is_empty());
    }

    #[test]
    fn test_strict_policy_rejects_write_before_init() {
        let mut store = SelectionStore::new();
        let k = key("typo");
        let err = store.toggle(&k, entry("1")).unwrap_err();
        assert_eq!(err, SelectionError::ScopeNotInitialized(k.clone()));
        assert!(store.clear_scope(&k).is_err());
        assert!(store.add_many(&k, [entry("1")]).is_err());
        assert!(!store.is_initialized(&k));
    }

    #[test]
    fn test_auto_init_policy_creates_multiple_scope() {
        let mut store = SelectionStore::with_policy(InitPolicy::AutoInit);
        let k = key("proto");
        store.toggle(&k, entry("1")).unwrap();
        store.toggle(&k, entry("2")).unwrap();
        assert_eq!(store.mode(&k), SelectionMode::Multiple);
        assert_eq!(ids(&store, &k), vec!["1", "2"]);
    }

    #[test]
    fn test_init_scope_is_idempotent_and_keeps_selection() {
        let mut store = SelectionStore::new();
        let k = key("customers");
        store.init_scope(&k, SelectionMode::Multiple);
        store.toggle(&k, entry("1")).unwrap();
        let before = store.clone();
        store.init_scope(&k, SelectionMode::Multiple);
        assert_eq!(store, before);
    }

    #[test]
    fn test_toggle_twice_is_noop() {
        let mut store = SelectionStore::new();
        let k = key("users");
        store.init_scope(&k, SelectionMode::Multiple);
        store.toggle(&k, entry("a")).unwrap();
        store.toggle(&k, entry("b")).unwrap();

        let before = store.clone();
        store.toggle(&k, entry("c")).unwrap();
        store.toggle(&k, entry("c")).unwrap();
        assert_eq!(store, before);

        store.toggle(&k, entry("a")).unwrap();
        store.toggle(&k, entry("a")).unwrap();
        // "a" вернулся, но уже в конец списка
        assert_eq!(ids(&store, &k), vec!["b", "a"]);
    }

    #[test]
    fn test_single_mode_cardinality() {
        let mut store = SelectionStore::new();
        let k = key("radio");
        store.init_scope(&k, SelectionMode::Single);

        for step in 0..30 {
            let id = format!("{}", step % 7);
            match step % 4 {
                0 => store.toggle(&k, entry(&id)).unwrap(),
                1 => store
                    .add_many(&k, [entry(&id), entry("x"), entry("y")])
                    .unwrap(),
                2 => store.select_single(&k, entry(&id)).unwrap(),
                _ => store.replace_all(&k, [entry("p"), entry(&id)]).unwrap(),
            }
            assert!(store.selected_ids(&k).len() <= 1, "step {}", step);
            assert_consistent(&store, &k);
        }
    }

    #[test]
    fn test_single_mode_toggle_replaces() {
        let mut store = SelectionStore::new();
        let k = key("radio");
        store.init_scope(&k, SelectionMode::Single);
        store.toggle(&k, entry("a")).unwrap();
        store.toggle(&k, entry("b")).unwrap();
        assert_eq!(ids(&store, &k), vec!["b"]);
        assert!(store.scope(&k).payload(&RowId::from("a")).is_none());
        store.toggle(&k, entry("b")).unwrap();
        assert!(store.selected_ids(&k).is_empty());
    }

    #[test]
    fn test_add_many_preserves_first_selection_order() {
        let mut store = SelectionStore::new();
        let k = key("bulk");
        store.init_scope(&k, SelectionMode::Multiple);
        store
            .add_many(&k, [entry("a"), entry("b"), entry("c")])
            .unwrap();
        store
            .add_many(
                &k,
                [SelectedEntry::new("b", json!({ "id": "b", "v": 2 })), entry("d")],
            )
            .unwrap();

        assert_eq!(ids(&store, &k), vec!["a", "b", "c", "d"]);
        assert_eq!(
            store.scope(&k).payload(&RowId::from("b")),
            Some(&json!({ "id": "b", "v": 2 }))
        );
        assert_consistent(&store, &k);
    }

    #[test]
    fn test_consistency_after_mixed_operations() {
        let mut store = SelectionStore::new();
        let k = key("mixed");
        store.init_scope(&k, SelectionMode::Multiple);
        store.add_many(&k, [entry("1"), entry("2"), entry("3")]).unwrap();
        store.toggle(&k, entry("2")).unwrap();
        store.remove(&k, &RowId::from("3")).unwrap();
        store.replace_all(&k, [entry("4"), entry("4"), entry("5")]).unwrap();
        store.select_single(&k, entry("6")).unwrap();
        store.add_many(&k, [entry("7"), entry("6")]).unwrap();
        assert_eq!(ids(&store, &k), vec!["6", "7"]);
        assert_consistent(&store, &k);
    }

    #[test]
    fn test_clear_preserves_mode() {
        let mut store = SelectionStore::new();
        let k = key("radio");
        store.init_scope(&k, SelectionMode::Single);
        store.select_single(&k, entry("a")).unwrap();
        store.clear_scope(&k).unwrap();
        assert!(store.selected_ids(&k).is_empty());
        assert!(store.scope(&k).entries().is_empty());
        assert_eq!(store.mode(&k), SelectionMode::Single);
        assert!(store.is_initialized(&k));
    }

    #[test]
    fn test_set_mode_single_truncates_to_most_recent() {
        let mut store = SelectionStore::new();
        let k = key("switch");
        store.init_scope(&k, SelectionMode::Multiple);
        store.add_many(&k, [entry("a"), entry("b"), entry("c")]).unwrap();
        store.set_mode(&k, SelectionMode::Single).unwrap();
        assert_eq!(ids(&store, &k), vec!["c"]);
        assert_consistent(&store, &k);

        // обратно в Multiple: ничего не теряется и не восстанавливается
        store.set_mode(&k, SelectionMode::Multiple).unwrap();
        assert_eq!(ids(&store, &k), vec!["c"]);
    }

    #[test]
    fn test_init_scope_with_new_mode_switches_without_clearing() {
        let mut store = SelectionStore::new();
        let k = key("switch");
        store.init_scope(&k, SelectionMode::Multiple);
        store.add_many(&k, [entry("a"), entry("b")]).unwrap();
        store.init_scope(&k, SelectionMode::Single);
        assert_eq!(store.mode(&k), SelectionMode::Single);
        assert_eq!(ids(&store, &k), vec!["b"]);
    }

    #[test]
    fn test_scenario_a_multiple_toggles() {
        let mut store = SelectionStore::new();
        let k = key("users");
        store.init_scope(&k, SelectionMode::Multiple);
        store.toggle(&k, entry("1")).unwrap();
        store.toggle(&k, entry("2")).unwrap();
        assert_eq!(ids(&store, &k), vec!["1", "2"]);
        store.toggle(&k, entry("1")).unwrap();
        assert_eq!(ids(&store, &k), vec!["2"]);
    }

    #[test]
    fn test_scenario_b_select_single() {
        let mut store = SelectionStore::new();
        let k = key("radio");
        store.init_scope(&k, SelectionMode::Single);
        store.select_single(&k, entry("a")).unwrap();
        store.select_single(&k, entry("b")).unwrap();
        assert_eq!(ids(&store, &k), vec!["b"]);
    }

    #[test]
    fn test_select_single_ignores_multiple_mode() {
        let mut store = SelectionStore::new();
        let k = key("picker");
        store.init_scope(&k, SelectionMode::Multiple);
        store.add_many(&k, [entry("a"), entry("b")]).unwrap();
        store.select_single(&k, entry("c")).unwrap();
        assert_eq!(ids(&store, &k), vec!["c"]);
        assert_eq!(store.mode(&k), SelectionMode::Multiple);
    }

    #[test]
    fn test_scopes_are_isolated() {
        let mut store = SelectionStore::new();
        let customers = key("customers");
        let modal = ScopeKey::namespaced("user-selection-modal", 1);
        store.init_scope(&customers, SelectionMode::Multiple);
        store.init_scope(&modal, SelectionMode::Multiple);
        store.toggle(&customers, entry("1")).unwrap();
        store.toggle(&modal, entry("2")).unwrap();
        store.clear_scope(&customers).unwrap();
        assert!(store.selected_ids(&customers).is_empty());
        assert_eq!(ids(&store, &modal), vec!["2"]);
    }

    #[test]
    fn test_payload_round_trips_typed_entity() {
        #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
        struct Row {
            id: i64,
            name: String,
        }

        let mut store = SelectionStore::new();
        let k = key("typed");
        store.init_scope(&k, SelectionMode::Multiple);
        let row = Row {
            id: 5,
            name: "Склад".into(),
        };
        store
            .toggle(&k, SelectedEntry::from_item(row.id, &row))
            .unwrap();

        assert!(store.is_selected(&k, &RowId::from("5")));
        let items = store.selected_items(&k);
        assert_eq!(items[0].payload_as::<Row>(), Some(row));
    }

    #[test]
    fn test_total_selected_spans_scopes() {
        let mut store = SelectionStore::new();
        let a = key("a");
        let b = key("b");
        store.init_scope(&a, SelectionMode::Multiple);
        store.init_scope(&b, SelectionMode::Single);
        store.add_many(&a, vec![entry("1"), entry("2")]).unwrap();
        store.select_single(&b, entry("9")).unwrap();

        assert_eq!(store.total_selected(), 3);
        store.clear_scope(&a).unwrap();
        assert_eq!(store.total_selected(), 1);
    }
}
