//! Реактивная обёртка над [`SelectionStore`]
//!
//! Хранилище создаётся один раз в корне приложения и раздаётся через контекст.
//! Ошибки операций (запись в неинициализированную область) логируются и
//! поглощаются: выбор строк не должен ронять экран списка.

use super::keys::{RowId, ScopeKey};
use super::scope::{SelectedEntry, SelectionMode, SelectionScope};
use super::store::{InitPolicy, SelectionError, SelectionStore};
use leptos::prelude::*;
use serde::de::DeserializeOwned;

#[derive(Clone, Copy)]
pub struct SelectionContext {
    store: RwSignal<SelectionStore>,
}

impl SelectionContext {
    pub fn new(store: SelectionStore) -> Self {
        Self {
            store: RwSignal::new(store),
        }
    }

    /// Применяет операцию к хранилищу. Подписчики уведомляются только при успехе.
    pub fn dispatch<F>(&self, action: &str, op: F)
    where
        F: FnOnce(&mut SelectionStore) -> Result<(), SelectionError>,
    {
        self.store.maybe_update(|store| match op(store) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("selection {}: {}", action, e);
                false
            }
        });
    }

    pub fn init_scope(&self, key: &ScopeKey, mode: SelectionMode) {
        let needs_update = self.store.with_untracked(|store| {
            store.get_scope(key).map(|s| s.mode()) != Some(mode)
        });
        if needs_update {
            log::debug!("selection: init scope '{}' as {:?}", key, mode);
            self.store.update(|store| store.init_scope(key, mode));
        }
    }

    pub fn set_mode(&self, key: &ScopeKey, mode: SelectionMode) {
        self.dispatch("set_mode", |store| store.set_mode(key, mode));
    }

    pub fn toggle(&self, key: &ScopeKey, entry: SelectedEntry) {
        self.dispatch("toggle", |store| store.toggle(key, entry));
    }

    pub fn select_single(&self, key: &ScopeKey, entry: SelectedEntry) {
        self.dispatch("select_single", |store| store.select_single(key, entry));
    }

    pub fn add_many(&self, key: &ScopeKey, entries: Vec<SelectedEntry>) {
        self.dispatch("add_many", |store| store.add_many(key, entries));
    }

    pub fn replace_all(&self, key: &ScopeKey, entries: Vec<SelectedEntry>) {
        self.dispatch("replace_all", |store| store.replace_all(key, entries));
    }

    pub fn remove(&self, key: &ScopeKey, id: &RowId) {
        self.dispatch("remove", |store| store.remove(key, id).map(|_| ()));
    }

    pub fn clear_scope(&self, key: &ScopeKey) {
        self.dispatch("clear_scope", |store| store.clear_scope(key));
    }

    pub fn scope(&self, key: ScopeKey) -> Signal<SelectionScope> {
        let store = self.store;
        Signal::derive(move || store.with(|s| s.scope(&key)))
    }

    pub fn mode(&self, key: ScopeKey) -> Signal<SelectionMode> {
        let store = self.store;
        Signal::derive(move || store.with(|s| s.mode(&key)))
    }

    pub fn selected_ids(&self, key: ScopeKey) -> Signal<Vec<RowId>> {
        let store = self.store;
        Signal::derive(move || store.with(|s| s.selected_ids(&key)))
    }

    pub fn selected_items(&self, key: ScopeKey) -> Signal<Vec<SelectedEntry>> {
        let store = self.store;
        Signal::derive(move || store.with(|s| s.selected_items(&key)))
    }

    /// Снимки выбранных строк, восстановленные в исходный тип
    pub fn selected_payloads<T>(&self, key: ScopeKey) -> Signal<Vec<T>>
    where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        let store = self.store;
        Signal::derive(move || {
            store.with(|s| {
                s.selected_items(&key)
                    .iter()
                    .filter_map(|entry| entry.payload_as::<T>())
                    .collect()
            })
        })
    }

    pub fn selected_count(&self, key: ScopeKey) -> Signal<usize> {
        let store = self.store;
        Signal::derive(move || store.with(|s| s.get_scope(&key).map(|sc| sc.len()).unwrap_or(0)))
    }

    pub fn total_selected(&self) -> Signal<usize> {
        let store = self.store;
        Signal::derive(move || store.with(SelectionStore::total_selected))
    }
}

/// Создаёт хранилище и кладёт его в контекст
pub fn provide_selection_store(policy: InitPolicy) -> SelectionContext {
    let ctx = SelectionContext::new(SelectionStore::with_policy(policy));
    provide_context(ctx);
    ctx
}

pub fn use_selection() -> SelectionContext {
    use_context::<SelectionContext>()
        .expect("SelectionContext not found. Call provide_selection_store() in App.")
}
