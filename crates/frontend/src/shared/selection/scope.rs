use super::keys::RowId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Сколько строк может быть выбрано в области одновременно
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    Single,
    #[default]
    Multiple,
}

/// Выбранная строка вместе со снимком сущности на момент выбора
///
/// Снимок нужен, чтобы показывать выбранное (чипы, панель массовых действий),
/// когда строка уже ушла с текущей страницы.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedEntry {
    pub id: RowId,
    pub payload: Value,
}

impl SelectedEntry {
    pub fn new(id: impl Into<RowId>, payload: Value) -> Self {
        Self {
            id: id.into(),
            payload,
        }
    }

    /// Снимок произвольной сериализуемой сущности
    pub fn from_item<T: Serialize + ?Sized>(id: impl Into<RowId>, item: &T) -> Self {
        let id = id.into();
        let payload = serde_json::to_value(item).unwrap_or_else(|e| {
            log::warn!("selection: failed to snapshot row {}: {}", id, e);
            Value::Null
        });
        Self { id, payload }
    }

    pub fn payload_as<T: DeserializeOwned>(&self) -> Option<T> {
        serde_json::from_value(self.payload.clone()).ok()
    }
}

/// Одна независимая область выбора
///
/// `ids` хранит порядок выбора, `entries` хранит снимки. Оба поля меняются только
/// вместе, через методы ниже.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SelectionScope {
    mode: SelectionMode,
    ids: Vec<RowId>,
    entries: HashMap<RowId, Value>,
}

impl SelectionScope {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            ids: Vec::new(),
            entries: HashMap::new(),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn ids(&self) -> &[RowId] {
        &self.ids
    }

    pub fn entries(&self) -> &HashMap<RowId, Value> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &RowId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn payload(&self, id: &RowId) -> Option<&Value> {
        self.entries.get(id)
    }

    /// Выбранные записи в порядке выбора
    pub fn items(&self) -> Vec<SelectedEntry> {
        self.ids
            .iter()
            .filter_map(|id| {
                self.entries.get(id).map(|payload| SelectedEntry {
                    id: id.clone(),
                    payload: payload.clone(),
                })
            })
            .collect()
    }

    /// Переключение режима; при переходе в `Single` остаётся только последний выбранный id
    pub(super) fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
        if mode == SelectionMode::Single {
            self.truncate_to_last();
        }
    }

    /// Добавляет id в конец или обновляет снимок уже выбранного, не двигая его
    pub(super) fn upsert(&mut self, entry: SelectedEntry) {
        if !self.entries.contains_key(&entry.id) {
            self.ids.push(entry.id.clone());
        }
        self.entries.insert(entry.id, entry.payload);
    }

    pub(super) fn remove(&mut self, id: &RowId) -> bool {
        if self.entries.remove(id).is_some() {
            self.ids.retain(|existing| existing != id);
            true
        } else {
            false
        }
    }

    pub(super) fn clear(&mut self) {
        self.ids.clear();
        self.entries.clear();
    }

    pub(super) fn replace_with(&mut self, entries: impl IntoIterator<Item = SelectedEntry>) {
        self.clear();
        for entry in entries {
            self.upsert(entry);
        }
    }

    fn truncate_to_last(&mut self) {
        if self.ids.len() <= 1 {
            return;
        }
        let keep = self.ids.len() - 1;
        for id in self.ids.drain(..keep) {
            self.entries.remove(&id);
        }
    }
}
