use crate::shared::selection::{RowId, SelectedEntry};
use serde::Serialize;

/// Элемент, который можно выбрать в таблице, карточке или пикере
pub trait SelectableItem {
    /// Каноническая форма id для сравнения с уже выбранным
    fn row_id(&self) -> RowId;

    fn display_name(&self) -> String;

    /// Снимок для хранилища выбора
    fn to_entry(&self) -> SelectedEntry
    where
        Self: Serialize,
    {
        SelectedEntry::from_item(self.row_id(), self)
    }
}
