//! Идентификаторы строк и ключи областей выбора
//!
//! `RowId` хранит каноническую строковую форму id сущности. Числовые, строковые и
//! UUID идентификаторы приводятся к нему один раз, на входе в систему выбора,
//! поэтому внутри сравнение всегда `RowId == RowId`.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Канонический id строки
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(String);

impl RowId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RowId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RowId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<&String> for RowId {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl From<uuid::Uuid> for RowId {
    fn from(value: uuid::Uuid) -> Self {
        Self(value.to_string())
    }
}

macro_rules! row_id_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for RowId {
                fn from(value: $t) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

row_id_from_int!(i32, i64, u32, u64, usize);

/// Ключ области выбора
///
/// Статические ключи объявляются в [`scope_keys`]; для экземпляров виджетов,
/// которые не должны делить выбор между собой, используется
/// [`ScopeKey::namespaced`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ScopeKey(Cow<'static, str>);

impl ScopeKey {
    pub const fn from_static(key: &'static str) -> Self {
        Self(Cow::Borrowed(key))
    }

    /// `"{namespace}:{name}"`, например `"user-selection-modal:3f2a..."`
    pub fn namespaced(namespace: &str, name: impl fmt::Display) -> Self {
        Self(Cow::Owned(format!("{}:{}", namespace, name)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Реестр ключей, используемых экранами приложения
pub mod scope_keys {
    use super::ScopeKey;

    pub const CUSTOMERS: ScopeKey = ScopeKey::from_static("customers");
    pub const SUPPLIERS: ScopeKey = ScopeKey::from_static("suppliers");
    pub const WAREHOUSE_DEFAULT: ScopeKey = ScopeKey::from_static("warehouse-default");

    /// Пространство имён для модальных окон выбора пользователей
    pub const USER_SELECTION_MODAL: &str = "user-selection-modal";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_string_ids_compare_equal() {
        assert_eq!(RowId::from(42_i64), RowId::from("42"));
        assert_eq!(RowId::from(7_u32), RowId::from(String::from("7")));
        assert_ne!(RowId::from(1_i64), RowId::from("01"));
    }

    #[test]
    fn test_namespaced_scope_key() {
        let key = ScopeKey::namespaced(scope_keys::USER_SELECTION_MODAL, "a1");
        assert_eq!(key.as_str(), "user-selection-modal:a1");
        assert_ne!(key, ScopeKey::namespaced(scope_keys::USER_SELECTION_MODAL, "a2"));
    }
}
