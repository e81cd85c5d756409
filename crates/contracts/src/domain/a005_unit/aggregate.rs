use serde::{Deserialize, Serialize};

/// Единица измерения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: i64,
    pub name: String,
    /// Краткое обозначение: "шт", "кг", "м²"
    pub symbol: String,
}
