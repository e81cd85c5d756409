use serde::{Deserialize, Serialize};

/// Склад
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    /// Вместимость в базовых единицах измерения
    #[serde(default)]
    pub capacity: Option<f64>,
    #[serde(default)]
    pub unit_id: Option<i64>,
    #[serde(default)]
    pub unit_symbol: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}
