use contracts::domain::a005_unit::aggregate::Unit;

use crate::shared::api_utils::fetch_all;

/// Все единицы измерения
pub async fn fetch_units() -> Result<Vec<Unit>, String> {
    fetch_all("/api/units").await
}
