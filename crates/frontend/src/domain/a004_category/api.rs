use contracts::domain::a004_category::aggregate::Category;

use crate::shared::api_utils::fetch_all;

/// Все категории (справочник для фильтров)
pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    fetch_all("/api/categories").await
}
