use contracts::domain::a003_warehouse::aggregate::Warehouse;
use contracts::shared::pagination::PaginatedResponse;

use crate::shared::api_utils::fetch_page;
use crate::shared::query::ApiParams;

/// Страница складов, `filter` содержит id единицы измерения вместимости
pub async fn fetch_warehouses(params: &ApiParams) -> Result<PaginatedResponse<Warehouse>, String> {
    fetch_page("/api/warehouses", params).await
}
