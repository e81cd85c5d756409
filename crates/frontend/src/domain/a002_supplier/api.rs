use contracts::domain::a002_supplier::aggregate::Supplier;
use contracts::shared::pagination::PaginatedResponse;

use crate::shared::api_utils::fetch_page;
use crate::shared::query::ApiParams;

/// Страница поставщиков, `filter` содержит id категории
pub async fn fetch_suppliers(params: &ApiParams) -> Result<PaginatedResponse<Supplier>, String> {
    fetch_page("/api/suppliers", params).await
}
