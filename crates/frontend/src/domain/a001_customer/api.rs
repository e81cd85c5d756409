use contracts::domain::a001_customer::aggregate::Customer;
use contracts::shared::pagination::PaginatedResponse;

use crate::shared::api_utils::fetch_page;
use crate::shared::query::ApiParams;

/// Страница клиентов
pub async fn fetch_customers(params: &ApiParams) -> Result<PaginatedResponse<Customer>, String> {
    fetch_page("/api/customers", params).await
}
