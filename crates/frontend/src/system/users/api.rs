use contracts::shared::pagination::PaginatedResponse;
use contracts::system::users::User;

use crate::shared::api_utils::fetch_page;
use crate::shared::query::ApiParams;

/// Поиск пользователей постранично
pub async fn search_users(params: &ApiParams) -> Result<PaginatedResponse<User>, String> {
    fetch_page("/api/system/users", params).await
}
