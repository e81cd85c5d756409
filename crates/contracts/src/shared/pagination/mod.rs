//! Конверт постраничного ответа backend-а
//!
//! Все списочные endpoint-ы (`GET /api/{entity}?page=..&filter[search]=..`)
//! возвращают одну и ту же обёртку: страницу данных и границы пагинации.

use serde::{Deserialize, Serialize};

fn default_page() -> usize {
    1
}

/// Страница данных от backend-а
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    /// Номер текущей страницы (с 1)
    #[serde(default = "default_page")]
    pub current_page: usize,
    /// Номер последней страницы (с 1, минимум 1)
    #[serde(default = "default_page")]
    pub last_page: usize,
    #[serde(default)]
    pub per_page: Option<usize>,
    #[serde(default)]
    pub total: Option<usize>,
}

impl<T> PaginatedResponse<T> {
    /// Одна страница без пагинации (для справочников, загружаемых целиком)
    pub fn single_page(data: Vec<T>) -> Self {
        let total = data.len();
        Self {
            data,
            current_page: 1,
            last_page: 1,
            per_page: None,
            total: Some(total),
        }
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_laravel_style_envelope() {
        let json = r#"{"data":[1,2,3],"current_page":2,"last_page":5,"per_page":3,"total":14}"#;
        let page: PaginatedResponse<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.data, vec![1, 2, 3]);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.last_page, 5);
        assert!(page.has_prev());
        assert!(page.has_next());
    }

    #[test]
    fn test_missing_bounds_default_to_first_page() {
        let page: PaginatedResponse<i32> = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert_eq!(page.current_page, 1);
        assert_eq!(page.last_page, 1);
        assert!(!page.has_prev());
        assert!(!page.has_next());
    }
}
