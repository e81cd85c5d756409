use serde::{Deserialize, Serialize};

/// Пользователь системы
///
/// Идентификатор приходит строкой (UUID), в отличие от справочников с числовыми id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_admin: bool,
}

impl User {
    /// ФИО, если заполнено, иначе логин
    pub fn display_name(&self) -> String {
        match self.full_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => self.username.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(full_name: Option<&str>) -> User {
        User {
            id: "u-1".into(),
            username: "ivanov".into(),
            email: None,
            full_name: full_name.map(str::to_string),
            is_active: true,
            is_admin: false,
        }
    }

    #[test]
    fn test_display_name_prefers_full_name() {
        assert_eq!(user(Some("Иван Иванов")).display_name(), "Иван Иванов");
        assert_eq!(user(Some("  ")).display_name(), "ivanov");
        assert_eq!(user(None).display_name(), "ivanov");
    }
}
