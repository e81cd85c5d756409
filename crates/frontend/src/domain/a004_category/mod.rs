pub mod api;

use crate::shared::search_select::{ComboOption, SelectableItem};
use crate::shared::selection::RowId;
use contracts::domain::a004_category::aggregate::Category;

impl SelectableItem for Category {
    fn row_id(&self) -> RowId {
        RowId::from(self.id)
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

/// Опции фильтра по категории
pub fn category_options(categories: &[Category]) -> Vec<ComboOption> {
    categories
        .iter()
        .map(|c| ComboOption::new(c.row_id().to_string(), c.display_name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_options_use_canonical_id() {
        let categories = vec![Category {
            id: 7,
            name: "Упаковка".into(),
            description: None,
            parent_id: None,
        }];
        assert_eq!(
            category_options(&categories),
            vec![ComboOption::new("7", "Упаковка")]
        );
    }
}
