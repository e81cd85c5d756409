pub mod api;
pub mod ui;

use crate::shared::search_select::SelectableItem;
use crate::shared::selection::RowId;
use contracts::domain::a001_customer::aggregate::Customer;

impl SelectableItem for Customer {
    fn row_id(&self) -> RowId {
        RowId::from(self.id)
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}
