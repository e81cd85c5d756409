pub mod api;
pub mod ui;

use crate::shared::search_select::SelectableItem;
use crate::shared::selection::RowId;
use contracts::domain::a003_warehouse::aggregate::Warehouse;

impl SelectableItem for Warehouse {
    fn row_id(&self) -> RowId {
        RowId::from(self.id)
    }

    fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}
