pub mod api;
pub mod ui;

use crate::shared::search_select::SelectableItem;
use crate::shared::selection::RowId;
use contracts::system::users::User;

impl SelectableItem for User {
    fn row_id(&self) -> RowId {
        RowId::from(&self.id)
    }

    fn display_name(&self) -> String {
        User::display_name(self)
    }
}
