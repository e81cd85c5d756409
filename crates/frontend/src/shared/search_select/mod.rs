pub mod async_multi_select;
pub mod paginated_combobox;
pub mod traits;

pub use async_multi_select::{AsyncMultiSelect, ServerPagination};
pub use paginated_combobox::{ComboOption, PaginatedCombobox};
pub use traits::SelectableItem;
