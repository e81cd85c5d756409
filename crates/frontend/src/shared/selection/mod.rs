//! Scoped selection store
//!
//! Независимые области выбора строк ("customers", "user-selection-modal:…"),
//! которые разделяют таблицы, карточки, панели массовых действий и пикеры.
//!
//! ```ignore
//! let selection = use_selection();
//! selection.init_scope(&scope_keys::CUSTOMERS, SelectionMode::Multiple);
//! selection.toggle(&scope_keys::CUSTOMERS, customer.to_entry());
//! let ids = selection.selected_ids(scope_keys::CUSTOMERS);
//! ```

pub mod context;
pub mod keys;
pub mod scope;
pub mod store;

pub use context::{provide_selection_store, use_selection, SelectionContext};
pub use keys::{scope_keys, RowId, ScopeKey};
pub use scope::{SelectedEntry, SelectionMode, SelectionScope};
pub use store::{InitPolicy, SelectionError, SelectionStore};
