pub mod api_utils;
pub mod components;
pub mod icons;
pub mod modal;
pub mod query;
pub mod search_select;
pub mod selection;
pub mod toggleable_list;
pub mod view_mode;
