//! Model-browsing view support: projected records, sorting, icons

pub mod icons;
pub mod sorting;
pub mod types;

pub use icons::{Icon, icon_for_collection, icon_for_kind};
pub use sorting::{SortColumn, SortDirection, SortingOptions, sort_models};
pub use types::{ModelResult, RecentItem, max_recent_model_count, recent_models};
