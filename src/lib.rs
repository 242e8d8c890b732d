//! # Shelf
//!
//! Browsing-layer core for a business-intelligence catalog.
//!
//! ## Features
//!
//! - **Collection Types**: Wire-faithful declarations for the collection
//!   (folder) resource and the items it contains
//! - **Model Sorting**: Primary/secondary column ordering for the model
//!   list, with URL-style sort option parsing
//! - **Prefixed Inputs**: A splitter and explicit state machine behind
//!   two-part input controls (prefix selector + free text)
//! - **Locale Table**: The instance's selectable locales, in presentation
//!   order
//! - **Settings**: YAML-loaded instance settings feeding the above
//!
//! No server and no HTTP client: the crate consumes records a host has
//! already fetched and hands back data a rendering layer can display.
//!
//! ## Quick Start
//!
//! ```rust
//! use shelf::prelude::*;
//!
//! let records: Vec<ModelResult> = serde_json::from_str(
//!     r#"[
//!         { "id": 1, "name": "Orders", "model": "dataset",
//!           "collection": { "id": 3, "name": "Marketing" } },
//!         { "id": 2, "name": "Accounts", "model": "dataset" }
//!     ]"#,
//! )
//! .unwrap();
//!
//! let options = SortingOptions::parse("name:asc").unwrap();
//! let sorted = sort_models(&records, options);
//! assert_eq!(sorted[0].name, "Accounts");
//!
//! let mut input = PrefixInput::new(
//!     Some("http://bi.example.com"),
//!     &["http://", "https://"],
//!     "https://",
//!     true,
//! );
//! let emitted = input.set_remainder("bi.example.org");
//! assert_eq!(emitted.as_deref(), Some("http://bi.example.org"));
//! ```

pub mod browse;
pub mod collections;
pub mod config;
pub mod core;
pub mod input;
pub mod locale;

/// Re-exports of commonly used types
pub mod prelude {
    // === Browsing ===
    pub use crate::browse::{
        Icon, ModelResult, RecentItem, SortColumn, SortDirection, SortingOptions,
        icon_for_collection, icon_for_kind, max_recent_model_count, recent_models, sort_models,
    };

    // === Collections ===
    pub use crate::collections::{
        Collection, CollectionAuthorityLevel, CollectionEssentials, CollectionId,
        CollectionItemKind, LastEditInfo, VirtualCollectionId,
    };

    // === Input ===
    pub use crate::input::{PrefixInput, PrefixedValue, split_prefixed_value};

    // === Locale ===
    pub use crate::locale::{AVAILABLE_LOCALES, LocaleOption, find_locale};

    // === Config ===
    pub use crate::config::{SITE_URL_PREFIXES, SettingsConfig};

    // === Errors ===
    pub use crate::core::error::{QueryError, ShelfError, ShelfResult};

    // === External dependencies ===
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
}
