//! Icon dispatch for catalog items
//!
//! A closed match over the item-kind enumeration, not a runtime registry:
//! every kind has exactly one icon, decided at compile time.

use crate::collections::{CollectionEssentials, CollectionItemKind};

/// An icon reference the rendering layer resolves to an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    pub name: &'static str,
    pub color: Option<&'static str>,
}

impl Icon {
    const fn plain(name: &'static str) -> Self {
        Self { name, color: None }
    }
}

/// Icon shown for a collection without a curation badge
pub const FOLDER_ICON: Icon = Icon::plain("folder");

/// Icon shown for officially curated collections
pub const OFFICIAL_COLLECTION_ICON: Icon = Icon {
    name: "official_collection",
    color: Some("saffron"),
};

/// Icon for a catalog item kind
pub fn icon_for_kind(kind: CollectionItemKind) -> Icon {
    match kind {
        CollectionItemKind::Card => Icon::plain("table"),
        CollectionItemKind::Dataset => Icon::plain("model"),
        CollectionItemKind::Metric => Icon::plain("metric"),
        CollectionItemKind::Dashboard => Icon::plain("dashboard"),
        CollectionItemKind::Snippet => Icon::plain("snippet"),
        CollectionItemKind::Collection => FOLDER_ICON,
        CollectionItemKind::IndexedEntity => Icon::plain("index"),
    }
}

/// Icon for a collection summary, honoring its curation badge
pub fn icon_for_collection(collection: &CollectionEssentials) -> Icon {
    if collection.is_official() {
        OFFICIAL_COLLECTION_ICON
    } else {
        FOLDER_ICON
    }
}
