//! Wire-facing types for the collection (folder) resource
//!
//! Collections group catalog items (models, dashboards, cards, ...) into a
//! folder tree. The types here mirror the REST payloads of the
//! collection-listing API; the crate never fetches them itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a collection: a regular numeric id or one of the
/// virtual roots the API exposes alongside real collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CollectionId {
    Regular(i64),
    Virtual(VirtualCollectionId),
}

/// The virtual collection roots ("root", "personal", "users", "trash")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VirtualCollectionId {
    Root,
    Personal,
    Users,
    Trash,
}

impl From<i64> for CollectionId {
    fn from(id: i64) -> Self {
        CollectionId::Regular(id)
    }
}

/// Curation badge a collection can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionAuthorityLevel {
    Official,
}

/// The closed set of item kinds a collection can contain
///
/// Serialized with the exact wire names of the listing API
/// (e.g. `"dataset"`, `"indexed-entity"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollectionItemKind {
    Card,
    Dataset,
    Metric,
    Dashboard,
    Snippet,
    Collection,
    IndexedEntity,
}

impl CollectionItemKind {
    /// All item kinds, in wire-catalog order
    pub const ALL: [CollectionItemKind; 7] = [
        CollectionItemKind::Card,
        CollectionItemKind::Dataset,
        CollectionItemKind::Metric,
        CollectionItemKind::Dashboard,
        CollectionItemKind::Snippet,
        CollectionItemKind::Collection,
        CollectionItemKind::IndexedEntity,
    ];

    /// The wire name of this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionItemKind::Card => "card",
            CollectionItemKind::Dataset => "dataset",
            CollectionItemKind::Metric => "metric",
            CollectionItemKind::Dashboard => "dashboard",
            CollectionItemKind::Snippet => "snippet",
            CollectionItemKind::Collection => "collection",
            CollectionItemKind::IndexedEntity => "indexed-entity",
        }
    }
}

/// Who last edited an item, and when
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastEditInfo {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub timestamp: DateTime<Utc>,
}

/// The collection projection carried inside search and listing results
///
/// `effective_ancestors` holds the ancestor chain the requesting user is
/// allowed to see, outermost first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionEssentials {
    pub id: CollectionId,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authority_level: Option<CollectionAuthorityLevel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_ancestors: Option<Vec<CollectionEssentials>>,
}

impl CollectionEssentials {
    /// Create a bare projection with no ancestors
    pub fn new(id: impl Into<CollectionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            authority_level: None,
            effective_ancestors: None,
        }
    }

    /// Attach the visible ancestor chain, outermost first
    pub fn with_ancestors(mut self, ancestors: Vec<CollectionEssentials>) -> Self {
        self.effective_ancestors = Some(ancestors);
        self
    }

    /// Displayable path of this collection: the visible ancestor names
    /// followed by the collection's own name, joined with `" / "`.
    pub fn path_string(&self) -> String {
        let mut parts: Vec<&str> = self
            .effective_ancestors
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .map(|ancestor| ancestor.name.as_str())
            .collect();
        parts.push(&self.name);
        parts.join(" / ")
    }

    /// Whether this collection carries the official curation badge
    pub fn is_official(&self) -> bool {
        matches!(self.authority_level, Some(CollectionAuthorityLevel::Official))
    }
}

/// The full collection resource as returned by the collection API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: CollectionId,
    pub name: String,
    pub description: Option<String>,

    pub can_write: bool,
    #[serde(default)]
    pub can_restore: bool,
    #[serde(default)]
    pub can_delete: bool,
    #[serde(default)]
    pub archived: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authority_level: Option<CollectionAuthorityLevel>,

    /// Raw location path of ancestor ids (e.g. `"/3/7/"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Location path containing only collections the user may access
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_ancestors: Option<Vec<CollectionEssentials>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_owner_id: Option<i64>,

    #[serde(default)]
    pub is_personal: bool,
}

impl Collection {
    /// Project this resource down to the summary carried in search results
    pub fn essentials(&self) -> CollectionEssentials {
        CollectionEssentials {
            id: self.id,
            name: self.name.clone(),
            authority_level: self.authority_level,
            effective_ancestors: self.effective_ancestors.clone(),
        }
    }
}
