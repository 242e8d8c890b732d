//! Projected catalog records shown by the model-browsing view

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::collections::{CollectionEssentials, CollectionItemKind, LastEditInfo};

/// Fallback description for a model that lives in a collection but has
/// no description of its own.
const DEFAULT_MODEL_DESCRIPTION: &str = "A model";

/// A projected search/catalog record as returned by the listing API
///
/// Immutable from the sorter's point of view; sorting produces a new
/// sequence and never mutates records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResult {
    pub id: i64,
    pub name: String,

    /// The item kind tag ("dataset" for models)
    #[serde(rename = "model")]
    pub kind: CollectionItemKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<CollectionEssentials>,

    #[serde(
        rename = "last-edit-info",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_edit_info: Option<LastEditInfo>,
}

impl ModelResult {
    /// Whether this record is a model (a saved, curated dataset)
    pub fn is_model(&self) -> bool {
        self.kind == CollectionItemKind::Dataset
    }

    /// Description to display for this record.
    ///
    /// A model that lives in a collection but whose description is empty
    /// or whitespace-only reports a generic fallback instead of nothing.
    pub fn display_description(&self) -> Option<&str> {
        let blank = self
            .description
            .as_deref()
            .is_none_or(|text| text.trim().is_empty());

        if self.collection.is_some() && blank {
            Some(DEFAULT_MODEL_DESCRIPTION)
        } else {
            self.description.as_deref()
        }
    }

    /// Displayable path of the containing collection, if any
    pub fn collection_path(&self) -> Option<String> {
        self.collection
            .as_ref()
            .map(CollectionEssentials::path_string)
    }
}

/// A recently viewed catalog item as returned by the recents API
///
/// A thinner projection than [`ModelResult`]: only what the recents rail
/// needs to render a row and link back to the item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentItem {
    pub id: i64,
    pub name: String,

    /// The item kind tag ("dataset" for models)
    #[serde(rename = "model")]
    pub kind: CollectionItemKind,

    /// When the user last viewed the item
    pub timestamp: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_collection: Option<CollectionEssentials>,
}

impl RecentItem {
    /// Whether this recently viewed item is a model
    pub fn is_model(&self) -> bool {
        self.kind == CollectionItemKind::Dataset
    }
}

/// Keep only the recently viewed models, in view order
pub fn recent_models(items: &[RecentItem]) -> Vec<RecentItem> {
    items.iter().filter(|item| item.is_model()).cloned().collect()
}

/// Maximum number of recently viewed models to surface, roughly
/// proportional to how many models the user may see at all.
pub fn max_recent_model_count(model_count: usize) -> usize {
    if model_count > 20 {
        8
    } else if model_count > 9 {
        4
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: CollectionItemKind) -> ModelResult {
        ModelResult {
            id: 1,
            name: "Orders".to_string(),
            kind,
            description: None,
            collection: None,
            last_edit_info: None,
        }
    }

    #[test]
    fn test_is_model() {
        assert!(record(CollectionItemKind::Dataset).is_model());
        assert!(!record(CollectionItemKind::Card).is_model());
        assert!(!record(CollectionItemKind::Dashboard).is_model());
    }

    #[test]
    fn test_display_description_falls_back_for_collected_models() {
        let mut model = record(CollectionItemKind::Dataset);
        model.collection = Some(CollectionEssentials::new(1, "Marketing"));

        model.description = None;
        assert_eq!(model.display_description(), Some("A model"));

        model.description = Some("   ".to_string());
        assert_eq!(model.display_description(), Some("A model"));
    }

    #[test]
    fn test_display_description_prefers_own_text() {
        let mut model = record(CollectionItemKind::Dataset);
        model.collection = Some(CollectionEssentials::new(1, "Marketing"));
        model.description = Some("Orders joined to customers".to_string());
        assert_eq!(
            model.display_description(),
            Some("Orders joined to customers")
        );
    }

    #[test]
    fn test_display_description_without_collection() {
        let mut model = record(CollectionItemKind::Dataset);
        model.description = None;
        assert_eq!(model.display_description(), None);

        model.description = Some("Standalone".to_string());
        assert_eq!(model.display_description(), Some("Standalone"));
    }

    #[test]
    fn test_collection_path() {
        let mut model = record(CollectionItemKind::Dataset);
        assert_eq!(model.collection_path(), None);

        model.collection = Some(
            CollectionEssentials::new(2, "Q4")
                .with_ancestors(vec![CollectionEssentials::new(1, "Reports")]),
        );
        assert_eq!(model.collection_path(), Some("Reports / Q4".to_string()));
    }

    fn recent(id: i64, kind: CollectionItemKind) -> RecentItem {
        RecentItem {
            id,
            name: format!("Item {}", id),
            kind,
            timestamp: "2024-11-02T09:30:00Z".parse().unwrap(),
            parent_collection: None,
        }
    }

    #[test]
    fn test_recent_item_is_model() {
        assert!(recent(1, CollectionItemKind::Dataset).is_model());
        assert!(!recent(2, CollectionItemKind::Dashboard).is_model());
        assert!(!recent(3, CollectionItemKind::Card).is_model());
    }

    #[test]
    fn test_recent_models_filters_and_keeps_view_order() {
        let items = vec![
            recent(1, CollectionItemKind::Dashboard),
            recent(2, CollectionItemKind::Dataset),
            recent(3, CollectionItemKind::Card),
            recent(4, CollectionItemKind::Dataset),
        ];
        let models = recent_models(&items);
        let ids: Vec<i64> = models.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 4]);
        assert!(models.iter().all(RecentItem::is_model));
    }

    #[test]
    fn test_recent_item_wire_format() {
        let json = r#"{
            "id": 7,
            "name": "Orders",
            "model": "dataset",
            "timestamp": "2024-11-02T09:30:00Z",
            "parent_collection": { "id": 3, "name": "Marketing" }
        }"#;
        let item: RecentItem = serde_json::from_str(json).unwrap();
        assert!(item.is_model());
        assert_eq!(item.parent_collection.as_ref().unwrap().name, "Marketing");
    }

    #[test]
    fn test_max_recent_model_count_thresholds() {
        assert_eq!(max_recent_model_count(0), 0);
        assert_eq!(max_recent_model_count(9), 0);
        assert_eq!(max_recent_model_count(10), 4);
        assert_eq!(max_recent_model_count(20), 4);
        assert_eq!(max_recent_model_count(21), 8);
        assert_eq!(max_recent_model_count(1000), 8);
    }

    #[test]
    fn test_model_result_wire_format() {
        let json = r#"{
            "id": 12,
            "name": "Orders",
            "model": "dataset",
            "collection": { "id": 3, "name": "Marketing" }
        }"#;
        let model: ModelResult = serde_json::from_str(json).unwrap();
        assert!(model.is_model());
        assert_eq!(model.collection_path(), Some("Marketing".to_string()));

        let out = serde_json::to_value(&model).unwrap();
        assert_eq!(out["model"], "dataset");
        assert!(out.get("description").is_none());
    }
}
