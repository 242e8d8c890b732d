//! Sorting of model records in the browsing view
//!
//! Records are ordered by a primary column with a deterministic secondary
//! column breaking exact ties. Sort options arrive from URL query state
//! in the `column:direction` form (e.g. `sort=name:desc`).

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::QueryError;

use super::types::ModelResult;

/// Column the model list can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Name,
    Collection,
}

impl SortColumn {
    /// The tie-breaking column: exactly two columns exist in this model,
    /// so the secondary is simply the other one.
    pub fn secondary(self) -> SortColumn {
        match self {
            SortColumn::Name => SortColumn::Collection,
            SortColumn::Collection => SortColumn::Name,
        }
    }
}

impl FromStr for SortColumn {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortColumn::Name),
            "collection" => Ok(SortColumn::Collection),
            other => Err(QueryError::UnknownSortColumn {
                column: other.to_string(),
            }),
        }
    }
}

/// Direction of a sort
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(QueryError::UnknownSortDirection {
                direction: other.to_string(),
            }),
        }
    }
}

/// Sorting options for the model list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortingOptions {
    pub sort_column: SortColumn,
    pub sort_direction: SortDirection,
}

impl SortingOptions {
    pub fn new(sort_column: SortColumn, sort_direction: SortDirection) -> Self {
        Self {
            sort_column,
            sort_direction,
        }
    }

    /// Parse URL-style sort options
    ///
    /// # Format
    /// - `column:asc`, `column:desc`
    /// - `column` alone means ascending
    pub fn parse(s: &str) -> Result<Self, QueryError> {
        match s.split_once(':') {
            Some((column, direction)) => Ok(Self {
                sort_column: column.parse()?,
                sort_direction: direction.parse()?,
            }),
            None => Ok(Self {
                sort_column: s.parse()?,
                sort_direction: SortDirection::Asc,
            }),
        }
    }
}

impl Default for SortingOptions {
    fn default() -> Self {
        Self {
            sort_column: SortColumn::Name,
            sort_direction: SortDirection::Asc,
        }
    }
}

/// Comparison key of a record for a given column.
///
/// Missing values degrade to the empty string rather than failing.
fn sort_key(model: &ModelResult, column: SortColumn) -> String {
    match column {
        SortColumn::Name => model.name.clone(),
        SortColumn::Collection => model.collection_path().unwrap_or_default(),
    }
}

/// Case-insensitive Unicode comparison with a case-sensitive code-point
/// tiebreak, so the resulting order is total and deterministic.
fn compare_keys(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

/// Order model records by the requested column, breaking exact ties with
/// the secondary column.
///
/// Returns a fresh, ordered vector; the input sequence is never modified.
/// The underlying sort is stable, so records tied on both columns keep
/// their relative input order.
pub fn sort_models(models: &[ModelResult], options: SortingOptions) -> Vec<ModelResult> {
    let SortingOptions {
        sort_column,
        sort_direction,
    } = options;

    tracing::debug!(
        column = ?sort_column,
        direction = ?sort_direction,
        count = models.len(),
        "sorting model records"
    );

    let mut sorted = models.to_vec();
    sorted.sort_by(|left, right| {
        let mut result = compare_keys(&sort_key(left, sort_column), &sort_key(right, sort_column));

        if result == Ordering::Equal {
            let secondary = sort_column.secondary();
            result = compare_keys(&sort_key(left, secondary), &sort_key(right, secondary));
        }

        match sort_direction {
            SortDirection::Asc => result,
            SortDirection::Desc => result.reverse(),
        }
    });
    sorted
}
