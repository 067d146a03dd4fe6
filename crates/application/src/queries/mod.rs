//! Queries and their handlers
//!
//! Queries never touch the aggregate; they are answered by the read service.

mod get_packing_list;
mod search_packing_lists;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use get_packing_list::GetPackingListHandler;
pub use search_packing_lists::SearchPackingListsHandler;

use crate::error::ApplicationError;

/// Handles one kind of query
#[async_trait]
pub trait QueryHandler<Q: Send + 'static>: Send + Sync {
    type Output;

    /// Answer the query
    async fn handle(&self, query: Q) -> Result<Self::Output, ApplicationError>;
}

/// Fetch a single list by id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetPackingList {
    pub id: Uuid,
}

/// Find lists by name fragment
///
/// `None` or a blank fragment matches every list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPackingLists {
    #[serde(default)]
    pub name: Option<String>,
}

impl SearchPackingLists {
    pub fn by_name(fragment: impl Into<String>) -> Self {
        Self {
            name: Some(fragment.into()),
        }
    }

    /// The trimmed, non-empty fragment, if any
    pub fn fragment(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Case-insensitive substring match against a list name
    pub fn matches(&self, name: &str) -> bool {
        self.fragment()
            .is_none_or(|f| name.to_lowercase().contains(&f.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_matches_everything() {
        assert!(SearchPackingLists::default().matches("Anything"));
        assert!(SearchPackingLists::by_name("   ").matches("Anything"));
    }

    #[test]
    fn fragment_match_ignores_case() {
        let query = SearchPackingLists::by_name("summer");
        assert!(query.matches("Summer in Rome"));
        assert!(query.matches("LATE SUMMER"));
        assert!(!query.matches("Winter"));
    }

    #[test]
    fn fragment_is_trimmed() {
        assert_eq!(SearchPackingLists::by_name("  rome ").fragment(), Some("rome"));
    }
}
