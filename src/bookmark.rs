//! Bookmark records and the host query interface

use serde::{Deserialize, Serialize};

/// Single blogroll entry as stored by the host platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkRecord {
    pub url: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Media library URL or arbitrary external image URL, empty when unset.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl BookmarkRecord {
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    /// Returns true when the record belongs to `category`, ignoring case.
    pub fn in_category(&self, category: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.to_lowercase() == category.to_lowercase())
    }
}

/// Field used to order query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderBy {
    Name,
}

/// Sort direction for query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

/// Parameters handed to the host bookmark store.
///
/// `category_name` is `None` when no filter applies; an empty filter is
/// never sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkQuery {
    pub order_by: OrderBy,
    pub order: Order,
    pub category_name: Option<String>,
}

impl BookmarkQuery {
    /// Builds the blogroll query: name ascending, filtered when `category` is non-empty.
    pub fn by_name(category: &str) -> Self {
        Self {
            order_by: OrderBy::Name,
            order: Order::Asc,
            category_name: (!category.is_empty()).then(|| category.to_string()),
        }
    }
}

/// Host bookmark storage.
///
/// Filtering and ordering are the store's responsibility; callers consume
/// the result in the order returned.
pub trait BookmarkStore {
    fn query(&self, query: &BookmarkQuery) -> Vec<BookmarkRecord>;
}

/// In-memory bookmark store.
#[derive(Debug, Clone, Default)]
pub struct MemoryBookmarks {
    records: Vec<BookmarkRecord>,
}

impl MemoryBookmarks {
    pub fn new(records: Vec<BookmarkRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[BookmarkRecord] {
        &self.records
    }
}

impl BookmarkStore for MemoryBookmarks {
    fn query(&self, query: &BookmarkQuery) -> Vec<BookmarkRecord> {
        let mut matches: Vec<BookmarkRecord> = self
            .records
            .iter()
            .filter(|r| match &query.category_name {
                Some(category) => r.in_category(category),
                None => true,
            })
            .cloned()
            .collect();

        match query.order_by {
            OrderBy::Name => matches.sort_by_key(|r| r.name.to_lowercase()),
        }
        if query.order == Order::Desc {
            matches.reverse();
        }

        matches
    }
}
