//! Catalog source trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::story::model::Story;

/// Source of the story collection, read once at startup.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches the full story collection in catalog order.
    async fn load(&self) -> Result<Vec<Story>>;
}

/// A catalog backed by an in-memory list.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    stories: Vec<Story>,
}

impl StaticCatalog {
    pub fn new(stories: Vec<Story>) -> Self {
        Self { stories }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn load(&self) -> Result<Vec<Story>> {
        Ok(self.stories.clone())
    }
}
