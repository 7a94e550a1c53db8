//! JSON file catalog source.

use std::path::PathBuf;

use async_trait::async_trait;
use tales_core::error::{Result, TalesError};
use tales_core::story::{CatalogSource, Story};

/// Reads the story collection from a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn load(&self) -> Result<Vec<Story>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            TalesError::catalog(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        let stories: Vec<Story> = serde_json::from_str(&content).map_err(|e| {
            TalesError::catalog(format!("Failed to parse {}: {}", self.path.display(), e))
        })?;

        tracing::info!(path = %self.path.display(), count = stories.len(), "Catalog read");
        Ok(stories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tales_core::story::Category;
    use tempfile::TempDir;

    const CATALOG: &str = r#"[
        {"id": 1, "title": "Glass", "category": "psychology", "summary": "s1", "body": "a\nb", "length": 6},
        {"id": 2, "title": "Cellar", "category": "horror", "summary": "s2", "body": "c", "length": 4}
    ]"#;

    #[tokio::test]
    async fn test_load_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("stories.json");
        std::fs::write(&path, CATALOG).unwrap();

        let stories = JsonFileCatalog::new(&path).load().await.unwrap();
        assert_eq!(stories.len(), 2);
        assert_eq!(stories[0].id, 1);
        assert_eq!(stories[1].category, Category::Horror);
    }

    #[tokio::test]
    async fn test_missing_file_is_catalog_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = JsonFileCatalog::new(temp_dir.path().join("nope.json"))
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, TalesError::Catalog(_)));
    }

    #[tokio::test]
    async fn test_malformed_payload_is_catalog_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("stories.json");
        std::fs::write(&path, r#"{"not": "an array"}"#).unwrap();

        let err = JsonFileCatalog::new(&path).load().await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
