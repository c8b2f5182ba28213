//! Best-effort clients for the third-party food and drink catalogs.
//!
//! Every public lookup degrades to an empty result when the upstream call
//! fails: network errors, non-2xx statuses and malformed bodies are logged
//! and swallowed here, never handed to callers.

pub mod mealdb;
pub mod spoonacular;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::error::CatalogError;
use crate::http::{with_query, HttpClient};

pub const DEFAULT_MEALDB_URL: &str = "https://www.themealdb.com/api/json/v1/1";
pub const DEFAULT_COCKTAILDB_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1";
pub const DEFAULT_SPOONACULAR_URL: &str = "https://api.spoonacular.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Meal,
    Drink,
}

impl ItemType {
    /// Interpret a `/recipe/{type}/...` path segment. Only `meal` selects the
    /// meal catalog; every other value falls through to drinks.
    pub fn from_path_segment(segment: &str) -> Self {
        if segment == "meal" {
            ItemType::Meal
        } else {
            ItemType::Drink
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Meal => "meal",
            ItemType::Drink => "drink",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A search hit from either catalog, normalized to one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub kind: ItemType,
}

/// Upstream endpoints and credentials.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub mealdb_url: String,
    pub cocktaildb_url: String,
    pub spoonacular_url: String,
    pub spoonacular_api_key: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            mealdb_url: DEFAULT_MEALDB_URL.to_string(),
            cocktaildb_url: DEFAULT_COCKTAILDB_URL.to_string(),
            spoonacular_url: DEFAULT_SPOONACULAR_URL.to_string(),
            spoonacular_api_key: None,
        }
    }
}

impl CatalogConfig {
    fn base_url(&self, kind: ItemType) -> &str {
        match kind {
            ItemType::Meal => &self.mealdb_url,
            ItemType::Drink => &self.cocktaildb_url,
        }
    }

    fn endpoint(&self, kind: ItemType, path: &str) -> String {
        format!("{}/{}", self.base_url(kind).trim_end_matches('/'), path)
    }
}

#[derive(Clone)]
pub struct CatalogClient {
    http: Arc<dyn HttpClient>,
    config: CatalogConfig,
}

impl CatalogClient {
    pub fn new(http: Arc<dyn HttpClient>, config: CatalogConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub async fn search_meals(&self, query: &str) -> Vec<CatalogItem> {
        self.search(ItemType::Meal, query).await
    }

    pub async fn search_drinks(&self, query: &str) -> Vec<CatalogItem> {
        self.search(ItemType::Drink, query).await
    }

    /// Search both catalogs concurrently. Meals always come before drinks.
    pub async fn search_all(&self, query: &str) -> Vec<CatalogItem> {
        let (mut meals, drinks) = tokio::join!(self.search_meals(query), self.search_drinks(query));
        meals.extend(drinks);
        meals
    }

    pub async fn search(&self, kind: ItemType, query: &str) -> Vec<CatalogItem> {
        match self.try_search(kind, query).await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(catalog = %kind, query, error = %e, "catalog search failed");
                Vec::new()
            }
        }
    }

    pub async fn lookup_meal(&self, id: &str) -> Option<Value> {
        self.lookup(ItemType::Meal, id).await
    }

    pub async fn lookup_drink(&self, id: &str) -> Option<Value> {
        self.lookup(ItemType::Drink, id).await
    }

    /// Fetch one raw catalog record by id.
    pub async fn lookup(&self, kind: ItemType, id: &str) -> Option<Value> {
        match self.try_lookup(kind, id).await {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(catalog = %kind, id, error = %e, "catalog lookup failed");
                None
            }
        }
    }

    /// Spoonacular `complexSearch` by dish type, capped at
    /// [`spoonacular::RESULT_LIMIT`] results. Returns the raw result objects.
    pub async fn search_by_category(&self, category: Option<&str>) -> Vec<Value> {
        match self.try_search_by_category(category).await {
            Ok(results) => results,
            Err(e) => {
                tracing::warn!(category, error = %e, "category search failed");
                Vec::new()
            }
        }
    }

    async fn try_search(&self, kind: ItemType, query: &str) -> Result<Vec<CatalogItem>, CatalogError> {
        let url = with_query(&self.config.endpoint(kind, "search.php"), &[("s", query)])?;
        let body = self.http.fetch_text(&url).await?;
        mealdb::parse_search(kind, &body)
    }

    async fn try_lookup(&self, kind: ItemType, id: &str) -> Result<Option<Value>, CatalogError> {
        let url = with_query(&self.config.endpoint(kind, "lookup.php"), &[("i", id)])?;
        let body = self.http.fetch_text(&url).await?;
        mealdb::parse_lookup(kind, &body)
    }

    async fn try_search_by_category(&self, category: Option<&str>) -> Result<Vec<Value>, CatalogError> {
        let api_key = self
            .config
            .spoonacular_api_key
            .as_deref()
            .ok_or(CatalogError::NotConfigured("SPOONACULAR_API_KEY is not set"))?;

        let base = format!(
            "{}/recipes/complexSearch",
            self.config.spoonacular_url.trim_end_matches('/')
        );
        let limit = spoonacular::RESULT_LIMIT.to_string();
        let mut params = Vec::with_capacity(3);
        if let Some(category) = category {
            params.push(("type", category));
        }
        params.push(("number", limit.as_str()));
        params.push(("apiKey", api_key));

        let url = with_query(&base, &params)?;
        let body = self.http.fetch_text(&url).await?;
        spoonacular::parse_complex_search(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_type_from_path_segment() {
        assert_eq!(ItemType::from_path_segment("meal"), ItemType::Meal);
        assert_eq!(ItemType::from_path_segment("drink"), ItemType::Drink);
        assert_eq!(ItemType::from_path_segment("dessert"), ItemType::Drink);
        assert_eq!(ItemType::from_path_segment("Meal"), ItemType::Drink);
    }

    #[test]
    fn test_catalog_item_serializes_type_field() {
        let item = CatalogItem {
            id: "11007".to_string(),
            name: Some("Margarita".to_string()),
            image: None,
            category: None,
            kind: ItemType::Drink,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "drink");
        assert_eq!(json["id"], "11007");
        assert!(json["image"].is_null());
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let config = CatalogConfig {
            mealdb_url: "http://meals.test/api/".to_string(),
            ..CatalogConfig::default()
        };
        assert_eq!(
            config.endpoint(ItemType::Meal, "search.php"),
            "http://meals.test/api/search.php"
        );
    }
}
