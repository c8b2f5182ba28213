pub mod catalog;
pub mod error;
pub mod http;
pub mod ingredients;

pub use catalog::{CatalogClient, CatalogConfig, CatalogItem, ItemType};
pub use error::{CatalogError, FetchError};
pub use http::{HttpClient, MockClient, MockResponse, ReqwestClient, ReqwestClientBuilder};
pub use ingredients::split_ingredients;
