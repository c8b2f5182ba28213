//! Outbound HTTP access for the catalog clients.
//!
//! Every upstream request goes through [`HttpClient`] so that tests can swap
//! in [`MockClient`] and never touch the network.

mod client;

pub use client::{HttpClient, MockClient, MockResponse, ReqwestClient, ReqwestClientBuilder};

/// Append query parameters to a base URL, percent-encoding each value.
pub fn with_query(base: &str, params: &[(&str, &str)]) -> Result<String, crate::FetchError> {
    let mut url =
        url::Url::parse(base).map_err(|e| crate::FetchError::InvalidUrl(format!("{base}: {e}")))?;
    if !params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params {
            pairs.append_pair(key, value);
        }
    }
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query_encodes_values() {
        let url = with_query(
            "https://www.themealdb.com/api/json/v1/1/search.php",
            &[("s", "mac & cheese")],
        )
        .unwrap();
        assert_eq!(
            url,
            "https://www.themealdb.com/api/json/v1/1/search.php?s=mac+%26+cheese"
        );
    }

    #[test]
    fn test_with_query_keeps_param_order() {
        let url = with_query(
            "https://api.spoonacular.com/recipes/complexSearch",
            &[("type", "dessert"), ("number", "8")],
        )
        .unwrap();
        assert!(url.ends_with("?type=dessert&number=8"));
    }

    #[test]
    fn test_with_query_rejects_garbage_base() {
        assert!(with_query("not a url", &[("s", "x")]).is_err());
    }
}
