//! Response decoding for Spoonacular's `complexSearch` endpoint.

use serde_json::Value;

use crate::error::CatalogError;

/// Fixed result cap sent with every category search.
pub const RESULT_LIMIT: u32 = 8;

/// Return the raw `results` array; anything else means no results.
pub fn parse_complex_search(body: &str) -> Result<Vec<Value>, CatalogError> {
    let mut root: Value = serde_json::from_str(body)?;
    Ok(match root.get_mut("results").map(Value::take) {
        Some(Value::Array(results)) => results,
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_passed_through_raw() {
        let body = r#"{"results":[{"id":715538,"title":"Bruschetta","imageType":"jpg"}],
            "offset":0,"number":8,"totalResults":1}"#;
        let results = parse_complex_search(body).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["id"], 715538);
        assert_eq!(results[0]["imageType"], "jpg");
    }

    #[test]
    fn test_error_payload_has_no_results() {
        let body = r#"{"status":"failure","code":401,"message":"You are not authorized."}"#;
        assert!(parse_complex_search(body).unwrap().is_empty());
    }
}
