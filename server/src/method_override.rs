//! HTML forms can only submit GET and POST. A POST carrying `_method=PUT`
//! (or `DELETE`, `PATCH`) in its query string, or an
//! `X-HTTP-Method-Override` header, is rewritten to that method before
//! routing.

use axum::extract::{Query, Request};
use axum::http::Method;
use std::collections::HashMap;

pub const QUERY_KEY: &str = "_method";
pub const HEADER: &str = "x-http-method-override";

/// Rewrite the request method. Must wrap the router, not be layered inside
/// it, so the new method is seen by route matching.
pub fn apply(mut request: Request) -> Request {
    if request.method() != Method::POST {
        return request;
    }

    let requested = request
        .headers()
        .get(HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .or_else(|| {
            Query::<HashMap<String, String>>::try_from_uri(request.uri())
                .ok()
                .and_then(|Query(mut params)| params.remove(QUERY_KEY))
        });

    if let Some(method) = requested.as_deref().and_then(overridable) {
        tracing::debug!(%method, path = %request.uri().path(), "method override");
        *request.method_mut() = method;
    }

    request
}

fn overridable(value: &str) -> Option<Method> {
    match value.trim().to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "PATCH" => Some(Method::PATCH),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request(method: Method, uri: &str) -> Request {
        axum::http::Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn test_query_override() {
        let req = apply(request(Method::POST, "/recipes/abc?_method=DELETE"));
        assert_eq!(req.method(), Method::DELETE);

        let req = apply(request(Method::POST, "/recipes/abc?_method=put"));
        assert_eq!(req.method(), Method::PUT);
    }

    #[test]
    fn test_header_override() {
        let mut req = request(Method::POST, "/recipes/abc");
        req.headers_mut().insert(HEADER, "PUT".parse().unwrap());
        assert_eq!(apply(req).method(), Method::PUT);
    }

    #[test]
    fn test_only_post_is_overridden() {
        let req = apply(request(Method::GET, "/recipes/abc?_method=DELETE"));
        assert_eq!(req.method(), Method::GET);
    }

    #[test]
    fn test_unsupported_method_ignored() {
        let req = apply(request(Method::POST, "/recipes?_method=CONNECT"));
        assert_eq!(req.method(), Method::POST);

        let req = apply(request(Method::POST, "/recipes?other=1"));
        assert_eq!(req.method(), Method::POST);
    }
}
