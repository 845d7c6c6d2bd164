//! Tests for the request side.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use serde_json::{json, Value};

    use crate::request::{HttpRequest, MergePrecedence, Error, MAX_QUERY_PAIRS, get_request_body, parse_query};

    #[test]
    fn test_path_and_query_string() {
        let request = HttpRequest::new("/api/users?id=7&sort=asc");
        assert_eq!(request.path(), "/api/users");
        assert_eq!(request.query_string(), Some("id=7&sort=asc"));

        let request = HttpRequest::new("/api/users");
        assert_eq!(request.path(), "/api/users");
        assert_eq!(request.query_string(), None);
    }

    #[test]
    fn test_query_string_stops_at_second_question_mark() {
        let request = HttpRequest::new("/search?q=1?ignored=2");
        assert_eq!(request.query_string(), Some("q=1"));
    }

    #[test]
    fn test_case_insensitive_headers() {
        let request = HttpRequest::new("/").with_header("Content-Type", "application/json");
        assert!(request.has_header("content-type"));
        assert!(request.has_header("CONTENT-TYPE"));
        assert!(request.is_json());
        assert!(!request.has_header("Host"));
    }

    #[test]
    fn test_parse_query_decodes_components() {
        let params = parse_query("name=John+Doe&city=S%C3%A3o%20Paulo&flag&empty=");
        assert_eq!(params.get("name"), Some(&json!("John Doe")));
        assert_eq!(params.get("city"), Some(&json!("São Paulo")));
        assert_eq!(params.get("flag"), Some(&json!("")));
        assert_eq!(params.get("empty"), Some(&json!("")));
    }

    #[test]
    fn test_parse_query_keeps_malformed_escapes() {
        let params = parse_query("pct=100%zz");
        assert_eq!(params.get("pct"), Some(&json!("100%zz")));
    }

    #[test]
    fn test_parse_query_repeated_keys_become_arrays() {
        let params = parse_query("tag=a&tag=b&other=x&tag=c");
        assert_eq!(params.get("tag"), Some(&json!(["a", "b", "c"])));
        assert_eq!(params.get("other"), Some(&json!("x")));
    }

    #[test]
    fn test_parse_query_skips_empty_pairs() {
        let params = parse_query("&&a=1&&");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("a"), Some(&json!("1")));
    }

    #[test]
    fn test_parse_query_caps_pair_count() {
        let query = (0..MAX_QUERY_PAIRS + 50)
            .map(|i| format!("k{i}=v"))
            .collect::<Vec<String>>()
            .join("&");

        let params = parse_query(&query);
        assert_eq!(params.len(), MAX_QUERY_PAIRS);
        assert!(params.contains_key("k0"));
        assert!(params.contains_key(&format!("k{}", MAX_QUERY_PAIRS - 1)));
        assert!(!params.contains_key(&format!("k{MAX_QUERY_PAIRS}")));
    }

    #[test]
    fn test_parse_query_cap_counts_repeated_keys() {
        let query = vec!["tag=x"; MAX_QUERY_PAIRS + 10].join("&");
        let params = parse_query(&query);
        assert_eq!(params.get("tag").and_then(Value::as_array).map(Vec::len), Some(MAX_QUERY_PAIRS));
    }

    #[test]
    fn test_parse_query_splits_on_first_equals() {
        let params = parse_query("expr=a=b");
        assert_eq!(params.get("expr"), Some(&json!("a=b")));
    }

    #[test]
    fn test_request_body_merges_query_over_body() {
        let request = HttpRequest::new("/save?name=query&page=2")
            .with_body(json!({"name": "body", "id": 5}));

        let body = get_request_body(&request, MergePrecedence::QueryOverBody);
        assert_eq!(Value::Object(body), json!({"name": "query", "id": 5, "page": "2"}));
    }

    #[test]
    fn test_request_body_merges_body_over_query() {
        let request = HttpRequest::new("/save?name=query&page=2")
            .with_body(json!({"name": "body", "id": 5}));

        let body = get_request_body(&request, MergePrecedence::BodyOverQuery);
        assert_eq!(Value::Object(body), json!({"name": "body", "id": 5, "page": "2"}));
    }

    #[test]
    fn test_request_body_without_payload_uses_query_only() {
        let request = HttpRequest::new("/list?limit=10");
        let body = get_request_body(&request, MergePrecedence::default());
        assert_eq!(Value::Object(body), json!({"limit": "10"}));
    }

    #[test]
    fn test_request_body_ignores_non_object_payload() {
        let request = HttpRequest::new("/list?limit=10").with_body(json!([1, 2, 3]));
        let body = get_request_body(&request, MergePrecedence::default());
        assert_eq!(Value::Object(body), json!({"limit": "10"}));
    }

    #[test]
    fn test_request_body_empty() {
        let request = HttpRequest::new("/");
        assert!(get_request_body(&request, MergePrecedence::default()).is_empty());
    }

    #[test]
    fn test_with_raw_body_parses_json() {
        let request = HttpRequest::new("/save")
            .with_header("Content-Type", "application/json; charset=utf-8")
            .with_raw_body(br#"{"id": 1, "tags": ["a"]}"#)
            .unwrap();
        assert_eq!(request.body, Some(json!({"id": 1, "tags": ["a"]})));
    }

    #[test]
    fn test_with_raw_body_ignores_other_content_types() {
        let request = HttpRequest::new("/save")
            .with_header("Content-Type", "text/plain")
            .with_raw_body(b"just text")
            .unwrap();
        assert!(request.body.is_none());
    }

    #[test]
    fn test_with_raw_body_empty_json_payload() {
        let request = HttpRequest::new("/save")
            .with_header("Content-Type", "application/json")
            .with_raw_body(b"  ")
            .unwrap();
        assert!(request.body.is_none());
    }

    #[test]
    fn test_with_raw_body_invalid_json() {
        let result = HttpRequest::new("/save")
            .with_header("Content-Type", "application/json")
            .with_raw_body(b"{not json");
        assert!(matches!(result, Err(Error::JsonError(_))));
    }

    #[test]
    fn test_route_params() {
        let mut params = HashMap::new();
        params.insert("id".to_string(), "42".to_string());

        let request = HttpRequest::new("/users/42").with_params(params).with_param("tab", "info");
        assert_eq!(request.params.get("id").map(String::as_str), Some("42"));
        assert_eq!(request.params.get("tab").map(String::as_str), Some("info"));
    }
}
