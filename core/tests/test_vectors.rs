//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Comparing parsed JSON (not raw strings) avoids
//! false negatives from field-ordering differences.

use fetch_core::{
    Credentials, FetchClient, HttpMethod, HttpResponse, StaticToken,
};
use serde_json::Value;

const BASE_URL: &str = "http://localhost:8000";

fn client() -> FetchClient {
    FetchClient::new(BASE_URL)
}

fn simulated_response(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

#[test]
fn get_test_vectors() {
    let raw = include_str!("../../test-vectors/get.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let path = case["path"].as_str().unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_get(path);
        assert_eq!(req.method, HttpMethod::Get, "{name}: method");
        assert_eq!(
            req.url,
            format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()),
            "{name}: url"
        );
        assert!(req.headers.is_empty(), "{name}: headers");
        assert!(req.body.is_none(), "{name}: body");
        assert_eq!(req.credentials, Credentials::SameOrigin, "{name}: credentials");

        // Verify parse
        let result: Value = c.parse_get(simulated_response(case)).unwrap();
        assert_eq!(result, case["expected_result"], "{name}: parsed result");
    }
}

#[test]
fn post_test_vectors() {
    let raw = include_str!("../../test-vectors/post.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let path = case["path"].as_str().unwrap();
        let tokens = StaticToken(case["token"].as_str().unwrap().to_string());
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_post(path, &case["payload"], &tokens).unwrap();
        assert_eq!(req.method, HttpMethod::Post, "{name}: method");
        assert_eq!(
            req.url,
            format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()),
            "{name}: url"
        );
        assert_eq!(req.credentials, Credentials::Include, "{name}: credentials");

        let expected_headers: Vec<(String, String)> = expected_req["headers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (
                    arr[0].as_str().unwrap().to_string(),
                    arr[1].as_str().unwrap().to_string(),
                )
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");

        let req_body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(req_body, expected_req["body"], "{name}: body");

        // Verify parse
        let result: Value = c.parse_post(simulated_response(case)).unwrap();
        assert_eq!(result, case["expected_result"], "{name}: parsed result");
    }
}
