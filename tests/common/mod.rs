// Shared test helpers for the mock-server integration tests.
#![allow(dead_code)] // Not every test binary uses every helper

use wiremock::{MockServer, ResponseTemplate};

use rmp_lookup::Endpoints;

/// A minimal bot-challenge page of the kind the origin serves instead of JSON.
pub const CHALLENGE_HTML: &str = "<html><head><title>Just a moment...</title></head>\
     <body>Checking your browser before accessing the site.</body></html>";

/// HTTP client matching production settings but with a short timeout.
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .timeout(std::time::Duration::from_secs(5))
        .user_agent("rmp_lookup_test/1.0")
        .build()
        .expect("test client must build")
}

/// Endpoints pointing the warming GET and the GraphQL hosts at mock servers.
pub fn endpoints_for(warm: &MockServer, hosts: &[&MockServer]) -> Endpoints {
    Endpoints {
        homepage: format!("{}/", warm.uri()),
        graphql_hosts: hosts
            .iter()
            .map(|server| format!("{}/graphql", server.uri()))
            .collect(),
    }
}

/// A challenge-page response with the given status.
pub fn challenge_page(status: u16) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(CHALLENGE_HTML, "text/html")
}

/// A well-formed search response body with the given (id, first, last,
/// avgRating) nodes.
pub fn search_body(nodes: &[(&str, &str, &str, Option<f64>)]) -> ResponseTemplate {
    let edges: Vec<serde_json::Value> = nodes
        .iter()
        .map(|(id, first, last, rating)| {
            serde_json::json!({
                "node": {
                    "id": id,
                    "firstName": first,
                    "lastName": last,
                    "school": { "name": "Acme U" },
                    "avgRating": rating,
                }
            })
        })
        .collect();
    let body = serde_json::json!({
        "data": { "newSearch": { "teachers": { "edges": edges } } }
    });
    ResponseTemplate::new(200).set_body_raw(body.to_string(), "application/json")
}
