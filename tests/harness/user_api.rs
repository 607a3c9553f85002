//! Sample API tests: fixture in, edited request out, response checked.

use crate::repo_dir;
use crate::server::MockServer;
use restprobe::prelude::*;
use restprobe::{AssertionError, HttpConfig};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Address {
    city: String,
}

/// Echo the request body back with an id, like a typical create endpoint.
fn users_api() -> MockServer {
    MockServer::start(|req| match (req.method.as_str(), req.path()) {
        ("POST", "/api/users") => {
            let mut body = req.json();
            tree::set(&mut body, "id", 101).unwrap();
            (201, body.to_string())
        }
        ("GET", "/api/users/101") => (
            200,
            json!({"id": 101, "name": "Ada", "profile": {"home": {"city": "Oslo"}}}).to_string(),
        ),
        ("DELETE", _) => (204, String::new()),
        _ => (404, json!({"error": "not found"}).to_string()),
    })
}

fn client_for(server: &MockServer) -> ApiClient {
    let config = HarnessConfig::default()
        .with_base_url(format!("{}/api", server.base_url()))
        .with_timeout_secs(5)
        .with_header("Accept", "application/json")
        .with_auth_token("secret-token")
        .with_fixtures_dir(repo_dir("fixtures"));
    ApiClient::from_config(&config)
}

#[test]
fn create_user_from_edited_fixture() {
    let server = users_api();
    let client = client_for(&server);

    let payload = FixtureLoader::new(repo_dir("fixtures"))
        .payload("create_user")
        .unwrap()
        .with("name", "Grace Hopper")
        .unwrap()
        .with("addresses.0.city", "Arlington")
        .unwrap()
        .with("roles.1", "admin")
        .unwrap()
        .without("metadata.lastLogin")
        .unwrap();

    let resp = client
        .send(&ApiRequest::post("/users").payload(payload))
        .unwrap();

    resp.assert_status(201)
        .unwrap()
        .assert_field("id", 101)
        .unwrap()
        .assert_field("name", "Grace Hopper")
        .unwrap()
        .assert_field("metadata.source", "fixture")
        .unwrap()
        .assert_field_absent("metadata.lastLogin")
        .unwrap();

    let sent = server.last_request();
    assert_eq!(sent.method, "POST");
    assert_eq!(sent.header("Content-Type"), Some("application/json"));
    let body = sent.json();
    assert_eq!(body["addresses"][0]["city"], "Arlington");
    assert_eq!(body["roles"], json!(["reader", "admin"]));
    assert!(body["metadata"].get("lastLogin").is_none());
}

#[test]
fn default_headers_token_and_query_are_sent() {
    let server = users_api();
    let client = client_for(&server);

    client
        .send(
            &ApiRequest::get("/users/101")
                .query("expand", "profile")
                .header("X-Trace-Id", "t-1"),
        )
        .unwrap()
        .assert_status(200)
        .unwrap();

    let sent = server.last_request();
    assert_eq!(sent.target, "/api/users/101?expand=profile");
    assert_eq!(sent.header("Accept"), Some("application/json"));
    assert_eq!(sent.header("Authorization"), Some("Bearer secret-token"));
    assert_eq!(sent.header("X-Trace-Id"), Some("t-1"));
}

#[test]
fn per_request_bearer_overrides_config() {
    let server = users_api();
    let client = client_for(&server);

    client
        .send(&ApiRequest::get("/users/101").bearer("other"))
        .unwrap();
    assert_eq!(
        server.last_request().header("Authorization"),
        Some("Bearer other")
    );
}

#[test]
fn typed_field_extraction() {
    let server = users_api();
    let client = client_for(&server);

    let resp = client.get("/users/101").unwrap();
    let home: Address = resp.field("profile.home").unwrap();
    assert_eq!(home.city, "Oslo");
    let id: u64 = resp.field("id").unwrap();
    assert_eq!(id, 101);
    assert_eq!(resp.header("x-request-path"), Some("/api/users/101"));
}

#[test]
fn error_status_is_a_response_not_an_error() {
    let server = users_api();
    let client = client_for(&server);

    let resp = client.get("/users/999").unwrap();
    assert_eq!(resp.status(), 404);
    assert!(!resp.is_success());

    let err = resp.assert_status(200).unwrap_err();
    match err {
        HarnessError::Assertion(AssertionError::Status {
            expected, actual, ref body, ..
        }) => {
            assert_eq!(expected, 200);
            assert_eq!(actual, 404);
            assert!(body.contains("not found"));
        }
        other => panic!("unexpected error: {:?}", other),
    }

    let err = resp.error_for_status().unwrap_err();
    assert!(matches!(err, HarnessError::Http { status: 404, .. }));
}

#[test]
fn field_mismatch_reads_well() {
    let server = users_api();
    let client = client_for(&server);

    let err = client
        .get("/users/101")
        .unwrap()
        .assert_field("name", "Bob")
        .unwrap_err();
    assert_eq!(err.to_string(), r#"field 'name': expected "Bob", got "Ada""#);
}

#[test]
fn delete_returns_empty_body() {
    let server = users_api();
    let client = client_for(&server);

    let resp = client.delete("/users/101").unwrap();
    assert_eq!(resp.status(), 204);
    assert_eq!(resp.text(), "");
}

#[test]
fn unreachable_host_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(HttpConfig {
        base_url: format!("http://{}", addr),
        timeout_secs: 2,
        ..HttpConfig::default()
    });
    assert!(client.get("/").unwrap_err().is_transport());
}
