use std::sync::Arc;
use std::time::Duration;

use phonebook::{build_schema, HttpPersonSource, MemoryStore, PersonSource, PhonebookError};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn upstream(body: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/persons"))
        .respond_with(body)
        .mount(&server)
        .await;
    server
}

fn source(server: &MockServer, timeout: Duration) -> HttpPersonSource {
    HttpPersonSource::new(format!("{}/persons", server.uri()), timeout).unwrap()
}

#[tokio::test]
async fn fetches_record_list() {
    let server = upstream(ResponseTemplate::new(200).set_body_json(json!([
        { "id": 1, "name": "A", "phone": "1", "street": "Sarmiento", "city": "Rosario" },
        { "id": "b", "name": "B", "street": "Belgrano", "city": "Salta" }
    ])))
    .await;

    let people = source(&server, Duration::from_secs(5)).fetch_all().await.unwrap();
    assert_eq!(people.len(), 2);
    assert_eq!(people[0].id.as_str(), "1");
    assert_eq!(people[1].phone, None);
}

#[tokio::test]
async fn numeric_phone_is_kept_as_text() {
    let server = upstream(ResponseTemplate::new(200).set_body_json(json!([
        { "id": 1, "name": "A", "phone": "1", "street": "Sarmiento", "city": "Rosario" },
        { "id": 2, "name": "N", "phone": 12345, "street": "Urquiza", "city": "Parana" },
        { "id": 3, "name": "Z", "phone": null, "street": "Belgrano", "city": "Salta" }
    ])))
    .await;

    let schema = build_schema(
        Arc::new(MemoryStore::seeded()),
        Arc::new(source(&server, Duration::from_secs(5))),
    );

    let res = serde_json::to_value(schema.execute("{ allPersons(phone: YES) { name phone } }").await)
        .unwrap();
    assert!(res.get("errors").is_none());
    assert_eq!(
        res["data"]["allPersons"],
        json!([
            { "name": "A", "phone": "1" },
            { "name": "N", "phone": "12345" }
        ])
    );
}

#[tokio::test]
async fn server_error_is_fetch_failure() {
    let server = upstream(ResponseTemplate::new(503)).await;
    let err = source(&server, Duration::from_secs(5)).fetch_all().await.unwrap_err();
    assert!(matches!(err, PhonebookError::UpstreamFetchFailure(_)));
}

#[tokio::test]
async fn malformed_body_is_fetch_failure() {
    let server = upstream(ResponseTemplate::new(200).set_body_json(json!({ "not": "a list" }))).await;
    let err = source(&server, Duration::from_secs(5)).fetch_all().await.unwrap_err();
    assert!(matches!(err, PhonebookError::UpstreamFetchFailure(msg) if msg.contains("malformed")));
}

#[tokio::test]
async fn slow_upstream_times_out_without_retry() {
    let server = upstream(
        ResponseTemplate::new(200)
            .set_body_json(json!([]))
            .set_delay(Duration::from_secs(2)),
    )
    .await;

    let err = source(&server, Duration::from_millis(200)).fetch_all().await.unwrap_err();
    assert!(matches!(err, PhonebookError::UpstreamFetchFailure(_)));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn all_persons_through_http_source() {
    let server = upstream(ResponseTemplate::new(200).set_body_json(json!([
        { "id": "1", "name": "A", "phone": "1", "street": "Sarmiento", "city": "Rosario" },
        { "id": "2", "name": "B", "phone": "", "street": "Belgrano", "city": "Salta" }
    ])))
    .await;

    let schema = build_schema(
        Arc::new(MemoryStore::seeded()),
        Arc::new(source(&server, Duration::from_secs(5))),
    );

    let res = serde_json::to_value(
        schema
            .execute("{ allPersons(phone: NO) { name address { city } } }")
            .await,
    )
    .unwrap();
    assert_eq!(
        res["data"]["allPersons"],
        json!([{ "name": "B", "address": { "city": "Salta" } }])
    );
}
