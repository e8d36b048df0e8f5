use std::sync::Arc;

use phonebook::{build_schema, server, MemoryStore, StaticPersonSource};
use serde_json::{json, Value};
use tokio::net::TcpListener;

async fn spawn_server() -> String {
    let schema = build_schema(
        Arc::new(MemoryStore::seeded()),
        Arc::new(StaticPersonSource::default()),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(server::serve(listener, schema));
    format!("http://{}", addr)
}

#[tokio::test]
async fn health_answers_ok() {
    let base = spawn_server().await;
    let body = reqwest::get(format!("{}/health", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn post_graphql_returns_envelope() {
    let base = spawn_server().await;
    let res: Value = reqwest::Client::new()
        .post(format!("{}/graphql", base))
        .json(&json!({
            "query": "query Find($name: String!) { findPerson(name: $name) { phone } }",
            "variables": { "name": "Juan" }
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(res, json!({ "data": { "findPerson": { "phone": "3415919191" } } }));
}

#[tokio::test]
async fn get_graphql_serves_playground() {
    let base = spawn_server().await;
    let res = reqwest::get(format!("{}/graphql", base)).await.unwrap();
    assert!(res.status().is_success());
    assert!(res.text().await.unwrap().contains("graphiql"));
}
