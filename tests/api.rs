//! End-to-end tests against a mock upstream.

use std::time::Duration;

use serde_json::{json, Value};
use spacex_facade::Shutdown;

mod common;

#[tokio::test]
async fn test_rockets_end_to_end() {
    let (upstream, seen) = common::start_spacex_upstream().await;
    let shutdown = Shutdown::new();
    let (base, _) = common::start_facade(common::config_for(upstream), &shutdown).await;
    let client = common::client();

    let res = client.get(format!("{}/api/rockets/all", base)).send().await.unwrap();
    assert_eq!(res.status(), 200);
    let rockets: Vec<Value> = res.json().await.unwrap();
    assert_eq!(rockets.len(), 4);
    assert_eq!(
        rockets[0],
        json!({
            "id": "5e9d0d95eda69955f709d1eb",
            "name": "Falcon 1",
            "active": false,
            "successRatePct": 40
        })
    );
    assert_eq!(rockets[3]["active"], Value::Null);
    assert!(rockets[0].get("country").is_none());

    let res = client
        .get(format!("{}/api/rockets/all?sort=success_rate_pct", base))
        .send()
        .await
        .unwrap();
    let rockets: Vec<Value> = res.json().await.unwrap();
    let names: Vec<&str> = rockets.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Falcon 9", "Falcon 1", "Starship", "Falcon Heavy"]);

    let res = client.get(format!("{}/api/rockets/active", base)).send().await.unwrap();
    let rockets: Vec<Value> = res.json().await.unwrap();
    let names: Vec<&str> = rockets.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Falcon 9", "Falcon Heavy"]);

    let paths = seen.lock().unwrap().clone();
    assert_eq!(paths, vec!["/v4/rockets"; 3]);

    shutdown.trigger();
}

#[tokio::test]
async fn test_launches_end_to_end() {
    let (upstream, _) = common::start_spacex_upstream().await;
    let shutdown = Shutdown::new();
    let (base, _) = common::start_facade(common::config_for(upstream), &shutdown).await;
    let client = common::client();

    let res = client
        .get(format!("{}/api/launches/id/5e9d0d95eda69973a809d1ec", base))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let launches: Vec<Value> = res.json().await.unwrap();
    assert_eq!(
        launches,
        vec![
            json!({
                "id": "5eb87cdbffd86e000604b32c",
                "name": "CRS-1",
                "rocket": "5e9d0d95eda69973a809d1ec",
                "date": "Jan 05, 2024"
            }),
            json!({
                "id": "5eb87cdcffd86e000604b32d",
                "name": "Starlink 1",
                "rocket": "5e9d0d95eda69973a809d1ec",
                "date": ""
            }),
        ]
    );

    let res = client
        .get(format!("{}/api/launches/id/5e9d0d96eda699382d09d1ee", base))
        .send()
        .await
        .unwrap();
    let launches: Vec<Value> = res.json().await.unwrap();
    assert_eq!(
        launches,
        vec![json!({"id": "", "name": "No Launches", "rocket": "", "date": ""})]
    );

    let res = client.get(format!("{}/api/launches/all", base)).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), common::LAUNCHES);

    shutdown.trigger();
}

#[tokio::test]
async fn test_upstream_errors() {
    let (upstream, _) = common::start_mock_upstream(|path| match path {
        "/v4/rockets" => (500, "boom".to_string()),
        _ => (200, "{\"not\": \"a list\"}".to_string()),
    })
    .await;
    let shutdown = Shutdown::new();
    let (base, _) = common::start_facade(common::config_for(upstream), &shutdown).await;
    let client = common::client();

    let res = client.get(format!("{}/api/rockets/all", base)).send().await.unwrap();
    assert_eq!(res.status(), 502);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"error": "Upstream service unavailable"}));

    let res = client
        .get(format!("{}/api/launches/id/anything", base))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 500);

    let res = client.get(format!("{}/health/ready", base)).send().await.unwrap();
    assert_eq!(res.status(), 503);

    shutdown.trigger();
}

#[tokio::test]
async fn test_legacy_error_text() {
    let (upstream, _) = common::start_mock_upstream(|_| (503, "down".to_string())).await;
    let mut config = common::config_for(upstream);
    config.upstream.legacy_error_text = true;

    let shutdown = Shutdown::new();
    let (base, _) = common::start_facade(config, &shutdown).await;

    let res = common::client()
        .get(format!("{}/api/launches/all", base))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let text = res.text().await.unwrap();
    assert!(text.starts_with("Error fetching data:"));
    assert!(text.contains("503"));

    shutdown.trigger();
}

#[tokio::test]
async fn test_graceful_shutdown() {
    let (upstream, _) = common::start_spacex_upstream().await;
    let shutdown = Shutdown::new();
    let (base, handle) = common::start_facade(common::config_for(upstream), &shutdown).await;

    let res = common::client().get(format!("{}/health", base)).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.headers().contains_key("x-request-id"));

    shutdown.trigger();
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not stop")
        .unwrap();
}
