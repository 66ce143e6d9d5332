use byok_async::types::JsonObject;
use byok_async::types::events::{IngestEventRequest, PollEventsParams};
use byok_async::{ByokConfig, Client};
use chrono::{TimeZone, Utc};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn test_client(server: &MockServer) -> Client<ByokConfig> {
    Client::with_config(
        ByokConfig::new()
            .with_api_base(server.uri())
            .with_api_key("byok_sk_test")
            .with_default_user_id("player-1"),
    )
}

#[tokio::test]
async fn poll_returns_events() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/events"))
        .and(header("x-byok-user", "player-1"))
        .and(|req: &Request| req.url.query_pairs().any(|(k, _)| k == "since"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "events": [{
                "id": "evt_1",
                "event_type": "npc.gift",
                "payload": {"item": "iron ingot"},
                "created_at": "2026-05-01T10:00:00Z"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let since = Utc.with_ymd_and_hms(2026, 5, 1, 0, 0, 0).unwrap();
    let resp = test_client(&server)
        .events()
        .poll(&PollEventsParams::since(since), None)
        .await
        .unwrap();
    assert_eq!(resp.events.len(), 1);
    assert_eq!(resp.events[0].event_type, "npc.gift");
    assert_eq!(resp.events[0].payload["item"], "iron ingot");
}

#[tokio::test]
async fn ack_single_and_batch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/events/evt%201/ack"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"acknowledged": true})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/events/ack"))
        .and(body_json(serde_json::json!({"event_ids": ["evt_2", "evt_3"]})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"acknowledged": 2})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    assert!(client.events().ack("evt 1", None).await.unwrap().acknowledged);

    let ids = vec!["evt_2".to_string(), "evt_3".to_string()];
    let batch = client.events().ack_batch(&ids, None).await.unwrap();
    assert_eq!(batch.acknowledged, 2);
}

#[tokio::test]
async fn ingest_posts_type_and_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/events/ingest"))
        .and(header("x-byok-user", "player-9"))
        .and(body_json(serde_json::json!({
            "event_type": "world.kill",
            "payload": {"target": "wolf"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "processed": [{"effect": "reputation+1"}],
            "event_type": "world.kill",
            "effects_count": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut payload = JsonObject::new();
    payload.insert("target".into(), serde_json::json!("wolf"));
    let resp = test_client(&server)
        .events()
        .ingest(&IngestEventRequest::new("world.kill", payload), Some("player-9"))
        .await
        .unwrap();
    assert_eq!(resp.effects_count, 1);
    assert_eq!(resp.processed.len(), 1);
}
