use mastermind_core::{fallback_mind_map, NodeId};
use mastermind_test_utils::{create_test_mind_map, malformed_mind_map_json, target_market_json};
use mastermind_webhook::{MindMapSource, StaticSource, WebhookClient, WebhookConfig, WebhookError};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::time::Duration;
use warp::http::StatusCode;
use warp::Filter;

/// Serve a warp filter on an ephemeral port and return its webhook URL
macro_rules! serve {
    ($filter:expr) => {{
        let (addr, server) = warp::serve($filter).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);
        format!("http://{addr}/webhook/mindmap")
    }};
}

fn client_for(url: &str) -> WebhookClient {
    let config = WebhookConfig::new()
        .with_url(url)
        .with_timeout(Duration::from_secs(2))
        .with_probe_timeout(Duration::from_secs(2));
    WebhookClient::new(config).unwrap()
}

/// Echo the posted idea back inside a well-formed mind map
fn echo_route() -> impl Filter<Extract = (warp::reply::Json,), Error = warp::Rejection> + Clone {
    warp::post()
        .and(warp::path!("webhook" / "mindmap"))
        .and(warp::body::json())
        .map(|body: Value| {
            let idea = body["idea"].as_str().unwrap_or_default().to_owned();
            warp::reply::json(&target_market_json(&idea))
        })
}

#[tokio::test]
async fn generate_uses_valid_response() {
    let url = serve!(echo_route());
    let client = client_for(&url);

    let map = client.generate("Smart Gym").await;
    assert_eq!(map, create_test_mind_map("Smart Gym"));
    assert_eq!(map.find(NodeId(3)).unwrap().title(), "Beginners");
}

#[tokio::test]
async fn try_generate_reports_success() {
    let url = serve!(echo_route());
    let map = client_for(&url).try_generate("Smart Gym").await.unwrap();
    assert_eq!(map.flatten(), vec!["Target Market", "Athletes", "Beginners"]);
}

#[tokio::test]
async fn malformed_body_falls_back() {
    let route = warp::post().map(|| warp::reply::json(&malformed_mind_map_json()));
    let url = serve!(route);
    let client = client_for(&url);

    assert_eq!(client.generate("Pet Hotel").await, fallback_mind_map("Pet Hotel"));
    assert!(matches!(
        client.try_generate("Pet Hotel").await,
        Err(WebhookError::Invalid(_))
    ));
}

#[tokio::test]
async fn non_json_body_falls_back() {
    let route = warp::post().map(|| "<html>not json</html>");
    let url = serve!(route);
    let client = client_for(&url);

    assert_eq!(client.generate("Pet Hotel").await, fallback_mind_map("Pet Hotel"));
    assert!(matches!(
        client.try_generate("Pet Hotel").await,
        Err(WebhookError::Json(_))
    ));
}

#[tokio::test]
async fn error_status_falls_back() {
    let route = warp::post().map(|| {
        warp::reply::with_status(
            warp::reply::json(&json!({ "error": "workflow failed" })),
            StatusCode::INTERNAL_SERVER_ERROR,
        )
    });
    let url = serve!(route);
    let client = client_for(&url);

    assert_eq!(client.generate("Pet Hotel").await, fallback_mind_map("Pet Hotel"));
    assert!(matches!(
        client.try_generate("Pet Hotel").await,
        Err(WebhookError::Status(500))
    ));
    assert!(!client.test_connection().await);
}

#[tokio::test]
async fn slow_webhook_times_out_to_fallback() {
    let route = warp::post().and_then(|| async {
        tokio::time::sleep(Duration::from_secs(3)).await;
        Ok::<_, warp::Rejection>(warp::reply::json(&target_market_json("late")))
    });
    let url = serve!(route);
    let config = WebhookConfig::new()
        .with_url(url)
        .with_timeout(Duration::from_millis(200));
    let client = WebhookClient::new(config).unwrap();

    let err = client.try_generate("Food Truck").await.unwrap_err();
    assert!(err.is_unreachable());
    assert_eq!(client.generate("Food Truck").await, fallback_mind_map("Food Truck"));
}

#[tokio::test]
async fn refused_connection_falls_back() {
    // Grab a free port, then close it so nothing is listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(&format!("http://{addr}/webhook/mindmap"));
    assert_eq!(client.generate("").await, fallback_mind_map(""));
    assert!(!client.test_connection().await);
}

#[tokio::test]
async fn test_connection_succeeds_against_live_webhook() {
    let url = serve!(echo_route());
    assert!(client_for(&url).test_connection().await);
}

#[tokio::test]
async fn sources_are_interchangeable() {
    let url = serve!(echo_route());
    let sources: Vec<Box<dyn MindMapSource>> =
        vec![Box::new(client_for(&url)), Box::new(StaticSource::new())];

    for source in &sources {
        let map = source.generate("Tiny Homes").await;
        assert_eq!(map.idea(), "Tiny Homes", "source {}", source.name());
        assert!(map.find(NodeId(1)).is_some());
    }
}
