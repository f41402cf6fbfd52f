mod common;

use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use common::MockNode;
use gaia_client::{
    CancellationToken, Connection, EmptyBody, GaiaClient, RestError, RestRequest, Scheme,
    TransportError,
};
use serde::{Serialize, Serializer};
use serde_json::{json, Value};
use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

async fn slow() -> HttpResponse {
    actix_web::rt::time::sleep(Duration::from_secs(2)).await;
    HttpResponse::Ok().json(json!({"late": true}))
}

#[actix_web::test]
async fn test_single_item_response_is_one_element_sequence() {
    let node = MockNode::start(|cfg| {
        cfg.route(
            "/node_info",
            web::get().to(|| async {
                HttpResponse::Ok().json(json!({"id": "abc", "network": "gaia-13003", "version": "0.31.5"}))
            }),
        );
    })
    .await;

    let items: Vec<Value> = node
        .client()
        .request(RestRequest::get("/node_info").single())
        .await
        .unwrap();

    assert_eq!(items, vec![json!({"id": "abc", "network": "gaia-13003", "version": "0.31.5"})]);
    node.stop().await;
}

#[actix_web::test]
async fn test_collection_response_keeps_length_and_order() {
    let node = MockNode::start(|cfg| {
        cfg.route(
            "/keys",
            web::get().to(|| async { HttpResponse::Ok().json(json!([{"n": 1}, {"n": 2}, {"n": 3}])) }),
        );
    })
    .await;

    let items: Vec<Value> = node.client().request(RestRequest::get("/keys")).await.unwrap();

    assert_eq!(items.len(), 3);
    assert_eq!(items[2]["n"], 3);
    node.stop().await;
}

#[actix_web::test]
async fn test_empty_array_is_empty_success() {
    let node = MockNode::start(|cfg| {
        cfg.route(
            "/bank/balances/abc",
            web::get().to(|| async { HttpResponse::Ok().json(json!([])) }),
        );
    })
    .await;

    let items: Vec<Value> = node
        .client()
        .request(RestRequest::get("/bank/balances/abc"))
        .await
        .unwrap();

    assert!(items.is_empty());
    node.stop().await;
}

#[actix_web::test]
async fn test_error_status_preserves_code_and_raw_body() {
    let node = MockNode::start(|cfg| {
        cfg.route(
            "/status/{code}",
            web::get().to(|code: web::Path<u16>| async move {
                let code = code.into_inner();
                HttpResponse::build(StatusCode::from_u16(code).unwrap())
                    .content_type("application/json")
                    .body(format!(r#"{{"error":"failed with {code}"}}"#))
            }),
        );
    })
    .await;
    let client = node.client();

    for code in [400u16, 404, 500] {
        let err = client
            .request::<EmptyBody, Value>(RestRequest::get(format!("/status/{code}")).single())
            .await
            .unwrap_err();

        match &err {
            RestError::HttpStatus { status, body } => {
                assert_eq!(status.as_u16(), code);
                let expected = format!(r#"{{"error":"failed with {code}"}}"#);
                assert_eq!(body.as_deref(), Some(expected.as_bytes()));
            }
            other => panic!("Expected HttpStatus, got {other:?}"),
        }
        assert_eq!(err.api_message(), Some(format!("failed with {code}")));
    }
    node.stop().await;
}

#[actix_web::test]
async fn test_slow_response_times_out() {
    let node = MockNode::start(|cfg| {
        cfg.route("/slow", web::get().to(slow));
    })
    .await;

    let err = node
        .client_with_timeout(Duration::from_millis(200))
        .request::<EmptyBody, Value>(RestRequest::get("/slow").single())
        .await
        .unwrap_err();

    assert!(matches!(err, RestError::Timeout(d) if d == Duration::from_millis(200)));
    node.stop().await;
}

#[actix_web::test]
async fn test_per_call_timeout_overrides_client_default() {
    let node = MockNode::start(|cfg| {
        cfg.route("/slow", web::get().to(slow));
    })
    .await;

    let err = node
        .client()
        .request::<EmptyBody, Value>(
            RestRequest::get("/slow")
                .single()
                .timeout(Duration::from_millis(100)),
        )
        .await
        .unwrap_err();

    assert!(err.is_timeout());
    node.stop().await;
}

struct Unserializable;

impl Serialize for Unserializable {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(serde::ser::Error::custom("refusing to serialize"))
    }
}

#[actix_web::test]
async fn test_unserializable_body_fails_before_network() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let node = MockNode::start(move |cfg| {
        let counter = counter.clone();
        cfg.route(
            "/keys",
            web::post().to(move || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    HttpResponse::Ok().json(json!({}))
                }
            }),
        );
    })
    .await;

    let err = node
        .client()
        .request::<_, Value>(RestRequest::post("/keys", &Unserializable).single())
        .await
        .unwrap_err();

    match err {
        RestError::Decoding { body, .. } => assert!(body.is_empty()),
        other => panic!("Expected Decoding, got {other:?}"),
    }
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    node.stop().await;
}

#[actix_web::test]
async fn test_malformed_success_body_is_decoding_error() {
    let node = MockNode::start(|cfg| {
        cfg.route(
            "/version",
            web::get().to(|| async { HttpResponse::Ok().body("0.34.7") }),
        );
        cfg.route(
            "/keys",
            web::get().to(|| async { HttpResponse::Ok().json(json!({"not": "an array"})) }),
        );
    })
    .await;
    let client = node.client();

    let err = client
        .request::<EmptyBody, String>(RestRequest::get("/version").single())
        .await
        .unwrap_err();
    match err {
        RestError::Decoding { body, .. } => assert_eq!(&body[..], b"0.34.7"),
        other => panic!("Expected Decoding, got {other:?}"),
    }

    let err = client
        .request::<EmptyBody, Value>(RestRequest::get("/keys"))
        .await
        .unwrap_err();
    assert!(matches!(err, RestError::Decoding { .. }));
    node.stop().await;
}

#[actix_web::test]
async fn test_repeated_get_is_idempotent() {
    let node = MockNode::start(|cfg| {
        cfg.route(
            "/staking/pool",
            web::get().to(|| async {
                HttpResponse::Ok().json(json!({"not_bonded_tokens": "10", "bonded_tokens": "90"}))
            }),
        );
    })
    .await;
    let client = node.client();

    let first = client.staking_pool().await.unwrap();
    let second = client.staking_pool().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first[0].bonded_tokens, "90");
    node.stop().await;
}

#[actix_web::test]
async fn test_query_parameters_are_escaped_in_order() {
    let node = MockNode::start(|cfg| {
        cfg.route(
            "/echo",
            web::get().to(|req: HttpRequest| async move {
                HttpResponse::Ok().json(req.query_string())
            }),
        );
    })
    .await;

    let items: Vec<String> = node
        .client()
        .request(
            RestRequest::get("/echo")
                .query("sender", "a b&c")
                .query("page", "2")
                .single(),
        )
        .await
        .unwrap();

    assert_eq!(items, vec!["sender=a+b%26c&page=2".to_string()]);
    node.stop().await;
}

#[actix_web::test]
async fn test_content_type_only_sent_with_body() {
    let node = MockNode::start(|cfg| {
        cfg.route(
            "/inspect",
            web::route().to(|req: HttpRequest, body: web::Bytes| async move {
                HttpResponse::Ok().json(json!({
                    "content_type": req
                        .headers()
                        .get("content-type")
                        .and_then(|v| v.to_str().ok()),
                    "body_len": body.len(),
                }))
            }),
        );
    })
    .await;
    let client = node.client();

    let without: Vec<Value> = client
        .request(RestRequest::get("/inspect").single())
        .await
        .unwrap();
    assert_eq!(without[0]["content_type"], Value::Null);
    assert_eq!(without[0]["body_len"], 0);

    let payload = json!({"name": "alice"});
    let with: Vec<Value> = client
        .request(RestRequest::put("/inspect", &payload).single())
        .await
        .unwrap();
    assert_eq!(with[0]["content_type"], "application/json");
    assert_eq!(with[0]["body_len"], serde_json::to_vec(&payload).unwrap().len());
    node.stop().await;
}

#[actix_web::test]
async fn test_explicit_empty_body_sends_nothing() {
    let node = MockNode::start(|cfg| {
        cfg.route(
            "/inspect",
            web::post().to(|req: HttpRequest, body: web::Bytes| async move {
                HttpResponse::Ok().json(json!({
                    "content_type": req
                        .headers()
                        .get("content-type")
                        .and_then(|v| v.to_str().ok()),
                    "body": String::from_utf8_lossy(&body),
                }))
            }),
        );
    })
    .await;

    let items: Vec<Value> = node
        .client()
        .request(RestRequest::post("/inspect", &EmptyBody).single())
        .await
        .unwrap();

    assert_eq!(items[0]["content_type"], Value::Null);
    assert_eq!(items[0]["body"], "");
    node.stop().await;
}

#[actix_web::test]
async fn test_path_parameter_delimiters_stay_in_path() {
    let node = MockNode::start(|cfg| {
        cfg.route(
            "/keys/{name}",
            web::get().to(|name: web::Path<String>, req: HttpRequest| async move {
                HttpResponse::Ok().json(json!({
                    "name": name.into_inner(),
                    "address": req.query_string(),
                }))
            }),
        );
    })
    .await;
    let client = node.client();

    let keys = client.key("alice?x=1").await.unwrap();
    assert_eq!(keys[0].name, "alice?x=1");
    assert_eq!(keys[0].address, "");

    let items: Vec<Value> = client
        .request(RestRequest::get("/keys/a#frag").query("sender", "s").single())
        .await
        .unwrap();
    assert_eq!(items[0]["name"], "a#frag");
    assert_eq!(items[0]["address"], "sender=s");
    node.stop().await;
}

#[actix_web::test]
async fn test_cancellation_aborts_in_flight_call() {
    let node = MockNode::start(|cfg| {
        cfg.route("/slow", web::get().to(slow));
    })
    .await;
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    actix_web::rt::spawn(async move {
        actix_web::rt::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let err = node
        .client()
        .request_with_cancel::<EmptyBody, Value>(RestRequest::get("/slow").single(), &cancel)
        .await
        .unwrap_err();

    assert!(matches!(err, RestError::Cancelled));
    node.stop().await;
}

#[actix_web::test]
async fn test_concurrent_calls_complete_independently() {
    let node = MockNode::start(|cfg| {
        cfg.route("/slow", web::get().to(slow));
        cfg.route(
            "/fast",
            web::get().to(|| async { HttpResponse::Ok().json(json!(["done"])) }),
        );
    })
    .await;
    let client = node.client();

    let (slow_result, fast_result) = tokio::join!(
        client.request::<EmptyBody, Value>(
            RestRequest::get("/slow")
                .single()
                .timeout(Duration::from_millis(300))
        ),
        client.request::<EmptyBody, String>(RestRequest::get("/fast")),
    );

    assert!(slow_result.unwrap_err().is_timeout());
    assert_eq!(fast_result.unwrap(), vec!["done".to_string()]);
    node.stop().await;
}

#[actix_web::test]
async fn test_self_signed_node_requires_explicit_opt_in() {
    let node = MockNode::start_tls(|cfg| {
        cfg.route(
            "/node_info",
            web::get().to(|| async { HttpResponse::Ok().json(json!({"network": "gaia-13003"})) }),
        );
    })
    .await;

    let err = node
        .client()
        .request::<EmptyBody, Value>(RestRequest::get("/node_info").single())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RestError::Transport(TransportError::Request(_))
    ));

    let trusting = GaiaClient::builder(node.connection.clone())
        .danger_accept_invalid_certs(true)
        .build()
        .unwrap();
    let items: Vec<Value> = trusting
        .request(RestRequest::get("/node_info").single())
        .await
        .unwrap();
    assert_eq!(items[0]["network"], "gaia-13003");
    node.stop().await;
}

#[actix_web::test]
async fn test_unreachable_node_is_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = GaiaClient::new(Connection::new(Scheme::Http, "127.0.0.1", port)).unwrap();

    let err = client
        .request::<EmptyBody, Value>(RestRequest::get("/node_info").single())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RestError::Transport(TransportError::Request(_))
    ));
}

#[actix_web::test]
async fn test_invalid_host_is_reported_at_use_time() {
    let client = GaiaClient::new(Connection::new(Scheme::Http, "not a host", 1317)).unwrap();

    let err = client.node_info().await.unwrap_err();

    assert!(matches!(
        err,
        RestError::Transport(TransportError::InvalidUrl { .. })
    ));
}
