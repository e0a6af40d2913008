//! End-to-end tests against a gateway listening on a real socket.

use std::time::Duration;

use outgoing::signature::{signed_path, HmacSha256Scheme, LegacySha1, SignatureScheme};

mod common;

#[tokio::test]
async fn test_signed_link_renders_redirect() {
    let gateway = common::start_gateway().await;
    let sig = HmacSha256Scheme.sign("http://a.com/", common::SECRET);

    let res = common::client()
        .get(gateway.url(&format!("/v1/{sig}/http%3A//a.com/")))
        .send()
        .await
        .expect("gateway unreachable");

    assert_eq!(res.status(), 200);
    assert!(res.headers().contains_key("x-request-id"));
    let body = res.text().await.unwrap();
    assert!(body.contains("http://a.com/"));
    assert!(body.contains(r#"<meta http-equiv="refresh" content="0;url=http://a.com/">"#));
}

#[tokio::test]
async fn test_one_character_change_is_rejected() {
    let gateway = common::start_gateway().await;
    let sig = HmacSha256Scheme.sign("http://a.com/", common::SECRET);
    let mut mutated: Vec<char> = sig.chars().collect();
    mutated[0] = if mutated[0] == 'a' { 'b' } else { 'a' };
    let mutated: String = mutated.into_iter().collect();

    let res = common::client()
        .get(gateway.url(&format!("/v1/{mutated}/http%3A//a.com/")))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);
    assert_eq!(res.text().await.unwrap(), "Invalid address.");
}

#[tokio::test]
async fn test_signer_links_work_for_both_schemes() {
    let gateway = common::start_gateway().await;
    let client = common::client();

    for scheme in [&HmacSha256Scheme as &dyn SignatureScheme, &LegacySha1] {
        for dest in ["https://example.com/search?q=rust&lang=en", "www.example.com"] {
            let res = client
                .get(gateway.url(&signed_path(scheme, dest, common::SECRET)))
                .send()
                .await
                .unwrap();
            assert_eq!(res.status(), 200, "{} {dest}", scheme.name());
        }
    }
}

#[tokio::test]
async fn test_link_signed_with_other_secret_is_rejected() {
    let gateway = common::start_gateway().await;
    let path = signed_path(&HmacSha256Scheme, "https://example.com/", "other");

    let res = common::client().get(gateway.url(&path)).send().await.unwrap();
    assert_eq!(res.status(), 400);
    assert_eq!(res.text().await.unwrap(), "Invalid address.");
}

#[tokio::test]
async fn test_operational_endpoints() {
    let gateway = common::start_gateway().await;
    let client = common::client();

    let res = client.get(gateway.url("/")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.text().await.unwrap().contains("outgoing urls."));

    let res = client.get(gateway.url("/__version__")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["content-type"], "application/json");
    let version: serde_json::Value = res.json().await.unwrap();
    assert_eq!(version["version"], "0.1.0");

    for path in ["/__heartbeat__", "/__lbheartbeat__"] {
        let res = client.get(gateway.url(path)).send().await.unwrap();
        assert_eq!(res.status(), 200);
        assert_eq!(res.text().await.unwrap(), "OK");
    }
}

#[tokio::test]
async fn test_concurrent_requests() {
    let gateway = common::start_gateway().await;
    let client = common::client();
    let path = signed_path(&HmacSha256Scheme, "https://example.com/", common::SECRET);
    let link = gateway.url(&path);
    let bad = gateway.url("/v1/deadbeef/https://example.com/");

    let mut tasks = Vec::new();
    for i in 0..50 {
        let client = client.clone();
        let url = if i % 2 == 0 { link.clone() } else { bad.clone() };
        tasks.push(tokio::spawn(async move {
            let res = client.get(&url).send().await.unwrap();
            (i, res.status().as_u16())
        }));
    }

    for task in tasks {
        let (i, status) = task.await.unwrap();
        let expected = if i % 2 == 0 { 200 } else { 400 };
        assert_eq!(status, expected, "request {i}");
    }
}

#[tokio::test]
async fn test_graceful_shutdown() {
    let gateway = common::start_gateway().await;

    let res = common::client().get(gateway.url("/__lbheartbeat__")).send().await.unwrap();
    assert_eq!(res.status(), 200);

    gateway.shutdown.trigger();
    let result = tokio::time::timeout(Duration::from_secs(5), gateway.handle)
        .await
        .expect("server should stop after shutdown")
        .unwrap();
    assert!(result.is_ok());
}
