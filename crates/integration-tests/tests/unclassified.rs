mod harness;

use faultline_core::{DATE_PATTERN, ErrorInfo, format_date};
use harness::server::TestServer;
use jiff::Zoned;

#[tokio::test]
async fn unclassified_scenario() {
    let server = TestServer::start_default().await.unwrap();

    let before = format_date(&Zoned::now());
    let resp = server.client().get(server.url("/export")).send().await.unwrap();
    let after = format_date(&Zoned::now());

    assert_eq!(resp.status(), 500);

    let body = resp.text().await.unwrap();
    assert!(!body.contains("hunter2"), "{body}");
    assert!(!body.contains("postgres"), "{body}");

    let raw: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(raw["detail"].is_null());

    let info: ErrorInfo = serde_json::from_str(&body).unwrap();
    assert_eq!(info.code, "000002");
    assert_eq!(info.message, "server error");
    assert_eq!(info.detail, None);
    assert_eq!(info.url, "/export");
    assert_eq!(info.date.len(), DATE_PATTERN.len());
    assert!(before <= info.date && info.date <= after, "{before} / {} / {after}", info.date);
}

#[tokio::test]
async fn panics_become_server_errors() {
    let server = TestServer::start_default().await.unwrap();

    let resp = server.client().get(server.url("/crash")).send().await.unwrap();
    assert_eq!(resp.status(), 500);

    let body = resp.text().await.unwrap();
    assert!(!body.contains("ledger"), "{body}");

    let info: ErrorInfo = serde_json::from_str(&body).unwrap();
    assert_eq!(info.code, "000002");
    assert_eq!(info.detail, None);

    // The server keeps serving after a caught panic
    let resp = server.client().get(server.url("/health")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn concurrent_requests_are_independent() {
    let server = TestServer::start_default().await.unwrap();

    let requests = (0..16u64).map(|id| {
        let request = server.client().get(server.url(&format!("/users/{id}")));
        async move {
            let info: ErrorInfo = request.send().await.unwrap().json().await.unwrap();
            (id, info)
        }
    });

    let mut handles = Vec::new();
    for request in requests {
        handles.push(tokio::spawn(request));
    }

    for handle in handles {
        let (id, info) = handle.await.unwrap();
        assert_eq!(info.detail, Some(format!("id={id}")));
        assert_eq!(info.url, format!("/users/{id}"));
    }
}
