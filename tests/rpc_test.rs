//! インポートRPCクライアントのテスト
//!
//! ループバックのスタブサーバーに対してリクエスト形式とエラー処理を検証

mod support;

use crm_import::rpc::HttpImportService;
use crm_import_common::{encode, EncodingMode, ImportError, ImportRequest, ImportRequestBody, ImportService};
use std::time::Duration;
use support::spawn_stub;

fn master_request() -> ImportRequest {
    let payload = encode("customer_id,name\nC001,山田".as_bytes(), EncodingMode::RawText);
    ImportRequest {
        endpoint: "/contact.v1.ContactService/ImportContactWithCustomer".into(),
        body: ImportRequestBody::new(payload, "master.csv", None),
    }
}

/// 成功レスポンスはJSONのまま返す
#[tokio::test]
async fn test_send_posts_json_with_bearer_token() {
    let (url, server) = spawn_stub(200, r#"{"importedCount":"1","failedCount":0}"#).await;
    let service = HttpImportService::new(format!("{}/", url), Duration::from_secs(5)).unwrap();

    let response = service.send(&master_request(), "token-abc").await.unwrap();
    assert_eq!(response["importedCount"], "1");

    let captured = server.await.unwrap();
    assert_eq!(
        captured.request_line(),
        "POST /contact.v1.ContactService/ImportContactWithCustomer HTTP/1.1"
    );
    assert_eq!(captured.header("authorization").as_deref(), Some("Bearer token-abc"));
    assert!(captured
        .header("content-type")
        .unwrap_or_default()
        .starts_with("application/json"));
    assert_eq!(
        captured.json(),
        serde_json::json!({"csv_data": "customer_id,name\nC001,山田"})
    );
}

/// 非2xxは本文テキストをそのままエラーにする
#[tokio::test]
async fn test_send_non_success_surfaces_body_text() {
    let (url, server) = spawn_stub(500, "customer service unavailable").await;
    let service = HttpImportService::new(url, Duration::from_secs(5)).unwrap();

    let err = service.send(&master_request(), "t").await.unwrap_err();
    assert_eq!(err, ImportError::Network("customer service unavailable".into()));
    assert_eq!(
        err.to_string(),
        "インポートに失敗しました: customer service unavailable"
    );
    server.await.unwrap();
}

/// 本文が空ならステータスを表示する
#[tokio::test]
async fn test_send_non_success_empty_body_reports_status() {
    let (url, server) = spawn_stub(503, "").await;
    let service = HttpImportService::new(url, Duration::from_secs(5)).unwrap();

    let err = service.send(&master_request(), "t").await.unwrap_err();
    assert_eq!(err, ImportError::Network("HTTP 503 Service Unavailable".into()));
    assert!(err.to_string().contains("503"));
    server.await.unwrap();
}

/// 成功ステータスでもJSONでなければ解析エラー
#[tokio::test]
async fn test_send_invalid_json() {
    let (url, server) = spawn_stub(200, "not json").await;
    let service = HttpImportService::new(url, Duration::from_secs(5)).unwrap();

    let err = service.send(&master_request(), "t").await.unwrap_err();
    assert!(matches!(err, ImportError::Json(_)));
    server.await.unwrap();
}

/// 接続できない場合はネットワークエラー
#[tokio::test]
async fn test_send_connection_refused() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let service = HttpImportService::new(format!("http://{}", addr), Duration::from_secs(5)).unwrap();
    let err = service.send(&master_request(), "t").await.unwrap_err();
    assert!(matches!(err, ImportError::Network(_)));
}

#[test]
fn test_url_for_joins_endpoint() {
    let service = HttpImportService::new("http://localhost:8082/", Duration::from_secs(1)).unwrap();
    assert_eq!(
        service.url_for(&master_request()),
        "http://localhost:8082/contact.v1.ContactService/ImportContactWithCustomer"
    );
}
