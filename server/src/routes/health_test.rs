use super::*;

#[tokio::test]
async fn health_reports_ok() {
    let Json(body) = health().await;
    assert_eq!(body.status, "ok");
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({ "status": "ok" }));
}
