//! Integration tests for the liveness probe.

use http::StatusCode;

use crate::common::TestHarness;

#[tokio::test]
async fn test_healthz_is_public() {
    let harness = TestHarness::new();
    let resp = harness.get("/healthz").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["status"], "ok");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let harness = TestHarness::new();
    let resp = harness.get("/menus/").await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}
