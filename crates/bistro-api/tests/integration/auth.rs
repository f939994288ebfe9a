//! Integration tests for login gating on write pages.

use axum::body::Body;
use http::{Request, StatusCode, header};

use bistro_core::UserId;
use bistro_storage::{MenuFilter, Store};

use crate::common::{CHEF_TOKEN, TestHarness, id_from_location};

#[tokio::test]
async fn test_anonymous_new_menu_redirects_to_login() {
    let harness = TestHarness::new();
    let resp = harness.get("/menu/new/").await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(
        resp.location(),
        Some("/accounts/login/?next=%2Fmenu%2Fnew%2F")
    );
}

#[tokio::test]
async fn test_anonymous_create_menu_is_not_persisted() {
    let harness = TestHarness::new();
    let resp = harness
        .post_form("/menu/new/", &[("season", "Sneaky")], None)
        .await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert!(resp.location().unwrap().starts_with("/accounts/login/"));

    let all = harness.store.list_menus(MenuFilter::All).await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_anonymous_edit_redirects_before_lookup() {
    let harness = TestHarness::new();
    let resp = harness.get("/menu/999/edit/").await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(
        resp.location(),
        Some("/accounts/login/?next=%2Fmenu%2F999%2Fedit%2F")
    );
}

#[tokio::test]
async fn test_anonymous_item_and_ingredient_writes_redirect() {
    let harness = TestHarness::new();
    for uri in ["/menu/item/new/", "/menu/ingredients/"] {
        let resp = harness.post_form(uri, &[("name", "x")], None).await;
        assert_eq!(resp.status, StatusCode::SEE_OTHER, "{uri}");
    }
    assert!(harness.store.ingredients().await.unwrap().is_empty());
    assert!(harness.store.items().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_token_is_treated_as_anonymous() {
    let harness = TestHarness::new();
    let resp = harness.get_as("/menu/new/", "not-a-token").await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_read_pages_do_not_require_login() {
    let harness = TestHarness::new();
    let scenario = harness.seed_scenario().await;
    for uri in [
        "/".to_string(),
        format!("/menu/{}/", scenario.season1.id),
        format!("/menu/item/{}/", scenario.item1.id),
        "/menu/ingredients/".to_string(),
    ] {
        let resp = harness.get(&uri).await;
        assert_eq!(resp.status, StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn test_session_cookie_authenticates() {
    let harness = TestHarness::new();
    let builder = Request::get("/menu/new/")
        .header(header::COOKIE, format!("bistro_session={CHEF_TOKEN}"));
    let resp = harness.send(builder, Body::empty()).await;
    assert_eq!(resp.status, StatusCode::OK);
}

#[tokio::test]
async fn test_custom_login_url() {
    let mut config = bistro_api::BistroConfig::default();
    config.auth.login_url = "/login".to_string();
    let harness = TestHarness::with_config(config);

    let resp = harness.get("/menu/item/new/").await;
    assert_eq!(
        resp.location(),
        Some("/login?next=%2Fmenu%2Fitem%2Fnew%2F")
    );
}

#[tokio::test]
async fn test_dev_mode_acts_as_dev_user() {
    let harness = TestHarness::with_auth_disabled();
    let resp = harness
        .post_form(
            "/menu/item/new/",
            &[("name", "Toast"), ("description", "Bread, warmed")],
            None,
        )
        .await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);

    let id = bistro_core::ItemId::new(id_from_location(resp.location().unwrap()));
    let item = harness.store.item(id).await.unwrap().unwrap();
    assert_eq!(item.chef, UserId::new(harness.config.auth.dev_user.subject.as_str()));
}
