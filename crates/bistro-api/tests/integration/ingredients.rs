//! Integration tests for the ingredient list.

use http::StatusCode;

use bistro_core::NewIngredient;
use bistro_storage::Store;

use crate::common::{CHEF_TOKEN, TestHarness};

#[tokio::test]
async fn test_ingredient_list_is_public() {
    let harness = TestHarness::new();
    harness
        .store
        .create_ingredient(NewIngredient::new("salt"))
        .await
        .unwrap();

    let resp = harness.get("/menu/ingredients/").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.view(), "menu/ingredient_list.html");
    assert_eq!(resp.context()["ingredients"][0]["name"], "salt");
    assert_eq!(resp.context()["form"]["has_errors"], false);
}

#[tokio::test]
async fn test_create_ingredient_redirects_to_list() {
    let harness = TestHarness::new();
    let resp = harness
        .post_form("/menu/ingredients/", &[("name", "pepper")], Some(CHEF_TOKEN))
        .await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(resp.location(), Some("/menu/ingredients/"));

    let names: Vec<String> = harness
        .store
        .ingredients()
        .await
        .unwrap()
        .into_iter()
        .map(|i| i.name)
        .collect();
    assert_eq!(names, ["pepper"]);
}

#[tokio::test]
async fn test_create_ingredient_blank_name_rerenders_list() {
    let harness = TestHarness::new();
    let resp = harness
        .post_form("/menu/ingredients/", &[("name", "  ")], Some(CHEF_TOKEN))
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.view(), "menu/ingredient_list.html");
    assert_eq!(resp.field_errors("name"), ["This field is required."]);
    assert!(harness.store.ingredients().await.unwrap().is_empty());
}
