//! Integration tests for the item pages.

use http::StatusCode;
use std::collections::BTreeSet;

use bistro_core::{ItemId, NewIngredient, NewItem, UserId};
use bistro_storage::Store;

use crate::common::{CHEF_SUBJECT, CHEF_TOKEN, TestHarness, id_from_location};

#[tokio::test]
async fn test_item_detail_lists_ingredients() {
    let harness = TestHarness::new();
    let ing1 = harness
        .store
        .create_ingredient(NewIngredient::new("ing1"))
        .await
        .unwrap();
    let ing2 = harness
        .store
        .create_ingredient(NewIngredient::new("ing2"))
        .await
        .unwrap();
    let item = harness
        .store
        .create_item(NewItem::new("Soup", "Hot", UserId::new(CHEF_SUBJECT)))
        .await
        .unwrap();
    harness
        .store
        .add_ingredients(item.id, &[ing2.id, ing1.id])
        .await
        .unwrap();

    let resp = harness.get(&format!("/menu/item/{}/", item.id)).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.view(), "menu/item_detail.html");
    assert_eq!(resp.context()["item"]["item"]["name"], "Soup");

    let names: BTreeSet<&str> = resp.context()["item"]["ingredients"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, BTreeSet::from(["ing1", "ing2"]));
}

#[tokio::test]
async fn test_item_detail_unknown_id_is_not_found() {
    let harness = TestHarness::new();
    let resp = harness.get("/menu/item/999/").await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);

    let resp = harness.get("/menu/item/soup/").await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_new_item_form_offers_ingredients() {
    let harness = TestHarness::new();
    harness
        .store
        .create_ingredient(NewIngredient::new("basil"))
        .await
        .unwrap();

    let resp = harness.get_as("/menu/item/new/", CHEF_TOKEN).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.view(), "menu/item_form.html");
    assert_eq!(
        resp.context()["form"]["choices"]["ingredients"][0]["label"],
        "basil"
    );
}

#[tokio::test]
async fn test_create_item_attributes_acting_chef() {
    let harness = TestHarness::new();
    let basil = harness
        .store
        .create_ingredient(NewIngredient::new("basil"))
        .await
        .unwrap();
    let basil_id = basil.id.to_string();

    let resp = harness
        .post_form(
            "/menu/item/new/",
            &[
                ("name", "Pesto"),
                ("description", "Green sauce"),
                ("standard", "on"),
                ("ingredients", &basil_id),
            ],
            Some(CHEF_TOKEN),
        )
        .await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);

    let location = resp.location().unwrap();
    let id = ItemId::new(id_from_location(location));
    assert_eq!(location, format!("/menu/item/{id}/"));

    let item = harness.store.item(id).await.unwrap().unwrap();
    assert_eq!(item.name, "Pesto");
    assert_eq!(item.chef, UserId::new(CHEF_SUBJECT));
    assert!(item.standard);
    assert_eq!(item.ingredients, BTreeSet::from([basil.id]));
    assert_eq!(item.created_date, harness.now);
}

#[tokio::test]
async fn test_create_item_missing_fields_rerenders_form() {
    let harness = TestHarness::new();
    let resp = harness
        .post_form("/menu/item/new/", &[("name", "Pesto")], Some(CHEF_TOKEN))
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.view(), "menu/item_form.html");
    assert!(resp.field_errors("name").is_empty());
    assert_eq!(resp.field_errors("description"), ["This field is required."]);
    assert!(harness.store.items().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_edit_item_keeps_chef_and_created_date() {
    let harness = TestHarness::new();
    let item = harness
        .store
        .create_item(NewItem::new("Soup", "Hot", UserId::new("original-chef")))
        .await
        .unwrap();

    let resp = harness
        .get_as(&format!("/menu/item/{}/edit/", item.id), CHEF_TOKEN)
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.form_field("name")["values"][0], "Soup");

    let resp = harness
        .post_form(
            &format!("/menu/item/{}/edit/", item.id),
            &[("name", "Cold Soup"), ("description", "Gazpacho")],
            Some(CHEF_TOKEN),
        )
        .await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);

    let updated = harness.store.item(item.id).await.unwrap().unwrap();
    assert_eq!(updated.name, "Cold Soup");
    assert_eq!(updated.description, "Gazpacho");
    assert!(!updated.standard);
    assert_eq!(updated.chef, UserId::new("original-chef"));
    assert_eq!(updated.created_date, item.created_date);
}

#[tokio::test]
async fn test_edit_unknown_item_is_not_found() {
    let harness = TestHarness::new();
    let resp = harness.get_as("/menu/item/999/edit/", CHEF_TOKEN).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}
