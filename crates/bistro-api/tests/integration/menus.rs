//! Integration tests for the menu pages.

use chrono::{Duration, TimeZone, Utc};
use http::StatusCode;

use bistro_core::{MenuId, NewMenu};
use bistro_forms::EXPIRATION_IN_PAST;
use bistro_storage::{MenuFilter, Store};

use crate::common::{CHEF_TOKEN, TestHarness, id_from_location};

#[tokio::test]
async fn test_listing_shows_only_current_menus() {
    let harness = TestHarness::new();
    harness.seed_scenario().await;

    let resp = harness.get("/").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.view(), "menu/menu_list.html");

    let menus = resp.context()["menus"].as_array().unwrap();
    let seasons: Vec<&str> = menus
        .iter()
        .map(|m| m["menu"]["season"].as_str().unwrap())
        .collect();
    assert_eq!(seasons, ["Season1"]);

    let items: Vec<&str> = menus[0]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect();
    assert_eq!(items, ["item1", "item2"]);
}

#[tokio::test]
async fn test_listing_empty_store() {
    let harness = TestHarness::new();
    let resp = harness.get("/").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.context()["menus"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_listing_includes_menu_without_expiration_first() {
    let harness = TestHarness::new();
    harness.seed_scenario().await;
    harness
        .store
        .create_menu(NewMenu::new("Always"))
        .await
        .unwrap();

    let resp = harness.get("/").await;
    let seasons: Vec<&str> = resp.context()["menus"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["menu"]["season"].as_str().unwrap())
        .collect();
    assert_eq!(seasons, ["Always", "Season1"]);
}

#[tokio::test]
async fn test_menu_detail() {
    let harness = TestHarness::new();
    let scenario = harness.seed_scenario().await;

    let resp = harness
        .get(&format!("/menu/{}/", scenario.season1.id))
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.view(), "menu/menu_detail.html");
    assert_eq!(resp.context()["menu"]["menu"]["season"], "Season1");
    assert_eq!(resp.context()["menu"]["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_expired_menu_detail_still_reachable() {
    let harness = TestHarness::new();
    let scenario = harness.seed_scenario().await;

    let resp = harness
        .get(&format!("/menu/{}/", scenario.expired.id))
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.context()["menu"]["menu"]["season"], "MenuExpired");
}

#[tokio::test]
async fn test_menu_detail_unknown_id_is_not_found() {
    let harness = TestHarness::new();
    let resp = harness.get("/menu/999/").await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.body["error"]["category"], "not_found");
}

#[tokio::test]
async fn test_menu_detail_non_numeric_id_is_not_found() {
    let harness = TestHarness::new();
    let resp = harness.get("/menu/spring/").await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_new_menu_form_offers_items() {
    let harness = TestHarness::new();
    harness.seed_scenario().await;

    let resp = harness.get_as("/menu/new/", CHEF_TOKEN).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.view(), "menu/menu_form.html");
    assert_eq!(resp.context()["form"]["has_errors"], false);
    assert!(resp.context()["menu"].is_null());

    let labels: Vec<&str> = resp.context()["form"]["choices"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, ["item1", "item2"]);
}

#[tokio::test]
async fn test_create_menu_redirects_to_detail() {
    let harness = TestHarness::new();
    let scenario = harness.seed_scenario().await;
    let expires = harness.now + Duration::days(30);
    let item1 = scenario.item1.id.to_string();

    let resp = harness
        .post_form(
            "/menu/new/",
            &[
                ("season", "Spring"),
                ("expiration_date", &expires.to_rfc3339()),
                ("items", &item1),
            ],
            Some(CHEF_TOKEN),
        )
        .await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);

    let location = resp.location().unwrap();
    let id = MenuId::new(id_from_location(location));
    assert_eq!(location, format!("/menu/{id}/"));

    let menu = harness.store.menu(id).await.unwrap().unwrap();
    assert_eq!(menu.season, "Spring");
    assert_eq!(menu.expiration_date, Some(expires));
    assert_eq!(menu.items.len(), 1);
    assert!(menu.items.contains(&scenario.item1.id));
    assert_eq!(menu.created_date, harness.now);
}

#[tokio::test]
async fn test_create_menu_without_expiration() {
    let harness = TestHarness::new();
    let scenario = harness.seed_scenario().await;
    let item1 = scenario.item1.id.to_string();

    let resp = harness
        .post_form(
            "/menu/new/",
            &[("season", "Forever"), ("items", &item1)],
            Some(CHEF_TOKEN),
        )
        .await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);

    let id = MenuId::new(id_from_location(resp.location().unwrap()));
    let menu = harness.store.menu(id).await.unwrap().unwrap();
    assert_eq!(menu.expiration_date, None);
    assert_eq!(menu.items.len(), 1);
}

#[tokio::test]
async fn test_create_menu_without_items_rerenders_form() {
    let harness = TestHarness::new();
    harness.seed_scenario().await;
    let before = harness.store.list_menus(MenuFilter::All).await.unwrap().len();

    let resp = harness
        .post_form("/menu/new/", &[("season", "NoItems")], Some(CHEF_TOKEN))
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.view(), "menu/menu_form.html");
    assert_eq!(resp.field_errors("items"), ["This field is required."]);
    assert!(resp.field_errors("season").is_empty());

    let after = harness.store.list_menus(MenuFilter::All).await.unwrap().len();
    assert_eq!(after, before);
}

#[tokio::test]
async fn test_create_menu_from_date_parts() {
    let harness = TestHarness::new();
    let scenario = harness.seed_scenario().await;
    let item2 = scenario.item2.id.to_string();

    let resp = harness
        .post_form(
            "/menu/new/",
            &[
                ("season", "Summer"),
                ("items", &item2),
                ("expiration_date_year", "2026"),
                ("expiration_date_month", "6"),
                ("expiration_date_day", "1"),
            ],
            Some(CHEF_TOKEN),
        )
        .await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);

    let id = MenuId::new(id_from_location(resp.location().unwrap()));
    let menu = harness.store.menu(id).await.unwrap().unwrap();
    assert_eq!(
        menu.expiration_date,
        Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).single()
    );
}

#[tokio::test]
async fn test_rejected_date_parts_are_redisplayed() {
    let harness = TestHarness::new();
    let resp = harness
        .post_form(
            "/menu/new/",
            &[
                ("season", "Winter"),
                ("expiration_date_year", "2025"),
                ("expiration_date_month", "12"),
                ("expiration_date_day", "24"),
            ],
            Some(CHEF_TOKEN),
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.field_errors("expiration_date"), [EXPIRATION_IN_PAST]);
    assert_eq!(resp.form_field("expiration_date")["values"][0], "2025-12-24");
}

#[tokio::test]
async fn test_create_menu_with_past_expiration_rerenders_form() {
    let harness = TestHarness::new();
    let past = (harness.now - Duration::days(1)).to_rfc3339();

    let resp = harness
        .post_form(
            "/menu/new/",
            &[("season", "Old"), ("expiration_date", &past)],
            Some(CHEF_TOKEN),
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.view(), "menu/menu_form.html");
    assert_eq!(resp.context()["form"]["has_errors"], true);
    assert_eq!(resp.field_errors("expiration_date"), [EXPIRATION_IN_PAST]);
    assert_eq!(resp.form_field("season")["values"][0], "Old");

    let all = harness.store.list_menus(MenuFilter::All).await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_create_menu_expiring_exactly_now_rejected() {
    let harness = TestHarness::new();
    let now = harness.now.to_rfc3339();
    let resp = harness
        .post_form(
            "/menu/new/",
            &[("season", "Edge"), ("expiration_date", &now)],
            Some(CHEF_TOKEN),
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(!resp.field_errors("expiration_date").is_empty());
}

#[tokio::test]
async fn test_create_menu_missing_season_rerenders_form() {
    let harness = TestHarness::new();
    let resp = harness
        .post_form("/menu/new/", &[("season", "")], Some(CHEF_TOKEN))
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.field_errors("season"), ["This field is required."]);
}

#[tokio::test]
async fn test_create_menu_with_unknown_item_rerenders_form() {
    let harness = TestHarness::new();
    let resp = harness
        .post_form(
            "/menu/new/",
            &[("season", "Spring"), ("items", "42")],
            Some(CHEF_TOKEN),
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.field_errors("items").len(), 1);
}

#[tokio::test]
async fn test_edit_menu_form_is_prefilled() {
    let harness = TestHarness::new();
    let scenario = harness.seed_scenario().await;

    let resp = harness
        .get_as(&format!("/menu/{}/edit/", scenario.season1.id), CHEF_TOKEN)
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.view(), "menu/menu_form.html");
    assert_eq!(resp.form_field("season")["values"][0], "Season1");
    assert_eq!(
        resp.form_field("items")["values"].as_array().unwrap().len(),
        2
    );
    assert_eq!(resp.context()["menu"]["season"], "Season1");
}

#[tokio::test]
async fn test_edit_menu_persists_and_keeps_created_date() {
    let harness = TestHarness::new();
    let scenario = harness.seed_scenario().await;
    let id = scenario.season1.id;
    let item2 = scenario.item2.id.to_string();

    let resp = harness
        .post_form(
            &format!("/menu/{id}/edit/"),
            &[("season", "Season2"), ("items", &item2)],
            Some(CHEF_TOKEN),
        )
        .await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(resp.location(), Some(format!("/menu/{id}/").as_str()));

    let menu = harness.store.menu(id).await.unwrap().unwrap();
    assert_eq!(menu.season, "Season2");
    assert_eq!(menu.expiration_date, None);
    assert_eq!(menu.items.len(), 1);
    assert_eq!(menu.created_date, scenario.season1.created_date);
}

#[tokio::test]
async fn test_edit_menu_invalid_keeps_stored_menu() {
    let harness = TestHarness::new();
    let scenario = harness.seed_scenario().await;
    let id = scenario.season1.id;
    let past = (harness.now - Duration::hours(1)).to_rfc3339();

    let resp = harness
        .post_form(
            &format!("/menu/{id}/edit/"),
            &[("season", "Season2"), ("expiration_date", &past)],
            Some(CHEF_TOKEN),
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.field_errors("expiration_date"), [EXPIRATION_IN_PAST]);

    let menu = harness.store.menu(id).await.unwrap().unwrap();
    assert_eq!(menu, scenario.season1);
}

#[tokio::test]
async fn test_edit_unknown_menu_is_not_found() {
    let harness = TestHarness::new();
    let resp = harness.get_as("/menu/999/edit/", CHEF_TOKEN).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);

    let resp = harness
        .post_form("/menu/999/edit/", &[("season", "S")], Some(CHEF_TOKEN))
        .await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}
