//! HTTP-level integration tests for the admin login, session gate, listing
//! and CSV export.

mod common;

use axum::http::{header, StatusCode};
use common::{
    body_json, body_text, get, get_with_cookie, post_json, session_pair, TEST_ADMIN_SECRET,
};
use serde_json::json;
use sqlx::PgPool;

fn admin_cookie() -> String {
    format!("admin_session={TEST_ADMIN_SECRET}")
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[tokio::test]
async fn login_with_correct_secret_sets_cookie() {
    let app = common::build_test_app(common::unreachable_pool());
    let response = post_json(
        app,
        "/api/v1/admin/login",
        json!({ "password": TEST_ADMIN_SECRET }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login must set the session cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with(&admin_cookie()));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));
    assert!(set_cookie.contains("Path=/"));
    assert!(set_cookie.contains("Max-Age=604800"));
    assert!(!set_cookie.contains("Secure"));

    assert_eq!(body_json(response).await["data"]["granted"], true);
}

#[tokio::test]
async fn login_accepts_pwd_alias() {
    let app = common::build_test_app(common::unreachable_pool());
    let response = post_json(app, "/api/v1/admin/login", json!({ "pwd": TEST_ADMIN_SECRET })).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(session_pair(&response), admin_cookie());
}

#[tokio::test]
async fn login_with_wrong_secret_is_unauthorized() {
    let app = common::build_test_app(common::unreachable_pool());
    let response = post_json(app, "/api/v1/admin/login", json!({ "password": "guess" })).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn login_without_password_is_bad_request() {
    let app = common::build_test_app(common::unreachable_pool());
    let response = post_json(app, "/api/v1/admin/login", json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn get_on_login_is_method_not_allowed() {
    let app = common::build_test_app(common::unreachable_pool());
    let response = get(app, "/api/v1/admin/login").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn login_is_denied_when_no_secret_is_configured() {
    let mut config = common::test_config();
    config.admin_secret = None;
    let app = common::build_test_app_with(common::unreachable_pool(), config);

    let response = post_json(app, "/api/v1/admin/login", json!({ "password": "anything" })).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Session gate
// ---------------------------------------------------------------------------

/// Log in with `secret`, then replay the issued cookie against the listing.
async fn login_and_list(secret: &str) -> StatusCode {
    let mut config = common::test_config();
    config.admin_secret = Some(secret.to_string());
    let pool = common::unreachable_pool();

    let login = post_json(
        common::build_test_app_with(pool.clone(), config.clone()),
        "/api/v1/admin/login",
        json!({ "password": secret }),
    )
    .await;
    assert_eq!(login.status(), StatusCode::OK);
    let cookie = session_pair(&login);

    let response = get_with_cookie(
        common::build_test_app_with(pool, config),
        "/api/v1/admin/leads",
        &cookie,
    )
    .await;
    let status = response.status();
    if status == StatusCode::OK {
        let json = body_json(response).await;
        assert_eq!(json["data"]["items"], json!([]));
        assert_eq!(json["data"]["page"], 1);
    }
    status
}

#[tokio::test]
async fn issued_cookie_reaches_listing() {
    assert_eq!(login_and_list(TEST_ADMIN_SECRET).await, StatusCode::OK);
}

#[tokio::test]
async fn issued_cookie_survives_spaces_and_non_ascii() {
    assert_eq!(login_and_list("open sesame 密碼").await, StatusCode::OK);
}

#[tokio::test]
async fn issued_cookie_survives_separators_and_percent() {
    assert_eq!(login_and_list("p%41ss; x=1, y").await, StatusCode::OK);
}

#[tokio::test]
async fn listing_without_cookie_redirects_to_entry_point() {
    let app = common::build_test_app(common::unreachable_pool());
    let response = get(app, "/api/v1/admin/leads").await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/?need_admin=1");
}

#[tokio::test]
async fn stale_cookie_redirects() {
    let app = common::build_test_app(common::unreachable_pool());
    let response = get_with_cookie(app, "/api/v1/admin/leads/export", "admin_session=old").await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/?need_admin=1");
}

#[tokio::test]
async fn listing_degrades_to_empty_page_when_store_fails() {
    let app = common::build_test_app(common::unreachable_pool());
    let response = get_with_cookie(app, "/api/v1/admin/leads?page=3&q=Lee", &admin_cookie()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["items"], json!([]));
    assert_eq!(json["data"]["total"], 0);
    assert_eq!(json["data"]["page"], 1);
    assert_eq!(json["data"]["page_size"], 20);
    assert_eq!(json["data"]["total_pages"], 1);
    assert_eq!(json["data"]["query"], "lee");
}

#[tokio::test]
async fn export_sends_csv_attachment() {
    let app = common::build_test_app(common::unreachable_pool());
    let response = get_with_cookie(app, "/api/v1/admin/leads/export", &admin_cookie()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/csv; charset=utf-8"
    );
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"leads_"));
    assert!(disposition.ends_with(".csv\""));

    let body = body_text(response).await;
    assert!(body.starts_with('\u{FEFF}'));
    assert!(body.contains(r#""Created At","Client Name","Phone""#));
    assert_eq!(body.lines().count(), 1);
}

#[tokio::test]
async fn env_check_reports_presence_only() {
    let app = common::build_test_app(common::unreachable_pool());
    let response = get(app, "/api/v1/env-check").await;

    assert_eq!(response.status(), StatusCode::OK);
    let text = body_text(response).await;
    assert!(!text.contains(TEST_ADMIN_SECRET));

    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["data"]["has_admin_secret"], true);
    assert_eq!(json["data"]["environment"], "development");
    assert_eq!(json["data"]["secure_cookies"], false);
    assert_eq!(json["data"]["store_reachable"], false);
}

// ---------------------------------------------------------------------------
// End to end against a live store
// ---------------------------------------------------------------------------

async fn submit(pool: &PgPool, body: serde_json::Value) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/leads", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn login_then_list_newest_first(pool: PgPool) {
    submit(&pool, json!({ "client_name": "Chen", "area": 10 })).await;
    submit(&pool, json!({ "client_name": "Lin", "phone": "0922" })).await;

    let login = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/login",
        json!({ "password": TEST_ADMIN_SECRET }),
    )
    .await;
    let cookie = session_pair(&login);

    let response =
        get_with_cookie(common::build_test_app(pool.clone()), "/api/v1/admin/leads", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 2);
    assert_eq!(json["data"]["items"][0]["client_name"], "Lin");
    assert_eq!(json["data"]["items"][1]["client_name"], "Chen");
    assert_eq!(json["data"]["items"][1]["quote_estimate"], 280_000);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn search_filters_only_the_current_page(pool: PgPool) {
    submit(&pool, json!({ "client_name": "Chen", "email": "chen@example.com" })).await;
    submit(&pool, json!({ "client_name": "Lin" })).await;

    let response = get_with_cookie(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/leads?q=CHEN",
        &admin_cookie(),
    )
    .await;
    let json = body_json(response).await;

    assert_eq!(json["data"]["total"], 2);
    assert_eq!(json["data"]["items"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["items"][0]["client_name"], "Chen");
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn export_guards_phone_and_escapes_quotes(pool: PgPool) {
    submit(
        &pool,
        json!({
            "client_name": "Lee \"Jr\"",
            "phone": "0912345678",
            "notes": "kitchen, bath\nand hall",
        }),
    )
    .await;

    let response = get_with_cookie(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/leads/export",
        &admin_cookie(),
    )
    .await;
    let body = body_text(response).await;
    let row = body.lines().nth(1).unwrap();

    assert!(row.contains(r#""Lee ""Jr""""#));
    assert!(row.contains("\"\t0912345678\""));
    assert!(row.ends_with(r#""kitchen, bath and hall""#));
}
