// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Edit-and-save workflow for users.

use axum::http::{header, StatusCode};
use octofit_dashboard::models::{Record, User};
use octofit_dashboard::services::editor::{save, EditSession, SaveLocks, SaveOutcome};
use serde_json::json;
use std::time::Duration;
use tower::ServiceExt;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

const ALICE_FORM: &str = "name=Alice&email=a%40x.com&team=&fitness_level=beginner&avatar=";

async fn backend_with_alice() -> MockServer {
    let server = MockServer::start().await;
    common::mount_collection(
        &server,
        "users",
        json!([{"id": 1, "name": "Alice", "email": "a@x.com", "team": null}]),
    )
    .await;
    common::mount_collection(
        &server,
        "teams",
        json!({"results": [{"id": 2, "name": "Team DC"}, {"id": 5, "name": "Team Marvel"}]}),
    )
    .await;
    server
}

#[tokio::test]
async fn test_edit_modal_opens_with_no_team() {
    let server = backend_with_alice().await;
    let (app, _) = common::create_test_app(&server.uri());

    let response = app.oneshot(common::get("/users?edit=1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = common::body_text(response).await;
    assert!(html.contains("Edit User: Alice"));
    assert!(html.contains(r#"<option value="" selected>— No team —</option>"#));
    assert!(html.contains(r#"<option value="5">Team Marvel</option>"#));
    assert!(html.contains(r#"<option value="beginner" selected>Beginner</option>"#));
    assert!(html.contains(r#"name="email" value="a@x.com""#));
}

#[tokio::test]
async fn test_edit_unknown_user_is_not_found() {
    let server = backend_with_alice().await;
    let (app, _) = common::create_test_app(&server.uri());

    let response = app.oneshot(common::get("/users?edit=99")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_save_sends_null_team_and_reloads() {
    let server = backend_with_alice().await;
    Mock::given(method("PATCH"))
        .and(path("/api/users/1/"))
        .and(body_json(json!({
            "name": "Alice",
            "email": "a@x.com",
            "fitness_level": "beginner",
            "avatar": "",
            "team": null
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "name": "Alice"})))
        .expect(1)
        .mount(&server)
        .await;
    let (app, _) = common::create_test_app(&server.uri());

    let response = app
        .oneshot(common::post_form("/users/1/edit", ALICE_FORM))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/users");
}

#[tokio::test]
async fn test_save_sends_team_as_integer() {
    let server = backend_with_alice().await;
    Mock::given(method("PATCH"))
        .and(path("/api/users/1/"))
        .and(body_json(json!({
            "name": "Alice Smith",
            "email": "alice@x.com",
            "fitness_level": "advanced",
            "avatar": "🏃",
            "team": 5
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;
    let (app, _) = common::create_test_app(&server.uri());

    let form = concat!(
        "name=Alice+Smith&email=alice%40x.com&team=5",
        "&fitness_level=advanced&avatar=%F0%9F%8F%83"
    );
    let response = app
        .oneshot(common::post_form("/users/1/edit", form))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_rejected_save_keeps_modal_open() {
    let server = backend_with_alice().await;
    Mock::given(method("PATCH"))
        .and(path("/api/users/1/"))
        .respond_with(ResponseTemplate::new(400).set_body_string("invalid email"))
        .expect(1)
        .mount(&server)
        .await;
    let (app, _) = common::create_test_app(&server.uri());

    let response = app
        .oneshot(common::post_form("/users/1/edit", ALICE_FORM))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let html = common::body_text(response).await;
    assert!(html.contains("modal-dialog"));
    assert!(html.contains("HTTP 400: invalid email"));
    assert!(html.contains(
        r#"<button type="submit" class="btn btn-primary">Save changes</button>"#
    ));
    assert!(html.contains(r#"name="name" value="Alice""#));
}

#[tokio::test]
async fn test_invalid_draft_is_not_sent() {
    let server = backend_with_alice().await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let (app, _) = common::create_test_app(&server.uri());

    let form = "name=&email=not-an-email&team=&fitness_level=beginner&avatar=";
    let response = app
        .oneshot(common::post_form("/users/1/edit", form))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = common::body_text(response).await;
    assert!(html.contains("Name is required"));
    assert!(html.contains("Enter a valid email address"));
    assert!(html.contains("Edit User: Alice"));
}

#[tokio::test]
async fn test_submit_during_save_sends_nothing() {
    let server = backend_with_alice().await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let (app, state) = common::create_test_app(&server.uri());

    let _in_flight = state.save_locks.try_acquire("1").unwrap();
    let response = app
        .oneshot(common::post_form("/users/1/edit", ALICE_FORM))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let html = common::body_text(response).await;
    assert!(html.contains(
        r#"<button type="submit" class="btn btn-primary" disabled>Saving…</button>"#
    ));
}

#[tokio::test]
async fn test_concurrent_saves_issue_one_patch() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/users/1/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": 1}))
                .set_delay(Duration::from_millis(300)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = common::test_client(&server.uri());
    let locks = SaveLocks::new();
    let alice = User::from_value(&json!({"id": 1, "name": "Alice", "email": "a@x.com"}));
    let session = EditSession::open(&alice).unwrap();

    let (first, second) = tokio::join!(
        save(&client, &locks, session.clone()),
        save(&client, &locks, session),
    );

    assert!(matches!(first, SaveOutcome::Saved(_)));
    assert!(matches!(second, SaveOutcome::Busy(ref s) if s.saving));

    // Once the first save settles the slot is free again, and forgotten.
    assert!(locks.try_acquire("1").is_some());
    assert!(locks.is_empty());
}

#[tokio::test]
async fn test_save_error_survives_failed_reload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    common::mount_collection(&server, "teams", json!([])).await;
    Mock::given(method("PATCH"))
        .and(path("/api/users/1/"))
        .respond_with(ResponseTemplate::new(400).set_body_string("invalid email"))
        .expect(1)
        .mount(&server)
        .await;
    let (app, state) = common::create_test_app(&server.uri());

    let response = app
        .oneshot(common::post_form("/users/1/edit", ALICE_FORM))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let html = common::body_text(response).await;
    assert!(html.contains("HTTP error! status: 503"));
    assert!(html.contains("modal-dialog"));
    assert!(html.contains("HTTP 400: invalid email"));
    assert!(html.contains(r#"name="email" value="a@x.com""#));
    assert!(state.save_locks.is_empty());
}
