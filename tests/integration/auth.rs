use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn admin_routes_require_a_session() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::ADMIN).await;
    assert_eq!(res.status, 401);
    assert_eq!(res.body["code"], "TOKEN_MISSING");

    let res = app.post(routes::ADMIN_SETTINGS, &json!({"action": "start_game"})).await;
    assert_eq!(res.status, 401);
    assert_eq!(res.body["code"], "TOKEN_MISSING");
}

#[tokio::test]
async fn login_rejects_a_wrong_password() {
    let app = TestApp::spawn().await;

    let res = app
        .post(routes::ADMIN_LOGIN, &json!({"password": "not-the-password"}))
        .await;
    assert_eq!(res.status, 401);
    assert_eq!(res.body["code"], "INVALID_CREDENTIALS");

    // A failed login must not leave a usable session behind.
    let res = app.get(routes::ADMIN).await;
    assert_eq!(res.status, 401);
}

#[tokio::test]
async fn login_opens_the_admin_dashboard() {
    let app = TestApp::spawn().await;
    app.login_admin().await;

    let res = app.get(routes::ADMIN).await;
    assert_eq!(res.status, 200, "{}", res.text);
    assert_eq!(res.body["props"], 0);
    assert_eq!(res.body["entries"], 0);
    assert_eq!(res.body["settings"]["game_started"], false);
    assert_eq!(res.body["settings"]["submissions_locked"], false);
}

#[tokio::test]
async fn logout_invalidates_the_session_cookie() {
    let app = TestApp::spawn().await;
    app.login_admin().await;
    assert_eq!(app.get(routes::ADMIN).await.status, 200);

    let res = app.get(routes::ADMIN_LOGOUT).await;
    assert_eq!(res.status, 204);

    let res = app.get(routes::ADMIN).await;
    assert_eq!(res.status, 401);
    assert_eq!(res.body["code"], "TOKEN_MISSING");
}

#[tokio::test]
async fn a_garbage_cookie_is_rejected() {
    let app = TestApp::spawn().await;

    let res = app
        .client
        .get(format!("http://{}{}", app.addr, routes::ADMIN))
        .header("Cookie", "propbowl_session=not-a-token")
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(res.status().as_u16(), 401);
    let body: serde_json::Value = res.json().await.expect("Failed to parse body");
    assert_eq!(body["code"], "TOKEN_INVALID");
}
