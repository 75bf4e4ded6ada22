use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn polling_endpoint_is_gated_until_the_game_starts() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::API_STANDINGS).await;
    assert_eq!(res.status, 403);
    // Legacy body shape, relied on by existing pollers.
    assert_eq!(res.body, json!({"error": "Game not started"}));

    app.login_admin().await;
    app.settings_action("start_game").await;

    let res = app.get(routes::API_STANDINGS).await;
    assert_eq!(res.status, 200, "{}", res.text);
}

#[tokio::test]
async fn standings_reflect_resolved_props() {
    let app = TestApp::spawn().await;
    app.login_admin().await;
    let (p1, a1) = app.create_prop("Coin toss?", &[("Heads", 1), ("Tails", 1)]).await;
    let (p2, a2) = app.create_prop("First score?", &[("TD", 3), ("FG", 2)]).await;

    let alice = app.submit_entry("Alice", &[(p1, a1[0]), (p2, a2[0])]).await;
    let bob = app.submit_entry("Bob", &[(p1, a1[1]), (p2, a2[1])]).await;

    app.settings_action("start_game").await;

    // Nothing resolved yet: everyone is on zero.
    let res = app.get(routes::API_STANDINGS).await;
    assert_eq!(res.body["resolved"], 0);
    assert_eq!(res.body["total"], 2);
    for row in res.body["standings"].as_array().unwrap() {
        assert_eq!(row["score"], 0);
    }

    // Heads it is: Alice scores 1.
    app.resolve_prop(p1, Some(a1[0])).await;
    let res = app.get(routes::API_STANDINGS).await;
    assert_eq!(res.body["resolved"], 1);
    let rows = res.body["standings"].as_array().unwrap();
    assert_eq!(rows[0], json!({"name": "Alice", "score": 1, "id": alice}));
    assert_eq!(rows[1], json!({"name": "Bob", "score": 0, "id": bob}));

    // Field goal first: Bob takes the lead 2-1.
    app.resolve_prop(p2, Some(a2[1])).await;
    let res = app.get(routes::API_STANDINGS).await;
    assert_eq!(res.body["resolved"], 2);
    let rows = res.body["standings"].as_array().unwrap();
    assert_eq!(rows[0]["name"], "Bob");
    assert_eq!(rows[0]["score"], 2);
    assert_eq!(rows[1]["name"], "Alice");
}

#[tokio::test]
async fn unresolving_a_prop_restores_the_scores() {
    let app = TestApp::spawn().await;
    app.login_admin().await;
    let (p1, a1) = app.create_prop("Coin toss?", &[("Heads", 5)]).await;
    app.submit_entry("Alice", &[(p1, a1[0])]).await;
    app.settings_action("start_game").await;

    app.resolve_prop(p1, Some(a1[0])).await;
    let res = app.get(routes::API_STANDINGS).await;
    assert_eq!(res.body["standings"][0]["score"], 5);

    app.resolve_prop(p1, None).await;
    let res = app.get(routes::API_STANDINGS).await;
    assert_eq!(res.body["standings"][0]["score"], 0);
    assert_eq!(res.body["resolved"], 0);
}

#[tokio::test]
async fn full_standings_rank_and_break_ties_by_name() {
    let app = TestApp::spawn().await;
    app.login_admin().await;
    let (p1, a1) = app.create_prop("Coin toss?", &[("Heads", 2), ("Tails", 2)]).await;

    app.submit_entry("zoe", &[(p1, a1[0])]).await;
    app.submit_entry("Adam", &[(p1, a1[0])]).await;
    app.submit_entry("Mallory", &[(p1, a1[1])]).await;

    app.resolve_prop(p1, Some(a1[0])).await;

    // The full view is public regardless of game state.
    let res = app.get(routes::STANDINGS).await;
    assert_eq!(res.status, 200, "{}", res.text);
    let rows = res.body["standings"].as_array().unwrap();
    assert_eq!(rows.len(), 3);

    // Tied scores order by name, case-insensitively.
    assert_eq!(rows[0]["rank"], 1);
    assert_eq!(rows[0]["name"], "Adam");
    assert_eq!(rows[0]["correct"], 1);
    assert_eq!(rows[1]["rank"], 2);
    assert_eq!(rows[1]["name"], "zoe");
    assert_eq!(rows[2]["rank"], 3);
    assert_eq!(rows[2]["name"], "Mallory");
    assert_eq!(rows[2]["score"], 0);
}
