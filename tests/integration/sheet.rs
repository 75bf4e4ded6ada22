use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn blank_sheet_lists_props_in_display_order() {
    let app = TestApp::spawn().await;
    app.login_admin().await;
    app.create_prop("First question?", &[("Yes", 1), ("No", 1)]).await;
    app.create_prop("Second question?", &[("A", 2), ("B", 3)]).await;

    let res = app.get(routes::PROP_SHEET).await;
    assert_eq!(res.status, 200, "{}", res.text);
    let props = res.body["props"].as_array().unwrap();
    assert_eq!(props.len(), 2);
    assert_eq!(props[0]["question"], "First question?");
    assert_eq!(props[1]["question"], "Second question?");
    assert_eq!(props[1]["answers"][1]["points"], 3);
}

#[tokio::test]
async fn submitting_a_sheet_stores_the_entry_and_picks() {
    let app = TestApp::spawn().await;
    app.login_admin().await;
    let (p1, a1) = app.create_prop("Coin toss?", &[("Heads", 1), ("Tails", 1)]).await;
    let (p2, a2) = app.create_prop("First score?", &[("TD", 1), ("FG", 2)]).await;

    let res = app
        .post(
            routes::PROP_SHEET,
            &json!({
                "name": "Alice",
                "picks": [
                    {"prop_id": p1, "answer_id": a1[0]},
                    {"prop_id": p2, "answer_id": a2[1]},
                ],
            }),
        )
        .await;
    assert_eq!(res.status, 201, "{}", res.text);
    assert_eq!(res.body["name"], "Alice");
    assert_eq!(res.body["picks_saved"], 2);

    let detail = app.get(&routes::entry(res.id())).await;
    assert_eq!(detail.status, 200);
    assert_eq!(detail.body["picks"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn partial_and_empty_pick_sets_are_accepted() {
    let app = TestApp::spawn().await;
    app.login_admin().await;
    let (p1, a1) = app.create_prop("Coin toss?", &[("Heads", 1), ("Tails", 1)]).await;
    app.create_prop("First score?", &[("TD", 1), ("FG", 2)]).await;

    let id = app.submit_entry("Partial", &[(p1, a1[0])]).await;
    let detail = app.get(&routes::entry(id)).await;
    let rows = detail.body["picks"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows[0]["pick"].is_object());
    assert!(rows[1]["pick"].is_null());

    // Skipping every question is still a valid submission.
    let res = app
        .post(routes::PROP_SHEET, &json!({"name": "Empty", "picks": []}))
        .await;
    assert_eq!(res.status, 201, "{}", res.text);
    assert_eq!(res.body["picks_saved"], 0);
}

#[tokio::test]
async fn blank_names_are_rejected() {
    let app = TestApp::spawn().await;

    let res = app
        .post(routes::PROP_SHEET, &json!({"name": "   ", "picks": []}))
        .await;
    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn names_are_unique_case_insensitively() {
    let app = TestApp::spawn().await;
    app.submit_entry("Alice", &[]).await;

    let res = app
        .post(routes::PROP_SHEET, &json!({"name": "ALICE", "picks": []}))
        .await;
    assert_eq!(res.status, 409);
    assert_eq!(res.body["code"], "NAME_TAKEN");
}

#[tokio::test]
async fn locking_submissions_closes_the_sheet() {
    let app = TestApp::spawn().await;
    app.login_admin().await;
    let res = app.settings_action("lock_submissions").await;
    assert_eq!(res.status, 200);

    let res = app.get(routes::PROP_SHEET).await;
    assert_eq!(res.status, 409);
    assert_eq!(res.body["code"], "SUBMISSIONS_CLOSED");

    let res = app
        .post(routes::PROP_SHEET, &json!({"name": "Late", "picks": []}))
        .await;
    assert_eq!(res.status, 409);
    assert_eq!(res.body["code"], "SUBMISSIONS_CLOSED");

    // Unlocking reopens it.
    app.settings_action("unlock_submissions").await;
    let res = app
        .post(routes::PROP_SHEET, &json!({"name": "Late", "picks": []}))
        .await;
    assert_eq!(res.status, 201, "{}", res.text);
}

#[tokio::test]
async fn starting_the_game_also_locks_submissions() {
    let app = TestApp::spawn().await;
    app.login_admin().await;

    let res = app.settings_action("start_game").await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["game_started"], true);
    assert_eq!(res.body["submissions_locked"], true);

    // Stopping the game does not reopen the sheet.
    let res = app.settings_action("stop_game").await;
    assert_eq!(res.body["game_started"], false);
    assert_eq!(res.body["submissions_locked"], true);
}

#[tokio::test]
async fn at_most_one_pick_per_prop() {
    let app = TestApp::spawn().await;
    app.login_admin().await;
    let (p1, a1) = app.create_prop("Coin toss?", &[("Heads", 1), ("Tails", 1)]).await;

    let res = app
        .post(
            routes::PROP_SHEET,
            &json!({
                "name": "Greedy",
                "picks": [
                    {"prop_id": p1, "answer_id": a1[0]},
                    {"prop_id": p1, "answer_id": a1[1]},
                ],
            }),
        )
        .await;
    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn picks_must_reference_an_answer_of_the_picked_prop() {
    let app = TestApp::spawn().await;
    app.login_admin().await;
    let (p1, _a1) = app.create_prop("Coin toss?", &[("Heads", 1), ("Tails", 1)]).await;
    let (_p2, a2) = app.create_prop("First score?", &[("TD", 1), ("FG", 2)]).await;

    let res = app
        .post(
            routes::PROP_SHEET,
            &json!({
                "name": "Crossed",
                "picks": [{"prop_id": p1, "answer_id": a2[0]}],
            }),
        )
        .await;
    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");

    let res = app
        .post(
            routes::PROP_SHEET,
            &json!({
                "name": "Ghost",
                "picks": [{"prop_id": 9999, "answer_id": 1}],
            }),
        )
        .await;
    assert_eq!(res.status, 400);
}
