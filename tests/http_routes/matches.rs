use reqwest;
use serde_json::{Value, json};
use serial_test::serial;

async fn create_match(client: &reqwest::Client, base_url: &str, p1: &str, p2: &str) -> Value {
    let resp = client
        .post(format!("{}/api/match", base_url))
        .json(&json!({ "playerOneName": p1, "playerTwoName": p2 }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), 201);
    resp.json().await.expect("invalid json")
}

async fn award(client: &reqwest::Client, base_url: &str, uuid: &str, player: &str) -> Value {
    let resp = client
        .post(format!("{}/api/match/{}/score", base_url, uuid))
        .json(&json!({ "player": player }))
        .send()
        .await
        .expect("request failed");
    assert!(resp.status().is_success());
    resp.json().await.expect("invalid json")
}

async fn award_n(
    client: &reqwest::Client,
    base_url: &str,
    uuid: &str,
    player: &str,
    n: usize,
) -> Value {
    let mut last = Value::Null;
    for _ in 0..n {
        last = award(client, base_url, uuid, player).await;
    }
    last
}

/// Straight-sets win: 4 points x 6 games x 2 sets.
async fn win_match(client: &reqwest::Client, base_url: &str, uuid: &str, player: &str) -> Value {
    award_n(client, base_url, uuid, player, 48).await
}

fn uuid_of(view: &Value) -> String {
    view.get("matchUuid")
        .and_then(|v| v.as_str())
        .expect("view missing matchUuid")
        .to_string()
}

#[tokio::test]
#[serial]
async fn create_match_returns_initial_view() {
    let app = crate::common::spawn_app_with_containers().await;
    let client = reqwest::Client::new();

    let view = create_match(&client, &app.base_url, "Alice", "Bob").await;

    assert_eq!(view["playerOneName"], "Alice");
    assert_eq!(view["playerTwoName"], "Bob");
    assert_eq!(view["score"]["type"], "live");
    assert_eq!(view["score"]["sets"], json!([0, 0]));
    assert_eq!(view["score"]["games"], json!([0, 0]));
    assert_eq!(view["score"]["points"], json!(["0", "0"]));
    assert!(view.get("winner").is_none());
    assert!(view.get("matchCompleted").is_none());

    app.stop().await;
}

#[tokio::test]
#[serial]
async fn create_match_rejects_invalid_players() {
    let app = crate::common::spawn_app_with_containers().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/match", app.base_url))
        .json(&json!({ "playerOneName": "Alice", "playerTwoName": "Alice" }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), 400);

    let resp = client
        .post(format!("{}/api/match", app.base_url))
        .json(&json!({ "playerOneName": "", "playerTwoName": "Bob" }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), 400);

    app.stop().await;
}

#[tokio::test]
#[serial]
async fn points_accumulate_through_a_game() {
    let app = crate::common::spawn_app_with_containers().await;
    let client = reqwest::Client::new();

    let view = create_match(&client, &app.base_url, "Alice", "Bob").await;
    let uuid = uuid_of(&view);

    let view = award_n(&client, &app.base_url, &uuid, "player1", 3).await;
    assert_eq!(view["score"]["points"], json!(["40", "0"]));

    let view = award(&client, &app.base_url, &uuid, "player1").await;
    assert_eq!(view["score"]["games"], json!([1, 0]));
    assert_eq!(view["score"]["points"], json!(["0", "0"]));

    app.stop().await;
}

#[tokio::test]
#[serial]
async fn invalid_side_is_rejected() {
    let app = crate::common::spawn_app_with_containers().await;
    let client = reqwest::Client::new();

    let view = create_match(&client, &app.base_url, "Alice", "Bob").await;
    let uuid = uuid_of(&view);

    let resp = client
        .post(format!("{}/api/match/{}/score", app.base_url, uuid))
        .json(&json!({ "player": "player3" }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), 400);

    app.stop().await;
}

#[tokio::test]
#[serial]
async fn completed_match_is_persisted() {
    let app = crate::common::spawn_app_with_containers().await;
    let client = reqwest::Client::new();

    let view = create_match(&client, &app.base_url, "Alice", "Bob").await;
    let uuid = uuid_of(&view);

    let final_view = win_match(&client, &app.base_url, &uuid, "player1").await;
    assert_eq!(final_view["matchCompleted"], json!(true));
    assert_eq!(final_view["winner"], "Alice");
    assert_eq!(final_view["score"]["type"], "final");
    assert_eq!(final_view["score"]["rendered"], "6-0, 6-0");

    // Both players were created on demand during persistence.
    let players = tennis_score_be::db::player::PlayerRepository::new(app.pg_pool.clone());
    assert!(players.find_by_name("Alice").await.unwrap().is_some());
    assert!(players.find_by_name("Bob").await.unwrap().is_some());

    // The durable record round-trips through GET with the same names
    // and the canonical score string.
    let resp = client
        .get(format!("{}/api/match/{}", app.base_url, uuid))
        .send()
        .await
        .expect("request failed");
    assert!(resp.status().is_success());
    let fetched: Value = resp.json().await.expect("invalid json");
    assert_eq!(fetched["playerOneName"], "Alice");
    assert_eq!(fetched["playerTwoName"], "Bob");
    assert_eq!(fetched["matchCompleted"], json!(true));
    assert_eq!(fetched["score"]["type"], "final");
    assert_eq!(fetched["score"]["rendered"], "6-0, 6-0");

    let records = tennis_score_be::db::match_record::MatchRecordRepository::new(app.pg_pool.clone());
    assert_eq!(records.count().await.unwrap(), 1);

    app.stop().await;
}

#[tokio::test]
#[serial]
async fn completed_match_rejects_further_points() {
    let app = crate::common::spawn_app_with_containers().await;
    let client = reqwest::Client::new();

    let view = create_match(&client, &app.base_url, "Alice", "Bob").await;
    let uuid = uuid_of(&view);
    win_match(&client, &app.base_url, &uuid, "player2").await;

    let view = award(&client, &app.base_url, &uuid, "player1").await;
    assert_eq!(view["matchCompleted"], json!(true));
    assert!(view.get("error").is_some());
    // Nothing moved: the persisted score is unchanged.
    assert_eq!(view["score"]["rendered"], "0-6, 0-6");

    app.stop().await;
}

#[tokio::test]
#[serial]
async fn reset_clears_an_active_match() {
    let app = crate::common::spawn_app_with_containers().await;
    let client = reqwest::Client::new();

    let view = create_match(&client, &app.base_url, "Alice", "Bob").await;
    let uuid = uuid_of(&view);
    award_n(&client, &app.base_url, &uuid, "player2", 5).await;

    let resp = client
        .post(format!("{}/api/match/{}/reset", app.base_url, uuid))
        .send()
        .await
        .expect("request failed");
    assert!(resp.status().is_success());
    let view: Value = resp.json().await.expect("invalid json");

    assert_eq!(view["score"]["games"], json!([0, 0]));
    assert_eq!(view["score"]["points"], json!(["0", "0"]));
    assert!(view.get("info").is_some());
    assert!(view.get("error").is_none());

    app.stop().await;
}

#[tokio::test]
#[serial]
async fn reset_rejected_for_completed_match() {
    let app = crate::common::spawn_app_with_containers().await;
    let client = reqwest::Client::new();

    let view = create_match(&client, &app.base_url, "Alice", "Bob").await;
    let uuid = uuid_of(&view);
    win_match(&client, &app.base_url, &uuid, "player1").await;

    let resp = client
        .post(format!("{}/api/match/{}/reset", app.base_url, uuid))
        .send()
        .await
        .expect("request failed");
    assert!(resp.status().is_success());
    let view: Value = resp.json().await.expect("invalid json");

    assert!(view.get("error").is_some());
    assert_eq!(view["matchCompleted"], json!(true));
    // The persisted record is untouched.
    assert_eq!(view["score"]["rendered"], "6-0, 6-0");

    app.stop().await;
}

#[tokio::test]
#[serial]
async fn unknown_match_returns_not_found() {
    let app = crate::common::spawn_app_with_containers().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!(
            "{}/api/match/00000000-0000-0000-0000-000000000000",
            app.base_url
        ))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), 404);

    let resp = client
        .post(format!(
            "{}/api/match/00000000-0000-0000-0000-000000000000/score",
            app.base_url
        ))
        .json(&json!({ "player": "player1" }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), 404);

    let resp = client
        .post(format!(
            "{}/api/match/00000000-0000-0000-0000-000000000000/reset",
            app.base_url
        ))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), 404);

    app.stop().await;
}

#[tokio::test]
#[serial]
async fn list_unifies_active_and_completed() {
    let app = crate::common::spawn_app_with_containers().await;
    let client = reqwest::Client::new();

    let m1 = create_match(&client, &app.base_url, "Alice", "Bob").await;
    let m1_uuid = uuid_of(&m1);
    let m2 = create_match(&client, &app.base_url, "Carol", "Dave").await;
    let m2_uuid = uuid_of(&m2);

    win_match(&client, &app.base_url, &m1_uuid, "player1").await;

    let resp = client
        .get(format!("{}/api/match?page=1&perPage=10", app.base_url))
        .send()
        .await
        .expect("request failed");
    assert!(resp.status().is_success());
    let body: Value = resp.json().await.expect("invalid json");

    let matches = body["matches"].as_array().expect("matches array");
    assert_eq!(matches.len(), 2);
    // Active match first, completed one after it.
    assert_eq!(uuid_of(&matches[0]), m2_uuid);
    assert_eq!(matches[0]["score"]["type"], "live");
    assert_eq!(uuid_of(&matches[1]), m1_uuid);
    assert_eq!(matches[1]["score"]["type"], "final");
    assert_eq!(body["totalPages"], json!(1));

    // Filter matching neither name: empty page, zero pages.
    let resp = client
        .get(format!(
            "{}/api/match?page=1&perPage=10&filter=foo",
            app.base_url
        ))
        .send()
        .await
        .expect("request failed");
    let body: Value = resp.json().await.expect("invalid json");
    assert_eq!(body["matches"].as_array().unwrap().len(), 0);
    assert_eq!(body["totalPages"], json!(0));

    // Case-insensitive substring filter hits the completed match only.
    let resp = client
        .get(format!(
            "{}/api/match?page=1&perPage=10&filter=ali",
            app.base_url
        ))
        .send()
        .await
        .expect("request failed");
    let body: Value = resp.json().await.expect("invalid json");
    let matches = body["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(uuid_of(&matches[0]), m1_uuid);

    app.stop().await;
}

#[tokio::test]
#[serial]
async fn list_paginates_across_pages() {
    let app = crate::common::spawn_app_with_containers().await;
    let client = reqwest::Client::new();

    create_match(&client, &app.base_url, "Alice", "Bob").await;
    create_match(&client, &app.base_url, "Carol", "Dave").await;
    create_match(&client, &app.base_url, "Erin", "Frank").await;

    let resp = client
        .get(format!("{}/api/match?page=1&perPage=2", app.base_url))
        .send()
        .await
        .expect("request failed");
    let body: Value = resp.json().await.expect("invalid json");
    assert_eq!(body["matches"].as_array().unwrap().len(), 2);
    assert_eq!(body["totalPages"], json!(2));

    let resp = client
        .get(format!("{}/api/match?page=2&perPage=2", app.base_url))
        .send()
        .await
        .expect("request failed");
    let body: Value = resp.json().await.expect("invalid json");
    assert_eq!(body["matches"].as_array().unwrap().len(), 1);

    let resp = client
        .get(format!("{}/api/match?page=0&perPage=2", app.base_url))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), 400);

    app.stop().await;
}

#[tokio::test]
#[serial]
async fn tiebreak_set_is_recorded_in_final_score() {
    let app = crate::common::spawn_app_with_containers().await;
    let client = reqwest::Client::new();

    let view = create_match(&client, &app.base_url, "Alice", "Bob").await;
    let uuid = uuid_of(&view);

    // Set 1 to Alice, 6-0.
    award_n(&client, &app.base_url, &uuid, "player1", 24).await;
    // Set 2: games to 6-6 (alternating), then the tiebreak 7-5 to Alice.
    for _ in 0..6 {
        award_n(&client, &app.base_url, &uuid, "player1", 4).await;
        award_n(&client, &app.base_url, &uuid, "player2", 4).await;
    }
    let view = award(&client, &app.base_url, &uuid, "player1").await;
    assert_eq!(view["score"]["isTiebreak"], json!(true));
    for _ in 0..4 {
        award(&client, &app.base_url, &uuid, "player2").await;
        award(&client, &app.base_url, &uuid, "player1").await;
    }
    award(&client, &app.base_url, &uuid, "player2").await;
    award(&client, &app.base_url, &uuid, "player1").await;
    let final_view = award(&client, &app.base_url, &uuid, "player1").await;

    assert_eq!(final_view["matchCompleted"], json!(true));
    assert_eq!(final_view["winner"], "Alice");
    assert_eq!(final_view["score"]["rendered"], "6-0, 7-6(7-5)");

    app.stop().await;
}
