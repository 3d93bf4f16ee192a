mod test_utils;

use reqwest::StatusCode;
use serde_json::{Value, json};

use touchline_types::{Result, errors::ApplicationError};

use crate::test_utils::tests::{
    add_player, create_match, create_team, id_of, onboard_player, set_availability,
    setup_http_client, setup_web_app, signup_coach,
};

#[tokio::test]
async fn test_coach_manages_teams_and_roster() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let coach = setup_http_client();
    signup_coach(&app, &coach).await;

    let team = create_team(&app, &coach, "Seniors").await;
    let team_id = id_of(&team);

    let res = coach
        .patch(app.url(&format!("/teams/{}", team_id)))
        .json(&json!({ "name": "Seniors A" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = coach.get(app.url("/teams")).send().await.unwrap();
    let teams: Vec<Value> = res.json().await.unwrap();
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0]["name"], "Seniors A");

    let player = add_player(&app, &coach, &team_id, "Antoine", " Scrum-half, Fly-half ,").await;
    assert_eq!(player["positions"], json!(["Scrum-half", "Fly-half"]));
    let player_id = id_of(&player);

    let res = coach
        .patch(app.url(&format!("/players/{}", player_id)))
        .json(&json!({ "name": "Antoine D.", "positions": "Fly-half" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = coach
        .get(app.url(&format!("/teams/{}/players", team_id)))
        .send()
        .await
        .unwrap();
    let roster: Vec<Value> = res.json().await.unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0]["name"], "Antoine D.");
    assert_eq!(roster[0]["positions"], json!(["Fly-half"]));

    let res = coach
        .delete(app.url(&format!("/players/{}", player_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = coach
        .get(app.url(&format!("/players/{}", player_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = coach
        .delete(app.url(&format!("/teams/{}", team_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn test_clubs_do_not_see_each_other() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let coach = setup_http_client();
    signup_coach(&app, &coach).await;
    let team = create_team(&app, &coach, "Seniors").await;

    let rival = setup_http_client();
    signup_coach(&app, &rival).await;

    let res = rival
        .get(app.url(&format!("/teams/{}", id_of(&team))))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = rival.get(app.url("/teams")).send().await.unwrap();
    let teams: Vec<Value> = res.json().await.unwrap();
    assert!(teams.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_invited_player_sees_dashboard_and_answers() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let coach = setup_http_client();
    signup_coach(&app, &coach).await;
    let team_id = id_of(&create_team(&app, &coach, "Seniors").await);
    let player_id = id_of(&add_player(&app, &coach, &team_id, "Julien", "Wing").await);

    let res = coach.get(app.url("/dashboard")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let player = onboard_player(&app, &coach, &player_id, "Julien M.").await;

    let res = player.get(app.url("/me")).send().await.unwrap();
    let me: Value = res.json().await.unwrap();
    assert_eq!(me["role"], "player");
    assert_eq!(me["player"]["id"], player_id.as_str());

    let res = coach
        .post(app.url(&format!("/players/{}/invite", player_id)))
        .json(&json!({ "email": "again@example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let res = player
        .post(app.url("/teams"))
        .json(&json!({ "name": "Rebels" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let event_id = id_of(&create_match(&app, &coach, &team_id).await);
    set_availability(&app, &coach, &event_id, &player_id, "Undecided").await;

    let res = player.get(app.url("/dashboard")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let dashboard: Value = res.json().await.unwrap();
    assert_eq!(dashboard["team"]["name"], "Seniors");
    let events = dashboard["events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["opponent"], "RC Rivals");
    assert_eq!(events[0]["availability"]["status"], "Undecided");
    let availability_id = id_of(&events[0]["availability"]);

    let res = player
        .patch(app.url(&format!("/availabilities/{}", availability_id)))
        .json(&json!({ "status": "Present", "notes": "Back from injury" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = coach
        .get(app.url(&format!("/availabilities/{}", availability_id)))
        .send()
        .await
        .unwrap();
    let details: Value = res.json().await.unwrap();
    assert_eq!(details["status"], "Present");
    assert_eq!(details["notes"], "Back from injury");
    assert_eq!(details["player_name"], "Julien");
    assert_eq!(details["event_title"], "Match vs RC Rivals");

    let res = player
        .put(app.url(&format!("/events/{}/availability/{}", event_id, player_id)))
        .json(&json!({ "status": "Absent" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn test_players_only_touch_their_own_availability() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let coach = setup_http_client();
    signup_coach(&app, &coach).await;
    let team_id = id_of(&create_team(&app, &coach, "Seniors").await);
    let first_id = id_of(&add_player(&app, &coach, &team_id, "First", "Prop").await);
    let second_id = id_of(&add_player(&app, &coach, &team_id, "Second", "Lock").await);
    let second = onboard_player(&app, &coach, &second_id, "Second Row").await;

    let event_id = id_of(&create_match(&app, &coach, &team_id).await);
    set_availability(&app, &coach, &event_id, &first_id, "Present").await;

    let res = coach
        .get(app.url(&format!("/teams/{}/events", team_id)))
        .send()
        .await
        .unwrap();
    let events: Vec<Value> = res.json().await.unwrap();
    let availability_id = id_of(&events[0]["availabilities"][0]);

    let res = second
        .get(app.url(&format!("/availabilities/{}", availability_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = second
        .patch(app.url(&format!("/availabilities/{}", availability_id)))
        .json(&json!({ "status": "Absent" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn test_upcoming_events_carry_team_names() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let coach = setup_http_client();
    signup_coach(&app, &coach).await;
    let seniors = id_of(&create_team(&app, &coach, "Seniors").await);
    let juniors = id_of(&create_team(&app, &coach, "Juniors").await);

    create_match(&app, &coach, &seniors).await;
    let res = coach
        .post(app.url(&format!("/teams/{}/events", juniors)))
        .json(&json!({
            "kind": "Training",
            "starts_at": "2099-09-03T18:30:00Z",
            "opponent": "ignored for trainings",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let training: Value = res.json().await.unwrap();
    assert!(training["opponent"].is_null());

    let res = coach.get(app.url("/events/upcoming")).send().await.unwrap();
    let upcoming: Vec<Value> = res.json().await.unwrap();
    assert_eq!(upcoming.len(), 2);
    assert_eq!(upcoming[0]["team_name"], "Juniors");
    assert_eq!(upcoming[1]["team_name"], "Seniors");
    Ok(())
}
