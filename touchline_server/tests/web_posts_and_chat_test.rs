mod test_utils;

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use std::time::Duration;
use tokio::task::JoinHandle;

use touchline_types::{Result, errors::ApplicationError};

use crate::test_utils::tests::{
    TestApp, add_player, create_team, id_of, onboard_player, setup_http_client, setup_web_app,
    signup_coach,
};

async fn post_message(app: &TestApp, client: &Client, content: &str) -> String {
    let res = client
        .post(app.url("/chat/messages"))
        .json(&json!({ "content": content }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await.unwrap();
    id_of(&body)
}

/// Starts a long poll and returns once the server has registered it.
async fn start_wait(app: &TestApp, client: &Client) -> JoinHandle<(StatusCode, Option<Value>)> {
    let before = app.app_bus.changes().subscriber_count();
    let client = client.clone();
    let url = app.url("/chat/wait");
    let handle = tokio::spawn(async move {
        let res = client.get(url).send().await.unwrap();
        let status = res.status();
        let body = if status == StatusCode::OK {
            Some(res.json().await.unwrap())
        } else {
            None
        };
        (status, body)
    });

    for _ in 0..200 {
        if app.app_bus.changes().subscriber_count() > before {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    handle
}

#[tokio::test]
async fn test_posts_feed() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let coach = setup_http_client();
    signup_coach(&app, &coach).await;
    let team_id = id_of(&create_team(&app, &coach, "Seniors").await);
    let player_id = id_of(&add_player(&app, &coach, &team_id, "Paul", "Flanker").await);
    let player = onboard_player(&app, &coach, &player_id, "Paul W.").await;

    let res = coach
        .post(app.url("/posts"))
        .json(&json!({ "title": "Season opener", "content": "Kick-off at 15:00." }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let club_post: Value = res.json().await.unwrap();
    assert_eq!(club_post["category"], "Announcement");
    assert_eq!(club_post["author_name"], "Coach Carter");

    let res = player
        .post(app.url("/posts"))
        .json(&json!({
            "content": "Won 24-17!",
            "category": "MatchResult",
            "team_id": team_id,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let team_post: Value = res.json().await.unwrap();

    let res = coach.get(app.url("/posts")).send().await.unwrap();
    let feed: Vec<Value> = res.json().await.unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0]["title"], "Season opener");

    let res = coach
        .get(app.url(&format!("/posts?team_id={}", team_id)))
        .send()
        .await
        .unwrap();
    let feed: Vec<Value> = res.json().await.unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0]["author_name"], "Paul W.");

    let res = coach
        .patch(app.url(&format!("/posts/{}", id_of(&team_post))))
        .json(&json!({ "content": "Lost, actually." }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = player
        .patch(app.url(&format!("/posts/{}", id_of(&team_post))))
        .json(&json!({ "content": "Won 27-17!", "category": "MatchResult" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let edited: Value = res.json().await.unwrap();
    assert_eq!(edited["content"], "Won 27-17!");

    let res = coach
        .post(app.url("/posts"))
        .json(&json!({ "content": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let res = coach
        .delete(app.url(&format!("/posts/{}", id_of(&club_post))))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = coach.get(app.url("/posts")).send().await.unwrap();
    let feed: Vec<Value> = res.json().await.unwrap();
    assert!(feed.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_chat_history() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let coach = setup_http_client();
    signup_coach(&app, &coach).await;

    for content in ["first", "second", "third"] {
        post_message(&app, &coach, content).await;
        tokio::time::sleep(Duration::from_millis(2)).await;
    }

    let res = coach.get(app.url("/chat/messages")).send().await.unwrap();
    let history: Vec<Value> = res.json().await.unwrap();
    let contents: Vec<&str> = history.iter().map(|m| m["content"].as_str().unwrap()).collect();
    assert_eq!(contents, vec!["first", "second", "third"]);
    assert_eq!(history[0]["author_name"], "Coach Carter");

    let res = coach
        .get(app.url("/chat/messages?limit=2"))
        .send()
        .await
        .unwrap();
    let history: Vec<Value> = res.json().await.unwrap();
    let contents: Vec<&str> = history.iter().map(|m| m["content"].as_str().unwrap()).collect();
    assert_eq!(contents, vec!["second", "third"]);

    let res = coach
        .post(app.url("/chat/messages"))
        .json(&json!({ "content": "  " }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}

#[tokio::test]
async fn test_long_poll_wakes_up_on_new_message() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let coach = setup_http_client();
    signup_coach(&app, &coach).await;
    let team_id = id_of(&create_team(&app, &coach, "Seniors").await);
    let player_id = id_of(&add_player(&app, &coach, &team_id, "Paul", "Flanker").await);
    let player = onboard_player(&app, &coach, &player_id, "Paul W.").await;

    let wait = start_wait(&app, &player).await;
    let message_id = post_message(&app, &coach, "Training moved to 19:00").await;

    let (status, change) = wait.await.unwrap();
    assert_eq!(status, StatusCode::OK);
    let change = change.unwrap();
    assert_eq!(change["type"], "message_posted");
    assert_eq!(change["message_id"], message_id.as_str());
    assert_eq!(app.app_bus.changes().subscriber_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_long_poll_times_out_and_ignores_other_clubs() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let coach = setup_http_client();
    signup_coach(&app, &coach).await;
    let rival = setup_http_client();
    signup_coach(&app, &rival).await;

    let wait = start_wait(&app, &rival).await;
    post_message(&app, &coach, "Only for my club").await;

    let (status, change) = wait.await.unwrap();
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(change.is_none());
    Ok(())
}
