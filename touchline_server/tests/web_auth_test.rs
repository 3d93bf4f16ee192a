mod test_utils;

use reqwest::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use touchline_app::{auth::hash_password, test_utils::tests::TEST_PASSWORD, uow::UnitOfWork};
use touchline_types::{Result, common::User, errors::ApplicationError};

use crate::test_utils::tests::{setup_http_client, setup_web_app, signup_coach, unique_email};

#[tokio::test]
async fn test_signup_opens_a_coach_session() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let client = setup_http_client();

    let account = signup_coach(&app, &client).await;
    assert_eq!(account["role"], "admin_coach");
    assert_eq!(account["club"]["name"], "Stade Touchline");
    assert!(account["player"].is_null());

    let res = client.get(app.url("/me")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let me: Value = res.json().await.unwrap();
    assert_eq!(me["email"], account["email"]);
    assert_eq!(me["full_name"], "Coach Carter");
    Ok(())
}

#[tokio::test]
async fn test_signup_rejects_taken_email_and_weak_password() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let client = setup_http_client();
    let account = signup_coach(&app, &client).await;

    let res = setup_http_client()
        .post(app.url("/signup"))
        .json(&json!({
            "email": account["email"],
            "password": TEST_PASSWORD,
            "full_name": "Someone Else",
            "club_name": "Other Club",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let res = setup_http_client()
        .post(app.url("/signup"))
        .json(&json!({
            "email": unique_email("weak"),
            "password": "short",
            "full_name": "Weak Password",
            "club_name": "Other Club",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}

#[tokio::test]
async fn test_login_and_logout() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let account = signup_coach(&app, &setup_http_client()).await;
    let client = setup_http_client();

    let res = client
        .post(app.url("/login"))
        .json(&json!({ "email": account["email"], "password": "not the password" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Invalid email or password.");

    let res = client
        .post(app.url("/login"))
        .json(&json!({ "email": unique_email("nobody"), "password": TEST_PASSWORD }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .post(app.url("/login"))
        .json(&json!({ "email": account["email"], "password": TEST_PASSWORD }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client.get(app.url("/me")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client.post(app.url("/logout")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client.get(app.url("/me")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn test_change_password() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let client = setup_http_client();
    let account = signup_coach(&app, &client).await;

    let res = client
        .put(app.url("/me/password"))
        .json(&json!({ "new_password": "brand-new-secret" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let other = setup_http_client();
    let res = other
        .post(app.url("/login"))
        .json(&json!({ "email": account["email"], "password": TEST_PASSWORD }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = other
        .post(app.url("/login"))
        .json(&json!({ "email": account["email"], "password": "brand-new-secret" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn test_user_without_profile_is_pending() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let email = unique_email("pending");
    let user = User::new(Uuid::new_v4(), email.clone(), hash_password(TEST_PASSWORD)?);
    app.provider.uow().users().save(&user).await?;

    let client = setup_http_client();
    let res = client
        .post(app.url("/login"))
        .json(&json!({ "email": email, "password": TEST_PASSWORD }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client.get(app.url("/me")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn test_requests_without_session_are_rejected() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let client = setup_http_client();

    for path in ["/me", "/teams", "/dashboard", "/posts", "/chat/messages"] {
        let res = client.get(app.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "GET {}", path);
    }

    let res = client.get(app.url("/no/such/route")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_malformed_body_is_a_bad_request() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let client = setup_http_client();
    signup_coach(&app, &client).await;

    let res = client
        .post(app.url("/teams"))
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert!(body["message"].is_string());
    Ok(())
}
