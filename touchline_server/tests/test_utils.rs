#[cfg(test)]
#[allow(dead_code)]
pub mod tests {
    use reqwest::{Client, StatusCode};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tokio::net::TcpListener;
    use uuid::Uuid;

    use touchline_app::{
        app_bus::AppBus,
        test_utils::tests::{MockUnitOfWorkProvider, TEST_PASSWORD, test_config},
    };
    use touchline_types::{Result, errors::ApplicationError};
    use touchline_web::{AppState, WebRouter};

    /// A running server over the in-memory store.
    pub struct TestApp {
        pub base_url: String,
        pub app_bus: Arc<AppBus>,
        pub provider: MockUnitOfWorkProvider,
    }

    impl TestApp {
        pub fn url(&self, path: &str) -> String {
            format!("{}/api{}", self.base_url, path)
        }
    }

    pub async fn setup_web_app() -> Result<TestApp> {
        let config = test_config();
        let provider = MockUnitOfWorkProvider::new();
        let app_bus = Arc::new(AppBus::new(config.clone(), Arc::new(provider.clone())));
        let state = AppState::new(app_bus.clone(), &config);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| ApplicationError::Infrastructure(e.to_string()))?;
        let addr = listener
            .local_addr()
            .map_err(|e| ApplicationError::Infrastructure(e.to_string()))?;

        tokio::spawn(async move {
            WebRouter::serve_listener(state, listener).await.unwrap();
        });

        Ok(TestApp {
            base_url: format!("http://{}", addr),
            app_bus,
            provider,
        })
    }

    /// Each client keeps its own session cookie.
    pub fn setup_http_client() -> Client {
        Client::builder().cookie_store(true).build().unwrap()
    }

    pub fn unique_email(prefix: &str) -> String {
        format!("{}_{}@example.com", prefix, Uuid::new_v4().simple())
    }

    /// Signs up a new club with `client` and returns the coach's account.
    pub async fn signup_coach(app: &TestApp, client: &Client) -> Value {
        let res = client
            .post(app.url("/signup"))
            .json(&json!({
                "email": unique_email("coach"),
                "password": TEST_PASSWORD,
                "full_name": "Coach Carter",
                "club_name": "Stade Touchline",
                "club_city": "Toulouse",
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
        res.json().await.unwrap()
    }

    pub async fn create_team(app: &TestApp, client: &Client, name: &str) -> Value {
        let res = client
            .post(app.url("/teams"))
            .json(&json!({ "name": name }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
        res.json().await.unwrap()
    }

    pub async fn add_player(
        app: &TestApp,
        client: &Client,
        team_id: &str,
        name: &str,
        positions: &str,
    ) -> Value {
        let res = client
            .post(app.url(&format!("/teams/{}/players", team_id)))
            .json(&json!({ "name": name, "positions": positions }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
        res.json().await.unwrap()
    }

    pub async fn create_match(app: &TestApp, client: &Client, team_id: &str) -> Value {
        let res = client
            .post(app.url(&format!("/teams/{}/events", team_id)))
            .json(&json!({
                "kind": "Match",
                "starts_at": "2099-09-06T15:00:00Z",
                "location": "Stade Ernest-Wallon",
                "opponent": "RC Rivals",
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
        res.json().await.unwrap()
    }

    pub async fn set_availability(
        app: &TestApp,
        client: &Client,
        event_id: &str,
        player_id: &str,
        status: &str,
    ) {
        let res = client
            .put(app.url(&format!("/events/{}/availability/{}", event_id, player_id)))
            .json(&json!({ "status": status }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
    }

    /// Invites a roster player and signs the invitation up with a fresh
    /// client, which is returned logged in as that player.
    pub async fn onboard_player(
        app: &TestApp,
        coach: &Client,
        player_id: &str,
        full_name: &str,
    ) -> Client {
        let res = coach
            .post(app.url(&format!("/players/{}/invite", player_id)))
            .json(&json!({ "email": unique_email("player") }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
        let invite: Value = res.json().await.unwrap();
        let token = invite["token"].as_str().unwrap();

        let player = setup_http_client();
        let res = player
            .post(app.url(&format!("/invitations/{}/accept", token)))
            .json(&json!({ "password": TEST_PASSWORD, "full_name": full_name }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
        player
    }

    pub fn id_of(value: &Value) -> String {
        value["id"].as_str().unwrap().to_string()
    }
}
