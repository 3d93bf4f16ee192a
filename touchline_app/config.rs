use dotenvy::dotenv;
use std::{env, time::Duration};

use touchline_types::errors::AppError;

/// Signed cookies need a key of at least 64 bytes.
pub const MIN_COOKIE_SECRET_LEN: usize = 64;

pub struct Config {
    pub auth_cookie_secret: String,
    pub http_port: u16,
    pub public_url: String,
    pub chat_history: usize,
    pub chat_wait_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();

        let auth_cookie_secret = match env::var("TOUCHLINE_COOKIE_SECRET") {
            Ok(val) => val,
            Err(_) => return Err(AppError::MissingConfig("TOUCHLINE_COOKIE_SECRET")),
        };
        if auth_cookie_secret.len() < MIN_COOKIE_SECRET_LEN {
            return Err(AppError::InvalidConfig {
                key: "TOUCHLINE_COOKIE_SECRET",
                reason: format!("must be at least {MIN_COOKIE_SECRET_LEN} bytes"),
            });
        }

        let http_port = match env::var("TOUCHLINE_HTTP_PORT") {
            Ok(val) => val.parse::<u16>().unwrap_or(8080),
            Err(_) => 8080,
        };

        let public_url = match env::var("TOUCHLINE_PUBLIC_URL") {
            Ok(val) => val.trim_end_matches('/').to_string(),
            Err(_) => "http://localhost:8080".to_string(),
        };

        let chat_history = match env::var("TOUCHLINE_CHAT_HISTORY") {
            Ok(val) => val.parse::<usize>().unwrap_or(100).max(1),
            Err(_) => 100,
        };

        let chat_wait_secs = match env::var("TOUCHLINE_CHAT_WAIT_SECS") {
            Ok(val) => val.parse::<u64>().unwrap_or(25).clamp(1, 60),
            Err(_) => 25,
        };

        Ok(Self {
            auth_cookie_secret,
            http_port,
            public_url,
            chat_history,
            chat_wait_secs,
        })
    }

    /// Link sent to an invited player.
    pub fn invite_link(&self, token: &str) -> String {
        format!("{}/invite/{}", self.public_url, token)
    }

    pub fn chat_wait(&self) -> Duration {
        Duration::from_secs(self.chat_wait_secs)
    }
}
