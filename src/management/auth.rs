use std::path::PathBuf;

use chrono::Utc;
use tokio::sync::Mutex;

use super::cache::{self, CacheError};
use crate::{
    config,
    spotify::{CredentialProvider, auth},
    types::Token,
};

/// Refresh this many seconds before Spotify would reject the token.
const EXPIRY_BUFFER_SECS: u64 = 240;

pub struct TokenManager {
    token: Mutex<Token>,
    path: PathBuf,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        Self::with_path(token, Self::token_path())
    }

    pub fn with_path(token: Token, path: PathBuf) -> Self {
        TokenManager {
            token: Mutex::new(token),
            path,
        }
    }

    pub async fn load() -> Result<Self, CacheError> {
        Self::load_from(Self::token_path()).await
    }

    pub async fn load_from(path: PathBuf) -> Result<Self, CacheError> {
        let token: Token = cache::read_json(&path).await?;
        Ok(Self::with_path(token, path))
    }

    pub async fn persist(&self) -> Result<(), CacheError> {
        let token = self.token.lock().await;
        cache::write_json(&self.path, &*token).await
    }

    /// Deletes the stored token.
    pub async fn logout() -> Result<(), CacheError> {
        cache::remove(&Self::token_path()).await
    }

    /// Returns an access token that is usable right now, refreshing it first
    /// when it is about to expire. `None` when the token has expired and
    /// cannot be refreshed.
    pub async fn get_valid_token(&self) -> Option<String> {
        let mut token = self.token.lock().await;
        let now = Utc::now().timestamp() as u64;

        if expires_soon(&token, now) {
            match auth::refresh_token(&token.refresh_token).await {
                Ok(new_token) => {
                    *token = new_token;
                    let _ = cache::write_json(&self.path, &*token).await;
                }
                Err(_) if is_expired(&token, now) => return None,
                Err(_) => {}
            }
        }

        if token.access_token.is_empty() {
            return None;
        }
        Some(token.access_token.clone())
    }

    pub async fn current_token(&self) -> Token {
        self.token.lock().await.clone()
    }

    fn token_path() -> PathBuf {
        config::data_dir().join("cache/token.json")
    }
}

impl CredentialProvider for TokenManager {
    async fn current_credential(&self) -> Option<String> {
        self.get_valid_token().await
    }
}

pub fn expires_soon(token: &Token, now: u64) -> bool {
    now >= (token.obtained_at + token.expires_in).saturating_sub(EXPIRY_BUFFER_SECS)
}

pub fn is_expired(token: &Token, now: u64) -> bool {
    now >= token.obtained_at + token.expires_in
}
