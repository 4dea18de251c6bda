use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    error, info, management::TokenManager, spotify, success, types::PkceToken,
};

pub async fn auth(shared_state: Arc<Mutex<Option<PkceToken>>>) {
    info!("Opening Spotify to authorize tastemix...");
    let token = match spotify::auth::auth(shared_state).await {
        Ok(t) => t,
        Err(e) => error!("{}", e),
    };

    if let Err(e) = TokenManager::new(token).persist().await {
        error!("Failed to save token to cache: {}", e);
    }

    success!("Authentication successful!");
}

pub async fn logout() {
    match TokenManager::logout().await {
        Ok(()) => success!("Signed out. Run tastemix auth to sign in again."),
        Err(e) => error!("Failed to remove stored token: {}", e),
    }
}
