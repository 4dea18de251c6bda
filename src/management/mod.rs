mod auth;
mod cache;
mod favorites;
mod preferences;
mod setlist;

pub use auth::TokenManager;
pub use auth::{expires_soon, is_expired};
pub use cache::CacheError;
pub use favorites::FavoritesManager;
pub use preferences::PreferencesManager;
pub use setlist::SetlistManager;
