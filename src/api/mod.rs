//! # API Module
//!
//! HTTP endpoints of the short-lived local server started during `tastemix
//! auth`:
//!
//! - [`callback`] - receives the authorization code from Spotify, checks the
//!   `state` parameter and exchanges the code for a token using the PKCE
//!   verifier held in shared state.
//! - [`health`] - status and version, handy to verify the server is bound.
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use tastemix::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
