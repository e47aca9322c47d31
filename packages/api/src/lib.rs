//! # API crate: HTTP client for the GlideMate backend
//!
//! Every screen that talks to the backend goes through [`ApiClient`]. The client is a
//! thin `reqwest` wrapper bound to one configured base URL. It attaches the bearer token
//! on authenticated calls and decodes JSON into the records defined in [`store::models`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] and one method per backend endpoint |
//! | [`config`] | [`ApiConfig`]: base URL and timeout from `glidemate.toml`, `.env` and environment |
//! | [`error`] | [`ApiError`], the tagged failure every call returns |
//! | [`posts`] | Multipart encoding of a [`store::PostDraft`] for `POST /api/createPosts` |
//!
//! ## Endpoints
//!
//! | Method | Path | Auth | Client method |
//! |--------|------|------|---------------|
//! | `GET` | `/factories` | none | [`list_sites`](ApiClient::list_sites), [`site_summaries`](ApiClient::site_summaries) |
//! | `POST` | `/api/weather` | Bearer | [`get_weather`](ApiClient::get_weather) |
//! | `GET` | `/api/getPosts` | Bearer | [`list_posts`](ApiClient::list_posts) |
//! | `POST` | `/api/createPosts` | Bearer, multipart | [`create_post`](ApiClient::create_post) |
//! | `POST` | `/api/login` | none | [`login`](ApiClient::login) |
//! | `POST` | `/api/signup` | none | [`sign_up`](ApiClient::sign_up) |
//! | `GET` / `PUT` / `DELETE` | `/api/user` | Bearer | [`get_user_info`](ApiClient::get_user_info), [`update_user_info`](ApiClient::update_user_info), [`delete_account`](ApiClient::delete_account) |
//!
//! There is no caching and no retry: a failed call returns its [`ApiError`] and the
//! caller decides what to show.

pub mod client;
pub mod config;
pub mod error;
pub mod posts;

pub use client::{require_token, ApiClient};
pub use config::ApiConfig;
pub use error::ApiError;

pub use store::{
    BoardType, Credentials, Post, PostDraft, SignUpRequest, TakeoffSite, UserInfo, UserUpdate,
    WeatherSnapshot,
};
