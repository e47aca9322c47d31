use std::collections::HashMap;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use store::{
    Credentials, Post, PostDraft, SignUpRequest, TakeoffSite, UserInfo, UserUpdate,
    WeatherSnapshot,
};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::posts;

/// HTTP client bound to one GlideMate backend.
///
/// Cloning is cheap: clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WeatherRequest<'a> {
    factory_name: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    #[serde(alias = "accessToken", alias = "access_token")]
    token: String,
}

/// Turn an optional session token into the token an authenticated call needs.
pub fn require_token(token: Option<String>) -> Result<String, ApiError> {
    token
        .filter(|t| !t.trim().is_empty())
        .ok_or(ApiError::Unauthenticated)
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        config.validate()?;
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path such as `/api/getPosts`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Absolute URL for a media path from a response. Absolute URLs pass through.
    pub fn media_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            self.url(path)
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.url(path))
    }

    fn authed(&self, method: Method, path: &str, token: &str) -> RequestBuilder {
        self.request(method, path).bearer_auth(token)
    }

    /// Send a request and return the response if its status is 2xx.
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("{} -> {}", response.url().path(), status);
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("Undecodable response body: {}", body);
            ApiError::Decode(e)
        })
    }

    /// `GET /factories`
    pub async fn list_sites(&self) -> Result<Vec<TakeoffSite>, ApiError> {
        self.send_json(self.request(Method::GET, "/factories")).await
    }

    /// Site name → summary, folded from [`list_sites`](Self::list_sites).
    pub async fn site_summaries(&self) -> Result<HashMap<String, String>, ApiError> {
        Ok(self
            .list_sites()
            .await?
            .into_iter()
            .map(|site| (site.name, site.summary))
            .collect())
    }

    /// `POST /api/weather` with `{"factoryName": site_name}`
    pub async fn get_weather(
        &self,
        site_name: &str,
        token: &str,
    ) -> Result<WeatherSnapshot, ApiError> {
        let request = self
            .authed(Method::POST, "/api/weather", token)
            .json(&WeatherRequest {
                factory_name: site_name,
            });
        self.send_json(request).await
    }

    /// `GET /api/getPosts`
    pub async fn list_posts(&self, token: &str) -> Result<Vec<Post>, ApiError> {
        self.send_json(self.authed(Method::GET, "/api/getPosts", token))
            .await
    }

    /// `POST /api/createPosts` as multipart. Only `201 Created` counts as success.
    pub async fn create_post(&self, draft: &PostDraft, token: &str) -> Result<(), ApiError> {
        let form = posts::build_form(draft)?;
        tracing::debug!(
            "Creating post on {} with {} image(s)",
            draft.board,
            draft.images().len()
        );
        let response = self
            .send(self.authed(Method::POST, "/api/createPosts", token).multipart(form))
            .await?;
        match response.status() {
            StatusCode::CREATED => Ok(()),
            other => Err(ApiError::UnexpectedStatus(other.as_u16())),
        }
    }

    /// `POST /api/login`. Returns the bearer token.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let response: LoginResponse = self
            .send_json(self.request(Method::POST, "/api/login").json(credentials))
            .await?;
        Ok(response.token)
    }

    /// `POST /api/signup`
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<(), ApiError> {
        self.send(self.request(Method::POST, "/api/signup").json(request))
            .await?;
        Ok(())
    }

    /// `GET /api/user`
    pub async fn get_user_info(&self, token: &str) -> Result<UserInfo, ApiError> {
        self.send_json(self.authed(Method::GET, "/api/user", token))
            .await
    }

    /// `PUT /api/user`
    pub async fn update_user_info(&self, update: &UserUpdate, token: &str) -> Result<(), ApiError> {
        self.send(self.authed(Method::PUT, "/api/user", token).json(update))
            .await?;
        Ok(())
    }

    /// `DELETE /api/user`
    pub async fn delete_account(&self, token: &str) -> Result<(), ApiError> {
        self.send(self.authed(Method::DELETE, "/api/user", token))
            .await?;
        Ok(())
    }
}
