//! Exercises `ApiClient` over real HTTP against an in-process axum backend.

use std::sync::{Arc, Mutex};

use api::{ApiClient, ApiConfig, ApiError, BoardType, Credentials, PostDraft, UserUpdate};
use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use store::ImageAttachment;

const TOKEN: &str = "test-token";

#[derive(Clone, Debug, PartialEq)]
struct CapturedPart {
    name: String,
    file_name: Option<String>,
    content_type: Option<String>,
    data: Vec<u8>,
}

#[derive(Clone, Default)]
struct Backend {
    parts: Arc<Mutex<Vec<CapturedPart>>>,
    user_updates: Arc<Mutex<Vec<Value>>>,
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"))
}

async fn factories() -> Json<Value> {
    Json(json!([
        {"name": "각산이륙장", "summary": "사천 각산, 남서풍"},
        {"name": "문경활공랜드", "summary": "국내 대표 활공장"}
    ]))
}

async fn weather(headers: HeaderMap, Json(body): Json<Value>) -> Result<Json<Value>, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    if body["factoryName"] != "각산이륙장" {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!({
        "temperature": 18.2,
        "weather": "맑음",
        "wind_direction": 45,
        "wind_speed": 3.5,
        "cloud_coverage": "적음"
    })))
}

async fn posts(headers: HeaderMap) -> Result<Json<Value>, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(Json(json!([
        {"boardType": "자유게시판", "title": "첫 비행", "content": "좋았다"},
        {"boardType": "모임게시판", "title": "토요일 문경", "location": "문경", "content": "같이 가요"}
    ])))
}

async fn create_post(
    State(backend): State<Backend>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> StatusCode {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED;
    }
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
        backend.parts.lock().unwrap().push(CapturedPart {
            name,
            file_name,
            content_type,
            data,
        });
    }
    StatusCode::CREATED
}

async fn login(Json(body): Json<Value>) -> Result<Json<Value>, StatusCode> {
    if body["id"] == "pilot" && body["password"] == "thermal" {
        Ok(Json(json!({"token": TOKEN})))
    } else {
        Err(StatusCode::UNAUTHORIZED)
    }
}

async fn user(headers: HeaderMap) -> Result<Json<Value>, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(Json(json!({"id": "pilot", "name": "김활공", "email": "pilot@example.com"})))
}

async fn update_user(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> StatusCode {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED;
    }
    backend.user_updates.lock().unwrap().push(body);
    StatusCode::OK
}

async fn delete_user(headers: HeaderMap) -> StatusCode {
    if authorized(&headers) {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::UNAUTHORIZED
    }
}

async fn spawn_backend(router: Router) -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    ApiClient::new(&ApiConfig::new(format!("http://{addr}"))).unwrap()
}

async fn backend() -> (ApiClient, Backend) {
    let state = Backend::default();
    let router = Router::new()
        .route("/factories", get(factories))
        .route("/api/weather", post(weather))
        .route("/api/getPosts", get(posts))
        .route("/api/createPosts", post(create_post))
        .route("/api/login", post(login))
        .route("/api/signup", post(|| async { StatusCode::CREATED }))
        .route("/api/user", get(user).put(update_user).delete(delete_user))
        .with_state(state.clone());
    (spawn_backend(router).await, state)
}

#[tokio::test]
async fn test_list_sites_and_summaries() {
    let (client, _) = backend().await;

    let sites = client.list_sites().await.unwrap();
    assert_eq!(sites.len(), 2);
    assert_eq!(sites[0].name, "각산이륙장");

    let summaries = client.site_summaries().await.unwrap();
    assert_eq!(summaries["문경활공랜드"], "국내 대표 활공장");
}

#[tokio::test]
async fn test_weather_sends_factory_name_and_bearer() {
    let (client, _) = backend().await;

    let weather = client.get_weather("각산이륙장", TOKEN).await.unwrap();
    assert_eq!(weather.temperature, Some(18.2));
    assert_eq!(weather.wind_direction.unwrap().label(), "NE");

    let err = client.get_weather("각산이륙장", "wrong").await.unwrap_err();
    assert!(err.is_unauthorized());

    let err = client.get_weather("없는곳", TOKEN).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_list_posts() {
    let (client, _) = backend().await;

    let posts = client.list_posts(TOKEN).await.unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[1].board_type, BoardType::Meetup);
    assert_eq!(posts[1].list_label(), "모임게시판 (토요일 문경)");
}

#[tokio::test]
async fn test_create_post_multipart_layout() {
    let (client, state) = backend().await;

    let mut draft = PostDraft::new();
    draft.title = "활공 후기".to_string();
    draft.content = "상승기류 최고".to_string();
    draft.board = BoardType::Meetup;
    for n in 0..2u8 {
        draft.add_image(ImageAttachment {
            uri: format!("file:///dcim/{n}.jpg"),
            data: vec![0xff, 0xd8, n],
        });
    }

    client.create_post(&draft, TOKEN).await.unwrap();

    let parts = state.parts.lock().unwrap().clone();
    let names: Vec<&str> = parts.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        ["title", "location", "content", "board", "image", "image"]
    );
    assert_eq!(parts[0].data, "활공 후기".as_bytes());
    assert!(parts[1].data.is_empty());
    assert_eq!(parts[3].data, "모임게시판".as_bytes());
    assert_eq!(parts[4].file_name.as_deref(), Some("image0.jpg"));
    assert_eq!(parts[5].file_name.as_deref(), Some("image1.jpg"));
    assert_eq!(parts[5].content_type.as_deref(), Some("image/jpeg"));
    assert_eq!(parts[5].data, vec![0xff, 0xd8, 1]);
}

#[tokio::test]
async fn test_create_post_with_empty_title_is_still_sent() {
    let (client, state) = backend().await;

    let mut draft = PostDraft::new();
    draft.content = "제목 없이".to_string();
    client.create_post(&draft, TOKEN).await.unwrap();

    let parts = state.parts.lock().unwrap().clone();
    assert_eq!(parts[0].name, "title");
    assert!(parts[0].data.is_empty());
    assert_eq!(parts[3].data, "자유게시판".as_bytes());
}

#[tokio::test]
async fn test_create_post_requires_created_status() {
    let router = Router::new().route("/api/createPosts", post(|| async { StatusCode::OK }));
    let client = spawn_backend(router).await;

    let err = client
        .create_post(&PostDraft::new(), TOKEN)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::UnexpectedStatus(200)));
}

#[tokio::test]
async fn test_server_error_is_tagged_with_status() {
    let router = Router::new().route(
        "/api/getPosts",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "db down") }),
    );
    let client = spawn_backend(router).await;

    match client.list_posts(TOKEN).await.unwrap_err() {
        ApiError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "db down");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let router = Router::new().route("/factories", get(|| async { "<html>oops</html>" }));
    let client = spawn_backend(router).await;

    assert!(matches!(
        client.list_sites().await.unwrap_err(),
        ApiError::Decode(_)
    ));
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(&ApiConfig::new(format!("http://{addr}"))).unwrap();
    assert!(matches!(
        client.list_sites().await.unwrap_err(),
        ApiError::Transport(_)
    ));
}

#[tokio::test]
async fn test_account_operations() {
    let (client, state) = backend().await;

    let token = client
        .login(&Credentials {
            id: "pilot".to_string(),
            password: "thermal".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(token, TOKEN);

    let bad = client
        .login(&Credentials {
            id: "pilot".to_string(),
            password: "sink".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(bad.status(), Some(401));

    let info = client.get_user_info(&token).await.unwrap();
    assert_eq!(info.display_name(), "김활공");

    client
        .update_user_info(
            &UserUpdate {
                email: Some("new@example.com".to_string()),
                ..Default::default()
            },
            &token,
        )
        .await
        .unwrap();
    assert_eq!(
        state.user_updates.lock().unwrap()[0],
        json!({"email": "new@example.com"})
    );

    client.delete_account(&token).await.unwrap();
    assert!(client.delete_account("stale").await.unwrap_err().is_unauthorized());
}
