// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use serde_json::Value;

use devblog_api::application::{
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
    services::ApplicationServices,
};
use devblog_api::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    user::UserRepository,
};
use devblog_api::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};

use super::builders::user;
use super::mocks::{
    AUTHOR_EMAIL, AUTHOR_ID, FixedTokenManager, InMemoryArticleRepo, InMemoryUserRepo, OTHER_EMAIL,
    OTHER_ID, StrictPasswordHasher, TestClock,
};

/// Services wired to in-memory adapters, with handles kept for assertions.
pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub users: Arc<InMemoryUserRepo>,
    pub articles: Arc<InMemoryArticleRepo>,
    pub clock: Arc<TestClock>,
}

impl TestApp {
    /// Two users exist: the author (id 1) and someone else (id 2).
    pub fn new() -> Self {
        let users = Arc::new(InMemoryUserRepo::with_users(vec![
            user(AUTHOR_ID, AUTHOR_EMAIL, Some("author")),
            user(OTHER_ID, OTHER_EMAIL, None),
        ]));
        Self::with_users(users)
    }

    pub fn empty() -> Self {
        Self::with_users(Arc::new(InMemoryUserRepo::new()))
    }

    fn with_users(users: Arc<InMemoryUserRepo>) -> Self {
        let articles = Arc::new(InMemoryArticleRepo::new(Arc::clone(&users)));
        let clock = Arc::new(TestClock::new());

        let user_repo: Arc<dyn UserRepository> = users.clone();
        let article_write: Arc<dyn ArticleWriteRepository> = articles.clone();
        let article_read: Arc<dyn ArticleReadRepository> = articles.clone();
        let password_hasher: Arc<dyn PasswordHasher> = Arc::new(StrictPasswordHasher);
        let token_manager: Arc<dyn TokenManager> = Arc::new(FixedTokenManager);
        let clock_port: Arc<dyn Clock> = clock.clone();

        let services = Arc::new(ApplicationServices::new(
            user_repo,
            article_write,
            article_read,
            password_hasher,
            token_manager,
            clock_port,
        ));

        Self {
            services,
            users,
            articles,
            clock,
        }
    }

    pub fn router(&self) -> axum::Router {
        self.router_with(&RouterOptions::default())
    }

    pub fn router_with(&self, options: &RouterOptions) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        build_router(state, options)
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

pub fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn json_body(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );
    let json = json_body(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
