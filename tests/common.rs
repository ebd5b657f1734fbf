// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory resources, user fixtures and an axum request helper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `moreta_fitness`
//!
//! Every test gets its own in-memory database, so tests never share rows.

use std::sync::{Arc, Once};

use anyhow::Result;
use axum::body::Body;
use axum::Router;
use http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use http::{Request, Response, StatusCode};
use moreta_fitness::auth::hash_password;
use moreta_fitness::config::ServerConfig;
use moreta_fitness::constants::defaults::TEST_BCRYPT_COST;
use moreta_fitness::database::Database;
use moreta_fitness::models::{ClientProfile, NewUser, User};
use moreta_fitness::resources::ServerResources;
use moreta_fitness::routes::build_router;
use tower::ServiceExt;

static INIT_LOGGER: Once = Once::new();

/// Password used by every fixture account
pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Arc<Database>> {
    init_test_logging();
    Ok(Arc::new(Database::in_memory().await?))
}

/// Server resources over a fresh in-memory database
pub async fn create_test_resources() -> Result<ServerResources> {
    init_test_logging();
    Ok(ServerResources::initialize(ServerConfig::for_testing()).await?)
}

/// Insert a user whose password is [`TEST_PASSWORD`]
pub async fn create_user(database: &Database, username: &str, is_staff: bool) -> Result<User> {
    let password_hash = hash_password(TEST_PASSWORD, TEST_BCRYPT_COST).await?;
    Ok(database
        .create_user(&NewUser {
            username: username.to_owned(),
            email: format!("{username}@example.com"),
            first_name: "Test".to_owned(),
            last_name: "User".to_owned(),
            password_hash,
            is_staff,
        })
        .await?)
}

/// Insert a client and return them with their profile
pub async fn create_client(database: &Database, username: &str) -> Result<(User, ClientProfile)> {
    let user = create_user(database, username, false).await?;
    let profile = database.ensure_profile(user.id).await?;
    Ok((user, profile))
}

/// `Cookie` header value carrying a session for `user`
pub fn session_cookie_for(resources: &ServerResources, user: &User) -> String {
    let token = resources.auth_manager.generate_token(user).unwrap();
    format!("auth_token={token}")
}

/// Drives the full router the way a browser would
pub struct TestApp {
    pub resources: ServerResources,
    router: Router,
}

impl TestApp {
    pub async fn new() -> Result<Self> {
        let resources = create_test_resources().await?;
        let router = build_router(resources.clone());
        Ok(Self { resources, router })
    }

    pub fn database(&self) -> &Database {
        &self.resources.database
    }

    pub fn cookie_for(&self, user: &User) -> String {
        session_cookie_for(&self.resources, user)
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, path: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().method("GET").uri(path);
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn post_form(
        &self,
        path: &str,
        fields: &[(&str, &str)],
        cookie: Option<&str>,
    ) -> Response<Body> {
        let body = serde_urlencoded::to_string(fields).unwrap();
        let mut builder = Request::builder()
            .method("POST")
            .uri(path)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        self.send(builder.body(Body::from(body)).unwrap()).await
    }
}

/// Response body as text
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// `Location` of a 303 redirect
pub fn redirect_location(response: &Response<Body>) -> String {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    response.headers()[LOCATION].to_str().unwrap().to_owned()
}

/// Every `Set-Cookie` header on a response
pub fn set_cookies(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .map(|value| value.to_str().unwrap().to_owned())
        .collect()
}

/// `name=value` pair for the cookie `name` set by a response
pub fn cookie_pair(response: &Response<Body>, name: &str) -> Option<String> {
    let prefix = format!("{name}=");
    set_cookies(response)
        .into_iter()
        .find(|cookie| cookie.starts_with(&prefix))
        .and_then(|cookie| cookie.split(';').next().map(str::to_owned))
}
