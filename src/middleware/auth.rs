// ABOUTME: Cookie session authentication and access guards for page routes
// ABOUTME: Attaches the session user and pending flash to each request, then redirects or forbids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

//! # Session Middleware
//!
//! [`session_context_middleware`] runs on every request and inserts a
//! [`PageContext`] extension. Protected routers add [`require_login`] as a
//! route layer, which also inserts the [`User`]; the coach console adds
//! [`require_staff`] on top.
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Extension, Router};
//! use moreta_fitness::middleware::auth::require_login;
//! use moreta_fitness::models::User;
//! use moreta_fitness::resources::ServerResources;
//! use std::sync::Arc;
//!
//! async fn handler(Extension(user): Extension<User>) -> String {
//!     user.username
//! }
//!
//! # fn example(resources: Arc<ServerResources>) {
//! let app: Router = Router::new()
//!     .route("/dashboard/", get(handler))
//!     .route_layer(middleware::from_fn(require_login))
//!     .with_state(resources);
//! # }
//! ```

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use http::header::SET_COOKIE;
use http::HeaderMap;
use tracing::debug;

use crate::constants::cookies::{FLASH, SESSION};
use crate::constants::paths;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::User;
use crate::resources::ServerResources;
use crate::security::cookies::{append_set_cookie, clear_flash_cookie, get_cookie_value, read_flash};

/// What every page needs to render its chrome
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    /// Logged-in user, if the session cookie is valid
    pub user: Option<User>,
    /// One-shot message set by the previous redirect
    pub flash: Option<String>,
}

/// Resolve the session cookie to an active user
///
/// Missing, expired or tampered tokens and inactive or deleted users all
/// yield `Ok(None)`.
///
/// # Errors
///
/// Returns an error only if the user lookup itself fails
#[tracing::instrument(skip_all, fields(user_id = tracing::field::Empty))]
pub async fn authenticate_session(
    resources: &ServerResources,
    headers: &HeaderMap,
) -> AppResult<Option<User>> {
    let Some(token) = get_cookie_value(headers, SESSION).filter(|t| !t.is_empty()) else {
        return Ok(None);
    };

    let claims = match resources.auth_manager.validate_token(&token) {
        Ok(claims) => claims,
        Err(e) => {
            debug!(error = %e, "Ignoring invalid session cookie");
            return Ok(None);
        }
    };
    let user_id = match claims.user_id() {
        Ok(id) => id,
        Err(e) => {
            debug!(error = %e, "Ignoring session with bad subject");
            return Ok(None);
        }
    };

    tracing::Span::current().record("user_id", user_id.to_string());
    let user = resources.database.get_user(user_id).await?;
    Ok(user.filter(|user| user.is_active))
}

/// Attach a [`PageContext`] to every request and drop displayed flash messages
pub async fn session_context_middleware(
    State(resources): State<Arc<ServerResources>>,
    mut req: Request,
    next: Next,
) -> Response {
    let user = match authenticate_session(&resources, req.headers()).await {
        Ok(user) => user,
        Err(e) => return e.into_response(),
    };
    if let Some(user) = &user {
        tracing::Span::current().record("user_id", user.id.to_string());
    }

    let flash = read_flash(req.headers());
    let had_flash = flash.is_some();
    req.extensions_mut().insert(PageContext { user, flash });

    let mut response = next.run(req).await;

    // A rendered page has shown the message; a redirect may be carrying a new one
    if had_flash && response.status().is_success() && !sets_cookie(&response, FLASH) {
        append_set_cookie(response.headers_mut(), &clear_flash_cookie());
    }
    response
}

fn sets_cookie(response: &Response, name: &str) -> bool {
    let prefix = format!("{name}=");
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(|value| value.starts_with(&prefix))
}

/// Login page URL that returns to `path_and_query` afterwards
#[must_use]
pub fn login_redirect_target(path_and_query: &str) -> String {
    format!(
        "{}?next={}",
        paths::LOGIN,
        urlencoding::encode(path_and_query)
    )
}

/// Redirect anonymous visitors to the login page; insert the [`User`] otherwise
pub async fn require_login(mut req: Request, next: Next) -> Response {
    let user = req
        .extensions()
        .get::<PageContext>()
        .and_then(|ctx| ctx.user.clone());

    match user {
        Some(user) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        None => {
            let target = req
                .uri()
                .path_and_query()
                .map_or_else(|| req.uri().path().to_owned(), ToString::to_string);
            debug!(path = %target, "Login required");
            Redirect::to(&login_redirect_target(&target)).into_response()
        }
    }
}

/// Allow only staff users through; must run after [`require_login`]
pub async fn require_staff(req: Request, next: Next) -> Response {
    match req.extensions().get::<User>() {
        Some(user) if user.is_staff => next.run(req).await,
        Some(user) => {
            AppLogger::log_security_event(
                "coach_console_denied",
                &format!("non-staff access to {}", req.uri().path()),
                Some(&user.id.to_string()),
            );
            AppError::permission_denied("Coach access required").into_response()
        }
        None => Redirect::to(&login_redirect_target(req.uri().path())).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_redirect_encodes_next() {
        assert_eq!(
            login_redirect_target("/workout/3/"),
            "/login/?next=%2Fworkout%2F3%2F"
        );
        assert_eq!(
            login_redirect_target("/progress/?page=2"),
            "/login/?next=%2Fprogress%2F%3Fpage%3D2"
        );
    }
}
