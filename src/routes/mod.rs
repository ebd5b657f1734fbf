// ABOUTME: Route module organization for the Moreta web application
// ABOUTME: Merges the per-area routers and wraps them in session, security and tracing layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

//! Route module for Moreta Fitness
//!
//! Each area owns a `XxxRoutes` type whose `routes` function returns a router
//! with its state already applied. [`build_router`] merges them and adds the
//! cross-cutting layers.

/// Registration, login and logout
pub mod auth;
/// Staff-only coach console
pub mod coach;
/// Client dashboard
pub mod dashboard;
/// Liveness probe
pub mod health;
/// Landing page
pub mod home;
/// Inbox, message detail and compose
pub mod messages;
/// Nutrition plan list
pub mod nutrition;
/// Profile view and update
pub mod profile;
/// Progress list, new entry and detail
pub mod progress;
/// Workout assignment list, detail and completion
pub mod workouts;

pub use auth::AuthRoutes;
pub use coach::CoachRoutes;
pub use dashboard::DashboardRoutes;
pub use health::HealthRoutes;
pub use home::HomeRoutes;
pub use messages::MessageRoutes;
pub use nutrition::NutritionRoutes;
pub use profile::ProfileRoutes;
pub use progress::ProgressRoutes;
pub use workouts::WorkoutRoutes;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::middleware;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Router;
use http::header::HeaderName;
use http::Request;
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::errors::{AppError, AppResult, FieldErrors};
use crate::middleware::{
    create_request_span, record_response, session_context_middleware, RequestIdGenerator,
    REQUEST_ID_HEADER,
};
use crate::resources::ServerResources;
use crate::security::apply_security_headers;
use crate::security::cookies::{append_set_cookie, flash_cookie};

/// Assemble the full application router
pub fn build_router(resources: ServerResources) -> Router {
    let resources = Arc::new(resources);
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .merge(HomeRoutes::routes(Arc::clone(&resources)))
        .merge(HealthRoutes::routes())
        .merge(AuthRoutes::routes(Arc::clone(&resources)))
        .merge(DashboardRoutes::routes(Arc::clone(&resources)))
        .merge(ProfileRoutes::routes(Arc::clone(&resources)))
        .merge(WorkoutRoutes::routes(Arc::clone(&resources)))
        .merge(ProgressRoutes::routes(Arc::clone(&resources)))
        .merge(NutritionRoutes::routes(Arc::clone(&resources)))
        .merge(MessageRoutes::routes(Arc::clone(&resources)))
        .merge(CoachRoutes::routes(Arc::clone(&resources)))
        .fallback(handle_not_found)
        .layer(middleware::from_fn_with_state(
            Arc::clone(&resources),
            session_context_middleware,
        ))
        .layer(middleware::from_fn_with_state(
            Arc::clone(&resources.security),
            apply_security_headers,
        ))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(
                    request_id_header.clone(),
                    RequestIdGenerator,
                ))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(|request: &Request<Body>| create_request_span(request))
                        .on_response(|response: &Response, latency: Duration, span: &Span| {
                            record_response(response, latency, span);
                        }),
                )
                .layer(PropagateRequestIdLayer::new(request_id_header)),
        )
}

async fn handle_not_found() -> AppError {
    AppError::not_found("Page")
}

/// 303 redirect carrying a one-shot flash message
pub(crate) fn redirect_with_flash(location: &str, message: &str) -> Response {
    let mut response = Redirect::to(location).into_response();
    append_set_cookie(response.headers_mut(), &flash_cookie(message));
    response
}

/// Split a form outcome into success, a re-render with field errors, or a hard failure
///
/// # Errors
///
/// Propagates every error that does not carry field errors
pub(crate) fn field_errors_or<T>(result: AppResult<T>) -> AppResult<Result<T, FieldErrors>> {
    match result {
        Ok(value) => Ok(Ok(value)),
        Err(e) => e.field_errors().map_or(Err(e), |errors| Ok(Err(errors))),
    }
}

/// Numeric id from a path segment; anything else is a missing page
///
/// # Errors
///
/// Returns `ResourceNotFound` naming `resource` when `raw` is not an id
pub(crate) fn parse_id(raw: &str, resource: &str) -> AppResult<i64> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::not_found(resource))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_rejects_non_numeric_segments() {
        assert_eq!(parse_id("42", "Workout").unwrap(), 42);
        assert_eq!(
            parse_id("abc", "Workout").unwrap_err().code,
            crate::errors::ErrorCode::ResourceNotFound
        );
        assert!(parse_id("0", "Workout").is_err());
    }

    #[test]
    fn test_redirect_with_flash_sets_cookie() {
        let response = redirect_with_flash("/dashboard/", "Saved!");
        assert_eq!(response.status(), http::StatusCode::SEE_OTHER);
        let cookie = response.headers()[http::header::SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("flash=Saved%21"));
    }
}
