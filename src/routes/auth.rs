// ABOUTME: Registration, login and logout routes
// ABOUTME: Successful registration and login set the session cookie and redirect with a flash
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

//! Authentication routes
//!
//! Sessions are HS256 tokens in an `HttpOnly` cookie. Registration logs the
//! new user straight in and sends them to their profile.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Form, Router};
use tracing::{info, warn};

use super::redirect_with_flash;
use crate::auth::{hash_password, verify_password};
use crate::constants::{flash, paths};
use crate::errors::{AppResult, ErrorCode, FieldErrors};
use crate::forms::login::{LoginQuery, INVALID_LOGIN_MESSAGE};
use crate::forms::{safe_next, LoginForm, RegistrationForm};
use crate::logging::AppLogger;
use crate::middleware::PageContext;
use crate::models::User;
use crate::resources::ServerResources;
use crate::security::cookies::{append_set_cookie, clear_session_cookie, session_cookie};
use crate::views::auth::{login_page, register_page};

/// Authentication routes
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all authentication routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/register/",
                get(Self::handle_register_form).post(Self::handle_register),
            )
            .route("/login/", get(Self::handle_login_form).post(Self::handle_login))
            .route("/logout/", post(Self::handle_logout))
            .with_state(resources)
    }

    /// Redirect that also starts a session for `user`
    fn start_session(
        resources: &ServerResources,
        user: &User,
        location: &str,
        message: &str,
    ) -> AppResult<Response> {
        let token = resources.auth_manager.generate_token(user)?;
        let mut response = redirect_with_flash(location, message);
        append_set_cookie(
            response.headers_mut(),
            &session_cookie(
                &token,
                resources.auth_manager.session_max_age_secs(),
                resources.secure_cookies(),
            ),
        );
        Ok(response)
    }

    async fn handle_register_form(Extension(ctx): Extension<PageContext>) -> Response {
        register_page(&ctx, &RegistrationForm::default(), &FieldErrors::new()).into_response()
    }

    async fn handle_register(
        State(resources): State<Arc<ServerResources>>,
        Extension(ctx): Extension<PageContext>,
        Form(form): Form<RegistrationForm>,
    ) -> AppResult<Response> {
        let errors = form.validate(&resources.database).await?;
        if !errors.is_empty() {
            AppLogger::log_auth_event(&form.username, "register", false, Some(&errors.summary()));
            return Ok(register_page(&ctx, &form.without_passwords(), &errors).into_response());
        }

        let password_hash =
            hash_password(&form.password1, resources.config.auth.bcrypt_cost).await?;
        let user = match resources
            .database
            .create_user(&form.to_new_user(password_hash))
            .await
        {
            Ok(user) => user,
            // Lost a race with a concurrent registration for the same name or email
            Err(e) if e.code == ErrorCode::ResourceAlreadyExists => {
                let mut errors = FieldErrors::new();
                errors.add_non_field(e.message);
                return Ok(register_page(&ctx, &form.without_passwords(), &errors).into_response());
            }
            Err(e) => return Err(e),
        };

        AppLogger::log_auth_event(&user.username, "register", true, None);
        info!(user_id = %user.id, "New client registered");
        Self::start_session(&resources, &user, paths::PROFILE, flash::REGISTERED)
    }

    async fn handle_login_form(
        Extension(ctx): Extension<PageContext>,
        Query(query): Query<LoginQuery>,
    ) -> Response {
        login_page(&ctx, "", safe_next(&query.next), &FieldErrors::new()).into_response()
    }

    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        Extension(ctx): Extension<PageContext>,
        Form(form): Form<LoginForm>,
    ) -> AppResult<Response> {
        let next = safe_next(&form.next);
        let username = form.username.trim();

        let mut errors = FieldErrors::new();
        if username.is_empty() {
            errors.add("username", "This field is required.");
        }
        if form.password.is_empty() {
            errors.add("password", "This field is required.");
        }
        if !errors.is_empty() {
            return Ok(login_page(&ctx, username, next, &errors).into_response());
        }

        let user = match resources.database.get_user_by_username(username).await? {
            Some(user) if user.is_active => {
                if verify_password(&form.password, &user.password_hash).await? {
                    Some(user)
                } else {
                    None
                }
            }
            Some(_) => {
                warn!(username = %username, "Login attempt for inactive account");
                None
            }
            None => None,
        };

        let Some(user) = user else {
            AppLogger::log_auth_event(username, "login", false, Some("invalid credentials"));
            errors.add_non_field(INVALID_LOGIN_MESSAGE);
            return Ok(login_page(&ctx, username, next, &errors).into_response());
        };

        resources.database.record_login(user.id).await?;
        AppLogger::log_auth_event(&user.username, "login", true, None);
        Self::start_session(&resources, &user, next, flash::LOGGED_IN)
    }

    async fn handle_logout(Extension(ctx): Extension<PageContext>) -> Response {
        if let Some(user) = &ctx.user {
            AppLogger::log_auth_event(&user.username, "logout", true, None);
        }
        let mut response = redirect_with_flash(paths::HOME, flash::LOGGED_OUT);
        append_set_cookie(response.headers_mut(), &clear_session_cookie());
        response
    }
}
