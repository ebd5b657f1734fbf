// ABOUTME: Profile view and update routes
// ABOUTME: The profile row is created on first visit; invalid input re-renders without writing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use std::sync::Arc;

use axum::extract::State;
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Form, Router};
use tracing::info;

use super::{field_errors_or, redirect_with_flash};
use crate::constants::{flash, paths};
use crate::errors::{AppResult, FieldErrors};
use crate::forms::ProfileForm;
use crate::middleware::{require_login, PageContext};
use crate::models::User;
use crate::resources::ServerResources;
use crate::views::profile::profile_page;

/// Profile routes
pub struct ProfileRoutes;

impl ProfileRoutes {
    /// Create the profile routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/profile/",
                get(Self::handle_profile).post(Self::handle_update_profile),
            )
            .route_layer(middleware::from_fn(require_login))
            .with_state(resources)
    }

    async fn handle_profile(
        State(resources): State<Arc<ServerResources>>,
        Extension(ctx): Extension<PageContext>,
        Extension(user): Extension<User>,
    ) -> AppResult<Response> {
        let profile = resources.database.ensure_profile(user.id).await?;
        let form = ProfileForm::from(&profile);
        Ok(profile_page(&ctx, &profile, &form, &FieldErrors::new()).into_response())
    }

    async fn handle_update_profile(
        State(resources): State<Arc<ServerResources>>,
        Extension(ctx): Extension<PageContext>,
        Extension(user): Extension<User>,
        Form(form): Form<ProfileForm>,
    ) -> AppResult<Response> {
        let profile = resources.database.ensure_profile(user.id).await?;
        let update = match form.parse() {
            Ok(update) => update,
            Err(errors) => {
                return Ok(profile_page(&ctx, &profile, &form, &errors).into_response());
            }
        };

        match field_errors_or(resources.database.update_profile(user.id, &update).await)? {
            Ok(_) => {
                info!(user_id = %user.id, "Profile updated");
                Ok(redirect_with_flash(paths::DASHBOARD, flash::PROFILE_UPDATED))
            }
            Err(errors) => Ok(profile_page(&ctx, &profile, &form, &errors).into_response()),
        }
    }
}
