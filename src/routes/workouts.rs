// ABOUTME: Workout assignment list, detail and completion routes
// ABOUTME: Assignments are looked up by id and owning client together, so foreign ids are 404s
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Form, Router};
use serde::Deserialize;
use tracing::info;

use super::{parse_id, redirect_with_flash};
use crate::constants::{flash, paths};
use crate::errors::{AppError, AppResult};
use crate::middleware::{require_login, PageContext};
use crate::models::User;
use crate::resources::ServerResources;
use crate::views::workouts::{workout_detail_page, workout_list_page};

/// Body of the completion form
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CompleteForm {
    complete: Option<String>,
}

/// Client workout routes
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create the workout routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/workouts/", get(Self::handle_list))
            .route(
                "/workout/:id/",
                get(Self::handle_detail).post(Self::handle_complete),
            )
            .route_layer(middleware::from_fn(require_login))
            .with_state(resources)
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Extension(ctx): Extension<PageContext>,
        Extension(user): Extension<User>,
    ) -> AppResult<Response> {
        let profile = resources.database.ensure_profile(user.id).await?;
        let assignments = resources.database.list_assignments(profile.id).await?;
        Ok(workout_list_page(&ctx, &assignments).into_response())
    }

    async fn handle_detail(
        State(resources): State<Arc<ServerResources>>,
        Extension(ctx): Extension<PageContext>,
        Extension(user): Extension<User>,
        Path(id): Path<String>,
    ) -> AppResult<Response> {
        let id = parse_id(&id, "Workout")?;
        let profile = resources.database.ensure_profile(user.id).await?;
        let item = resources
            .database
            .get_assignment(profile.id, id)
            .await?
            .ok_or_else(|| AppError::not_found("Workout"))?;
        Ok(workout_detail_page(&ctx, &item).into_response())
    }

    async fn handle_complete(
        State(resources): State<Arc<ServerResources>>,
        ctx: Extension<PageContext>,
        user: Extension<User>,
        Path(id): Path<String>,
        Form(form): Form<CompleteForm>,
    ) -> AppResult<Response> {
        // A post without the action field just shows the page again
        if form.complete.is_none() {
            return Self::handle_detail(State(resources), ctx, user, Path(id)).await;
        }

        let id = parse_id(&id, "Workout")?;
        let profile = resources.database.ensure_profile(user.id).await?;
        if resources.database.complete_assignment(profile.id, id).await? {
            info!(user_id = %user.id, assignment_id = id, "Workout completed");
        }
        Ok(redirect_with_flash(paths::WORKOUTS, flash::WORKOUT_COMPLETED))
    }
}
