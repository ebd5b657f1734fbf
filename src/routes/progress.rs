// ABOUTME: Progress list, new entry and entry detail routes
// ABOUTME: A second entry for the same date comes back as a field error on the date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Form, Router};
use chrono::Utc;
use tracing::info;

use super::{field_errors_or, parse_id, redirect_with_flash};
use crate::constants::{flash, paths};
use crate::errors::{AppError, AppResult, FieldErrors};
use crate::forms::ProgressForm;
use crate::middleware::{require_login, PageContext};
use crate::models::User;
use crate::resources::ServerResources;
use crate::views::progress::{progress_detail_page, progress_page};

/// Progress routes
pub struct ProgressRoutes;

impl ProgressRoutes {
    /// Create the progress routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/progress/",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route("/progress/:id/", get(Self::handle_detail))
            .route_layer(middleware::from_fn(require_login))
            .with_state(resources)
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Extension(ctx): Extension<PageContext>,
        Extension(user): Extension<User>,
    ) -> AppResult<Response> {
        let profile = resources.database.ensure_profile(user.id).await?;
        let entries = resources.database.list_progress(profile.id, None).await?;
        let form = ProgressForm::for_date(Utc::now().date_naive());
        Ok(progress_page(&ctx, &entries, &form, &FieldErrors::new()).into_response())
    }

    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Extension(ctx): Extension<PageContext>,
        Extension(user): Extension<User>,
        Form(form): Form<ProgressForm>,
    ) -> AppResult<Response> {
        let profile = resources.database.ensure_profile(user.id).await?;

        let errors = match form.parse() {
            Ok(entry) => {
                let outcome = resources.database.create_progress(profile.id, &entry).await;
                match field_errors_or(outcome)? {
                    Ok(created) => {
                        info!(
                            user_id = %user.id,
                            entry_id = created.id,
                            date = %created.date,
                            "Progress logged"
                        );
                        return Ok(redirect_with_flash(paths::PROGRESS, flash::PROGRESS_LOGGED));
                    }
                    Err(errors) => errors,
                }
            }
            Err(errors) => errors,
        };

        let entries = resources.database.list_progress(profile.id, None).await?;
        Ok(progress_page(&ctx, &entries, &form, &errors).into_response())
    }

    async fn handle_detail(
        State(resources): State<Arc<ServerResources>>,
        Extension(ctx): Extension<PageContext>,
        Extension(user): Extension<User>,
        Path(id): Path<String>,
    ) -> AppResult<Response> {
        let id = parse_id(&id, "Progress entry")?;
        let profile = resources.database.ensure_profile(user.id).await?;
        let entry = resources
            .database
            .get_progress(profile.id, id)
            .await?
            .ok_or_else(|| AppError::not_found("Progress entry"))?;
        Ok(progress_detail_page(&ctx, &entry).into_response())
    }
}
