// ABOUTME: Nutrition plan list route
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use std::sync::Arc;

use axum::extract::State;
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Router};

use crate::errors::AppResult;
use crate::middleware::{require_login, PageContext};
use crate::models::User;
use crate::resources::ServerResources;
use crate::views::nutrition::nutrition_page;

/// Nutrition routes
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Create the nutrition route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/nutrition/", get(Self::handle_list))
            .route_layer(middleware::from_fn(require_login))
            .with_state(resources)
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Extension(ctx): Extension<PageContext>,
        Extension(user): Extension<User>,
    ) -> AppResult<Response> {
        let profile = resources.database.ensure_profile(user.id).await?;
        let plans = resources.database.list_nutrition_plans(profile.id).await?;
        Ok(nutrition_page(&ctx, &plans).into_response())
    }
}
