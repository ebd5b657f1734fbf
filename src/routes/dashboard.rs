// ABOUTME: Client dashboard route
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use std::sync::Arc;

use axum::extract::State;
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Router};
use chrono::Utc;

use crate::errors::AppResult;
use crate::middleware::{require_login, PageContext};
use crate::models::User;
use crate::resources::ServerResources;
use crate::services::load_dashboard;
use crate::views::dashboard::dashboard_page;

/// Dashboard routes
pub struct DashboardRoutes;

impl DashboardRoutes {
    /// Create the dashboard route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/dashboard/", get(Self::handle_dashboard))
            .route_layer(middleware::from_fn(require_login))
            .with_state(resources)
    }

    async fn handle_dashboard(
        State(resources): State<Arc<ServerResources>>,
        Extension(ctx): Extension<PageContext>,
        Extension(user): Extension<User>,
    ) -> AppResult<Response> {
        let today = Utc::now().date_naive();
        let data = load_dashboard(&resources.database, &user, today).await?;
        Ok(dashboard_page(&ctx, &data).into_response())
    }
}
