// ABOUTME: Landing page route
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Router};

use crate::middleware::PageContext;
use crate::resources::ServerResources;
use crate::views::home::home_page;

/// Landing page routes
pub struct HomeRoutes;

impl HomeRoutes {
    /// Create the landing page route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::handle_home))
            .with_state(resources)
    }

    async fn handle_home(Extension(ctx): Extension<PageContext>) -> Response {
        home_page(&ctx).into_response()
    }
}
