// ABOUTME: Inbox, message detail and compose routes
// ABOUTME: Only the recipient can open a message; opening it marks it read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Form, Router};
use tracing::info;

use super::{field_errors_or, parse_id, redirect_with_flash};
use crate::constants::{flash, paths};
use crate::errors::{AppError, AppResult, FieldErrors};
use crate::forms::MessageForm;
use crate::middleware::{require_login, PageContext};
use crate::models::User;
use crate::resources::ServerResources;
use crate::views::messages::{compose_page, message_detail_page, messages_page};

/// Messaging routes
pub struct MessageRoutes;

impl MessageRoutes {
    /// Create the messaging routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/messages/", get(Self::handle_list))
            .route("/message/:id/", get(Self::handle_detail))
            .route(
                "/send-message/",
                get(Self::handle_compose).post(Self::handle_send),
            )
            .route_layer(middleware::from_fn(require_login))
            .with_state(resources)
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Extension(ctx): Extension<PageContext>,
        Extension(user): Extension<User>,
    ) -> AppResult<Response> {
        let received = resources.database.list_received_messages(user.id).await?;
        let sent = resources.database.list_sent_messages(user.id).await?;
        Ok(messages_page(&ctx, &received, &sent).into_response())
    }

    async fn handle_detail(
        State(resources): State<Arc<ServerResources>>,
        Extension(ctx): Extension<PageContext>,
        Extension(user): Extension<User>,
        Path(id): Path<String>,
    ) -> AppResult<Response> {
        let id = parse_id(&id, "Message")?;
        let mut message = resources
            .database
            .get_received_message(user.id, id)
            .await?
            .ok_or_else(|| AppError::not_found("Message"))?;

        if resources.database.mark_message_read(user.id, id).await? {
            message.read = true;
        }
        Ok(message_detail_page(&ctx, &message).into_response())
    }

    async fn handle_compose(
        State(resources): State<Arc<ServerResources>>,
        Extension(ctx): Extension<PageContext>,
        Extension(user): Extension<User>,
    ) -> AppResult<Response> {
        let recipients = resources.database.list_message_recipients().await?;
        let page = compose_page(&ctx, &recipients, &MessageForm::default(), &FieldErrors::new());
        Ok(page.into_response())
    }

    async fn handle_send(
        State(resources): State<Arc<ServerResources>>,
        Extension(ctx): Extension<PageContext>,
        Extension(user): Extension<User>,
        Form(form): Form<MessageForm>,
    ) -> AppResult<Response> {
        let errors = match form.parse(user.id) {
            Ok(message) => {
                let outcome = resources.database.send_message(&message).await;
                match field_errors_or(outcome)? {
                    Ok(sent) => {
                        info!(
                            message_id = sent.id,
                            sender_id = %sent.sender_id,
                            recipient_id = %sent.recipient_id,
                            "Message sent"
                        );
                        return Ok(redirect_with_flash(paths::MESSAGES, flash::MESSAGE_SENT));
                    }
                    Err(errors) => errors,
                }
            }
            Err(errors) => errors,
        };

        let recipients = resources.database.list_message_recipients().await?;
        Ok(compose_page(&ctx, &recipients, &form, &errors).into_response())
    }
}
