// ABOUTME: Inbox and sent list, single-message page and compose form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use std::fmt::Write as _;

use axum::response::Html;

use super::{escape, input_field, non_field_errors, render_page, select_field, textarea_field};
use crate::errors::FieldErrors;
use crate::forms::MessageForm;
use crate::middleware::PageContext;
use crate::models::{Message, UserSummary};

/// `GET /messages/`
#[must_use]
pub fn messages_page(ctx: &PageContext, received: &[Message], sent: &[Message]) -> Html<String> {
    let mut content = String::from(
        r#"<h1>Messages</h1><p><a href="/send-message/">Write a message</a></p>
<section class="card"><h2>Inbox</h2>"#,
    );
    if received.is_empty() {
        content.push_str(r#"<p class="muted">No messages received.</p>"#);
    } else {
        content.push_str("<table><tr><th>From</th><th>Subject</th><th>Sent</th></tr>");
        for message in received {
            let class = if message.read { "" } else { r#" class="unread""# };
            let _ = write!(
                content,
                r#"<tr{class}><td>{}</td><td><a href="/message/{}/">{}</a></td><td>{}</td></tr>"#,
                escape(&message.sender_username),
                message.id,
                escape(&message.subject),
                message.created_at.format("%Y-%m-%d %H:%M"),
            );
        }
        content.push_str("</table>");
    }
    content.push_str(r#"</section><section class="card"><h2>Sent</h2>"#);
    if sent.is_empty() {
        content.push_str(r#"<p class="muted">No messages sent.</p>"#);
    } else {
        content.push_str("<table><tr><th>To</th><th>Subject</th><th>Sent</th></tr>");
        for message in sent {
            let _ = write!(
                content,
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&message.recipient_username),
                escape(&message.subject),
                message.created_at.format("%Y-%m-%d %H:%M"),
            );
        }
        content.push_str("</table>");
    }
    content.push_str("</section>");
    render_page("Messages", ctx, &content)
}

/// `GET /message/:id/`
#[must_use]
pub fn message_detail_page(ctx: &PageContext, message: &Message) -> Html<String> {
    let content = format!(
        r#"<section class="card">
<h1>{}</h1>
<p class="muted">From {} on {}</p>
<pre>{}</pre>
</section>
<p><a href="/send-message/">Reply</a> &middot; <a href="/messages/">Back to messages</a></p>"#,
        escape(&message.subject),
        escape(&message.sender_username),
        message.created_at.format("%Y-%m-%d %H:%M"),
        escape(&message.content),
    );
    render_page(&message.subject, ctx, &content)
}

/// `GET/POST /send-message/`
#[must_use]
pub fn compose_page(
    ctx: &PageContext,
    recipients: &[UserSummary],
    form: &MessageForm,
    errors: &FieldErrors,
) -> Html<String> {
    let ids: Vec<String> = recipients.iter().map(|r| r.id.to_string()).collect();
    let choices = ids
        .iter()
        .zip(recipients)
        .map(|(id, recipient)| (id.as_str(), recipient.username.as_str()));

    let content = format!(
        r#"<section class="card">
<h1>New message</h1>
<form method="post" action="/send-message/">
{}
{}{}{}
<button class="primary" type="submit">Send</button>
</form>
</section>"#,
        non_field_errors(errors),
        select_field(errors, "recipient", "Recipient", choices, &form.recipient),
        input_field(errors, "subject", "Subject", "text", &form.subject),
        textarea_field(errors, "content", "Message", &form.content),
    );
    render_page("New message", ctx, &content)
}
