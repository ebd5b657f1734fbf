// ABOUTME: Landing page for visitors and a shortcut to the dashboard for signed-in users
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use axum::response::Html;

use super::{escape, render_page};
use crate::constants::paths;
use crate::middleware::PageContext;

/// `GET /`
#[must_use]
pub fn home_page(ctx: &PageContext) -> Html<String> {
    let call_to_action = ctx.user.as_ref().map_or_else(
        || {
            format!(
                concat!(
                    r#"<p><a href="/register/">Create an account</a> or "#,
                    r#"<a href="{}">log in</a> to get started.</p>"#
                ),
                paths::LOGIN
            )
        },
        |user| {
            format!(
                r#"<p>Welcome back, {}. <a href="{}">Go to your dashboard</a>.</p>"#,
                escape(&user.display_name()),
                paths::DASHBOARD
            )
        },
    );

    let content = format!(
        r#"<section class="card">
<h1>Train with a coach who knows your numbers</h1>
<p>Get workouts assigned by your coach, log your weight and body composition,
follow your nutrition plan and keep the conversation going, all in one place.</p>
{call_to_action}
</section>"#
    );
    render_page("Home", ctx, &content)
}
