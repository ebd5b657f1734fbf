// ABOUTME: Workout assignment list and detail pages for clients
// ABOUTME: The detail page carries the mark-as-complete form while the assignment is pending
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use std::fmt::Write as _;

use axum::response::Html;

use super::{attr, escape, render_page};
use crate::middleware::PageContext;
use crate::models::AssignedWorkout;

/// `GET /workouts/`
#[must_use]
pub fn workout_list_page(ctx: &PageContext, assignments: &[AssignedWorkout]) -> Html<String> {
    let mut content = String::from(r#"<h1>My workouts</h1><section class="card">"#);
    if assignments.is_empty() {
        content.push_str(r#"<p class="muted">Your coach has not assigned any workouts yet.</p>"#);
    } else {
        content.push_str(
            "<table><tr><th>Date</th><th>Workout</th><th>Type</th>\
             <th>Duration</th><th>Status</th></tr>",
        );
        for item in assignments {
            let status = if item.assignment.completed {
                r#"<span class="badge done">Completed</span>"#
            } else {
                r#"<span class="badge">Pending</span>"#
            };
            let _ = write!(
                content,
                concat!(
                    r#"<tr><td>{}</td><td><a href="/workout/{}/">{}</a></td>"#,
                    "<td>{}</td><td>{} min</td><td>{}</td></tr>"
                ),
                item.assignment.assigned_date,
                item.assignment.id,
                escape(&item.workout.title),
                item.workout.workout_type,
                item.workout.duration_minutes,
                status,
            );
        }
        content.push_str("</table>");
    }
    content.push_str("</section>");
    render_page("Workouts", ctx, &content)
}

/// `GET /workout/:id/`
#[must_use]
pub fn workout_detail_page(ctx: &PageContext, item: &AssignedWorkout) -> Html<String> {
    let workout = &item.workout;
    let assignment = &item.assignment;

    let mut content = format!(
        r#"<section class="card">
<h1>{}</h1>
<p class="muted">{} &middot; {} min &middot; difficulty {}/10 &middot; scheduled {}</p>
<p>{}</p>
<h2>Instructions</h2>
<pre>{}</pre>"#,
        escape(&workout.title),
        workout.workout_type,
        workout.duration_minutes,
        workout.difficulty_level,
        assignment.assigned_date,
        escape(&workout.description),
        escape(&workout.instructions),
    );

    if !workout.video_url.is_empty() {
        let _ = write!(
            content,
            r#"<p><a href="{}" rel="noopener noreferrer" target="_blank">Watch the video</a></p>"#,
            attr(&workout.video_url)
        );
    }
    if !assignment.notes.is_empty() {
        let _ = write!(
            content,
            "<h2>Coach notes</h2><p>{}</p>",
            escape(&assignment.notes)
        );
    }

    match assignment.completed_date {
        Some(completed) if assignment.completed => {
            let _ = write!(
                content,
                r#"<p><span class="badge done">Completed</span> {}</p>"#,
                completed.format("%Y-%m-%d %H:%M UTC")
            );
        }
        _ => {
            let _ = write!(
                content,
                concat!(
                    r#"<form method="post" action="/workout/{}/">"#,
                    r#"<input type="hidden" name="complete" value="1">"#,
                    r#"<button class="primary" type="submit">Mark as completed</button></form>"#
                ),
                assignment.id
            );
        }
    }

    content.push_str(r#"</section><p><a href="/workouts/">Back to workouts</a></p>"#);
    render_page(&workout.title, ctx, &content)
}
