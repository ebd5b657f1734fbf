// ABOUTME: Client dashboard page: stats, today's workouts, weight-trend bars and latest plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use std::fmt::Write as _;

use axum::response::Html;

use super::{escape, optional_value, render_page};
use crate::middleware::PageContext;
use crate::services::DashboardData;

/// `GET /dashboard/`
#[must_use]
pub fn dashboard_page(ctx: &PageContext, data: &DashboardData) -> Html<String> {
    let bmi = data
        .bmi
        .map_or_else(|| "Not available".to_owned(), |bmi| format!("{bmi:.1}"));

    let mut content = format!(
        r#"<h1>Dashboard</h1>
<div class="grid">
<div class="card"><div class="muted">BMI</div><div class="stat">{bmi}</div></div>
<div class="card"><div class="muted">Workouts completed</div><div class="stat">{}/{}</div></div>
<div class="card"><div class="muted">Completion rate</div><div class="stat">{:.1}%</div></div>
<div class="card"><div class="muted">Unread messages</div>
<div class="stat"><a href="/messages/">{}</a></div></div>
</div>"#,
        data.completed_workouts, data.total_workouts, data.completion_rate, data.unread_messages,
    );

    content.push_str(r#"<section class="card"><h2>Today's workouts</h2>"#);
    if data.todays_workouts.is_empty() {
        content.push_str(r#"<p class="muted">No workouts scheduled for today.</p>"#);
    } else {
        content.push_str("<ul>");
        for item in &data.todays_workouts {
            let status = if item.assignment.completed {
                "completed"
            } else {
                "pending"
            };
            let _ = write!(
                content,
                r#"<li><a href="/workout/{}/">{}</a> ({} min, {}) - {status}</li>"#,
                item.assignment.id,
                escape(&item.workout.title),
                item.workout.duration_minutes,
                item.workout.workout_type,
            );
        }
        content.push_str("</ul>");
    }
    content.push_str("</section>");

    content.push_str(r#"<section class="card"><h2>Weight trend</h2>"#);
    if data.weight_trend.is_empty() {
        content.push_str(r#"<p class="muted">Log your weight to see a trend.</p>"#);
    } else {
        content.push_str(r#"<div class="chart">"#);
        for point in &data.weight_trend {
            let _ = write!(
                content,
                concat!(
                    r#"<div class="bar" style="left: {}px; height: {:.1}px">"#,
                    "<span>{}</span><small>{}</small></div>"
                ),
                point.left, point.height, point.weight, point.date,
            );
        }
        content.push_str("</div>");
    }
    content.push_str("</section>");

    content.push_str(r#"<section class="card"><h2>Recent progress</h2>"#);
    if data.recent_progress.is_empty() {
        content.push_str(
            r#"<p class="muted">No progress entries yet. <a href="/progress/">Add one</a>.</p>"#,
        );
    } else {
        content.push_str(
            "<table><tr><th>Date</th><th>Weight</th><th>Body fat</th><th>Muscle mass</th></tr>",
        );
        for entry in &data.recent_progress {
            let _ = write!(
                content,
                concat!(
                    r#"<tr><td><a href="/progress/{}/">{}</a></td>"#,
                    "<td>{}</td><td>{}</td><td>{}</td></tr>"
                ),
                entry.id,
                entry.date,
                optional_value(entry.weight, "lbs"),
                optional_value(entry.body_fat_percentage, "%"),
                optional_value(entry.muscle_mass, "lbs"),
            );
        }
        content.push_str("</table>");
    }
    content.push_str("</section>");

    content.push_str(r#"<section class="card"><h2>Nutrition</h2>"#);
    match &data.latest_plan {
        Some(plan) => {
            let _ = write!(
                content,
                concat!(
                    "<h3>{}</h3><p>{} kcal &middot; {}g protein &middot; ",
                    "{}g carbs &middot; {}g fat</p>",
                    r#"<p><a href="/nutrition/">All plans</a></p>"#
                ),
                escape(&plan.title),
                plan.daily_calories,
                plan.protein_grams,
                plan.carbs_grams,
                plan.fat_grams,
            );
        }
        None => content.push_str(
            r#"<p class="muted">Your coach has not assigned a nutrition plan yet.</p>"#,
        ),
    }
    content.push_str("</section>");

    render_page("Dashboard", ctx, &content)
}
