// ABOUTME: Staff-only console pages: workout catalog, assignment form and nutrition plan form
// ABOUTME: Clients are offered by username; the forms resolve them server-side
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use std::fmt::Write as _;

use axum::response::Html;

use super::{
    escape, input_field, non_field_errors, number_field, render_page, select_field,
    textarea_field,
};
use crate::constants::paths;
use crate::errors::FieldErrors;
use crate::forms::{AssignmentForm, NutritionPlanForm, WorkoutForm};
use crate::middleware::PageContext;
use crate::models::{UserSummary, Workout, WorkoutType};

fn coach_nav() -> String {
    format!(
        concat!(
            r#"<p><a href="{}">Workouts</a> &middot; <a href="{}">Assign</a>"#,
            r#" &middot; <a href="{}">Nutrition</a></p>"#
        ),
        paths::COACH_WORKOUTS,
        paths::COACH_ASSIGNMENTS,
        paths::COACH_NUTRITION
    )
}

fn client_choices(clients: &[UserSummary]) -> impl Iterator<Item = (&str, &str)> {
    clients
        .iter()
        .map(|client| (client.username.as_str(), client.username.as_str()))
}

/// `GET/POST /coach/workouts/`
#[must_use]
pub fn workout_catalog_page(
    ctx: &PageContext,
    workouts: &[Workout],
    form: &WorkoutForm,
    errors: &FieldErrors,
) -> Html<String> {
    let mut content = format!("<h1>Coach console</h1>{}", coach_nav());

    content.push_str(r#"<section class="card"><h2>Workout catalog</h2>"#);
    if workouts.is_empty() {
        content.push_str(r#"<p class="muted">No workouts yet.</p>"#);
    } else {
        content.push_str(
            "<table><tr><th>#</th><th>Title</th><th>Type</th>\
             <th>Duration</th><th>Difficulty</th></tr>",
        );
        for workout in workouts {
            let _ = write!(
                content,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{} min</td><td>{}/10</td></tr>",
                workout.id,
                escape(&workout.title),
                workout.workout_type,
                workout.duration_minutes,
                workout.difficulty_level,
            );
        }
        content.push_str("</table>");
    }
    content.push_str("</section>");

    let _ = write!(
        content,
        r#"<section class="card">
<h2>New workout</h2>
<form method="post" action="{}">
{}
{}{}{}{}{}{}{}
<button class="primary" type="submit">Create workout</button>
</form>
</section>"#,
        paths::COACH_WORKOUTS,
        non_field_errors(errors),
        input_field(errors, "title", "Title", "text", &form.title),
        textarea_field(errors, "description", "Description", &form.description),
        select_field(
            errors,
            "workout_type",
            "Type",
            WorkoutType::ALL.into_iter().map(|t| (t.as_str(), t.display_name())),
            &form.workout_type,
        ),
        number_field(
            errors,
            "duration_minutes",
            "Duration (minutes)",
            &form.duration_minutes,
            r#"min="1""#,
        ),
        number_field(
            errors,
            "difficulty_level",
            "Difficulty (1-10)",
            &form.difficulty_level,
            r#"min="1" max="10""#,
        ),
        textarea_field(errors, "instructions", "Instructions", &form.instructions),
        input_field(errors, "video_url", "Video URL", "url", &form.video_url),
    );

    render_page("Coach: workouts", ctx, &content)
}

/// `GET/POST /coach/assignments/`
#[must_use]
pub fn assignment_page(
    ctx: &PageContext,
    clients: &[UserSummary],
    workouts: &[Workout],
    form: &AssignmentForm,
    errors: &FieldErrors,
) -> Html<String> {
    let ids: Vec<String> = workouts.iter().map(|w| w.id.to_string()).collect();
    let workout_choices = ids
        .iter()
        .zip(workouts)
        .map(|(id, workout)| (id.as_str(), workout.title.as_str()));

    let content = format!(
        r#"<h1>Coach console</h1>{}
<section class="card">
<h2>Assign a workout</h2>
<form method="post" action="{}">
{}
{}{}{}{}
<button class="primary" type="submit">Assign</button>
</form>
</section>"#,
        coach_nav(),
        paths::COACH_ASSIGNMENTS,
        non_field_errors(errors),
        select_field(errors, "client", "Client", client_choices(clients), &form.client),
        select_field(errors, "workout", "Workout", workout_choices, &form.workout),
        input_field(errors, "assigned_date", "Date", "date", &form.assigned_date),
        textarea_field(errors, "notes", "Notes", &form.notes),
    );
    render_page("Coach: assignments", ctx, &content)
}

/// `GET/POST /coach/nutrition/`
#[must_use]
pub fn nutrition_plan_page(
    ctx: &PageContext,
    clients: &[UserSummary],
    form: &NutritionPlanForm,
    errors: &FieldErrors,
) -> Html<String> {
    let content = format!(
        r#"<h1>Coach console</h1>{}
<section class="card">
<h2>New nutrition plan</h2>
<form method="post" action="{}">
{}
{}{}{}{}{}{}{}{}
<button class="primary" type="submit">Create plan</button>
</form>
</section>"#,
        coach_nav(),
        paths::COACH_NUTRITION,
        non_field_errors(errors),
        select_field(errors, "client", "Client", client_choices(clients), &form.client),
        input_field(errors, "title", "Title", "text", &form.title),
        textarea_field(errors, "description", "Description", &form.description),
        number_field(
            errors,
            "daily_calories",
            "Daily calories",
            &form.daily_calories,
            r#"min="0""#,
        ),
        number_field(errors, "protein_grams", "Protein (g)", &form.protein_grams, r#"min="0""#),
        number_field(errors, "carbs_grams", "Carbs (g)", &form.carbs_grams, r#"min="0""#),
        number_field(errors, "fat_grams", "Fat (g)", &form.fat_grams, r#"min="0""#),
        textarea_field(errors, "meal_plan", "Meal plan", &form.meal_plan),
    );
    render_page("Coach: nutrition", ctx, &content)
}
