// ABOUTME: Profile page showing current details above the edit form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use axum::response::Html;

use super::{
    escape, input_field, non_field_errors, number_field, optional_value, render_page,
    select_field, textarea_field,
};
use crate::errors::FieldErrors;
use crate::forms::ProfileForm;
use crate::middleware::PageContext;
use crate::models::{ClientProfile, ExperienceLevel, FitnessGoal};

/// `GET/POST /profile/`
#[must_use]
pub fn profile_page(
    ctx: &PageContext,
    profile: &ClientProfile,
    form: &ProfileForm,
    errors: &FieldErrors,
) -> Html<String> {
    let name = ctx
        .user
        .as_ref()
        .map(|user| user.display_name())
        .unwrap_or_default();

    let summary = format!(
        r#"<section class="card">
<h1>{}</h1>
<table>
<tr><th>Height</th><td>{}</td></tr>
<tr><th>Current weight</th><td>{}</td></tr>
<tr><th>Target weight</th><td>{}</td></tr>
<tr><th>Experience</th><td>{}</td></tr>
<tr><th>Goal</th><td>{}</td></tr>
</table>
</section>"#,
        escape(&name),
        escape(&profile.height_display()),
        optional_value(profile.current_weight, "lbs"),
        optional_value(profile.target_weight, "lbs"),
        profile.experience_level,
        profile.fitness_goals,
    );

    let form_html = format!(
        r#"<section class="card">
<h2>Edit profile</h2>
<form method="post" action="/profile/">
{}
{}{}{}{}{}{}{}{}{}{}
<button class="primary" type="submit">Save profile</button>
</form>
</section>"#,
        non_field_errors(errors),
        input_field(errors, "phone", "Phone", "text", &form.phone),
        number_field(
            errors,
            "current_weight",
            "Current weight (lbs)",
            &form.current_weight,
            r#"step="0.1""#,
        ),
        number_field(
            errors,
            "target_weight",
            "Target weight (lbs)",
            &form.target_weight,
            r#"step="0.1""#,
        ),
        number_field(
            errors,
            "height_feet",
            "Height (feet)",
            &form.height_feet,
            r#"min="3" max="8""#,
        ),
        number_field(
            errors,
            "height_inches",
            "Height (inches)",
            &form.height_inches,
            r#"min="0" max="11""#,
        ),
        number_field(errors, "age", "Age", &form.age, r#"min="1" max="120""#),
        select_field(
            errors,
            "experience_level",
            "Experience level",
            ExperienceLevel::ALL.into_iter().map(|l| (l.as_str(), l.display_name())),
            &form.experience_level,
        ),
        select_field(
            errors,
            "fitness_goals",
            "Fitness goal",
            FitnessGoal::ALL.into_iter().map(|g| (g.as_str(), g.display_name())),
            &form.fitness_goals,
        ),
        textarea_field(
            errors,
            "medical_conditions",
            "Medical conditions",
            &form.medical_conditions,
        ),
        textarea_field(
            errors,
            "dietary_restrictions",
            "Dietary restrictions",
            &form.dietary_restrictions,
        ),
    );

    render_page("Profile", ctx, &(summary + &form_html))
}
