// ABOUTME: Progress history with the new-entry form, and the single-entry page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use std::fmt::Write as _;

use axum::response::Html;

use super::{
    checkbox_field, escape, input_field, non_field_errors, number_field, optional_value,
    render_page, textarea_field,
};
use crate::errors::FieldErrors;
use crate::forms::ProgressForm;
use crate::middleware::PageContext;
use crate::models::ProgressEntry;

/// `GET/POST /progress/`
#[must_use]
pub fn progress_page(
    ctx: &PageContext,
    entries: &[ProgressEntry],
    form: &ProgressForm,
    errors: &FieldErrors,
) -> Html<String> {
    let mut content = format!(
        r#"<h1>Progress</h1>
<section class="card">
<h2>Log progress</h2>
<form method="post" action="/progress/">
{}
{}{}
{}{}
{}{}
{}
<button class="primary" type="submit">Save entry</button>
</form>
</section>"#,
        non_field_errors(errors),
        input_field(errors, "date", "Date", "date", &form.date),
        number_field(errors, "weight", "Weight (lbs)", &form.weight, r#"step="0.1""#),
        checkbox_field(errors, "enable_body_fat", "Track Body Fat %", form.body_fat_enabled()),
        number_field(
            errors,
            "body_fat_percentage",
            "Body fat (%)",
            &form.body_fat_percentage,
            r#"step="0.1" min="0" max="100""#
        ),
        checkbox_field(
            errors,
            "enable_muscle_mass",
            "Track Muscle Mass (lbs)",
            form.muscle_mass_enabled()
        ),
        number_field(
            errors,
            "muscle_mass",
            "Muscle mass (lbs)",
            &form.muscle_mass,
            r#"step="0.1""#,
        ),
        textarea_field(errors, "notes", "Notes", &form.notes),
    );

    content.push_str(r#"<section class="card"><h2>History</h2>"#);
    if entries.is_empty() {
        content.push_str(r#"<p class="muted">No entries yet.</p>"#);
    } else {
        content.push_str(
            "<table><tr><th>Date</th><th>Weight</th><th>Body fat</th><th>Muscle mass</th></tr>",
        );
        for entry in entries {
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

    render_page("Progress", ctx, &content)
}

/// `GET /progress/:id/`
#[must_use]
pub fn progress_detail_page(ctx: &PageContext, entry: &ProgressEntry) -> Html<String> {
    let notes = if entry.notes.is_empty() {
        r#"<p class="muted">No notes.</p>"#.to_owned()
    } else {
        format!("<pre>{}</pre>", escape(&entry.notes))
    };
    let content = format!(
        r#"<section class="card">
<h1>Progress on {}</h1>
<table>
<tr><th>Weight</th><td>{}</td></tr>
<tr><th>Body fat</th><td>{}</td></tr>
<tr><th>Muscle mass</th><td>{}</td></tr>
</table>
<h2>Notes</h2>
{notes}
</section>
<p><a href="/progress/">Back to progress</a></p>"#,
        entry.date,
        optional_value(entry.weight, "lbs"),
        optional_value(entry.body_fat_percentage, "%"),
        optional_value(entry.muscle_mass, "lbs"),
    );
    render_page("Progress entry", ctx, &content)
}
