// ABOUTME: Server-side HTML rendering for every page
// ABOUTME: Base layout from an embedded template plus escaping and form-field helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

//! # Views
//!
//! Pages are plain strings assembled with `format!` and dropped into
//! `templates/base.html`. Everything user-supplied goes through [`escape`] or
//! [`attr`] on the way in.

/// Register and login pages
pub mod auth;
/// Coach console pages
pub mod coach;
/// Client dashboard
pub mod dashboard;
/// Landing page
pub mod home;
/// Inbox, message detail and compose pages
pub mod messages;
/// Nutrition plan list
pub mod nutrition;
/// Profile page
pub mod profile;
/// Progress list, entry form and detail
pub mod progress;
/// Workout assignment list and detail
pub mod workouts;

use std::borrow::Cow;
use std::fmt::Write as _;

use axum::response::Html;

use crate::constants::paths;
use crate::errors::{FieldErrors, NON_FIELD};
use crate::middleware::PageContext;

/// Base layout embedded at compile time
const BASE_TEMPLATE: &str = include_str!("../../templates/base.html");

/// Escape text content
#[must_use]
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

/// Escape a double-quoted attribute value
#[must_use]
pub fn attr(text: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(text)
}

/// Wrap page content in the site layout
#[must_use]
pub fn render_page(title: &str, ctx: &PageContext, content: &str) -> Html<String> {
    let flash = ctx.flash.as_deref().map_or_else(String::new, |message| {
        format!(r#"<div class="flash">{}</div>"#, escape(message))
    });
    Html(
        BASE_TEMPLATE
            .replace("{{TITLE}}", &escape(title))
            .replace("{{NAV}}", &navigation(ctx))
            .replace("{{FLASH}}", &flash)
            .replace("{{CONTENT}}", content),
    )
}

fn navigation(ctx: &PageContext) -> String {
    let Some(user) = &ctx.user else {
        return format!(
            r#"<a href="{}">Log in</a><a href="/register/">Register</a>"#,
            paths::LOGIN
        );
    };

    let mut nav = format!(
        concat!(
            r#"<a href="{}">Dashboard</a><a href="{}">Workouts</a><a href="{}">Progress</a>"#,
            r#"<a href="/nutrition/">Nutrition</a><a href="{}">Messages</a>"#,
            r#"<a href="{}">Profile</a>"#
        ),
        paths::DASHBOARD,
        paths::WORKOUTS,
        paths::PROGRESS,
        paths::MESSAGES,
        paths::PROFILE,
    );
    if user.is_staff {
        let _ = write!(nav, r#"<a href="{}">Coach</a>"#, paths::COACH_WORKOUTS);
    }
    let _ = write!(
        nav,
        concat!(
            r#"<form method="post" action="/logout/">"#,
            r#"<button type="submit">Log out ({})</button></form>"#
        ),
        escape(&user.username)
    );
    nav
}

/// `<ul class="errorlist">` for one field, or nothing
#[must_use]
pub fn field_errors(errors: &FieldErrors, field: &str) -> String {
    let messages = errors.get(field);
    if messages.is_empty() {
        return String::new();
    }
    let items: String = messages
        .iter()
        .map(|message| format!("<li>{}</li>", escape(message)))
        .collect();
    format!(r#"<ul class="errorlist">{items}</ul>"#)
}

/// Errors that belong to the form as a whole
#[must_use]
pub fn non_field_errors(errors: &FieldErrors) -> String {
    field_errors(errors, NON_FIELD)
}

const BLANK_OPTION: &str = r#"<option value="">---------</option>"#;

fn label_tag(name: &str, label: &str) -> String {
    format!(r#"<label for="id_{name}">{label}</label>"#)
}

/// Labelled `<input>` with its errors
#[must_use]
pub fn input_field(
    errors: &FieldErrors,
    name: &str,
    label: &str,
    input_type: &str,
    value: &str,
) -> String {
    let label = label_tag(name, label);
    format!(
        r#"{label}<input type="{input_type}" name="{name}" id="id_{name}" value="{}">{}"#,
        attr(value),
        field_errors(errors, name)
    )
}

/// Labelled numeric `<input>`; `extra` carries attributes such as `step="0.1"`
#[must_use]
pub fn number_field(
    errors: &FieldErrors,
    name: &str,
    label: &str,
    value: &str,
    extra: &str,
) -> String {
    let label = label_tag(name, label);
    format!(
        r#"{label}<input type="number" name="{name}" id="id_{name}" value="{}" {extra}>{}"#,
        attr(value),
        field_errors(errors, name)
    )
}

/// Labelled `<textarea>` with its errors
#[must_use]
pub fn textarea_field(errors: &FieldErrors, name: &str, label: &str, value: &str) -> String {
    let label = label_tag(name, label);
    format!(
        r#"{label}<textarea name="{name}" id="id_{name}" rows="4">{}</textarea>{}"#,
        escape(value),
        field_errors(errors, name)
    )
}

/// Labelled `<select>` over `(value, label)` pairs with its errors
#[must_use]
pub fn select_field<'a>(
    errors: &FieldErrors,
    name: &str,
    label: &str,
    choices: impl IntoIterator<Item = (&'a str, &'a str)>,
    selected: &str,
) -> String {
    let options: String = choices
        .into_iter()
        .map(|(value, text)| {
            let marker = if value == selected { " selected" } else { "" };
            format!(
                r#"<option value="{}"{marker}>{}</option>"#,
                attr(value),
                escape(text)
            )
        })
        .collect();
    let label = label_tag(name, label);
    format!(
        r#"{label}<select name="{name}" id="id_{name}">{BLANK_OPTION}{options}</select>{}"#,
        field_errors(errors, name)
    )
}

/// Labelled checkbox with its errors
#[must_use]
pub fn checkbox_field(errors: &FieldErrors, name: &str, label: &str, checked: bool) -> String {
    let marker = if checked { " checked" } else { "" };
    format!(
        r#"<label><input type="checkbox" name="{name}"{marker}> {label}</label>{}"#,
        field_errors(errors, name)
    )
}

/// Format an optional measurement for display
#[must_use]
pub fn optional_value(value: Option<f64>, unit: &str) -> String {
    value.map_or_else(|| "-".to_owned(), |v| format!("{v} {unit}").trim_end().to_owned())
}
