// ABOUTME: Registration and login pages
// ABOUTME: Both re-render with submitted values (never passwords) and inline errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use axum::response::Html;

use super::{attr, input_field, non_field_errors, render_page};
use crate::constants::paths;
use crate::errors::FieldErrors;
use crate::forms::RegistrationForm;
use crate::middleware::PageContext;

/// `GET/POST /register/`
#[must_use]
pub fn register_page(
    ctx: &PageContext,
    form: &RegistrationForm,
    errors: &FieldErrors,
) -> Html<String> {
    let content = format!(
        r#"<section class="card">
<h1>Create your account</h1>
<form method="post" action="/register/">
{}
{}{}{}{}
{}{}
<button class="primary" type="submit">Register</button>
</form>
<p class="muted">Already registered? <a href="{}">Log in</a>.</p>
</section>"#,
        non_field_errors(errors),
        input_field(errors, "username", "Username", "text", &form.username),
        input_field(errors, "first_name", "First name", "text", &form.first_name),
        input_field(errors, "last_name", "Last name", "text", &form.last_name),
        input_field(errors, "email", "Email", "email", &form.email),
        input_field(errors, "password1", "Password", "password", ""),
        input_field(errors, "password2", "Password confirmation", "password", ""),
        paths::LOGIN,
    );
    render_page("Register", ctx, &content)
}

/// `GET/POST /login/`
#[must_use]
pub fn login_page(
    ctx: &PageContext,
    username: &str,
    next: &str,
    errors: &FieldErrors,
) -> Html<String> {
    let content = format!(
        r#"<section class="card">
<h1>Log in</h1>
<form method="post" action="{}">
{}
{}{}
<input type="hidden" name="next" value="{}">
<button class="primary" type="submit">Log in</button>
</form>
<p class="muted">New here? <a href="/register/">Create an account</a>.</p>
</section>"#,
        paths::LOGIN,
        non_field_errors(errors),
        input_field(errors, "username", "Username", "text", username),
        input_field(errors, "password", "Password", "password", ""),
        attr(next),
    );
    render_page("Log in", ctx, &content)
}
