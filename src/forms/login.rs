// ABOUTME: Login form and post-login redirect target sanitizing
// ABOUTME: Only same-site absolute paths are accepted as a next target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use serde::Deserialize;

use crate::constants::paths;

/// Generic failure text; never reveals which half was wrong
pub const INVALID_LOGIN_MESSAGE: &str =
    "Please enter a correct username and password. Note that both fields may be case-sensitive.";

/// Raw login submission
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    /// Login name
    pub username: String,
    /// Password
    pub password: String,
    /// Where to go after logging in
    pub next: String,
}

/// Query string of `GET /login/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginQuery {
    /// Where to go after logging in
    pub next: String,
}

/// The redirect target to use after login
///
/// Anything that is not a local path (`//host`, `http://`, backslashes)
/// falls back to the dashboard.
#[must_use]
pub fn safe_next(next: &str) -> &str {
    let next = next.trim();
    let is_local = next.starts_with('/')
        && !next.starts_with("//")
        && !next.contains('\\')
        && !next.chars().any(char::is_control);
    if is_local {
        next
    } else {
        paths::DASHBOARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_next() {
        assert_eq!(safe_next("/workout/3/"), "/workout/3/");
        assert_eq!(safe_next(""), "/dashboard/");
        assert_eq!(safe_next("https://evil.example/"), "/dashboard/");
        assert_eq!(safe_next("//evil.example/"), "/dashboard/");
        assert_eq!(safe_next("/\\evil.example"), "/dashboard/");
    }
}
