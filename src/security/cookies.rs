// ABOUTME: Cookie parsing and Set-Cookie builders for the session token and flash messages
// ABOUTME: Session cookies are HttpOnly and SameSite=Lax; flash values are percent-encoded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use http::header::{COOKIE, SET_COOKIE};
use http::{HeaderMap, HeaderValue};

use crate::constants::cookies::{FLASH, SESSION};

/// Read one cookie from the request `Cookie` headers
#[must_use]
pub fn get_cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_owned())
}

fn build_cookie(name: &str, value: &str, max_age_secs: i64, secure: bool) -> String {
    let secure = if secure { "; Secure" } else { "" };
    format!("{name}={value}; HttpOnly; Path=/; SameSite=Lax; Max-Age={max_age_secs}{secure}")
}

/// `Set-Cookie` value carrying a fresh session token
#[must_use]
pub fn session_cookie(token: &str, max_age_secs: i64, secure: bool) -> String {
    build_cookie(SESSION, token, max_age_secs, secure)
}

/// `Set-Cookie` value that ends the session
#[must_use]
pub fn clear_session_cookie() -> String {
    build_cookie(SESSION, "", 0, false)
}

/// `Set-Cookie` value carrying a one-shot message for the next page
#[must_use]
pub fn flash_cookie(message: &str) -> String {
    build_cookie(FLASH, &urlencoding::encode(message), 60, false)
}

/// `Set-Cookie` value that drops a displayed flash message
#[must_use]
pub fn clear_flash_cookie() -> String {
    build_cookie(FLASH, "", 0, false)
}

/// The pending flash message, decoded
#[must_use]
pub fn read_flash(headers: &HeaderMap) -> Option<String> {
    let raw = get_cookie_value(headers, FLASH)?;
    if raw.is_empty() {
        return None;
    }
    urlencoding::decode(&raw).ok().map(|message| message.into_owned())
}

/// Append a `Set-Cookie` header, skipping values that are not valid header text
pub fn append_set_cookie(headers: &mut HeaderMap, cookie: &str) {
    match HeaderValue::from_str(cookie) {
        Ok(value) => {
            headers.append(SET_COOKIE, value);
        }
        Err(e) => tracing::warn!(error = %e, "Dropping malformed Set-Cookie value"),
    }
}
