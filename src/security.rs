// ABOUTME: Security response headers and cookie helpers for the HTML front end
// ABOUTME: Environment-aware header policy applied to every response by an axum middleware
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

//! # Security Headers Middleware
//!
//! Every page is server-rendered HTML with inline styles and no scripts, so the
//! policy can stay strict. HSTS is only sent in production.

/// Session and flash cookie handling
pub mod cookies;

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use http::header::{HeaderName, HeaderValue};

use crate::config::Environment;

const BASE_CSP: &str = "default-src 'self'; style-src 'self' 'unsafe-inline'; \
    img-src 'self' data: https:; frame-ancestors 'none'; object-src 'none'; \
    base-uri 'self'; form-action 'self';";

/// Security headers configuration
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Content Security Policy header value
    pub csp: String,
    /// X-Frame-Options header value
    pub frame_options: String,
    /// X-Content-Type-Options header value
    pub content_type_options: String,
    /// Referrer-Policy header value
    pub referrer_policy: String,
    /// Permissions-Policy header value
    pub permissions_policy: String,
    /// Strict-Transport-Security header value (for HTTPS)
    pub hsts: Option<String>,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::development()
    }
}

impl SecurityConfig {
    /// Pick the policy for a deployment environment
    #[must_use]
    pub fn for_environment(environment: Environment) -> Self {
        if environment.is_production() {
            Self::production()
        } else {
            Self::development()
        }
    }

    /// Development policy: no HSTS, plain HTTP on localhost
    #[must_use]
    pub fn development() -> Self {
        Self {
            csp: BASE_CSP.to_owned(),
            frame_options: "DENY".to_owned(),
            content_type_options: "nosniff".to_owned(),
            referrer_policy: "strict-origin-when-cross-origin".to_owned(),
            permissions_policy: "geolocation=(), microphone=(), camera=(), payment=()".to_owned(),
            hsts: None,
        }
    }

    /// Production policy
    #[must_use]
    pub fn production() -> Self {
        Self {
            csp: format!("{BASE_CSP} upgrade-insecure-requests;"),
            hsts: Some("max-age=31536000; includeSubDomains".to_owned()),
            ..Self::development()
        }
    }

    /// Header pairs to add to each response
    #[must_use]
    pub fn to_headers(&self) -> Vec<(HeaderName, String)> {
        let mut headers = vec![
            (http::header::CONTENT_SECURITY_POLICY, self.csp.clone()),
            (http::header::X_FRAME_OPTIONS, self.frame_options.clone()),
            (
                http::header::X_CONTENT_TYPE_OPTIONS,
                self.content_type_options.clone(),
            ),
            (http::header::REFERRER_POLICY, self.referrer_policy.clone()),
            (
                HeaderName::from_static("permissions-policy"),
                self.permissions_policy.clone(),
            ),
        ];
        if let Some(hsts) = &self.hsts {
            headers.push((http::header::STRICT_TRANSPORT_SECURITY, hsts.clone()));
        }
        headers
    }
}

/// Add the configured security headers to a response
pub async fn apply_security_headers(
    State(config): State<Arc<SecurityConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    for (name, value) in config.to_headers() {
        match HeaderValue::from_str(&value) {
            Ok(value) => {
                headers.insert(name, value);
            }
            Err(e) => {
                tracing::warn!(header = %name, error = %e, "Skipping invalid security header");
            }
        }
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsts_only_in_production() {
        assert!(SecurityConfig::for_environment(Environment::Development)
            .hsts
            .is_none());
        let production = SecurityConfig::for_environment(Environment::Production);
        assert!(production
            .to_headers()
            .iter()
            .any(|(name, _)| name == http::header::STRICT_TRANSPORT_SECURITY));
    }

    #[test]
    fn test_production_csp_extends_development_policy() {
        let development = SecurityConfig::development().csp;
        let production = SecurityConfig::production().csp;
        assert!(development.ends_with("form-action 'self';"));
        assert!(development.contains("'unsafe-inline'; img-src"));
        assert_eq!(production, format!("{development} upgrade-insecure-requests;"));
    }

        #[test]
    fn test_frames_denied() {
        let headers = SecurityConfig::default().to_headers();
        assert!(headers
            .iter()
            .any(|(name, value)| name == http::header::X_FRAME_OPTIONS && value == "DENY"));
    }
}
