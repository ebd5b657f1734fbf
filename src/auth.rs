// ABOUTME: Password hashing and JWT session tokens for browser logins
// ABOUTME: AuthManager issues and validates HS256 tokens; bcrypt runs on the blocking pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

//! # Authentication and Session Management
//!
//! A successful login yields a signed token that the browser keeps in an
//! `HttpOnly` cookie. The token only names the user; every request reloads the
//! user row, so deactivating an account ends its sessions immediately.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::constants::SERVICE_NAME;
use crate::errors::{AppError, AppResult};
use crate::models::User;

/// Session validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JwtValidationError {
    /// Token has expired
    TokenExpired {
        /// When the token expired
        expired_at: DateTime<Utc>,
    },
    /// Token signature or claims are invalid
    TokenInvalid {
        /// Reason for invalidity
        reason: String,
    },
    /// Token is malformed (not proper `JWT` format)
    TokenMalformed {
        /// Details about malformation
        details: String,
    },
}

impl fmt::Display for JwtValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TokenExpired { expired_at } => write!(
                f,
                "Session expired at {}",
                expired_at.format("%Y-%m-%d %H:%M:%S UTC")
            ),
            Self::TokenInvalid { reason } => write!(f, "Session token is invalid: {reason}"),
            Self::TokenMalformed { details } => write!(f, "Session token is malformed: {details}"),
        }
    }
}

impl std::error::Error for JwtValidationError {}

/// `JWT` claims for a browser session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User `ID`
    pub sub: String,
    /// Username at login time
    pub username: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
    /// Audience
    pub aud: String,
}

impl Claims {
    /// The user this session belongs to
    ///
    /// # Errors
    ///
    /// Returns an error if `sub` is not a UUID
    pub fn user_id(&self) -> Result<Uuid, JwtValidationError> {
        Uuid::parse_str(&self.sub).map_err(|e| JwtValidationError::TokenMalformed {
            details: format!("subject is not a user id: {e}"),
        })
    }
}

/// Authentication manager for session tokens
#[derive(Clone)]
pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry_hours: i64,
}

impl AuthManager {
    /// Create a manager signing with the configured secret
    #[must_use]
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(&config.session_secret),
            decoding_key: DecodingKey::from_secret(&config.session_secret),
            token_expiry_hours: config.session_expiry_hours,
        }
    }

    /// Session lifetime in seconds, used for the cookie `Max-Age`
    #[must_use]
    pub const fn session_max_age_secs(&self) -> i64 {
        self.token_expiry_hours * 3600
    }

    /// Issue a session token for a user
    ///
    /// # Errors
    ///
    /// Returns an error if `JWT` encoding fails
    pub fn generate_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.token_expiry_hours)).timestamp(),
            aud: SERVICE_NAME.to_owned(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to sign session token: {e}")))
    }

    /// Validate a session token
    ///
    /// # Errors
    ///
    /// Returns a [`JwtValidationError`] if the token is expired, tampered
    /// with, or not a token at all
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtValidationError> {
        let claims = self.decode_token_claims(token)?;
        Self::validate_claims_expiry(&claims)?;
        Ok(claims)
    }

    /// Verify signature and audience, leaving expiry to the caller
    fn decode_token_claims(&self, token: &str) -> Result<Claims, JwtValidationError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_audience(&[SERVICE_NAME]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| Self::convert_jwt_error(&e))
    }

    fn validate_claims_expiry(claims: &Claims) -> Result<(), JwtValidationError> {
        let now = Utc::now();
        if now.timestamp() >= claims.exp {
            let expired_at = DateTime::from_timestamp(claims.exp, 0).unwrap_or(now);
            tracing::debug!(user_id = %claims.sub, %expired_at, "Session token expired");
            return Err(JwtValidationError::TokenExpired { expired_at });
        }
        Ok(())
    }

    fn convert_jwt_error(e: &jsonwebtoken::errors::Error) -> JwtValidationError {
        match e.kind() {
            ErrorKind::InvalidSignature
            | ErrorKind::InvalidAudience
            | ErrorKind::InvalidAlgorithm => JwtValidationError::TokenInvalid {
                reason: e.to_string(),
            },
            _ => JwtValidationError::TokenMalformed {
                details: e.to_string(),
            },
        }
    }
}

/// Hash a password with bcrypt on the blocking pool
///
/// # Errors
///
/// Returns an error if hashing fails or the task is cancelled
pub async fn hash_password(password: &str, cost: u32) -> AppResult<String> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
        .map_err(|e| AppError::internal(format!("Password hashing error: {e}")))
}

/// Check a password against a stored bcrypt hash on the blocking pool
///
/// # Errors
///
/// Returns an error if the task is cancelled; a malformed hash counts as a mismatch
pub async fn verify_password(password: &str, password_hash: &str) -> AppResult<bool> {
    let password = password.to_owned();
    let password_hash = password_hash.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash).unwrap_or(false))
        .await
        .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))
}
