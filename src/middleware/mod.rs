// ABOUTME: HTTP middleware for request tracing and cookie-session authentication
// ABOUTME: Provides request ID generation, span creation, page context and access guards

pub mod auth;
pub mod tracing;

// Session context and access guards
pub use auth::{
    authenticate_session, require_login, require_staff, session_context_middleware, PageContext,
};

// Request tracing
pub use tracing::{create_request_span, record_response, RequestIdGenerator, REQUEST_ID_HEADER};
