//! Shared frontend utilities for API access, configuration, errors, and the
//! localStorage mirror.
//!
//! ## Core Authentication Flow
//!
//! 1. **Login:** Credential sign-in is gated client-side by the login rate
//!    limiter (five consecutive failures lock an identity for two minutes)
//!    before `/api/auth/sign-in` is ever called.
//! 2. **Password reset:** Forgot-password dispatches an OTP via
//!    `/api/send-otp`, verifies it via `/api/verify-otp`, then submits the new
//!    password via `/api/reset-password`.
//! 3. **Signup:** `/api/register` creates the account and triggers OTP
//!    dispatch; the same OTP verification step confirms the address.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. These utilities do not handle
//! secrets directly, but callers must still avoid logging sensitive data.

pub(crate) mod api;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod storage;
pub(crate) mod theme;

pub(crate) const GIT_SHA: &str = env!("STUDYFLOW_WEB_GIT_SHA");
pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

pub(crate) use api::{
    get_optional_json_with_credentials, post_empty_with_credentials, post_json,
    post_json_with_credentials, put_json,
};
pub(crate) use errors::AppError;
