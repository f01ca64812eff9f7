//! Auth feature module: the login attempt governor, the multi-step flow
//! state machine, the OTP code assembler, and the API client around them.
//! The client never verifies credentials or generates codes itself; it
//! throttles submissions and sequences screens around the identity provider.
//!
//! Flow Overview: Login gates on the rate limiter, then delegates to the
//! provider. Forgot-password dispatches an OTP, verifies it, and stores a new
//! password. Signup registers and verifies the address with the same OTP
//! step. Five consecutive login failures lock an identity for two minutes.

pub(crate) mod client;
pub(crate) mod flow;
mod guards;
pub(crate) mod lockout;
pub(crate) mod otp;
pub(crate) mod rate_limit;
pub(crate) mod state;
pub(crate) mod types;
pub(crate) mod validate;

pub(crate) use guards::RequireAuth;
