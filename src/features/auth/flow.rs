//! Multi-step authentication flow controller. One tagged state value drives
//! the auth screens: credentials entry, the lockout panel, forgot-password,
//! OTP verification, password reset, and the success panel. Transitions are
//! the only way the state changes, so impossible combinations (blocked and
//! verifying at once) cannot be represented. Login submissions are gated by
//! the rate limiter before any network call; locally invalid input never
//! reaches the network and never counts as an attempt.

use crate::app_lib::{AppError, storage};
use crate::features::auth::{
    client,
    rate_limit::{Clock, LOCKOUT_WINDOW_MS, RateLimiter, SystemClock},
    types::{ResetPasswordRequest, SendOtpRequest, SignInKind},
    validate,
};
use leptos::{prelude::*, task::spawn_local};

/// Delay before the success panel redirects to the dashboard.
pub const SUCCESS_REDIRECT_DELAY_MS: u32 = 1_500;

const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// The active step of the authentication flow. Exactly one is active at a
/// time; field errors live inside the step they belong to.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthFlowState {
    Credentials {
        email: String,
        error: Option<String>,
    },
    Blocked {
        email: String,
        blocked_until: u64,
    },
    Forgot {
        error: Option<String>,
    },
    OtpVerify {
        email: String,
    },
    ResetPassword {
        email: String,
        password_error: Option<String>,
        confirm_error: Option<String>,
    },
    Success,
}

impl AuthFlowState {
    /// Fresh credentials entry with no residue from earlier steps.
    pub fn initial() -> Self {
        AuthFlowState::Credentials {
            email: String::new(),
            error: None,
        }
    }
}

/// Sequences the auth screens and owns the rate limiter. Cheap to copy into
/// event handlers; all fields are reactive handles.
#[derive(Clone, Copy)]
pub struct AuthFlow {
    pub state: RwSignal<AuthFlowState>,
    /// Re-entrancy guard: while a provider call is outstanding, further
    /// submits are ignored so attempts are never double-counted.
    pub pending: RwSignal<bool>,
    /// Flow-scoped error for steps whose state carries no error field.
    pub flow_error: RwSignal<Option<String>>,
    /// Transient success notice (code dispatched, password reset).
    pub notice: RwSignal<Option<String>>,
    limiter: StoredValue<RateLimiter>,
}

impl Default for AuthFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthFlow {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AuthFlowState::initial()),
            pending: RwSignal::new(false),
            flow_error: RwSignal::new(None),
            notice: RwSignal::new(None),
            limiter: StoredValue::new(RateLimiter::new()),
        }
    }

    /// Reconciles the typed identity against the durable lockout mirror, so a
    /// reload during a lockout shows the countdown instead of a fresh form.
    /// Stale cache entries were already evicted by the read.
    pub fn email_changed(&self, email: &str) {
        if !matches!(
            self.state.get_untracked(),
            AuthFlowState::Credentials { .. }
        ) {
            return;
        }
        let identity = validate::normalize_email(email);
        if identity.is_empty() {
            return;
        }
        if let Some(deadline) = storage::load_blocked_until(&identity, SystemClock.now_ms()) {
            self.state.set(AuthFlowState::Blocked {
                email: identity,
                blocked_until: deadline,
            });
        }
    }

    /// Submits a credential login. Local validation failures stay on the
    /// credentials step with a field error and never count as attempts; an
    /// inadmissible identity moves straight to the lockout panel without a
    /// network call.
    pub fn submit_login(&self, email: &str, password: &str, remember: bool) {
        if self.pending.get_untracked() {
            return;
        }

        let identity = validate::normalize_email(email);
        if let Err(message) = validate::validate_email(&identity) {
            self.state.set(AuthFlowState::Credentials {
                email: identity,
                error: Some(message),
            });
            return;
        }
        if let Err(message) = validate::validate_password(password) {
            self.state.set(AuthFlowState::Credentials {
                email: identity,
                error: Some(message),
            });
            return;
        }

        if let Some(deadline) = self.gate(&identity) {
            self.enter_blocked(identity, deadline);
            return;
        }

        self.pending.set(true);
        self.notice.set(None);
        let flow = *self;
        let password = password.to_string();
        spawn_local(async move {
            let result = client::sign_in(SignInKind::Credentials, &identity, &password).await;
            flow.pending.set(false);
            flow.finish_login(identity, remember, result);
        });
    }

    pub fn click_forgot(&self) {
        self.notice.set(None);
        self.flow_error.set(None);
        self.state.set(AuthFlowState::Forgot { error: None });
    }

    pub fn back_to_login(&self) {
        self.flow_error.set(None);
        self.state.set(AuthFlowState::initial());
    }

    /// Dispatches a one-time code for password reset.
    pub fn submit_forgot(&self, email: &str) {
        if self.pending.get_untracked() {
            return;
        }

        let identity = validate::normalize_email(email);
        if let Err(message) = validate::validate_email(&identity) {
            self.state.set(AuthFlowState::Forgot {
                error: Some(message),
            });
            return;
        }

        self.pending.set(true);
        self.notice.set(None);
        let flow = *self;
        spawn_local(async move {
            let request = SendOtpRequest {
                email: identity.clone(),
            };
            let result = client::send_otp(&request).await;
            flow.pending.set(false);
            flow.finish_forgot(identity, result);
        });
    }

    /// Returns to the forgot step so a fresh code can be dispatched.
    pub fn resend_otp(&self) {
        if let AuthFlowState::OtpVerify { .. } = self.state.get_untracked() {
            self.notice.set(None);
            self.flow_error.set(None);
            self.state.set(AuthFlowState::Forgot { error: None });
        }
    }

    /// The dispatched code checked out; move on to choosing a new password.
    pub fn otp_verified(&self) {
        if let AuthFlowState::OtpVerify { email } = self.state.get_untracked() {
            self.flow_error.set(None);
            self.notice.set(None);
            self.state.set(AuthFlowState::ResetPassword {
                email,
                password_error: None,
                confirm_error: None,
            });
        }
    }

    /// Submits the new password. Field validation failures stay on the reset
    /// step with per-field errors and no network call.
    pub fn submit_reset(&self, password: &str, confirm: &str) {
        if self.pending.get_untracked() {
            return;
        }
        let AuthFlowState::ResetPassword { email, .. } = self.state.get_untracked() else {
            return;
        };

        let password_error = validate::validate_password(password).err();
        let confirm_error = (password != confirm).then(|| "Passwords do not match".to_string());
        if password_error.is_some() || confirm_error.is_some() {
            self.state.set(AuthFlowState::ResetPassword {
                email,
                password_error,
                confirm_error,
            });
            return;
        }

        self.pending.set(true);
        self.flow_error.set(None);
        let flow = *self;
        let request = ResetPasswordRequest {
            email,
            new_password: password.trim().to_string(),
        };
        spawn_local(async move {
            let result = client::reset_password(&request).await;
            flow.pending.set(false);
            flow.finish_reset(result);
        });
    }

    /// The lockout countdown reached zero; clear the mirror and return to
    /// credentials entry for the same identity.
    pub fn unlocked(&self) {
        if let AuthFlowState::Blocked { email, .. } = self.state.get_untracked() {
            storage::store_blocked_until(&email, None);
            self.state.set(AuthFlowState::Credentials { email, error: None });
        }
    }

    /// Admissibility check. `Some(deadline)` means the identity is locked out.
    fn gate(&self, identity: &str) -> Option<u64> {
        let mut deadline = None;
        self.limiter.update_value(|limiter| {
            if !limiter.can_attempt(identity) {
                deadline = Some(
                    limiter
                        .blocked_until(identity)
                        .unwrap_or_else(|| SystemClock.now_ms() + LOCKOUT_WINDOW_MS),
                );
            }
        });
        deadline
    }

    /// Terminal handling for a login submission; runs exactly once per
    /// submission, on success and on every failure shape alike.
    fn finish_login(&self, identity: String, remember: bool, result: Result<(), AppError>) {
        match result {
            Ok(()) => {
                self.limiter
                    .update_value(|limiter| limiter.record_attempt(&identity, true));
                storage::store_blocked_until(&identity, None);
                if remember {
                    storage::set_remembered_email(Some(&identity));
                } else {
                    storage::set_remembered_email(None);
                }
                self.state.set(AuthFlowState::Success);
            }
            Err(error) => {
                self.limiter
                    .update_value(|limiter| limiter.record_attempt(&identity, false));
                if let Some(deadline) = self.gate(&identity) {
                    self.enter_blocked(identity, deadline);
                } else {
                    self.state.set(AuthFlowState::Credentials {
                        email: identity,
                        error: Some(step_error_message(
                            &error,
                            "Login failed. Please check your email and password.",
                        )),
                    });
                }
            }
        }
    }

    fn finish_forgot(&self, email: String, result: Result<(), AppError>) {
        match result {
            Ok(()) => {
                self.notice
                    .set(Some("We sent a one-time code to your email.".to_string()));
                self.state.set(AuthFlowState::OtpVerify { email });
            }
            Err(error) => {
                self.state.set(AuthFlowState::Forgot {
                    error: Some(step_error_message(&error, "Failed to send the code")),
                });
            }
        }
    }

    fn finish_reset(&self, result: Result<(), AppError>) {
        match result {
            Ok(()) => {
                self.notice.set(Some(
                    "Password reset successfully. Sign in with your new password.".to_string(),
                ));
                self.state.set(AuthFlowState::initial());
            }
            Err(error) => {
                self.flow_error
                    .set(Some(step_error_message(&error, "Failed to reset password")));
            }
        }
    }

    /// Mirrors the authoritative deadline into localStorage and shows the
    /// lockout panel.
    fn enter_blocked(&self, email: String, blocked_until: u64) {
        storage::store_blocked_until(&email, Some(blocked_until));
        self.state.set(AuthFlowState::Blocked {
            email,
            blocked_until,
        });
    }
}

/// Provider rejections surface their own message; transport failures get a
/// generic one so network internals never leak into the UI.
pub(crate) fn step_error_message(error: &AppError, fallback: &str) -> String {
    if error.is_transport() {
        return GENERIC_FAILURE.to_string();
    }
    match error {
        AppError::Provider(message) | AppError::Http { message, .. } if !message.is_empty() => {
            message.clone()
        }
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::rate_limit::MAX_ATTEMPTS;

    fn provider_failure() -> Result<(), AppError> {
        Err(AppError::Provider("Invalid credentials".to_string()))
    }

    #[test]
    fn starts_at_credentials_entry() {
        let flow = AuthFlow::new();
        assert_eq!(flow.state.get_untracked(), AuthFlowState::initial());
        assert!(!flow.pending.get_untracked());
    }

    #[test]
    fn invalid_email_stays_local_and_counts_nothing() {
        let flow = AuthFlow::new();
        for _ in 0..10 {
            flow.submit_login("not-an-email", "secret123", false);
        }

        match flow.state.get_untracked() {
            AuthFlowState::Credentials { error, .. } => {
                assert_eq!(error.as_deref(), Some("Invalid email address"));
            }
            other => panic!("expected credentials step, got {other:?}"),
        }
        // Ten locally rejected submissions never reach the limiter.
        assert!(!flow.pending.get_untracked());
    }

    #[test]
    fn short_password_is_rejected_locally() {
        let flow = AuthFlow::new();
        flow.submit_login("a@x.com", "12345", false);

        match flow.state.get_untracked() {
            AuthFlowState::Credentials { email, error } => {
                assert_eq!(email, "a@x.com");
                assert_eq!(
                    error.as_deref(),
                    Some("Password must be at least 6 characters")
                );
            }
            other => panic!("expected credentials step, got {other:?}"),
        }
    }

    #[test]
    fn provider_failure_keeps_credentials_step_with_message() {
        let flow = AuthFlow::new();
        flow.finish_login("a@x.com".to_string(), false, provider_failure());

        assert_eq!(
            flow.state.get_untracked(),
            AuthFlowState::Credentials {
                email: "a@x.com".to_string(),
                error: Some("Invalid credentials".to_string()),
            }
        );
    }

    #[test]
    fn fifth_failure_enters_blocked() {
        let flow = AuthFlow::new();
        for _ in 0..MAX_ATTEMPTS {
            flow.finish_login("b@x.com".to_string(), false, provider_failure());
        }

        match flow.state.get_untracked() {
            AuthFlowState::Blocked { email, .. } => assert_eq!(email, "b@x.com"),
            other => panic!("expected blocked step, got {other:?}"),
        }
    }

    #[test]
    fn success_after_failures_reaches_success_state() {
        let flow = AuthFlow::new();
        for _ in 0..4 {
            flow.finish_login("a@x.com".to_string(), false, provider_failure());
        }
        flow.finish_login("a@x.com".to_string(), false, Ok(()));

        assert_eq!(flow.state.get_untracked(), AuthFlowState::Success);

        // The record was deleted, so a later failure counts from one again.
        flow.state.set(AuthFlowState::initial());
        flow.finish_login("a@x.com".to_string(), false, provider_failure());
        assert!(matches!(
            flow.state.get_untracked(),
            AuthFlowState::Credentials { .. }
        ));
    }

    #[test]
    fn transport_failure_counts_but_shows_generic_message() {
        let flow = AuthFlow::new();
        flow.finish_login(
            "a@x.com".to_string(),
            false,
            Err(AppError::Network("connection refused".to_string())),
        );

        match flow.state.get_untracked() {
            AuthFlowState::Credentials { error, .. } => {
                assert_eq!(error.as_deref(), Some(GENERIC_FAILURE));
            }
            other => panic!("expected credentials step, got {other:?}"),
        }
    }

    #[test]
    fn pending_guard_ignores_reentrant_submits() {
        let flow = AuthFlow::new();
        flow.pending.set(true);
        flow.submit_login("a@x.com", "secret123", false);

        assert_eq!(flow.state.get_untracked(), AuthFlowState::initial());
    }

    #[test]
    fn forgot_flow_walks_back_to_fresh_credentials() {
        let flow = AuthFlow::new();

        flow.click_forgot();
        assert_eq!(
            flow.state.get_untracked(),
            AuthFlowState::Forgot { error: None }
        );

        flow.finish_forgot("a@x.com".to_string(), Ok(()));
        assert_eq!(
            flow.state.get_untracked(),
            AuthFlowState::OtpVerify {
                email: "a@x.com".to_string()
            }
        );

        flow.otp_verified();
        assert_eq!(
            flow.state.get_untracked(),
            AuthFlowState::ResetPassword {
                email: "a@x.com".to_string(),
                password_error: None,
                confirm_error: None,
            }
        );

        flow.finish_reset(Ok(()));
        assert_eq!(flow.state.get_untracked(), AuthFlowState::initial());
    }

    #[test]
    fn invalid_forgot_email_stays_on_forgot_step() {
        let flow = AuthFlow::new();
        flow.click_forgot();
        flow.submit_forgot("nope");

        assert_eq!(
            flow.state.get_untracked(),
            AuthFlowState::Forgot {
                error: Some("Invalid email address".to_string())
            }
        );
    }

    #[test]
    fn resend_returns_to_forgot() {
        let flow = AuthFlow::new();
        flow.finish_forgot("a@x.com".to_string(), Ok(()));
        flow.resend_otp();

        assert_eq!(
            flow.state.get_untracked(),
            AuthFlowState::Forgot { error: None }
        );
    }

    #[test]
    fn reset_validation_reports_field_errors_without_submitting() {
        let flow = AuthFlow::new();
        flow.finish_forgot("a@x.com".to_string(), Ok(()));
        flow.otp_verified();

        flow.submit_reset("short", "different");

        assert_eq!(
            flow.state.get_untracked(),
            AuthFlowState::ResetPassword {
                email: "a@x.com".to_string(),
                password_error: Some("Password must be at least 6 characters".to_string()),
                confirm_error: Some("Passwords do not match".to_string()),
            }
        );
        assert!(!flow.pending.get_untracked());
    }

    #[test]
    fn reset_provider_failure_surfaces_flow_error() {
        let flow = AuthFlow::new();
        flow.finish_forgot("a@x.com".to_string(), Ok(()));
        flow.otp_verified();

        flow.finish_reset(Err(AppError::Provider("OTP expired".to_string())));

        assert!(matches!(
            flow.state.get_untracked(),
            AuthFlowState::ResetPassword { .. }
        ));
        assert_eq!(
            flow.flow_error.get_untracked().as_deref(),
            Some("OTP expired")
        );
    }

    #[test]
    fn unlock_returns_to_credentials_for_the_same_identity() {
        let flow = AuthFlow::new();
        for _ in 0..MAX_ATTEMPTS {
            flow.finish_login("b@x.com".to_string(), false, provider_failure());
        }
        flow.unlocked();

        assert_eq!(
            flow.state.get_untracked(),
            AuthFlowState::Credentials {
                email: "b@x.com".to_string(),
                error: None,
            }
        );
    }

    #[test]
    fn step_error_message_classification() {
        assert_eq!(
            step_error_message(&AppError::Timeout("slow".to_string()), "fallback"),
            GENERIC_FAILURE
        );
        assert_eq!(
            step_error_message(
                &AppError::Http {
                    status: 500,
                    message: "server busy".to_string()
                },
                "fallback"
            ),
            "server busy"
        );
        assert_eq!(
            step_error_message(&AppError::Config("bad".to_string()), "fallback"),
            "fallback"
        );
    }
}
