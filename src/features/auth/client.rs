//! Client wrappers for the auth API endpoints. These helpers centralize the
//! request shapes and keep flow and route code free of raw HTTP plumbing.
//! Application-level rejections surface as `AppError::Provider` so callers
//! can tell them apart from transport failures.

use crate::{
    app_lib::{
        AppError, get_optional_json_with_credentials, post_empty_with_credentials, post_json,
        post_json_with_credentials, put_json,
    },
    features::auth::types::{
        ApiStatus, RegisterRequest, ResetPasswordRequest, SendOtpRequest, SignInKind,
        SignInRequest, UserSession, VerifyOtpRequest, VerifyOtpResponse,
    },
};

/// Dispatches a one-time code for password reset or signup verification.
pub async fn send_otp(request: &SendOtpRequest) -> Result<(), AppError> {
    let status: ApiStatus = post_json("/api/send-otp", request).await?;
    into_result(status)
}

/// Verifies a one-time code. The endpoint reports failure both through HTTP
/// status and through the `success` flag, so both are checked.
pub async fn verify_otp(request: &VerifyOtpRequest) -> Result<(), AppError> {
    let response: VerifyOtpResponse = post_json("/api/verify-otp", request).await?;
    if response.success {
        Ok(())
    } else {
        Err(AppError::Provider(
            response
                .error
                .unwrap_or_else(|| "OTP verification failed".to_string()),
        ))
    }
}

/// Stores a new password after OTP verification.
pub async fn reset_password(request: &ResetPasswordRequest) -> Result<(), AppError> {
    let status: ApiStatus = put_json("/api/reset-password", request).await?;
    into_result(status)
}

/// Registers a new account; the server dispatches a verification OTP.
pub async fn register(request: &RegisterRequest) -> Result<(), AppError> {
    let status: ApiStatus = post_json("/api/register", request).await?;
    into_result(status)
}

/// Delegates credential sign-in to the identity provider. The response only
/// carries an optional error; the session itself arrives as a cookie.
pub async fn sign_in(kind: SignInKind, email: &str, password: &str) -> Result<(), AppError> {
    let request = SignInRequest {
        provider: kind,
        email: email.to_string(),
        password: password.to_string(),
    };
    let status: ApiStatus = post_json_with_credentials("/api/auth/sign-in", &request).await?;
    into_result(status)
}

/// Fetches the current session using cookie-based auth.
/// Returns `None` when the session is missing or expired.
pub async fn fetch_session() -> Result<Option<UserSession>, AppError> {
    get_optional_json_with_credentials("/api/auth/session").await
}

/// Clears the current session on the server.
pub async fn sign_out() -> Result<(), AppError> {
    post_empty_with_credentials("/api/auth/sign-out").await
}

/// Hands the browser to the social login provider; the provider redirects
/// back with a session cookie. This is a navigation, not an API call.
#[cfg(target_arch = "wasm32")]
pub fn sign_in_redirect(provider: &str) {
    let url = crate::app_lib::api::build_url(&format!("/api/auth/redirect/{provider}"));
    if let Some(window) = web_sys::window() {
        let _ = window.location().assign(&url);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn sign_in_redirect(_provider: &str) {}

fn into_result(status: ApiStatus) -> Result<(), AppError> {
    match status.error {
        Some(message) => Err(AppError::Provider(message)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::into_result;
    use crate::app_lib::AppError;
    use crate::features::auth::types::ApiStatus;

    #[test]
    fn into_result_maps_body_errors_to_provider_rejections() {
        assert!(into_result(ApiStatus { error: None }).is_ok());
        assert_eq!(
            into_result(ApiStatus {
                error: Some("Invalid credentials".to_string())
            }),
            Err(AppError::Provider("Invalid credentials".to_string()))
        );
    }
}
