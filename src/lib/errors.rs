use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    /// The API answered but rejected the request at the application level,
    /// e.g. wrong credentials or a failed OTP check.
    Provider(String),
    Parse(String),
    Serialization(String),
}

impl AppError {
    /// True for failures where no usable response was obtained. The auth flow
    /// surfaces a generic message for these instead of a provider message.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AppError::Network(_)
                | AppError::Timeout(_)
                | AppError::Parse(_)
                | AppError::Serialization(_)
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Provider(message) => write!(formatter, "{message}"),
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn transport_classification() {
        assert!(AppError::Network("offline".to_string()).is_transport());
        assert!(AppError::Timeout("slow".to_string()).is_transport());
        assert!(!AppError::Provider("wrong password".to_string()).is_transport());
        assert!(!AppError::Http {
            status: 401,
            message: "unauthorized".to_string()
        }
        .is_transport());
    }

    #[test]
    fn provider_errors_display_bare_message() {
        let error = AppError::Provider("Invalid OTP".to_string());
        assert_eq!(error.to_string(), "Invalid OTP");
    }
}
