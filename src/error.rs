use std::fmt;

/// Central error types for the cat photos app
#[derive(Debug)]
pub enum AppError {
    /// Transport failure (DNS, TLS, timeout, ...)
    Network(String),
    /// Response body could not be decoded
    Json(String),
    /// Server answered with a non-success status
    Server(String),
    /// Configuration file could not be read or parsed
    Config(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Json(msg) => write!(f, "JSON error: {}", msg),
            AppError::Server(msg) => write!(f, "Server error: {}", msg),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Conversions from other error types
impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e.to_string())
    }
}

impl From<toml::de::Error> for AppError {
    fn from(e: toml::de::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

/// User-friendly error messages, used in log output next to the detail
impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Network(_) | AppError::Server(_) => {
                "Could not reach the photo service.".to_string()
            }
            AppError::Json(_) => "The photo service sent an unexpected answer.".to_string(),
            AppError::Config(msg) => format!("Invalid configuration: {}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = AppError::Server("status 503".to_string());
        assert_eq!(err.to_string(), "Server error: status 503");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<Vec<u32>>("nope").unwrap_err();
        let err: AppError = json_err.into();
        assert!(matches!(err, AppError::Json(_)));
        assert_eq!(
            err.user_message(),
            "The photo service sent an unexpected answer."
        );
    }
}
