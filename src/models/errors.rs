//! Centralized Error Handling Module
//!
//! Every failure carries a unique error code so it can be grepped in logs
//! and mapped to an HTTP status in one place.
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - STORE_xxx: Key-value store errors
//! - CFG_xxx: Configuration errors

use std::fmt;

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging/monitoring
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create AppError with source error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Unique error codes for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // ============================================
    // Store Errors
    // ============================================
    /// Store unreachable (refused, dropped, timed out)
    StoreUnavailable,
    /// Stored value is not an integer, or INCR/DECR would overflow
    StoreInvalidValue,
    /// Store answered with an unexpected error
    StoreError,

    // ============================================
    // Configuration Errors
    // ============================================
    /// Invalid configuration value
    ConfigInvalidValue,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::StoreInvalidValue => "STORE_INVALID_VALUE",
            Self::StoreError => "STORE_ERROR",
            Self::ConfigInvalidValue => "CFG_INVALID_VALUE",
        }
    }

    /// Get HTTP status code for API responses
    pub fn http_status(&self) -> u16 {
        match self {
            Self::StoreUnavailable => 503,
            _ => 500,
        }
    }

    /// Check if error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::StoreUnavailable)
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// Store unreachable
    pub fn store_unavailable(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::StoreUnavailable, msg)
    }

    /// Stored value is malformed
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::StoreInvalidValue, msg)
    }

    /// Invalid configuration value
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalidValue, msg)
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

// ============================================
// Conversion from common error types
// ============================================

impl From<redis::RedisError> for AppError {
    fn from(err: redis::RedisError) -> Self {
        if err.is_connection_refusal()
            || err.is_connection_dropped()
            || err.is_timeout()
            || err.is_io_error()
        {
            let msg = format!("Redis unreachable: {}", err);
            return Self::with_source(ErrorCode::StoreUnavailable, msg, err);
        }

        match err.kind() {
            redis::ErrorKind::TypeError | redis::ErrorKind::ResponseError => {
                let msg = format!("Redis rejected value: {}", err);
                Self::with_source(ErrorCode::StoreInvalidValue, msg, err)
            }
            redis::ErrorKind::InvalidClientConfig => {
                let msg = format!("Invalid Redis URL: {}", err);
                Self::with_source(ErrorCode::ConfigInvalidValue, msg, err)
            }
            _ => {
                let msg = format!("Redis error: {}", err);
                Self::with_source(ErrorCode::StoreError, msg, err)
            }
        }
    }
}
