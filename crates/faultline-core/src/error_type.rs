use std::fmt;

/// Fixed `(code, message)` pair identifying a class of failure
///
/// Applications declare their own as constants next to the two common ones:
///
/// ```
/// use faultline_core::ErrorType;
///
/// const USER_NOT_FOUND: ErrorType = ErrorType::new("U01", "user not found");
///
/// assert_eq!(USER_NOT_FOUND.code(), "U01");
/// assert_eq!(ErrorType::REQUEST_ERROR.message(), "request error");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorType {
    code: &'static str,
    message: &'static str,
}

impl ErrorType {
    /// Malformed request detected by the HTTP layer
    pub const REQUEST_ERROR: Self = Self::new("000001", "request error");

    /// Unclassified server-side failure
    pub const SERVER_ERROR: Self = Self::new("000002", "server error");

    pub const fn new(code: &'static str, message: &'static str) -> Self {
        Self { code, message }
    }

    /// Machine-readable code (e.g. `000001`)
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// Human-readable message
    pub const fn message(&self) -> &'static str {
        self.message
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}
