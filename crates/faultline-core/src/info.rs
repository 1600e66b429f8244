use serde::{Deserialize, Serialize};

use crate::ErrorType;

/// Uniform JSON body returned for every handled error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Code from the error type
    pub code: String,
    /// Message from the error type
    pub message: String,
    /// Free-text detail; `null` when absent or withheld
    pub detail: Option<String>,
    /// URL of the request that failed, as received
    pub url: String,
    /// Time the error was handled, `yyyy-MM-dd HH:mm:ss.SSS`
    pub date: String,
}

impl ErrorInfo {
    pub fn new(error: ErrorType, detail: Option<&str>, url: &str, date: String) -> Self {
        Self {
            code: error.code().to_owned(),
            message: error.message().to_owned(),
            detail: detail.map(str::to_owned),
            url: url.to_owned(),
            date,
        }
    }
}
