use http::StatusCode;
use jiff::Zoned;

use crate::{ErrorInfo, Fault, HttpError, format_date};

/// Map a fault raised while serving `url` to a status and response body
///
/// Pure: the same fault, URL and time always give the same result.
pub fn map_fault(fault: &Fault, url: &str, now: &Zoned) -> (StatusCode, ErrorInfo) {
    let info = ErrorInfo::new(fault.error_type(), fault.client_detail(), url, format_date(now));
    (fault.status_code(), info)
}

/// Map a fault against the system clock and log it
///
/// Business and request faults are logged as warnings; unclassified faults
/// are logged as errors with the full error chain.
pub fn handle(fault: &Fault, url: &str) -> (StatusCode, ErrorInfo) {
    let (status, info) = map_fault(fault, url, &Zoned::now());

    match fault {
        Fault::Unclassified(error) => {
            tracing::error!(
                status = status.as_u16(),
                code = %info.code,
                url = %info.url,
                date = %info.date,
                error = ?error,
                "server error"
            );
        }
        Fault::Business(_) | Fault::Request(_) => {
            let origin = if matches!(fault, Fault::Business(_)) { "business" } else { "request" };
            tracing::warn!(
                status = status.as_u16(),
                kind = fault.kind(),
                code = %info.code,
                error_message = %info.message,
                detail = info.detail.as_deref().unwrap_or_default(),
                url = %info.url,
                date = %info.date,
                "{origin} exception"
            );
        }
    }

    (status, info)
}
