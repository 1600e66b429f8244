//! Error taxonomy and mapper for uniform HTTP error responses
//!
//! Every failure a request can hit is a [`Fault`]: an intentional
//! [`BusinessError`], a [`RequestFault`] detected by the HTTP layer, or an
//! unclassified error. [`map_fault`] turns a fault plus the request URL into
//! an HTTP status and an [`ErrorInfo`] body; [`handle`] does the same against
//! the system clock and logs the outcome.

#![allow(clippy::must_use_candidate)]

mod business;
mod date;
mod error;
mod error_type;
mod fault;
mod info;
mod mapper;
mod request;

pub use business::{BusinessError, BusinessErrorKind};
pub use date::{DATE_PATTERN, format_date};
pub use error::HttpError;
pub use error_type::ErrorType;
pub use fault::Fault;
pub use info::ErrorInfo;
pub use mapper::{handle, map_fault};
pub use request::RequestFault;
