//! Core library for upcheck: check whether a website is reachable.
//!
//! One check is one GET against the normalized URL with redirect tracking;
//! the outcome is a [`CheckResult`] that is always produced, never an error.

pub mod error;
pub mod normalize;
pub mod output;
pub mod status;
pub mod transport;

pub use error::{Result, UpcheckError};
pub use normalize::normalize_url;
pub use status::{CheckResult, StatusChecker};
pub use transport::{HttpTransport, ReqwestTransport, TransportResponse};

pub use output::{get_formatter, OutputFormat, OutputFormatter};
