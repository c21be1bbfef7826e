//! Website status checking module
//!
//! Provides the single check-one-URL operation: normalize the input, issue
//! one GET, record the redirect chain, and classify the outcome.

mod client;
mod types;

pub use client::StatusChecker;
pub use types::CheckResult;
