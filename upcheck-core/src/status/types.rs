use serde::{Deserialize, Serialize};

/// Outcome of one status check.
///
/// Constructed fresh per invocation and immutable once returned. Exactly one
/// of `status_code` and `error_detail` is populated: a response was either
/// received (any status code, including errors) or the request failed at the
/// transport level before any response arrived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    /// True only when the final HTTP status code is exactly 200.
    pub reachable: bool,
    /// Status code of the final response, absent on transport failure.
    pub status_code: Option<u16>,
    /// URLs traversed via 3xx responses, in order, ending with the URL that
    /// produced the final response. Empty when no redirects occurred.
    pub redirect_chain: Vec<String>,
    /// Description of the transport failure (DNS, connection, TLS, timeout).
    /// Absent whenever a response was received.
    pub error_detail: Option<String>,
}

impl CheckResult {
    /// A response was received; reachability follows from the status code.
    pub(crate) fn responded(status_code: u16, redirect_chain: Vec<String>) -> Self {
        Self {
            reachable: status_code == 200,
            status_code: Some(status_code),
            redirect_chain,
            error_detail: None,
        }
    }

    /// The request failed before any response was obtained.
    pub(crate) fn transport_failure(detail: impl Into<String>) -> Self {
        Self {
            reachable: false,
            status_code: None,
            redirect_chain: Vec::new(),
            error_detail: Some(detail.into()),
        }
    }

    /// Whether the request was redirected at least once.
    pub fn was_redirected(&self) -> bool {
        !self.redirect_chain.is_empty()
    }
}
