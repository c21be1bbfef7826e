use std::time::Duration;

use tracing::{debug, instrument};
use url::Url;

use super::types::CheckResult;
use crate::normalize::normalize_url;
use crate::transport::{HttpTransport, ReqwestTransport};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Checker for website availability.
///
/// Generic over the transport so tests can substitute a scripted one; the
/// default is the reqwest-backed production transport. Holds no mutable
/// state, so concurrent checks through one checker are independent.
#[derive(Debug, Clone)]
pub struct StatusChecker<T = ReqwestTransport> {
    transport: T,
    timeout: Duration,
}

impl StatusChecker<ReqwestTransport> {
    /// Create a new StatusChecker with default settings.
    pub fn new() -> Self {
        Self::with_transport(ReqwestTransport::new())
    }
}

impl Default for StatusChecker<ReqwestTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HttpTransport> StatusChecker<T> {
    /// Create a checker over a specific transport.
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the timeout for the whole check, redirect hops included.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check whether a website is reachable.
    ///
    /// Exactly one GET attempt is made, no retries. This never fails at the
    /// API boundary: transport failures (DNS, connection, TLS, timeout, a
    /// malformed URL) come back as a result carrying `error_detail`, and a
    /// non-200 status is a normal result, not an error.
    ///
    /// Callers are expected to reject empty or whitespace-only input before
    /// invoking this.
    #[instrument(skip(self), fields(input = %raw_input))]
    pub async fn check(&self, raw_input: &str) -> CheckResult {
        let target = normalize_url(raw_input);
        debug!("checking {}", target);

        let url = match Url::parse(&target) {
            Ok(url) => url,
            Err(e) => {
                return CheckResult::transport_failure(format!("invalid URL {:?}: {}", target, e));
            }
        };

        match self.transport.get(&url, self.timeout).await {
            Ok(response) => {
                let redirect_chain = if response.redirect_hops.is_empty() {
                    Vec::new()
                } else {
                    let mut chain: Vec<String> = response
                        .redirect_hops
                        .iter()
                        .map(Url::to_string)
                        .collect();
                    chain.push(response.final_url.to_string());
                    chain
                };
                debug!(
                    status = response.status,
                    hops = response.redirect_hops.len(),
                    "response received"
                );
                CheckResult::responded(response.status, redirect_chain)
            }
            Err(e) => {
                debug!("transport failure: {}", e);
                CheckResult::transport_failure(e.to_string())
            }
        }
    }
}
