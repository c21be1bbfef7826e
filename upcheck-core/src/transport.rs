//! HTTP transport capability.
//!
//! The checker talks to the network through the [`HttpTransport`] trait so
//! that the status logic can be exercised with a scripted transport in tests.
//! The production implementation is [`ReqwestTransport`].

use std::error::Error as _;
use std::time::{Duration, Instant};

use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use tracing::debug;
use url::Url;

use crate::error::{Result, UpcheckError};

/// Redirect hop limit, matching reqwest's own default policy.
const MAX_REDIRECTS: usize = 10;

const USER_AGENT: &str = concat!("upcheck/", env!("CARGO_PKG_VERSION"));

/// The final response of a GET, together with the redirect hops that led to it.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code of the final (non-redirect) response.
    pub status: u16,
    /// URL that produced the final response.
    pub final_url: Url,
    /// URLs that answered with a 3xx, in traversal order. Empty if the first
    /// request already produced the final response.
    pub redirect_hops: Vec<Url>,
}

/// A capability for issuing a single GET request with redirect tracking.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    /// Issue a GET against `url`, following redirects, with `timeout` as the
    /// bound on the whole exchange.
    async fn get(&self, url: &Url, timeout: Duration) -> Result<TransportResponse>;
}

/// One request/response round trip, as much of it as the hop loop needs.
struct Hop {
    status: u16,
    location: Option<String>,
}

/// Issues a single round trip. The hop loop is written against this seam so
/// its bound behaviors can be driven by a scripted responder.
trait Exchange {
    async fn send(&self, url: &Url, timeout: Duration) -> Result<Hop>;
}

/// Walk redirects starting at `url` until a final response, the hop limit,
/// or the deadline. One deadline covers every hop, so `timeout` is an upper
/// bound on the whole operation regardless of chain length.
async fn follow_hops<E: Exchange>(
    exchange: &E,
    url: &Url,
    timeout: Duration,
) -> Result<TransportResponse> {
    let deadline = Instant::now() + timeout;
    let mut current = url.clone();
    let mut hops: Vec<Url> = Vec::new();

    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Err(UpcheckError::Timeout(timeout));
        }

        let hop = match exchange.send(&current, remaining).await {
            // A hop timing out and the deadline expiring are the same
            // failure; report the caller's bound, not the residual budget.
            Err(UpcheckError::Timeout(_)) => return Err(UpcheckError::Timeout(timeout)),
            other => other?,
        };

        match hop.location {
            Some(target) if is_redirect(hop.status) => {
                if hops.len() >= MAX_REDIRECTS {
                    return Err(UpcheckError::TooManyRedirects(MAX_REDIRECTS));
                }
                let next = redirect_target(&current, &target)?;
                debug!(from = %current, to = %next, status = hop.status, "following redirect");
                hops.push(current);
                current = next;
            }
            // A 3xx without a usable Location is the final response.
            _ => {
                return Ok(TransportResponse {
                    status: hop.status,
                    final_url: current,
                    redirect_hops: hops,
                });
            }
        }
    }
}

fn is_redirect(status: u16) -> bool {
    (300..400).contains(&status)
}

/// Resolve a Location header value against the URL that sent it.
fn redirect_target(current: &Url, location: &str) -> Result<Url> {
    current
        .join(location)
        .map_err(|e| UpcheckError::InvalidUrl(format!("redirect target {:?}: {}", location, e)))
}

/// Production transport backed by reqwest.
///
/// Automatic redirect following is disabled and hops are walked manually so
/// the traversed chain can be reported (reqwest does not expose response
/// history). Each invocation builds a fresh client; callers needing
/// connection reuse can hold the transport across checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwestTransport;

impl ReqwestTransport {
    pub fn new() -> Self {
        Self
    }
}

impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &Url, timeout: Duration) -> Result<TransportResponse> {
        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| UpcheckError::Transport(describe(&e)))?;

        follow_hops(&ReqwestExchange { client }, url, timeout).await
    }
}

struct ReqwestExchange {
    client: reqwest::Client,
}

impl Exchange for ReqwestExchange {
    async fn send(&self, url: &Url, timeout: Duration) -> Result<Hop> {
        let response = self
            .client
            .get(url.clone())
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify(e, timeout))?;

        Ok(Hop {
            status: response.status().as_u16(),
            location: response
                .headers()
                .get(LOCATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned),
        })
    }
}

fn classify(error: reqwest::Error, timeout: Duration) -> UpcheckError {
    if error.is_timeout() {
        UpcheckError::Timeout(timeout)
    } else {
        UpcheckError::Transport(describe(&error))
    }
}

/// Flatten an error and its source chain into one human-readable line.
/// reqwest's top-level Display often hides the interesting cause (DNS
/// failure, connection refused) behind a generic "error sending request".
fn describe(error: &reqwest::Error) -> String {
    let mut detail = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        detail.push_str(": ");
        detail.push_str(&cause.to_string());
        source = cause.source();
    }
    detail
}
