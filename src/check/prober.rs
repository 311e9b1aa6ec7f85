//! HTTP prober
//!
//! Issues a single HEAD or GET request for a check and classifies the
//! outcome: a transport-level response (with the body text for GET
//! probes), a body-read failure, or a network error. The body is returned
//! as text rather than a parsed document because the HTML document type
//! is not `Send`; parsing happens inside the checking task, after the
//! last await point.

use reqwest::Client;
use std::time::Duration;

/// Request method selected for a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeMethod {
    /// Status-only check, no body needed
    Head,
    /// Body required for assertions or link harvesting
    Get,
}

impl ProbeMethod {
    /// Selects the method for a check: HEAD when no structural assertions
    /// are needed and no link harvesting is requested, otherwise GET.
    pub fn for_check(spec: &crate::check::CheckSpec) -> Self {
        if spec.needs_body() {
            Self::Get
        } else {
            Self::Head
        }
    }
}

/// Body portion of a probe response.
#[derive(Debug)]
pub enum Body {
    /// HEAD probe; nothing was read
    None,

    /// GET probe; body read cleanly
    Text(String),

    /// GET probe; the response arrived but its body could not be read
    ReadFailed(String),
}

/// Outcome of a single probe.
#[derive(Debug)]
pub enum ProbeResult {
    /// The server answered. Status evaluation happens in the caller, so a
    /// status mismatch always wins over a body-read failure.
    Response { status: u16, body: Body },

    /// The request never produced a response (connection error, timeout).
    NetworkError { error: String },
}

/// Builds the HTTP client shared by all probes.
///
/// The reference behavior has no timeout; a hung call would stall the
/// run's completion barrier indefinitely, so requests are bounded here.
/// Redirects follow the client's default limited policy.
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    let user_agent = format!("sitecheck/{}", env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Issues one HTTP request and classifies the outcome.
pub async fn probe(client: &Client, method: ProbeMethod, url: &str) -> ProbeResult {
    let request = match method {
        ProbeMethod::Head => client.head(url),
        ProbeMethod::Get => client.get(url),
    };

    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            return ProbeResult::NetworkError {
                error: e.to_string(),
            }
        }
    };

    let status = response.status().as_u16();

    let body = match method {
        ProbeMethod::Head => Body::None,
        ProbeMethod::Get => match response.text().await {
            Ok(text) => Body::Text(text),
            Err(e) => Body::ReadFailed(e.to_string()),
        },
    };

    ProbeResult::Response { status, body }
}
