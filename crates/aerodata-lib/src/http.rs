//! Single-shot request execution against the Data API.
//!
//! An upstream 4xx/5xx is a normal [`UpstreamResponse`] that callers hand
//! to the classifier; only a transport-level fault (DNS, connection
//! refused, timeout) surfaces as [`crate::Error::Transport`]. No retries,
//! no buffering beyond reading the full body.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::Serialize;

use crate::error::Result;

/// Status and body of one upstream call.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Shared HTTP client for all outbound calls.
pub(crate) fn build_client() -> Result<Client> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(user_agent())
        .build()?)
}

fn user_agent() -> String {
    format!("aerodata-lib/{}", env!("CARGO_PKG_VERSION"))
}

/// Execute one call and read the full body.
pub(crate) async fn execute<B: Serialize + ?Sized>(
    client: &Client,
    method: Method,
    url: &str,
    auth_header: &str,
    body: Option<&B>,
) -> Result<UpstreamResponse> {
    let mut request = client
        .request(method, url)
        .header(ACCEPT, "application/json")
        .header(AUTHORIZATION, auth_header);

    if let Some(body) = body {
        request = request.header(CONTENT_TYPE, "application/json").json(body);
    }

    let response = request.send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;

    Ok(UpstreamResponse { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_covers_the_2xx_range_only() {
        for status in [200u16, 201, 204, 299] {
            assert!(UpstreamResponse { status, body: String::new() }.is_success());
        }
        for status in [199u16, 301, 400, 404, 409, 500] {
            assert!(!UpstreamResponse { status, body: String::new() }.is_success());
        }
    }

    #[test]
    fn user_agent_carries_the_crate_version() {
        assert!(user_agent().starts_with("aerodata-lib/"));
    }
}
