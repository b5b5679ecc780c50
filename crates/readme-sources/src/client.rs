//! Shared HTTP client construction

use crate::error::Result;
use std::time::Duration;

/// User agent sent with every outbound request.
pub const USER_AGENT: &str = concat!("readme-sync/", env!("CARGO_PKG_VERSION"));

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the shared HTTP client used by all fetchers.
///
/// One client, one user agent, one timeout. A hung endpoint must not
/// hang the updater forever.
pub fn build_client() -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    Ok(client)
}
