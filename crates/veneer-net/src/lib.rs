//! Blocking shim over the async HTTP client.
//!
//! The client factory produces consistently configured [`reqwest::Client`]s
//! (User-Agent, timeouts, connection pool hygiene). [`fetch_blocking`]
//! collapses a single async request into a blocking call: it runs the
//! request to completion on a throwaway current-thread runtime and only
//! then returns to the caller. There is no scheduling, cancellation or
//! ordering guarantee beyond that.
//!
//! Do not call the blocking entry points from inside an async runtime;
//! they are meant for synchronous call sites that need a one-shot request.

#![warn(missing_docs)]

use std::time::Duration;

use bytes::Bytes;
use once_cell::sync::Lazy;
use reqwest::{Client, Request, StatusCode};
use thiserror::Error;
use tracing::debug;

/// User-Agent string for all HTTP requests.
pub const USER_AGENT: &str = concat!("veneer/", env!("CARGO_PKG_VERSION"));

/// Default timeout for requests (30 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection pool idle timeout, keeping DNS resolution reasonably fresh.
pub const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(60);

/// Error type for the blocking fetch shim.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The HTTP client failed; surfaced verbatim.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The bridging runtime could not be constructed.
    #[error("failed to build blocking runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Result of a blocking data fetch: whatever of the body, status and error
/// the request produced before finishing.
#[derive(Debug, Default)]
pub struct FetchResult {
    /// Response body, when one was received.
    pub data: Option<Bytes>,

    /// Response status, when the server answered at all.
    pub status: Option<StatusCode>,

    /// The error, if one occurred.
    pub error: Option<FetchError>,
}

impl FetchResult {
    /// Returns whether the request completed without an error.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Creates an HTTP client with the default timeout.
pub fn create_client() -> Result<Client, FetchError> {
    create_client_with_timeout(DEFAULT_TIMEOUT)
}

/// Creates an HTTP client with a custom timeout.
///
/// All clients carry the shared User-Agent, disable Nagle's algorithm and
/// recycle pooled connections after [`POOL_IDLE_TIMEOUT`].
pub fn create_client_with_timeout(timeout: Duration) -> Result<Client, FetchError> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .tcp_nodelay(true)
        .pool_idle_timeout(POOL_IDLE_TIMEOUT)
        .pool_max_idle_per_host(4)
        .build()?)
}

/// Shared client backing [`fetch_blocking_default`].
static SHARED_CLIENT: Lazy<Client> = Lazy::new(|| {
    create_client().expect("default HTTP client configuration must be valid")
});

/// Performs the request synchronously with the shared client.
pub fn fetch_blocking_default(request: Request) -> FetchResult {
    fetch_blocking(&SHARED_CLIENT, request)
}

/// Performs the request synchronously, blocking the calling thread until
/// the response (or error) has fully arrived.
pub fn fetch_blocking(client: &Client, request: Request) -> FetchResult {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(error) => {
            return FetchResult {
                error: Some(error.into()),
                ..FetchResult::default()
            }
        }
    };

    runtime.block_on(async {
        debug!(url = %request.url(), "blocking fetch");

        match client.execute(request).await {
            Ok(response) => {
                let status = response.status();
                match response.bytes().await {
                    Ok(data) => FetchResult {
                        data: Some(data),
                        status: Some(status),
                        error: None,
                    },
                    Err(error) => FetchResult {
                        data: None,
                        status: Some(status),
                        error: Some(error.into()),
                    },
                }
            }
            Err(error) => FetchResult {
                error: Some(error.into()),
                ..FetchResult::default()
            },
        }
    })
}
