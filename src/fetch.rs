//! HTTP transport for page fetching.
//!
//! Extractors depend on the [`Fetcher`] trait rather than on `reqwest`
//! directly, so the pagination logic can be exercised against in-memory pages.
//! [`HttpFetcher`] is the production implementation: one blocking GET per call,
//! a fixed timeout, no retries.

use std::time::Duration;

use tracing::{debug, instrument};

use crate::error::TransportError;
use crate::utils::truncate_for_log;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Fetch a URL and return its body as text.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<String, TransportError>;
}

/// HTTP client settings.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Blocking `reqwest` client with a fixed timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    #[instrument(level = "debug", skip(self))]
    fn fetch(&self, url: &str) -> Result<String, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(classify)?;
        let body = response
            .text()
            .map_err(|e| TransportError::Body(e.to_string()))?;
        debug!(
            bytes = body.len(),
            preview = %truncate_for_log(&body, 120),
            "Fetched page"
        );
        Ok(body)
    }
}

/// Map a `reqwest` error onto the transport taxonomy.
fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if let Some(status) = err.status() {
        TransportError::HttpStatus(status.as_u16())
    } else if err.is_connect() {
        TransportError::ConnectionFailed(err.to_string())
    } else {
        TransportError::Request(err.to_string())
    }
}


#[cfg(test)]
mod tests {
    use super::testing::StaticFetcher;
    use super::*;
    use std::net::TcpListener;
    use std::thread;
    use std::time::Instant;

    #[test]
    fn test_default_fetch_config() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("page_harvest/"));
    }

    #[test]
    fn test_http_fetcher_builds() {
        assert!(HttpFetcher::new(&FetchConfig::default()).is_ok());
    }

    #[test]
    fn test_static_fetcher_as_trait_object() {
        let fetcher = StaticFetcher::new()
            .page("https://a.test/", "<html></html>")
            .failing("https://a.test/down", 503);
        let by_ref: &dyn Fetcher = &fetcher;

        assert_eq!(by_ref.fetch("https://a.test/").unwrap(), "<html></html>");
        assert!(matches!(
            by_ref.fetch("https://a.test/down"),
            Err(TransportError::HttpStatus(503))
        ));
        assert!(matches!(
            by_ref.fetch("https://a.test/missing"),
            Err(TransportError::HttpStatus(404))
        ));
        assert_eq!(fetcher.requests().len(), 3);
    }

    #[test]
    fn test_http_fetcher_connection_refused() {
        // Bind to learn a free port, then close it so nothing is listening.
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let fetcher = HttpFetcher::new(&FetchConfig::default()).unwrap();
        let result = fetcher.fetch(&format!("http://127.0.0.1:{port}/"));
        assert!(
            matches!(result, Err(TransportError::ConnectionFailed(_))),
            "unexpected result: {result:?}"
        );
    }

    #[test]
    fn test_http_fetcher_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        // Accept the connection and never answer.
        let server = thread::spawn(move || {
            if let Ok((stream, _)) = listener.accept() {
                thread::sleep(Duration::from_secs(2));
                drop(stream);
            }
        });

        let config = FetchConfig {
            timeout: Duration::from_millis(300),
            ..FetchConfig::default()
        };
        let fetcher = HttpFetcher::new(&config).unwrap();
        let started = Instant::now();
        let result = fetcher.fetch(&format!("http://127.0.0.1:{port}/"));

        assert!(
            matches!(result, Err(TransportError::Timeout)),
            "unexpected result: {result:?}"
        );
        assert!(started.elapsed() < Duration::from_secs(2));
        server.join().unwrap();
    }
}
