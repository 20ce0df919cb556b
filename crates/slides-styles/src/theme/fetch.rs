//! Fetching theme documents over HTTP.

use std::io::Read;
use std::sync::Mutex;

use crate::error::ThemeError;

/// A fetched response: HTTP status plus the fully drained body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedTheme {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchedTheme {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstraction over the HTTP GET used for URL theme identifiers.
///
/// Implementations return the body for any status the server answers with.
/// Only transport failures and body read failures are errors.
pub trait ThemeFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedTheme, ThemeError>;
}

/// Blocking HTTP fetcher backed by `ureq`.
///
/// No timeout is configured beyond `ureq`'s defaults; pass a tuned agent to
/// [`HttpFetcher::with_agent`] to bound the request.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
        }
    }

    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedTheme, ThemeError> {
        let response = match self.agent.get(url).call() {
            Ok(response) => response,
            // ureq reports 4xx/5xx as errors but still hands over the response.
            Err(ureq::Error::Status(_, response)) => response,
            Err(err) => return Err(ThemeError::fetch(url, err.to_string())),
        };

        let status = response.status();
        let mut body = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|e| ThemeError::fetch(url, format!("reading body: {}", e)))?;

        Ok(FetchedTheme { status, body })
    }
}

// === Mock implementation for testing ===

/// Fetcher with a canned answer that records every requested URL.
#[derive(Debug)]
pub struct MockFetcher {
    answer: Result<FetchedTheme, String>,
    requests: Mutex<Vec<String>>,
}

impl MockFetcher {
    /// Answers every request with `200 OK` and `body`.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::with_status(200, body)
    }

    /// Answers every request with `status` and `body`.
    pub fn with_status(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            answer: Ok(FetchedTheme {
                status,
                body: body.into(),
            }),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fails every request as a transport error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            answer: Err(message.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl ThemeFetcher for MockFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedTheme, ThemeError> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(url.to_string());
        self.answer
            .clone()
            .map_err(|message| ThemeError::fetch(url, message))
    }
}
