//! HTTP GET request stub and its initiator
//!
//! A request owns the completion callback it was built with. No connection is
//! opened here; whoever eventually drives the request hands the outcome to
//! [`HttpGetRequest::complete`] or aborts with [`HttpGetRequest::cancel`].

use crate::callback::{self, CompletionCallback, RequestHandler};
use crate::types::{CallbackError, Result};
use std::fmt;

/// Lifecycle state of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    /// Built and holding its callback; nothing has been delivered
    Constructed,
}

/// A GET request that reports its outcome through a completion callback
pub struct HttpGetRequest {
    callback: Box<dyn CompletionCallback + Send>,
}

impl HttpGetRequest {
    /// Create a request owning the given callback
    ///
    /// Never fails and never invokes the callback.
    pub fn new(callback: Box<dyn CompletionCallback + Send>) -> Self {
        log::debug!("Constructed HTTP GET request");
        Self { callback }
    }

    /// Current lifecycle state
    pub fn state(&self) -> RequestState {
        RequestState::Constructed
    }

    /// Deliver the outcome to the callback
    ///
    /// Consumes the request, so a callback runs at most once. Any error the
    /// callback returns is handed back unchanged.
    pub fn complete(mut self, success: bool, result: impl Into<String>) -> Result<()> {
        let result = result.into();
        log::debug!("Completing request (success={})", success);
        self.callback.completion_handler(success, result)
    }

    /// Abort the request without delivering a value
    ///
    /// The callback's interruption hook receives [`CallbackError::Interrupted`]
    /// and whatever it returns is handed back. Consumes the request like
    /// [`complete`](Self::complete).
    pub fn cancel(mut self) -> Result<()> {
        log::warn!("Request cancelled before completion");
        self.callback.interrupted(CallbackError::Interrupted)
    }
}

impl fmt::Debug for HttpGetRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpGetRequest")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

/// Build a request whose callback forwards to `handler`
///
/// # Example
/// ```
/// use http_callback::new_request;
///
/// let request = new_request(|success: bool, result: String| -> http_callback::Result<()> {
///     println!("{} {}", success, result);
///     Ok(())
/// });
/// request.complete(true, "ok").unwrap();
/// ```
pub fn new_request<H>(handler: H) -> HttpGetRequest
where
    H: RequestHandler + Send + 'static,
{
    HttpGetRequest::new(callback::adapt(handler))
}
