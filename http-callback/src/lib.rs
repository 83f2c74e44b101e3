//! HTTP Callback Library
//!
//! Adapts caller-supplied completion handlers into the callback contract an
//! HTTP GET request stores.
//!
//! # Architecture
//!
//! - [`RequestHandler`]: the public functional shape, usually a closure
//! - [`CompletionCallback`]: the contract a request invokes
//! - [`CallbackAdapter`]: forwards one to the other without touching values
//! - [`HttpGetRequest`]: owns one adapted callback and runs it at most once
//! - [`Interruptible`]: a handler that also hears about cancellation
//!
//! The library does NOT:
//! - Open connections or perform any network I/O
//! - Parse responses
//! - Retry failed requests
//!
//! # Example Usage
//!
//! ```
//! use http_callback::{new_request, CallbackError};
//!
//! let request = new_request(|success: bool, result: String| -> http_callback::Result<()> {
//!     if result.is_empty() {
//!         return Err(CallbackError::format("empty body"));
//!     }
//!     println!("{} {}", success, result);
//!     Ok(())
//! });
//!
//! // Errors from the handler come back unchanged
//! assert!(request.complete(true, "").unwrap_err().is_format());
//! ```

// Public modules
pub mod callback;
pub mod request;
pub mod types;

// Re-export main types for convenience
pub use callback::{adapt, CallbackAdapter, CompletionCallback, Interruptible, RequestHandler};
pub use request::{new_request, HttpGetRequest, RequestState};
pub use types::{CallbackError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: a request can be built from a plain closure
        let request = new_request(|_: bool, _: String| -> Result<()> { Ok(()) });
        assert_eq!(request.state(), RequestState::Constructed);
    }
}
