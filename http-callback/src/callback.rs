//! Completion callbacks and the adapter between them
//!
//! Two callback shapes exist:
//! - [`CompletionCallback`]: the trait a request stores and invokes
//! - [`RequestHandler`]: what callers hand in, usually a closure
//!
//! [`CallbackAdapter`] turns the second into the first by forwarding every
//! invocation verbatim.

use crate::types::{CallbackError, Result};

/// Callback contract held by a request
///
/// Invoked with a success flag and a result string. The result may be a
/// payload or an error message; its meaning is up to the request.
pub trait CompletionCallback {
    fn completion_handler(&mut self, success: bool, result: String) -> Result<()>;

    /// Told that the request will never complete
    ///
    /// Receives [`CallbackError::Interrupted`]. The default hands it back.
    fn interrupted(&mut self, error: CallbackError) -> Result<()> {
        Err(error)
    }
}

/// Caller-facing completion handler
///
/// Implemented for every `FnMut(bool, String) -> Result<()>`, so closures can
/// be passed directly.
pub trait RequestHandler {
    fn handle(&mut self, success: bool, result: String) -> Result<()>;

    /// Called instead of [`handle`](Self::handle) when the request is cancelled
    fn interrupted(&mut self, error: CallbackError) -> Result<()> {
        Err(error)
    }

    /// Attach a cancellation handler
    ///
    /// ```
    /// use http_callback::{new_request, CallbackError, RequestHandler};
    ///
    /// let handler = |_: bool, _: String| -> http_callback::Result<()> { Ok(()) };
    /// let request = new_request(handler.on_interrupt(|err: CallbackError| {
    ///     eprintln!("gave up: {}", err);
    ///     Err(err)
    /// }));
    /// assert!(request.cancel().unwrap_err().is_interrupted());
    /// ```
    fn on_interrupt<F>(self, on_interrupt: F) -> Interruptible<Self, F>
    where
        Self: Sized,
        F: FnMut(CallbackError) -> Result<()>,
    {
        Interruptible {
            handler: self,
            on_interrupt,
        }
    }
}

impl<F> RequestHandler for F
where
    F: FnMut(bool, String) -> Result<()>,
{
    fn handle(&mut self, success: bool, result: String) -> Result<()> {
        self(success, result)
    }
}

/// A handler paired with a cancellation closure, see [`RequestHandler::on_interrupt`]
pub struct Interruptible<H, F> {
    handler: H,
    on_interrupt: F,
}

impl<H, F> RequestHandler for Interruptible<H, F>
where
    H: RequestHandler,
    F: FnMut(CallbackError) -> Result<()>,
{
    fn handle(&mut self, success: bool, result: String) -> Result<()> {
        self.handler.handle(success, result)
    }

    fn interrupted(&mut self, error: CallbackError) -> Result<()> {
        (self.on_interrupt)(error)
    }
}

/// Forwards [`CompletionCallback`] invocations to a [`RequestHandler`]
///
/// Values are passed through untouched and errors are returned as-is.
pub struct CallbackAdapter<H> {
    handler: H,
}

impl<H: RequestHandler> CallbackAdapter<H> {
    /// Wrap a handler
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    /// Unwrap the original handler
    pub fn into_inner(self) -> H {
        self.handler
    }
}

impl<H: RequestHandler> CompletionCallback for CallbackAdapter<H> {
    fn completion_handler(&mut self, success: bool, result: String) -> Result<()> {
        log::trace!("Forwarding completion (success={}, {} bytes)", success, result.len());
        self.handler.handle(success, result)
    }

    fn interrupted(&mut self, error: CallbackError) -> Result<()> {
        log::trace!("Forwarding interruption");
        self.handler.interrupted(error)
    }
}

/// Adapt a handler into a boxed callback suitable for a request
pub fn adapt<H>(handler: H) -> Box<dyn CompletionCallback + Send>
where
    H: RequestHandler + Send + 'static,
{
    Box::new(CallbackAdapter::new(handler))
}
