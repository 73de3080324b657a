use std::fmt;

/// Request-scoped logger for resource projection.
///
/// `ProjectionLog` is borrowed from a [`ResourceRequest`](crate::ResourceRequest)
/// and cannot outlive it. Every event carries the request ID and the name of
/// the resource shape being produced, so failures in a collection can be
/// traced back to the request that triggered them.
///
/// Values are formatted by the caller; field values from records should not
/// be passed in, only keys and counts.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionLog<'a> {
    request_id: &'a str,
    shape: &'a str,
}

impl<'a> ProjectionLog<'a> {
    pub(crate) fn new(request_id: &'a str, shape: &'a str) -> Self {
        Self { request_id, shape }
    }

    /// Returns the request ID associated with this logger.
    pub fn request_id(&self) -> &str {
        self.request_id
    }

    /// Returns the name of the shape being projected.
    pub fn shape(&self) -> &str {
        self.shape
    }

    /// Logs an info-level message with request ID and shape.
    ///
    /// ```no_run
    /// # use field_projection::ProjectionLog;
    /// # fn example(log: &ProjectionLog) {
    /// log.info(format_args!("projected {} records", 12));
    /// # }
    /// ```
    pub fn info(&self, args: fmt::Arguments<'_>) {
        tracing::info!(request_id = %self.request_id, shape = %self.shape, "{}", args);
    }

    /// Logs a warning-level message with request ID and shape.
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        tracing::warn!(request_id = %self.request_id, shape = %self.shape, "{}", args);
    }

    /// Logs an error-level message with request ID and shape.
    pub fn error(&self, args: fmt::Arguments<'_>) {
        tracing::error!(request_id = %self.request_id, shape = %self.shape, "{}", args);
    }

    /// Logs a debug-level message with request ID and shape.
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        tracing::debug!(request_id = %self.request_id, shape = %self.shape, "{}", args);
    }
}
