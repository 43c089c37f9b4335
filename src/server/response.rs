use crate::dispatcher::{DispatchError, Dispatcher};
use http::Method;
use serde_json::json;
use tracing::debug;

/// Per-request response buffer handlers write into.
///
/// Plays the role of the host's response channel: the handler sets a status and
/// appends body text, the boundary reads both out once dispatch returns. One
/// writer per request; never reused.
#[derive(Debug)]
pub struct ResponseWriter {
    status: u16,
    body: String,
}

impl Default for ResponseWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseWriter {
    /// Create a writer with status 200 and an empty body.
    #[must_use]
    pub fn new() -> Self {
        Self {
            status: 200,
            body: String::new(),
        }
    }

    /// Override the response status.
    pub fn set_status(&mut self, status: u16) {
        self.status = status;
    }

    /// Append text to the response body.
    pub fn write(&mut self, chunk: &str) {
        self.body.push_str(chunk);
    }

    /// The current response status.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The body written so far.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Consume the writer, yielding (status, body).
    #[must_use]
    pub fn into_parts(self) -> (u16, String) {
        (self.status, self.body)
    }
}

/// Canonical reason phrase for the status codes this crate emits.
#[must_use]
pub fn status_reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "OK",
    }
}

fn error_status(err: &DispatchError) -> u16 {
    match err {
        DispatchError::RouteNotFound { .. } => 404,
        // Everything else is a configuration or handler failure, not a
        // client error.
        _ => 500,
    }
}

/// Execute a request and map the outcome to an HTTP (status, body) pair.
///
/// On success the handler's own status and body are returned. On failure the
/// body is a JSON object embedding the error's human-readable message - for a
/// missing route that message carries the requested path.
#[must_use]
pub fn respond(dispatcher: &Dispatcher, path: &str, method: &Method) -> (u16, String) {
    let mut res = ResponseWriter::new();
    match dispatcher.execute(path, method, &mut res) {
        Ok(()) => res.into_parts(),
        Err(err) => {
            let status = error_status(&err);
            debug!(path = %path, method = %method, status, error = %err, "Dispatch failed");
            (status, json!({ "error": err.to_string() }).to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reason() {
        assert_eq!(status_reason(200), "OK");
        assert_eq!(status_reason(404), "Not Found");
        assert_eq!(status_reason(500), "Internal Server Error");
    }

    #[test]
    fn test_writer_accumulates_body() {
        let mut res = ResponseWriter::new();
        res.write("<h1>");
        res.write("Hi");
        res.write("</h1>");
        res.set_status(201);

        assert_eq!(res.status(), 201);
        assert_eq!(res.body(), "<h1>Hi</h1>");

        let (status, body) = res.into_parts();
        assert_eq!(status, 201);
        assert_eq!(body, "<h1>Hi</h1>");
    }

    #[test]
    fn test_error_status_mapping() {
        let not_found = DispatchError::RouteNotFound {
            path: "/missing".into(),
        };
        assert_eq!(error_status(&not_found), 404);

        let unknown = DispatchError::UnknownAction {
            handler: "X",
            action: "y".into(),
        };
        assert_eq!(error_status(&unknown), 500);
    }
}
