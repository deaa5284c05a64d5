//! In-memory transport for tests.

use crate::{FetchError, Request, Response, Transport};
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Replays queued responses in order and records every request it sees.
///
/// Sending with an empty queue yields a `RequestError`, which is how tests
/// assert that no network call was made.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<Response, FetchError>>>,
    requests: RefCell<Vec<Request>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body.
    pub fn push_status(&self, status: u16, body: impl Into<Vec<u8>>) {
        self.replies
            .borrow_mut()
            .push_back(Ok(Response::with_status(status, body)));
    }

    /// Queue a JSON response.
    pub fn push_json(&self, status: u16, value: serde_json::Value) {
        self.push_status(status, value.to_string());
    }

    /// Queue a transport failure.
    pub fn push_error(&self, error: FetchError) {
        self.replies.borrow_mut().push_back(Err(error));
    }

    /// Requests sent so far.
    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: Request) -> Result<Response, FetchError> {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::RequestError("no scripted reply".to_string())))
    }
}
