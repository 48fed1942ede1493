use futures::future::{self, FutureExt, LocalBoxFuture};
use parcattraction::client::HttpTransport;
use parcattraction::error::ApiError;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

// Mock transport standing in for the parc API in native tests.

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub url: String,
    pub body: Option<Value>,
}

#[derive(Default)]
struct State {
    replies: VecDeque<Result<Value, ApiError>>,
    calls: Vec<Call>,
}

/// Replies to each request with the next queued result and keeps a log of
/// what was asked.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Rc<RefCell<State>>,
}

impl MockTransport {
    pub fn reply(&self, reply: Result<Value, ApiError>) {
        self.state.borrow_mut().replies.push_back(reply);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn posts(&self) -> Vec<Call> {
        self.calls().into_iter().filter(|c| c.method == "POST").collect()
    }

    fn record(
        &self,
        method: &'static str,
        url: &str,
        body: Option<Value>,
    ) -> LocalBoxFuture<'static, Result<Value, ApiError>> {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call {
            method,
            url: url.to_string(),
            body,
        });
        let reply = state
            .replies
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport(format!("[MOCK] no reply queued for {}", url))));
        future::ready(reply).boxed_local()
    }
}

impl HttpTransport for MockTransport {
    fn get(&self, url: &str) -> LocalBoxFuture<'static, Result<Value, ApiError>> {
        self.record("GET", url, None)
    }

    fn post(&self, url: &str, body: Value) -> LocalBoxFuture<'static, Result<Value, ApiError>> {
        self.record("POST", url, Some(body))
    }

    fn delete(&self, url: &str) -> LocalBoxFuture<'static, Result<Value, ApiError>> {
        self.record("DELETE", url, None)
    }
}
