//! Scripted JSON-RPC node for tests

use std::cell::RefCell;

use async_trait::async_trait;
use serde_json::Value;

use super::rpc::JsonRpc;
use crate::error::AppResult;

type Handler = Box<dyn Fn(&str, &Value) -> AppResult<Value>>;

/// Answers requests with a closure and records every call
pub(crate) struct MockNode {
    handler: Handler,
    calls: RefCell<Vec<(String, Value)>>,
}

impl MockNode {
    pub(crate) fn new<F>(handler: F) -> Self
    where
        F: Fn(&str, &Value) -> AppResult<Value> + 'static,
    {
        Self {
            handler: Box::new(handler),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<(String, Value)> {
        self.calls.borrow().clone()
    }

    pub(crate) fn methods(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(method, _)| method.clone()).collect()
    }
}

#[async_trait(?Send)]
impl JsonRpc for MockNode {
    async fn request(&self, method: &str, params: Value) -> AppResult<Value> {
        let result = (self.handler)(method, &params);
        self.calls.borrow_mut().push((method.to_string(), params));
        result
    }
}
