//! In-memory API double for tests: queued answers per endpoint, recorded calls.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::{Api, ApiError, Endpoint};

#[derive(Default)]
pub struct MockApi {
    responses: RefCell<HashMap<Endpoint, VecDeque<Result<Value, ApiError>>>>,
    calls: RefCell<Vec<(Endpoint, Value)>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, endpoint: Endpoint, value: Value) {
        self.responses.borrow_mut().entry(endpoint).or_default().push_back(Ok(value));
    }

    pub fn fail(&self, endpoint: Endpoint, error: ApiError) {
        self.responses.borrow_mut().entry(endpoint).or_default().push_back(Err(error));
    }

    pub fn calls(&self) -> Vec<(Endpoint, Value)> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, endpoint: Endpoint) -> usize {
        self.calls.borrow().iter().filter(|(e, _)| *e == endpoint).count()
    }
}

impl Api for MockApi {
    async fn call<A, R>(&self, endpoint: Endpoint, args: &A) -> Result<R, ApiError>
    where
        A: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let args = serde_json::to_value(args).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.calls.borrow_mut().push((endpoint, args));

        let next = self
            .responses
            .borrow_mut()
            .get_mut(&endpoint)
            .and_then(VecDeque::pop_front);
        match next {
            Some(Ok(value)) => Ok(serde_json::from_value(value)?),
            Some(Err(e)) => Err(e),
            None => Err(ApiError::Network(format!("no response queued for {}", endpoint))),
        }
    }
}
