use super::{RemoteError, RemoteService, ResultMap};
use crate::actions::Operation;
use crate::params::ValidatedParams;
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory service for testing and development.
/// Answers from canned results and records every call it receives.
#[derive(Debug, Default)]
pub struct InMemoryService {
    results: HashMap<Operation, ResultMap>,
    fault: Option<String>,
    calls: RefCell<Vec<(Operation, ValidatedParams)>>,
}

impl InMemoryService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_result(mut self, op: Operation, result: ResultMap) -> Self {
        self.results.insert(op, result);
        self
    }

    /// Make every call fail with a fault carrying `message`.
    pub fn with_fault(mut self, message: impl Into<String>) -> Self {
        self.fault = Some(message.into());
        self
    }

    pub fn calls(&self) -> Vec<(Operation, ValidatedParams)> {
        self.calls.borrow().clone()
    }
}

impl RemoteService for InMemoryService {
    fn call(&self, op: Operation, params: &ValidatedParams) -> Result<ResultMap, RemoteError> {
        self.calls.borrow_mut().push((op, params.clone()));

        if let Some(message) = &self.fault {
            return Err(RemoteError::Fault {
                code: "Server".to_string(),
                message: message.clone(),
            });
        }

        self.results
            .get(&op)
            .cloned()
            .ok_or_else(|| RemoteError::UnknownOperation(op.method_name().to_string()))
    }
}
