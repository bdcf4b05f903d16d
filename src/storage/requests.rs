//! Payment request log
//!
//! Append-only record of the payment requests sent this session.

use crate::models::PaymentRequest;

#[derive(Debug, Default)]
pub struct RequestLog {
    requests: Vec<PaymentRequest>,
}

impl RequestLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, request: PaymentRequest) {
        self.requests.push(request);
    }

    /// Requests in the order they were sent
    pub fn list(&self) -> &[PaymentRequest] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}
