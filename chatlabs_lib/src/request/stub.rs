//! Only for tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use serde_json::Value;
use crate::error::Error;
use crate::request::client::Client;

/// Client for tests. Replays a scripted sequence of request/response exchanges.
pub struct StubClient {
    expected_headers: Vec<(String, String)>,
    exchanges: RefCell<VecDeque<(Value, Value)>>,
}

impl StubClient {

    /// Create client. Each exchange is a pair of (expected payload, response body).
    pub fn new(expected_headers: Vec<(String, String)>,
        exchanges: Vec<(Value, Value)>) -> Self
    {
        StubClient {
            expected_headers,
            exchanges: RefCell::new(exchanges.into()),
        }
    }
}

impl Client for StubClient {

    fn make_json_request(&self, _url: &str, payload: Value, headers: &[(&str, &str)]) -> Result<Value, Error> {
        for (expected, actual) in headers.iter().zip(self.expected_headers.iter()) {
            assert_eq!(expected.0, actual.0, "headers keys");
            assert_eq!(expected.1, actual.1, "headers values");
        }

        let (expected_payload, response_body) = self.exchanges.borrow_mut()
            .pop_front()
            .expect("unexpected extra LLM call");

        assert_eq!(payload, expected_payload);

        Ok(response_body)
    }
}
