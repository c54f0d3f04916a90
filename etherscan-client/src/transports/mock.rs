use super::{Transport, TransportError};
use async_trait::async_trait;
use serde::Serialize;
use std::{
    borrow::Borrow,
    collections::{HashMap, VecDeque},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};
use url::Url;

/// Helper response type for `MockTransport`, allowing transport failures to be provided.
#[derive(Clone, Debug)]
pub enum MockResponse {
    /// Raw response body handed back to the client
    Body(String),

    /// Transport failure with the given message
    Error(String),
}

#[derive(Clone, Debug, Default)]
/// Mock transport used in test environments.
///
/// Clones share the same queues, so a test can keep one handle for assertions while the
/// [`Client`](crate::Client) owns another.
pub struct MockTransport {
    requests: Arc<Mutex<VecDeque<Url>>>,
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
}

#[async_trait]
impl Transport for MockTransport {
    /// Pushes the `url` to the back of the `requests` queue,
    /// pops the response from the front of the `responses` queue
    async fn get(&self, url: Url) -> Result<String, TransportError> {
        self.requests().push_back(url);
        let element = self.responses().pop_front().ok_or(TransportError::EmptyResponses)?;
        match element {
            MockResponse::Body(body) => Ok(body),
            MockResponse::Error(err) => Err(TransportError::Mock(err)),
        }
    }
}

impl MockTransport {
    /// Instantiates a mock transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes the data and pushes it to the responses
    pub fn push<T: Serialize, K: Borrow<T>>(&self, data: K) -> Result<(), TransportError> {
        let body = serde_json::to_string(data.borrow())?;
        self.push_response(MockResponse::Body(body));
        Ok(())
    }

    /// Pushes the raw body or error to the responses
    pub fn push_response(&self, response: MockResponse) {
        self.responses().push_back(response);
    }

    /// Checks that the oldest outstanding request targeted `module`/`action` and carried every
    /// given query parameter, then returns its url.
    #[track_caller]
    pub fn assert_request(
        &self,
        module: &str,
        action: &str,
        params: &[(&str, &str)],
    ) -> Result<Url, TransportError> {
        let url = self.requests().pop_front().ok_or(TransportError::EmptyRequests)?;
        let query: HashMap<String, String> = url.query_pairs().into_owned().collect();
        assert_eq!(query.get("module").map(String::as_str), Some(module), "module of {url}");
        assert_eq!(query.get("action").map(String::as_str), Some(action), "action of {url}");
        for (key, value) in params {
            assert_eq!(query.get(*key).map(String::as_str), Some(*value), "`{key}` of {url}");
        }
        Ok(url)
    }

    /// All requests issued so far that have not been consumed by `assert_request`
    pub fn pending_requests(&self) -> Vec<Url> {
        self.requests().iter().cloned().collect()
    }

    /// Returns `true` if no request reached the transport since the last assertion
    pub fn is_idle(&self) -> bool {
        self.requests().is_empty()
    }

    fn requests(&self) -> MutexGuard<'_, VecDeque<Url>> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn responses(&self) -> MutexGuard<'_, VecDeque<MockResponse>> {
        self.responses.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
