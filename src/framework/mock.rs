//! # Mock Client
//!
//! `MockClient<T>` hands out a real [`ResourceClient<T>`] whose requests are
//! answered from a queue of expectations instead of a running actor. Use it to
//! test code that sits *around* a client (error mapping, HTTP handlers)
//! without depending on entity state.
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | **State** | none, canned answers | real store |
//! | **Error injection** | `return_err` | needs a reachable failure |
//! | **Use case** | client wrappers, handlers | entity rules, full flows |
//!
//! ```rust,ignore
//! let mut mock = MockClient::<Order>::new();
//! mock.expect_list().return_err(FrameworkError::ActorClosed);
//!
//! let client = OrderClient::new(mock.client());
//! assert!(client.list_orders().await.is_err());
//! mock.verify();
//! ```
//!
//! Expectations are consumed in order. A request that does not match the next
//! expectation (wrong operation or wrong id) panics the mock task, which the
//! caller observes as [`FrameworkError::ActorDropped`].

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// An expected request and the canned response for it.
enum Expectation<T: ActorEntity> {
    Create {
        response: Result<T, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::List { respond_to },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "update called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "delete called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn builder<R>(
        &self,
        wrap: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(wrap),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Create { response })
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    /// Expects an `update` operation for `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    /// Expects a `delete` operation for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Records the response for one expected request.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Queue<T>,
    wrap: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Answers the request with `value`.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Answers the request with `error`.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.wrap)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: u32,
        body: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("note error")]
    struct NoteError;

    #[async_trait]
    impl ActorEntity for Note {
        type Id = u32;
        type Create = String;
        type Update = String;
        type Context = ();
        type Error = NoteError;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn from_create_params(id: u32, body: String) -> Result<Self, Self::Error> {
            Ok(Self { id, body })
        }

        async fn on_update(&mut self, body: String, _ctx: &()) -> Result<(), Self::Error> {
            self.body = body;
            Ok(())
        }
    }

    fn note(id: u32, body: &str) -> Note {
        Note {
            id,
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_client_answers_in_order() {
        let mut mock = MockClient::<Note>::new();
        mock.expect_create().return_ok(note(1, "hello"));
        mock.expect_get(1).return_ok(Some(note(1, "hello")));
        mock.expect_list().return_ok(vec![note(1, "hello")]);

        let client = mock.client();
        assert_eq!(client.create("hello".into()).await.unwrap().id, 1);
        assert_eq!(client.get(1).await.unwrap(), Some(note(1, "hello")));
        assert_eq!(client.list().await.unwrap().len(), 1);

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_injects_errors() {
        let mut mock = MockClient::<Note>::new();
        mock.expect_delete(3).return_err(FrameworkError::NotFound("3".into()));

        let result = mock.client().delete(3).await;
        assert!(matches!(result, Err(FrameworkError::NotFound(id)) if id == "3"));
        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_mismatch_drops_response() {
        let mut mock = MockClient::<Note>::new();
        mock.expect_list().return_ok(vec![]);

        let result = mock.client().get(1).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_reports_unmet_expectations() {
        let mut mock = MockClient::<Note>::new();
        mock.expect_update(1).return_ok(note(1, "x"));
        mock.verify();
    }
}
