//! # Mock Clients
//!
//! [`MockClient<T>`] hands out a real [`ResourceClient<T>`] whose channel is drained by
//! a scripted responder instead of a `ResourceActor`. Tests queue the replies they
//! want (`return_ok` / `return_err`) and the responder answers requests in order.
//!
//! Two ways to test code that talks to a resource actor:
//!
//! - **Scripted replies** ([`MockClient`]): error injection is a one-liner, nothing
//!   is stored. Good for controllers and hooks that only care about the outcome.
//! - **Raw receiver** ([`create_mock_client`] plus the `expect_*` helpers): the test
//!   receives each request itself and can assert on the payload before replying.
//!
//! For state-dependent behavior, spawn a real `ResourceActor` instead.
//!
//! ```rust
//! use resource_framework::mock::MockClient;
//! use resource_framework::{CatalogEntity, FieldMapper, FrameworkError, Record, Scope};
//!
//! #[derive(Clone, Debug)]
//! struct Venue { record: Record<u32>, city: String }
//! #[derive(Debug)]
//! struct VenueFields { city: String }
//! #[derive(Debug, thiserror::Error)]
//! #[error("venue error")]
//! struct VenueError;
//! impl From<VenueError> for FrameworkError {
//!     fn from(e: VenueError) -> Self { FrameworkError::EntityError(Box::new(e)) }
//! }
//! impl FieldMapper for Venue {
//!     type Payload = VenueFields;
//!     fn map_fields(&mut self, p: VenueFields) { self.city = p.city; }
//! }
//! impl CatalogEntity for Venue {
//!     type Id = u32;
//!     type Context = ();
//!     type Error = VenueError;
//!     const KIND: &'static str = "Venue";
//!     fn blank(record: Record<u32>, _: &Scope) -> Self { Self { record, city: String::new() } }
//!     fn record(&self) -> &Record<u32> { &self.record }
//!     fn record_mut(&mut self) -> &mut Record<u32> { &mut self.record }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Venue>::new();
//!     mock.expect_get(4).return_err(FrameworkError::not_found("Venue", 4));
//!
//!     let err = mock.client().get(4).await.unwrap_err();
//!     assert_eq!(err.to_string(), "Venue 4 not found.");
//!     mock.verify();
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::{CatalogEntity, Deletion};
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::pagination::Page;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

/// One scripted reply, matched against the next incoming request.
enum Expectation<T: CatalogEntity> {
    Create(Result<T::Id, FrameworkError>),
    Get {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    List(Result<Page<T>, FrameworkError>),
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<Deletion, FrameworkError>,
    },
    Referencing {
        parent: u32,
        response: Result<u64, FrameworkError>,
    },
}

impl<T: CatalogEntity> Expectation<T> {
    fn describe(&self) -> String {
        match self {
            Self::Create(_) => "create".to_string(),
            Self::Get { id, .. } => format!("get({id})"),
            Self::List(_) => "list".to_string(),
            Self::Update { id, .. } => format!("update({id})"),
            Self::Delete { id, .. } => format!("delete({id})"),
            Self::Referencing { parent, .. } => format!("referencing({parent})"),
        }
    }
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A client with scripted responses, answered in FIFO order.
///
/// A request that doesn't match the next expectation (wrong kind or wrong id) panics
/// the responder task; the caller then sees `ActorDropped`.
pub struct MockClient<T: CatalogEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: CatalogEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CatalogEntity> MockClient<T> {
    /// Creates a mock with no expectations. Must be called inside a tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queued = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queued.lock().unwrap().pop_front();
                Self::answer(request, next);
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    fn answer(request: ResourceRequest<T>, expectation: Option<Expectation<T>>) {
        match (request, expectation) {
            (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create(response))) => {
                let _ = respond_to.send(response);
            }
            (ResourceRequest::Get { id, respond_to, .. }, Some(Expectation::Get { id: want, response }))
                if id == want =>
            {
                let _ = respond_to.send(response);
            }
            (ResourceRequest::List { respond_to, .. }, Some(Expectation::List(response))) => {
                let _ = respond_to.send(response);
            }
            (
                ResourceRequest::Update { id, respond_to, .. },
                Some(Expectation::Update { id: want, response }),
            ) if id == want => {
                let _ = respond_to.send(response);
            }
            (
                ResourceRequest::Delete { id, respond_to, .. },
                Some(Expectation::Delete { id: want, response }),
            ) if id == want => {
                let _ = respond_to.send(response);
            }
            (
                ResourceRequest::Referencing {
                    parent, respond_to, ..
                },
                Some(Expectation::Referencing {
                    parent: want,
                    response,
                }),
            ) if parent == want => {
                let _ = respond_to.send(response);
            }
            (_, Some(other)) => panic!(
                "{} mock: request does not match expected {}",
                T::KIND,
                other.describe()
            ),
            (_, None) => panic!("{} mock: unexpected request", T::KIND),
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(Expectation::Create)
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Page<T>> {
        self.builder(Expectation::List)
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, Deletion> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    pub fn expect_referencing(&mut self, parent: u32) -> ExpectationBuilder<T, u64> {
        self.builder(move |response| Expectation::Referencing { parent, response })
    }

    fn builder<R>(
        &self,
        wrap: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            wrap: Box::new(wrap),
            expectations: self.expectations.clone(),
        }
    }

    /// Panics unless every queued expectation has been consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap();
        if !remaining.is_empty() {
            panic!(
                "{} mock: {} expectation(s) not met, next is {}",
                T::KIND,
                remaining.len(),
                remaining.front().map(Expectation::describe).unwrap_or_default()
            );
        }
    }
}

/// Completes an expectation with the reply it should produce.
pub struct ExpectationBuilder<T: CatalogEntity, R> {
    wrap: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
    expectations: Expectations<T>,
}

impl<T: CatalogEntity, R> ExpectationBuilder<T, R> {
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.wrap)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

/// Creates a client and the receiver its requests land on.
///
/// Use this when the test needs to look at what was sent (the mapped payload, the
/// scope) before deciding the reply; see the `expect_*` helpers below.
pub fn create_mock_client<T: CatalogEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next message, if it is a Create request.
pub async fn expect_create<T: CatalogEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Payload,
    crate::entity::Scope,
    oneshot::Sender<Result<T::Id, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create {
            payload,
            scope,
            respond_to,
        }) => Some((payload, scope, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a Get request.
pub async fn expect_get<T: CatalogEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to, .. }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message, if it is an Update request.
pub async fn expect_update<T: CatalogEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Payload, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            payload,
            respond_to,
            ..
        }) => Some((id, payload, respond_to)),
        _ => None,
    }
}
