//! Request lifecycle for itinerary generation
//!
//! The view model owns the single [`RequestState`] and is the only thing that
//! mutates it. Every network-origin error ends here and becomes one
//! user-facing message.

use crate::api::ItineraryApi;
use crate::models::{ItineraryResponse, TripRequest};
use crate::Result;
use tracing::{debug, info, warn};

/// State of the current itinerary request
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// Settled with an itinerary
    Success(ItineraryResponse),
    /// Settled with a message for the user
    Failure(String),
}

impl RequestState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        matches!(self, RequestState::Success(_) | RequestState::Failure(_))
    }

    #[must_use]
    pub fn itinerary(&self) -> Option<&ItineraryResponse> {
        match self {
            RequestState::Success(itinerary) => Some(itinerary),
            _ => None,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Failure(message) => Some(message),
            _ => None,
        }
    }
}

pub struct ItineraryViewModel<A: ItineraryApi> {
    api: A,
    state: RequestState,
}

impl<A: ItineraryApi> ItineraryViewModel<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: RequestState::Idle,
        }
    }

    #[must_use]
    pub fn state(&self) -> &RequestState {
        &self.state
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Enter `Loading`, dropping any previous itinerary or error
    pub fn begin(&mut self) {
        debug!("Request state -> Loading");
        self.state = RequestState::Loading;
    }

    /// Apply the outcome of the in-flight call
    pub fn settle(&mut self, outcome: Result<ItineraryResponse>) {
        self.state = match outcome {
            Ok(itinerary) => {
                info!(
                    "Itinerary for '{}' ready: total cost {:.2} of budget {:.2}",
                    itinerary.location, itinerary.total_cost, itinerary.budget
                );
                RequestState::Success(itinerary)
            }
            Err(err) => {
                warn!("Itinerary request failed: {}", err);
                RequestState::Failure(err.user_message())
            }
        };
    }

    /// Issue one itinerary request and settle with its outcome.
    ///
    /// Callers must not submit while `Loading`; the form controller enforces it.
    pub async fn submit(&mut self, request: TripRequest) -> &RequestState {
        self.begin();
        let outcome = self.api.generate_itinerary(&request).await;
        self.settle(outcome);
        &self.state
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::TrippinError;
    use crate::error::{GENERIC_ERROR_MESSAGE, MALFORMED_RESPONSE_MESSAGE};
    use crate::models::CategoryMap;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Canned service answering every call with the next queued outcome
    pub(crate) struct StubApi {
        outcomes: Mutex<Vec<Result<ItineraryResponse>>>,
        pub(crate) calls: AtomicUsize,
    }

    impl StubApi {
        pub(crate) fn new(outcomes: Vec<Result<ItineraryResponse>>) -> Self {
            Self {
                outcomes: Mutex::new(outcomes),
                calls: AtomicUsize::new(0),
            }
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ItineraryApi for StubApi {
        async fn generate_itinerary(&self, _request: &TripRequest) -> Result<ItineraryResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut outcomes = self.outcomes.lock().unwrap();
            if outcomes.is_empty() {
                return Err(TrippinError::transport(""));
            }
            outcomes.remove(0)
        }
    }

    pub(crate) fn itinerary(location: &str) -> ItineraryResponse {
        ItineraryResponse {
            location: location.to_string(),
            days: 1,
            budget: 100.0,
            total_cost: 0.0,
            places: CategoryMap::new(),
        }
    }

    #[tokio::test]
    async fn test_success_settles_with_itinerary() {
        let mut vm = ItineraryViewModel::new(StubApi::new(vec![Ok(itinerary("Paris"))]));
        assert_eq!(vm.state(), &RequestState::Idle);

        let state = vm.submit(TripRequest::new("Paris", 1, 100.0)).await;
        assert_eq!(state.itinerary().unwrap().location, "Paris");
        assert!(state.is_settled());
        assert_eq!(vm.api().calls(), 1);
    }

    #[tokio::test]
    async fn test_failure_replaces_previous_itinerary() {
        let mut vm = ItineraryViewModel::new(StubApi::new(vec![
            Ok(itinerary("Paris")),
            Err(TrippinError::service(400, "Budget too low")),
        ]));

        vm.submit(TripRequest::new("Paris", 1, 100.0)).await;
        let state = vm.submit(TripRequest::new("Paris", 1, 1.0)).await;
        assert_eq!(state, &RequestState::Failure("Budget too low".to_string()));
        assert!(state.itinerary().is_none());
    }

    #[tokio::test]
    async fn test_new_success_clears_error() {
        let mut vm = ItineraryViewModel::new(StubApi::new(vec![
            Err(TrippinError::transport("connection refused")),
            Ok(itinerary("Tokyo")),
        ]));

        let state = vm.submit(TripRequest::new("Tokyo", 1, 100.0)).await;
        assert_eq!(state.error_message(), Some("connection refused"));

        let state = vm.submit(TripRequest::new("Tokyo", 1, 100.0)).await;
        assert!(state.error_message().is_none());
        assert_eq!(state.itinerary().unwrap().location, "Tokyo");
    }

    #[test]
    fn test_begin_clears_settled_state() {
        let mut vm = ItineraryViewModel::new(StubApi::new(vec![]));
        vm.settle(Ok(itinerary("Paris")));
        vm.begin();
        assert!(vm.is_loading());
        assert!(vm.state().itinerary().is_none());
    }

    #[test]
    fn test_settle_messages() {
        let mut vm = ItineraryViewModel::new(StubApi::new(vec![]));

        vm.settle(Err(TrippinError::transport("")));
        assert_eq!(vm.state().error_message(), Some(GENERIC_ERROR_MESSAGE));

        vm.settle(Err(TrippinError::malformed("missing field `places`")));
        assert_eq!(vm.state().error_message(), Some(MALFORMED_RESPONSE_MESSAGE));
    }
}
