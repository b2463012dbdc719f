use crate::api_client::{ApiClient, ApiError};
use crate::domain::{Subscriber, SubscriberEmail};

const FETCH_FAILED: &str = "Failed to fetch subscribers.";
const SUBMIT_FAILED: &str = "Subscription failed.";

/// Progress of the page's single request slot. The stdin loop is the only
/// actor, so at most one request is ever in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
}

/// Outcome text shared by both flows. Holding a single slot makes
/// "error and success shown at once" unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Feedback {
    #[default]
    None,
    Error(String),
    Success(String),
}

#[derive(Debug, Default)]
pub struct ViewState {
    pub subscribers: Vec<Subscriber>,
    pub email_input: String,
    pub phase: Phase,
    pub feedback: Feedback,
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.feedback {
            Feedback::Error(text) => Some(text),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match &self.feedback {
            Feedback::Success(text) => Some(text),
            _ => None,
        }
    }

    /// Drops a stale error without touching a fresh success message. A
    /// refresh triggered by a successful submit must not erase that
    /// submit's confirmation.
    fn clear_error(&mut self) {
        if matches!(self.feedback, Feedback::Error(_)) {
            self.feedback = Feedback::None;
        }
    }
}

/// The signup page: a subscription form plus the current subscriber list,
/// held as plain view state and mutated only by the two flows below.
pub struct SignupPage {
    client: ApiClient,
    state: ViewState,
}

impl SignupPage {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: ViewState::default(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn set_email_input(&mut self, input: String) {
        self.state.email_input = input;
    }

    /// Re-reads the subscriber collection and replaces the local copy
    /// wholesale. Safe to call repeatedly; a failure leaves the previous
    /// list in place and surfaces a fixed error text.
    #[tracing::instrument(name = "Refreshing the subscriber list.", skip(self))]
    pub async fn refresh(&mut self) {
        self.state.phase = Phase::Loading;
        self.state.clear_error();

        match self.client.list_subscribers().await {
            Ok(subscribers) => {
                self.state.subscribers = subscribers;
            }
            Err(e) => {
                tracing::warn!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to fetch the subscriber list"
                );
                self.state.feedback = Feedback::Error(FETCH_FAILED.into());
            }
        }

        self.state.phase = Phase::Idle;
    }

    /// Submits the pending email. An address that fails the input-boundary
    /// check never reaches the network. On success the input is cleared, a
    /// confirmation with the server-echoed address is shown and the list is
    /// refreshed; on failure the server's `detail` text (or a fixed
    /// fallback) is shown and the input is kept for another try.
    #[tracing::instrument(
        name = "Submitting a subscription.",
        skip(self),
        fields(subscriber_email = %self.state.email_input)
    )]
    pub async fn submit(&mut self) {
        self.state.phase = Phase::Loading;
        self.state.feedback = Feedback::None;

        let outcome = match SubscriberEmail::parse(self.state.email_input.clone()) {
            Ok(email) => self
                .client
                .subscribe(&email)
                .await
                .map_err(submit_failure_text),
            Err(invalid) => Err(invalid),
        };

        match outcome {
            Ok(receipt) => {
                self.state.feedback =
                    Feedback::Success(format!("Successfully subscribed {}!", receipt.email));
                self.state.email_input.clear();
                self.refresh().await;
            }
            Err(text) => {
                self.state.feedback = Feedback::Error(text);
            }
        }

        self.state.phase = Phase::Idle;
    }
}

fn submit_failure_text(e: ApiError) -> String {
    tracing::warn!(
        error.cause_chain = ?e,
        error.message = %e,
        "Failed to submit a subscription"
    );
    match e {
        ApiError::Rejected {
            detail: Some(detail),
            ..
        } => detail,
        _ => SUBMIT_FAILED.to_string(),
    }
}
