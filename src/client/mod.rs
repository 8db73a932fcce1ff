//! Browser-side contact form logic: field state, the submit state machine and
//! the transport that carries a submission to the relay.

pub mod transport;

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::contact::model::Submission;

pub use transport::{ContactTransport, HttpTransport, TransportError};

/// Shown when the relay gives no usable message.
pub const FALLBACK_ERROR: &str = "Something went wrong. Please try again later.";
const FALLBACK_SUCCESS: &str = "Message sent successfully!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
    Success(String),
    Failure(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission was already in flight; nothing was sent.
    Ignored,
    /// Required fields are empty; nothing was sent.
    Blocked(Vec<Field>),
    /// The request settled and the form moved to this state.
    Settled(FormState),
}

struct Inner {
    submission: Submission,
    state: FormState,
}

pub struct FormController<T> {
    transport: T,
    inner: Mutex<Inner>,
}

impl<T: ContactTransport> FormController<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            inner: Mutex::new(Inner {
                submission: Submission::default(),
                state: FormState::Idle,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> FormState {
        self.lock().state.clone()
    }

    pub fn submission(&self) -> Submission {
        self.lock().submission.clone()
    }

    pub fn can_submit(&self) -> bool {
        self.lock().state != FormState::Submitting
    }

    pub fn update_field(&self, field: Field, value: impl Into<String>) {
        let mut inner = self.lock();
        let value = value.into();
        match field {
            Field::Name => inner.submission.name = value,
            Field::Email => inner.submission.email = value,
            Field::Message => inner.submission.message = value,
        }
        inner.dismiss_result();
    }

    pub fn toggle_service(&self, label: &str, checked: bool) {
        let mut inner = self.lock();
        inner.submission.toggle_service(label, checked);
        inner.dismiss_result();
    }

    /// Send the current fields. At most one request is in flight per controller.
    ///
    /// Success clears every field; failure leaves them exactly as they were.
    pub async fn submit(&self) -> SubmitOutcome {
        let payload = {
            let mut inner = self.lock();
            if inner.state == FormState::Submitting {
                return SubmitOutcome::Ignored;
            }
            let missing = missing_fields(&inner.submission);
            if !missing.is_empty() {
                return SubmitOutcome::Blocked(missing);
            }
            inner.state = FormState::Submitting;
            inner.submission.clone()
        };

        let mut in_flight = InFlight {
            controller: self,
            settled: false,
        };
        let result = self.transport.submit(&payload).await;
        in_flight.settled = true;

        let next = match result {
            Ok(result) if result.success => {
                FormState::Success(non_empty_or(result.message, FALLBACK_SUCCESS))
            }
            Ok(result) => FormState::Failure(non_empty_or(result.message, FALLBACK_ERROR)),
            Err(e) => {
                tracing::warn!("Contact form submission failed: {e}");
                FormState::Failure(FALLBACK_ERROR.to_string())
            }
        };

        let mut inner = self.lock();
        if matches!(next, FormState::Success(_)) {
            inner.submission = Submission::default();
        }
        inner.state = next.clone();
        SubmitOutcome::Settled(next)
    }
}

impl Inner {
    fn dismiss_result(&mut self) {
        if matches!(self.state, FormState::Success(_) | FormState::Failure(_)) {
            self.state = FormState::Idle;
        }
    }
}

/// Unlocks the form if a pending `submit` future is dropped before the request settles.
struct InFlight<'a, T: ContactTransport> {
    controller: &'a FormController<T>,
    settled: bool,
}

impl<T: ContactTransport> Drop for InFlight<'_, T> {
    fn drop(&mut self) {
        if !self.settled {
            self.controller.lock().state = FormState::Idle;
        }
    }
}

fn missing_fields(submission: &Submission) -> Vec<Field> {
    [
        (Field::Name, &submission.name),
        (Field::Email, &submission.email),
        (Field::Message, &submission.message),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| field)
    .collect()
}

fn non_empty_or(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
