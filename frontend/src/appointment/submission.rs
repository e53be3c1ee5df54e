//! Sending a validated booking request and folding the outcome back into
//! the wizard.

use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{error, info, warn};
use thiserror::Error;

use super::model::AppointmentRequest;
use super::wizard::{AppointmentWizard, SubmitBlocked};
use crate::config;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("no response within {0:?}")]
    Timeout(Duration),
}

/// Whatever the server sent back for an accepted booking. Only its
/// presence matters.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt(pub serde_json::Value);

/// Anything that can take a booking request and accept or reject it.
#[async_trait(?Send)]
pub trait AppointmentSubmitter {
    async fn submit(
        &self,
        request: &AppointmentRequest,
    ) -> Result<SubmissionReceipt, SubmissionError>;
}

/// Posts the request as JSON to the appointments endpoint.
pub struct HttpSubmitter {
    endpoint: String,
    timeout: Duration,
}

impl HttpSubmitter {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
        }
    }

    pub fn from_config() -> Self {
        Self::new(config::appointments_endpoint(), config::SUBMISSION_TIMEOUT)
    }
}

#[async_trait(?Send)]
impl AppointmentSubmitter for HttpSubmitter {
    async fn submit(
        &self,
        request: &AppointmentRequest,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let send = Box::pin(
            Request::post(&self.endpoint)
                .json(request)
                .map_err(|e| SubmissionError::Encode(e.to_string()))?
                .send(),
        );
        let deadline = Box::pin(TimeoutFuture::new(self.timeout.as_millis() as u32));

        let response = match select(send, deadline).await {
            Either::Left((result, _)) => {
                result.map_err(|e| SubmissionError::Network(e.to_string()))?
            }
            Either::Right(_) => return Err(SubmissionError::Timeout(self.timeout)),
        };

        if !response.ok() {
            return Err(SubmissionError::Status(response.status()));
        }
        response
            .json::<serde_json::Value>()
            .await
            .map(SubmissionReceipt)
            .map_err(|e| SubmissionError::Decode(e.to_string()))
    }
}

/// Identifies which modal session a submission belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket {
    session: u64,
}

/// A submission that passed validation and is ready to be sent.
pub struct PendingSubmission {
    ticket: SubmissionTicket,
    request: AppointmentRequest,
    submitter: Rc<dyn AppointmentSubmitter>,
}

impl PendingSubmission {
    pub async fn run(self) -> (SubmissionTicket, Result<SubmissionReceipt, SubmissionError>) {
        let outcome = self.submitter.submit(&self.request).await;
        (self.ticket, outcome)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Succeeded,
    Failed,
    /// The modal was closed or reopened while the request was out.
    Stale,
}

impl Completion {
    /// How long the success screen stays up before the modal closes itself.
    pub fn auto_close_after(self) -> Option<u32> {
        match self {
            Completion::Succeeded => Some(config::SUCCESS_AUTO_CLOSE_MS),
            Completion::Failed | Completion::Stale => None,
        }
    }
}

/// Owns the in-flight guard for booking submissions.
///
/// At most one request is out at a time per session, and a result that
/// arrives after its session ended is dropped.
pub struct SubmissionController {
    submitter: Rc<dyn AppointmentSubmitter>,
    session: u64,
    in_flight: bool,
}

impl SubmissionController {
    pub fn new(submitter: Rc<dyn AppointmentSubmitter>) -> Self {
        Self {
            submitter,
            session: 0,
            in_flight: false,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Starts a new modal session. Anything still in flight from the old one
    /// will be ignored when it lands.
    pub fn new_session(&mut self) {
        self.session += 1;
        self.in_flight = false;
    }

    pub fn begin(
        &mut self,
        wizard: &mut AppointmentWizard,
    ) -> Result<PendingSubmission, SubmitBlocked> {
        if self.in_flight {
            warn!("Ignoring submit while a booking request is in flight");
            return Err(SubmitBlocked::InFlight);
        }
        let request = wizard.begin_submit()?;
        self.in_flight = true;
        info!("Submitting booking request");
        Ok(PendingSubmission {
            ticket: SubmissionTicket {
                session: self.session,
            },
            request,
            submitter: Rc::clone(&self.submitter),
        })
    }

    pub fn complete(
        &mut self,
        wizard: &mut AppointmentWizard,
        ticket: SubmissionTicket,
        outcome: Result<SubmissionReceipt, SubmissionError>,
    ) -> Completion {
        if ticket.session != self.session || !self.in_flight {
            warn!("Dropping booking result from a closed session");
            return Completion::Stale;
        }
        self.in_flight = false;
        match outcome {
            Ok(_) => {
                info!("Booking request accepted");
                wizard.resolve_success();
                Completion::Succeeded
            }
            Err(e) => {
                error!("Booking request failed: {}", e);
                wizard.resolve_failure();
                Completion::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appointment::model::{Field, FieldUpdate};
    use crate::appointment::wizard::tests::{fill_guardian, fill_patient};
    use crate::appointment::wizard::WizardStep;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    /// Replays queued outcomes and counts calls.
    struct ScriptedSubmitter {
        calls: Cell<usize>,
        outcomes: RefCell<Vec<Result<SubmissionReceipt, SubmissionError>>>,
    }

    impl ScriptedSubmitter {
        fn new(outcomes: Vec<Result<SubmissionReceipt, SubmissionError>>) -> Rc<Self> {
            Rc::new(Self {
                calls: Cell::new(0),
                outcomes: RefCell::new(outcomes),
            })
        }
    }

    #[async_trait(?Send)]
    impl AppointmentSubmitter for ScriptedSubmitter {
        async fn submit(
            &self,
            _request: &AppointmentRequest,
        ) -> Result<SubmissionReceipt, SubmissionError> {
            self.calls.set(self.calls.get() + 1);
            self.outcomes.borrow_mut().remove(0)
        }
    }

    fn accepted() -> Result<SubmissionReceipt, SubmissionError> {
        Ok(SubmissionReceipt(serde_json::json!({ "id": 1 })))
    }

    fn ready_wizard(phone: &str) -> AppointmentWizard {
        let mut wizard = AppointmentWizard::new();
        fill_patient(&mut wizard);
        assert!(wizard.next());
        fill_guardian(&mut wizard, phone);
        wizard
    }

    #[test]
    fn test_successful_submission() {
        let submitter = ScriptedSubmitter::new(vec![accepted()]);
        let mut controller = SubmissionController::new(submitter.clone());
        let mut wizard = ready_wizard("9876543210");

        let pending = controller.begin(&mut wizard).unwrap();
        assert!(controller.is_in_flight());
        assert_eq!(wizard.step(), WizardStep::Submitting);

        let (ticket, outcome) = block_on(pending.run());
        assert_eq!(controller.complete(&mut wizard, ticket, outcome), Completion::Succeeded);
        assert_eq!(wizard.step(), WizardStep::Success);
        assert_eq!(submitter.calls.get(), 1);
        assert!(!controller.is_in_flight());
    }

    #[test]
    fn test_second_click_while_pending_does_not_resend() {
        let submitter = ScriptedSubmitter::new(vec![accepted(), accepted()]);
        let mut controller = SubmissionController::new(submitter.clone());
        let mut wizard = ready_wizard("9876543210");

        let pending = controller.begin(&mut wizard).unwrap();
        assert!(matches!(controller.begin(&mut wizard), Err(SubmitBlocked::InFlight)));

        let (ticket, outcome) = block_on(pending.run());
        controller.complete(&mut wizard, ticket, outcome);
        assert_eq!(submitter.calls.get(), 1);
    }

    #[test]
    fn test_invalid_phone_never_reaches_submitter() {
        let submitter = ScriptedSubmitter::new(vec![]);
        let mut controller = SubmissionController::new(submitter.clone());
        let mut wizard = ready_wizard("98765");

        assert!(matches!(controller.begin(&mut wizard), Err(SubmitBlocked::Invalid(_))));
        assert!(!controller.is_in_flight());
        assert_eq!(wizard.step(), WizardStep::Step2);
        assert!(wizard.errors().contains(Field::GuardianPhone));
        assert_eq!(submitter.calls.get(), 0);
    }

    #[test]
    fn test_failure_keeps_data_and_allows_retry() {
        let submitter = ScriptedSubmitter::new(vec![
            Err(SubmissionError::Status(500)),
            accepted(),
        ]);
        let mut controller = SubmissionController::new(submitter.clone());
        let mut wizard = ready_wizard("9876543210");
        let filled = wizard.request().clone();

        let (ticket, outcome) = block_on(controller.begin(&mut wizard).unwrap().run());
        assert_eq!(controller.complete(&mut wizard, ticket, outcome), Completion::Failed);
        assert_eq!(wizard.step(), WizardStep::Step2);
        assert!(wizard.submit_failed());
        assert_eq!(wizard.request(), &filled);

        let (ticket, outcome) = block_on(controller.begin(&mut wizard).unwrap().run());
        assert_eq!(controller.complete(&mut wizard, ticket, outcome), Completion::Succeeded);
        assert_eq!(submitter.calls.get(), 2);
    }

    #[test]
    fn test_retry_after_failure_revalidates() {
        let submitter = ScriptedSubmitter::new(vec![Err(SubmissionError::Timeout(
            config::SUBMISSION_TIMEOUT,
        ))]);
        let mut controller = SubmissionController::new(submitter.clone());
        let mut wizard = ready_wizard("9876543210");

        let (ticket, outcome) = block_on(controller.begin(&mut wizard).unwrap().run());
        controller.complete(&mut wizard, ticket, outcome);

        wizard.update(FieldUpdate::Text(Field::AddressPin, "8000".into()));
        assert!(matches!(controller.begin(&mut wizard), Err(SubmitBlocked::Invalid(_))));
        assert_eq!(submitter.calls.get(), 1);
    }

    #[test]
    fn test_result_after_close_is_ignored() {
        let submitter = ScriptedSubmitter::new(vec![accepted()]);
        let mut controller = SubmissionController::new(submitter);
        let mut wizard = ready_wizard("9876543210");

        let pending = controller.begin(&mut wizard).unwrap();
        controller.new_session();
        wizard.reset();

        let (ticket, outcome) = block_on(pending.run());
        assert_eq!(controller.complete(&mut wizard, ticket, outcome), Completion::Stale);
        assert_eq!(wizard.step(), WizardStep::Step1);
    }

    #[test]
    fn test_only_success_schedules_auto_close() {
        assert_eq!(Completion::Succeeded.auto_close_after(), Some(4_000));
        assert_eq!(Completion::Failed.auto_close_after(), None);
        assert_eq!(Completion::Stale.auto_close_after(), None);
    }

    #[test]
    fn test_error_messages_are_diagnostic() {
        assert_eq!(
            SubmissionError::Status(503).to_string(),
            "server responded with status 503"
        );
        assert_eq!(
            SubmissionError::Timeout(Duration::from_secs(20)).to_string(),
            "no response within 20s"
        );
    }
}
