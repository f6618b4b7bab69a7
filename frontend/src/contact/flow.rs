//! Step state machine and submission lifecycle for one open intake flow.

use crate::config::ContactConfig;

use super::form::{FormState, Step, SubmissionStatus};
use super::submit::{booking_link, ContactPayload, SubmitError};
use super::validate;

/// Identifies the flow instance a submission was started from. Results that
/// come back after the flow was closed (or closed and reopened) carry a stale
/// generation and are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitTicket {
    generation: u64,
    booking_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmission {
    pub ticket: SubmitTicket,
    pub endpoint: String,
    pub payload: ContactPayload,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The flow this result belonged to no longer exists.
    Discarded,
    Failed,
    Succeeded { booking_link: Option<String> },
}

#[derive(Debug, Default)]
pub struct IntakeFlow {
    form: FormState,
    generation: u64,
    open: bool,
}

impl IntakeFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        if self.open {
            return;
        }
        self.form = FormState::new();
        self.generation = self.generation.wrapping_add(1);
        self.open = true;
    }

    /// Closing always wipes the form, whatever happened before.
    pub fn close(&mut self) {
        self.form = FormState::new();
        self.generation = self.generation.wrapping_add(1);
        self.open = false;
    }

    pub fn can_proceed(&self) -> bool {
        self.open && validate::can_proceed(&self.form)
    }

    /// Moves one step forward if the current step is complete. The last
    /// step has no successor; it submits instead.
    pub fn next(&mut self) -> bool {
        if !self.can_proceed() {
            return false;
        }
        match self.form.step.next() {
            Some(step) => {
                self.form.step = step;
                true
            }
            None => false,
        }
    }

    pub fn back(&mut self) -> bool {
        if !self.open {
            return false;
        }
        match self.form.step.previous() {
            Some(step) => {
                self.form.step = step;
                true
            }
            None => false,
        }
    }

    /// Starts a submission from the appointment step. Returns `None` without
    /// touching anything when the step is incomplete or a request is already
    /// in flight. A missing endpoint fails the attempt before any request.
    pub fn begin_submit(&mut self, config: &ContactConfig) -> Option<PendingSubmission> {
        if self.form.step != Step::Appointment || self.form.is_submitting() || !self.can_proceed() {
            return None;
        }

        let endpoint = match config.endpoint.as_deref() {
            Some(endpoint) => endpoint.to_string(),
            None => {
                self.form.submission_status =
                    SubmissionStatus::Failed(SubmitError::ConfigurationMissing("CONTACT_ENDPOINT"));
                return None;
            }
        };

        self.form.submission_status = SubmissionStatus::Submitting;
        let ticket = SubmitTicket {
            generation: self.generation,
            booking_link: config
                .booking_url
                .as_deref()
                .map(|url| booking_link(url, &self.form.contact_name, &self.form.contact_email)),
        };

        Some(PendingSubmission {
            ticket,
            endpoint,
            payload: ContactPayload::from(&self.form),
        })
    }

    /// Records the relay's answer. Only the submission status changes; the
    /// caller closes the flow after a success.
    pub fn finish_submit(
        &mut self,
        ticket: SubmitTicket,
        result: Result<(), SubmitError>,
    ) -> SubmitOutcome {
        if !self.open || ticket.generation != self.generation || !self.form.is_submitting() {
            return SubmitOutcome::Discarded;
        }

        match result {
            Ok(()) => {
                self.form.submission_status = SubmissionStatus::Succeeded;
                SubmitOutcome::Succeeded {
                    booking_link: ticket.booking_link,
                }
            }
            Err(err) => {
                self.form.submission_status = SubmissionStatus::Failed(err);
                SubmitOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::form::{BudgetBand, Service, TextField, TimeSlot};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn config() -> ContactConfig {
        ContactConfig {
            endpoint: Some("/api/contact".to_string()),
            booking_url: None,
        }
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn fill_contact(flow: &mut IntakeFlow) {
        let form = flow.form_mut();
        form.set_field(TextField::ContactName, "Jane");
        form.set_field(TextField::ContactEmail, "jane@x.com");
        form.set_field(TextField::ContactPhone, "555-0100");
    }

    fn fill_project(flow: &mut IntakeFlow) {
        let form = flow.form_mut();
        form.set_field(TextField::CompanyName, "Acme");
        form.set_budget(BudgetBand::TwentyToForty);
        form.toggle_service(Service::App);
        form.set_field(TextField::ProjectDescription, "A booking app");
    }

    fn flow_on_appointment() -> IntakeFlow {
        let mut flow = IntakeFlow::new();
        flow.open();
        fill_contact(&mut flow);
        assert!(flow.next());
        fill_project(&mut flow);
        assert!(flow.next());
        flow.form_mut().set_date(date(1));
        flow.form_mut().set_time(TimeSlot::TwoPm);
        flow
    }

    #[test]
    fn test_next_on_empty_first_step_is_noop() {
        let mut flow = IntakeFlow::new();
        flow.open();
        assert!(!flow.next());
        assert_eq!(flow.form().step(), Step::Contact);
        assert!(flow.begin_submit(&config()).is_none());
    }

    #[test]
    fn test_guard_holds_for_each_missing_contact_field() {
        for missing in [TextField::ContactName, TextField::ContactEmail, TextField::ContactPhone] {
            let mut flow = IntakeFlow::new();
            flow.open();
            fill_contact(&mut flow);
            flow.form_mut().set_field(missing, " ");
            assert!(!flow.next());
            assert_eq!(flow.form().step().number(), 1);
        }
    }

    #[test]
    fn test_contact_details_advance_to_project() {
        let mut flow = IntakeFlow::new();
        flow.open();
        fill_contact(&mut flow);
        assert!(flow.next());
        assert_eq!(flow.form().step(), Step::Project);
    }

    #[test]
    fn test_project_step_guard() {
        let mut flow = IntakeFlow::new();
        flow.open();
        fill_contact(&mut flow);
        flow.next();
        flow.form_mut().set_field(TextField::CompanyName, "Acme");
        assert!(!flow.next());
        flow.form_mut().set_budget_under_minimum(true);
        assert!(flow.next());
        assert_eq!(flow.form().step(), Step::Appointment);
    }

    #[test]
    fn test_back_is_never_guarded() {
        let mut flow = flow_on_appointment();
        flow.form_mut().set_field(TextField::CompanyName, "");
        assert!(flow.back());
        assert_eq!(flow.form().step(), Step::Project);
        assert!(flow.back());
        assert_eq!(flow.form().step(), Step::Contact);
        assert!(!flow.back());
        assert_eq!(flow.form().company_name, "");
        assert_eq!(flow.form().contact_name, "Jane");
    }

    #[test]
    fn test_last_step_does_not_advance() {
        let mut flow = flow_on_appointment();
        assert!(!flow.next());
        assert_eq!(flow.form().step(), Step::Appointment);
    }

    #[test]
    fn test_changing_date_blocks_submit_until_new_time() {
        let mut flow = flow_on_appointment();
        flow.form_mut().set_date(date(2));
        assert!(flow.form().selected_time.is_none());
        assert!(flow.begin_submit(&config()).is_none());
        assert_eq!(flow.form().submission_status(), &SubmissionStatus::Idle);

        flow.form_mut().set_time(TimeSlot::TenAm);
        assert!(flow.begin_submit(&config()).is_some());
    }

    #[test]
    fn test_begin_submit_builds_payload() {
        let mut flow = flow_on_appointment();
        let pending = flow.begin_submit(&config()).unwrap();
        assert_eq!(pending.endpoint, "/api/contact");
        assert_eq!(pending.payload.company_name, "Acme");
        assert_eq!(pending.payload.selected_time, "2:00 PM");
        assert_eq!(flow.form().submission_status(), &SubmissionStatus::Submitting);
    }

    #[test]
    fn test_no_second_request_while_submitting() {
        let mut flow = flow_on_appointment();
        assert!(flow.begin_submit(&config()).is_some());
        assert!(flow.begin_submit(&config()).is_none());
    }

    #[test]
    fn test_missing_endpoint_fails_without_request() {
        let mut flow = flow_on_appointment();
        let before = flow.form().clone();
        let pending = flow.begin_submit(&ContactConfig::default());
        assert!(pending.is_none());
        assert_eq!(
            flow.form().submission_status(),
            &SubmissionStatus::Failed(SubmitError::ConfigurationMissing("CONTACT_ENDPOINT"))
        );
        assert!(flow.form().submission_error().is_some());

        let mut expected = before;
        expected.submission_status = flow.form().submission_status.clone();
        assert_eq!(flow.form(), &expected);
    }

    #[test]
    fn test_network_failure_keeps_everything_else() {
        let mut flow = flow_on_appointment();
        let before = flow.form().clone();
        let pending = flow.begin_submit(&config()).unwrap();

        let outcome = flow.finish_submit(
            pending.ticket,
            Err(SubmitError::NetworkFailure("connection refused".to_string())),
        );
        assert_eq!(outcome, SubmitOutcome::Failed);
        assert!(flow.is_open());
        assert_eq!(flow.form().step(), Step::Appointment);
        assert!(flow.form().submission_error().unwrap().contains("connection refused"));

        let mut expected = before;
        expected.submission_status = flow.form().submission_status.clone();
        assert_eq!(flow.form(), &expected);
    }

    #[test]
    fn test_retry_after_failure() {
        let mut flow = flow_on_appointment();
        let first = flow.begin_submit(&config()).unwrap();
        flow.finish_submit(
            first.ticket,
            Err(SubmitError::ServerRejection("Failed to send email".to_string())),
        );

        let second = flow.begin_submit(&config()).unwrap();
        assert_eq!(second.payload, first.payload);
        assert_eq!(flow.form().submission_status(), &SubmissionStatus::Submitting);
        assert!(flow.form().submission_error().is_none());
    }

    #[test]
    fn test_success_then_close_resets() {
        let mut flow = flow_on_appointment();
        let pending = flow.begin_submit(&config()).unwrap();
        let outcome = flow.finish_submit(pending.ticket, Ok(()));
        assert_eq!(outcome, SubmitOutcome::Succeeded { booking_link: None });
        assert_eq!(flow.form().submission_status(), &SubmissionStatus::Succeeded);

        flow.close();
        flow.open();
        assert_eq!(flow.form(), &FormState::new());
        assert_eq!(flow.form().step().number(), 1);
    }

    #[test]
    fn test_success_carries_booking_link() {
        let mut flow = flow_on_appointment();
        let config = ContactConfig {
            endpoint: Some("/api/contact".to_string()),
            booking_url: Some("https://cal.example/intro".to_string()),
        };
        let pending = flow.begin_submit(&config).unwrap();
        match flow.finish_submit(pending.ticket, Ok(())) {
            SubmitOutcome::Succeeded { booking_link } => assert_eq!(
                booking_link.as_deref(),
                Some("https://cal.example/intro?name=Jane&email=jane%40x.com")
            ),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_result_after_close_is_discarded() {
        let mut flow = flow_on_appointment();
        let pending = flow.begin_submit(&config()).unwrap();
        flow.close();

        assert_eq!(flow.finish_submit(pending.ticket.clone(), Ok(())), SubmitOutcome::Discarded);
        assert_eq!(flow.form(), &FormState::new());

        flow.open();
        assert_eq!(flow.finish_submit(pending.ticket, Ok(())), SubmitOutcome::Discarded);
        assert_eq!(flow.form().submission_status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn test_reset_is_complete_from_any_state() {
        let mut flow = flow_on_appointment();
        flow.begin_submit(&config());
        flow.close();
        assert!(!flow.is_open());
        assert_eq!(flow.form(), &FormState::new());

        let mut flow = IntakeFlow::new();
        flow.open();
        fill_contact(&mut flow);
        flow.next();
        flow.form_mut().set_budget_under_minimum(true);
        flow.close();
        assert_eq!(flow.form(), &FormState::new());
    }

    #[test]
    fn test_closed_flow_ignores_navigation() {
        let mut flow = IntakeFlow::new();
        fill_contact(&mut flow);
        assert!(!flow.next());
        assert!(!flow.back());
    }

    #[test]
    fn test_open_twice_keeps_progress() {
        let mut flow = IntakeFlow::new();
        flow.open();
        fill_contact(&mut flow);
        flow.open();
        assert_eq!(flow.form().contact_name, "Jane");
    }
}
