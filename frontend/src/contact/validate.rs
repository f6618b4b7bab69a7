//! Required-field checks gating each step of the intake flow.
//!
//! These never produce an error value. A failing check just leaves the
//! Next/Book button inert.

use super::form::{Budget, FormState, Step};

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn contact_step_complete(form: &FormState) -> bool {
    filled(&form.contact_name) && filled(&form.contact_email) && filled(&form.contact_phone)
}

pub fn project_step_complete(form: &FormState) -> bool {
    filled(&form.company_name) && form.budget != Budget::Unset
}

pub fn appointment_step_complete(form: &FormState) -> bool {
    form.selected_date.is_some() && form.selected_time.is_some()
}

/// Whether the form may leave `step` forwards (or submit, on the last step).
pub fn step_complete(form: &FormState, step: Step) -> bool {
    match step {
        Step::Contact => contact_step_complete(form),
        Step::Project => project_step_complete(form),
        Step::Appointment => appointment_step_complete(form),
    }
}

pub fn can_proceed(form: &FormState) -> bool {
    step_complete(form, form.step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::form::{BudgetBand, TextField, TimeSlot};
    use chrono::NaiveDate;

    fn with_contact(name: &str, email: &str, phone: &str) -> FormState {
        let mut form = FormState::new();
        form.set_field(TextField::ContactName, name);
        form.set_field(TextField::ContactEmail, email);
        form.set_field(TextField::ContactPhone, phone);
        form
    }

    #[test]
    fn test_contact_step_requires_all_three() {
        assert!(contact_step_complete(&with_contact("Jane", "jane@x.com", "555-0100")));
        assert!(!contact_step_complete(&with_contact("", "jane@x.com", "555-0100")));
        assert!(!contact_step_complete(&with_contact("Jane", "", "555-0100")));
        assert!(!contact_step_complete(&with_contact("Jane", "jane@x.com", "")));
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert!(!contact_step_complete(&with_contact("   ", "jane@x.com", "555")));
        assert!(!contact_step_complete(&with_contact("Jane", "\t\n", "555")));
    }

    #[test]
    fn test_email_format_is_not_checked() {
        assert!(contact_step_complete(&with_contact("Jane", "not an email", "x")));
    }

    #[test]
    fn test_project_step_needs_company_and_budget() {
        let mut form = FormState::new();
        assert!(!project_step_complete(&form));

        form.set_field(TextField::CompanyName, "Acme");
        assert!(!project_step_complete(&form));

        form.set_budget(BudgetBand::TwentyToForty);
        assert!(project_step_complete(&form));

        form.set_budget_under_minimum(true);
        assert!(project_step_complete(&form));

        form.set_field(TextField::CompanyName, "  ");
        assert!(!project_step_complete(&form));
    }

    #[test]
    fn test_services_and_description_are_optional() {
        let mut form = FormState::new();
        form.set_field(TextField::CompanyName, "Acme");
        form.set_budget_under_minimum(true);
        assert!(form.selected_services.is_empty());
        assert!(form.project_description.is_empty());
        assert!(project_step_complete(&form));
    }

    #[test]
    fn test_appointment_step_needs_date_and_time() {
        let mut form = FormState::new();
        assert!(!appointment_step_complete(&form));

        form.set_date(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert!(!appointment_step_complete(&form));

        form.set_time(TimeSlot::TwoPm);
        assert!(appointment_step_complete(&form));

        form.set_date(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
        assert!(!appointment_step_complete(&form));
    }

    #[test]
    fn test_can_proceed_follows_current_step() {
        let mut form = with_contact("Jane", "jane@x.com", "555-0100");
        assert!(can_proceed(&form));
        form.step = Step::Project;
        assert!(!can_proceed(&form));
    }
}
