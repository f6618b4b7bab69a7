use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;

use super::submit::SubmitError;

/// Position in the three-step intake flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Contact,
    Project,
    Appointment,
}

impl Step {
    pub fn number(self) -> u8 {
        match self {
            Step::Contact => 1,
            Step::Project => 2,
            Step::Appointment => 3,
        }
    }

    pub fn next(self) -> Option<Step> {
        match self {
            Step::Contact => Some(Step::Project),
            Step::Project => Some(Step::Appointment),
            Step::Appointment => None,
        }
    }

    pub fn previous(self) -> Option<Step> {
        match self {
            Step::Contact => None,
            Step::Project => Some(Step::Contact),
            Step::Appointment => Some(Step::Project),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BudgetBand {
    TenToTwenty,
    TwentyToForty,
    FortyToEighty,
    EightyPlus,
}

impl BudgetBand {
    pub const ALL: [BudgetBand; 4] = [
        BudgetBand::TenToTwenty,
        BudgetBand::TwentyToForty,
        BudgetBand::FortyToEighty,
        BudgetBand::EightyPlus,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BudgetBand::TenToTwenty => "$10K-$20K",
            BudgetBand::TwentyToForty => "$20K-$40K",
            BudgetBand::FortyToEighty => "$40K-$80K",
            BudgetBand::EightyPlus => "$80K+",
        }
    }
}

pub const UNDER_MINIMUM_LABEL: &str = "Less than $10K";

/// The budget answer. A band and the under-minimum flag can never both be set
/// because they are variants of the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Budget {
    #[default]
    Unset,
    Band(BudgetBand),
    UnderMinimum,
}

impl Budget {
    pub fn label(self) -> &'static str {
        match self {
            Budget::Unset => "",
            Budget::Band(band) => band.label(),
            Budget::UnderMinimum => UNDER_MINIMUM_LABEL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Service {
    DigitalMarketing,
    Website,
    App,
    Branding,
    GraphicDesign,
}

impl Service {
    pub const ALL: [Service; 5] = [
        Service::DigitalMarketing,
        Service::Website,
        Service::App,
        Service::Branding,
        Service::GraphicDesign,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Service::DigitalMarketing => "DIGITAL MARKETING",
            Service::Website => "WEBSITE",
            Service::App => "APP",
            Service::Branding => "BRANDING",
            Service::GraphicDesign => "GRAPHIC DESIGN",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeSlot {
    NineAm,
    TenAm,
    ElevenAm,
    Noon,
    OnePm,
    TwoPm,
    ThreePm,
    FourPm,
    FivePm,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 9] = [
        TimeSlot::NineAm,
        TimeSlot::TenAm,
        TimeSlot::ElevenAm,
        TimeSlot::Noon,
        TimeSlot::OnePm,
        TimeSlot::TwoPm,
        TimeSlot::ThreePm,
        TimeSlot::FourPm,
        TimeSlot::FivePm,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TimeSlot::NineAm => "9:00 AM",
            TimeSlot::TenAm => "10:00 AM",
            TimeSlot::ElevenAm => "11:00 AM",
            TimeSlot::Noon => "12:00 PM",
            TimeSlot::OnePm => "1:00 PM",
            TimeSlot::TwoPm => "2:00 PM",
            TimeSlot::ThreePm => "3:00 PM",
            TimeSlot::FourPm => "4:00 PM",
            TimeSlot::FivePm => "5:00 PM",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Free-text inputs that are overwritten wholesale on every keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    CompanyName,
    ProjectDescription,
    ContactName,
    ContactEmail,
    ContactPhone,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(SubmitError),
}

/// Everything the intake flow has collected so far.
///
/// Fields are only writable inside the `contact` module. Outside code goes
/// through the operations below, none of which can break the budget or
/// date/time invariants.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub(super) step: Step,
    pub(super) company_name: String,
    pub(super) budget: Budget,
    pub(super) selected_services: BTreeSet<Service>,
    pub(super) project_description: String,
    pub(super) contact_name: String,
    pub(super) contact_email: String,
    pub(super) contact_phone: String,
    pub(super) selected_date: Option<NaiveDate>,
    pub(super) selected_time: Option<TimeSlot>,
    pub(super) submission_status: SubmissionStatus,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn submission_status(&self) -> &SubmissionStatus {
        &self.submission_status
    }

    pub fn set_field(&mut self, field: TextField, value: impl Into<String>) {
        let value = value.into();
        match field {
            TextField::CompanyName => self.company_name = value,
            TextField::ProjectDescription => self.project_description = value,
            TextField::ContactName => self.contact_name = value,
            TextField::ContactEmail => self.contact_email = value,
            TextField::ContactPhone => self.contact_phone = value,
        }
    }

    pub fn field(&self, field: TextField) -> &str {
        match field {
            TextField::CompanyName => &self.company_name,
            TextField::ProjectDescription => &self.project_description,
            TextField::ContactName => &self.contact_name,
            TextField::ContactEmail => &self.contact_email,
            TextField::ContactPhone => &self.contact_phone,
        }
    }

    pub fn toggle_service(&mut self, service: Service) {
        if !self.selected_services.remove(&service) {
            self.selected_services.insert(service);
        }
    }

    pub fn set_budget(&mut self, band: BudgetBand) {
        self.budget = Budget::Band(band);
    }

    /// Unchecking the flag leaves no band selected; it never restores one.
    pub fn set_budget_under_minimum(&mut self, flag: bool) {
        if flag {
            self.budget = Budget::UnderMinimum;
        } else if self.budget == Budget::UnderMinimum {
            self.budget = Budget::Unset;
        }
    }

    pub fn budget_selection(&self) -> Option<BudgetBand> {
        match self.budget {
            Budget::Band(band) => Some(band),
            _ => None,
        }
    }

    pub fn budget_under_minimum(&self) -> bool {
        self.budget == Budget::UnderMinimum
    }

    /// A time slot only means something for its own date.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.selected_date = Some(date);
        self.selected_time = None;
    }

    pub fn set_time(&mut self, slot: TimeSlot) {
        self.selected_time = Some(slot);
    }

    pub fn submission_error(&self) -> Option<String> {
        match &self.submission_status {
            SubmissionStatus::Failed(err) => Some(err.to_string()),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submission_status == SubmissionStatus::Submitting
    }
}
