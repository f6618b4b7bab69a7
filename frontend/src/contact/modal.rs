use chrono::NaiveDate;
use log::{error, info, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::ContactConfig;

use super::calendar::{BookingWindow, Calendar};
use super::flow::{IntakeFlow, SubmitOutcome, SubmitTicket};
use super::form::{BudgetBand, Service, Step, SubmissionStatus, TextField, TimeSlot, UNDER_MINIMUM_LABEL};
use super::submit::{send_contact_request, SubmitError};

const CONFIRMATION: &str = "Thank you! We'll be in touch soon.";

#[derive(Properties, PartialEq)]
pub struct ContactModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

pub enum ContactModalMsg {
    Close,
    Next,
    Back,
    SetText(TextField, String),
    ToggleService(Service),
    SelectBudget(BudgetBand),
    SetUnderMinimum(bool),
    SelectDate(NaiveDate),
    SelectTime(TimeSlot),
    Submit,
    SubmitFinished(SubmitTicket, Result<(), SubmitError>),
}

pub struct ContactModal {
    flow: IntakeFlow,
    config: ContactConfig,
    window: BookingWindow,
}

impl Component for ContactModal {
    type Message = ContactModalMsg;
    type Properties = ContactModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut flow = IntakeFlow::new();
        if ctx.props().is_open {
            flow.open();
        }
        Self {
            flow,
            config: ContactConfig::from_build_env(),
            window: BookingWindow::from_local_clock(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        let is_open = ctx.props().is_open;
        if is_open && !self.flow.is_open() {
            self.window = BookingWindow::from_local_clock();
            self.flow.open();
        } else if !is_open && self.flow.is_open() {
            self.flow.close();
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactModalMsg::Close => {
                self.flow.close();
                ctx.props().on_close.emit(());
                true
            }
            ContactModalMsg::Next => self.flow.next(),
            ContactModalMsg::Back => self.flow.back(),
            ContactModalMsg::SetText(field, value) => {
                self.flow.form_mut().set_field(field, value);
                true
            }
            ContactModalMsg::ToggleService(service) => {
                self.flow.form_mut().toggle_service(service);
                true
            }
            ContactModalMsg::SelectBudget(band) => {
                self.flow.form_mut().set_budget(band);
                true
            }
            ContactModalMsg::SetUnderMinimum(flag) => {
                self.flow.form_mut().set_budget_under_minimum(flag);
                true
            }
            ContactModalMsg::SelectDate(date) => {
                self.flow.form_mut().set_date(date);
                true
            }
            ContactModalMsg::SelectTime(slot) => {
                self.flow.form_mut().set_time(slot);
                true
            }
            ContactModalMsg::Submit => {
                match self.flow.begin_submit(&self.config) {
                    Some(pending) => {
                        info!("Submitting contact request to {}", pending.endpoint);
                        ctx.link().send_future(async move {
                            let result =
                                send_contact_request(&pending.endpoint, &pending.payload).await;
                            ContactModalMsg::SubmitFinished(pending.ticket, result)
                        });
                    }
                    None => {
                        if let Some(message) = self.flow.form().submission_error() {
                            warn!("Contact request not sent: {}", message);
                        }
                    }
                }
                true
            }
            ContactModalMsg::SubmitFinished(ticket, result) => {
                match self.flow.finish_submit(ticket, result) {
                    SubmitOutcome::Discarded => {
                        info!("Dropping contact response for a closed form");
                        false
                    }
                    SubmitOutcome::Failed => {
                        if let Some(message) = self.flow.form().submission_error() {
                            error!("Contact submission failed: {}", message);
                        }
                        true
                    }
                    SubmitOutcome::Succeeded { booking_link } => {
                        if let Some(window) = web_sys::window() {
                            if let Some(link) = booking_link {
                                if window.open_with_url_and_target(&link, "_blank").is_err() {
                                    warn!("Could not open booking page");
                                }
                            }
                            if window.alert_with_message(CONFIRMATION).is_err() {
                                warn!("Could not show submission confirmation");
                            }
                        }
                        self.flow.close();
                        ctx.props().on_close.emit(());
                        true
                    }
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !self.flow.is_open() {
            return html! {};
        }
        let step = self.flow.form().step();
        let close = ctx.link().callback(|_: MouseEvent| ContactModalMsg::Close);

        html! {
            <div class="contact-overlay" onclick={close.clone()}>
                <div
                    class="contact-modal"
                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                >
                    <button class="contact-close" aria-label="Close" onclick={close}>{"×"}</button>
                    <div class="step-indicator">
                        { for [Step::Contact, Step::Project, Step::Appointment].into_iter().map(|s| html! {
                            <div class={classes!("step-bar", (s.number() <= step.number()).then(|| "reached"))}></div>
                        }) }
                    </div>
                    {
                        match step {
                            Step::Contact => self.view_contact(ctx),
                            Step::Project => self.view_project(ctx),
                            Step::Appointment => self.view_appointment(ctx),
                        }
                    }
                </div>
                <style>{MODAL_CSS}</style>
            </div>
        }
    }
}

impl ContactModal {
    fn text_input(&self, ctx: &Context<Self>, field: TextField, kind: &'static str, placeholder: &'static str) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactModalMsg::SetText(field, input.value())
        });
        html! {
            <input
                type={kind}
                class="contact-input"
                value={self.flow.form().field(field).to_string()}
                {placeholder}
                {oninput}
                required=true
            />
        }
    }

    fn next_button(&self, label: &'static str) -> Html {
        let enabled = self.flow.can_proceed() && !self.flow.form().is_submitting();
        html! {
            <button type="submit" class={classes!("contact-next", (!enabled).then(|| "disabled"))} disabled={!enabled}>
                { label }
            </button>
        }
    }

    fn back_button(&self, ctx: &Context<Self>) -> Html {
        html! {
            <button type="button" class="contact-back" onclick={ctx.link().callback(|_: MouseEvent| ContactModalMsg::Back)}>
                {"Back"}
            </button>
        }
    }

    fn view_contact(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactModalMsg::Next
        });
        html! {
            <form class="contact-step" {onsubmit}>
                <h2>{"Let's talk!"}</h2>
                { self.text_input(ctx, TextField::ContactName, "text", "Name") }
                { self.text_input(ctx, TextField::ContactEmail, "email", "Email") }
                <label class="contact-label">{"Phone number:"}</label>
                { self.text_input(ctx, TextField::ContactPhone, "tel", "+1 571-477-7222") }
                <div class="contact-actions end">
                    { self.next_button("Next") }
                </div>
            </form>
        }
    }

    fn view_project(&self, ctx: &Context<Self>) -> Html {
        let form = self.flow.form();
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactModalMsg::Next
        });
        let on_under_minimum = ctx.link().callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactModalMsg::SetUnderMinimum(input.checked())
        });
        let on_description = ctx.link().callback(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            ContactModalMsg::SetText(TextField::ProjectDescription, input.value())
        });

        html! {
            <form class="contact-step" {onsubmit}>
                <h2>{"Tell us about your project"}</h2>

                <label class="contact-label">{"What's your company name?"}</label>
                { self.text_input(ctx, TextField::CompanyName, "text", "Company name") }

                <label class="contact-label">{"What have you budgeted for this project?"}</label>
                <div class="chip-row">
                    { for BudgetBand::ALL.into_iter().map(|band| html! {
                        <button
                            type="button"
                            class={classes!("chip", (form.budget_selection() == Some(band)).then(|| "active"))}
                            onclick={ctx.link().callback(move |_: MouseEvent| ContactModalMsg::SelectBudget(band))}
                        >
                            { band.label() }
                        </button>
                    }) }
                </div>
                <label class="contact-check">
                    <input type="checkbox" checked={form.budget_under_minimum()} onchange={on_under_minimum} />
                    { UNDER_MINIMUM_LABEL }
                </label>

                <label class="contact-label">{"What services are you looking for?"}</label>
                <div class="chip-row">
                    { for Service::ALL.into_iter().map(|service| html! {
                        <button
                            type="button"
                            class={classes!("chip", form.selected_services.contains(&service).then(|| "active"))}
                            onclick={ctx.link().callback(move |_: MouseEvent| ContactModalMsg::ToggleService(service))}
                        >
                            { service.label() }
                        </button>
                    }) }
                </div>

                <label class="contact-label">{"Briefly explain your project"}</label>
                <textarea
                    class="contact-input"
                    value={form.project_description.clone()}
                    placeholder="Tell us about your project..."
                    oninput={on_description}
                />

                <div class="contact-actions">
                    { self.back_button(ctx) }
                    { self.next_button("Next") }
                </div>
            </form>
        }
    }

    fn view_appointment(&self, ctx: &Context<Self>) -> Html {
        let form = self.flow.form();
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactModalMsg::Submit
        });
        let submitting = form.submission_status() == &SubmissionStatus::Submitting;

        html! {
            <form class="contact-step" {onsubmit}>
                <h2>{"Book Your Appointment"}</h2>
                <p class="contact-sub">{"Choose a date and time that works for you"}</p>

                <label class="contact-label">{"Select a date"}</label>
                <Calendar
                    selected={form.selected_date}
                    on_select={ctx.link().callback(ContactModalMsg::SelectDate)}
                    window={self.window}
                />

                if form.selected_date.is_some() {
                    <label class="contact-label">{"Select a time"}</label>
                    <div class="slot-grid">
                        { for TimeSlot::ALL.into_iter().map(|slot| html! {
                            <button
                                type="button"
                                class={classes!("chip", (form.selected_time == Some(slot)).then(|| "active"))}
                                onclick={ctx.link().callback(move |_: MouseEvent| ContactModalMsg::SelectTime(slot))}
                            >
                                { slot.label() }
                            </button>
                        }) }
                    </div>
                }

                if let Some(message) = form.submission_error() {
                    <div class="contact-error">{ message }</div>
                }

                <div class="contact-actions">
                    { self.back_button(ctx) }
                    { self.next_button(if submitting { "Submitting..." } else { "Book Appointment" }) }
                </div>
            </form>
        }
    }
}

const MODAL_CSS: &str = r#"
.contact-overlay {
    position: fixed;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(0, 0, 0, 0.3);
    backdrop-filter: blur(12px);
    padding: 3rem;
    z-index: 99999;
}
.contact-modal {
    position: relative;
    width: 100%;
    max-width: 56rem;
    max-height: 90vh;
    overflow-y: auto;
    color: #fff;
}
.contact-close {
    position: absolute;
    top: 0;
    right: 0;
    background: none;
    border: none;
    color: #fff;
    font-size: 3rem;
    cursor: pointer;
}
.step-indicator { display: flex; gap: 0.5rem; margin-bottom: 2rem; }
.step-bar { height: 4px; flex: 1; border-radius: 999px; background: rgba(255, 255, 255, 0.2); }
.step-bar.reached { background: #fff; }
.contact-step h2 { font-family: "Times New Roman", Times, serif; font-size: 3.5rem; margin-bottom: 2rem; }
.contact-input {
    width: 100%;
    background: transparent;
    border: none;
    border-bottom: 2px solid rgba(255, 255, 255, 0.4);
    color: #fff;
    font-size: 1.75rem;
    padding-bottom: 0.75rem;
    margin-bottom: 2rem;
}
.contact-input:focus { outline: none; border-bottom-color: #fff; }
.contact-label { display: block; font-size: 1.4rem; color: #e5e5e5; margin-bottom: 1rem; }
.contact-check { display: flex; gap: 0.75rem; align-items: center; color: #ccc; margin-bottom: 2rem; }
.chip-row, .slot-grid { display: flex; flex-wrap: wrap; gap: 0.75rem; margin-bottom: 1.5rem; }
.chip {
    padding: 0.75rem 1.5rem;
    border-radius: 0.5rem;
    border: 2px solid #374151;
    background: rgba(17, 24, 39, 0.8);
    color: #fff;
    cursor: pointer;
}
.chip.active { background: #fff; color: #000; border-color: #fff; }
.contact-actions { display: flex; justify-content: space-between; padding-top: 2rem; }
.contact-actions.end { justify-content: flex-end; }
.contact-next, .contact-back { padding: 1rem 2rem; border-radius: 999px; border: none; font-size: 1.1rem; cursor: pointer; }
.contact-next { background: #fff; color: #000; }
.contact-next.disabled { background: #4b5563; color: #9ca3af; cursor: not-allowed; }
.contact-back { background: rgba(255, 255, 255, 0.1); color: #fff; }
.contact-error {
    background: rgba(239, 68, 68, 0.2);
    border: 1px solid rgba(239, 68, 68, 0.5);
    border-radius: 0.5rem;
    padding: 1rem;
    color: #fecaca;
}
.calendar { max-width: 40rem; margin-bottom: 2rem; }
.calendar-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem; }
.calendar-nav { background: none; border: none; color: #fff; font-size: 2rem; cursor: pointer; }
.calendar-grid { display: grid; grid-template-columns: repeat(7, 1fr); gap: 0.25rem; }
.calendar-day-name { text-align: center; color: #9ca3af; font-size: 0.9rem; }
.calendar-cell { aspect-ratio: 1; border: none; border-radius: 0.5rem; background: rgba(255, 255, 255, 0.05); color: #fff; cursor: pointer; }
.calendar-cell.empty { background: none; }
.calendar-cell.today { outline: 1px solid rgba(255, 255, 255, 0.5); }
.calendar-cell.selected { background: #fff; color: #000; }
.calendar-cell:disabled { color: #4b5563; cursor: not-allowed; }
"#;
