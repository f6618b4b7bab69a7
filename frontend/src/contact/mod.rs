//! The three-step contact intake flow: form data, per-step validation, the
//! step state machine, submission to the relay and the modal that drives it.

pub mod calendar;
pub mod flow;
pub mod form;
pub mod modal;
pub mod submit;
pub mod validate;

pub use modal::ContactModal;

use yew::prelude::*;

/// Shared handle pages use to open the intake modal owned by the app shell.
#[derive(Clone, PartialEq)]
pub struct ContactOpener(pub Callback<()>);

/// Callback that opens the contact modal, or does nothing outside the shell.
#[hook]
pub fn use_contact_opener() -> Callback<()> {
    use_context::<ContactOpener>()
        .map(|opener| opener.0)
        .unwrap_or_else(|| Callback::from(|_| ()))
}
