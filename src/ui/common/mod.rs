//! Common reusable UI components
//!
//! Buttons, form fields and the modal shell shared by the pages and the
//! cookie consent dialogs.

pub mod button;
pub mod form;
pub mod modal;

pub use button::{Button, ButtonVariant};
pub use form::{CheckboxField, FormField, SelectField};
pub use modal::BaseModal;
