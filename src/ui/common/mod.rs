//! Common reusable UI components shared across sections.

pub mod form;
pub mod message;
pub mod spinner;

pub use form::{FormField, SelectField, TextAreaField};
pub use message::ErrorMessage;
pub use spinner::InlineSpinner;
