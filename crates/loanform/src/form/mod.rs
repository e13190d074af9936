//! The form core: field model, editable state, encoding, and the controller
//! tying them to the scoring exchange.

pub mod controller;
pub mod encode;
pub mod field;
pub mod state;

pub use controller::FormController;
pub use encode::EncodeError;
pub use field::{ChoiceError, CodeOption, Field, FieldKind};
pub use state::{ApplicantInput, Outcome, FAILURE_MESSAGE};
