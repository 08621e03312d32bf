//! Birth-info form: field state, validation and request derivation
//!
//! A [`BirthForm`] is created per form session and owns the raw strings the
//! user typed or picked. Date and time are validated as two groups with
//! ordered, short-circuiting checks; each group ends up as a
//! [`FieldStatus`] rather than an optional message so that a cleared error
//! and a never-set error are the same value.

pub mod birth_form;
pub mod options;
pub mod status;
pub mod validation;

pub use birth_form::{BirthForm, BirthInput};
pub use options::SelectOption;
pub use status::{FieldStatus, FormErrors, FormField};
pub use validation::{
    days_in_month, is_leap_year, validate_date, validate_time, ValidationError,
    ValidationErrorKind, MIN_BIRTH_YEAR,
};
