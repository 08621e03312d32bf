use std::fmt;

use super::validation::ValidationError;

/// Fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    BirthDate,
    BirthTime,
    /// Reserved; no check produces a gender error today.
    Gender,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::BirthDate, FormField::BirthTime, FormField::Gender];

    /// Key used by the request payload for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::BirthDate => "birthDate",
            FormField::BirthTime => "birthTime",
            FormField::Gender => "gender",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the last check for one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldStatus {
    #[default]
    Ok,
    Invalid(ValidationError),
}

impl FieldStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, FieldStatus::Ok)
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            FieldStatus::Ok => None,
            FieldStatus::Invalid(err) => Some(err),
        }
    }
}

impl<T> From<Result<T, ValidationError>> for FieldStatus {
    fn from(result: Result<T, ValidationError>) -> Self {
        match result {
            Ok(_) => FieldStatus::Ok,
            Err(err) => FieldStatus::Invalid(err),
        }
    }
}

/// Per-field statuses of a birth form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub birth_date: FieldStatus,
    pub birth_time: FieldStatus,
    pub gender: FieldStatus,
}

impl FormErrors {
    pub fn get(&self, field: FormField) -> &FieldStatus {
        match field {
            FormField::BirthDate => &self.birth_date,
            FormField::BirthTime => &self.birth_time,
            FormField::Gender => &self.gender,
        }
    }

    pub fn clear(&mut self, field: FormField) {
        *self.slot_mut(field) = FieldStatus::Ok;
    }

    pub fn set(&mut self, field: FormField, status: FieldStatus) {
        *self.slot_mut(field) = status;
    }

    /// True when no field is invalid.
    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|field| self.get(*field).is_ok())
    }

    /// Invalid fields with their errors, in field order.
    pub fn invalid(&self) -> impl Iterator<Item = (FormField, &ValidationError)> + '_ {
        FormField::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).error().map(|err| (field, err)))
    }

    fn slot_mut(&mut self, field: FormField) -> &mut FieldStatus {
        match field {
            FormField::BirthDate => &mut self.birth_date,
            FormField::BirthTime => &mut self.birth_time,
            FormField::Gender => &mut self.gender,
        }
    }
}
