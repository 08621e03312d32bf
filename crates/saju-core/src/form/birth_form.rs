use chrono::{Local, NaiveDate};
use saju_types::{FortuneRequest, FortuneType, Gender};

use super::status::{FieldStatus, FormErrors, FormField};
use super::validation::{parse_number, validate_date, validate_time, ValidationError};

/// Raw field values exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BirthInput {
    pub year: String,
    pub month: String,
    pub day: String,
    pub hour: String,
    pub minute: String,
    pub gender: Gender,
}

/// State of one birth-info form session.
///
/// Setters store values verbatim and clear the error of the group they
/// belong to; [`BirthForm::validate`] recomputes every status at once.
#[derive(Debug, Clone)]
pub struct BirthForm {
    input: BirthInput,
    fortune_type: FortuneType,
    errors: FormErrors,
}

impl BirthForm {
    pub fn new(fortune_type: FortuneType) -> Self {
        Self {
            input: BirthInput::default(),
            fortune_type,
            errors: FormErrors::default(),
        }
    }

    pub fn input(&self) -> &BirthInput {
        &self.input
    }

    pub fn fortune_type(&self) -> FortuneType {
        self.fortune_type
    }

    pub fn gender(&self) -> Gender {
        self.input.gender
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Message of the current error on `field`, if any.
    pub fn error_message(&self, field: FormField) -> Option<String> {
        self.errors.get(field).error().map(ToString::to_string)
    }

    pub fn set_year(&mut self, value: impl Into<String>) {
        self.input.year = value.into();
        self.errors.clear(FormField::BirthDate);
    }

    pub fn set_month(&mut self, value: impl Into<String>) {
        self.input.month = value.into();
        self.errors.clear(FormField::BirthDate);
    }

    pub fn set_day(&mut self, value: impl Into<String>) {
        self.input.day = value.into();
        self.errors.clear(FormField::BirthDate);
    }

    pub fn set_hour(&mut self, value: impl Into<String>) {
        self.input.hour = value.into();
        self.errors.clear(FormField::BirthTime);
    }

    pub fn set_minute(&mut self, value: impl Into<String>) {
        self.input.minute = value.into();
        self.errors.clear(FormField::BirthTime);
    }

    pub fn set_gender(&mut self, value: Gender) {
        self.input.gender = value;
        self.errors.clear(FormField::Gender);
    }

    pub fn set_fortune_type(&mut self, value: FortuneType) {
        self.fortune_type = value;
    }

    /// Clear every field and error and start over with `fortune_type`.
    pub fn reset(&mut self, fortune_type: FortuneType) {
        *self = Self::new(fortune_type);
    }

    /// Validate against today's date on the local clock.
    pub fn validate(&mut self) -> bool {
        self.validate_on(Local::now().date_naive())
    }

    /// Validate with an explicit "today"; returns true when no field is invalid.
    pub fn validate_on(&mut self, today: NaiveDate) -> bool {
        let date = validate_date(&self.input.year, &self.input.month, &self.input.day, today);
        let time = validate_time(&self.input.hour, &self.input.minute);

        self.errors = FormErrors {
            birth_date: FieldStatus::from(date),
            birth_time: FieldStatus::from(time),
            gender: FieldStatus::Ok,
        };

        for (field, err) in self.errors.invalid() {
            log::debug!("Birth form field {} invalid: {}", field, err);
        }

        self.errors.is_empty()
    }

    /// First error of the last validation, in field order.
    pub fn first_error(&self) -> Option<(FormField, &ValidationError)> {
        self.errors.invalid().next()
    }

    /// `YYYY-MM-DD`, once year, month and day are all present and numeric.
    pub fn birth_date(&self) -> Option<String> {
        let BirthInput { year, month, day, .. } = &self.input;
        if year.is_empty() || month.is_empty() || day.is_empty() {
            return None;
        }
        Some(format!(
            "{:04}-{:02}-{:02}",
            parse_number(year)?,
            parse_number(month)?,
            parse_number(day)?
        ))
    }

    /// `HH:mm`, once hour and minute are both present and numeric.
    pub fn birth_time(&self) -> Option<String> {
        let BirthInput { hour, minute, .. } = &self.input;
        if hour.is_empty() || minute.is_empty() {
            return None;
        }
        Some(format!("{:02}:{:02}", parse_number(hour)?, parse_number(minute)?))
    }

    /// Request payload for the backend. Call after a successful validation.
    pub fn to_request(&self) -> Option<FortuneRequest> {
        Some(FortuneRequest {
            birth_date: self.birth_date()?,
            birth_time: self.birth_time()?,
            gender: self.input.gender,
            fortune_type: self.fortune_type,
        })
    }
}

impl Default for BirthForm {
    fn default() -> Self {
        Self::new(FortuneType::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::ValidationErrorKind;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn filled_form() -> BirthForm {
        let mut form = BirthForm::new(FortuneType::Saju);
        form.set_year("1990");
        form.set_month("05");
        form.set_day("03");
        form.set_hour("14");
        form.set_minute("30");
        form
    }

    #[test]
    fn test_to_request_after_validation() {
        let mut form = filled_form();
        assert!(form.validate_on(today()));
        assert!(form.errors().is_empty());

        let request = form.to_request().unwrap();
        assert_eq!(
            request,
            FortuneRequest {
                birth_date: "1990-05-03".to_string(),
                birth_time: "14:30".to_string(),
                gender: Gender::Male,
                fortune_type: FortuneType::Saju,
            }
        );
    }

    #[test]
    fn test_to_request_uses_current_fortune_type() {
        let mut form = filled_form();
        form.set_fortune_type(FortuneType::Daily);
        form.set_gender(Gender::Female);
        assert!(form.validate_on(today()));

        let request = form.to_request().unwrap();
        assert_eq!(request.fortune_type, FortuneType::Daily);
        assert_eq!(request.gender, Gender::Female);
        assert_eq!(form.input().year, "1990");
    }

    #[test]
    fn test_composites_only_when_group_complete() {
        let mut form = BirthForm::new(FortuneType::Saju);
        form.set_year("1990");
        form.set_month("5");
        assert!(form.birth_date().is_none());
        assert!(form.to_request().is_none());

        form.set_day("3");
        assert_eq!(form.birth_date().as_deref(), Some("1990-05-03"));
        assert!(form.birth_time().is_none());

        form.set_hour("7");
        form.set_minute("05");
        assert_eq!(form.birth_time().as_deref(), Some("07:05"));
    }

    #[test]
    fn test_validate_records_one_error_per_group() {
        let mut form = BirthForm::new(FortuneType::Saju);
        form.set_year("1800");
        form.set_month("13");
        form.set_day("40");
        form.set_hour("25");
        form.set_minute("61");

        assert!(!form.validate_on(today()));
        assert_eq!(
            form.errors().birth_date,
            FieldStatus::Invalid(ValidationError::YearOutOfRange { max_year: 2024 })
        );
        assert_eq!(
            form.errors().birth_time,
            FieldStatus::Invalid(ValidationError::HourOutOfRange)
        );
        assert!(form.errors().gender.is_ok());
        assert_eq!(form.errors().invalid().count(), 2);
    }

    #[test]
    fn test_empty_form_reports_missing_fields() {
        let mut form = BirthForm::new(FortuneType::Saju);
        assert!(!form.validate_on(today()));
        assert_eq!(
            form.error_message(FormField::BirthDate).as_deref(),
            Some("생년월일을 모두 입력해주세요")
        );
        assert_eq!(
            form.error_message(FormField::BirthTime).as_deref(),
            Some("생시를 모두 입력해주세요")
        );
        assert_eq!(
            form.first_error().map(|(field, err)| (field, err.kind())),
            Some((FormField::BirthDate, ValidationErrorKind::MissingField))
        );
    }

    #[test]
    fn test_setters_clear_only_their_group() {
        let mut form = BirthForm::new(FortuneType::Saju);
        assert!(!form.validate_on(today()));

        form.set_day("01");
        assert!(form.errors().birth_date.is_ok());
        assert!(!form.errors().birth_time.is_ok());

        form.set_minute("00");
        assert!(form.errors().birth_time.is_ok());
    }

    #[test]
    fn test_revalidation_drops_fixed_errors() {
        let mut form = filled_form();
        form.set_day("32");
        assert!(!form.validate_on(today()));
        assert!(!form.errors().birth_date.is_ok());

        form.set_day("31");
        assert!(form.validate_on(today()));
        assert!(form.errors().is_empty());
        assert!(form.first_error().is_none());
    }

    #[test]
    fn test_future_date_rejected() {
        let mut form = filled_form();
        form.set_year("2024");
        form.set_month("06");
        form.set_day("16");
        assert!(!form.validate_on(today()));
        assert_eq!(
            form.errors().birth_date,
            FieldStatus::Invalid(ValidationError::FutureDate)
        );

        form.set_day("15");
        assert!(form.validate_on(today()));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = filled_form();
        form.set_gender(Gender::Female);
        form.set_day("99");
        assert!(!form.validate_on(today()));

        form.reset(FortuneType::Daily);
        assert_eq!(form.input(), &BirthInput::default());
        assert_eq!(form.gender(), Gender::Male);
        assert_eq!(form.fortune_type(), FortuneType::Daily);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_validate_uses_local_clock() {
        let mut form = filled_form();
        assert!(form.validate());
    }
}
