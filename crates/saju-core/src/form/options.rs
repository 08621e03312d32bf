//! Choice lists offered by the birth-info form.

/// Number of years offered, counting back from the current year.
pub const YEAR_OPTION_COUNT: i32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Value stored in the form.
    pub value: String,
    /// Korean label shown to the user.
    pub label: String,
}

impl SelectOption {
    fn new(value: String, label: String) -> Self {
        Self { value, label }
    }
}

/// Years from `current_year` downwards, newest first.
pub fn year_options(current_year: i32) -> Vec<SelectOption> {
    (0..YEAR_OPTION_COUNT)
        .map(|offset| current_year - offset)
        .map(|year| SelectOption::new(year.to_string(), format!("{year}년")))
        .collect()
}

pub fn month_options() -> Vec<SelectOption> {
    padded_range(1..=12, "월")
}

pub fn day_options() -> Vec<SelectOption> {
    padded_range(1..=31, "일")
}

pub fn hour_options() -> Vec<SelectOption> {
    padded_range(0..=23, "시")
}

pub fn minute_options() -> Vec<SelectOption> {
    padded_range(0..=59, "분")
}

fn padded_range(range: std::ops::RangeInclusive<u32>, unit: &str) -> Vec<SelectOption> {
    range
        .map(|n| SelectOption::new(format!("{n:02}"), format!("{n}{unit}")))
        .collect()
}
