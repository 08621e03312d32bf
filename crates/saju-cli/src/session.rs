//! One analyze session: collect a valid birth form, submit it, show the reading.

use anyhow::{anyhow, bail, Result};
use chrono::{Datelike, Local};
use dialoguer::{theme::ColorfulTheme, Confirm, Select};
use saju_client::{ClientError, FortuneClient, FortuneClientFactory};
use saju_core::catalog::{card, unavailable_reason};
use saju_core::form::options::{day_options, hour_options, minute_options, month_options, year_options};
use saju_core::form::SelectOption;
use saju_core::{BirthForm, FormField, SajuConfig, SectionParser};
use saju_types::{FortuneRequest, FortuneResponse, FortuneType, Gender};
use std::future::Future;

use crate::viewer;

/// Field values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct FormPrefill {
    pub year: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
    pub hour: Option<String>,
    pub minute: Option<String>,
    pub gender: Option<Gender>,
}

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub fortune_type: FortuneType,
    pub prefill: FormPrefill,
    pub expand_all: bool,
    /// Prompt for missing or invalid fields instead of failing.
    pub interactive: bool,
}

#[derive(Debug)]
pub enum Submission {
    Completed(FortuneResponse),
    /// Cancelled before the response arrived; a late response is dropped.
    Cancelled,
}

pub fn apply_prefill(form: &mut BirthForm, prefill: &FormPrefill) {
    if let Some(year) = &prefill.year {
        form.set_year(year.trim());
    }
    if let Some(month) = &prefill.month {
        form.set_month(month.trim());
    }
    if let Some(day) = &prefill.day {
        form.set_day(day.trim());
    }
    if let Some(hour) = &prefill.hour {
        form.set_hour(hour.trim());
    }
    if let Some(minute) = &prefill.minute {
        form.set_minute(minute.trim());
    }
    if let Some(gender) = prefill.gender {
        form.set_gender(gender);
    }
}

/// Index of the option matching `current`, comparing numerically so that
/// "5" selects "05".
pub fn default_index(options: &[SelectOption], current: &str) -> usize {
    let current = current.trim();
    let numeric = current.parse::<u32>().ok();
    options
        .iter()
        .position(|option| {
            option.value == current
                || (numeric.is_some() && option.value.parse::<u32>().ok() == numeric)
        })
        .unwrap_or(0)
}

fn select(prompt: &str, options: &[SelectOption], current: &str) -> Result<String> {
    let labels: Vec<&str> = options.iter().map(|option| option.label.as_str()).collect();
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&labels)
        .default(default_index(options, current))
        .max_length(12)
        .interact()?;
    Ok(options[index].value.clone())
}

fn prompt_date(form: &mut BirthForm, only_missing: bool) -> Result<()> {
    let input = form.input().clone();
    if !only_missing || input.year.is_empty() {
        let year = select("출생 년도", &year_options(Local::now().year()), &input.year)?;
        form.set_year(year);
    }
    if !only_missing || input.month.is_empty() {
        let month = select("출생 월", &month_options(), &input.month)?;
        form.set_month(month);
    }
    if !only_missing || input.day.is_empty() {
        let day = select("출생 일", &day_options(), &input.day)?;
        form.set_day(day);
    }
    Ok(())
}

fn prompt_time(form: &mut BirthForm, only_missing: bool) -> Result<()> {
    let input = form.input().clone();
    if !only_missing || input.hour.is_empty() {
        let hour = select("출생 시", &hour_options(), &input.hour)?;
        form.set_hour(hour);
    }
    if !only_missing || input.minute.is_empty() {
        let minute = select("출생 분", &minute_options(), &input.minute)?;
        form.set_minute(minute);
    }
    Ok(())
}

fn prompt_gender(form: &mut BirthForm) -> Result<()> {
    let labels: Vec<&str> = Gender::ALL.iter().map(Gender::description).collect();
    let current = Gender::ALL
        .iter()
        .position(|gender| *gender == form.gender())
        .unwrap_or(0);
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("성별")
        .items(&labels)
        .default(current)
        .interact()?;
    form.set_gender(Gender::ALL[index]);
    Ok(())
}

fn print_errors(form: &BirthForm) {
    for (field, err) in form.errors().invalid() {
        eprintln!("  ✗ {}", err);
        log::debug!("{} rejected: {:?}", field, err.kind());
    }
}

/// Validate until the form passes, re-prompting only the groups that failed.
/// Without a terminal the first failure ends the session.
pub fn collect_valid_form(form: &mut BirthForm, interactive: bool) -> Result<()> {
    loop {
        if form.validate() {
            return Ok(());
        }

        print_errors(form);
        if !interactive {
            let message = form
                .first_error()
                .map(|(_, err)| err.to_string())
                .unwrap_or_default();
            bail!(message);
        }

        let failed: Vec<FormField> = form.errors().invalid().map(|(field, _)| field).collect();
        for field in failed {
            match field {
                FormField::BirthDate => prompt_date(form, false)?,
                FormField::BirthTime => prompt_time(form, false)?,
                FormField::Gender => prompt_gender(form)?,
            }
        }
    }
}

/// Send one request, abandoning the wait once `cancel` resolves.
pub async fn submit<F>(
    client: &dyn FortuneClient,
    request: &FortuneRequest,
    cancel: F,
) -> Result<Submission, ClientError>
where
    F: Future<Output = ()>,
{
    tokio::select! {
        result = client.analyze(request) => result.map(Submission::Completed),
        _ = cancel => {
            log::info!("Submission cancelled, discarding pending response");
            Ok(Submission::Cancelled)
        }
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(true)
        .interact()?)
}

pub async fn run(config: &SajuConfig, options: SessionOptions) -> Result<()> {
    let fortune_type = options.fortune_type;
    if let Some(reason) = unavailable_reason(fortune_type) {
        bail!(reason);
    }

    let card = card(fortune_type);
    println!("{} {}", card.icon, card.title);
    println!("{}\n", card.description);

    let mut form = BirthForm::new(fortune_type);
    apply_prefill(&mut form, &options.prefill);

    if options.interactive {
        prompt_date(&mut form, true)?;
        prompt_time(&mut form, true)?;
        if options.prefill.gender.is_none() {
            prompt_gender(&mut form)?;
        }
    }

    let client = FortuneClientFactory::create_http_client(config.api.base_url.clone(), config.timeout());
    let parser = SectionParser::for_fortune_type(fortune_type);

    loop {
        collect_valid_form(&mut form, options.interactive)?;
        let request = form
            .to_request()
            .ok_or_else(|| anyhow!("생년월일과 생시를 확인해주세요"))?;

        println!("{} 해석 중입니다... (Ctrl-C로 취소)", fortune_type.display_name());
        let ctrl_c = async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                log::warn!("Cannot listen for Ctrl-C: {}", err);
                std::future::pending::<()>().await;
            }
        };
        match submit(client.as_ref(), &request, ctrl_c).await {
            Ok(Submission::Completed(response)) => {
                let sections = parser.parse(&response.result);
                log::info!("Received reading with {} sections", sections.len());

                if options.expand_all || !options.interactive {
                    return viewer::print_expanded(fortune_type, parser.table(), &response, &sections);
                }
                if !viewer::browse(fortune_type, parser.table(), &response, &sections)? {
                    return Ok(());
                }
                prompt_date(&mut form, false)?;
                prompt_time(&mut form, false)?;
                prompt_gender(&mut form)?;
            }
            Ok(Submission::Cancelled) => {
                println!("요청을 취소했습니다.");
                if !options.interactive || !confirm("다시 요청하시겠습니까?")? {
                    return Ok(());
                }
            }
            Err(err) => {
                log::error!("Fortune request failed: {}", err);
                let message = err.user_message(fortune_type);
                if !options.interactive {
                    bail!(message);
                }
                eprintln!("{}", message);
                if !confirm("다시 시도하시겠습니까?")? {
                    return Ok(());
                }
            }
        }
    }
}
