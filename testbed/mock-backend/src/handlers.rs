use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use saju_types::{ErrorResponse, FortuneType, Gender};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;

use crate::fixtures::reading_for;
use crate::server::MockState;

pub const ANALYZE_PATH: &str = "/api/fortune/analyze";

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());
static TIME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}:\d{2}$").unwrap());

/// Request body as received, before any field is trusted.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzePayload {
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub birth_time: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub fortune_type: Option<String>,
}

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "UP",
        "service": "fortune-mock"
    }))
}

pub async fn analyze_fortune(State(state): State<MockState>, Json(body): Json<Value>) -> Response {
    log::debug!("Mock backend received request: {}", body);
    state.record(body.clone());

    if let Some(delay) = state.config.delay {
        tokio::time::sleep(delay).await;
    }

    if let Some(forced) = &state.config.forced_error {
        log::info!("Mock backend returning forced HTTP {}", forced.status);
        return forced.clone().into_response();
    }

    let payload: AnalyzePayload = match serde_json::from_value(body) {
        Ok(payload) => payload,
        Err(e) => {
            log::warn!("Unreadable request body: {}", e);
            return unexpected_error();
        }
    };

    let field_errors = field_errors(&payload);
    if !field_errors.is_empty() {
        let message = format!("입력값 검증에 실패했습니다: {}", join_field_errors(&field_errors));
        log::warn!("Validation error: {}", message);
        return error_response(StatusCode::BAD_REQUEST, "Validation Failed", message);
    }

    // Present after field validation.
    let birth_date = payload.birth_date.unwrap_or_default();
    let birth_time = payload.birth_time.unwrap_or_default();
    let raw_gender = payload.gender.unwrap_or_default();
    let raw_type = payload.fortune_type.unwrap_or_default();

    let (gender, fortune_type) = match (raw_gender.parse::<Gender>(), raw_type.parse::<FortuneType>()) {
        (Ok(gender), Ok(fortune_type)) => (gender, fortune_type),
        _ => {
            log::warn!("Unknown enum value: gender={}, fortuneType={}", raw_gender, raw_type);
            return unexpected_error();
        }
    };

    if let Err(message) = check_birth_date(&birth_date, Local::now().date_naive()) {
        log::warn!("Business logic validation error: {}", message);
        return error_response(StatusCode::BAD_REQUEST, "Invalid Argument", message);
    }

    let Some(reading) = reading_for(fortune_type) else {
        log::error!("{} 서비스는 준비 중입니다.", fortune_type.display_name());
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            "서버 내부 오류가 발생했습니다.",
        );
    };

    Json(json!({
        "fortuneType": fortune_type.display_name(),
        "result": reading,
        "birthInfo": {
            "birthDate": birth_date,
            "birthTime": birth_time,
            "gender": gender.as_str()
        },
        "createdAt": Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
    }))
    .into_response()
}

/// Per-field constraint violations, keyed by wire field name.
pub fn field_errors(payload: &AnalyzePayload) -> BTreeMap<&'static str, &'static str> {
    let mut errors = BTreeMap::new();

    match payload.birth_date.as_deref().map(str::trim) {
        None | Some("") => {
            errors.insert("birthDate", "생년월일은 필수입니다");
        }
        Some(date) if !DATE_PATTERN.is_match(date) => {
            errors.insert("birthDate", "생년월일은 YYYY-MM-DD 형식이어야 합니다");
        }
        _ => {}
    }

    match payload.birth_time.as_deref().map(str::trim) {
        None | Some("") => {
            errors.insert("birthTime", "생시는 필수입니다");
        }
        Some(time) if !TIME_PATTERN.is_match(time) => {
            errors.insert("birthTime", "생시는 HH:mm 형식이어야 합니다");
        }
        _ => {}
    }

    if payload.gender.is_none() {
        errors.insert("gender", "성별은 필수입니다");
    }
    if payload.fortune_type.is_none() {
        errors.insert("fortuneType", "운세 타입은 필수입니다");
    }

    errors
}

/// Calendar checks on a date that already matched the pattern.
pub fn check_birth_date(date: &str, today: NaiveDate) -> Result<NaiveDate, &'static str> {
    let birth_date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| "생년월일 형식이 올바르지 않습니다. YYYY-MM-DD 형식으로 입력해주세요.")?;

    if birth_date > today {
        return Err("생년월일이 미래 날짜일 수 없습니다.");
    }
    if birth_date.year() < 1900 {
        return Err("1900년 이후 출생자만 해석 가능합니다.");
    }
    Ok(birth_date)
}

fn join_field_errors(errors: &BTreeMap<&'static str, &'static str>) -> String {
    let joined = errors
        .iter()
        .map(|(field, message)| format!("{}={}", field, message))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", joined)
}

fn unexpected_error() -> Response {
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error",
        "예상치 못한 오류가 발생했습니다.",
    )
}

pub fn error_response(status: StatusCode, error: &str, message: impl Into<String>) -> Response {
    let body = ErrorResponse::new(status.as_u16(), error, message)
        .with_path(ANALYZE_PATH)
        .with_timestamp(Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S%.3f").to_string());
    (status, Json(body)).into_response()
}
