//! Core types for the fortune backend contract.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TypesError;

/// Gender of the person the reading is for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    /// Male (default).
    #[default]
    Male,
    /// Female.
    Female,
}

impl Gender {
    /// All genders in display order.
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// The wire value ("MALE" / "FEMALE").
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        }
    }

    /// Korean label shown in forms.
    pub fn description(&self) -> &'static str {
        match self {
            Gender::Male => "남성",
            Gender::Female => "여성",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MALE" | "M" => Ok(Gender::Male),
            "FEMALE" | "F" => Ok(Gender::Female),
            _ => Err(TypesError::UnknownGender {
                value: s.to_string(),
            }),
        }
    }
}

/// Category of reading requested from the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FortuneType {
    /// Traditional four-pillars reading.
    #[default]
    Saju,
    /// Reading for the current day.
    Daily,
    /// Tarot reading (not served by the backend yet).
    Tarot,
}

impl FortuneType {
    /// All fortune types in catalog order.
    pub const ALL: [FortuneType; 3] = [FortuneType::Saju, FortuneType::Tarot, FortuneType::Daily];

    /// The wire value ("saju" / "daily" / "tarot").
    pub fn as_str(&self) -> &'static str {
        match self {
            FortuneType::Saju => "saju",
            FortuneType::Daily => "daily",
            FortuneType::Tarot => "tarot",
        }
    }

    /// Korean name of the reading type.
    pub fn display_name(&self) -> &'static str {
        match self {
            FortuneType::Saju => "사주",
            FortuneType::Daily => "오늘의 운세",
            FortuneType::Tarot => "타로",
        }
    }
}

impl fmt::Display for FortuneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FortuneType {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "saju" => Ok(FortuneType::Saju),
            "daily" => Ok(FortuneType::Daily),
            "tarot" => Ok(FortuneType::Tarot),
            _ => Err(TypesError::UnknownFortuneType {
                value: s.to_string(),
            }),
        }
    }
}

/// Request body for `POST /fortune/analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FortuneRequest {
    /// Birth date in `YYYY-MM-DD` form.
    pub birth_date: String,
    /// Birth time in `HH:mm` form.
    pub birth_time: String,
    pub gender: Gender,
    pub fortune_type: FortuneType,
}

/// Birth info echoed back by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthInfoSummary {
    pub birth_date: String,
    pub birth_time: String,
    pub gender: String,
}

/// A successful reading.
///
/// The creation time arrives as `timestamp` from some backend versions and
/// as `createdAt` from others; both decode into [`FortuneResponse::timestamp`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FortuneResponse {
    /// Free-text reading, sections marked with `## ` headings.
    pub result: String,
    #[serde(default, alias = "createdAt")]
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fortune_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_info: Option<BirthInfoSummary>,
}

impl FortuneResponse {
    pub fn new(result: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            result: result.into(),
            timestamp: timestamp.into(),
            fortune_type: None,
            birth_info: None,
        }
    }

    /// Parse the creation time, accepting RFC 3339 or an offset-less local
    /// date-time such as `2024-05-01T10:15:30.123`.
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        let raw = self.timestamp.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_local());
        }
        raw.parse::<NaiveDateTime>().ok()
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_up(&self) -> bool {
        self.status.eq_ignore_ascii_case("up") || self.status.eq_ignore_ascii_case("ok")
    }
}
