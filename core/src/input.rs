use std::collections::HashMap;

use anyhow::{anyhow, Result};
use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::model::goal::Goal;
use crate::model::record::StudyRecord;
use crate::time::{parse_hours, parse_study_date};

pub const RECORD_KEYS: &[&str] = &["date", "hours"];
pub const GOAL_KEYS: &[&str] = &["hours"];

/// Rejections shown to the user. The form stays as typed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormError {
    #[error("Please enter the date, subject and study hours.")]
    MissingRecordFields,
    #[error("Please enter a goal and target hours.")]
    MissingGoalFields,
    #[error("Invalid date '{0}'.")]
    InvalidDate(String),
    #[error("Invalid hours '{0}'.")]
    InvalidHours(String),
    #[error("Hours must be greater than zero, got {0}.")]
    NonPositiveHours(f64),
}

/// Raw text of the record-entry form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordForm {
    pub date: String,
    pub subject: String,
    pub hours: String,
}

impl RecordForm {
    pub fn validate(&self, today: NaiveDate) -> Result<StudyRecord, FormError> {
        let date = self.date.trim();
        let subject = self.subject.trim();
        let hours = self.hours.trim();
        if date.is_empty() || subject.is_empty() || hours.is_empty() {
            return Err(FormError::MissingRecordFields);
        }

        let date = match parse_study_date(date, today) {
            Ok(d) if (1..=9999).contains(&d.year()) => d,
            _ => return Err(FormError::InvalidDate(date.to_string())),
        };
        let hours = positive_hours(hours)?;
        Ok(StudyRecord::new(date, subject, hours))
    }
}

/// Raw text of the goal-entry form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalForm {
    pub goal: String,
    pub goal_hours: String,
}

impl GoalForm {
    pub fn validate(&self) -> Result<Goal, FormError> {
        let goal = self.goal.trim();
        let hours = self.goal_hours.trim();
        if goal.is_empty() || hours.is_empty() {
            return Err(FormError::MissingGoalFields);
        }
        Ok(Goal::new(goal, positive_hours(hours)?))
    }
}

fn positive_hours(raw: &str) -> Result<f64, FormError> {
    let hours = parse_hours(raw).map_err(|_| FormError::InvalidHours(raw.to_string()))?;
    if hours <= 0.0 {
        return Err(FormError::NonPositiveHours(hours));
    }
    Ok(hours)
}

/// A one-line entry such as `Rust book date:yes hours:1.5`.
#[derive(Debug, PartialEq)]
pub struct EntryLine {
    pub text: String,
    pub fields: HashMap<String, String>,
}

/// Splits words into free text and `key:value` fields. Keys may be abbreviated
/// to any unambiguous prefix of `known_keys`.
pub fn parse_entry(args: &[String], known_keys: &[&str]) -> Result<EntryLine> {
    let mut text_parts = Vec::new();
    let mut fields = HashMap::new();

    for arg in args {
        if let Some((key, value)) = arg.split_once(':') {
            if !key.is_empty() && !looks_like_weekday_count(key) {
                let full_key = expand_key(key, known_keys)?;
                fields.insert(full_key, value.to_string());
                continue;
            }
        }
        text_parts.push(arg.as_str());
    }

    Ok(EntryLine {
        text: text_parts.join(" "),
        fields,
    })
}

// "2:fri" is a date value, not a field.
fn looks_like_weekday_count(key: &str) -> bool {
    key.chars().all(|c| c.is_ascii_digit())
}

pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    // 1. Exact match
    if candidates.contains(&key) {
        return Ok(key.to_string());
    }

    // 2. Prefix match
    let matches: Vec<&str> = candidates
        .iter()
        .filter(|&&c| c.starts_with(key))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].to_string()),
        0 => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}

impl EntryLine {
    /// Missing `date:` means today.
    pub fn into_record_form(self) -> RecordForm {
        RecordForm {
            date: self
                .fields
                .get("date")
                .cloned()
                .unwrap_or_else(|| "today".to_string()),
            hours: self.fields.get("hours").cloned().unwrap_or_default(),
            subject: self.text,
        }
    }

    pub fn into_goal_form(self) -> GoalForm {
        GoalForm {
            goal_hours: self.fields.get("hours").cloned().unwrap_or_default(),
            goal: self.text,
        }
    }
}
