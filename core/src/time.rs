use anyhow::{anyhow, Result};
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a study duration into hours: `1.5`, `2h`, `90m`.
pub fn parse_hours(input: &str) -> Result<f64> {
    let input = input.trim();
    if input.is_empty() {
        return Err(anyhow!("Empty hours string"));
    }

    let lower = input.to_lowercase();
    let (num_str, divisor) = if let Some(n) = lower.strip_suffix('m') {
        (n, 60.0)
    } else if let Some(n) = lower.strip_suffix('h') {
        (n, 1.0)
    } else {
        (lower.as_str(), 1.0)
    };

    let num: f64 = num_str
        .trim()
        .parse()
        .map_err(|_| anyhow!("Invalid hours: {}", input))?;
    if !num.is_finite() {
        return Err(anyhow!("Invalid hours: {}", input));
    }
    Ok(num / divisor)
}

/// Parses the date of a study session relative to `today`.
///
/// Sessions are logged after the fact, so every relative form looks backwards:
/// `today`, `yesterday`, `-3d`, `fri` (the most recent Friday, today included),
/// `2:fri` (the one before that). `YYYY-MM-DD` is accepted as is.
pub fn parse_study_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Err(anyhow!("Empty date string"));
    }

    // 1. Reserved keywords
    match input.to_lowercase().as_str() {
        "today" | "tod" => return Ok(today),
        "yesterday" | "yes" => return days_before(today, Duration::try_days(1), input),
        _ => {}
    }

    // 2. Relative format (-Nd, -Nw)
    if let Some(rest) = input.strip_prefix('-') {
        if let Some((split, unit)) = rest.char_indices().next_back() {
            if split > 0 {
                let count: i64 = rest[..split]
                    .parse()
                    .map_err(|_| anyhow!("Invalid relative format: {}", input))?;
                let offset = match unit {
                    'd' => Duration::try_days(count),
                    'w' => Duration::try_weeks(count),
                    _ => return Err(anyhow!("Unknown unit in relative date: {}", unit)),
                };
                return days_before(today, offset, input);
            }
        }
    }

    // 3. Standard format
    if let Ok(d) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(d);
    }

    // 4. Weekday format (fri, 2:fri)
    if let Some((count, day_str)) = parse_weekday_token(input) {
        if let Ok(target) = parse_weekday_str(day_str) {
            if count < 1 {
                return Err(anyhow!("Weekday count must be at least 1: {}", input));
            }
            let mut days_back = today.weekday().num_days_from_sunday() as i64
                - target.num_days_from_sunday() as i64;
            if days_back < 0 {
                days_back += 7;
            }
            let days_back = (count - 1)
                .checked_mul(7)
                .and_then(|weeks| weeks.checked_add(days_back));
            return days_before(today, days_back.and_then(Duration::try_days), input);
        }
    }

    Err(anyhow!("Could not parse date: {}", input))
}

fn days_before(today: NaiveDate, offset: Option<Duration>, input: &str) -> Result<NaiveDate> {
    offset
        .and_then(|offset| today.checked_sub_signed(offset))
        .ok_or_else(|| anyhow!("Date out of range: {}", input))
}

fn parse_weekday_token(input: &str) -> Option<(i64, &str)> {
    match input.split_once(':') {
        Some((count, day)) => count.parse::<i64>().ok().map(|c| (c, day)),
        // Just "fri" means 1:fri
        None => Some((1, input)),
    }
}

fn parse_weekday_str(s: &str) -> Result<Weekday> {
    match s.to_lowercase().as_str() {
        "mon" | "monday" => Ok(Weekday::Mon),
        "tue" | "tuesday" => Ok(Weekday::Tue),
        "wed" | "wednesday" => Ok(Weekday::Wed),
        "thu" | "thursday" => Ok(Weekday::Thu),
        "fri" | "friday" => Ok(Weekday::Fri),
        "sat" | "saturday" => Ok(Weekday::Sat),
        "sun" | "sunday" => Ok(Weekday::Sun),
        _ => Err(anyhow!("Invalid weekday")),
    }
}
