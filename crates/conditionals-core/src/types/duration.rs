//! Duration literal parsing
//!
//! Two literal styles are recognized:
//! - simple: `500ms`, `2h`, `-3d`, `15` (no unit means milliseconds).
//!   Units: `ns`, `us`, `ms`, `s`, `m`, `h`, `d`, case-insensitive.
//! - ISO-8601: `PT1.5S`, `P2DT3H`, `-PT10M`.

use crate::error::DurationParseError;
use chrono::Duration;

/// Parse a duration literal in either style
pub fn parse_duration(literal: &str) -> Result<Duration, DurationParseError> {
    let trimmed = literal.trim();
    if trimmed.is_empty() {
        return Err(DurationParseError::Invalid(literal.to_string()));
    }

    let unsigned = trimmed.trim_start_matches(['+', '-']);
    if unsigned.starts_with(['P', 'p']) {
        parse_iso(trimmed)
    } else {
        parse_simple(trimmed)
    }
}

/// Build a duration from a millisecond count
pub fn duration_from_millis(millis: i64) -> Duration {
    Duration::milliseconds(millis)
}

fn parse_simple(literal: &str) -> Result<Duration, DurationParseError> {
    let invalid = || DurationParseError::Invalid(literal.to_string());
    let overflow = || DurationParseError::Overflow(literal.to_string());

    let split = literal
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && (*c == '+' || *c == '-'))))
        .map(|(i, _)| i)
        .unwrap_or(literal.len());
    let (amount, unit) = literal.split_at(split);

    if amount.trim_start_matches(['+', '-']).is_empty() || unit.len() > 2 {
        return Err(invalid());
    }
    let amount: i64 = amount.parse().map_err(|_| overflow())?;

    let duration = match unit.to_ascii_lowercase().as_str() {
        "ns" => Some(Duration::nanoseconds(amount)),
        "us" => Some(Duration::microseconds(amount)),
        "" | "ms" => Duration::try_milliseconds(amount),
        "s" => Duration::try_seconds(amount),
        "m" => Duration::try_minutes(amount),
        "h" => Duration::try_hours(amount),
        "d" => Duration::try_days(amount),
        _ => return Err(invalid()),
    };
    duration.ok_or_else(overflow)
}

fn parse_iso(literal: &str) -> Result<Duration, DurationParseError> {
    let invalid = || DurationParseError::Invalid(literal.to_string());
    let overflow = || DurationParseError::Overflow(literal.to_string());

    let upper = literal.to_ascii_uppercase();
    let (negative, rest) = match upper.as_bytes().first() {
        Some(b'-') => (true, &upper[1..]),
        Some(b'+') => (false, &upper[1..]),
        _ => (false, upper.as_str()),
    };
    let rest = rest.strip_prefix('P').ok_or_else(invalid)?;

    let (date_part, time_part) = match rest.find('T') {
        Some(pos) => (&rest[..pos], Some(&rest[pos + 1..])),
        None => (rest, None),
    };

    let mut total = Duration::zero();
    let mut components = 0;

    if !date_part.is_empty() {
        let days = date_part.strip_suffix('D').ok_or_else(invalid)?;
        let days = parse_component(days).ok_or_else(invalid)?;
        total = add(total, Duration::try_days(days)).ok_or_else(overflow)?;
        components += 1;
    }

    if let Some(time) = time_part {
        let mut remaining = time;
        for (designator, unit) in [('H', 3600_i64), ('M', 60_i64)] {
            if let Some(pos) = remaining.find(designator) {
                let amount = parse_component(&remaining[..pos]).ok_or_else(invalid)?;
                let seconds = amount.checked_mul(unit).ok_or_else(overflow)?;
                total = add(total, Duration::try_seconds(seconds)).ok_or_else(overflow)?;
                remaining = &remaining[pos + 1..];
                components += 1;
            }
        }
        if !remaining.is_empty() {
            let seconds = remaining.strip_suffix('S').ok_or_else(invalid)?;
            let seconds = parse_seconds(seconds).ok_or_else(invalid)?;
            total = total.checked_add(&seconds).ok_or_else(overflow)?;
            components += 1;
        } else if components == 0 || time.is_empty() {
            return Err(invalid());
        }
    }

    if components == 0 {
        return Err(invalid());
    }

    Ok(if negative { -total } else { total })
}

fn add(total: Duration, component: Option<Duration>) -> Option<Duration> {
    total.checked_add(&component?)
}

fn parse_component(text: &str) -> Option<i64> {
    let digits = text.trim_start_matches(['+', '-']);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn parse_seconds(text: &str) -> Option<Duration> {
    let (whole, fraction) = match text.find(['.', ',']) {
        Some(pos) => (&text[..pos], &text[pos + 1..]),
        None => (text, ""),
    };
    if fraction.len() > 9 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let seconds = parse_component(whole)?;
    let nanos: i64 = if fraction.is_empty() {
        0
    } else {
        format!("{:0<9}", fraction).parse().ok()?
    };
    let nanos = if whole.starts_with('-') { -nanos } else { nanos };

    Duration::try_seconds(seconds)?.checked_add(&Duration::nanoseconds(nanos))
}
