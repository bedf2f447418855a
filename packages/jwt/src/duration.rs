//! Token lifetime parsing and human-readable duration labels
//!
//! Both directions share one ordered unit table, largest unit first. The
//! order matters: parsing takes the first suffix that ends the input, and
//! formatting takes the first unit that fits.

use chrono::TimeDelta;
use log::warn;

use crate::error::{JwtError, JwtResult};

/// Units accepted by `--exp`, for help and error messages
pub const SUPPORTED_UNITS: &str = "yr, mo, w, d, h, m, s";

const DAY_SECS: i64 = 24 * 60 * 60;

/// A coarse duration unit with its textual suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    /// Suffix as written after the number, e.g. `yr`
    pub suffix: &'static str,
    /// Length of one unit in seconds
    pub seconds: i64,
}

/// Coarse units, largest first
pub const UNITS: [Unit; 4] = [
    Unit { suffix: "yr", seconds: 365 * DAY_SECS },
    Unit { suffix: "mo", seconds: 30 * DAY_SECS },
    Unit { suffix: "w", seconds: 7 * DAY_SECS },
    Unit { suffix: "d", seconds: DAY_SECS },
];

/// Parse a lifetime expression such as `2w`, `1.5d`, `90m` or `1h 30m`
///
/// Empty input and `0` mean no lifetime. Coarse suffixes from [`UNITS`]
/// take a decimal number; anything else is handed to `humantime`, with an
/// optional leading sign.
pub fn parse_lifetime(expr: &str) -> JwtResult<TimeDelta> {
    let expr = expr.trim();
    if expr.is_empty() || expr == "0" {
        return Ok(TimeDelta::zero());
    }
    let invalid = || JwtError::InvalidDurationExpression(expr.to_string());

    if let Some((unit, number)) = UNITS
        .iter()
        .find_map(|unit| expr.strip_suffix(unit.suffix).map(|rest| (unit, rest)))
    {
        let value: f64 = number.trim().parse().map_err(|_| invalid())?;
        return scaled_seconds(value, unit.seconds).ok_or_else(invalid);
    }

    let (negative, magnitude) = match expr.as_bytes()[0] {
        b'-' => (true, &expr[1..]),
        b'+' => (false, &expr[1..]),
        _ => (false, expr),
    };
    let parsed = humantime::parse_duration(magnitude).map_err(|_| invalid())?;
    let delta = TimeDelta::from_std(parsed).map_err(|_| invalid())?;
    Ok(if negative { -delta } else { delta })
}

/// Lenient form of [`parse_lifetime`]
///
/// An invalid expression is logged as a warning and treated as no lifetime.
pub fn parse_exp(expr: &str) -> TimeDelta {
    parse_lifetime(expr).unwrap_or_else(|err| {
        warn!("{err}");
        TimeDelta::zero()
    })
}

fn scaled_seconds(value: f64, unit_seconds: i64) -> Option<TimeDelta> {
    let secs = value * unit_seconds as f64;
    if !secs.is_finite() || secs.abs() >= TimeDelta::MAX.num_seconds() as f64 {
        return None;
    }
    let whole = secs.trunc();
    let nanos = ((secs - whole) * 1e9).round() as i64;
    TimeDelta::try_seconds(whole as i64).map(|d| d + TimeDelta::nanoseconds(nanos))
}

/// Render a duration as a short label such as `3yr` or `10d`
///
/// The first unit of [`UNITS`] that the duration spans at least twice is
/// used, with the count rounded to the nearest integer. Anything shorter
/// than two days is rendered by `humantime` instead (`30m`, `1day 12h`),
/// truncated to whole seconds once it reaches one second.
#[must_use]
pub fn readable_duration(delta: TimeDelta) -> String {
    if delta < TimeDelta::zero() {
        return format!("-{}", readable_duration(delta.abs()));
    }

    let secs = delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1e9;
    for unit in &UNITS {
        let count = secs / unit.seconds as f64;
        if count >= 2.0 {
            return format!("{count:.0}{}", unit.suffix);
        }
    }

    let shown = if delta >= TimeDelta::seconds(1) {
        TimeDelta::seconds(delta.num_seconds())
    } else {
        delta
    };
    match shown.to_std() {
        Ok(std) => humantime::format_duration(std).to_string(),
        Err(_) => "0s".to_string(),
    }
}
