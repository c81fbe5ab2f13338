// Date standardization: parsing heuristics and rendering

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::data::{Table, Value};

use super::{DateFormat, INVALID_DATE_MARKER};

/// Accepted layouts for the free-form fallback, tried in order. This is
/// the deterministic stand-in for a locale "parse anything" facility and
/// covers datetimes and textual month names.
const FALLBACK_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

const FALLBACK_DATE_FORMATS: &[&str] = &[
    // catches unpadded dash dates with the year first, e.g. 2023-1-5
    "%Y-%m-%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d %Y",
    "%Y.%m.%d",
];

fn is_digits(s: &str, min: usize, max: usize) -> bool {
    s.len() >= min && s.len() <= max && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse three numeric components split on the given separators. Each
/// component must be entirely numeric with the expected width.
fn split_components(
    s: &str,
    seps: &[char],
    widths: [(usize, usize); 3],
) -> Option<(i64, i64, i64)> {
    let parts: Vec<&str> = s.split(|c| seps.contains(&c)).collect();
    if parts.len() != 3 {
        return None;
    }
    for (part, (min, max)) in parts.iter().zip(widths.iter()) {
        if !is_digits(part, *min, *max) {
            return None;
        }
    }
    // all-digit components with bounded width always fit in i64
    Some((
        parts[0].parse().ok()?,
        parts[1].parse().ok()?,
        parts[2].parse().ok()?,
    ))
}

/// Matches the canonical ISO form exactly: four digits, dash, two digits,
/// dash, two digits.
fn parse_iso(s: &str) -> Option<(i32, u32, u32)> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    if !is_digits(&s[0..4], 4, 4) || !is_digits(&s[5..7], 2, 2) || !is_digits(&s[8..10], 2, 2) {
        return None;
    }
    Some((
        s[0..4].parse().ok()?,
        s[5..7].parse().ok()?,
        s[8..10].parse().ok()?,
    ))
}

fn parse_freeform(s: &str) -> Option<(i32, u32, u32)> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some((dt.year(), dt.month(), dt.day()));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some((dt.year(), dt.month(), dt.day()));
    }
    for fmt in FALLBACK_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some((dt.year(), dt.month(), dt.day()));
        }
    }
    for fmt in FALLBACK_DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some((d.year(), d.month(), d.day()));
        }
    }
    None
}

/// Extract (year, month, day) from a date string.
///
/// Attempts, in order: canonical ISO, `YYYY/M/D`, `M/D/YYYY` (ambiguous
/// first field read as month), `D-M-YYYY` / `D/M/YYYY` (ambiguous first
/// field read as day), then the free-form fallback. The first match wins;
/// the tie-break order is deliberate and load-bearing for ambiguous
/// inputs like `01/02/2023`.
///
/// The extracted components are not range-checked here; see
/// [`format_date`].
pub fn parse_date(date_str: &str) -> Option<(i32, u32, u32)> {
    if let Some(ymd) = parse_iso(date_str) {
        return Some(ymd);
    }

    // YYYY/M/D
    if let Some((y, m, d)) = split_components(date_str, &['/'], [(4, 4), (1, 2), (1, 2)]) {
        return Some((y as i32, m as u32, d as u32));
    }

    // M/D/YYYY (US)
    if let Some((m, d, y)) = split_components(date_str, &['/'], [(1, 2), (1, 2), (4, 4)]) {
        return Some((y as i32, m as u32, d as u32));
    }

    // D-M-YYYY or D/M/YYYY (Euro); mixed separators are accepted
    if let Some((d, m, y)) = split_components(date_str, &['/', '-'], [(1, 2), (1, 2), (4, 4)]) {
        return Some((y as i32, m as u32, d as u32));
    }

    parse_freeform(date_str)
}

/// Render a date in the target format: 4-digit zero-padded year, 2-digit
/// zero-padded month and day. Returns `None` when the month is outside
/// 1-12 or the day outside 1-31; days are not checked against the month
/// length, so e.g. February 30 is accepted.
pub fn format_date(year: i32, month: u32, day: u32, format: &DateFormat) -> Option<String> {
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    let y = format!("{:04}", year);
    let m = format!("{:02}", month);
    let d = format!("{:02}", day);

    Some(match format {
        DateFormat::Iso => format!("{}-{}-{}", y, m, d),
        DateFormat::DayMonthYear => format!("{}/{}/{}", d, m, y),
        DateFormat::MonthDayYear => format!("{}/{}/{}", m, d, y),
        DateFormat::YearMonthDay => format!("{}/{}/{}", y, m, d),
        DateFormat::Custom(pattern) => pattern
            .replace("YYYY", &y)
            .replace("MM", &m)
            .replace("DD", &d),
    })
}

/// Standardize the configured date columns to the target format.
///
/// Cells that are absent, null or empty are skipped silently. A cell that
/// parses and renders differently from its original string form is
/// replaced and counted; a cell that renders identically is left alone. A
/// non-empty cell that fails to parse (or fails range validation) is
/// rewritten to `[INVALID DATE] <original>` and not counted.
pub fn standardize_dates(
    table: &Table,
    date_columns: &[String],
    target_format: &DateFormat,
) -> (Table, usize) {
    let mut fixed_count = 0;

    let rows = table
        .rows
        .iter()
        .map(|row| {
            let mut new_row = row.clone();
            for col in date_columns {
                let value = match row.get(col) {
                    Some(v) => v,
                    None => continue,
                };
                if value.is_missing() {
                    continue;
                }

                let raw = value.to_display_string();
                let date_str = raw.trim();
                if date_str.is_empty() {
                    continue;
                }

                let rendered = parse_date(date_str)
                    .and_then(|(y, m, d)| format_date(y, m, d, target_format));

                match rendered {
                    Some(clean) => {
                        if clean != raw {
                            new_row.set(col, Value::String(clean));
                            fixed_count += 1;
                        }
                    }
                    None => {
                        new_row.set(
                            col,
                            Value::String(format!("{}{}", INVALID_DATE_MARKER, raw)),
                        );
                    }
                }
            }
            new_row
        })
        .collect();

    (Table::from_rows(rows), fixed_count)
}
