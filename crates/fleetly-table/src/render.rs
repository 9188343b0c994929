//! Stock cell formatters shared by the listing commands.
//!
//! Each public function here conforms to the [`CellFormat`] contract and
//! plugs straight into [`Column::formatter`]: direct field text with
//! defaulting, boolean-ish yes/no flags, and approximate ages for
//! millisecond timestamps.
//!
//! [`CellFormat`]: crate::column::CellFormat

use chrono::{DateTime, Local, Utc};
use serde_json::Value;

use crate::column::Column;
use crate::error::FormatResult;
use crate::path;

/// Default strftime template for [`format_date`].
pub const DEFAULT_DATE_TEMPLATE: &str = "%B %dth, %Y";

/// Plain-text form of a resolved JSON value: strings unquoted, `null`
/// empty, everything else as its JSON text.
pub fn display(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn lookup<'a>(record: &'a Value, column: &Column) -> Option<&'a Value> {
    column
        .field
        .as_deref()
        .and_then(|p| path::resolve(record, p))
}

/// Display string for a column's field, honoring its default value.
/// This is the behavior formatter-less columns get implicitly.
pub(crate) fn field_string(record: &Value, column: &Column) -> String {
    match lookup(record, column) {
        None | Some(Value::Null) => column.default_value.clone().unwrap_or_default(),
        Some(value) => display(value),
    }
}

/// Direct field lookup; the explicit form of the default cell behavior.
pub fn field_text(record: &Value, column: &Column) -> FormatResult {
    Ok(field_string(record, column))
}

/// Boolean-ish field as `"yes"` or `"no"`; absent or null renders empty.
pub fn yes_no(record: &Value, column: &Column) -> FormatResult {
    Ok(match lookup(record, column) {
        None | Some(Value::Null) => String::new(),
        Some(value) => if truthy(value) { "yes" } else { "no" }.to_owned(),
    })
}

/// Millisecond epoch timestamp as an approximate age, e.g. `~ 3min`.
/// Absent, null, or zero timestamps render empty.
pub fn age(record: &Value, column: &Column) -> FormatResult {
    let Some(ts) = lookup(record, column)
        .and_then(Value::as_i64)
        .filter(|&t| t != 0)
    else {
        return Ok(String::new());
    };
    Ok(human_delta(Utc::now().timestamp_millis() - ts))
}

/// JSON truthiness: false, zero, empty string/array/object and null are
/// all falsy.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Approximate human wording for a millisecond delta: banded labels up to
/// a minute, then rounded minutes, hours, days, months, years. Negative
/// deltas render empty.
pub fn human_delta(delta_ms: i64) -> String {
    match delta_ms {
        i64::MIN..0 => String::new(),
        0..3_000 => "~ 1s".to_owned(),
        3_000..7_500 => "~ 5s".to_owned(),
        7_500..15_000 => "~ 10s".to_owned(),
        15_000..25_000 => "~ 20s".to_owned(),
        25_000..45_000 => "~ 30s".to_owned(),
        45_000..75_000 => "~ 1min".to_owned(),
        75_000..2_700_000 => {
            let n = round_div(delta_ms, 60_000);
            format!("~ {n}min")
        }
        2_700_000..86_400_000 => {
            let n = round_div(delta_ms, 3_600_000);
            format!("~ {n}h")
        }
        86_400_000..2_592_000_000 => {
            let n = round_div(delta_ms, 86_400_000);
            format!("~ {n}d")
        }
        2_592_000_000..31_540_000_000 => {
            let n = round_div(delta_ms, 2_628_000_000);
            format!("~ {n}months")
        }
        _ => {
            let n = round_div(delta_ms, 31_540_000_000);
            format!("~ {n}Y")
        }
    }
}

fn round_div(value: i64, unit: i64) -> i64 {
    (value + unit / 2) / unit
}

/// Format a millisecond epoch timestamp with a strftime `template` in the
/// local timezone. Out-of-range timestamps render empty. The template
/// must use valid `chrono` strftime specifiers.
pub fn format_date(timestamp_ms: i64, template: &str) -> String {
    DateTime::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.with_timezone(&Local).format(template).to_string())
        .unwrap_or_default()
}
