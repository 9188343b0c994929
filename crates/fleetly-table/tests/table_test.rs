#![allow(clippy::unwrap_used)]
// End-to-end rendering tests for the table engine: widths, wrapping,
// alignment, row-height equalization, and the key/value property sheet.

use chrono::DateTime;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use unicode_width::UnicodeWidthStr;

use fleetly_table::{
    Align, Column, FormatResult, PropField, Table, key_value_table, path, render,
};

// ── Helpers ─────────────────────────────────────────────────────────

/// Epoch-seconds field as a UTC `YYYY-MM-DD HH:MM:SS` string.
fn creation_date(record: &Value, column: &Column) -> FormatResult {
    let secs = column
        .field
        .as_deref()
        .and_then(|p| path::resolve(record, p))
        .and_then(Value::as_i64)
        .unwrap_or_default();
    let dt = DateTime::from_timestamp(secs, 0).ok_or("timestamp out of range")?;
    Ok(dt.format("%Y-%m-%d %H:%M:%S").to_string())
}

/// Epoch-seconds value as a UTC `YYYY-MM-DD` string.
fn date_only(value: &Value) -> FormatResult {
    let secs = value.as_i64().ok_or("not an integer timestamp")?;
    let dt = DateTime::from_timestamp(secs, 0).ok_or("timestamp out of range")?;
    Ok(dt.format("%Y-%m-%d").to_string())
}

fn device_columns() -> Vec<Column> {
    vec![
        Column::field("id").title("ID").width(5),
        Column::field("name").title("NAME"),
        Column::field("creationDate")
            .title("CREATION DATE")
            .formatter(creation_date)
            .width(10),
        Column::field("synced")
            .title("SYNCED")
            .align(Align::Right)
            .formatter(render::yes_no),
    ]
}

fn device_records() -> Vec<Value> {
    vec![
        json!({ "id": 1, "name": "Name 1", "creationDate": 1_500_000_000, "synced": true }),
        json!({ "id": 2, "name": "Name 2", "creationDate": 1_400_000_000, "synced": false }),
        json!({ "id": 3, "name": "Name 3", "creationDate": 1_200_000_000, "synced": 0 }),
    ]
}

// ── List tables ─────────────────────────────────────────────────────

#[test]
fn renders_a_two_column_listing() {
    let columns = vec![
        Column::field("id").title("ID").width(5),
        Column::field("name").title("NAME"),
    ];
    let records = vec![
        json!({ "id": 1, "name": "Name 1" }),
        json!({ "id": 2, "name": "Name 2" }),
    ];
    let out = Table::new(records, columns).render().unwrap();
    let expected = ["ID      NAME  ", "1       Name 1", "2       Name 2"].join("\n");
    assert_eq!(out, expected);
}

#[test]
fn wraps_caps_and_aligns_a_full_listing() {
    let out = Table::new(device_records(), device_columns())
        .render()
        .unwrap();
    let expected = [
        "ID      NAME     CREATION     SYNCED",
        "                 DATE               ",
        "1       Name 1   2017-07-14      yes",
        "                 02:40:00           ",
        "2       Name 2   2014-05-13       no",
        "                 16:53:20           ",
        "3       Name 3   2008-01-10       no",
        "                 21:20:00           ",
    ]
    .join("\n");
    assert_eq!(out, expected);
}

#[test]
fn every_output_line_spans_the_full_table_width() {
    // widths: 5 (cap) + 6 (NAME) + 10 (cap) + 6 (SYNCED), padding 3 * 3.
    let out = Table::new(device_records(), device_columns())
        .render()
        .unwrap();
    for line in out.lines() {
        assert_eq!(UnicodeWidthStr::width(line), 5 + 6 + 10 + 6 + 3 * 3);
    }
}

#[test]
fn row_heights_are_uniform_per_row() {
    let out = Table::new(device_records(), device_columns())
        .render()
        .unwrap();
    // Header + 3 records, each two lines tall after wrapping.
    assert_eq!(out.lines().count(), 8);
}

#[test]
fn rendering_the_same_table_twice_is_byte_identical() {
    let table = Table::new(device_records(), device_columns());
    assert_eq!(table.render().unwrap(), table.render().unwrap());
}

#[test]
fn column_specs_are_reusable_across_renders() {
    let columns = vec![Column::field("name").title("NAME")];
    let narrow = Table::new(vec![json!({ "name": "ab" })], columns.clone())
        .render()
        .unwrap();
    let wide = Table::new(vec![json!({ "name": "abcdefghij" })], columns.clone())
        .render()
        .unwrap();
    let narrow_again = Table::new(vec![json!({ "name": "ab" })], columns)
        .render()
        .unwrap();

    // The wide render must not leak its computed width into the next one.
    assert_eq!(narrow, "NAME\nab  ");
    assert_eq!(wide, "NAME      \nabcdefghij");
    assert_eq!(narrow_again, narrow);
}

#[test]
fn padding_width_is_configurable() {
    let columns = vec![
        Column::field("a").title("A"),
        Column::field("b").title("B"),
    ];
    let records = vec![json!({ "a": "x", "b": "y" })];
    let out = Table::new(records, columns).padding(1).render().unwrap();
    assert_eq!(out, "A B\nx y");
}

#[test]
fn explicit_width_caps_are_handled_by_wrapping_not_truncation() {
    let columns = vec![Column::field("desc").title("DESC").width(7)];
    let records = vec![json!({ "desc": "firmware update pending" })];
    let out = Table::new(records, columns).render().unwrap();
    let expected = [
        "DESC   ", "firmwar", "e", "update", "pending",
    ];
    // "firmware" is wider than the cap and gets hard-broken; nothing is lost.
    let lines: Vec<&str> = out.lines().map(str::trim_end).collect();
    assert_eq!(lines, expected.map(str::trim_end));
    for line in out.lines() {
        assert_eq!(line.len(), 7);
    }
}

// ── Key/value property sheets ───────────────────────────────────────

#[test]
fn property_sheet_renders_label_value_pairs() {
    let record = json!({ "date": 1_595_577_615, "model": "MODEL-1234" });
    let fields = vec![
        PropField::new("date").label("Date").format(date_only),
        PropField::new("model").label("Model"),
    ];
    let out = key_value_table(&record, &fields).unwrap().render().unwrap();
    assert_eq!(out, "Date    2020-07-24\nModel   MODEL-1234");
}

#[test]
fn property_sheet_skips_descriptors_for_missing_fields() {
    let record = json!({ "date": 1_595_577_615 });
    let fields = vec![
        PropField::new("date").label("Date").format(date_only),
        PropField::new("model").label("Model"),
    ];
    let out = key_value_table(&record, &fields).unwrap().render().unwrap();
    assert_eq!(out, "Date   2020-07-24");
}
