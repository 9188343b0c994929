//! Key/value property sheets: one record's fields listed vertically.
//!
//! Reshapes a single record plus an ordered list of field descriptors
//! into a two-column label/value [`Table`], reusing the same layout
//! pipeline the list tables are built on.

use std::fmt;
use std::sync::Arc;

use serde_json::{Value, json};

use crate::column::Column;
use crate::error::{FormatResult, RenderError};
use crate::render;
use crate::table::Table;

/// Single-method capability formatting one field value for display.
pub trait ValueFormat: Send + Sync {
    fn format(&self, value: &Value) -> FormatResult;
}

impl<F> ValueFormat for F
where
    F: Fn(&Value) -> FormatResult + Send + Sync,
{
    fn format(&self, value: &Value) -> FormatResult {
        self(value)
    }
}

/// Field descriptor for [`key_value_table`].
#[derive(Clone)]
pub struct PropField {
    /// Top-level key looked up in the record.
    pub name: String,
    /// Row label, defaults to the field name.
    pub label: Option<String>,
    /// Value formatter, defaults to the plain display string.
    pub format: Option<Arc<dyn ValueFormat>>,
}

impl PropField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            format: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn format(mut self, format: impl ValueFormat + 'static) -> Self {
        self.format = Some(Arc::new(format));
        self
    }
}

impl fmt::Debug for PropField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropField")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("format", &self.format.is_some())
            .finish()
    }
}

/// Build a two-column label/value table from one record.
///
/// Descriptors whose field is absent from the record are skipped entirely
/// rather than rendered blank. Column titles are empty, so the rendered
/// table carries no header lines. A failing value formatter aborts with
/// the original error, matching the list-table semantics.
pub fn key_value_table(record: &Value, fields: &[PropField]) -> Result<Table, RenderError> {
    let mut rows = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(value) = record.get(field.name.as_str()) else {
            continue;
        };
        let label = field.label.clone().unwrap_or_else(|| field.name.clone());
        let text = match &field.format {
            Some(format) => {
                format
                    .format(value)
                    .map_err(|source| RenderError::Formatter {
                        column: label.clone(),
                        source,
                    })?
            }
            None => render::display(value),
        };
        rows.push(json!({ "key": label, "value": text }));
    }

    let columns = vec![
        Column::field("key").title(""),
        Column::field("value").title(""),
    ];
    Ok(Table::new(rows, columns))
}
