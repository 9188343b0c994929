//! Column specifications and their per-render normalization.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use unicode_width::UnicodeWidthStr;

use crate::error::FormatResult;

// ── Alignment ───────────────────────────────────────────────────────

/// Horizontal alignment of a column's content within its width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    /// Lenient parse for loosely-typed column descriptors.
    ///
    /// Accepts the symbolic forms (`<`, `^`, `>`) as well as the spelled
    /// out names. Anything else logs a warning and falls back to left;
    /// a bad alignment value must never abort rendering.
    pub fn from_loose(raw: &str) -> Self {
        match raw.trim() {
            "<" | "left" => Self::Left,
            "^" | "center" => Self::Center,
            ">" | "right" => Self::Right,
            other => {
                tracing::warn!(value = other, "invalid alignment value, using left");
                Self::Left
            }
        }
    }
}

// ── Line template ───────────────────────────────────────────────────

/// Pads one wrapped line to an exact display width with a fixed alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineTemplate {
    align: Align,
    width: usize,
}

impl LineTemplate {
    pub fn new(align: Align, width: usize) -> Self {
        Self { align, width }
    }

    /// Pad `line` to exactly the template width.
    ///
    /// Lines at or past the width pass through unchanged; keeping content
    /// inside the width is the wrap engine's job, never truncation here.
    pub fn format(&self, line: &str) -> String {
        let used = UnicodeWidthStr::width(line);
        if used >= self.width {
            return line.to_owned();
        }
        let fill = self.width - used;
        match self.align {
            Align::Left => format!("{line}{:fill$}", ""),
            Align::Right => format!("{:fill$}{line}", ""),
            Align::Center => {
                let left = fill / 2;
                let right = fill - left;
                format!("{:left$}{line}{:right$}", "", "")
            }
        }
    }
}

// ── Formatter capability ────────────────────────────────────────────

/// Single-method capability producing the display string for one
/// (record, column) pair.
///
/// Implemented for any matching closure or function, so stock formatters
/// and ad-hoc closures plug in the same way. An `Err` is fatal for the
/// render call and propagates to the invoker unmodified.
pub trait CellFormat: Send + Sync {
    fn format(&self, record: &Value, column: &Column) -> FormatResult;
}

impl<F> CellFormat for F
where
    F: Fn(&Value, &Column) -> FormatResult + Send + Sync,
{
    fn format(&self, record: &Value, column: &Column) -> FormatResult {
        self(record, column)
    }
}

// ── Column specification ────────────────────────────────────────────

/// Declarative description of one table column.
///
/// Every layout option is `Option`: unset values are resolved to defaults
/// on an independent per-render copy (see [`normalize`]), so the caller's
/// `Column` values are never mutated and one `Vec<Column>` can be reused
/// across renders with different data.
#[derive(Clone, Default)]
pub struct Column {
    /// Dot-path into the record, used when no formatter is set and as the
    /// header fallback when no title is set.
    pub field: Option<String>,
    /// Header cell text.
    pub title: Option<String>,
    /// Computed-cell callback; overrides the direct field lookup.
    pub formatter: Option<Arc<dyn CellFormat>>,
    /// Content alignment, default left.
    pub align: Option<Align>,
    /// Maximum content width; wrapping handles overflow. Defaults to the
    /// widest rendered cell of the column (header included).
    pub width: Option<usize>,
    /// Custom line template, replacing the one derived from align + width.
    pub template: Option<LineTemplate>,
    /// Fallback text for unresolvable or null fields, default empty.
    pub default_value: Option<String>,
}

impl Column {
    /// Column reading a dot-path field directly.
    pub fn field(path: impl Into<String>) -> Self {
        Self {
            field: Some(path.into()),
            ..Self::default()
        }
    }

    /// Column whose cells come from a formatter callback alone.
    pub fn computed(formatter: impl CellFormat + 'static) -> Self {
        Self {
            formatter: Some(Arc::new(formatter)),
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn formatter(mut self, formatter: impl CellFormat + 'static) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn template(mut self, template: LineTemplate) -> Self {
        self.template = Some(template);
        self
    }

    pub fn default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    /// Header cell text: the title when set (even if empty), else the
    /// field path, else empty.
    pub(crate) fn header_text(&self) -> &str {
        self.title
            .as_deref()
            .or(self.field.as_deref())
            .unwrap_or_default()
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("field", &self.field)
            .field("title", &self.title)
            .field("formatter", &self.formatter.is_some())
            .field("align", &self.align)
            .field("width", &self.width)
            .field("template", &self.template)
            .field("default_value", &self.default_value)
            .finish()
    }
}

// ── Normalization ───────────────────────────────────────────────────

/// Per-render resolved column: every layout default filled in.
#[derive(Debug, Clone)]
pub(crate) struct NormalizedColumn {
    pub(crate) width: usize,
    pub(crate) template: LineTemplate,
}

/// Resolve layout defaults against the computed `widths` (one per column,
/// derived from the raw cell strings of header + data rows).
///
/// Explicit column widths cap the computed ones. Works entirely on fresh
/// values; the caller's columns stay untouched.
pub(crate) fn normalize(columns: &[Column], widths: &[usize]) -> Vec<NormalizedColumn> {
    columns
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            let align = column.align.unwrap_or_default();
            let width = column
                .width
                .unwrap_or_else(|| widths.get(idx).copied().unwrap_or_default());
            let template = column
                .template
                .unwrap_or_else(|| LineTemplate::new(align, width));
            NormalizedColumn { width, template }
        })
        .collect()
}
