//! Plain-text table rendering for the fleetly CLI.
//!
//! Turns an ordered collection of semi-structured records
//! ([`serde_json::Value`]) into an aligned, word-wrapped, multi-line text
//! table: dynamic column-width computation, per-cell greedy word-wrapping,
//! row-height equalization, and alignment-aware padding.
//!
//! - **[`Table`]** — ordered columns + ordered records + inter-column
//!   padding; [`Table::render`] produces the final string.
//!
//! - **[`Column`]** — declarative column specification: dot-path field,
//!   title, optional formatter callback, alignment, width cap, line
//!   template. Unset options are filled with per-render defaults without
//!   ever touching the caller's values, so one `Vec<Column>` can be reused
//!   across renders with different data.
//!
//! - **[`path::resolve`]** — tolerant dot-path lookup into nested values
//!   (`"a.0.b.c"` walks maps and arrays, any failure yields `None`).
//!
//! - **[`key_value_table`]** — property-sheet view of a single record:
//!   selected fields as label/value rows through the same layout pipeline.
//!
//! - **[`render`]** — stock cell formatters used by the listing commands:
//!   field text with defaulting, yes/no flags, approximate ages.
//!
//! The engine is synchronous, performs no I/O, and emits no ANSI codes.
//! Missing or malformed record data degrades to empty cells; the only
//! fatal error is a failing caller-supplied formatter, surfaced as
//! [`RenderError::Formatter`].
//!
//! ```
//! use fleetly_table::{Column, Table};
//! use serde_json::json;
//!
//! let columns = vec![
//!     Column::field("id").title("ID"),
//!     Column::field("name").title("NAME"),
//! ];
//! let records = vec![
//!     json!({ "id": 1, "name": "Watch A" }),
//!     json!({ "id": 2, "name": "Watch B" }),
//! ];
//! let out = Table::new(records, columns).render()?;
//! assert_eq!(out, "ID   NAME   \n1    Watch A\n2    Watch B");
//! # Ok::<(), fleetly_table::RenderError>(())
//! ```

pub mod column;
pub mod error;
pub mod path;
pub mod props;
pub mod render;
pub mod table;
pub mod wrap;

// ── Primary re-exports ──────────────────────────────────────────────
pub use column::{Align, CellFormat, Column, LineTemplate};
pub use error::{BoxError, FormatResult, RenderError};
pub use props::{PropField, ValueFormat, key_value_table};
pub use table::{DEFAULT_PADDING, Table};
