//! Library error type.

use thiserror::Error;

/// Boxed error produced by caller-supplied formatter callbacks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result of a formatter callback.
pub type FormatResult = Result<String, BoxError>;

/// Errors surfaced by a render call.
///
/// Malformed input data never errors: missing fields and unresolvable
/// paths degrade to empty or default cells. The single fatal path is a
/// caller-supplied formatter returning `Err`, which aborts the render
/// call with no partial output.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A formatter callback failed for the named column.
    #[error("formatter for column `{column}` failed")]
    Formatter {
        /// Column title (or field path when untitled).
        column: String,
        #[source]
        source: BoxError,
    },
}
