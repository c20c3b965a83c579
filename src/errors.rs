//! Error types with diagnostics using miette
//!
//! Chart-building errors are recoverable and returned from the constructing
//! call; text errors surface once, when a text service is created.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Chart Errors
// ============================================================================

/// Errors raised while building a figure or a chart
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("dimensions mismatch ({left}[{left_len}] != {right}[{right_len}])")]
    #[diagnostic(
        code(canvasplot::dimension_mismatch),
        help("every series of a chart needs one entry per datum")
    )]
    DimensionMismatch {
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    },

    #[error("series `{series}` is empty")]
    #[diagnostic(
        code(canvasplot::empty_series),
        help("a chart needs at least one datum to compute its scale")
    )]
    EmptySeries { series: &'static str },

    #[error("dimensions not valid: expected {expected} values, got {got}")]
    #[diagnostic(code(canvasplot::invalid_dimensions))]
    InvalidDimensions { expected: &'static str, got: usize },

    #[error("invalid grid: {rows} rows x {cols} columns")]
    #[diagnostic(
        code(canvasplot::invalid_grid),
        help("a grid needs at least one row and one column")
    )]
    InvalidGrid { rows: usize, cols: usize },

    #[error("invalid figure size {width}x{height}: {reason}")]
    #[diagnostic(code(canvasplot::invalid_size))]
    InvalidSize {
        width: f64,
        height: f64,
        reason: NumericError,
    },
}

// ============================================================================
// Text Errors
// ============================================================================

/// Errors raised while setting up a text service
#[derive(Error, Diagnostic, Debug)]
pub enum TextError {
    #[error("cannot read font file {}", path.display())]
    #[diagnostic(code(canvasplot::text::load))]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse font: {message}")]
    #[diagnostic(code(canvasplot::text::parse))]
    Parse { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_names_both_series() {
        let err = ChartError::DimensionMismatch {
            left: "labels",
            left_len: 2,
            right: "values",
            right_len: 3,
        };
        assert_eq!(err.to_string(), "dimensions mismatch (labels[2] != values[3])");
    }

    #[test]
    fn diagnostic_codes_are_stable() {
        let err = ChartError::EmptySeries { series: "values" };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("canvasplot::empty_series"));
    }

    #[test]
    fn invalid_size_reports_reason() {
        let err = ChartError::InvalidSize {
            width: 0.0,
            height: 10.0,
            reason: NumericError::Zero,
        };
        assert_eq!(err.to_string(), "invalid figure size 0x10: value is zero");
    }
}
