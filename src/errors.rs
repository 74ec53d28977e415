//! Error types with diagnostics using miette
//!
//! Errors exist only for caller contract violations at construction time.
//! Per-cell layout never fails: missing or off-canvas data resolves to
//! "nothing to draw".

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors from validating a [`GlyphConfig`](crate::layout::GlyphConfig).
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("item width must be finite and positive, got {value}")]
    #[diagnostic(code(boxglyph::config::invalid_item_width))]
    InvalidItemWidth { value: f64 },

    #[error("item margin must be a fraction in [0, 1), got {value}")]
    #[diagnostic(code(boxglyph::config::invalid_item_margin))]
    InvalidItemMargin { value: f64 },

    #[error("whisker width must be a ratio in [0, 1], got {value}")]
    #[diagnostic(code(boxglyph::config::invalid_whisker_width))]
    InvalidWhiskerWidth { value: f64 },
}

// ============================================================================
// Axis Errors
// ============================================================================

/// Errors from constructing a [`LinearAxis`](crate::axis::LinearAxis).
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum AxisError {
    #[error("axis bound is not finite: {value}")]
    #[diagnostic(code(boxglyph::axis::non_finite_bound))]
    NonFiniteBound { value: f64 },

    #[error("pixel endpoint is not finite: {value}")]
    #[diagnostic(code(boxglyph::axis::non_finite_pixel))]
    NonFinitePixel { value: f64 },

    #[error("axis range is empty: both bounds are {value}")]
    #[diagnostic(code(boxglyph::axis::empty_range))]
    EmptyRange { value: f64 },
}
