//! Error types for layout configuration

use thiserror::Error;

use crate::layout::Breakpoint;

/// Errors raised while building layout configuration.
///
/// Rendering itself never fails; these only surface when a value is
/// validated at construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A progress value above 100
    #[error("Percent out of range: {0} (expected 0..=100)")]
    PercentOutOfRange(u16),

    /// A grid resolves to zero column tracks at some breakpoint
    #[error("Grid has zero columns at breakpoint {breakpoint}")]
    ZeroColumns { breakpoint: Breakpoint },

    /// A breakpoint name that is not one of base/sm/md/lg/xl
    #[error("Unknown breakpoint: {0}")]
    UnknownBreakpoint(String),
}

/// Result type alias for layout operations
pub type Result<T> = std::result::Result<T, LayoutError>;
