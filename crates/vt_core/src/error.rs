//! Unified error type for vt_core

use thiserror::Error;

/// Errors raised by the screen buffer and controller APIs.
///
/// These only ever arise from programmer errors against the public API
/// (bad indices, malformed rows, non-positive dimensions). Parsing and
/// command execution never produce an `EngineError`: unknown or malformed
/// escape sequences are silently ignored, matching terminal-emulation
/// convention (see `vt_core::controller`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("position ({x}, {y}) is out of bounds")]
    OutOfBounds { x: i32, y: i32 },

    #[error("row length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("invalid dimensions: rows={rows}, cols={cols} (both must be >= 1)")]
    InvalidDimensions { rows: i32, cols: i32 },
}

/// Result type alias used throughout vt_core.
pub type Result<T> = std::result::Result<T, EngineError>;
