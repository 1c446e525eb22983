//! # Receipt Sink Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error (create / write / flush)                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ReceiptError (this module) ← adds the target path                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  write_or_warn ← logs and swallows; checkout state is already final    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Receipt persistence errors.
///
/// These never reach the simulation engine; the caller either handles
/// them or routes them through [`crate::ReceiptWriter::write_or_warn`].
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// The receipt file could not be created or written.
    ///
    /// ## When This Occurs
    /// - Target directory does not exist
    /// - File permissions issue
    /// - Disk full
    #[error("could not write receipt to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results with ReceiptError.
pub type ReceiptResult<T> = Result<T, ReceiptError>;
