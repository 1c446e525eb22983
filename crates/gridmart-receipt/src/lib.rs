//! # gridmart-receipt: Receipt Persistence for GridMart
//!
//! Formats a settled [`Receipt`] as the customer-facing text file and
//! writes it to disk.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       GridMart Receipt Flow                             │
//! │                                                                         │
//! │  gridmart-core session                                                  │
//! │       │  checkout() -> Receipt (state already finalized)                │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 gridmart-receipt (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   render_receipt(&receipt)  ──►  receipt text                   │   │
//! │  │   ReceiptWriter::write      ──►  receipt_<shopper>.txt          │   │
//! │  │   ReceiptWriter::write_or_warn ─► logs failures, never fails    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  receipt_Ana.txt on disk                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A write failure is reported (or logged) but MUST NOT affect the
//! simulation: by the time this crate runs, the shopper has already paid.

use std::fs;
use std::path::{Path, PathBuf};

use gridmart_core::Receipt;

pub mod error;

pub use error::{ReceiptError, ReceiptResult};

// =============================================================================
// Rendering
// =============================================================================

/// Renders the customer-facing receipt text.
///
/// One line per distinct serial number, then the totals block. The
/// senior discount line appears for every senior, even when the basket
/// earned no discount.
pub fn render_receipt(receipt: &Receipt) -> String {
    let mut out = String::new();

    out.push_str("--- Supermarket Receipt ---\n");
    out.push_str(&format!(
        "Shopper: {} (Age: {})\n",
        receipt.shopper_name, receipt.shopper_age
    ));
    out.push_str(&format!(
        "Transaction Date: {}\n",
        receipt.issued_at.format("%a %b %e %H:%M:%S UTC %Y")
    ));
    out.push_str("--- Items Purchased ---\n");

    for line in &receipt.lines {
        out.push_str(&format!(
            "  [{}] {:<25} | Qty: {:<3} | Total: {}\n",
            line.serial, line.name, line.quantity, line.line_total
        ));
    }

    out.push_str("\n-----------------------------------\n");
    out.push_str(&format!("Total Price: {}\n", receipt.subtotal));
    if receipt.is_senior() {
        out.push_str(&format!("Senior Discount: {}\n", receipt.discount));
    }
    out.push_str(&format!("FINAL TOTAL: {}\n", receipt.total));
    out.push_str("-----------------------------------\n");

    out
}

/// The file name a receipt is saved under.
pub fn receipt_file_name(receipt: &Receipt) -> String {
    format!("receipt_{}.txt", receipt.shopper_name)
}

// =============================================================================
// Writer
// =============================================================================

/// Writes rendered receipts into one target directory.
#[derive(Debug, Clone)]
pub struct ReceiptWriter {
    directory: PathBuf,
}

impl ReceiptWriter {
    /// A writer targeting the given directory. The directory must already
    /// exist; a missing directory surfaces as an Io error at write time.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        ReceiptWriter {
            directory: directory.into(),
        }
    }

    /// A writer targeting the process working directory.
    pub fn current_dir() -> Self {
        ReceiptWriter::new(".")
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Renders and writes the receipt, returning the path written.
    pub fn write(&self, receipt: &Receipt) -> ReceiptResult<PathBuf> {
        let path = self.directory.join(receipt_file_name(receipt));
        fs::write(&path, render_receipt(receipt)).map_err(|source| ReceiptError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Like [`Self::write`], but a failure only logs a warning.
    ///
    /// This is the call sites' default: the checkout already finalized,
    /// so the only honest response to a failed write is to tell the
    /// operator and move on.
    pub fn write_or_warn(&self, receipt: &Receipt) -> Option<PathBuf> {
        match self.write(receipt) {
            Ok(path) => {
                tracing::info!(path = %path.display(), "receipt written");
                Some(path)
            }
            Err(error) => {
                tracing::warn!(%error, "receipt could not be written");
                None
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use gridmart_core::checkout::settle;
    use gridmart_core::{Money, Product};

    fn sample_receipt(age: u8) -> Receipt {
        let products = vec![
            Product::new("BRD001", "Gardenia White Bread", Money::from_pesos(100), true, false),
            Product::new("JUC001", "Orange Juice", Money::from_pesos(50), true, true),
            Product::new("ALC001", "Pale Pilsen", Money::from_pesos(60), true, true),
        ];
        settle("Ana", age, &products, Utc::now())
    }

    #[test]
    fn test_render_layout() {
        let text = render_receipt(&sample_receipt(30));

        assert!(text.starts_with("--- Supermarket Receipt ---\n"));
        assert!(text.contains("Shopper: Ana (Age: 30)\n"));
        assert!(text.contains("--- Items Purchased ---\n"));
        assert!(text.contains("[BRD001] Gardenia White Bread"));
        assert!(text.contains("Qty: 1"));
        assert!(text.contains("Total Price: PHP 210.00\n"));
        assert!(text.contains("FINAL TOTAL: PHP 210.00\n"));
        // Non-seniors get no discount line at all
        assert!(!text.contains("Senior Discount"));
    }

    #[test]
    fn test_render_senior_discount_line() {
        // 20% of 100 plus 10% of 50; alcohol untouched
        let text = render_receipt(&sample_receipt(65));

        assert!(text.contains("Total Price: PHP 210.00\n"));
        assert!(text.contains("Senior Discount: PHP 25.00\n"));
        assert!(text.contains("FINAL TOTAL: PHP 185.00\n"));
    }

    #[test]
    fn test_write_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReceiptWriter::new(dir.path());
        let receipt = sample_receipt(65);

        let path = writer.write(&receipt).unwrap();
        assert_eq!(path.file_name().unwrap(), "receipt_Ana.txt");

        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, render_receipt(&receipt));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let writer = ReceiptWriter::new(&missing);

        let err = writer.write(&sample_receipt(30)).unwrap_err();
        let ReceiptError::Io { path, .. } = err;
        assert!(path.starts_with(&missing));
    }

    #[test]
    fn test_write_or_warn_swallows_failure() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReceiptWriter::new(dir.path().join("nope"));
        assert!(writer.write_or_warn(&sample_receipt(30)).is_none());

        let writer = ReceiptWriter::new(dir.path());
        assert!(writer.write_or_warn(&sample_receipt(30)).is_some());
    }
}
