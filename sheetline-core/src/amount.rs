//! Monetary string normalization.
//!
//! Statement amounts arrive in whatever shape the bank printed them:
//! `"$1,234.56"`, `"-45.00"`, `"1.234,56 EUR"` stripped to its digits,
//! `"(100.00)"`. [`split_amount`] turns one signed cell into a
//! non-negative credit/debit pair; [`coerce_numeric`] is the lighter path
//! for columns that are already dedicated credit or debit columns.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Everything that is not a digit, decimal point, or minus sign. Removes
/// currency symbols, thousands separators, and stray whitespace in one pass.
static NON_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.\-]+").expect("static pattern"));

/// A signed amount decomposed into its credit/debit halves.
/// At most one side is non-zero when produced by [`split_amount`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AmountSplit {
    pub credit: f64,
    pub debit: f64,
}

/// Parse a loosely formatted amount cell into a credit/debit pair.
///
/// A cell is a debit when it carries an explicit leading `-`, is wrapped in
/// accounting parentheses like `(100.00)`, or parses negative; otherwise it
/// is a credit. Zero is a credit by convention (no sign present).
///
/// Returns `None` when no number survives stripping (empty cell, bare text,
/// multiple decimal points); callers treat that cell as zero rather than
/// failing the row.
pub fn split_amount(raw: &str) -> Option<AmountSplit> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Accounting convention: (100.00) means -100.00. Unwrap before the
    // character strip would silently turn it into a positive literal.
    let parenthesized =
        trimmed.len() >= 2 && trimmed.starts_with('(') && trimmed.ends_with(')');
    let inner = if parenthesized {
        trimmed[1..trimmed.len() - 1].trim()
    } else {
        trimmed
    };

    let explicit_negative = parenthesized || inner.starts_with('-');

    let stripped = NON_NUMERIC.replace_all(inner, "");
    let value: f64 = stripped.parse().ok()?;

    Some(if explicit_negative || value < 0.0 {
        AmountSplit {
            credit: 0.0,
            debit: value.abs(),
        }
    } else {
        AmountSplit {
            credit: value,
            debit: 0.0,
        }
    })
}

/// Numeric coercion for columns already dedicated to credit or debit:
/// strip non-numeric characters, parse, 0.0 on failure. Sign is preserved;
/// the projector decides what to do with it.
pub fn coerce_numeric(raw: &str) -> f64 {
    NON_NUMERIC
        .replace_all(raw.trim(), "")
        .parse()
        .unwrap_or(0.0)
}
