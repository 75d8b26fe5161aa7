//! Document-level totals shown after conversion: total credits, total
//! debits, transaction count, and currency display formatting.

use sheetline_core::CanonicalTable;

/// Aggregate view of a projected document.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    pub total_credits: f64,
    pub total_debits: f64,
    pub transaction_count: usize,
}

impl Summary {
    pub fn of(table: &CanonicalTable) -> Self {
        let mut summary = Summary {
            transaction_count: table.len(),
            ..Default::default()
        };
        for row in &table.rows {
            summary.total_credits += row.credit;
            summary.total_debits += row.debit;
        }
        summary
    }

    /// Credits minus debits.
    pub fn net(&self) -> f64 {
        self.total_credits - self.total_debits
    }
}

/// Render an amount for display, e.g. `format_amount("USD", 1234.5)` is
/// `"USD 1,234.50"`. The currency code is a label, never a conversion.
pub fn format_amount(currency: &str, value: f64) -> String {
    let negative = value < 0.0;
    let cents = format!("{:.2}", value.abs());
    let (whole, frac) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut grouped = String::new();
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{currency} {sign}{grouped}.{frac}")
}
