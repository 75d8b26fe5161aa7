//! Row projection: apply a confirmed mapping across the extracted row set.
//!
//! Callers validate the mapping first; projection does not re-check and
//! will happily produce partial rows for an incomplete mapping. Cell-level
//! normalization failures degrade to zeroes and never drop a row.

use crate::amount::{coerce_numeric, split_amount};
use crate::field::MapTarget;
use crate::mapping::ColumnMapping;
use crate::row::{CanonicalRow, CanonicalTable, ExtractedRow};

/// What happens to columns left unmapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Passthrough {
    /// Drop unmapped columns from the output (the default).
    #[default]
    Drop,
    /// Keep unmapped columns under their original header names.
    Keep,
}

/// Project extracted rows through a mapping into a canonical table.
///
/// Per row: the split amount column (if mapped) is normalized first into
/// the credit/debit pair; mapped columns are then copied under their
/// canonical names in source order, with directly mapped credit/debit
/// columns coerced numerically and overwriting their own side of the split.
/// Every output row carries credit and debit, defaulting to 0.
///
/// Pure function of its inputs: projecting the same rows and mapping twice
/// yields identical output.
pub fn project(
    rows: &[ExtractedRow],
    mapping: &ColumnMapping,
    passthrough: Passthrough,
    currency: &str,
) -> CanonicalTable {
    let columns = export_columns(mapping, passthrough);
    let rows = rows
        .iter()
        .map(|row| project_row(row, mapping, passthrough))
        .collect();

    CanonicalTable {
        columns,
        rows,
        currency: currency.to_string(),
    }
}

/// Export column order: mapped (and, in lenient mode, passthrough) columns
/// in source order, then credit and debit as the last two regardless of
/// where their source columns sat.
fn export_columns(mapping: &ColumnMapping, passthrough: Passthrough) -> Vec<String> {
    let mut columns = Vec::new();
    for col in mapping.columns() {
        match col.target {
            MapTarget::Date
            | MapTarget::Description
            | MapTarget::TransactionType
            | MapTarget::Balance => columns.push(col.target.name().to_string()),
            // All amount sources collapse into the trailing credit/debit pair.
            MapTarget::Credit | MapTarget::Debit | MapTarget::AmountCreditDebit => {}
            MapTarget::Unmapped => {
                if passthrough == Passthrough::Keep {
                    columns.push(col.header.clone());
                }
            }
        }
    }
    columns.push(MapTarget::Credit.name().to_string());
    columns.push(MapTarget::Debit.name().to_string());
    columns
}

fn project_row(
    row: &ExtractedRow,
    mapping: &ColumnMapping,
    passthrough: Passthrough,
) -> CanonicalRow {
    let mut out = CanonicalRow::default();

    // Split column first, so directly mapped credit/debit columns can
    // overwrite their side deterministically regardless of source order.
    if let Some(header) = mapping.header_for(MapTarget::AmountCreditDebit) {
        if let Some(raw) = row.get(header) {
            if let Some(split) = split_amount(raw) {
                out.credit = split.credit;
                out.debit = split.debit;
            }
        }
    }

    for col in mapping.columns() {
        // A header missing from this row leaves its cell blank.
        let Some(raw) = row.get(&col.header) else {
            continue;
        };
        match col.target {
            MapTarget::Date => out.date = raw.to_string(),
            MapTarget::Description => out.description = raw.to_string(),
            MapTarget::TransactionType => out.transaction_type = Some(raw.to_string()),
            MapTarget::Balance => out.balance = Some(raw.to_string()),
            MapTarget::Credit => {
                if !raw.trim().is_empty() {
                    out.credit = coerce_numeric(raw).abs();
                }
            }
            MapTarget::Debit => {
                if !raw.trim().is_empty() {
                    out.debit = coerce_numeric(raw).abs();
                }
            }
            MapTarget::AmountCreditDebit => {}
            MapTarget::Unmapped => {
                if passthrough == Passthrough::Keep {
                    out.passthrough.push((col.header.clone(), raw.to_string()));
                }
            }
        }
    }

    out
}
