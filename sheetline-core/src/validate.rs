//! Required-field coverage check gating projection.
//!
//! A document can only be projected once its mapping supplies a date, a
//! description, and an amount source. The report names what is missing so
//! the caller can render an actionable message instead of a bare failure.

use crate::field::MapTarget;
use crate::mapping::ColumnMapping;

/// Outcome of [`validate`]: empty `missing` means the mapping is complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Required fields absent from the mapping, in a fixed order:
    /// "date", "description", "amount".
    pub missing: Vec<&'static str>,
}

impl ValidationReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// User-facing message naming the shortfall, or `None` when complete.
    pub fn message(&self) -> Option<String> {
        if self.missing.is_empty() {
            None
        } else {
            Some(format!(
                "Please map the following required fields: {}",
                self.missing.join(", ")
            ))
        }
    }
}

/// Check required-field coverage.
///
/// The amount requirement is satisfied by a column mapped to
/// `amount_credit_debit`, or by the credit and debit targets both being
/// mapped directly; projection handles either path.
pub fn validate(mapping: &ColumnMapping) -> ValidationReport {
    let mut missing = Vec::new();

    if !mapping.contains_target(MapTarget::Date) {
        missing.push("date");
    }
    if !mapping.contains_target(MapTarget::Description) {
        missing.push("description");
    }

    let has_amount = mapping.contains_target(MapTarget::AmountCreditDebit)
        || (mapping.contains_target(MapTarget::Credit)
            && mapping.contains_target(MapTarget::Debit));
    if !has_amount {
        missing.push("amount");
    }

    ValidationReport { missing }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_with_split_amount_column() {
        let mut mapping = ColumnMapping::unmapped(["Date", "Desc", "Amt"]);
        mapping.set("Date", MapTarget::Date);
        mapping.set("Desc", MapTarget::Description);
        mapping.set("Amt", MapTarget::AmountCreditDebit);
        let report = validate(&mapping);
        assert!(report.is_complete());
        assert_eq!(report.message(), None);
    }

    #[test]
    fn test_complete_with_direct_credit_debit_pair() {
        let mut mapping = ColumnMapping::unmapped(["Date", "Desc", "In", "Out"]);
        mapping.set("Date", MapTarget::Date);
        mapping.set("Desc", MapTarget::Description);
        mapping.set("In", MapTarget::Credit);
        mapping.set("Out", MapTarget::Debit);
        assert!(validate(&mapping).is_complete());
    }

    #[test]
    fn test_credit_without_debit_is_incomplete() {
        let mut mapping = ColumnMapping::unmapped(["Date", "Desc", "In"]);
        mapping.set("Date", MapTarget::Date);
        mapping.set("Desc", MapTarget::Description);
        mapping.set("In", MapTarget::Credit);
        assert_eq!(validate(&mapping).missing, vec!["amount"]);
    }

    #[test]
    fn test_reports_every_missing_field() {
        let mapping = ColumnMapping::unmapped(["A", "B"]);
        let report = validate(&mapping);
        assert_eq!(report.missing, vec!["date", "description", "amount"]);
        assert_eq!(
            report.message().unwrap(),
            "Please map the following required fields: date, description, amount"
        );
    }

    #[test]
    fn test_optional_fields_do_not_gate() {
        let mut mapping = ColumnMapping::unmapped(["Date", "Desc", "Amt", "Type", "Bal"]);
        mapping.set("Date", MapTarget::Date);
        mapping.set("Desc", MapTarget::Description);
        mapping.set("Amt", MapTarget::AmountCreditDebit);
        assert!(validate(&mapping).is_complete());
        mapping.set("Type", MapTarget::TransactionType);
        mapping.set("Bal", MapTarget::Balance);
        assert!(validate(&mapping).is_complete());
    }
}
