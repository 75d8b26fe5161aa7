//! Canonical target fields and the keyword tables behind header auto-mapping.

use serde::{Deserialize, Serialize};

/// Where a source column lands in the output.
///
/// `AmountCreditDebit` is a source-only concept: one column holding signed
/// amounts that projection splits into the credit/debit pair. `Unmapped`
/// columns are dropped (or passed through untouched in lenient mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapTarget {
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "description")]
    Description,
    #[serde(rename = "credit")]
    Credit,
    #[serde(rename = "debit")]
    Debit,
    #[serde(rename = "amount_credit_debit")]
    AmountCreditDebit,
    #[serde(rename = "transaction_type")]
    TransactionType,
    #[serde(rename = "balance")]
    Balance,
    #[serde(rename = "unmapped")]
    Unmapped,
}

/// Auto-map tries targets in this order; the first keyword hit wins.
/// Date/description outrank the amount targets so that headers like
/// "Transaction Date" never land on an amount field via "transaction".
pub const AUTO_MAP_ORDER: [MapTarget; 7] = [
    MapTarget::Date,
    MapTarget::Description,
    MapTarget::Credit,
    MapTarget::Debit,
    MapTarget::AmountCreditDebit,
    MapTarget::TransactionType,
    MapTarget::Balance,
];

impl MapTarget {
    /// Wire/export name, matching the serde rename.
    pub const fn name(&self) -> &'static str {
        match self {
            MapTarget::Date => "date",
            MapTarget::Description => "description",
            MapTarget::Credit => "credit",
            MapTarget::Debit => "debit",
            MapTarget::AmountCreditDebit => "amount_credit_debit",
            MapTarget::TransactionType => "transaction_type",
            MapTarget::Balance => "balance",
            MapTarget::Unmapped => "unmapped",
        }
    }

    /// Human-readable label for mapping review output.
    pub const fn label(&self) -> &'static str {
        match self {
            MapTarget::Date => "Date",
            MapTarget::Description => "Description",
            MapTarget::Credit => "Credit",
            MapTarget::Debit => "Debit",
            MapTarget::AmountCreditDebit => "Amount (will be split)",
            MapTarget::TransactionType => "Transaction Type",
            MapTarget::Balance => "Balance",
            MapTarget::Unmapped => "Ignore Column",
        }
    }

    /// Inverse of [`MapTarget::name`], for parsing user-supplied overrides.
    pub fn from_name(name: &str) -> Option<MapTarget> {
        match name.trim() {
            "date" => Some(MapTarget::Date),
            "description" => Some(MapTarget::Description),
            "credit" => Some(MapTarget::Credit),
            "debit" => Some(MapTarget::Debit),
            "amount_credit_debit" => Some(MapTarget::AmountCreditDebit),
            "transaction_type" => Some(MapTarget::TransactionType),
            "balance" => Some(MapTarget::Balance),
            "unmapped" | "ignore" => Some(MapTarget::Unmapped),
            _ => None,
        }
    }

    /// Keywords matched as substrings of the normalized header
    /// (see [`normalize_header`]). Keywords are stored pre-normalized.
    pub const fn keywords(&self) -> &'static [&'static str] {
        match self {
            MapTarget::Date => &["date", "postingdate", "transactiondate", "valuedate"],
            MapTarget::Description => &[
                "description",
                "desc",
                "details",
                "narrative",
                "memo",
                "particulars",
            ],
            MapTarget::Credit => &["credit", "deposit", "paidin", "moneyin"],
            MapTarget::Debit => &["debit", "withdrawal", "paidout", "moneyout"],
            MapTarget::AmountCreditDebit => &["amount", "value"],
            MapTarget::TransactionType => &["type", "category"],
            MapTarget::Balance => &["balance", "runningbalance"],
            MapTarget::Unmapped => &[],
        }
    }
}

/// Lowercase a header and keep only its alphanumerics, so "Txn. Date " and
/// "txndate" compare equal during keyword matching.
pub fn normalize_header(header: &str) -> String {
    header
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("Transaction Date"), "transactiondate");
        assert_eq!(normalize_header("  Paid-In ($) "), "paidin");
        assert_eq!(normalize_header("Memo"), "memo");
        assert_eq!(normalize_header("***"), "");
    }

    #[test]
    fn test_name_round_trip() {
        for target in AUTO_MAP_ORDER {
            assert_eq!(MapTarget::from_name(target.name()), Some(target));
        }
        assert_eq!(MapTarget::from_name("unmapped"), Some(MapTarget::Unmapped));
        assert_eq!(MapTarget::from_name("ignore"), Some(MapTarget::Unmapped));
        assert_eq!(MapTarget::from_name("nonsense"), None);
    }

    #[test]
    fn test_serde_names_match() {
        let json = serde_json::to_string(&MapTarget::AmountCreditDebit).unwrap();
        assert_eq!(json, "\"amount_credit_debit\"");
        let back: MapTarget = serde_json::from_str("\"debit\"").unwrap();
        assert_eq!(back, MapTarget::Debit);
    }
}
