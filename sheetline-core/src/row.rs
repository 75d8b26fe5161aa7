//! Row shapes on both sides of projection: the loose extracted rows the
//! AI service produces and the normalized canonical rows we export.

use serde::{Deserialize, Serialize};

/// One (header, value) cell as produced by the extraction service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub key: String,
    pub value: String,
}

/// One statement line as extracted: an ordered sequence of (header, value)
/// pairs. Headers are not guaranteed consistent across rows; the first row
/// of a document defines its schema and later rows are looked up by header.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtractedRow {
    cells: Vec<Cell>,
}

impl ExtractedRow {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Convenience constructor from (header, value) pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            cells: pairs
                .into_iter()
                .map(|(key, value)| Cell {
                    key: key.into(),
                    value: value.into(),
                })
                .collect(),
        }
    }

    /// Headers in source order.
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|c| c.key.as_str())
    }

    /// Value for `header`, first match wins if the extractor duplicated a key.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|c| c.key == header)
            .map(|c| c.value.as_str())
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// One normalized transaction, ready for export.
///
/// `credit` and `debit` always exist (defaulting to 0) so every row has a
/// uniform shape; `transaction_type` and `balance` are optional canonical
/// columns; `passthrough` holds unmapped source columns kept in lenient
/// mode, in source order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CanonicalRow {
    pub date: String,
    pub description: String,
    pub transaction_type: Option<String>,
    pub balance: Option<String>,
    pub passthrough: Vec<(String, String)>,
    pub credit: f64,
    pub debit: f64,
}

impl CanonicalRow {
    /// Render the cell for a named export column. Canonical names resolve to
    /// the typed fields; anything else is looked up among the passthrough
    /// columns. Unknown columns render blank.
    pub fn render(&self, column: &str) -> String {
        match column {
            "date" => self.date.clone(),
            "description" => self.description.clone(),
            "transaction_type" => self.transaction_type.clone().unwrap_or_default(),
            "balance" => self.balance.clone().unwrap_or_default(),
            "credit" => format!("{:.2}", self.credit),
            "debit" => format!("{:.2}", self.debit),
            other => self
                .passthrough
                .iter()
                .find(|(key, _)| key == other)
                .map(|(_, value)| value.clone())
                .unwrap_or_default(),
        }
    }
}

/// A projected document: canonical rows plus the export column order and
/// the document currency (display only, never converted).
///
/// `columns` lists mapped and passthrough columns in source order with
/// `credit` and `debit` always the last two.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalTable {
    pub columns: Vec<String>,
    pub rows: Vec<CanonicalRow>,
    pub currency: String,
}

impl CanonicalTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
