//! sheetline-core: column-mapping and normalization engine for AI-extracted
//! bank-statement tables.
//!
//! The extraction service hands us loosely structured rows of (header, value)
//! pairs plus a document currency. This crate owns everything between that
//! raw shape and an export-ready table: amount normalization, the header
//! auto-mapping heuristic, required-field validation, and row projection.
//! It is pure and synchronous; all I/O lives in the sibling crates.

pub mod amount;
pub mod field;
pub mod mapping;
pub mod project;
pub mod row;
pub mod validate;

pub use amount::{AmountSplit, coerce_numeric, split_amount};
pub use field::MapTarget;
pub use mapping::{ColumnAssignment, ColumnMapping};
pub use project::{Passthrough, project};
pub use row::{CanonicalRow, CanonicalTable, Cell, ExtractedRow};
pub use validate::{ValidationReport, validate};
