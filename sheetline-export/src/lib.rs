//! sheetline-export: export sinks and presentation helpers for canonical
//! tables — the CSV writer and the document summary (totals, counts,
//! currency display formatting).

pub mod csv;
pub mod summary;

pub use csv::{table_to_csv_string, write_table, write_table_file};
pub use summary::{Summary, format_amount};
