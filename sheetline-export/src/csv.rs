//! CSV sink for canonical tables: header row from the table's export
//! column order, every field double-quoted.

use std::io::Write;
use std::path::Path;

use ::csv::{QuoteStyle, WriterBuilder};
use anyhow::{Context, Result};

use sheetline_core::CanonicalTable;

/// Write `table` as CSV: one header row, one record per canonical row,
/// all fields quoted so embedded commas and quotes survive spreadsheet
/// round trips.
pub fn write_table<W: Write>(table: &CanonicalTable, out: W) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(out);

    writer
        .write_record(&table.columns)
        .context("write CSV header")?;

    for row in &table.rows {
        let record: Vec<String> = table.columns.iter().map(|c| row.render(c)).collect();
        writer.write_record(&record).context("write CSV row")?;
    }

    writer.flush().context("flush CSV output")?;
    Ok(())
}

/// Render `table` to an in-memory CSV string.
pub fn table_to_csv_string(table: &CanonicalTable) -> Result<String> {
    let mut buf = Vec::new();
    write_table(table, &mut buf)?;
    String::from_utf8(buf).context("CSV output was not UTF-8")
}

/// Write `table` to a file at `path`.
pub fn write_table_file(table: &CanonicalTable, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("create {}", path.display()))?;
    write_table(table, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetline_core::CanonicalRow;

    fn sample_table() -> CanonicalTable {
        CanonicalTable {
            columns: vec![
                "date".to_string(),
                "description".to_string(),
                "credit".to_string(),
                "debit".to_string(),
            ],
            rows: vec![
                CanonicalRow {
                    date: "01/02/2024".into(),
                    description: "Coffee, extra \"hot\"".into(),
                    credit: 0.0,
                    debit: 4.5,
                    ..Default::default()
                },
                CanonicalRow {
                    date: "01/03/2024".into(),
                    description: "Salary".into(),
                    credit: 2000.0,
                    debit: 0.0,
                    ..Default::default()
                },
            ],
            currency: "USD".to_string(),
        }
    }

    #[test]
    fn test_header_and_rows_quoted() {
        let csv = table_to_csv_string(&sample_table()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "\"date\",\"description\",\"credit\",\"debit\""
        );
        assert_eq!(
            lines.next().unwrap(),
            "\"01/02/2024\",\"Coffee, extra \"\"hot\"\"\",\"0.00\",\"4.50\""
        );
        assert_eq!(
            lines.next().unwrap(),
            "\"01/03/2024\",\"Salary\",\"2000.00\",\"0.00\""
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_empty_table_writes_header_only() {
        let table = CanonicalTable {
            columns: vec!["date".into(), "credit".into(), "debit".into()],
            rows: vec![],
            currency: "USD".into(),
        };
        let csv = table_to_csv_string(&table).unwrap();
        assert_eq!(csv.trim_end(), "\"date\",\"credit\",\"debit\"");
    }
}
