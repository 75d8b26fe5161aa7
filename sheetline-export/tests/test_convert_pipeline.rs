//! End-to-end pipeline: extracted rows -> auto-map -> validate -> project
//! -> CSV, the way the CLI drives it.

use sheetline_core::{ColumnMapping, ExtractedRow, MapTarget, Passthrough, project, validate};
use sheetline_export::{Summary, format_amount, table_to_csv_string};

fn statement_rows() -> Vec<ExtractedRow> {
    vec![
        ExtractedRow::from_pairs([
            ("Transaction Date", "01/02/2024"),
            ("Details", "Coffee"),
            ("Amount", "-4.50"),
            ("Running Balance", "95.50"),
        ]),
        ExtractedRow::from_pairs([
            ("Transaction Date", "01/03/2024"),
            ("Details", "Salary"),
            ("Amount", "$2,000.00"),
            ("Running Balance", "2,095.50"),
        ]),
        ExtractedRow::from_pairs([
            ("Transaction Date", "01/04/2024"),
            ("Details", "Service fee"),
            ("Amount", "(15.00)"),
            ("Running Balance", "2,080.50"),
        ]),
    ]
}

#[test]
fn test_auto_mapped_statement_to_csv() {
    let rows = statement_rows();
    let headers: Vec<&str> = rows[0].headers().collect();
    let mapping = ColumnMapping::auto_map(headers);

    let report = validate(&mapping);
    assert!(report.is_complete(), "missing: {:?}", report.missing);

    let table = project(&rows, &mapping, Passthrough::Drop, "USD");
    assert_eq!(
        table.columns,
        vec!["date", "description", "balance", "credit", "debit"]
    );

    let csv = table_to_csv_string(&table).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[1],
        "\"01/02/2024\",\"Coffee\",\"95.50\",\"0.00\",\"4.50\""
    );
    assert_eq!(
        lines[2],
        "\"01/03/2024\",\"Salary\",\"2,095.50\",\"2000.00\",\"0.00\""
    );
    // Parenthesized amount lands on the debit side.
    assert_eq!(
        lines[3],
        "\"01/04/2024\",\"Service fee\",\"2,080.50\",\"0.00\",\"15.00\""
    );

    let summary = Summary::of(&table);
    assert_eq!(summary.transaction_count, 3);
    assert_eq!(summary.total_credits, 2000.0);
    assert_eq!(summary.total_debits, 19.5);
    assert_eq!(format_amount("USD", summary.total_credits), "USD 2,000.00");
}

#[test]
fn test_manual_remap_then_convert() {
    let rows = statement_rows();
    let headers: Vec<&str> = rows[0].headers().collect();
    let mut mapping = ColumnMapping::auto_map(headers);

    // Reviewer decides the balance column is noise and remaps nothing else.
    assert!(mapping.set("Running Balance", MapTarget::Unmapped));
    assert!(validate(&mapping).is_complete());

    let table = project(&rows, &mapping, Passthrough::Keep, "USD");
    // Lenient mode keeps the now-unmapped column under its original name.
    assert_eq!(
        table.columns,
        vec![
            "date",
            "description",
            "Running Balance",
            "credit",
            "debit"
        ]
    );
    assert_eq!(table.rows[0].render("Running Balance"), "95.50");
}

#[test]
fn test_incomplete_mapping_blocks_conversion() {
    let mut mapping = ColumnMapping::unmapped(["Details", "Amount"]);
    mapping.set("Details", MapTarget::Description);
    mapping.set("Amount", MapTarget::AmountCreditDebit);

    let report = validate(&mapping);
    assert!(!report.is_complete());
    assert_eq!(report.missing, vec!["date"]);
    assert_eq!(
        report.message().unwrap(),
        "Please map the following required fields: date"
    );
}
