use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use sheetline_core::{ColumnMapping, MapTarget, Passthrough, project, validate};
use sheetline_export::{Summary, format_amount, table_to_csv_string, write_table_file};
use sheetline_extract::{Extraction, ExtractionClient, parse_extraction_json};

mod config;

#[derive(Parser, Debug)]
#[command(name = "sheetline", version, about = "Convert bank-statement PDFs into clean CSV tables")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract, map, and convert a statement into CSV
    Convert {
        /// Bank statement PDF (sent to the extraction service)
        #[arg(long)]
        pdf: Option<PathBuf>,

        /// Pre-extracted rows as JSON, instead of calling the service
        #[arg(long)]
        rows: Option<PathBuf>,

        /// Output CSV path (default: <input stem>_converted.csv)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Manual mapping override, repeatable: --map "Txn Date=date"
        #[arg(long = "map", value_name = "HEADER=FIELD")]
        overrides: Vec<String>,

        /// Keep unmapped source columns in the output under their own names
        #[arg(long)]
        keep_unmapped: bool,

        /// Print the CSV to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Show extracted headers and the proposed auto-mapping
    Inspect {
        /// Bank statement PDF (sent to the extraction service)
        #[arg(long)]
        pdf: Option<PathBuf>,

        /// Pre-extracted rows as JSON, instead of calling the service
        #[arg(long)]
        rows: Option<PathBuf>,
    },

    /// Write a default config file under ~/.sheetline
    Setup,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            pdf,
            rows,
            out,
            overrides,
            keep_unmapped,
            stdout,
        } => {
            let (extraction, input) = load_extraction(pdf, rows).await?;
            convert(extraction, &input, out, &overrides, keep_unmapped, stdout)?;
        }

        Command::Inspect { pdf, rows } => {
            let (extraction, input) = load_extraction(pdf, rows).await?;
            inspect(&extraction, &input);
        }

        Command::Setup => {
            config::init_config()?;
        }
    }

    Ok(())
}

/// Load rows either from a saved extraction JSON or by calling the
/// extraction service with a PDF. Returns the extraction and the input
/// path (for output naming).
async fn load_extraction(
    pdf: Option<PathBuf>,
    rows: Option<PathBuf>,
) -> Result<(Extraction, PathBuf)> {
    if let Some(path) = rows {
        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("read {}", path.display()))?;
        let extraction = parse_extraction_json(&json)?;
        return Ok((extraction, path));
    }

    let Some(path) = pdf else {
        bail!("pass --pdf <statement.pdf> or --rows <extracted.json>");
    };
    if !path.exists() {
        bail!("PDF not found: {}", path.display());
    }

    let cfg = config::load_config()?;
    if cfg.extract.api_key.is_empty() {
        bail!(
            "no extraction API key configured; run `sheetline setup` and edit {}",
            config::config_path()?.display()
        );
    }

    let client = ExtractionClient {
        base_url: cfg.extract.base_url,
        api_key: cfg.extract.api_key,
        model: cfg.extract.model,
    };

    let bytes = std::fs::read(&path).with_context(|| format!("read {}", path.display()))?;
    let extraction = client.extract(&bytes).await?;
    Ok((extraction, path))
}

fn convert(
    extraction: Extraction,
    input: &Path,
    out: Option<PathBuf>,
    overrides: &[String],
    keep_unmapped: bool,
    stdout: bool,
) -> Result<()> {
    let headers: Vec<&str> = extraction.rows[0].headers().collect();
    let mut mapping = ColumnMapping::auto_map(headers);

    for spec in overrides {
        apply_override(&mut mapping, spec)?;
    }

    let report = validate(&mapping);
    if let Some(message) = report.message() {
        bail!("{message}");
    }

    let passthrough = if keep_unmapped {
        Passthrough::Keep
    } else {
        Passthrough::Drop
    };
    let table = project(&extraction.rows, &mapping, passthrough, &extraction.currency);

    if stdout {
        print!("{}", table_to_csv_string(&table)?);
        return Ok(());
    }

    let summary = Summary::of(&table);
    println!(
        "Parsed {} transactions from {}",
        summary.transaction_count,
        input.display()
    );
    println!(
        "Total credits: {}",
        format_amount(&table.currency, summary.total_credits)
    );
    println!(
        "Total debits:  {}",
        format_amount(&table.currency, summary.total_debits)
    );

    let out = out.unwrap_or_else(|| default_output(input));
    write_table_file(&table, &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn inspect(extraction: &Extraction, input: &Path) {
    let headers: Vec<&str> = extraction.rows[0].headers().collect();
    let mapping = ColumnMapping::auto_map(headers);

    println!(
        "{}: {} transactions, currency {}",
        input.display(),
        extraction.rows.len(),
        extraction.currency
    );
    println!("Proposed mapping:");
    for col in mapping.columns() {
        println!("  {:<30} -> {}", col.header, col.target.label());
    }

    let report = validate(&mapping);
    match report.message() {
        None => println!("Mapping is complete; ready to convert."),
        Some(message) => println!("{message} (use --map \"Header=field\")"),
    }
}

/// Parse one `--map "Header=field"` override and apply it.
fn apply_override(mapping: &mut ColumnMapping, spec: &str) -> Result<()> {
    let Some((header, field)) = spec.split_once('=') else {
        bail!("invalid --map {spec:?} (expected \"Header=field\")");
    };
    let header = header.trim();
    let Some(target) = MapTarget::from_name(field) else {
        bail!(
            "unknown field {:?} in --map (one of: date, description, credit, debit, \
             amount_credit_debit, transaction_type, balance, ignore)",
            field.trim()
        );
    };
    if !mapping.set(header, target) {
        let known: Vec<&str> = mapping.columns().iter().map(|c| c.header.as_str()).collect();
        bail!(
            "unknown header {header:?} in --map (extracted headers: {})",
            known.join(", ")
        );
    }
    Ok(())
}

/// `statement.pdf` becomes `statement_converted.csv` next to the input.
fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "statement".to_string());
    input.with_file_name(format!("{stem}_converted.csv"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_name() {
        assert_eq!(
            default_output(Path::new("/tmp/statement.pdf")),
            PathBuf::from("/tmp/statement_converted.csv")
        );
        assert_eq!(
            default_output(Path::new("rows.json")),
            PathBuf::from("rows_converted.csv")
        );
    }

    #[test]
    fn test_apply_override() {
        let mut mapping = ColumnMapping::unmapped(["Txn Date", "Memo"]);
        apply_override(&mut mapping, "Txn Date=date").unwrap();
        assert_eq!(mapping.target_of("Txn Date"), Some(MapTarget::Date));

        assert!(apply_override(&mut mapping, "Memo").is_err());
        assert!(apply_override(&mut mapping, "Memo=nope").is_err());
        assert!(apply_override(&mut mapping, "Missing=date").is_err());
    }
}
