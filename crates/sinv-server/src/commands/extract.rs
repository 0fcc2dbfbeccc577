//! Extract command - pull fields from a single local PDF.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use sinv_core::{InvoiceParser, PdfExtractor, PdfProcessor, SampleInvoiceParser};
use sinv_server::{is_pdf_filename, ExtractResponse};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Print lines that anchored fields could not be found for
    #[arg(long)]
    show_warnings: bool,
}

pub async fn run(args: ExtractArgs) -> anyhow::Result<()> {
    let start = Instant::now();

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let name = args
        .input
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    if !is_pdf_filename(name) {
        anyhow::bail!("Only PDF files supported: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let data = fs::read(&args.input)?;
    let extractor = PdfExtractor::from_bytes(&data)?;
    let content = extractor.extract_all()?;
    let result = SampleInvoiceParser::new().parse(&content);

    let response = ExtractResponse::new(result.fields);
    let output = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_warnings && !result.warnings.is_empty() {
        eprintln!("{}", style("Missing fields:").yellow());
        for warning in &result.warnings {
            eprintln!("  - {}", warning);
        }
    }

    debug!(
        "Total processing time: {:?} ({} pages)",
        start.elapsed(),
        result.page_count
    );

    Ok(())
}
