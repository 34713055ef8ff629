//! CLI for extracting purchase orders from HTML documents.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use console::style;
use tracing::{error, warn, Level};
use tracing_subscriber::FmtSubscriber;

use podex_core::{extract_po, report, PoDocument, PurchaseOrder};

/// Extract purchase orders from a PO HTML document and render one
/// self-contained report per order.
#[derive(Parser)]
#[command(name = "podex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input PO HTML file
    #[arg(required = true)]
    input: PathBuf,

    /// Output directory for rendered reports
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Output format per record
    #[arg(short, long, value_enum, default_value = "html")]
    format: OutputFormat,

    /// Print record quality issues
    #[arg(long)]
    validate: bool,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum OutputFormat {
    /// Self-contained HTML report
    Html,
    /// Record model as JSON
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    run(cli)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let html = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    fs::create_dir_all(&cli.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            cli.output_dir.display()
        )
    })?;

    let doc = PoDocument::parse(&html);
    let blocks = doc.po_blocks();

    if blocks.is_empty() {
        warn!("no PO blocks found in {}", cli.input.display());
        println!(
            "{} No PO blocks found in {}",
            style("!").yellow(),
            cli.input.display()
        );
        return Ok(());
    }

    let total = blocks.len();
    let mut written = 0usize;

    // Each block is an independent unit of work: a failed record is
    // logged and skipped, never aborting the rest of the run.
    for block in blocks {
        let extraction = extract_po(block);
        if !extraction.missing_zones.is_empty() {
            warn!(
                number = %extraction.po.number,
                zones = ?extraction.missing_zones,
                "PO block is missing zones"
            );
        }

        let po = extraction.into_po();

        if cli.validate {
            let issues = po.validate();
            if !issues.is_empty() {
                eprintln!(
                    "{}",
                    style(format!("PO {}: quality issues:", po.number)).yellow()
                );
                for issue in &issues {
                    eprintln!("  - {}", issue);
                }
            }
        }

        match write_record(&po, &cli) {
            Ok(path) => {
                written += 1;
                println!("{} {}", style("✓").green(), path.display());
            }
            Err(err) => {
                error!(number = %po.number, "failed to write record: {err:#}");
            }
        }
    }

    println!(
        "{} {} of {} PO record(s) written to {}",
        style("✓").green(),
        written,
        total,
        cli.output_dir.display()
    );

    Ok(())
}

fn write_record(po: &PurchaseOrder, cli: &Cli) -> anyhow::Result<PathBuf> {
    match cli.format {
        OutputFormat::Html => Ok(report::write_report(po, &cli.output_dir)?),
        OutputFormat::Json => {
            let path = cli.output_dir.join(format!("PO_{}.json", po.number));
            let json = serde_json::to_string_pretty(po)?;
            fs::write(&path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            Ok(path)
        }
    }
}
