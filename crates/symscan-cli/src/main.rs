use anyhow::Result;
use clap::{Parser, Subcommand};
use std::time::Duration;
use symscan_core::parse_symptom_input;
use symscan_local::report::{run_report_with_progress, ScanReport};
use symscan_local::{catalog, FetchConfig, LocalFetcher};

#[derive(Parser, Debug)]
#[command(name = "symscan")]
#[command(about = "Match your symptoms against encyclopedia disease pages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch each catalog page and rank diseases by shared symptoms.
    Check(CheckCmd),
    /// List the disease catalog without fetching anything.
    Catalog(CatalogCmd),
}

#[derive(clap::Args, Debug)]
struct CheckCmd {
    /// Comma-separated symptoms, e.g. "fatigue, fever, headache".
    #[arg(long)]
    symptoms: String,
    /// Per-request timeout in seconds (connect and total).
    #[arg(long, env = "SYMSCAN_TIMEOUT_S", default_value_t = 10)]
    timeout_s: u64,
    /// Override the browser-identifying User-Agent header.
    #[arg(long, env = "SYMSCAN_USER_AGENT")]
    user_agent: Option<String>,
    /// Emit the full scan report as JSON on stdout.
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args, Debug)]
struct CatalogCmd {
    /// Emit the catalog as JSON on stdout.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Check(cmd) => run_check(cmd).await,
        Commands::Catalog(cmd) => run_catalog(cmd),
    }
}

async fn run_check(cmd: CheckCmd) -> Result<()> {
    let symptoms = parse_symptom_input(&cmd.symptoms);
    if symptoms.is_empty() {
        eprintln!("Please enter at least one symptom.");
        std::process::exit(2);
    }
    eprintln!("You entered: {}", symptoms.join(", "));

    let mut cfg = FetchConfig {
        timeout: Duration::from_secs(cmd.timeout_s),
        ..FetchConfig::default()
    };
    if let Some(ua) = cmd.user_agent {
        cfg.user_agent = ua;
    }
    let fetcher = LocalFetcher::new(cfg)?;

    let entries = catalog::default_catalog();
    let scan = run_report_with_progress(&fetcher, &entries, &symptoms, |i, total, entry| {
        eprintln!("[{i}/{total}] {} ...", entry.category);
    })
    .await;
    for e in &scan.errors {
        eprintln!("warning: {}", e.reason);
    }

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&scan)?);
        return Ok(());
    }
    render_text(&scan);
    Ok(())
}

fn render_text(scan: &ScanReport) {
    if scan.report.is_empty() {
        println!("No matching diseases found for your symptoms.");
        return;
    }
    for r in &scan.report.results {
        println!("{} ({})", r.page_title, r.category);
        println!("Shared symptoms count: {}", r.shared_count);
        if r.matched_symptoms.is_empty() {
            println!("Found symptoms: none explicitly matched in the extracted sections.");
        } else {
            println!("Found symptoms: {}", r.matched_symptoms.join(", "));
        }
        println!("Description: {}", r.description);
        println!("Read more: {}", r.url);
        println!("---");
    }
}

fn run_catalog(cmd: CatalogCmd) -> Result<()> {
    let entries = catalog::default_catalog();
    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }
    for entry in &entries {
        println!("{}: {}", entry.category, entry.url);
    }
    Ok(())
}
