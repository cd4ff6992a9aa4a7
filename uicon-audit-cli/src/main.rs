//! uicon-audit CLI
//!
//! One-shot audit of a UICON iconset directory against the species catalog
//! and the upstream reference assets, producing a static HTML report.

mod error;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use uicon_audit_assets::{ListingOptions, ReferenceAssets, fetch_reference_assets, scan_icon_dir};
use uicon_audit_catalog::Catalog;
use uicon_audit_core::IconStatus;
use uicon_audit_report::{ReportRow, build_rows, write_report};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "uicon-audit")]
#[command(about = "Audit a UICON iconset against the species catalog", long_about = None)]
struct Cli {
    /// Catalog JSON document (local path or http(s) URL)
    #[arg(short = 'C', long)]
    catalog: String,

    /// Directory containing the iconset's Pokemon images
    #[arg(short, long, default_value = "pokemon")]
    icons_dir: PathBuf,

    /// Output HTML file
    #[arg(short, long, default_value = "index.html")]
    output: PathBuf,

    /// Asset repository to list reference icons from
    #[arg(long, default_value = "PokeMiners/pogo_assets")]
    repo: String,

    /// Branch of the asset repository
    #[arg(long, default_value = "master")]
    branch: String,

    /// Skip the reference listing and treat every catalog asset as shipped
    #[arg(long)]
    offline: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "\u{2718}".if_supports_color(Stdout, |t| t.red()), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let spinner = make_spinner("Loading catalog...");
    let catalog = Catalog::load(&cli.catalog);
    spinner.finish_and_clear();
    let catalog = catalog?;
    println!(
        "{} Catalog loaded: {} entries",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        catalog.len(),
    );

    let reference = if cli.offline {
        println!(
            "{}",
            "Offline mode: treating every catalog asset as shipped"
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
        offline_reference(&catalog)
    } else {
        let spinner = make_spinner("Listing reference assets...");
        let opts = ListingOptions {
            repo: cli.repo.clone(),
            branch: cli.branch.clone(),
        };
        let reference = fetch_reference_assets(&opts);
        spinner.finish_and_clear();
        let reference = reference?;
        println!(
            "{} {} reference assets listed from {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            reference.len(),
            cli.repo,
        );
        reference
    };

    let scan = scan_icon_dir(&cli.icons_dir, &catalog)?;
    let skipped_note = if scan.skipped > 0 {
        format!(", {} skipped", scan.skipped)
    } else {
        String::new()
    };
    println!(
        "{} {} icons on disk{}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        scan.inventory.len(),
        skipped_note,
    );

    let icons_dir = cli.icons_dir.display().to_string();
    let rows = build_rows(
        &catalog,
        &scan.inventory,
        &scan.backed_assets,
        &reference,
        &icons_dir,
    );
    write_report(&cli.output, &rows)?;

    print_summary(&rows, &cli.output);
    Ok(())
}

/// With `--offline` every catalog asset counts as shipped, so no pair is
/// filtered out of the report.
fn offline_reference(catalog: &Catalog) -> ReferenceAssets {
    catalog
        .entries()
        .iter()
        .flat_map(|e| [e.asset_name(false), e.asset_name(true)])
        .collect()
}

fn make_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn print_summary(rows: &[ReportRow], output: &Path) {
    let count = |status: IconStatus| rows.iter().filter(|r| r.status == status).count();

    println!();
    println!("{}", "Summary:".if_supports_color(Stdout, |t| t.bold()));
    println!(
        "  {} {} full",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        count(IconStatus::Full),
    );
    println!(
        "  {} {} fallback",
        "\u{2212}".if_supports_color(Stdout, |t| t.green()),
        count(IconStatus::Fallback),
    );
    println!(
        "  {} {} overlay missing",
        "\u{2718}".if_supports_color(Stdout, |t| t.yellow()),
        count(IconStatus::Default),
    );
    println!(
        "  {} {} missing",
        "\u{2718}".if_supports_color(Stdout, |t| t.red()),
        count(IconStatus::Missing),
    );
    println!();
    println!(
        "Report written to {}",
        output.display().if_supports_color(Stdout, |t| t.cyan()),
    );
}
