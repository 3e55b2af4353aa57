use std::path::PathBuf;

use anyhow::{bail, Result};
use catalog::Catalog;
use clap::{Parser, Subcommand};
use gallery_api::{browser::paginate, window::select_window};
use shared::domain::DesignRecord;

#[derive(Parser, Debug)]
struct Cli {
    #[arg(long, default_value = "data/designs.json")]
    catalog: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load and validate the catalog.
    Check,
    /// Print one sidebar navigation window.
    Window {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long, default_value_t = 8)]
        page_size: usize,
    },
    /// Print one page of the all-designs listing.
    Browse {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 12)]
        per_page: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let catalog = Catalog::load(&cli.catalog)?;

    match cli.command {
        Command::Check => {
            let newest = catalog
                .newest()
                .map(|record| record.id.as_str())
                .unwrap_or("-");
            println!("designs={} newest={newest}", catalog.len());
        }
        Command::Window { page, page_size } => {
            if page_size == 0 {
                bail!("--page-size must be at least 1");
            }
            let window = select_window(catalog.len(), page, page_size);
            for record in window.records(catalog.records()) {
                print_record(record);
            }
            let nav = &window.nav;
            println!(
                "start_index={} count={} has_next={} next_page={} has_previous={} previous_page={}",
                window.start_index,
                window.count,
                nav.has_next,
                page_label(nav.next_page_number),
                nav.has_previous,
                page_label(nav.previous_page_number),
            );
        }
        Command::Browse { page, per_page } => {
            if per_page == 0 {
                bail!("--per-page must be at least 1");
            }
            let listing = paginate(catalog.records(), page, per_page);
            for record in &listing.items {
                print_record(record);
            }
            println!("page={} total_pages={}", listing.page, listing.total_pages);
        }
    }

    Ok(())
}

fn print_record(record: &DesignRecord) {
    println!("{}\t{}\t{}", record.id, record.name, record.designer);
}

fn page_label(page: Option<u32>) -> String {
    page.map_or_else(|| "-".to_string(), |page| page.to_string())
}
