//! Demo desk: seeds a catalog, prints it, and replays a script of loans.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use library_lending::{
    Book, Catalog, CatalogConfig, CatalogSummary, LoanLogger, LoanRequest, Reader, logging,
};

/// Command line options
#[derive(Debug, Parser)]
#[command(
    name = "library-lending",
    version,
    about = "Replay loan requests against a library catalog"
)]
struct Cli {
    /// TOML file with books, readers and requests (built-in sample if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also print the final catalog summary as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Entry point
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let config = match &cli.config {
        Some(path) => {
            CatalogConfig::load(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => CatalogConfig::default(),
    };

    let mut catalog = config.build_catalog();
    catalog.register_observer(Box::new(LoanLogger));

    print_entities(&catalog);

    for request in &config.requests {
        println!("{}", run_request(&mut catalog, request));
    }

    let summary = CatalogSummary::capture(&catalog);
    print!("{summary}");
    if cli.json {
        println!("{}", summary.to_json().context("encoding summary")?);
    }

    let discrepancies = catalog.loan_discrepancies();
    if !discrepancies.is_empty() {
        tracing::warn!(count = discrepancies.len(), "loan records disagree: {discrepancies:?}");
    }
    Ok(())
}

/// Print every author, publisher, book and reader, then the catalog itself
fn print_entities(catalog: &Catalog) {
    let mut books: Vec<&Book> = catalog.books().collect();
    books.sort_by(|a, b| a.isbn().cmp(b.isbn()));
    for book in books {
        println!("{}", book.author());
        println!("{}", book.publisher());
        println!("{book}");
    }

    let mut readers: Vec<&Reader> = catalog.readers().collect();
    readers.sort_by_key(|reader| reader.id());
    for reader in readers {
        println!("{reader}");
    }

    println!("{catalog}");
}

/// Apply one request and describe its outcome
fn run_request(catalog: &mut Catalog, request: &LoanRequest) -> String {
    let outcome = match request {
        LoanRequest::Lend { reader_id, isbn } => {
            catalog.try_lend_book(*reader_id, isbn).map_err(|e| e.to_string())
        }
        LoanRequest::Return { reader_id, isbn } => {
            catalog.try_return_book(*reader_id, isbn).map_err(|e| e.to_string())
        }
    };
    outcome.map_or_else(
        |reason| format!("{request}: failed ({reason})"),
        |()| format!("{request}: succeeded"),
    )
}
