//! CLI command implementations.

use std::path::PathBuf;

use color_eyre::eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};

use causelist_core::{CaseQuery, CaseRecord, CaseType, COURT_DATE_FORMAT};
use causelist_court::{CourtSource, DelhiHighCourt};

/// Start the lookup server.
pub async fn serve(
    host: String,
    port: u16,
    db: Option<PathBuf>,
    no_audit: bool,
    simulate_latency: bool,
    cors: bool,
) -> Result<()> {
    use causelist_server::{Server, ServerConfig};

    tracing::info!("Starting causelist server...");

    let addr = format!("{}:{}", host, port).parse()?;
    let audit_db = if no_audit { None } else { db };
    let config = ServerConfig {
        addr,
        cors,
        audit_db,
        simulate_latency,
    };

    let server = Server::new(config);
    server.run().await?;

    Ok(())
}

/// Look up a single case and print it.
pub async fn fetch(
    case_type: String,
    case_number: String,
    filing_year: String,
    json: bool,
    simulate_latency: bool,
) -> Result<()> {
    let query = CaseQuery::new(CaseType::parse(&case_type), case_number, &filing_year)?;

    let source = if simulate_latency {
        DelhiHighCourt::new()
    } else {
        DelhiHighCourt::new().without_latency()
    };

    // Show progress while the "court website" answers
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message(format!(
        "Fetching {} from {}...",
        query.formatted_number(),
        source.court_name()
    ));
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = source.fetch_case(&query).await;
    spinner.finish_and_clear();

    let record = result?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    print_report(&record);

    Ok(())
}

fn print_report(record: &CaseRecord) {
    println!("Case Report");
    println!("===========\n");

    println!("Case number:  {}", record.case_number);
    println!("Case type:    {}", record.case_type);
    println!("Filing year:  {}", record.filing_year);
    println!("Status:       {}", record.status);
    println!();
    println!("Petitioner:   {}", record.parties.petitioner);
    println!("Respondent:   {}", record.parties.respondent);
    println!();
    println!(
        "Filed:        {}",
        record.filing_date.format(COURT_DATE_FORMAT)
    );
    println!(
        "Next hearing: {}",
        record.next_hearing_date.format(COURT_DATE_FORMAT)
    );

    println!("\nOrders ({}):", record.orders.len());
    for order in &record.orders {
        let marker = if order.pdf_url.is_some() {
            "[PDF]"
        } else {
            "     "
        };
        println!(
            "  {} {} {}",
            order.date.format(COURT_DATE_FORMAT),
            marker,
            order.description
        );
    }

    println!("\nSource: {} (last updated {})", record.source, record.last_updated);
}

/// Display version information.
pub fn version() {
    println!("Causelist {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Court case lookup over simulated Delhi High Court records.");
    println!();
    println!("Components:");
    println!("  causelist-core       - Queries and case records");
    println!("  causelist-court      - Simulated court source");
    println!("  causelist-store      - Audit logging");
    println!("  causelist-server     - HTTP API and search form");
    println!("  causelist-telemetry  - Observability");
}
