//! Simulated Delhi High Court source.
//!
//! Dressed up as a scraper: fetches log an outbound request, wait a
//! court-website-sized delay, then assemble a record from fixed pools.
//! No traffic ever leaves the process.

use std::ops::Range;
use std::time::Duration;

use async_trait::async_trait;
use causelist_core::{
    CaseId, CaseQuery, CaseRecord, CaseStatus, Error, OrderEntry, Parties, Result,
};
use chrono::{Datelike, Days, Local, NaiveDate, Utc};

use crate::document;
use crate::source::CourtSource;

/// Name of the simulated court.
pub const COURT_NAME: &str = "Delhi High Court";

/// Base URL attributed to the simulated court.
pub const COURT_BASE_URL: &str = "https://delhihighcourt.nic.in";

/// Simulated round-trip latency in milliseconds.
const SIMULATED_LATENCY_MS: Range<u64> = 2000..3000;

/// Case numbers reserved for rehearsing the failure path. The search form
/// advertises these as "Error Test" inputs.
const ERROR_TEST_NUMBERS: [&str; 2] = ["99999", "00000"];

const PETITIONERS: [&str; 8] = [
    "M/s ABC Corporation Ltd.",
    "Shri Ram Kumar",
    "Citizens Welfare Association",
    "Delhi Residents Forum",
    "M/s Tech Solutions Pvt. Ltd.",
    "Smt. Priya Sharma",
    "Delhi Transport Corporation",
    "M/s Global Industries Ltd.",
];

const RESPONDENTS: [&str; 8] = [
    "Union of India & Ors.",
    "State of Delhi & Anr.",
    "Delhi Development Authority",
    "Municipal Corporation of Delhi",
    "Delhi Police & Ors.",
    "M/s XYZ Industries Ltd.",
    "Delhi Metro Rail Corporation",
    "Government of NCT of Delhi",
];

const ORDER_TEMPLATES: [&str; 10] = [
    "Notice issued to respondents. Reply to be filed within 4 weeks.",
    "Counter affidavit filed by respondents. Rejoinder to be filed within 2 weeks.",
    "Arguments heard. Judgment reserved.",
    "Interim application disposed of. Main matter for hearing.",
    "Evidence recorded. Final arguments on next date.",
    "Petition filed. Defects pointed out.",
    "Case adjourned due to non-appearance of counsel.",
    "Status report called from respondents.",
    "Compliance affidavit filed. Matter for final disposal.",
    "Interim relief granted. Notice issued.",
];

/// Simulated Delhi High Court case-status source.
///
/// Records are synthesized per lookup. Party selection is deterministic in
/// the case number; everything else draws from the source's RNG, so a
/// fixed seed reproduces the same report for the same query.
pub struct DelhiHighCourt {
    latency: bool,
    seed: Option<u64>,
}

impl DelhiHighCourt {
    /// Creates a source with latency simulation enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            latency: true,
            seed: None,
        }
    }

    /// Disables the simulated network delay.
    #[must_use]
    pub fn without_latency(mut self) -> Self {
        self.latency = false;
        self
    }

    /// Fixes the RNG seed so synthesized records are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn rng(&self) -> fastrand::Rng {
        match self.seed {
            Some(seed) => {
                let mut rng = fastrand::Rng::new();
                rng.seed(seed);
                rng
            }
            None => fastrand::Rng::new(),
        }
    }

    async fn simulate_court_delay(&self) {
        if !self.latency {
            return;
        }
        let delay = Duration::from_millis(fastrand::u64(SIMULATED_LATENCY_MS));
        tokio::time::sleep(delay).await;
    }

    fn synthesize(&self, query: &CaseQuery) -> CaseRecord {
        let mut rng = self.rng();
        let today = Local::now().date_naive();

        let parties = pick_parties(query);
        let filing_date = random_filing_date(&mut rng, query.filing_year());
        let next_hearing_date = today + Days::new(rng.u64(0..90));
        let status = if rng.f32() > 0.2 {
            CaseStatus::Active
        } else {
            CaseStatus::Disposed
        };
        let orders = synthesize_orders(&mut rng, query, today);

        CaseRecord {
            id: CaseId::new(),
            case_number: query.formatted_number(),
            case_type: query.case_type().label(),
            filing_year: query.filing_year(),
            parties,
            filing_date,
            next_hearing_date,
            status,
            orders,
            last_updated: Local::now().format("%d/%m/%Y, %H:%M:%S").to_string(),
            source: COURT_NAME.to_string(),
            scraped_at: Utc::now(),
        }
    }
}

impl Default for DelhiHighCourt {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CourtSource for DelhiHighCourt {
    async fn fetch_case(&self, query: &CaseQuery) -> Result<CaseRecord> {
        let formatted = query.formatted_number();
        let search_url = format!("{COURT_BASE_URL}/case_status.asp");
        tracing::info!(case = %formatted, url = %search_url, "Fetching case status");

        self.simulate_court_delay().await;

        if ERROR_TEST_NUMBERS.contains(&query.case_number()) {
            tracing::warn!(case = %formatted, "Simulated court outage for error-test case number");
            return Err(Error::court_unavailable(format!(
                "connection to {COURT_BASE_URL} timed out"
            )));
        }

        let record = self.synthesize(query);
        tracing::debug!(
            case = %formatted,
            status = %record.status,
            orders = record.orders.len(),
            "Synthesized case record"
        );
        Ok(record)
    }

    async fn fetch_order_document(&self, pdf_url: &str) -> Result<Vec<u8>> {
        tracing::info!(url = %pdf_url, "Fetching order document");
        Ok(document::placeholder_order_pdf().to_vec())
    }

    fn court_name(&self) -> &str {
        COURT_NAME
    }
}

/// Selects parties deterministically from the case number. The folded
/// value can be anywhere in `u64`, so the offset wraps like the fold does.
fn pick_parties(query: &CaseQuery) -> Parties {
    let n = query.numeric_value() as usize;
    let petitioner = PETITIONERS[n % PETITIONERS.len()];
    let respondent = RESPONDENTS[n.wrapping_add(1) % RESPONDENTS.len()];
    Parties::new(petitioner, respondent)
}

/// Picks a random day in the filing year. Days stop at 28 so every month
/// is valid.
fn random_filing_date(rng: &mut fastrand::Rng, year: u16) -> NaiveDate {
    let month = rng.u32(1..=12);
    let day = rng.u32(1..=28);
    NaiveDate::from_ymd_opt(i32::from(year), month, day).expect("day capped at 28")
}

/// Picks a random day between the start of the filing year and the current
/// month.
fn random_past_date(rng: &mut fastrand::Rng, filing_year: u16, today: NaiveDate) -> NaiveDate {
    let filing_year = i32::from(filing_year);
    let span = (today.year() - filing_year).max(0);
    let year = filing_year + rng.i32(0..=span);
    let max_month = if year == today.year() {
        today.month()
    } else {
        12
    };
    let month = rng.u32(1..=max_month);
    let day = rng.u32(1..=28);
    NaiveDate::from_ymd_opt(year, month, day).expect("day capped at 28")
}

/// Builds 1-4 orders with dates between filing and today, newest first.
fn synthesize_orders(
    rng: &mut fastrand::Rng,
    query: &CaseQuery,
    today: NaiveDate,
) -> Vec<OrderEntry> {
    let count = rng.usize(1..=4);
    let mut orders = Vec::with_capacity(count);

    for _ in 0..count {
        let date = random_past_date(rng, query.filing_year(), today);
        let description = ORDER_TEMPLATES[rng.usize(..ORDER_TEMPLATES.len())].to_string();
        let pdf_url = (rng.f32() > 0.3).then(|| order_pdf_url(query, date));

        orders.push(OrderEntry {
            date,
            description,
            pdf_url,
        });
    }

    orders.sort_by(|a, b| b.date.cmp(&a.date));
    orders
}

fn order_pdf_url(query: &CaseQuery, date: NaiveDate) -> String {
    format!(
        "{COURT_BASE_URL}/orders/{}_{}_{}_{}.pdf",
        query.case_type().slug(),
        query.case_number(),
        query.filing_year(),
        date.format("%d%m%Y")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use causelist_core::CaseType;

    fn query(number: &str) -> CaseQuery {
        CaseQuery::new(CaseType::Writ, number, "2024").unwrap()
    }

    fn source() -> DelhiHighCourt {
        DelhiHighCourt::new().without_latency().with_seed(42)
    }

    #[tokio::test]
    async fn test_fetch_returns_record_for_valid_query() {
        let record = source().fetch_case(&query("12345")).await.unwrap();

        assert_eq!(record.case_number, "W.P.(C) 12345/2024");
        assert_eq!(record.case_type, "Writ Petition (Civil)");
        assert_eq!(record.filing_year, 2024);
        assert_eq!(record.source, "Delhi High Court");
        assert!(record.id.0.starts_with("case-"));
    }

    #[tokio::test]
    async fn test_parties_deterministic_in_case_number() {
        // 12345 % 8 == 1, (12345 + 1) % 8 == 2
        let record = source().fetch_case(&query("12345")).await.unwrap();
        assert_eq!(record.parties.petitioner, "Shri Ram Kumar");
        assert_eq!(record.parties.respondent, "Delhi Development Authority");

        // Same number again, unseeded source: parties never change.
        let unseeded = DelhiHighCourt::new().without_latency();
        let again = unseeded.fetch_case(&query("12345")).await.unwrap();
        assert_eq!(again.parties, record.parties);
    }

    #[tokio::test]
    async fn test_parties_wrap_for_oversized_case_number() {
        // u64::MAX: the fold lands on the last petitioner and the
        // respondent offset wraps around to the first entry.
        let record = source()
            .fetch_case(&query("18446744073709551615"))
            .await
            .unwrap();
        assert_eq!(record.parties.petitioner, "M/s Global Industries Ltd.");
        assert_eq!(record.parties.respondent, "Union of India & Ors.");
    }

    #[tokio::test]
    async fn test_seeded_sources_agree() {
        let a = source().fetch_case(&query("12345")).await.unwrap();
        let b = source().fetch_case(&query("12345")).await.unwrap();

        assert_eq!(a.filing_date, b.filing_date);
        assert_eq!(a.next_hearing_date, b.next_hearing_date);
        assert_eq!(a.status, b.status);
        assert_eq!(a.orders, b.orders);
    }

    #[tokio::test]
    async fn test_filing_date_falls_in_filing_year() {
        for seed in 0..20 {
            let source = DelhiHighCourt::new().without_latency().with_seed(seed);
            let record = source.fetch_case(&query("777")).await.unwrap();
            assert_eq!(record.filing_date.year(), 2024);
            assert!(record.filing_date.day() <= 28);
        }
    }

    #[tokio::test]
    async fn test_next_hearing_within_ninety_days() {
        let before = Local::now().date_naive();
        let record = source().fetch_case(&query("12345")).await.unwrap();
        let after = Local::now().date_naive();

        assert!(record.next_hearing_date >= before);
        assert!(record.next_hearing_date <= after + Days::new(90));
    }

    #[tokio::test]
    async fn test_orders_sorted_newest_first() {
        for seed in 0..20 {
            let source = DelhiHighCourt::new().without_latency().with_seed(seed);
            let record = source.fetch_case(&query("31415")).await.unwrap();

            assert!(!record.orders.is_empty());
            assert!(record.orders.len() <= 4);
            for pair in record.orders.windows(2) {
                assert!(pair[0].date >= pair[1].date);
            }
        }
    }

    #[tokio::test]
    async fn test_order_dates_bounded_by_filing_year() {
        for seed in 0..20 {
            let source = DelhiHighCourt::new().without_latency().with_seed(seed);
            let record = source.fetch_case(&query("31415")).await.unwrap();
            for order in &record.orders {
                assert!(order.date.year() >= 2024);
                assert!(order.date.year() <= Local::now().year());
            }
        }
    }

    #[tokio::test]
    async fn test_order_pdf_urls_well_formed() {
        let mut saw_url = false;
        for seed in 0..30 {
            let source = DelhiHighCourt::new().without_latency().with_seed(seed);
            let record = source.fetch_case(&query("31415")).await.unwrap();
            for order in &record.orders {
                if let Some(url) = &order.pdf_url {
                    saw_url = true;
                    assert!(url.starts_with("https://delhihighcourt.nic.in/orders/writ_31415_2024_"));
                    assert!(url.ends_with(".pdf"));
                }
            }
        }
        assert!(saw_url);
    }

    #[tokio::test]
    async fn test_error_test_numbers_fail() {
        for number in ["99999", "00000"] {
            let err = source().fetch_case(&query(number)).await.unwrap_err();
            assert!(matches!(err, Error::CourtUnavailable { .. }));
            assert!(!err.is_client_error());
            assert!(err
                .to_string()
                .starts_with("Failed to fetch case data from court website"));
        }
    }

    #[tokio::test]
    async fn test_order_document_is_placeholder_pdf() {
        let bytes = source()
            .fetch_order_document("https://delhihighcourt.nic.in/orders/writ_12345_2024_01012024.pdf")
            .await
            .unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));
    }

    #[test]
    fn test_court_name() {
        assert_eq!(DelhiHighCourt::new().court_name(), "Delhi High Court");
    }
}
