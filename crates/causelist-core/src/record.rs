//! The case record returned to clients.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{CaseId, CaseStatus, Parties};

/// Date format used by the Delhi High Court registry.
pub const COURT_DATE_FORMAT: &str = "%d/%m/%Y";

/// One docket event: a dated order with an optional document link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderEntry {
    /// Date the order was passed.
    #[serde(with = "court_date")]
    pub date: NaiveDate,
    /// Free-text summary of the order.
    pub description: String,
    /// Link to the order document, when one was uploaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
}

/// The case-status report returned to the client.
///
/// Resembles a Delhi High Court status page but is synthesized fresh on
/// every lookup; nothing here comes from a real data source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    /// Opaque record identifier.
    pub id: CaseId,
    /// Registry-formatted case number, e.g. `W.P.(C) 12345/2024`.
    pub case_number: String,
    /// Display label for the case category.
    pub case_type: String,
    /// Year the case was filed.
    pub filing_year: u16,
    /// Petitioner and respondent.
    pub parties: Parties,
    /// Date the case was filed.
    #[serde(with = "court_date")]
    pub filing_date: NaiveDate,
    /// Next listed hearing date.
    #[serde(with = "court_date")]
    pub next_hearing_date: NaiveDate,
    /// Whether the case is active or disposed.
    pub status: CaseStatus,
    /// Order history, newest first.
    pub orders: Vec<OrderEntry>,
    /// Wall-clock stamp of when this report was assembled.
    pub last_updated: String,
    /// Name of the court the report is attributed to.
    pub source: String,
    /// UTC timestamp of the lookup, RFC 3339.
    pub scraped_at: DateTime<Utc>,
}

/// Serde adapter for the court's `dd/mm/yyyy` date strings.
mod court_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::COURT_DATE_FORMAT;

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(COURT_DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, COURT_DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CaseStatus;

    fn sample_record() -> CaseRecord {
        CaseRecord {
            id: CaseId("case-0000".to_string()),
            case_number: "W.P.(C) 12345/2024".to_string(),
            case_type: "Writ Petition (Civil)".to_string(),
            filing_year: 2024,
            parties: Parties::new("Shri Ram Kumar", "Union of India & Ors."),
            filing_date: NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
            next_hearing_date: NaiveDate::from_ymd_opt(2026, 9, 15).unwrap(),
            status: CaseStatus::Active,
            orders: vec![
                OrderEntry {
                    date: NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
                    description: "Notice issued to respondents. Reply to be filed within 4 weeks."
                        .to_string(),
                    pdf_url: Some(
                        "https://delhihighcourt.nic.in/orders/writ_12345_2024_02062024.pdf"
                            .to_string(),
                    ),
                },
                OrderEntry {
                    date: NaiveDate::from_ymd_opt(2024, 4, 18).unwrap(),
                    description: "Petition filed. Defects pointed out.".to_string(),
                    pdf_url: None,
                },
            ],
            last_updated: "25/08/2026, 10:30:45".to_string(),
            source: "Delhi High Court".to_string(),
            scraped_at: "2026-08-25T10:30:45Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let value = serde_json::to_value(sample_record()).unwrap();
        assert_eq!(value["caseNumber"], "W.P.(C) 12345/2024");
        assert_eq!(value["caseType"], "Writ Petition (Civil)");
        assert_eq!(value["filingYear"], 2024);
        assert_eq!(value["filingDate"], "07/03/2024");
        assert_eq!(value["nextHearingDate"], "15/09/2026");
        assert_eq!(value["status"], "Active");
        assert_eq!(value["lastUpdated"], "25/08/2026, 10:30:45");
        assert_eq!(value["source"], "Delhi High Court");
        assert_eq!(value["scrapedAt"], "2026-08-25T10:30:45Z");
        assert_eq!(value["parties"]["petitioner"], "Shri Ram Kumar");
    }

    #[test]
    fn test_pdf_url_omitted_when_absent() {
        let value = serde_json::to_value(sample_record()).unwrap();
        let orders = value["orders"].as_array().unwrap();
        assert!(orders[0].get("pdfUrl").is_some());
        assert_eq!(orders[0]["date"], "02/06/2024");
        assert!(orders[1].get("pdfUrl").is_none());
    }

    #[test]
    fn test_record_round_trips() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: CaseRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.case_number, record.case_number);
        assert_eq!(back.filing_date, record.filing_date);
        assert_eq!(back.orders, record.orders);
    }
}
