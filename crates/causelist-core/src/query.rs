//! Validated case-lookup queries.

use chrono::Datelike;

use crate::error::{Error, Result};
use crate::types::CaseType;

/// Earliest filing year the service accepts.
pub const MIN_FILING_YEAR: u16 = 2000;

/// A validated case lookup.
///
/// Construction enforces the form's rules: the case number is non-empty
/// ASCII digits and the filing year lies in `2000..=current_year`. The
/// case type is never rejected; unknown values ride along as
/// [`CaseType::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseQuery {
    case_type: CaseType,
    case_number: String,
    filing_year: u16,
}

impl CaseQuery {
    /// Validates raw form input into a query.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCaseNumber`] if the case number is empty or
    /// contains a non-digit, and [`Error::InvalidFilingYear`] if the year
    /// does not parse or falls outside the accepted range.
    pub fn new(
        case_type: CaseType,
        case_number: impl Into<String>,
        filing_year: &str,
    ) -> Result<Self> {
        let case_number = case_number.into();
        if case_number.is_empty() || !case_number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidCaseNumber { value: case_number });
        }

        let max = current_year();
        let invalid_year = |value: &str| Error::InvalidFilingYear {
            value: value.to_string(),
            min: MIN_FILING_YEAR,
            max,
        };
        let filing_year = filing_year.trim();
        let year: u16 = filing_year.parse().map_err(|_| invalid_year(filing_year))?;
        if !(MIN_FILING_YEAR..=max).contains(&year) {
            return Err(invalid_year(filing_year));
        }

        Ok(Self {
            case_type,
            case_number,
            filing_year: year,
        })
    }

    /// The case category.
    #[must_use]
    pub fn case_type(&self) -> &CaseType {
        &self.case_type
    }

    /// The raw digits of the case number.
    #[must_use]
    pub fn case_number(&self) -> &str {
        &self.case_number
    }

    /// The filing year.
    #[must_use]
    pub fn filing_year(&self) -> u16 {
        self.filing_year
    }

    /// Registry form of the case number, e.g. `W.P.(C) 12345/2024`.
    #[must_use]
    pub fn formatted_number(&self) -> String {
        format!(
            "{} {}/{}",
            self.case_type.prefix(),
            self.case_number,
            self.filing_year
        )
    }

    /// Folds the digits of the case number into a `u64`, wrapping on
    /// overflow. Leading zeros fold to the same value as the bare number.
    #[must_use]
    pub fn numeric_value(&self) -> u64 {
        self.case_number
            .bytes()
            .fold(0u64, |acc, b| {
                acc.wrapping_mul(10).wrapping_add(u64::from(b - b'0'))
            })
    }
}

fn current_year() -> u16 {
    let year = chrono::Local::now().year();
    u16::try_from(year).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_query() {
        let query = CaseQuery::new(CaseType::Writ, "12345", "2024").unwrap();
        assert_eq!(query.case_number(), "12345");
        assert_eq!(query.filing_year(), 2024);
        assert_eq!(query.formatted_number(), "W.P.(C) 12345/2024");
    }

    #[test]
    fn test_rejects_non_digit_case_number() {
        let err = CaseQuery::new(CaseType::Writ, "12a45", "2024").unwrap_err();
        assert!(matches!(err, Error::InvalidCaseNumber { .. }));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_rejects_empty_case_number() {
        let err = CaseQuery::new(CaseType::Writ, "", "2024").unwrap_err();
        assert!(matches!(err, Error::InvalidCaseNumber { .. }));
    }

    #[test]
    fn test_rejects_year_before_2000() {
        let err = CaseQuery::new(CaseType::Civil, "42", "1999").unwrap_err();
        assert!(matches!(err, Error::InvalidFilingYear { .. }));
    }

    #[test]
    fn test_rejects_year_in_future() {
        let err = CaseQuery::new(CaseType::Civil, "42", "9999").unwrap_err();
        assert!(matches!(err, Error::InvalidFilingYear { .. }));
    }

    #[test]
    fn test_rejects_non_numeric_year() {
        let err = CaseQuery::new(CaseType::Civil, "42", "twenty").unwrap_err();
        assert!(matches!(err, Error::InvalidFilingYear { .. }));
    }

    #[test]
    fn test_accepts_boundary_years() {
        assert!(CaseQuery::new(CaseType::Misc, "7", "2000").is_ok());
        let current = chrono::Local::now().format("%Y").to_string();
        assert!(CaseQuery::new(CaseType::Misc, "7", &current).is_ok());
    }

    #[test]
    fn test_trims_year_whitespace() {
        let query = CaseQuery::new(CaseType::Writ, "7", " 2020 ").unwrap();
        assert_eq!(query.filing_year(), 2020);
    }

    #[test]
    fn test_numeric_value_folds_digits() {
        let query = CaseQuery::new(CaseType::Writ, "12345", "2024").unwrap();
        assert_eq!(query.numeric_value(), 12345);

        let zeros = CaseQuery::new(CaseType::Writ, "00000", "2024").unwrap();
        assert_eq!(zeros.numeric_value(), 0);
    }

    #[test]
    fn test_numeric_value_handles_oversized_numbers() {
        // 40 digits would overflow u64 without wrapping.
        let digits = "9".repeat(40);
        let query = CaseQuery::new(CaseType::Writ, digits, "2024").unwrap();
        let _ = query.numeric_value();
    }

    #[test]
    fn test_formatted_number_uses_uppercased_unknown_type() {
        let query = CaseQuery::new(CaseType::parse("tax"), "99", "2020").unwrap();
        assert_eq!(query.formatted_number(), "TAX 99/2020");
    }
}
