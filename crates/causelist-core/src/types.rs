//! Common types used across the causelist service.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a synthesized case record.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct CaseId(pub String);

impl CaseId {
    /// Creates a new random `CaseId`.
    #[must_use]
    pub fn new() -> Self {
        Self(format!("case-{}", Uuid::new_v4()))
    }
}

impl Default for CaseId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a lookup, shared between the API response and the
/// audit rows written for it.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct QueryId(pub String);

impl QueryId {
    /// Creates a new random `QueryId`.
    #[must_use]
    pub fn new() -> Self {
        Self(format!("query-{}", Uuid::new_v4()))
    }
}

impl Default for QueryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for QueryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Case categories offered by the search form.
///
/// Unrecognized values are not rejected; the court registry treats anything
/// it does not know as a literal category, so [`CaseType::Other`] carries
/// the raw input through.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub enum CaseType {
    /// Writ Petition (Civil).
    Writ,
    /// Civil Suit.
    Civil,
    /// Criminal Case.
    Criminal,
    /// Civil Appeal.
    Appeal,
    /// Civil Revision.
    Revision,
    /// Miscellaneous Application.
    Misc,
    /// Unrecognized category, carried through as submitted.
    Other(String),
}

impl CaseType {
    /// Parses a form slug ("writ", "civil", ...). The lookup is exact and
    /// never fails; anything unrecognized becomes [`CaseType::Other`] and
    /// is carried through as submitted.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "writ" => Self::Writ,
            "civil" => Self::Civil,
            "criminal" => Self::Criminal,
            "appeal" => Self::Appeal,
            "revision" => Self::Revision,
            "misc" => Self::Misc,
            _ => Self::Other(value.to_string()),
        }
    }

    /// Registry prefix used in formatted case numbers, e.g. `W.P.(C)`.
    #[must_use]
    pub fn prefix(&self) -> String {
        match self {
            Self::Writ => "W.P.(C)".to_string(),
            Self::Civil => "C.S.".to_string(),
            Self::Criminal => "Crl.".to_string(),
            Self::Appeal => "C.A.".to_string(),
            Self::Revision => "C.R.".to_string(),
            Self::Misc => "Misc.".to_string(),
            Self::Other(s) => s.to_uppercase(),
        }
    }

    /// Human-readable label shown in case reports.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Writ => "Writ Petition (Civil)".to_string(),
            Self::Civil => "Civil Suit".to_string(),
            Self::Criminal => "Criminal Case".to_string(),
            Self::Appeal => "Civil Appeal".to_string(),
            Self::Revision => "Civil Revision".to_string(),
            Self::Misc => "Miscellaneous Application".to_string(),
            Self::Other(s) => s.to_uppercase(),
        }
    }

    /// Form slug, as used in generated document URLs.
    #[must_use]
    pub fn slug(&self) -> String {
        match self {
            Self::Writ => "writ".to_string(),
            Self::Civil => "civil".to_string(),
            Self::Criminal => "criminal".to_string(),
            Self::Appeal => "appeal".to_string(),
            Self::Revision => "revision".to_string(),
            Self::Misc => "misc".to_string(),
            Self::Other(s) => s.clone(),
        }
    }
}

impl std::fmt::Display for CaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<&str> for CaseType {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

/// Whether a case is still live before the court.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseStatus {
    /// Pending, with hearings still being listed.
    Active,
    /// Decided and closed.
    Disposed,
}

impl std::fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Disposed => write!(f, "Disposed"),
        }
    }
}

/// The petitioner/respondent pair attached to a case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parties {
    /// Party that filed the case.
    pub petitioner: String,
    /// Party the case was filed against.
    pub respondent: String,
}

impl Parties {
    /// Creates a new `Parties` pair.
    #[must_use]
    pub fn new(petitioner: impl Into<String>, respondent: impl Into<String>) -> Self {
        Self {
            petitioner: petitioner.into(),
            respondent: respondent.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_id_prefix() {
        let id = CaseId::new();
        assert!(id.0.starts_with("case-"));
        assert_ne!(CaseId::new(), CaseId::new());
    }

    #[test]
    fn test_query_id_prefix() {
        let id = QueryId::new();
        assert!(id.to_string().starts_with("query-"));
    }

    #[test]
    fn test_case_type_parse_known_slugs() {
        assert_eq!(CaseType::parse("writ"), CaseType::Writ);
        assert_eq!(CaseType::parse("civil"), CaseType::Civil);
        assert_eq!(CaseType::parse("criminal"), CaseType::Criminal);
        assert_eq!(CaseType::parse("appeal"), CaseType::Appeal);
        assert_eq!(CaseType::parse("revision"), CaseType::Revision);
        assert_eq!(CaseType::parse("misc"), CaseType::Misc);
    }

    #[test]
    fn test_case_type_parse_unknown_slug() {
        let ty = CaseType::parse("tax");
        assert_eq!(ty, CaseType::Other("tax".to_string()));
        assert_eq!(ty.prefix(), "TAX");
        assert_eq!(ty.label(), "TAX");
        assert_eq!(ty.slug(), "tax");
    }

    #[test]
    fn test_case_type_parse_is_case_sensitive() {
        let ty = CaseType::parse("WRIT");
        assert_eq!(ty, CaseType::Other("WRIT".to_string()));
        assert_eq!(ty.prefix(), "WRIT");
        assert_eq!(ty.slug(), "WRIT");
    }

    #[test]
    fn test_case_type_prefixes() {
        assert_eq!(CaseType::Writ.prefix(), "W.P.(C)");
        assert_eq!(CaseType::Civil.prefix(), "C.S.");
        assert_eq!(CaseType::Criminal.prefix(), "Crl.");
        assert_eq!(CaseType::Appeal.prefix(), "C.A.");
        assert_eq!(CaseType::Revision.prefix(), "C.R.");
        assert_eq!(CaseType::Misc.prefix(), "Misc.");
    }

    #[test]
    fn test_case_status_serializes_as_plain_variant() {
        assert_eq!(
            serde_json::to_string(&CaseStatus::Active).unwrap(),
            "\"Active\""
        );
        assert_eq!(
            serde_json::to_string(&CaseStatus::Disposed).unwrap(),
            "\"Disposed\""
        );
    }

    #[test]
    fn test_case_status_display() {
        assert_eq!(CaseStatus::Active.to_string(), "Active");
        assert_eq!(CaseStatus::Disposed.to_string(), "Disposed");
    }
}
