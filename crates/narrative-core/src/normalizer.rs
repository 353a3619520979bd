//! Field normalizer: arbitrary input columns to a [`CanonicalLead`].
//!
//! Column names are lower-cased and spaces become underscores. Each canonical
//! field then resolves through its own ordered list of candidate columns; the
//! first candidate holding a non-blank value wins, otherwise the field takes
//! its fallback.

use std::collections::HashMap;

use crate::types::{CanonicalLead, RawRecord};

/// Column carrying a pre-assigned archetype when auto-detection is off
pub const COMPANY_DNA_COLUMN: &str = "company_dna";

/// Candidate columns and fallback for one canonical field
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub candidates: &'static [&'static str],
    pub fallback: &'static str,
}

pub const FIRST_NAME: FieldSpec = FieldSpec {
    candidates: &["first_name", "firstname"],
    fallback: "there",
};
/// Full-name column used when no first-name column is present
pub const FULL_NAME_COLUMN: &str = "name";
pub const LAST_NAME: FieldSpec = FieldSpec {
    candidates: &["last_name", "lastname"],
    fallback: "",
};
pub const COMPANY: FieldSpec = FieldSpec {
    candidates: &["company", "company_name", "organization"],
    fallback: "Unknown",
};
pub const TITLE: FieldSpec = FieldSpec {
    candidates: &["title", "job_title", "position"],
    fallback: "",
};
pub const EMAIL: FieldSpec = FieldSpec {
    candidates: &["email", "email_address"],
    fallback: "",
};
pub const LINKEDIN: FieldSpec = FieldSpec {
    candidates: &["linkedin", "linkedin_url", "profile_url"],
    fallback: "",
};
pub const EMPLOYEES: FieldSpec = FieldSpec {
    candidates: &["employees", "company_size", "size"],
    fallback: "",
};

/// Lower-case a column name and replace spaces with underscores
pub fn normalize_key(key: &str) -> String {
    key.to_lowercase().replace(' ', "_")
}

/// A row keyed by normalized column names, holding only non-blank values.
///
/// When two columns normalize to the same key the later one wins.
#[derive(Debug, Clone, Default)]
pub struct NormalizedRow {
    fields: HashMap<String, String>,
}

impl NormalizedRow {
    pub fn from_raw(raw: &RawRecord) -> Self {
        let mut fields = HashMap::with_capacity(raw.len());

        for (column, cell) in raw.iter() {
            let key = normalize_key(column);
            match cell.as_text() {
                Some(text) if !text.trim().is_empty() => {
                    fields.insert(key, text.trim().to_string());
                }
                _ => {
                    fields.remove(&key);
                }
            }
        }

        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(|s| s.as_str())
    }

    /// First candidate column that holds a value
    pub fn first_present(&self, candidates: &[&str]) -> Option<&str> {
        candidates.iter().find_map(|key| self.get(key))
    }

    /// Resolve a field through its candidates, ending in its fallback
    pub fn resolve(&self, spec: &FieldSpec) -> String {
        self.first_present(spec.candidates)
            .unwrap_or(spec.fallback)
            .to_string()
    }

    /// First name, then the first token of the full name, then "there"
    pub fn resolve_first_name(&self) -> String {
        self.first_present(FIRST_NAME.candidates)
            .or_else(|| {
                self.get(FULL_NAME_COLUMN)
                    .and_then(|name| name.split_whitespace().next())
            })
            .unwrap_or(FIRST_NAME.fallback)
            .to_string()
    }

    pub fn to_lead(&self) -> CanonicalLead {
        CanonicalLead {
            first_name: self.resolve_first_name(),
            last_name: self.resolve(&LAST_NAME),
            company: self.resolve(&COMPANY),
            title: self.resolve(&TITLE),
            email: self.resolve(&EMAIL),
            linkedin: self.resolve(&LINKEDIN),
            employees: self.resolve(&EMPLOYEES),
        }
    }
}

/// Normalize one raw record into a canonical lead
pub fn normalize(raw: &RawRecord) -> CanonicalLead {
    NormalizedRow::from_raw(raw).to_lead()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellValue;

    fn record(pairs: &[(&str, &str)]) -> RawRecord {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("First Name"), "first_name");
        assert_eq!(normalize_key("Company DNA"), "company_dna");
        assert_eq!(normalize_key("EMAIL"), "email");
    }

    #[test]
    fn test_empty_record_falls_back() {
        let lead = normalize(&RawRecord::new());
        assert_eq!(lead.first_name, "there");
        assert_eq!(lead.company, "Unknown");
        assert_eq!(lead.last_name, "");
        assert_eq!(lead.title, "");
        assert_eq!(lead.email, "");
        assert_eq!(lead.linkedin, "");
        assert_eq!(lead.employees, "");
    }

    #[test]
    fn test_synonym_priority_chain() {
        let lead = normalize(&record(&[
            ("Organization", "Org Co"),
            ("Company Name", "Named Co"),
            ("Job Title", "Head of Growth"),
            ("Position", "ignored"),
            ("Email Address", "a@b.co"),
            ("Profile URL", "https://linkedin.com/in/a"),
            ("Company Size", "1,200+"),
        ]));

        assert_eq!(lead.company, "Named Co");
        assert_eq!(lead.title, "Head of Growth");
        assert_eq!(lead.email, "a@b.co");
        assert_eq!(lead.linkedin, "https://linkedin.com/in/a");
        assert_eq!(lead.employees, "1,200+");
    }

    #[test]
    fn test_first_name_from_full_name() {
        let lead = normalize(&record(&[("Name", "Jane Doe")]));
        assert_eq!(lead.first_name, "Jane");

        let lead = normalize(&record(&[("FirstName", "Janet"), ("name", "Jane Doe")]));
        assert_eq!(lead.first_name, "Janet");
    }

    #[test]
    fn test_blank_values_count_as_absent() {
        let lead = normalize(&record(&[
            ("first_name", "   "),
            ("name", ""),
            ("company", ""),
            ("company_name", "Fallback Co"),
        ]));
        assert_eq!(lead.first_name, "there");
        assert_eq!(lead.company, "Fallback Co");

        let mut raw = RawRecord::new();
        raw.insert("first_name", CellValue::Null);
        raw.insert("employees", 45_i64);
        let lead = normalize(&raw);
        assert_eq!(lead.first_name, "there");
        assert_eq!(lead.employees, "45");
    }

    #[test]
    fn test_later_duplicate_column_wins() {
        let lead = normalize(&record(&[("Email", "first@a.co"), ("email", "second@a.co")]));
        assert_eq!(lead.email, "second@a.co");
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let raw = record(&[("Name", "Jane Doe"), ("Company", "Acme Inc"), ("Title", "VP")]);
        assert_eq!(normalize(&raw), normalize(&raw));
    }

    #[test]
    fn test_company_dna_column_lookup() {
        let row = NormalizedRow::from_raw(&record(&[("Company DNA", "Enterprise")]));
        assert_eq!(row.get(COMPANY_DNA_COLUMN), Some("Enterprise"));
    }
}
