//! Fundamental types for the lead script generator.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

use crate::error::{json_kind, Error, Result};

/// Identifier of one batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BatchId(pub Uuid);

impl BatchId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single input cell. Rows only ever carry scalars.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Text form of the cell, `None` for null.
    ///
    /// Integral floats render without a fractional part so a spreadsheet
    /// export of `800.0` still reads as an employee count of `800`.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Null => None,
            CellValue::Bool(b) => Some(b.to_string()),
            CellValue::Integer(n) => Some(n.to_string()),
            CellValue::Float(f) => {
                if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
                    Some(format!("{}", *f as i64))
                } else {
                    Some(f.to_string())
                }
            }
            CellValue::Text(s) => Some(s.clone()),
        }
    }

    fn from_json(index: usize, column: &str, value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(CellValue::Null),
            Value::Bool(b) => Ok(CellValue::Bool(*b)),
            Value::Number(n) => Ok(match n.as_i64() {
                Some(i) => CellValue::Integer(i),
                None => CellValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            }),
            Value::String(s) => Ok(CellValue::Text(s.clone())),
            Value::Array(_) | Value::Object(_) => Err(Error::NonScalarField {
                index,
                column: column.to_string(),
            }),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Integer(n)
    }
}

/// One untyped input row: column name to scalar value, in column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    fields: Vec<(String, CellValue)>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        self.fields.push((column.into(), value.into()));
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Validate one JSON row. `index` is only used for error reporting.
    pub fn from_json(index: usize, value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or(Error::NotRowShaped {
            index,
            found: json_kind(value),
        })?;

        let fields = object
            .iter()
            .map(|(column, cell)| -> Result<(String, CellValue)> {
                Ok((column.clone(), CellValue::from_json(index, column, cell)?))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { fields })
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<CellValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Validate a whole input table before any row is processed.
///
/// The input must be an array whose every element is an object of scalars.
pub fn records_from_json(table: &Value) -> Result<Vec<RawRecord>> {
    let rows = table.as_array().ok_or_else(|| {
        Error::InvalidInput(format!(
            "expected an array of rows, found {}",
            json_kind(table)
        ))
    })?;

    rows.iter()
        .enumerate()
        .map(|(index, row)| RawRecord::from_json(index, row))
        .collect()
}

/// A lead after column normalization. Every field is always populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalLead {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub title: String,
    pub email: String,
    pub linkedin: String,
    /// Free text; may be empty or non-numeric
    pub employees: String,
}

/// Priority tier derived from job title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "P1 - Hot")]
    Hot,
    #[serde(rename = "P2 - Warm")]
    Warm,
    #[serde(rename = "P3 - Nurture")]
    Nurture,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Hot, Priority::Warm, Priority::Nurture];

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Hot => "P1 - Hot",
            Priority::Warm => "P2 - Warm",
            Priority::Nurture => "P3 - Nurture",
        }
    }

    /// Guide text shown next to each tier
    pub fn description(&self) -> &'static str {
        match self {
            Priority::Hot => "Decision maker at target company with active buying signals",
            Priority::Warm => "Right persona, good company fit, no immediate signals",
            Priority::Nurture => "Good fit but needs education or timing alignment",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Company archetype ("Company DNA")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Archetype {
    #[serde(rename = "High-Growth Startup")]
    HighGrowthStartup,
    #[serde(rename = "Enterprise")]
    Enterprise,
    #[default]
    #[serde(rename = "Mid-Market")]
    MidMarket,
    #[serde(rename = "Agency/Consultancy")]
    AgencyConsultancy,
}

impl Archetype {
    pub const ALL: [Archetype; 4] = [
        Archetype::HighGrowthStartup,
        Archetype::Enterprise,
        Archetype::MidMarket,
        Archetype::AgencyConsultancy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Archetype::HighGrowthStartup => "High-Growth Startup",
            Archetype::Enterprise => "Enterprise",
            Archetype::MidMarket => "Mid-Market",
            Archetype::AgencyConsultancy => "Agency/Consultancy",
        }
    }

    /// Exact label match, ignoring case and surrounding whitespace
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.label().eq_ignore_ascii_case(label))
    }

    /// Label lookup that falls back to Mid-Market for unknown tags
    pub fn from_label_or_default(label: Option<&str>) -> Self {
        label.and_then(Self::from_label).unwrap_or_default()
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A canonical lead with its classification tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedLead {
    pub lead: CanonicalLead,
    pub priority: Priority,
    pub archetype: Archetype,
}

/// The three outreach texts generated for one lead
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedScripts {
    pub email_subject: String,
    pub email_body: String,
    /// At most [`LINKEDIN_MESSAGE_LIMIT`] characters
    pub linkedin_message: String,
}

/// Maximum length of a connection message, in characters
pub const LINKEDIN_MESSAGE_LIMIT: usize = 300;

/// One output row. Serialized field names are the export column headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    #[serde(rename = "First Name")]
    pub first_name: String,
    #[serde(rename = "Last Name")]
    pub last_name: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "LinkedIn")]
    pub linkedin: String,
    #[serde(rename = "Priority")]
    pub priority: Priority,
    #[serde(rename = "Company DNA")]
    pub archetype: Archetype,
    #[serde(rename = "Email Subject")]
    pub email_subject: String,
    #[serde(rename = "Email Body")]
    pub email_body: String,
    #[serde(rename = "LinkedIn Message")]
    pub linkedin_message: String,
}

impl ResultRow {
    pub fn assemble(classified: ClassifiedLead, scripts: GeneratedScripts) -> Self {
        let ClassifiedLead {
            lead,
            priority,
            archetype,
        } = classified;

        Self {
            first_name: lead.first_name,
            last_name: lead.last_name,
            company: lead.company,
            title: lead.title,
            email: lead.email,
            linkedin: lead.linkedin,
            priority,
            archetype,
            email_subject: scripts.email_subject,
            email_body: scripts.email_body,
            linkedin_message: scripts.linkedin_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const RESULT_COLUMNS: [&str; 11] = [
        "First Name",
        "Last Name",
        "Company",
        "Title",
        "Email",
        "LinkedIn",
        "Priority",
        "Company DNA",
        "Email Subject",
        "Email Body",
        "LinkedIn Message",
    ];

    #[test]
    fn test_cell_text_forms() {
        assert_eq!(CellValue::Null.as_text(), None);
        assert_eq!(CellValue::Integer(800).as_text().as_deref(), Some("800"));
        assert_eq!(CellValue::Float(800.0).as_text().as_deref(), Some("800"));
        assert_eq!(CellValue::Float(12.5).as_text().as_deref(), Some("12.5"));
        assert_eq!(CellValue::Bool(true).as_text().as_deref(), Some("true"));
    }

    #[test]
    fn test_records_from_json() {
        let table = json!([
            {"name": "Jane Doe", "employees": 800},
            {"company": "Acme", "active": true, "notes": null}
        ]);

        let records = records_from_json(&table).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].len(), 2);
        assert!(records[1]
            .iter()
            .any(|(k, v)| k == "notes" && *v == CellValue::Null));
    }

    #[test]
    fn test_structural_failures() {
        let err = records_from_json(&json!({"name": "x"})).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        let err = records_from_json(&json!([{"name": "x"}, ["not", "a", "row"]])).unwrap_err();
        assert!(matches!(err, Error::NotRowShaped { index: 1, found: "array" }));

        let err = records_from_json(&json!([{"name": {"first": "x"}}])).unwrap_err();
        match err {
            Error::NonScalarField { index, column } => {
                assert_eq!(index, 0);
                assert_eq!(column, "name");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_archetype_labels() {
        assert_eq!(Archetype::from_label("enterprise"), Some(Archetype::Enterprise));
        assert_eq!(
            Archetype::from_label(" Agency/Consultancy "),
            Some(Archetype::AgencyConsultancy)
        );
        assert_eq!(Archetype::from_label("Conglomerate"), None);
        assert_eq!(Archetype::from_label_or_default(None), Archetype::MidMarket);
        assert_eq!(
            Archetype::from_label_or_default(Some("Conglomerate")),
            Archetype::MidMarket
        );
    }

    #[test]
    fn test_result_row_headers() {
        let row = ResultRow::assemble(
            ClassifiedLead {
                lead: CanonicalLead {
                    first_name: "Jane".to_string(),
                    last_name: "Doe".to_string(),
                    company: "Acme".to_string(),
                    title: "VP".to_string(),
                    email: String::new(),
                    linkedin: String::new(),
                    employees: "800".to_string(),
                },
                priority: Priority::Hot,
                archetype: Archetype::Enterprise,
            },
            GeneratedScripts {
                email_subject: "s".to_string(),
                email_body: "b".to_string(),
                linkedin_message: "m".to_string(),
            },
        );

        let value = serde_json::to_value(&row).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), RESULT_COLUMNS.len());
        for column in RESULT_COLUMNS {
            assert!(object.contains_key(column), "missing column {column}");
        }
        assert_eq!(object["Priority"], "P1 - Hot");
        assert_eq!(object["Company DNA"], "Enterprise");

        // Struct field order is the export column order
        let text = serde_json::to_string(&row).unwrap();
        let positions: Vec<usize> = RESULT_COLUMNS
            .iter()
            .map(|column| text.find(&format!("\"{column}\":")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
