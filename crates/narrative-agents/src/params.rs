//! Caller-supplied outreach parameters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameters shared by every row of a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutreachParams {
    /// What the sender helps companies achieve
    pub value_prop: String,
    /// Name used in email signatures
    pub sender_name: String,
    /// Detect Company DNA from size and name; otherwise read the `company_dna` column
    pub auto_detect: bool,
}

impl OutreachParams {
    pub fn new(value_prop: impl Into<String>, sender_name: impl Into<String>) -> Self {
        Self {
            value_prop: value_prop.into(),
            sender_name: sender_name.into(),
            auto_detect: true,
        }
    }

    pub fn with_auto_detect(mut self, auto_detect: bool) -> Self {
        self.auto_detect = auto_detect;
        self
    }
}

impl Default for OutreachParams {
    fn default() -> Self {
        Self {
            value_prop: "revenue operations optimization".to_string(),
            sender_name: "Leon Basin".to_string(),
            auto_detect: true,
        }
    }
}

impl fmt::Display for OutreachParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} (auto-detect: {})",
            self.sender_name,
            self.value_prop,
            if self.auto_detect { "on" } else { "off" }
        )
    }
}
