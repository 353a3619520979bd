//! Classifier - priority tier from title, Company DNA from size and name.

use narrative_core::{Archetype, CanonicalLead, ClassifiedLead, Priority};
use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;

/// One ordered rule: any keyword found in the text selects `tag`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule<T> {
    pub tag: T,
    pub keywords: Vec<String>,
}

impl<T: Copy> KeywordRule<T> {
    pub fn new(tag: T, keywords: &[&str]) -> Self {
        Self {
            tag,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// `text` must already be lower-cased
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| text.contains(k.as_str()))
    }
}

/// First rule with a matching keyword, in list order
fn first_match<T: Copy>(rules: &[KeywordRule<T>], text: &str) -> Option<T> {
    rules.iter().find(|rule| rule.matches(text)).map(|rule| rule.tag)
}

/// Employee-count thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeBands {
    /// Counts below this are startups
    pub startup_below: i64,
    /// Counts at or above this are enterprises
    pub enterprise_from: i64,
}

impl SizeBands {
    pub fn classify(&self, employees: i64) -> Archetype {
        if employees < self.startup_below {
            Archetype::HighGrowthStartup
        } else if employees < self.enterprise_from {
            Archetype::MidMarket
        } else {
            Archetype::Enterprise
        }
    }
}

impl Default for SizeBands {
    fn default() -> Self {
        Self {
            startup_below: 50,
            enterprise_from: 500,
        }
    }
}

/// Static rule tables driving both classifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierRules {
    pub size_bands: SizeBands,
    /// Company-name rules, tried when no employee count parses
    pub archetype_keywords: Vec<KeywordRule<Archetype>>,
    /// Title rules, highest tier first
    pub priority_tiers: Vec<KeywordRule<Priority>>,
    pub default_archetype: Archetype,
    pub default_priority: Priority,
}

impl Default for ClassifierRules {
    fn default() -> Self {
        Self {
            size_bands: SizeBands::default(),
            archetype_keywords: vec![
                KeywordRule::new(
                    Archetype::AgencyConsultancy,
                    &["consulting", "agency", "partners", "group"],
                ),
                KeywordRule::new(
                    Archetype::Enterprise,
                    &["inc", "corp", "global", "international"],
                ),
            ],
            priority_tiers: vec![
                KeywordRule::new(
                    Priority::Hot,
                    &["ceo", "cro", "cmo", "coo", "chief", "vp", "vice president", "head of"],
                ),
                KeywordRule::new(Priority::Warm, &["director", "senior", "manager", "lead"]),
            ],
            default_archetype: Archetype::MidMarket,
            default_priority: Priority::Nurture,
        }
    }
}

/// Parse an employee count such as `"1,200+"`. Anything else is no signal.
///
/// Counts too large for `i64` saturate, so they still land in a size band.
pub fn parse_employee_count(employees: &str) -> Option<i64> {
    let digits: String = employees
        .chars()
        .filter(|c| *c != ',' && *c != '+')
        .collect();

    match digits.trim().parse::<i64>() {
        Ok(count) => Some(count),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Rule-based classifier. Pure; holds only immutable tables.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: ClassifierRules,
}

impl Classifier {
    pub fn new(mut rules: ClassifierRules) -> Self {
        // Matching runs against lower-cased text
        for rule in &mut rules.archetype_keywords {
            lowercase_keywords(&mut rule.keywords);
        }
        for rule in &mut rules.priority_tiers {
            lowercase_keywords(&mut rule.keywords);
        }
        Self { rules }
    }

    /// Size rule first, then company-name keywords, then the default
    pub fn detect_archetype(&self, lead: &CanonicalLead) -> Archetype {
        if let Some(count) = parse_employee_count(&lead.employees) {
            return self.rules.size_bands.classify(count);
        }

        let company = lead.company.to_lowercase();
        first_match(&self.rules.archetype_keywords, &company)
            .unwrap_or(self.rules.default_archetype)
    }

    pub fn assign_priority(&self, lead: &CanonicalLead) -> Priority {
        let title = lead.title.to_lowercase();
        first_match(&self.rules.priority_tiers, &title).unwrap_or(self.rules.default_priority)
    }

    /// Classify with auto-detected Company DNA
    pub fn classify(&self, lead: CanonicalLead) -> ClassifiedLead {
        let archetype = self.detect_archetype(&lead);
        self.classify_as(lead, archetype)
    }

    /// Classify with a caller-assigned Company DNA
    pub fn classify_as(&self, lead: CanonicalLead, archetype: Archetype) -> ClassifiedLead {
        let priority = self.assign_priority(&lead);
        ClassifiedLead {
            lead,
            priority,
            archetype,
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(ClassifierRules::default())
    }
}

fn lowercase_keywords(keywords: &mut [String]) {
    for keyword in keywords {
        *keyword = keyword.to_lowercase();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(company: &str, title: &str, employees: &str) -> CanonicalLead {
        CanonicalLead {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            company: company.to_string(),
            title: title.to_string(),
            email: String::new(),
            linkedin: String::new(),
            employees: employees.to_string(),
        }
    }

    #[test]
    fn test_size_bands() {
        let classifier = Classifier::default();
        assert_eq!(
            classifier.detect_archetype(&lead("Acme", "", "45")),
            Archetype::HighGrowthStartup
        );
        assert_eq!(
            classifier.detect_archetype(&lead("Acme", "", "49")),
            Archetype::HighGrowthStartup
        );
        assert_eq!(
            classifier.detect_archetype(&lead("Acme", "", "50")),
            Archetype::MidMarket
        );
        assert_eq!(
            classifier.detect_archetype(&lead("Acme", "", "120")),
            Archetype::MidMarket
        );
        assert_eq!(
            classifier.detect_archetype(&lead("Acme", "", "499")),
            Archetype::MidMarket
        );
        assert_eq!(
            classifier.detect_archetype(&lead("Acme", "", "500")),
            Archetype::Enterprise
        );
        assert_eq!(
            classifier.detect_archetype(&lead("Acme", "", "10,000+")),
            Archetype::Enterprise
        );
    }

    #[test]
    fn test_parse_employee_count() {
        assert_eq!(parse_employee_count("1,200+"), Some(1200));
        assert_eq!(parse_employee_count(" 45 "), Some(45));
        assert_eq!(parse_employee_count(""), None);
        assert_eq!(parse_employee_count("51-200"), None);
        assert_eq!(parse_employee_count("lots"), None);
        assert_eq!(parse_employee_count("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_employee_count("-99999999999999999999"), Some(i64::MIN));
    }

    #[test]
    fn test_oversized_count_uses_size_rule() {
        let classifier = Classifier::default();
        assert_eq!(
            classifier.detect_archetype(&lead("Acme Partners", "", "99999999999999999999")),
            Archetype::Enterprise
        );
        assert_eq!(
            classifier.detect_archetype(&lead("Acme Partners", "", "99,999,999,999,999,999,999+")),
            Archetype::Enterprise
        );
    }

    #[test]
    fn test_keyword_rules_when_size_unknown() {
        let classifier = Classifier::default();
        assert_eq!(
            classifier.detect_archetype(&lead("Acme Partners", "", "")),
            Archetype::AgencyConsultancy
        );
        assert_eq!(
            classifier.detect_archetype(&lead("Globex International", "", "")),
            Archetype::Enterprise
        );
        // Agency keywords are checked before enterprise keywords
        assert_eq!(
            classifier.detect_archetype(&lead("Acme Consulting Inc", "", "n/a")),
            Archetype::AgencyConsultancy
        );
        assert_eq!(
            classifier.detect_archetype(&lead("Bakery", "", "")),
            Archetype::MidMarket
        );
    }

    #[test]
    fn test_size_rule_beats_keywords() {
        let classifier = Classifier::default();
        assert_eq!(
            classifier.detect_archetype(&lead("Acme Inc", "", "30")),
            Archetype::HighGrowthStartup
        );
    }

    #[test]
    fn test_priority_tiers() {
        let classifier = Classifier::default();
        assert_eq!(classifier.assign_priority(&lead("", "VP of Sales", "")), Priority::Hot);
        assert_eq!(
            classifier.assign_priority(&lead("", "VP, Director of Sales", "")),
            Priority::Hot
        );
        assert_eq!(
            classifier.assign_priority(&lead("", "Head of Marketing", "")),
            Priority::Hot
        );
        assert_eq!(
            classifier.assign_priority(&lead("", "Senior Account Manager", "")),
            Priority::Warm
        );
        assert_eq!(
            classifier.assign_priority(&lead("", "Account Executive", "")),
            Priority::Nurture
        );
        assert_eq!(classifier.assign_priority(&lead("", "", "")), Priority::Nurture);
    }

    #[test]
    fn test_classify_as_keeps_assigned_archetype() {
        let classifier = Classifier::default();
        let classified = classifier.classify_as(lead("Acme", "CEO", "10"), Archetype::Enterprise);
        assert_eq!(classified.archetype, Archetype::Enterprise);
        assert_eq!(classified.priority, Priority::Hot);
    }

    #[test]
    fn test_custom_rules_are_lowercased() {
        let mut rules = ClassifierRules::default();
        rules
            .priority_tiers
            .insert(0, KeywordRule::new(Priority::Hot, &["Founder"]));
        let classifier = Classifier::new(rules);
        assert_eq!(
            classifier.assign_priority(&lead("", "Co-Founder", "")),
            Priority::Hot
        );
    }

    #[test]
    fn test_rules_deserialize_with_defaults() {
        let rules: ClassifierRules =
            serde_json::from_str(r#"{"size_bands": {"startup_below": 20, "enterprise_from": 1000}}"#)
                .unwrap();
        assert_eq!(rules.size_bands.startup_below, 20);
        assert_eq!(rules.priority_tiers.len(), 2);

        let classifier = Classifier::new(rules);
        assert_eq!(
            classifier.detect_archetype(&lead("Acme", "", "30")),
            Archetype::MidMarket
        );
    }
}
