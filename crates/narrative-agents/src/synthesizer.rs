//! Script Synthesizer - subject, email body and connection message per lead.

use narrative_core::{ClassifiedLead, GeneratedScripts, ProfileTable, LINKEDIN_MESSAGE_LIMIT};

use crate::params::OutreachParams;
use crate::templates::{connection_message, email_body, subject_lines, TemplateVars};

/// Characters kept when a connection message is cut
const TRUNCATED_LENGTH: usize = 295;
const ELLIPSIS: &str = "...";

/// Renders the outreach scripts for classified leads
#[derive(Debug, Clone, Default)]
pub struct ScriptSynthesizer {
    profiles: ProfileTable,
}

impl ScriptSynthesizer {
    pub fn new(profiles: ProfileTable) -> Self {
        Self { profiles }
    }

    /// Render all three scripts. Never fails; missing values render empty.
    pub fn synthesize(&self, lead: &ClassifiedLead, params: &OutreachParams) -> GeneratedScripts {
        let vars = self.vars(lead, params);
        let [email_subject, ..] = self.subject_options(lead, params);

        GeneratedScripts {
            email_subject,
            email_body: email_body(lead.archetype, &vars),
            linkedin_message: cap_connection_message(connection_message(lead.archetype, &vars)),
        }
    }

    /// Every subject-line option for this lead, preferred first
    pub fn subject_options(&self, lead: &ClassifiedLead, params: &OutreachParams) -> [String; 3] {
        subject_lines(lead.archetype, &self.vars(lead, params))
    }

    fn vars<'a>(&'a self, lead: &'a ClassifiedLead, params: &'a OutreachParams) -> TemplateVars<'a> {
        TemplateVars {
            first_name: &lead.lead.first_name,
            company: &lead.lead.company,
            pain_point: self.profiles.get(lead.archetype).primary_pain_point(),
            value_prop: &params.value_prop,
            sender_name: &params.sender_name,
        }
    }
}

/// Cut messages over the limit to 295 characters plus an ellipsis
pub fn cap_connection_message(message: String) -> String {
    if message.chars().count() <= LINKEDIN_MESSAGE_LIMIT {
        return message;
    }

    let mut capped: String = message.chars().take(TRUNCATED_LENGTH).collect();
    capped.push_str(ELLIPSIS);
    capped
}
