//! Outreach templates, one bundle per Company DNA.

use narrative_core::Archetype;

/// Values interpolated into every template
#[derive(Debug, Clone, Copy)]
pub struct TemplateVars<'a> {
    pub first_name: &'a str,
    pub company: &'a str,
    /// The archetype's leading pain point
    pub pain_point: &'a str,
    pub value_prop: &'a str,
    pub sender_name: &'a str,
}

/// Subject-line options, preferred first
pub fn subject_lines(archetype: Archetype, vars: &TemplateVars<'_>) -> [String; 3] {
    let TemplateVars {
        first_name,
        company,
        value_prop,
        ..
    } = *vars;

    match archetype {
        Archetype::HighGrowthStartup => [
            format!("{first_name} - scaling {company}'s revenue engine?"),
            format!("Quick win for {company}'s growth"),
            format!("{first_name}, {company} + {value_prop}?"),
        ],
        Archetype::Enterprise => [
            format!("Strategic alignment: {company} revenue operations"),
            format!("{first_name} - optimizing {company}'s GTM execution"),
            format!("Enterprise {value_prop} for {company}"),
        ],
        Archetype::MidMarket => [
            format!("{first_name} - {company}'s next growth lever"),
            format!("Helping {company} scale smarter"),
            format!("{first_name}, quick question about {company}"),
        ],
        Archetype::AgencyConsultancy => [
            format!("Partnership opportunity: {company}"),
            format!("{first_name} - elevating {company}'s client outcomes"),
            format!("For {company}: {value_prop}"),
        ],
    }
}

/// Multi-line email body
pub fn email_body(archetype: Archetype, vars: &TemplateVars<'_>) -> String {
    let TemplateVars {
        first_name,
        company,
        pain_point,
        value_prop,
        sender_name,
    } = *vars;

    match archetype {
        Archetype::HighGrowthStartup => format!(
            r#"Hi {first_name},

Saw {company} is making moves — congrats on the momentum.

I've been helping fast-growing teams like yours solve {pain_point} through {value_prop}. The results: faster pipeline, cleaner data, and sales teams that actually trust their CRM.

Would a 15-minute call this week make sense? Happy to share a quick framework that's worked for similar companies.

Best,
{sender_name}"#
        ),
        Archetype::Enterprise => format!(
            r#"Hi {first_name},

I've been following {company}'s trajectory and wanted to reach out with a relevant observation.

Many enterprise revenue leaders I work with are navigating {pain_point} while trying to drive predictable growth. I specialize in {value_prop} — helping teams like yours turn operational complexity into competitive advantage.

Would you be open to a brief conversation to explore alignment?

Best regards,
{sender_name}"#
        ),
        Archetype::MidMarket => format!(
            r#"Hi {first_name},

Quick note — I work with mid-market companies like {company} on {value_prop}.

The common challenge I see: {pain_point}. The solution doesn't have to be complex.

If this resonates, I'd love to share a framework that's helped similar teams. 15 minutes — no pitch, just value.

Best,
{sender_name}"#
        ),
        Archetype::AgencyConsultancy => format!(
            r#"Hi {first_name},

I came across {company} and was impressed by your work.

I partner with agencies and consultancies on {value_prop} — specifically helping with {pain_point}. It's often the difference between good delivery and exceptional client outcomes.

Would you be open to a quick conversation about how we might collaborate?

Best,
{sender_name}"#
        ),
    }
}

/// Connection request text, before the length cap is applied
pub fn connection_message(archetype: Archetype, vars: &TemplateVars<'_>) -> String {
    let TemplateVars {
        first_name,
        company,
        value_prop,
        ..
    } = *vars;

    match archetype {
        Archetype::HighGrowthStartup => format!(
            "Hi {first_name} — impressed by {company}'s growth. I work on {value_prop} for scaling teams. \
             Would love to connect and share ideas."
        ),
        Archetype::Enterprise => format!(
            "Hi {first_name} — I help enterprise revenue teams with {value_prop}. \
             Your work at {company} caught my attention. Let's connect."
        ),
        Archetype::MidMarket => format!(
            "Hi {first_name} — {company} looks like a great fit for some ideas I have on {value_prop}. \
             Would love to connect."
        ),
        Archetype::AgencyConsultancy => format!(
            "Hi {first_name} — I partner with agencies on {value_prop}. \
             {company}'s approach resonates. Let's connect?"
        ),
    }
}
