//! Archetype profiles: pain points, values and tone per Company DNA.

use serde::{Deserialize, Serialize};

use crate::types::Archetype;

/// Messaging profile for one archetype
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeProfile {
    /// Pain points, most pressing first
    pub pain_points: Vec<String>,
    /// What this kind of company values
    pub values: Vec<String>,
    /// Tone descriptor for copy aimed at this archetype
    pub tone: String,
}

impl ArchetypeProfile {
    pub fn standard(archetype: Archetype) -> Self {
        let (pain_points, values, tone): (&[&str], &[&str], &str) = match archetype {
            Archetype::HighGrowthStartup => (
                &["scaling quickly", "resource constraints", "proving product-market fit"],
                &["speed", "innovation", "disruption"],
                "energetic and bold",
            ),
            Archetype::Enterprise => (
                &["legacy systems", "cross-team alignment", "compliance requirements"],
                &["stability", "proven solutions", "risk mitigation"],
                "professional and strategic",
            ),
            Archetype::MidMarket => (
                &["growing pains", "process optimization", "competitive pressure"],
                &["efficiency", "growth", "partnership"],
                "balanced and consultative",
            ),
            Archetype::AgencyConsultancy => (
                &["client delivery", "billable utilization", "differentiation"],
                &["expertise", "client success", "innovation"],
                "collaborative and expert",
            ),
        };

        Self {
            pain_points: pain_points.iter().map(|s| s.to_string()).collect(),
            values: values.iter().map(|s| s.to_string()).collect(),
            tone: tone.to_string(),
        }
    }

    /// The pain point copy leads with; empty if the profile lists none
    pub fn primary_pain_point(&self) -> &str {
        self.pain_points.first().map(|s| s.as_str()).unwrap_or("")
    }
}

/// One profile per archetype, built once and shared read-only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileTable {
    high_growth_startup: ArchetypeProfile,
    enterprise: ArchetypeProfile,
    mid_market: ArchetypeProfile,
    agency_consultancy: ArchetypeProfile,
}

impl ProfileTable {
    pub fn standard() -> Self {
        Self {
            high_growth_startup: ArchetypeProfile::standard(Archetype::HighGrowthStartup),
            enterprise: ArchetypeProfile::standard(Archetype::Enterprise),
            mid_market: ArchetypeProfile::standard(Archetype::MidMarket),
            agency_consultancy: ArchetypeProfile::standard(Archetype::AgencyConsultancy),
        }
    }

    pub fn get(&self, archetype: Archetype) -> &ArchetypeProfile {
        match archetype {
            Archetype::HighGrowthStartup => &self.high_growth_startup,
            Archetype::Enterprise => &self.enterprise,
            Archetype::MidMarket => &self.mid_market,
            Archetype::AgencyConsultancy => &self.agency_consultancy,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Archetype, &ArchetypeProfile)> {
        Archetype::ALL.into_iter().map(move |a| (a, self.get(a)))
    }
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self::standard()
    }
}
