//! Batch runner coordinating normalize → classify → synthesize over a table.

use chrono::{DateTime, Utc};
use narrative_core::{
    records_from_json, Archetype, BatchId, NormalizedRow, Priority, ProfileTable, RawRecord,
    Result, ResultRow, COMPANY_DNA_COLUMN,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::classifier::{Classifier, ClassifierRules};
use crate::params::OutreachParams;
use crate::synthesizer::ScriptSynthesizer;

/// Lead counts per priority tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrioritySummary {
    pub total: usize,
    pub hot: usize,
    pub warm: usize,
    pub nurture: usize,
}

impl PrioritySummary {
    pub fn from_rows(rows: &[ResultRow]) -> Self {
        rows.iter().fold(Self::default(), |mut summary, row| {
            summary.total += 1;
            match row.priority {
                Priority::Hot => summary.hot += 1,
                Priority::Warm => summary.warm += 1,
                Priority::Nurture => summary.nurture += 1,
            }
            summary
        })
    }

    pub fn count(&self, priority: Priority) -> usize {
        match priority {
            Priority::Hot => self.hot,
            Priority::Warm => self.warm,
            Priority::Nurture => self.nurture,
        }
    }
}

/// Result of one batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub batch_id: BatchId,
    pub generated_at: DateTime<Utc>,
    /// One row per input row, in input order
    pub rows: Vec<ResultRow>,
    pub summary: PrioritySummary,
}

/// Runs the lead pipeline over whole tables.
///
/// Rule and profile tables are fixed at construction; a runner can be reused
/// for any number of batches.
#[derive(Debug, Clone, Default)]
pub struct BatchRunner {
    classifier: Classifier,
    synthesizer: ScriptSynthesizer,
}

impl BatchRunner {
    pub fn new(rules: ClassifierRules, profiles: ProfileTable) -> Self {
        Self {
            classifier: Classifier::new(rules),
            synthesizer: ScriptSynthesizer::new(profiles),
        }
    }

    /// Process a single row
    pub fn process_record(&self, raw: &RawRecord, params: &OutreachParams) -> ResultRow {
        let row = NormalizedRow::from_raw(raw);
        let lead = row.to_lead();

        let classified = if params.auto_detect {
            self.classifier.classify(lead)
        } else {
            let assigned = Archetype::from_label_or_default(row.get(COMPANY_DNA_COLUMN));
            self.classifier.classify_as(lead, assigned)
        };

        tracing::debug!(
            company = %classified.lead.company,
            priority = %classified.priority,
            archetype = %classified.archetype,
            "Classified lead"
        );

        let scripts = self.synthesizer.synthesize(&classified, params);
        ResultRow::assemble(classified, scripts)
    }

    /// Process already validated rows, preserving count and order
    pub fn run(&self, records: &[RawRecord], params: &OutreachParams) -> BatchReport {
        let batch_id = BatchId::new();

        tracing::info!(
            "Generating scripts for {} leads (batch {}, {})",
            records.len(),
            batch_id,
            params
        );

        let rows: Vec<ResultRow> = records
            .iter()
            .map(|raw| self.process_record(raw, params))
            .collect();

        let summary = PrioritySummary::from_rows(&rows);

        tracing::info!(
            total = summary.total,
            hot = summary.hot,
            warm = summary.warm,
            nurture = summary.nurture,
            "Batch {} complete",
            batch_id
        );

        BatchReport {
            batch_id,
            generated_at: Utc::now(),
            rows,
            summary,
        }
    }

    /// Validate a JSON table, then process it.
    ///
    /// A structural problem in any row fails the batch before any row runs.
    pub fn run_json(&self, table: &Value, params: &OutreachParams) -> Result<BatchReport> {
        let records = records_from_json(table)?;
        Ok(self.run(&records, params))
    }
}
