//! Timeline generation from key dates and dated evidence

use chrono::{Days, NaiveDate};
use serde::Serialize;
use wayfinder_domain::{EvidenceId, EvidenceItem, MatterClassification};

/// Where a timeline event came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "ref", rename_all = "snake_case")]
pub enum TimelineSource {
    /// A key date recorded at intake
    KeyDate,
    /// A dated evidence item
    Evidence(EvidenceId),
}

/// One dated event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEvent {
    /// Event date
    pub date: NaiveDate,
    /// Description
    pub label: String,
    /// Origin
    pub source: TimelineSource,
}

/// Merges key dates and evidence dates into one ordered timeline
#[derive(Debug, Clone, Copy, Default)]
pub struct TimelineGenerator;

impl TimelineGenerator {
    /// Create a generator
    pub fn new() -> Self {
        Self
    }

    /// Build the timeline, oldest first
    ///
    /// The sort is stable: on equal dates, key dates precede evidence and
    /// each keeps its input order. Undated evidence is skipped.
    pub fn generate(
        &self,
        classification: &MatterClassification,
        evidence: &[EvidenceItem],
    ) -> Vec<TimelineEvent> {
        let key_dates = classification.key_dates.iter().map(|k| TimelineEvent {
            date: k.date,
            label: k.label.clone(),
            source: TimelineSource::KeyDate,
        });
        let evidence_dates = evidence.iter().filter_map(|item| {
            item.date().map(|date| TimelineEvent {
                date,
                label: format!("Evidence: {}", item.filename()),
                source: TimelineSource::Evidence(item.id()),
            })
        });

        let mut events: Vec<TimelineEvent> = key_dates.chain(evidence_dates).collect();
        events.sort_by_key(|e| e.date);
        events
    }

    /// Events from `today` up to `within_days` ahead, inclusive
    pub fn upcoming<'a>(
        &self,
        events: &'a [TimelineEvent],
        today: NaiveDate,
        within_days: u64,
    ) -> Vec<&'a TimelineEvent> {
        let horizon = today
            .checked_add_days(Days::new(within_days))
            .unwrap_or(NaiveDate::MAX);
        events
            .iter()
            .filter(|e| e.date >= today && e.date <= horizon)
            .collect()
    }
}
