//! One matter from intake to document generation.

use crate::{SdkError, Wayfinder};
use chrono::NaiveDate;
use std::path::Path;
use tracing::info;
use wayfinder_classifier::MatterInput;
use wayfinder_domain::{EvidenceItem, ForumMap, MatterClassification, MatterStatus, Provenance};
use wayfinder_evidence::{EvidenceIndexer, TimelineEvent, TimelineGenerator};
use wayfinder_guidance::{ModuleInput, ModuleOutput};
use wayfinder_router::{ForumRouter, JourneyContext, JourneyProgress, JourneyTracker, RouteInput};

/// A classified matter with its evidence
///
/// Borrows the engine for reference data. Routing results are recomputed on
/// every call and not stored.
pub struct MatterSession<'a> {
    engine: &'a Wayfinder,
    input: MatterInput,
    classification: MatterClassification,
    evidence: EvidenceIndexer,
    documents_generated: bool,
}

impl<'a> MatterSession<'a> {
    pub(crate) fn open(engine: &'a Wayfinder, input: MatterInput) -> Self {
        let classification = engine.classifier().classify(&input);
        info!(
            matter = %classification.id,
            domain = classification.domain.as_str(),
            pillar = classification.pillar.as_str(),
            "Opened matter"
        );
        Self {
            engine,
            input,
            classification,
            evidence: EvidenceIndexer::new(),
            documents_generated: false,
        }
    }

    /// Current classification
    pub fn classification(&self) -> &MatterClassification {
        &self.classification
    }

    /// Intake data the classification was built from
    pub fn input(&self) -> &MatterInput {
        &self.input
    }

    /// Re-classify with new intake data, keeping the matter id and evidence
    pub fn reclassify(&mut self, input: MatterInput) -> &MatterClassification {
        self.classification = self
            .engine
            .classifier()
            .reclassify(&self.classification, &input);
        self.input = input;
        self.documents_generated = false;
        &self.classification
    }

    /// Route to a first-instance forum
    pub fn route(&mut self) -> Result<ForumMap, SdkError> {
        self.route_with(false, false)
    }

    /// Route as an appeal or a judicial review
    pub fn route_with(
        &mut self,
        is_appeal: bool,
        is_judicial_review: bool,
    ) -> Result<ForumMap, SdkError> {
        let mut route_input = RouteInput::from(&self.classification);
        route_input.is_appeal = is_appeal;
        route_input.is_judicial_review = is_judicial_review;

        let map = ForumRouter::new(self.engine.registry(), self.engine.routing()).route(&route_input)?;
        if self.classification.status == MatterStatus::Classified {
            self.classification.status = MatterStatus::Routed;
        }
        Ok(map)
    }

    /// Index evidence content
    pub fn add_evidence(
        &mut self,
        filename: &str,
        bytes: &[u8],
        provenance: Provenance,
        date: Option<NaiveDate>,
    ) -> EvidenceItem {
        self.evidence.add_item(filename, bytes, provenance, date)
    }

    /// Index an evidence file from disk
    pub fn add_evidence_file(
        &mut self,
        path: impl AsRef<Path>,
        provenance: Provenance,
    ) -> Result<EvidenceItem, SdkError> {
        Ok(self.evidence.add_file(path, provenance)?)
    }

    /// Indexed evidence in insertion order
    pub fn evidence(&self) -> &[EvidenceItem] {
        self.evidence.items()
    }

    /// Evidence index, for hash lookups and verification
    pub fn evidence_index(&self) -> &EvidenceIndexer {
        &self.evidence
    }

    /// Key dates and dated evidence, oldest first
    pub fn timeline(&self) -> Vec<TimelineEvent> {
        TimelineGenerator::new().generate(&self.classification, self.evidence.items())
    }

    /// Timeline events within `within_days` of `today`
    pub fn upcoming(&self, today: NaiveDate, within_days: u64) -> Vec<TimelineEvent> {
        let generator = TimelineGenerator::new();
        let events = generator.generate(&self.classification, self.evidence.items());
        generator
            .upcoming(&events, today, within_days)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Generate guidance documents with the module for the matter's domain
    pub fn generate_documents(&mut self) -> Result<ModuleOutput, SdkError> {
        let input = ModuleInput::new(&self.classification, self.evidence.items())
            .with_description(&self.input.description);
        let output = self.engine.modules().generate(&input)?;

        self.documents_generated = true;
        if self.classification.status != MatterStatus::Closed {
            self.classification.status = MatterStatus::Prepared;
        }
        Ok(output)
    }

    /// Journey progress for this matter
    pub fn progress(&self) -> JourneyProgress {
        JourneyTracker::new().build_progress(&JourneyContext::new(
            self.classification.status,
            self.evidence.len(),
            self.documents_generated,
        ))
    }

    /// Mark the matter closed
    pub fn close(&mut self) {
        self.classification.status = MatterStatus::Closed;
    }
}
