//! Five-stage journey progress derived from what the user has done so far

use serde::{Deserialize, Serialize};
use std::fmt;
use wayfinder_domain::MatterStatus;

/// Journey stage, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JourneyStage {
    /// Understand the legal situation
    Understand,
    /// Review the available forums
    Options,
    /// Gather and organize evidence
    Prepare,
    /// File or send documents
    Act,
    /// Reach an outcome
    Resolve,
}

impl JourneyStage {
    /// All stages in order
    pub const ALL: [JourneyStage; 5] = [
        JourneyStage::Understand,
        JourneyStage::Options,
        JourneyStage::Prepare,
        JourneyStage::Act,
        JourneyStage::Resolve,
    ];

    /// Display title
    pub fn title(&self) -> &'static str {
        match self {
            JourneyStage::Understand => "Understand your situation",
            JourneyStage::Options => "Explore your options",
            JourneyStage::Prepare => "Prepare your case",
            JourneyStage::Act => "Take action",
            JourneyStage::Resolve => "Resolve the matter",
        }
    }

    /// Fixed guidance for what to do in this stage
    pub fn next_step(&self) -> &'static str {
        match self {
            JourneyStage::Understand => {
                "Describe what happened so your matter can be classified."
            }
            JourneyStage::Options => {
                "Review the recommended forum and the alternatives before choosing a path."
            }
            JourneyStage::Prepare => {
                "Upload evidence such as letters, photos, receipts and notices."
            }
            JourneyStage::Act => {
                "Generate your documents, review every section, then file or send them."
            }
            JourneyStage::Resolve => {
                "Attend any hearing or mediation and keep records of every outcome."
            }
        }
    }
}

impl fmt::Display for JourneyStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// What the caller knows about the matter right now
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyContext {
    /// The matter has been classified
    pub has_classification: bool,
    /// Number of indexed evidence items
    pub evidence_count: usize,
    /// Documents have been generated
    pub documents_generated: bool,
}

impl JourneyContext {
    /// Context for a matter in `status`; only `Intake` counts as unclassified
    pub fn new(status: MatterStatus, evidence_count: usize, documents_generated: bool) -> Self {
        Self {
            has_classification: status != MatterStatus::Intake,
            evidence_count,
            documents_generated,
        }
    }
}

/// One stage in the progress report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyStep {
    /// Stage
    pub stage: JourneyStage,
    /// Display title
    pub title: String,
    /// Whether the stage is complete
    pub complete: bool,
    /// Next-step guidance
    pub next_step: String,
}

/// Progress report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyProgress {
    /// First incomplete stage
    pub current_stage: JourneyStage,
    /// Completed stages as a percentage of five
    pub percent_complete: f64,
    /// All five stages
    pub steps: Vec<JourneyStep>,
}

/// Stateless progress builder
#[derive(Debug, Clone, Copy, Default)]
pub struct JourneyTracker;

impl JourneyTracker {
    /// Create a tracker
    pub fn new() -> Self {
        Self
    }

    /// Compute progress from the given context
    ///
    /// Resolve is never marked complete here, so the current stage is at
    /// most Resolve.
    pub fn build_progress(&self, ctx: &JourneyContext) -> JourneyProgress {
        let steps: Vec<JourneyStep> = JourneyStage::ALL
            .into_iter()
            .map(|stage| JourneyStep {
                stage,
                title: stage.title().to_string(),
                complete: is_complete(stage, ctx),
                next_step: stage.next_step().to_string(),
            })
            .collect();

        let completed = steps.iter().filter(|s| s.complete).count();
        let current_stage = steps
            .iter()
            .find(|s| !s.complete)
            .map_or(JourneyStage::Resolve, |s| s.stage);

        JourneyProgress {
            current_stage,
            percent_complete: (completed * 100) as f64 / JourneyStage::ALL.len() as f64,
            steps,
        }
    }
}

fn is_complete(stage: JourneyStage, ctx: &JourneyContext) -> bool {
    match stage {
        JourneyStage::Understand | JourneyStage::Options => ctx.has_classification,
        JourneyStage::Prepare => ctx.evidence_count > 0,
        JourneyStage::Act => ctx.documents_generated,
        JourneyStage::Resolve => false,
    }
}
