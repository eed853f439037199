use std::time::Duration;

use crate::frame::BoundingBox;
use crate::grid::PuzzleGrid;

/// Pipeline processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Capturing,
    Preprocessing,
    Locating,
    Segmenting,
    Classifying,
    Solving,
    Replaying,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Capturing => write!(f, "Capturing frame"),
            Self::Preprocessing => write!(f, "Binarizing"),
            Self::Locating => write!(f, "Locating board"),
            Self::Segmenting => write!(f, "Segmenting cells"),
            Self::Classifying => write!(f, "Classifying digits"),
            Self::Solving => write!(f, "Solving puzzle"),
            Self::Replaying => write!(f, "Replaying solution"),
        }
    }
}

/// Wall-clock duration of one completed stage.
#[derive(Clone, Copy, Debug)]
pub struct StageTiming {
    pub stage: PipelineStage,
    pub duration: Duration,
}

/// Result of a completed run.
#[derive(Clone, Debug)]
pub struct RunReport {
    pub bounding_box: BoundingBox,
    pub unsolved: PuzzleGrid,
    pub solved: PuzzleGrid,
    /// Number of cells entered during replay.
    pub entered: usize,
    pub timings: Vec<StageTiming>,
}

/// Thread-safe progress reporting for the pipeline.
///
/// Implementors can use this to drive progress bars, logging, or any other
/// UI feedback. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new pipeline stage has started. `total_items` is the number of
    /// work items in this stage (e.g., cell count), if known.
    fn begin_stage(&self, _stage: PipelineStage, _total_items: Option<usize>) {}

    /// One work item within the current stage has completed.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when `run_pipeline` delegates.
pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
