pub mod config;
pub mod orchestrator;
pub mod types;

pub use config::{ExtractionConfig, NoiseStrategy, PipelineConfig};
pub use orchestrator::{extract_board, run_pipeline, run_pipeline_reported};
pub use types::{PipelineStage, ProgressReporter, RunReport, StageTiming};
