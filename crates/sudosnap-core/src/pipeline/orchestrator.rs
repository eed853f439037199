use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use crate::board::{locate, locate_masked};
use crate::classify::{classify_cells, BlankCheckConfig, Recognizer};
use crate::error::Result;
use crate::frame::{BinaryImage, BoundingBox, ColorFrame};
use crate::grid::PuzzleGrid;
use crate::preprocess::{luminance, preprocess};
use crate::replay::{replay_solution, InputDriver};
use crate::segment::segment;
use crate::solver::Solver;
use crate::source::FrameSource;

use super::config::{ExtractionConfig, NoiseStrategy, PipelineConfig};
use super::types::{NoOpReporter, PipelineStage, ProgressReporter, RunReport, StageTiming};

/// Run the full pipeline with a thread-safe progress reporter.
///
/// Single shot and fail fast: the first failing stage aborts the run, no
/// stage is retried, and there is no partial-success mode.
pub fn run_pipeline_reported(
    config: &PipelineConfig,
    source: &mut dyn FrameSource,
    recognizer: &dyn Recognizer,
    solver: &dyn Solver,
    input: &mut dyn InputDriver,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<RunReport> {
    let mut timings = Vec::new();

    let frame = timed(PipelineStage::Capturing, &reporter, &mut timings, || {
        source.capture(&config.region)
    })?;
    info!(
        width = frame.width(),
        height = frame.height(),
        "Frame captured"
    );

    let (gray, binary) = timed(PipelineStage::Preprocessing, &reporter, &mut timings, || {
        let gray = luminance(&frame);
        let binary = preprocess(&gray)?;
        Ok((gray, binary))
    })?;

    let (bbox, binary) = timed(PipelineStage::Locating, &reporter, &mut timings, || {
        locate_board(binary, &config.extraction.noise)
    })?;
    info!(
        x = bbox.x,
        y = bbox.y,
        width = bbox.width,
        height = bbox.height,
        "Board located"
    );

    let cells = timed(PipelineStage::Segmenting, &reporter, &mut timings, || {
        Ok(segment(&bbox, config.extraction.cell_inset))
    })?;

    let unsolved = timed(PipelineStage::Classifying, &reporter, &mut timings, || {
        classify_cells(&binary, &gray, &cells, recognizer, &config.blank)
    })?;
    info!(givens = unsolved.given_count(), "Grid extracted");

    let solved = timed(PipelineStage::Solving, &reporter, &mut timings, || {
        solver.solve(&unsolved)
    })?;

    let entered = timed(PipelineStage::Replaying, &reporter, &mut timings, || {
        replay_solution(&unsolved, &solved, &bbox, config.screen_offset(), input)
    })?;

    Ok(RunReport {
        bounding_box: bbox,
        unsolved,
        solved,
        entered,
        timings,
    })
}

/// Run the full pipeline without progress reporting.
pub fn run_pipeline(
    config: &PipelineConfig,
    source: &mut dyn FrameSource,
    recognizer: &dyn Recognizer,
    solver: &dyn Solver,
    input: &mut dyn InputDriver,
) -> Result<RunReport> {
    run_pipeline_reported(config, source, recognizer, solver, input, Arc::new(NoOpReporter))
}

/// Extraction-only flow: color frame in, bounding box and unsolved grid out.
/// Used when the caller wants the symbolic grid without solving or replay.
pub fn extract_board(
    frame: &ColorFrame,
    extraction: &ExtractionConfig,
    blank: &BlankCheckConfig,
    recognizer: &dyn Recognizer,
) -> Result<(BoundingBox, PuzzleGrid)> {
    let gray = luminance(frame);
    let binary = preprocess(&gray)?;
    let (bbox, binary) = locate_board(binary, &extraction.noise)?;
    let cells = segment(&bbox, extraction.cell_inset);
    let grid = classify_cells(&binary, &gray, &cells, recognizer, blank)?;
    Ok((bbox, grid))
}

/// Apply the configured noise strategy; both variants go through the same
/// locator and hand the segmenter one binary image and one bounding box.
fn locate_board(
    binary: BinaryImage,
    noise: &NoiseStrategy,
) -> Result<(BoundingBox, BinaryImage)> {
    let (h, w) = binary.dim();
    let (bbox, binary) = match noise {
        NoiseStrategy::InsetOnly => (locate(&binary)?, binary),
        NoiseStrategy::MaskAndClean => {
            let (bbox, cleaned) = locate_masked(&binary)?;
            (bbox, cleaned)
        }
    };
    bbox.validated(w, h)?;
    Ok((bbox, binary))
}

fn timed<T>(
    stage: PipelineStage,
    reporter: &Arc<dyn ProgressReporter>,
    timings: &mut Vec<StageTiming>,
    f: impl FnOnce() -> Result<T>,
) -> Result<T> {
    reporter.begin_stage(stage, None);
    let started = Instant::now();
    let out = f()?;
    timings.push(StageTiming {
        stage,
        duration: started.elapsed(),
    });
    reporter.finish_stage();
    Ok(out)
}
