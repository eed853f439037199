use indicatif::{ProgressBar, ProgressStyle};

use sudosnap_core::pipeline::{PipelineStage, ProgressReporter};

/// One bar position per pipeline stage.
const STAGE_COUNT: u64 = 7;

/// Progress bar that advances once per completed pipeline stage.
pub struct ConsoleProgress {
    bar: ProgressBar,
}

impl ConsoleProgress {
    pub fn new() -> anyhow::Result<(Self, ProgressBar)> {
        let bar = ProgressBar::new(STAGE_COUNT);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg:20} [{bar:40}] {pos}/{len}")?
                .progress_chars("=> "),
        );
        let handle = bar.clone();
        Ok((Self { bar }, handle))
    }
}

impl ProgressReporter for ConsoleProgress {
    fn begin_stage(&self, stage: PipelineStage, _total_items: Option<usize>) {
        self.bar.set_message(stage.to_string());
    }

    fn finish_stage(&self) {
        self.bar.inc(1);
    }
}
