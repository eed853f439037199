use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;

use sudosnap_core::frame::Region;
use sudosnap_core::pipeline::{run_pipeline_reported, PipelineConfig};
use sudosnap_core::replay::{ReplayAction, ScriptDriver};
use sudosnap_core::solver::BacktrackingSolver;
use sudosnap_core::source::ImageFileSource;

use crate::progress::ConsoleProgress;
use crate::recognizer::TesseractRecognizer;
use crate::summary;

use super::extract::tuning;

#[derive(Args)]
pub struct RunArgs {
    /// Screenshot image file
    pub file: PathBuf,

    /// Pipeline config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Screen x of the screenshot's top-left corner
    #[arg(long, default_value = "0")]
    pub x: i32,

    /// Screen y of the screenshot's top-left corner
    #[arg(long, default_value = "0")]
    pub y: i32,

    /// Pixels trimmed from each side of every cell
    #[arg(long, default_value = "3")]
    pub inset: usize,

    /// Erase ink outside the board border before classification
    #[arg(long)]
    pub mask: bool,

    /// Use the flood-fill blank check instead of plain ink presence
    #[arg(long)]
    pub flood_blank: bool,

    /// Print the recorded click/keystroke script
    #[arg(long)]
    pub print_actions: bool,
}

pub fn run(args: &RunArgs) -> Result<()> {
    let config = build_config(args)?;

    let mut source = ImageFileSource::new(&args.file);
    let recognizer = TesseractRecognizer::new()?;
    let mut driver = ScriptDriver::default();

    let (reporter, bar) = ConsoleProgress::new()?;
    let report = run_pipeline_reported(
        &config,
        &mut source,
        &recognizer,
        &BacktrackingSolver,
        &mut driver,
        Arc::new(reporter),
    )?;
    bar.finish_with_message("Done");

    summary::print_run_summary(&report);

    if args.print_actions {
        for action in &driver.actions {
            match action {
                ReplayAction::Click(p) => println!("click {:.0} {:.0}", p.x, p.y),
                ReplayAction::TypeKey(key) => println!("key {key}"),
            }
        }
    }

    Ok(())
}

fn build_config(args: &RunArgs) -> Result<PipelineConfig> {
    if let Some(ref path) = args.config {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        return toml::from_str(&contents).context("Invalid config");
    }

    let (width, height) = image::image_dimensions(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let mut config = PipelineConfig::new(Region {
        x: args.x,
        y: args.y,
        width,
        height,
    });
    (config.extraction, config.blank) = tuning(None, args.inset, args.mask, args.flood_blank)?;
    Ok(config)
}
