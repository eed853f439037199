use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use sudosnap_core::classify::{BlankCheckConfig, BlankStrategy};
use sudosnap_core::pipeline::{extract_board, ExtractionConfig, NoiseStrategy, PipelineConfig};
use sudosnap_core::source::load_color_image;

use crate::recognizer::TesseractRecognizer;
use crate::summary;

#[derive(Args)]
pub struct ExtractArgs {
    /// Screenshot image file
    pub file: PathBuf,

    /// Pipeline config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Pixels trimmed from each side of every cell
    #[arg(long, default_value = "3")]
    pub inset: usize,

    /// Erase ink outside the board border before classification
    #[arg(long)]
    pub mask: bool,

    /// Use the flood-fill blank check instead of plain ink presence
    #[arg(long)]
    pub flood_blank: bool,
}

pub fn run(args: &ExtractArgs) -> Result<()> {
    let (extraction, blank) = tuning(
        args.config.as_deref(),
        args.inset,
        args.mask,
        args.flood_blank,
    )?;

    let frame = load_color_image(&args.file)
        .with_context(|| format!("Failed to load screenshot {}", args.file.display()))?;
    let recognizer = TesseractRecognizer::new()?;

    let (bbox, grid) = extract_board(&frame, &extraction, &blank, &recognizer)?;
    summary::print_extract_summary(&bbox, &grid);

    Ok(())
}

/// Extraction tuning from a config file when given, otherwise from flags.
pub fn tuning(
    config: Option<&Path>,
    inset: usize,
    mask: bool,
    flood_blank: bool,
) -> Result<(ExtractionConfig, BlankCheckConfig)> {
    if let Some(path) = config {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: PipelineConfig = toml::from_str(&contents).context("Invalid config")?;
        return Ok((config.extraction, config.blank));
    }

    let extraction = ExtractionConfig {
        noise: if mask {
            NoiseStrategy::MaskAndClean
        } else {
            NoiseStrategy::InsetOnly
        },
        cell_inset: inset,
    };
    let blank = BlankCheckConfig {
        strategy: if flood_blank {
            BlankStrategy::FloodFillMean
        } else {
            BlankStrategy::InkPresence
        },
        ..BlankCheckConfig::default()
    };
    Ok((extraction, blank))
}
