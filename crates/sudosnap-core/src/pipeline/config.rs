use serde::{Deserialize, Serialize};

use crate::classify::BlankCheckConfig;
use crate::consts::DEFAULT_CELL_INSET;
use crate::frame::{Region, ScreenPoint};

/// Full pipeline configuration. Screen-specific geometry (the capture
/// region, whose origin doubles as the replay offset) is supplied by the
/// caller, never hardcoded in the pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub region: Region,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub blank: BlankCheckConfig,
}

impl PipelineConfig {
    pub fn new(region: Region) -> Self {
        Self {
            region,
            extraction: ExtractionConfig::default(),
            blank: BlankCheckConfig::default(),
        }
    }

    /// Screen-space offset added when mapping board pixels back to the
    /// screen: the capture region's origin.
    pub fn screen_offset(&self) -> ScreenPoint {
        ScreenPoint {
            x: self.region.x as f64,
            y: self.region.y as f64,
        }
    }
}

/// Noise-reduction strategy applied during board extraction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum NoiseStrategy {
    /// Trust the bounding box and rely on the per-cell inset to exclude
    /// grid-line ink.
    #[default]
    InsetOnly,
    /// Additionally erase all ink outside the board's filled outer contour
    /// before segmentation. Use when background clutter degrades OCR.
    MaskAndClean,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExtractionConfig {
    #[serde(default)]
    pub noise: NoiseStrategy,
    /// Pixels trimmed from each side of every cell before classification.
    #[serde(default = "default_cell_inset")]
    pub cell_inset: usize,
}

fn default_cell_inset() -> usize {
    DEFAULT_CELL_INSET
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            noise: NoiseStrategy::default(),
            cell_inset: DEFAULT_CELL_INSET,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::BlankStrategy;

    #[test]
    fn defaults_apply_to_missing_fields() {
        let json = r#"{ "region": { "x": 300, "y": 342, "width": 550, "height": 550 } }"#;
        let config: PipelineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.extraction.noise, NoiseStrategy::InsetOnly);
        assert_eq!(config.extraction.cell_inset, 3);
        assert_eq!(config.blank.strategy, BlankStrategy::InkPresence);
    }

    #[test]
    fn screen_offset_is_region_origin() {
        let config = PipelineConfig::new(Region {
            x: 300,
            y: 342,
            width: 550,
            height: 550,
        });
        let offset = config.screen_offset();
        assert_eq!(offset.x, 300.0);
        assert_eq!(offset.y, 342.0);
    }

    #[test]
    fn config_round_trips_through_serde() {
        let config = PipelineConfig::new(Region {
            x: 0,
            y: 0,
            width: 450,
            height: 450,
        });
        let encoded = serde_json::to_string(&config).unwrap();
        let decoded: PipelineConfig = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.region, config.region);
        assert_eq!(decoded.extraction.cell_inset, config.extraction.cell_inset);
    }
}
